//! Snapshot: a timestamped set of file fingerprints

use crate::types::{FileDigest, FileFingerprint};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fingerprints of one scan, keyed by root-relative path
///
/// Serialized form is the baseline record:
/// `{ "timestamp": <float seconds since epoch>, "hashes": { "<path>": "<hex>" } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Creation time in seconds since the Unix epoch
    pub timestamp: f64,
    /// Relative path to content digest
    pub hashes: BTreeMap<String, FileDigest>,
}

impl Snapshot {
    /// Create a snapshot stamped with the current wall-clock time
    pub fn new(hashes: BTreeMap<String, FileDigest>) -> Self {
        Self::with_timestamp(now_epoch_seconds(), hashes)
    }

    pub fn with_timestamp(timestamp: f64, hashes: BTreeMap<String, FileDigest>) -> Self {
        Self { timestamp, hashes }
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&FileDigest> {
        self.hashes.get(path)
    }

    /// Iterate fingerprints in path order
    pub fn fingerprints(&self) -> impl Iterator<Item = FileFingerprint> + '_ {
        self.hashes.iter().map(|(path, digest)| FileFingerprint {
            path: path.clone(),
            digest: *digest,
        })
    }
}

/// Current wall-clock time in fractional seconds since the Unix epoch
pub fn now_epoch_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

pub fn epoch_seconds_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}

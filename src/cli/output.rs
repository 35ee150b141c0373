//! CLI output: error mapping from domain errors to the operator-facing message.

use crate::error::{FixityError, ScanError, StorageError};

/// Map domain errors to the message printed on stderr.
pub fn map_error(e: &FixityError) -> String {
    match e {
        FixityError::Storage(StorageError::ParseFailure { .. }) => format!(
            "error: {}\nThe baseline was left untouched. Inspect or remove it to start over.",
            e
        ),
        FixityError::Scan(ScanError::Cancelled) => {
            "error: scan interrupted; the baseline was left untouched".to_string()
        }
        _ => format!("error: {}", e),
    }
}

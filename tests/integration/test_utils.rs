//! Shared test utilities for integration tests
//!
//! Builds fixture trees and isolates the XDG environment so the global config
//! file of the machine running the tests never leaks into a run.

use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes environment variable access across tests in this binary
static ENV_MUTEX: Mutex<()> = Mutex::new(());

struct EnvState {
    vars: Vec<(&'static str, Option<String>)>,
}

const ISOLATED_VARS: &[&str] = &["HOME", "XDG_CONFIG_HOME", "XDG_DATA_HOME", "XDG_STATE_HOME"];

impl EnvState {
    fn capture() -> Self {
        Self {
            vars: ISOLATED_VARS
                .iter()
                .map(|name| (*name, std::env::var(name).ok()))
                .collect(),
        }
    }

    fn restore(self) {
        for (name, value) in self.vars {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }
}

/// Run `f` with HOME and the XDG base directories pointed into `test_dir`
pub fn with_isolated_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let env_state = EnvState::capture();

    for (name, dir) in [
        ("HOME", "home"),
        ("XDG_CONFIG_HOME", "config"),
        ("XDG_DATA_HOME", "data"),
        ("XDG_STATE_HOME", "state"),
    ] {
        let path = test_dir.path().join(dir);
        fs::create_dir_all(&path).unwrap();
        std::env::set_var(name, &path);
    }

    let result = f();
    env_state.restore();
    result
}

/// Write `content` to `root/relative`, creating parent directories
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Tree with files `a`, `b` and `c` holding "1", "2" and "3"
pub fn abc_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "a", "1");
    write_file(dir.path(), "b", "2");
    write_file(dir.path(), "c", "3");
    dir
}

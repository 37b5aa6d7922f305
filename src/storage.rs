// Stored state is never read back. Anything an earlier run left in the state
// directory is wiped at startup so every session starts from a clean store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub const STATE_DIR_NAME: &str = "state";

pub fn state_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(STATE_DIR_NAME)
}

/// Removes every entry under `<data_dir>/state`. Returns how many top-level
/// entries were removed; a missing directory counts as already clear.
pub fn clear_persisted_state(data_dir: &Path) -> Result<usize> {
    let dir = state_dir(data_dir);
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    let mut removed = 0;
    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        removed += 1;
    }
    Ok(removed)
}

/// Startup wrapper: a failure to clear is logged and otherwise ignored.
pub fn clear_persisted_state_or_warn(data_dir: &Path) {
    match clear_persisted_state(data_dir) {
        Ok(0) => tracing::debug!("no persisted state to clear"),
        Ok(n) => tracing::info!(entries = n, "persisted state cleared"),
        Err(e) => tracing::warn!(error = %e, "could not clear persisted state"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_state_dir_is_already_clear() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(clear_persisted_state(dir.path()).unwrap(), 0);
    }

    #[test]
    fn clears_files_and_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_dir(dir.path());
        fs::create_dir_all(state.join("nested")).unwrap();
        fs::write(state.join("2025.bin"), b"stale").unwrap();
        fs::write(state.join("nested").join("notes.json"), b"{}").unwrap();

        assert_eq!(clear_persisted_state(dir.path()).unwrap(), 2);
        assert_eq!(fs::read_dir(&state).unwrap().count(), 0);
    }

    #[test]
    fn leaves_siblings_of_state_dir_alone() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("studydash.log"), b"log").unwrap();
        fs::create_dir_all(state_dir(dir.path())).unwrap();
        fs::write(state_dir(dir.path()).join("old"), b"x").unwrap();

        clear_persisted_state(dir.path()).unwrap();
        assert!(dir.path().join("studydash.log").exists());
    }

    #[test]
    fn state_path_that_is_a_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(state_dir(dir.path()), b"not a dir").unwrap();
        assert!(clear_persisted_state(dir.path()).is_err());
        // the warn wrapper swallows it
        clear_persisted_state_or_warn(dir.path());
    }
}

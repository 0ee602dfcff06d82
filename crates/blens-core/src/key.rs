//! Credential storage for the Anthropic API key.
//!
//! One fixed-name file holding the raw key string: no schema, no expiry,
//! no transformation in either direction. Format checking (the `sk-ant-`
//! prefix convention) belongs to the CLI input path, not to this store.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::error::LensResult;

/// File name of the single credential slot.
const KEY_FILE: &str = "api-key";

/// File-backed store for the API credential.
///
/// The root directory is injected by the caller, so tests and the CLI
/// decide where state lives; nothing here reads ambient globals.
#[derive(Debug, Clone)]
pub struct KeyStore {
    dir: PathBuf,
}

impl KeyStore {
    /// Create a store rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn slot_path(&self) -> PathBuf {
        self.dir.join(KEY_FILE)
    }

    /// Read the stored key. `None` if never set or cleared.
    pub fn load(&self) -> LensResult<Option<String>> {
        match fs::read_to_string(self.slot_path()) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist the key verbatim, creating the directory if needed.
    pub fn save(&self, value: &str) -> LensResult<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.slot_path(), value)?;
        debug!(path = %self.slot_path().display(), "API key saved");
        Ok(())
    }

    /// Remove the stored key. Clearing an absent slot is not an error.
    pub fn clear(&self) -> LensResult<()> {
        match fs::remove_file(self.slot_path()) {
            Ok(()) => {
                debug!(path = %self.slot_path().display(), "API key cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_before_any_save_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyStore::new(dir.path());
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load_round_trips_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyStore::new(dir.path());

        store.save("sk-ant-api03-abc123").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("sk-ant-api03-abc123"));
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyStore::new(dir.path());

        store.save("sk-ant-old").unwrap();
        store.save("sk-ant-new").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("sk-ant-new"));
    }

    #[test]
    fn test_clear_removes_the_slot() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyStore::new(dir.path());

        store.save("sk-ant-something").unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);

        // Clearing again is fine.
        store.clear().unwrap();
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyStore::new(dir.path().join("nested").join("blens"));

        store.save("sk-ant-deep").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("sk-ant-deep"));
    }
}

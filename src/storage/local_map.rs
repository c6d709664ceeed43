use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Durable key-value blobs, one JSON file per key under the data directory.
///
/// Reads mask absence and corruption by returning the caller's fallback, and
/// writes swallow persistence failures: the in-memory state of the caller
/// stays authoritative for the current process, the next process start simply
/// misses the write. Last write wins between processes sharing a directory;
/// there is no locking.
#[derive(Clone, Debug)]
pub struct LocalMap {
    dir: Arc<PathBuf>,
}

impl LocalMap {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir: Arc::new(dir) })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    pub fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return fallback,
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(key, error = %err, "stored blob is unreadable, using fallback");
                fallback
            }
        }
    }

    pub fn write<T: Serialize>(&self, key: &str, value: &T) {
        let payload = match serde_json::to_vec(value) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to serialize blob, skipping persist");
                return;
            }
        };
        if let Err(err) = fs::write(self.path_for(key), payload) {
            tracing::warn!(key, error = %err, "failed to persist blob, keeping in-memory state only");
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(err) = fs::remove_file(self.path_for(key)) {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(key, error = %err, "failed to remove blob");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_within_a_process() {
        let dir = tempfile::tempdir().unwrap();
        let map = LocalMap::open(dir.path()).unwrap();

        map.write("numbers", &vec![1, 2, 3]);
        let back: Vec<i64> = map.read("numbers", Vec::new());
        assert_eq!(back, vec![1, 2, 3]);
    }

    #[test]
    fn missing_key_yields_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let map = LocalMap::open(dir.path()).unwrap();

        let value: Vec<String> = map.read("never-written", vec!["default".to_string()]);
        assert_eq!(value, vec!["default".to_string()]);
    }

    #[test]
    fn corrupt_blob_yields_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let map = LocalMap::open(dir.path()).unwrap();
        fs::write(dir.path().join("broken.json"), b"{not json").unwrap();

        let value: Vec<i64> = map.read("broken", vec![7]);
        assert_eq!(value, vec![7]);
    }

    #[test]
    fn remove_clears_the_key() {
        let dir = tempfile::tempdir().unwrap();
        let map = LocalMap::open(dir.path()).unwrap();

        map.write("session", &"token".to_string());
        map.remove("session");
        let value: Option<String> = map.read("session", None);
        assert_eq!(value, None);

        // removing an absent key is a no-op
        map.remove("session");
    }
}

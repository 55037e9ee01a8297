use super::StorageBackend;
use crate::error::{LojinhaError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed storage: one `<key>.json` file per collection inside the data
/// directory. The directory is created lazily on first write so read-only
/// commands never touch the disk.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(LojinhaError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path).map_err(LojinhaError::Io)?;
        Ok(Some(raw))
    }

    fn write(&mut self, key: &str, payload: &str) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.key_path(key), payload).map_err(LojinhaError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().join("data"));
        assert!(backend.read("lj_products").unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let mut backend = FsBackend::new(dir.path().join("data"));
        backend.write("lj_sales", "[]").unwrap();
        assert_eq!(backend.read("lj_sales").unwrap().unwrap(), "[]");
        assert!(dir.path().join("data").join("lj_sales.json").exists());
    }

    #[test]
    fn write_replaces_previous_payload() {
        let dir = TempDir::new().unwrap();
        let mut backend = FsBackend::new(dir.path().to_path_buf());
        backend.write("lj_customers", "[1]").unwrap();
        backend.write("lj_customers", "[2]").unwrap();
        assert_eq!(backend.read("lj_customers").unwrap().unwrap(), "[2]");
    }
}

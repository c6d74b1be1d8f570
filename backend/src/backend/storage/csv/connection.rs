use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

/// CsvConnection manages the data directory and ensures the friends CSV
/// file exists before repositories touch it
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl CsvConnection {
    /// Create a new CSV connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Create a new CSV connection in the default data directory.
    /// Uses `REMEMBERME_DATA_DIR` when set, otherwise
    /// `~/Documents/RememberME`.
    pub fn new_default() -> Result<Self> {
        if let Ok(dir) = std::env::var("REMEMBERME_DATA_DIR") {
            info!("Using data directory from REMEMBERME_DATA_DIR: {}", dir);
            return Self::new(dir);
        }

        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir).join("Documents").join("RememberME");
        info!("Using default data directory: {}", data_dir.display());

        Self::new(data_dir)
    }

    /// Get the base data directory
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Serialize read-modify-write cycles on the friends file. Every
    /// mutating repository operation must hold this guard for its whole
    /// read/rewrite span, or concurrent handlers can lose a write.
    pub fn mutation_guard(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get the path to the friends CSV file
    pub fn friends_file_path(&self) -> PathBuf {
        self.base_directory.join("friends.csv")
    }

    /// Create the friends CSV file with a header row if it doesn't exist yet
    pub fn ensure_friends_file_exists(&self) -> Result<()> {
        let path = self.friends_file_path();
        if !path.exists() {
            fs::write(
                &path,
                "id,name,birthday,gender,interest,created_at,updated_at\n",
            )?;
            info!("Created friends file: {}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_new_creates_base_directory() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("data").join("rememberme");
        let conn = CsvConnection::new(&nested).unwrap();
        assert!(nested.exists());
        assert_eq!(conn.base_directory(), nested.as_path());
    }

    #[test]
    fn test_ensure_friends_file_writes_header_once() {
        let temp_dir = tempdir().unwrap();
        let conn = CsvConnection::new(temp_dir.path()).unwrap();

        conn.ensure_friends_file_exists().unwrap();
        let header = fs::read_to_string(conn.friends_file_path()).unwrap();
        assert!(header.starts_with("id,name,birthday"));

        // A second call must not truncate existing data
        fs::write(conn.friends_file_path(), "id,name\nfriend::1,Emma\n").unwrap();
        conn.ensure_friends_file_exists().unwrap();
        let contents = fs::read_to_string(conn.friends_file_path()).unwrap();
        assert!(contents.contains("friend::1"));
    }
}

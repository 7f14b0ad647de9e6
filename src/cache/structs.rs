use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{DivisionSnapshot, PlayerDirectory};

/// File-based store for division snapshots
pub struct SnapshotStore {
    cache_dir: PathBuf,
}

impl SnapshotStore {
    /// Create a new store, making sure the directory exists
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let cache_dir = cache_dir.as_ref().to_path_buf();
        fs::create_dir_all(&cache_dir).context("Failed to create snapshot directory")?;
        Ok(Self { cache_dir })
    }

    /// Write a snapshot, replacing the previous one in a single rename
    pub fn save_snapshot(&self, key: &str, snapshot: &DivisionSnapshot) -> Result<()> {
        let file_path = self.build_path(key);
        let temp_path = file_path.with_extension("json.tmp");

        self.write_json(&temp_path, snapshot)?;
        fs::rename(&temp_path, &file_path).context("Failed to move snapshot into place")?;

        info!(
            "Saved snapshot with {} Open and {} Women players to {}",
            snapshot.open.len(),
            snapshot.women.len(),
            file_path.display()
        );
        Ok(())
    }

    pub fn load_snapshot(&self, key: &str) -> Result<Option<DivisionSnapshot>> {
        let file_path = self.build_path(key);
        let snapshot: Option<DivisionSnapshot> = self.read_json_opt(&file_path)?;
        if let Some(s) = &snapshot {
            info!("Loaded snapshot from {} (fetched {})", file_path.display(), s.fetched_at);
        }
        Ok(snapshot)
    }

    /// Load a snapshot and build a validated directory from it
    pub fn load_directory(&self, key: &str) -> Result<PlayerDirectory> {
        let snapshot = self
            .load_snapshot(key)?
            .ok_or_else(|| anyhow::anyhow!("No player snapshot found; run `ingest` first"))?;
        PlayerDirectory::from_snapshot(snapshot).context("Stored snapshot is inconsistent")
    }

    pub fn exists(&self, key: &str) -> bool {
        self.build_path(key).exists()
    }

    // --- Helper Methods ---

    fn build_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data).context("Failed to serialize snapshot")?;
        fs::write(path, json).context("Failed to write snapshot file")?;
        Ok(())
    }

    fn read_json_opt<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path)?;
        let data = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse JSON from {:?}. First 200 chars: {}",
                path,
                json.chars().take(200).collect::<String>()))?;
        Ok(Some(data))
    }
}

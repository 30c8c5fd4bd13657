//! Hash cache implementation
//!
//! Maps generated file paths to the content hash they were last written with.
//! The cache file is read lazily on first use and written back once per run.

use crate::error::{Error, Result};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Number of hex characters kept from the SHA-256 digest
const HASH_LEN: usize = 8;

/// Short content hash used as a cache value
pub fn content_hash(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    let mut hash = hex::encode(digest);
    hash.truncate(HASH_LEN);
    hash
}

/// Content-hash cache for generated declaration files
#[derive(Debug, Clone)]
pub struct HashCache {
    /// Path to the cache file
    path: PathBuf,
    /// File path -> content hash
    entries: BTreeMap<String, String>,
    /// Whether the cache file has been read
    loaded: bool,
}

impl HashCache {
    /// Create a cache backed by the given file. Nothing is read until first use.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            entries: BTreeMap::new(),
            loaded: false,
        }
    }

    /// Create an in-memory cache (no file persistence)
    pub fn in_memory() -> Self {
        Self {
            path: PathBuf::new(),
            entries: BTreeMap::new(),
            loaded: true,
        }
    }

    /// Read the cache file if it hasn't been read yet.
    ///
    /// A missing or empty file is an empty cache.
    pub async fn load(&mut self) -> Result<()> {
        if self.loaded {
            return Ok(());
        }
        self.loaded = true;

        if !self.path.exists() {
            return Ok(());
        }

        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::cache(format!("Failed to read cache file: {e}")))?;

        if contents.trim().is_empty() {
            return Ok(());
        }

        let entries: BTreeMap<String, String> = serde_json::from_str(&contents)
            .map_err(|e| Error::cache(format!("Failed to parse cache file: {e}")))?;

        // Entries set before the load win over what was on disk
        for (file, hash) in entries {
            self.entries.entry(file).or_insert(hash);
        }

        Ok(())
    }

    /// Get the stored hash for a file
    pub async fn get(&mut self, file: &Path) -> Result<Option<String>> {
        self.load().await?;
        Ok(self.entries.get(&cache_key(file)).cloned())
    }

    /// Record the hash for a file
    pub fn set(&mut self, file: &Path, hash: impl Into<String>) {
        self.entries.insert(cache_key(file), hash.into());
    }

    /// Whether `file` on disk hashes to `hash` and the stored entry agrees.
    ///
    /// The file is read and hashed, so a missing, truncated or edited file is
    /// never fresh whatever the entry says.
    pub async fn is_fresh(&mut self, file: &Path, hash: &str) -> Result<bool> {
        let existing = match tokio::fs::read_to_string(file).await {
            Ok(existing) => existing,
            Err(e)
                if matches!(
                    e.kind(),
                    std::io::ErrorKind::NotFound | std::io::ErrorKind::InvalidData
                ) =>
            {
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };

        if content_hash(&existing) != hash {
            return Ok(false);
        }
        Ok(self.get(file).await?.as_deref() == Some(hash))
    }

    /// Write the cache back to its file
    pub async fn persist(&mut self) -> Result<()> {
        if self.is_in_memory() {
            return Ok(());
        }

        // Keep entries for files this run never touched
        self.load().await?;

        let contents = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| Error::cache(format!("Failed to serialize cache: {e}")))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| Error::cache(format!("Failed to create cache directory: {e}")))?;
            }
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, &contents)
            .await
            .map_err(|e| Error::cache(format!("Failed to write cache file: {e}")))?;

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| Error::cache(format!("Failed to rename cache file: {e}")))?;

        Ok(())
    }

    /// Number of entries currently held
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries are held
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the cache file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if using in-memory mode
    pub fn is_in_memory(&self) -> bool {
        self.path.as_os_str().is_empty()
    }
}

fn cache_key(file: &Path) -> String {
    file.to_string_lossy().into_owned()
}

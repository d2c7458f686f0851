//! Record repository for assistlist.
//!
//! Entries live in a single text file (see [`format`]). Saving first copies the
//! previous file content to a backup path, keeping exactly one prior version.
//! Writes go straight to the destination; nothing is locked.

pub mod format;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::entry::Entry;
use crate::error::{Error, Result};

/// Load entries from the store file at `path`.
///
/// A missing file yields an empty list. Malformed content is not an error;
/// unrecognised blocks are skipped.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read as UTF-8 text.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Entry>> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) if source.kind() == ErrorKind::NotFound => {
            debug!("Store file {} not found, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(Error::StoreRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let entries = format::decode(&content);
    info!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Save `entries` to `path`, backing up the previous content first.
///
/// The backup receives the exact bytes of the current store file, or is
/// truncated to empty if the store file does not exist yet. Returns the number
/// of entries written.
///
/// # Errors
///
/// Returns an error if the existing file cannot be read, or if the backup or
/// store file cannot be written.
pub fn save(path: impl AsRef<Path>, backup_path: impl AsRef<Path>, entries: &[Entry]) -> Result<usize> {
    let path = path.as_ref();
    let backup_path = backup_path.as_ref();

    let previous = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(source) if source.kind() == ErrorKind::NotFound => Vec::new(),
        Err(source) => {
            return Err(Error::StoreRead {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ensure_parent_dir(backup_path)?;
    fs::write(backup_path, &previous).map_err(|source| Error::BackupWrite {
        path: backup_path.to_path_buf(),
        source,
    })?;
    debug!(
        "Backed up {} bytes to {}",
        previous.len(),
        backup_path.display()
    );

    ensure_parent_dir(path)?;
    fs::write(path, format::encode(entries)).map_err(|source| Error::StoreWrite {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Saved {} entries to {}", entries.len(), path.display());
    Ok(entries.len())
}

/// Create the parent directory of `path` when it is missing.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

/// Handle bundling the store file and its backup path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    path: PathBuf,
    backup_path: PathBuf,
}

impl Store {
    /// Create a store handle for the given file and backup paths.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, backup_path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup_path: backup_path.into(),
        }
    }

    /// Path to the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path to the backup file.
    #[must_use]
    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    /// Load all entries from the store file.
    ///
    /// # Errors
    ///
    /// See [`load`].
    pub fn load(&self) -> Result<Vec<Entry>> {
        load(&self.path)
    }

    /// Replace the store file content with `entries`.
    ///
    /// # Errors
    ///
    /// See [`save`].
    pub fn save(&self, entries: &[Entry]) -> Result<usize> {
        save(&self.path, &self.backup_path, entries)
    }
}

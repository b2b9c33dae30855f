//! JSON file implementation of PointStore

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use rewards_core::{DomainError, PointStore, PointTotals, StoreResult};

use super::error::{map_parse_error, map_read_error, map_write_error};

/// Point store backed by a single JSON document on disk
///
/// The document is a flat object of user id to total, pretty-printed with
/// two-space indentation. Saves go to a sibling `.tmp` file that is synced
/// and then renamed over the target, so readers only ever see a complete
/// document. On Unix the parent directory is synced after the rename so the
/// new directory entry survives a crash.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the JSON document
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map_or_else(|| OsString::from("rewards"), OsString::from);
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_atomically(&self, contents: &[u8]) -> io::Result<()> {
        let temp_path = self.temp_path();

        let result = write_then_rename(&temp_path, &self.path, contents);
        if result.is_err() {
            // Leftover temp file is harmless but untidy
            let _ = fs::remove_file(&temp_path);
        }
        result
    }
}

fn write_then_rename(temp_path: &Path, path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = File::create(temp_path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    fs::rename(temp_path, path)?;
    sync_parent_dir(path)
}

#[cfg(unix)]
fn sync_parent_dir(path: &Path) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    File::open(dir)?.sync_all()
}

// Directories cannot be opened as files here
#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}

impl PointStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> StoreResult<Option<PointTotals>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No point store on disk yet");
                return Ok(None);
            }
            Err(e) => return Err(map_read_error(&self.path, e)),
        };

        let totals: PointTotals =
            serde_json::from_str(&contents).map_err(|e| map_parse_error(&self.path, e))?;

        debug!(users = totals.len(), "Point store loaded");
        Ok(Some(totals))
    }

    #[instrument(skip(self, totals), fields(path = %self.path.display(), users = totals.len()))]
    fn save(&self, totals: &PointTotals) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(totals).map_err(|e| {
            DomainError::store_write(self.path.display().to_string(), e)
        })?;

        self.write_atomically(json.as_bytes())
            .map_err(|e| map_write_error(&self.path, e))?;

        debug!("Point store saved");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

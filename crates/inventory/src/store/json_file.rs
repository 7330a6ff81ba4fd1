use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::InventoryStore;
use crate::error::StoreError;
use crate::state::InventoryState;

/// Stores the inventory as a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    atomic_writes: bool,
}

impl JsonFileStore {
    /// Store backed by `path`, writing through a temp file + rename.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            atomic_writes: true,
        }
    }

    pub fn with_atomic_writes(mut self, enabled: bool) -> Self {
        self.atomic_writes = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling of the backing file, e.g. `inventory_data.json.tmp`.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("inventory"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn ensure_parent_dir(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }
        Ok(())
    }
}

impl InventoryStore for JsonFileStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Option<InventoryState>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };
        InventoryState::decode(&bytes)
            .map(Some)
            .map_err(|message| StoreError::malformed(&self.path, message))
    }

    fn save(&mut self, state: &InventoryState) -> Result<(), StoreError> {
        let data = state.encode()?;
        self.ensure_parent_dir()?;

        if !self.atomic_writes {
            return fs::write(&self.path, &data).map_err(|e| StoreError::io(&self.path, e));
        }

        let tmp = self.temp_path();
        fs::write(&tmp, &data).map_err(|e| StoreError::io(&tmp, e))?;
        if let Err(err) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(StoreError::io(&self.path, err));
        }
        Ok(())
    }
}

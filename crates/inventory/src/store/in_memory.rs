use std::io;
use std::path::Path;

use super::InventoryStore;
use crate::error::StoreError;
use crate::state::InventoryState;

const LOCATION: &str = "<memory>";

/// In-memory store holding the encoded document.
///
/// Counts saves and can be told to fail them, which makes it the store of
/// choice for tests and for frontends that do not want a file.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    contents: Option<Vec<u8>>,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with an encoded document (as if read from disk).
    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Some(contents.into()),
            ..Self::default()
        }
    }

    /// Bytes of the last successful save (or the seeded document).
    pub fn contents(&self) -> Option<&[u8]> {
        self.contents.as_deref()
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }

    /// Make subsequent saves fail with an I/O error.
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }
}

impl InventoryStore for InMemoryStore {
    fn location(&self) -> &Path {
        Path::new(LOCATION)
    }

    fn load(&self) -> Result<Option<InventoryState>, StoreError> {
        match &self.contents {
            None => Ok(None),
            Some(bytes) => InventoryState::decode(bytes)
                .map(Some)
                .map_err(|message| StoreError::malformed(LOCATION, message)),
        }
    }

    fn save(&mut self, state: &InventoryState) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::io(
                LOCATION,
                io::Error::other("simulated write failure"),
            ));
        }
        self.contents = Some(state.encode()?);
        self.saves += 1;
        Ok(())
    }
}

//! Storage port for the inventory document, with file and in-memory adapters.

mod in_memory;
mod json_file;

pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;

use std::path::Path;

use crate::error::StoreError;
use crate::state::InventoryState;

/// Loads and overwrites the complete inventory document.
pub trait InventoryStore {
    /// Where the document lives (used in diagnostics).
    fn location(&self) -> &Path;

    /// Read the document. `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<InventoryState>, StoreError>;

    /// Replace the stored document with `state`.
    fn save(&mut self, state: &InventoryState) -> Result<(), StoreError>;
}

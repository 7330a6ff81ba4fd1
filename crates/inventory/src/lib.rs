//! Inventory aggregate and its persistence.
//!
//! `Inventory` owns the product and supplier mappings. Every successful mutation
//! hands the complete state to an [`InventoryStore`], which overwrites the
//! backing file; there is no incremental persistence and no batching.

pub mod config;
pub mod error;
pub mod format;
pub mod inventory;
pub mod report;
pub mod state;
pub mod store;

pub use config::{DEFAULT_DATA_FILE, DuplicatePolicy, InventoryConfig};
pub use error::{InventoryError, InventoryResult, StoreError};
pub use inventory::Inventory;
pub use report::{ProductLine, SupplierLine};
pub use state::InventoryState;
pub use store::{InMemoryStore, InventoryStore, JsonFileStore};

pub use stockroom_core::{DomainError, ProductId, SupplierId};
pub use stockroom_parties::{OrderRecord, Supplier};
pub use stockroom_products::Product;

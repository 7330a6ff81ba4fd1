//! Inventory configuration.

use std::path::{Path, PathBuf};

/// Backing file used when none is configured.
pub const DEFAULT_DATA_FILE: &str = "inventory_data.json";

/// What `add_product` / `add_supplier` do when the identifier already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Overwrite the existing record in place (keeps its position).
    #[default]
    Replace,
    /// Refuse with `DomainError::Conflict`; nothing is mutated or saved.
    Reject,
}

/// Settings for opening a file-backed [`Inventory`](crate::Inventory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    pub data_file: PathBuf,
    pub duplicate_policy: DuplicatePolicy,
    /// Write to a sibling temp file and rename it over the backing file.
    pub atomic_writes: bool,
}

impl InventoryConfig {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            ..Self::default()
        }
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    pub fn with_atomic_writes(mut self, enabled: bool) -> Self {
        self.atomic_writes = enabled;
        self
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            duplicate_policy: DuplicatePolicy::Replace,
            atomic_writes: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_behaviour() {
        let config = InventoryConfig::default();
        assert_eq!(config.data_file(), Path::new("inventory_data.json"));
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Replace);
        assert!(config.atomic_writes);
    }

    #[test]
    fn builder_overrides_individual_settings() {
        let config = InventoryConfig::new("/tmp/stock.json")
            .with_duplicate_policy(DuplicatePolicy::Reject)
            .with_atomic_writes(false);
        assert_eq!(config.data_file(), Path::new("/tmp/stock.json"));
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
        assert!(!config.atomic_writes);
    }
}

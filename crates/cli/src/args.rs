//! Command-line arguments (each with an environment fallback).

use std::path::PathBuf;

use clap::Parser;

use stockroom_inventory::{DEFAULT_DATA_FILE, DuplicatePolicy, InventoryConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "stockroom", version, about = "Single-user inventory tracker")]
pub struct Args {
    /// JSON file holding the inventory; created on the first change.
    #[arg(short = 'f', long, env = "STOCKROOM_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Refuse to add a product or supplier whose ID already exists instead of replacing it.
    #[arg(long, env = "STOCKROOM_REJECT_DUPLICATES")]
    pub reject_duplicates: bool,

    /// Overwrite the data file in place rather than through a temp file + rename.
    #[arg(long)]
    pub no_atomic_writes: bool,
}

impl Args {
    pub fn config(&self) -> InventoryConfig {
        let policy = if self.reject_duplicates {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::Replace
        };
        InventoryConfig::new(&self.data_file)
            .with_duplicate_policy(policy)
            .with_atomic_writes(!self.no_atomic_writes)
    }
}

//! Supplier records and their order history.

pub mod supplier;

pub use supplier::{OrderRecord, Supplier};

//! Product records.
//!
//! A product is one stock-keeping unit with a running quantity and a reorder
//! threshold. Pure data + predicates; persistence lives in `stockroom-inventory`.

pub mod product;

pub use product::Product;

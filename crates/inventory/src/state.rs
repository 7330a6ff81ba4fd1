//! The persisted inventory document.
//!
//! ```text
//! {
//!     "products": { "<product_id>": { "product_id": ..., "name": ..., ... } },
//!     "suppliers": { "<supplier_id>": { "supplier_id": ..., "orders": [...] } }
//! }
//! ```
//!
//! Written with four-space indentation, keys in insertion order, ASCII-only
//! strings and Python-style floats (see [`crate::format`]), so files produced
//! by earlier versions of the tracker load and re-save unchanged.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ProductId, SupplierId};
use stockroom_parties::Supplier;
use stockroom_products::Product;

use crate::format::LegacyFormatter;

const INDENT: &[u8] = b"    ";

/// Complete in-memory state: both mappings, keyed by their IDs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InventoryState {
    #[serde(default)]
    pub products: IndexMap<ProductId, Product>,
    #[serde(default)]
    pub suppliers: IndexMap<SupplierId, Supplier>,
}

impl InventoryState {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.suppliers.is_empty()
    }

    /// Serialize the whole document.
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = LegacyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }

    /// Parse and validate a document.
    ///
    /// Returns a human-readable reason on failure; callers attach the location.
    pub fn decode(bytes: &[u8]) -> Result<Self, String> {
        let state: Self = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
        check_keys(&state.products)?;
        check_keys(&state.suppliers)?;
        Ok(state)
    }
}

/// Every mapping key must equal the ID embedded in its record.
fn check_keys<E: Entity>(map: &IndexMap<E::Id, E>) -> Result<(), String> {
    for (key, entity) in map {
        if key != entity.id() {
            return Err(format!(
                "{} stored under key \"{key}\" has id \"{}\"",
                E::KIND,
                entity.id()
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InventoryState {
        let mut state = InventoryState::default();
        state.products.insert(
            ProductId::new("P1"),
            Product::new(ProductId::new("P1"), "Widget", 10, 2.5, 5),
        );
        let mut supplier = Supplier::new(SupplierId::new("S1"), "Acme", "555-0100");
        supplier.add_order(ProductId::new("P1"), 20);
        state.suppliers.insert(SupplierId::new("S1"), supplier);
        state
    }

    #[test]
    fn encodes_with_four_space_indent_and_field_order() {
        let text = String::from_utf8(sample().encode().unwrap()).unwrap();
        let expected = r#"{
    "products": {
        "P1": {
            "product_id": "P1",
            "name": "Widget",
            "quantity": 10,
            "price": 2.5,
            "reorder_level": 5
        }
    },
    "suppliers": {
        "S1": {
            "supplier_id": "S1",
            "name": "Acme",
            "contact": "555-0100",
            "orders": [
                {
                    "product_id": "P1",
                    "quantity": 20
                }
            ]
        }
    }
}"#;
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_state_encodes_empty_mappings() {
        let text = String::from_utf8(InventoryState::default().encode().unwrap()).unwrap();
        assert_eq!(text, "{\n    \"products\": {},\n    \"suppliers\": {}\n}");
    }

    #[test]
    fn decode_preserves_insertion_order() {
        let json = r#"{"products": {
            "Z": {"product_id": "Z", "name": "z", "quantity": 1, "price": 1.0, "reorder_level": 0},
            "A": {"product_id": "A", "name": "a", "quantity": 1, "price": 1.0, "reorder_level": 0}
        }, "suppliers": {}}"#;
        let state = InventoryState::decode(json.as_bytes()).unwrap();
        let keys: Vec<&str> = state.products.keys().map(ProductId::as_str).collect();
        assert_eq!(keys, ["Z", "A"]);
    }

    #[test]
    fn missing_top_level_sections_read_as_empty() {
        let state = InventoryState::decode(b"{}").unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn unknown_top_level_section_is_rejected() {
        let err = InventoryState::decode(br#"{"products": {}, "customers": {}}"#).unwrap_err();
        assert!(err.contains("unknown field"), "{err}");
    }

    #[test]
    fn key_mismatch_is_rejected() {
        let json = r#"{"products": {
            "P1": {"product_id": "P2", "name": "x", "quantity": 1, "price": 1.0, "reorder_level": 0}
        }}"#;
        let err = InventoryState::decode(json.as_bytes()).unwrap_err();
        assert_eq!(err, "Product stored under key \"P1\" has id \"P2\"");
    }

    #[test]
    fn non_object_document_is_rejected() {
        assert!(InventoryState::decode(b"[]").is_err());
        assert!(InventoryState::decode(b"").is_err());
    }
}

use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ProductId, SupplierId};

/// One supplier-attributed order: a product and a quantity.
///
/// History only: recording an order does not touch stock, and the product is
/// not required to exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrderRecord {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// A vendor and its order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Supplier {
    supplier_id: SupplierId,
    name: String,
    contact: String,
    orders: Vec<OrderRecord>,
}

impl Supplier {
    /// Create a supplier with an empty order history.
    pub fn new(supplier_id: SupplierId, name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            supplier_id,
            name: name.into(),
            contact: contact.into(),
            orders: Vec::new(),
        }
    }

    pub fn supplier_id(&self) -> &SupplierId {
        &self.supplier_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Append an order to the history. Always succeeds.
    pub fn add_order(&mut self, product_id: ProductId, quantity: i64) {
        self.orders.push(OrderRecord {
            product_id,
            quantity,
        });
    }

    /// Order history in insertion order.
    pub fn orders(&self) -> &[OrderRecord] {
        &self.orders
    }
}

impl Entity for Supplier {
    type Id = SupplierId;

    const KIND: &'static str = "Supplier";

    fn id(&self) -> &Self::Id {
        &self.supplier_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> Supplier {
        Supplier::new(SupplierId::new("S1"), "Acme", "acme@example.com")
    }

    #[test]
    fn new_supplier_has_no_orders() {
        assert!(acme().orders().is_empty());
    }

    #[test]
    fn add_order_appends_in_call_order() {
        let mut s = acme();
        s.add_order(ProductId::new("P1"), 5);
        s.add_order(ProductId::new("P2"), 3);

        assert_eq!(
            s.orders(),
            &[
                OrderRecord {
                    product_id: ProductId::new("P1"),
                    quantity: 5
                },
                OrderRecord {
                    product_id: ProductId::new("P2"),
                    quantity: 3
                },
            ]
        );
    }

    #[test]
    fn add_order_does_not_deduplicate() {
        let mut s = acme();
        s.add_order(ProductId::new("P1"), 5);
        s.add_order(ProductId::new("P1"), 5);
        assert_eq!(s.orders().len(), 2);
    }

    #[test]
    fn persisted_shape_matches_field_names() {
        let mut s = acme();
        s.add_order(ProductId::new("P1"), 5);
        let value = serde_json::to_value(&s).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "supplier_id": "S1",
                "name": "Acme",
                "contact": "acme@example.com",
                "orders": [{"product_id": "P1", "quantity": 5}],
            })
        );
    }

    #[test]
    fn decoding_rejects_missing_orders() {
        let json = r#"{"supplier_id":"S1","name":"Acme","contact":"x"}"#;
        let err = serde_json::from_str::<Supplier>(json).unwrap_err();
        assert!(err.to_string().contains("orders"));
    }
}

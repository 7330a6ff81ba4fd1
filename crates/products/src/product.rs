use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

/// A stock-keeping unit.
///
/// Field names are the persisted JSON field names; unknown or missing fields are
/// rejected when decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Product {
    product_id: ProductId,
    name: String,
    quantity: i64,
    price: f64,
    reorder_level: i64,
}

impl Product {
    pub fn new(
        product_id: ProductId,
        name: impl Into<String>,
        quantity: i64,
        price: f64,
        reorder_level: i64,
    ) -> Self {
        Self {
            product_id,
            name: name.into(),
            quantity,
            price,
            reorder_level,
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn reorder_level(&self) -> i64 {
        self.reorder_level
    }

    /// Add `amount` (positive or negative) to the stock count. Returns the new quantity.
    ///
    /// The quantity may go negative. A result outside the `i64` range is a
    /// validation error and leaves the quantity unchanged.
    pub fn update_quantity(&mut self, amount: i64) -> DomainResult<i64> {
        let quantity = self.quantity.checked_add(amount).ok_or_else(|| {
            DomainError::validation(format!(
                "quantity of {} would overflow ({} + {amount})",
                self.product_id, self.quantity
            ))
        })?;
        self.quantity = quantity;
        Ok(quantity)
    }

    /// Whether stock is at or below the reorder threshold.
    pub fn needs_reorder(&self) -> bool {
        self.quantity <= self.reorder_level
    }
}

impl Entity for Product {
    type Id = ProductId;

    const KIND: &'static str = "Product";

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn widget(quantity: i64, reorder_level: i64) -> Product {
        Product::new(ProductId::new("P1"), "Widget", quantity, 2.50, reorder_level)
    }

    #[test]
    fn reorder_is_signaled_at_the_threshold() {
        assert!(!widget(6, 5).needs_reorder());
        assert!(widget(5, 5).needs_reorder());
        assert!(widget(4, 5).needs_reorder());
    }

    #[test]
    fn update_quantity_allows_negative_stock() {
        let mut p = widget(3, 0);
        assert_eq!(p.update_quantity(-10).unwrap(), -7);
        assert_eq!(p.quantity(), -7);
        assert!(p.needs_reorder());
    }

    #[test]
    fn update_quantity_rejects_overflow_without_mutating() {
        let mut p = widget(i64::MAX - 1, 0);
        let err = p.update_quantity(5).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)), "{err:?}");
        assert_eq!(p.quantity(), i64::MAX - 1);

        let mut p = widget(i64::MIN + 1, 0);
        assert!(p.update_quantity(-2).is_err());
        assert_eq!(p.quantity(), i64::MIN + 1);

        assert_eq!(p.update_quantity(-5).unwrap(), i64::MIN);
    }

    #[test]
    fn decoding_rejects_unknown_fields() {
        let json = r#"{"product_id":"P1","name":"Widget","quantity":1,"price":1.0,"reorder_level":0,"colour":"red"}"#;
        let err = serde_json::from_str::<Product>(json).unwrap_err();
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn decoding_rejects_missing_fields() {
        let json = r#"{"product_id":"P1","name":"Widget","quantity":1,"price":1.0}"#;
        let err = serde_json::from_str::<Product>(json).unwrap_err();
        assert!(err.to_string().contains("reorder_level"));
    }

    #[test]
    fn integer_price_is_accepted() {
        let json = r#"{"product_id":"P1","name":"Widget","quantity":1,"price":3,"reorder_level":0}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.price(), 3.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the reorder flag is exactly `quantity <= reorder_level`.
        #[test]
        fn needs_reorder_matches_threshold(quantity in any::<i64>(), reorder_level in any::<i64>()) {
            let p = widget(quantity, reorder_level);
            prop_assert_eq!(p.needs_reorder(), quantity <= reorder_level);
        }

        /// Property: applying an amount and its negation restores the quantity.
        #[test]
        fn opposite_updates_cancel_out(
            quantity in -1_000_000_000i64..1_000_000_000i64,
            amount in -1_000_000_000i64..1_000_000_000i64,
        ) {
            let mut p = widget(quantity, 0);
            p.update_quantity(amount).unwrap();
            p.update_quantity(-amount).unwrap();
            prop_assert_eq!(p.quantity(), quantity);
        }
    }
}

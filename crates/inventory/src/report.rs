//! Report lines produced by `view_inventory` / `view_suppliers`.
//!
//! Lines borrow from the inventory and render through `Display`; the caller
//! decides where they go.

use core::fmt;

use stockroom_parties::{OrderRecord, Supplier};
use stockroom_products::Product;

/// One product as shown in the inventory listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductLine<'a> {
    pub name: &'a str,
    pub quantity: i64,
    pub price: f64,
    pub needs_reorder: bool,
}

impl<'a> From<&'a Product> for ProductLine<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            name: product.name(),
            quantity: product.quantity(),
            price: product.price(),
            needs_reorder: product.needs_reorder(),
        }
    }
}

impl fmt::Display for ProductLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the decimal point on whole prices (10.0, not 10).
        write!(
            f,
            "{} - Quantity: {}, Price: ${:?}, Needs Reorder: {}",
            self.name, self.quantity, self.price, self.needs_reorder
        )
    }
}

/// One supplier as shown in the supplier listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplierLine<'a> {
    pub name: &'a str,
    pub contact: &'a str,
    pub orders: &'a [OrderRecord],
}

impl<'a> From<&'a Supplier> for SupplierLine<'a> {
    fn from(supplier: &'a Supplier) -> Self {
        Self {
            name: supplier.name(),
            contact: supplier.contact(),
            orders: supplier.orders(),
        }
    }
}

impl fmt::Display for SupplierLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Contact: {}, Orders: [", self.name, self.contact)?;
        for (i, order) in self.orders.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(
                f,
                "{{product_id={}, quantity={}}}",
                order.product_id, order.quantity
            )?;
        }
        f.write_str("]")
    }
}

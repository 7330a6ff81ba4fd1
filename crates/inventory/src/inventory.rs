//! The `Inventory` aggregate.
//!
//! Operations mutate the in-memory mappings and then save the whole state. A
//! failed save rolls the mutation back before the error is returned, so the
//! in-memory state never drifts from what the store last accepted.

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use stockroom_core::{DomainError, Entity, ProductId, SupplierId};
use stockroom_parties::Supplier;
use stockroom_products::Product;

use crate::config::{DuplicatePolicy, InventoryConfig};
use crate::error::InventoryResult;
use crate::report::{ProductLine, SupplierLine};
use crate::state::InventoryState;
use crate::store::{InventoryStore, JsonFileStore};

/// Products and suppliers, persisted in full after every mutation.
#[derive(Debug)]
pub struct Inventory<S = JsonFileStore> {
    state: InventoryState,
    store: S,
    duplicate_policy: DuplicatePolicy,
}

impl Inventory<JsonFileStore> {
    /// Open the file-backed inventory described by `config`.
    ///
    /// A missing file yields an empty inventory; a malformed one is an error.
    pub fn open(config: &InventoryConfig) -> InventoryResult<Self> {
        let store = JsonFileStore::new(&config.data_file).with_atomic_writes(config.atomic_writes);
        Self::with_store(store, config.duplicate_policy)
    }
}

impl<S: InventoryStore> Inventory<S> {
    /// Build an inventory over `store` and load whatever it holds.
    pub fn with_store(store: S, duplicate_policy: DuplicatePolicy) -> InventoryResult<Self> {
        let mut inventory = Self {
            state: InventoryState::default(),
            store,
            duplicate_policy,
        };
        inventory.load()?;
        Ok(inventory)
    }

    /// Replace the in-memory state with the stored document.
    ///
    /// Nothing stored yet means empty mappings. On error the current state is kept.
    pub fn load(&mut self) -> InventoryResult<()> {
        let state = self.store.load()?.unwrap_or_default();
        debug!(
            location = %self.store.location().display(),
            products = state.products.len(),
            suppliers = state.suppliers.len(),
            "inventory loaded"
        );
        self.state = state;
        Ok(())
    }

    /// Write the complete state to the store, overwriting what was there.
    pub fn save(&mut self) -> InventoryResult<()> {
        self.store.save(&self.state)?;
        debug!(
            location = %self.store.location().display(),
            products = self.state.products.len(),
            suppliers = self.state.suppliers.len(),
            "inventory saved"
        );
        Ok(())
    }

    /// Insert a product, or replace the one with the same ID (per duplicate policy).
    pub fn add_product(
        &mut self,
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        quantity: i64,
        price: f64,
        reorder_level: i64,
    ) -> InventoryResult<()> {
        let product_id = product_id.into();
        if !price.is_finite() {
            return Err(DomainError::validation(format!("price must be a finite number, got {price}")).into());
        }

        let product = Product::new(product_id.clone(), name, quantity, price, reorder_level);
        let previous = upsert(&mut self.state.products, product, self.duplicate_policy)?;
        let replaced = previous.is_some();

        if let Err(err) = self.save() {
            restore(&mut self.state.products, product_id, previous);
            return Err(err);
        }
        info!(product_id = %product_id, replaced, "product added");
        Ok(())
    }

    /// Add `amount` to a product's quantity. Returns the new quantity.
    ///
    /// Unknown IDs are `NotFound` and a result outside the `i64` range is a
    /// `Validation` error; in both cases nothing is mutated or saved.
    pub fn update_stock(&mut self, product_id: &str, amount: i64) -> InventoryResult<i64> {
        let Some(product) = self.state.products.get_mut(product_id) else {
            warn!(product_id, "stock update for unknown product");
            return Err(DomainError::not_found(Product::KIND, product_id).into());
        };
        let before = product.clone();
        let quantity = match product.update_quantity(amount) {
            Ok(quantity) => quantity,
            Err(err) => {
                warn!(product_id, amount, "stock update would overflow");
                return Err(err.into());
            }
        };

        if let Err(err) = self.save() {
            if let Some(product) = self.state.products.get_mut(product_id) {
                *product = before;
            }
            return Err(err);
        }
        info!(product_id, amount, quantity, "stock updated");
        Ok(quantity)
    }

    /// Remove a product. Returns the removed record.
    ///
    /// The remaining products keep their relative order.
    pub fn delete_product(&mut self, product_id: &str) -> InventoryResult<Product> {
        let Some((index, key, product)) = self.state.products.shift_remove_full(product_id) else {
            warn!(product_id, "delete of unknown product");
            return Err(DomainError::not_found(Product::KIND, product_id).into());
        };

        if let Err(err) = self.save() {
            self.state.products.shift_insert(index, key, product);
            return Err(err);
        }
        info!(product_id, "product deleted");
        Ok(product)
    }

    /// Insert a supplier, or replace the one with the same ID (per duplicate policy).
    ///
    /// A replaced supplier's order history is discarded with it.
    pub fn add_supplier(
        &mut self,
        supplier_id: impl Into<SupplierId>,
        name: impl Into<String>,
        contact: impl Into<String>,
    ) -> InventoryResult<()> {
        let supplier_id = supplier_id.into();
        let supplier = Supplier::new(supplier_id.clone(), name, contact);
        let previous = upsert(&mut self.state.suppliers, supplier, self.duplicate_policy)?;
        let replaced = previous.is_some();

        if let Err(err) = self.save() {
            restore(&mut self.state.suppliers, supplier_id, previous);
            return Err(err);
        }
        info!(supplier_id = %supplier_id, replaced, "supplier added");
        Ok(())
    }

    /// Append an order to a supplier's history.
    ///
    /// The product is not required to exist; stock is not touched.
    pub fn record_order(
        &mut self,
        supplier_id: &str,
        product_id: impl Into<ProductId>,
        quantity: i64,
    ) -> InventoryResult<()> {
        let Some(supplier) = self.state.suppliers.get_mut(supplier_id) else {
            warn!(supplier_id, "order for unknown supplier");
            return Err(DomainError::not_found(Supplier::KIND, supplier_id).into());
        };
        let product_id = product_id.into();
        let before = supplier.clone();
        supplier.add_order(product_id.clone(), quantity);

        if let Err(err) = self.save() {
            if let Some(supplier) = self.state.suppliers.get_mut(supplier_id) {
                *supplier = before;
            }
            return Err(err);
        }
        info!(supplier_id, product_id = %product_id, quantity, "order recorded");
        Ok(())
    }

    /// Listing of every product, in insertion order.
    pub fn view_inventory(&self) -> impl Iterator<Item = ProductLine<'_>> + '_ {
        self.state.products.values().map(ProductLine::from)
    }

    /// Listing of every supplier with its full order history, in insertion order.
    pub fn view_suppliers(&self) -> impl Iterator<Item = SupplierLine<'_>> + '_ {
        self.state.suppliers.values().map(SupplierLine::from)
    }

    /// Products at or below their reorder level.
    pub fn reorder_candidates(&self) -> impl Iterator<Item = &Product> + '_ {
        self.state.products.values().filter(|p| p.needs_reorder())
    }

    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.state.products.get(product_id)
    }

    pub fn supplier(&self, supplier_id: &str) -> Option<&Supplier> {
        self.state.suppliers.get(supplier_id)
    }

    pub fn products(&self) -> &IndexMap<ProductId, Product> {
        &self.state.products
    }

    pub fn suppliers(&self) -> &IndexMap<SupplierId, Supplier> {
        &self.state.suppliers
    }

    pub fn state(&self) -> &InventoryState {
        &self.state
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicate_policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

/// Insert `entity` under its ID. Returns the record it replaced, if any.
fn upsert<E: Entity>(
    map: &mut IndexMap<E::Id, E>,
    entity: E,
    policy: DuplicatePolicy,
) -> Result<Option<E>, DomainError> {
    if policy == DuplicatePolicy::Reject && map.contains_key(entity.id()) {
        warn!(kind = E::KIND, id = %entity.id(), "duplicate id rejected");
        return Err(DomainError::conflict(format!(
            "{} {} already exists",
            E::KIND,
            entity.id()
        )));
    }
    Ok(map.insert(entity.id().clone(), entity))
}

/// Undo an `upsert`.
fn restore<E: Entity>(map: &mut IndexMap<E::Id, E>, id: E::Id, previous: Option<E>) {
    match previous {
        Some(entity) => {
            map.insert(id, entity);
        }
        None => {
            map.shift_remove(&id);
        }
    }
}

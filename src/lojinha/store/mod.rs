//! # Storage Layer
//!
//! Storage is split in two, following the "how" vs "what" rule:
//!
//! - [`StorageBackend`] handles the *how*: raw string payloads under fixed
//!   keys. Implementations are [`fs::FsBackend`] (one `<key>.json` file per
//!   collection) and [`memory::MemBackend`] (HashMap, for tests).
//! - [`Store`] handles the *what*: it owns the four collections, decodes them
//!   once at startup and rewrites every key after each mutation.
//!
//! ## Persisted Layout
//!
//! Four independently keyed JSON arrays, namespaced with the `lj_` prefix:
//!
//! ```text
//! lj_products.json    # catalog (seeded with two items on first run)
//! lj_sales.json       # append-only sale log, newest first
//! lj_purchases.json   # append-only purchase log, newest first
//! lj_customers.json   # customer book
//! ```
//!
//! There is no schema version field and no migration path; a key that fails
//! to decode is an unrecoverable startup error. A full rewrite on every
//! mutation is safe because there is exactly one logical writer.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::model::{seed_catalog, Customer, Product, Purchase, Sale};

pub mod fs;
pub mod memory;

pub const KEY_PRODUCTS: &str = "lj_products";
pub const KEY_SALES: &str = "lj_sales";
pub const KEY_PURCHASES: &str = "lj_purchases";
pub const KEY_CUSTOMERS: &str = "lj_customers";

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while [`Store`] handles the "what" (collections, defaults, rewrite).
pub trait StorageBackend {
    /// Read the raw payload stored under `key`.
    /// Returns Ok(None) when the key was never written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `payload` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, payload: &str) -> Result<()>;
}

/// Process-wide state: the four collections plus the backend they came from.
/// Constructed once at startup via [`Store::load`]; every mutating command
/// calls [`Store::persist`] as its final step.
#[derive(Debug)]
pub struct Store<B: StorageBackend> {
    backend: B,
    pub products: Vec<Product>,
    pub sales: Vec<Sale>,
    pub purchases: Vec<Purchase>,
    pub customers: Vec<Customer>,
}

impl<B: StorageBackend> Store<B> {
    /// Load all four collections. A key that was never written falls back to
    /// its default (empty, except the catalog which is seeded); a key that
    /// fails to decode aborts startup with a `Serialization` error.
    pub fn load(backend: B) -> Result<Self> {
        let products = match backend.read(KEY_PRODUCTS)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => seed_catalog(),
        };
        let sales = read_list(&backend, KEY_SALES)?;
        let purchases = read_list(&backend, KEY_PURCHASES)?;
        let customers = read_list(&backend, KEY_CUSTOMERS)?;

        Ok(Self {
            backend,
            products,
            sales,
            purchases,
            customers,
        })
    }

    /// Serialize and rewrite every key. A write failure propagates to the
    /// caller; nothing is retried.
    pub fn persist(&mut self) -> Result<()> {
        write_list(&mut self.backend, KEY_PRODUCTS, &self.products)?;
        write_list(&mut self.backend, KEY_SALES, &self.sales)?;
        write_list(&mut self.backend, KEY_PURCHASES, &self.purchases)?;
        write_list(&mut self.backend, KEY_CUSTOMERS, &self.customers)?;
        Ok(())
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn product_mut(&mut self, id: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == id)
    }

    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }
}

fn read_list<B: StorageBackend, T: DeserializeOwned>(backend: &B, key: &str) -> Result<Vec<T>> {
    match backend.read(key)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Vec::new()),
    }
}

fn write_list<B: StorageBackend, T: Serialize>(
    backend: &mut B,
    key: &str,
    list: &[T],
) -> Result<()> {
    let payload = serde_json::to_string_pretty(list)?;
    backend.write(key, &payload)
}

#[cfg(test)]
mod tests {
    use super::memory::MemBackend;
    use super::*;
    use crate::error::LojinhaError;

    #[test]
    fn fresh_backend_yields_seeded_catalog_and_empty_logs() {
        let store = Store::load(MemBackend::new()).unwrap();
        assert_eq!(store.products.len(), 2);
        assert_eq!(store.products[0].name, "Smartphone Pro Max");
        assert!(store.sales.is_empty());
        assert!(store.purchases.is_empty());
        assert!(store.customers.is_empty());
    }

    #[test]
    fn persist_then_load_round_trips() {
        let mut store = Store::load(MemBackend::new()).unwrap();
        store.products[0].stock = 7;
        store
            .customers
            .push(Customer::new("Maria".into(), "m@ex.com".into(), "11 9999".into()));
        store.persist().unwrap();

        let reloaded = Store::load(store.backend).unwrap();
        assert_eq!(reloaded.products[0].stock, 7);
        assert_eq!(reloaded.customers.len(), 1);
        assert_eq!(reloaded.customers[0].name, "Maria");
    }

    #[test]
    fn corrupt_key_aborts_load() {
        let backend = MemBackend::new().with_entry(KEY_SALES, "{not json");
        let err = Store::load(backend).unwrap_err();
        assert!(matches!(err, LojinhaError::Serialization(_)));
    }

    #[test]
    fn empty_products_key_is_not_reseeded() {
        let backend = MemBackend::new().with_entry(KEY_PRODUCTS, "[]");
        let store = Store::load(backend).unwrap();
        assert!(store.products.is_empty());
    }

    #[test]
    fn lookup_helpers_match_by_id() {
        let store = Store::load(MemBackend::new()).unwrap();
        assert_eq!(store.product("1").unwrap().sku, "ELET-001");
        assert!(store.product("missing").is_none());
    }
}

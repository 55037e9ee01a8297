use super::StorageBackend;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct MemBackend {
    entries: HashMap<String, String>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a raw payload, as if a previous run had written it.
    pub fn with_entry(mut self, key: &str, payload: &str) -> Self {
        self.entries.insert(key.to_string(), payload.to_string());
        self
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, payload: &str) -> Result<()> {
        self.entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Category, Customer, Product};
    use crate::money::Money;
    use crate::store::{Store, KEY_PRODUCTS};
    use chrono::NaiveDate;

    /// A store with a blank catalog instead of the seeded one.
    pub fn empty_store() -> Store<MemBackend> {
        let backend = MemBackend::new().with_entry(KEY_PRODUCTS, "[]");
        Store::load(backend).unwrap()
    }

    pub fn store_with(products: Vec<Product>) -> Store<MemBackend> {
        let mut store = empty_store();
        store.products = products;
        store
    }

    /// Prices are given in centavos.
    pub fn product(sku: &str, name: &str, purchase: i64, sale: i64, stock: i64) -> Product {
        Product::new(
            sku.to_string(),
            name.to_string(),
            Category::Electronics,
            Money::from_cents(purchase),
            Money::from_cents(sale),
            stock,
            "Fornecedor Teste".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 10).expect("static fixture date"),
        )
    }

    pub fn customer(name: &str) -> Customer {
        Customer::new(name.to_string(), "cliente@exemplo.com".to_string(), "(11) 99999-0000".to_string())
    }
}

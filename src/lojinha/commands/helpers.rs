use crate::error::{LojinhaError, Result};
use crate::store::{StorageBackend, Store};

/// Placeholder shown in the sales history when a product was removed from
/// the catalog after being sold.
pub const REMOVED_PRODUCT: &str = "Produto Removido";
/// Placeholder used by the purchase history and the CSV export.
pub const MISSING_PRODUCT: &str = "---";
/// Placeholder used by the top-seller ranking.
pub const UNKNOWN_PRODUCT: &str = "Desconhecido";

/// Resolve a product reference to its stable id. Tries the id first, then
/// the SKU (case-insensitive), mirroring how people actually address items
/// at the counter.
pub fn resolve_product_id<B: StorageBackend>(store: &Store<B>, reference: &str) -> Result<String> {
    if let Some(product) = store.product(reference) {
        return Ok(product.id.clone());
    }
    store
        .products
        .iter()
        .find(|p| p.sku.eq_ignore_ascii_case(reference))
        .map(|p| p.id.clone())
        .ok_or_else(|| LojinhaError::ProductNotFound(reference.to_string()))
}

/// Resolve a customer reference to its id: by id first, then by exact name.
pub fn resolve_customer_id<B: StorageBackend>(store: &Store<B>, reference: &str) -> Result<String> {
    if let Some(customer) = store.customer(reference) {
        return Ok(customer.id.clone());
    }
    store
        .customers
        .iter()
        .find(|c| c.name == reference)
        .map(|c| c.id.clone())
        .ok_or_else(|| LojinhaError::CustomerNotFound(reference.to_string()))
}

/// Best-effort product name lookup; dangling references degrade to the
/// given placeholder instead of raising an integrity error.
pub fn product_label<'a, B: StorageBackend>(
    store: &'a Store<B>,
    product_id: &str,
    placeholder: &'a str,
) -> &'a str {
    store
        .product(product_id)
        .map(|p| p.name.as_str())
        .unwrap_or(placeholder)
}

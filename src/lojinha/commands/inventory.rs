use crate::commands::{CmdMessage, CmdResult, ProductDraft, ProductPatch};
use crate::error::{LojinhaError, Result};
use crate::model::Product;
use crate::store::{StorageBackend, Store};
use crate::LOW_STOCK_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    Out,
    Low,
    Normal,
}

impl StockStatus {
    pub fn of(stock: i64) -> Self {
        if stock == 0 {
            StockStatus::Out
        } else if stock <= LOW_STOCK_THRESHOLD {
            StockStatus::Low
        } else {
            StockStatus::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Out => "Sem estoque",
            StockStatus::Low => "Baixo",
            StockStatus::Normal => "Normal",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProductRow {
    pub product: Product,
    pub status: StockStatus,
}

/// Catalog listing, optionally filtered by a case-insensitive match over
/// name, SKU or supplier.
pub fn list<B: StorageBackend>(store: &Store<B>, search: Option<&str>) -> Result<CmdResult> {
    let term = search.map(|s| s.to_lowercase());
    let rows = store
        .products
        .iter()
        .filter(|p| match &term {
            Some(t) => {
                p.name.to_lowercase().contains(t)
                    || p.sku.to_lowercase().contains(t)
                    || p.supplier.to_lowercase().contains(t)
            }
            None => true,
        })
        .map(|p| ProductRow {
            product: p.clone(),
            status: StockStatus::of(p.stock),
        })
        .collect();
    Ok(CmdResult::default().with_products(rows))
}

pub fn add<B: StorageBackend>(store: &mut Store<B>, draft: ProductDraft) -> Result<CmdResult> {
    validate_draft(&draft)?;

    let product = Product::new(
        draft.sku,
        draft.name,
        draft.category,
        draft.purchase_price,
        draft.sale_price,
        draft.stock,
        draft.supplier,
        draft.entry_date,
    );
    let row = ProductRow {
        product: product.clone(),
        status: StockStatus::of(product.stock),
    };
    store.products.push(product);
    store.persist()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Produto cadastrado: {} ({})",
        row.product.name, row.product.sku
    )));
    Ok(result.with_products(vec![row]))
}

pub fn update<B: StorageBackend>(
    store: &mut Store<B>,
    id: &str,
    patch: ProductPatch,
) -> Result<CmdResult> {
    if matches!(&patch.name, Some(name) if name.trim().is_empty()) {
        return Err(LojinhaError::Input("nome não pode ser vazio".to_string()));
    }
    if matches!(&patch.sku, Some(sku) if sku.trim().is_empty()) {
        return Err(LojinhaError::Input("SKU não pode ser vazio".to_string()));
    }
    if matches!(patch.stock, Some(stock) if stock < 0) {
        return Err(LojinhaError::Input("estoque não pode ser negativo".to_string()));
    }

    let product = store
        .product_mut(id)
        .ok_or_else(|| LojinhaError::ProductNotFound(id.to_string()))?;

    if let Some(sku) = patch.sku {
        product.sku = sku;
    }
    if let Some(name) = patch.name {
        product.name = name;
    }
    if let Some(category) = patch.category {
        product.category = category;
    }
    if let Some(purchase_price) = patch.purchase_price {
        product.purchase_price = purchase_price;
    }
    if let Some(sale_price) = patch.sale_price {
        product.sale_price = sale_price;
    }
    if let Some(stock) = patch.stock {
        product.stock = stock;
    }
    if let Some(supplier) = patch.supplier {
        product.supplier = supplier;
    }
    if let Some(entry_date) = patch.entry_date {
        product.entry_date = entry_date;
    }
    let row = ProductRow {
        product: product.clone(),
        status: StockStatus::of(product.stock),
    };
    store.persist()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Produto atualizado: {}",
        row.product.name
    )));
    Ok(result.with_products(vec![row]))
}

/// Remove a product from the catalog. Historical sales and purchases keep
/// their product ids; read sites resolve them best-effort from then on.
pub fn remove<B: StorageBackend>(store: &mut Store<B>, id: &str) -> Result<CmdResult> {
    let idx = store
        .products
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(|| LojinhaError::ProductNotFound(id.to_string()))?;
    let removed = store.products.remove(idx);
    store.persist()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Produto excluído: {} ({})",
        removed.name, removed.sku
    )));
    Ok(result)
}

fn validate_draft(draft: &ProductDraft) -> Result<()> {
    if draft.name.trim().is_empty() {
        return Err(LojinhaError::Input("nome não pode ser vazio".to_string()));
    }
    if draft.sku.trim().is_empty() {
        return Err(LojinhaError::Input("SKU não pode ser vazio".to_string()));
    }
    if draft.stock < 0 {
        return Err(LojinhaError::Input("estoque não pode ser negativo".to_string()));
    }
    if draft.purchase_price.is_negative() || draft.sale_price.is_negative() {
        return Err(LojinhaError::Input("preço não pode ser negativo".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::sell;
    use crate::commands::{ProductDraft, SaleDraft};
    use crate::model::{Category, PaymentMethod};
    use crate::money::Money;
    use crate::store::memory::fixtures::{empty_store, product, store_with};
    use chrono::NaiveDate;

    fn draft(sku: &str, name: &str) -> ProductDraft {
        ProductDraft {
            sku: sku.to_string(),
            name: name.to_string(),
            category: Category::Home,
            purchase_price: Money::from_cents(4500),
            sale_price: Money::from_cents(9900),
            stock: 5,
            supplier: "Decor Ltda".to_string(),
            entry_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        }
    }

    #[test]
    fn add_appends_to_catalog() {
        let mut store = empty_store();
        let result = add(&mut store, draft("HOME-005", "Luminária LED")).unwrap();

        assert_eq!(store.products.len(), 1);
        assert_eq!(result.products[0].status, StockStatus::Low);
        assert!(!store.products[0].id.is_empty());
    }

    #[test]
    fn add_rejects_blank_fields() {
        let mut store = empty_store();
        assert!(add(&mut store, draft("", "Luminária")).is_err());
        assert!(add(&mut store, draft("HOME-005", "  ")).is_err());
        assert!(store.products.is_empty());
    }

    #[test]
    fn update_overwrites_only_given_fields() {
        let mut store = store_with(vec![product("A", "Produto", 100, 200, 8)]);
        let id = store.products[0].id.clone();

        update(
            &mut store,
            &id,
            ProductPatch {
                sale_price: Some(Money::from_cents(250)),
                stock: Some(2),
                ..ProductPatch::default()
            },
        )
        .unwrap();

        let p = &store.products[0];
        assert_eq!(p.sale_price, Money::from_cents(250));
        assert_eq!(p.stock, 2);
        assert_eq!(p.name, "Produto");
        assert_eq!(p.purchase_price, Money::from_cents(100));
    }

    #[test]
    fn remove_leaves_sales_history_dangling() {
        let mut store = store_with(vec![product("A", "Produto", 100, 200, 5)]);
        let id = store.products[0].id.clone();
        sell::run(
            &mut store,
            SaleDraft {
                product_id: id.clone(),
                quantity: 1,
                payment_method: PaymentMethod::Cash,
                customer_id: None,
            },
        )
        .unwrap();

        remove(&mut store, &id).unwrap();

        assert!(store.products.is_empty());
        assert_eq!(store.sales.len(), 1);
        assert_eq!(store.sales[0].product_id, id);
    }

    #[test]
    fn search_matches_name_sku_and_supplier() {
        let store = store_with(vec![
            product("ELET-001", "Smartphone Pro Max", 100, 200, 5),
            product("HOME-005", "Luminária LED", 100, 200, 5),
        ]);

        assert_eq!(list(&store, Some("smartphone")).unwrap().products.len(), 1);
        assert_eq!(list(&store, Some("home-005")).unwrap().products.len(), 1);
        assert_eq!(list(&store, Some("fornecedor")).unwrap().products.len(), 2);
        assert_eq!(list(&store, Some("inexistente")).unwrap().products.len(), 0);
        assert_eq!(list(&store, None).unwrap().products.len(), 2);
    }

    #[test]
    fn status_labels_follow_stock_level() {
        assert_eq!(StockStatus::of(0), StockStatus::Out);
        assert_eq!(StockStatus::of(5), StockStatus::Low);
        assert_eq!(StockStatus::of(6), StockStatus::Normal);
        assert_eq!(StockStatus::of(0).label(), "Sem estoque");
    }
}

use crate::commands::{helpers, CmdMessage, CmdResult, SaleDraft};
use crate::error::{LojinhaError, Result};
use crate::model::Sale;
use crate::store::{StorageBackend, Store};

/// A sale joined with its best-effort product lookup, ready for display.
#[derive(Debug, Clone)]
pub struct SaleRow {
    pub sale: Sale,
    pub product_name: String,
}

/// Record a sale: append the sale (prices snapshotted from the catalog) and
/// decrement stock, as one state transition. Every precondition is checked
/// before anything is mutated, so a rejection leaves the store untouched.
pub fn run<B: StorageBackend>(store: &mut Store<B>, draft: SaleDraft) -> Result<CmdResult> {
    if draft.quantity <= 0 {
        return Err(LojinhaError::Input(format!(
            "quantidade deve ser positiva: {}",
            draft.quantity
        )));
    }

    let idx = store
        .products
        .iter()
        .position(|p| p.id == draft.product_id)
        .ok_or_else(|| LojinhaError::ProductNotFound(draft.product_id.clone()))?;

    if store.products[idx].stock < draft.quantity {
        return Err(LojinhaError::InsufficientStock {
            available: store.products[idx].stock,
        });
    }

    let sale = Sale::new(
        &store.products[idx],
        draft.quantity,
        draft.payment_method,
        draft.customer_id,
    );
    let product_name = store.products[idx].name.clone();

    store.products[idx].stock -= draft.quantity;
    store.sales.insert(0, sale.clone());
    store.persist()?;

    let mut result = CmdResult::default().with_sales(vec![SaleRow {
        sale: sale.clone(),
        product_name: product_name.clone(),
    }]);
    result.add_message(CmdMessage::success(format!(
        "Venda registrada: {} x{} ({})",
        product_name, draft.quantity, sale.total
    )));
    Ok(result)
}

/// Sales history in stored order (newest first), with dangling product
/// references shown as removed.
pub fn history<B: StorageBackend>(store: &Store<B>) -> Result<CmdResult> {
    let rows = store
        .sales
        .iter()
        .map(|sale| SaleRow {
            sale: sale.clone(),
            product_name: helpers::product_label(store, &sale.product_id, helpers::REMOVED_PRODUCT)
                .to_string(),
        })
        .collect();
    Ok(CmdResult::default().with_sales(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::SaleDraft;
    use crate::model::PaymentMethod;
    use crate::money::Money;
    use crate::store::memory::fixtures::{product, store_with};

    fn draft(product_id: &str, quantity: i64) -> SaleDraft {
        SaleDraft {
            product_id: product_id.to_string(),
            quantity,
            payment_method: PaymentMethod::Card,
            customer_id: None,
        }
    }

    #[test]
    fn decrements_stock_and_snapshots_prices() {
        let mut store = store_with(vec![product("ELET-001", "Smartphone", 350_000, 500_000, 12)]);
        let id = store.products[0].id.clone();

        let result = run(&mut store, draft(&id, 3)).unwrap();

        assert_eq!(store.products[0].stock, 9);
        assert_eq!(store.sales.len(), 1);
        assert_eq!(store.sales[0].total, Money::from_cents(1_500_000));
        assert_eq!(store.sales[0].profit, Money::from_cents(450_000));
        assert_eq!(result.sales[0].product_name, "Smartphone");
    }

    #[test]
    fn rejects_insufficient_stock_without_mutating() {
        let mut store = store_with(vec![product("ELET-001", "Smartphone", 350_000, 500_000, 9)]);
        let id = store.products[0].id.clone();

        let err = run(&mut store, draft(&id, 999)).unwrap_err();

        assert!(matches!(
            err,
            LojinhaError::InsufficientStock { available: 9 }
        ));
        assert_eq!(store.products[0].stock, 9);
        assert!(store.sales.is_empty());
    }

    #[test]
    fn selling_exact_stock_empties_the_shelf() {
        let mut store = store_with(vec![product("A", "Produto", 100, 200, 4)]);
        let id = store.products[0].id.clone();

        run(&mut store, draft(&id, 4)).unwrap();

        assert_eq!(store.products[0].stock, 0);
    }

    #[test]
    fn rejects_unknown_product_and_bad_quantity() {
        let mut store = store_with(vec![product("A", "Produto", 100, 200, 4)]);
        let id = store.products[0].id.clone();

        assert!(matches!(
            run(&mut store, draft("nope", 1)).unwrap_err(),
            LojinhaError::ProductNotFound(_)
        ));
        assert!(matches!(
            run(&mut store, draft(&id, 0)).unwrap_err(),
            LojinhaError::Input(_)
        ));
        assert!(store.sales.is_empty());
    }

    #[test]
    fn later_price_changes_leave_history_untouched() {
        let mut store = store_with(vec![product("A", "Produto", 100, 300, 10)]);
        let id = store.products[0].id.clone();

        run(&mut store, draft(&id, 2)).unwrap();
        store.products[0].sale_price = Money::from_cents(999);

        assert_eq!(store.sales[0].total, Money::from_cents(600));
        assert_eq!(store.sales[0].profit, Money::from_cents(400));
    }

    #[test]
    fn newest_sale_comes_first() {
        let mut store = store_with(vec![product("A", "Produto", 100, 200, 10)]);
        let id = store.products[0].id.clone();

        run(&mut store, draft(&id, 1)).unwrap();
        run(&mut store, draft(&id, 2)).unwrap();

        assert_eq!(store.sales[0].quantity, 2);
        assert_eq!(store.sales[1].quantity, 1);
    }

    #[test]
    fn history_marks_removed_products() {
        let mut store = store_with(vec![product("A", "Produto", 100, 200, 10)]);
        let id = store.products[0].id.clone();
        run(&mut store, draft(&id, 1)).unwrap();
        store.products.clear();

        let result = history(&store).unwrap();
        assert_eq!(result.sales[0].product_name, "Produto Removido");
    }
}

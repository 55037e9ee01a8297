use crate::commands::{helpers, CmdMessage, CmdResult, PurchaseDraft};
use crate::error::{LojinhaError, Result};
use crate::model::Purchase;
use crate::store::{StorageBackend, Store};

#[derive(Debug, Clone)]
pub struct PurchaseRow {
    pub purchase: Purchase,
    pub product_name: String,
}

/// Record a purchase: append the purchase, increment stock and overwrite the
/// product's cost and supplier with the new terms (last-purchase-wins).
/// Earlier sales and purchases keep their snapshotted amounts.
pub fn run<B: StorageBackend>(store: &mut Store<B>, draft: PurchaseDraft) -> Result<CmdResult> {
    if draft.quantity <= 0 {
        return Err(LojinhaError::Input(format!(
            "quantidade deve ser positiva: {}",
            draft.quantity
        )));
    }
    // Money::parse already rejects negatives at the boundary; re-checked here
    // because drafts can also be built in code.
    if draft.unit_cost.is_negative() {
        return Err(LojinhaError::Input("custo unitário não pode ser negativo".to_string()));
    }

    let idx = store
        .products
        .iter()
        .position(|p| p.id == draft.product_id)
        .ok_or_else(|| LojinhaError::ProductNotFound(draft.product_id.clone()))?;

    let purchase = Purchase::new(
        store.products[idx].id.clone(),
        draft.quantity,
        draft.unit_cost,
        draft.supplier.clone(),
    );

    let product = &mut store.products[idx];
    product.stock += draft.quantity;
    product.purchase_price = draft.unit_cost;
    product.supplier = draft.supplier;
    let product_name = product.name.clone();

    store.purchases.insert(0, purchase.clone());
    store.persist()?;

    let mut result = CmdResult::default().with_purchases(vec![PurchaseRow {
        purchase: purchase.clone(),
        product_name: product_name.clone(),
    }]);
    result.add_message(CmdMessage::success(format!(
        "Compra registrada: {} x{} ({})",
        product_name, draft.quantity, purchase.total_cost
    )));
    Ok(result)
}

/// Purchase history in stored order (newest first).
pub fn history<B: StorageBackend>(store: &Store<B>) -> Result<CmdResult> {
    let rows = store
        .purchases
        .iter()
        .map(|purchase| PurchaseRow {
            purchase: purchase.clone(),
            product_name: helpers::product_label(
                store,
                &purchase.product_id,
                helpers::MISSING_PRODUCT,
            )
            .to_string(),
        })
        .collect();
    Ok(CmdResult::default().with_purchases(rows))
}

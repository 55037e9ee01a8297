use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::money::Money;
use crate::store::{StorageBackend, Store};

#[derive(Debug, Clone)]
pub struct TopSeller {
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Clone)]
pub struct SalesReport {
    pub total_revenue: Money,
    pub total_profit: Money,
    /// Σ total_cost over every recorded purchase.
    pub total_investment: Money,
    /// Profit over revenue as a percentage; 0 when there is no revenue yet.
    pub margin: f64,
    /// Up to five products by units sold, descending.
    pub top_selling: Vec<TopSeller>,
}

pub fn run<B: StorageBackend>(store: &Store<B>) -> Result<CmdResult> {
    let total_revenue: Money = store.sales.iter().map(|s| s.total).sum();
    let total_profit: Money = store.sales.iter().map(|s| s.profit).sum();
    let total_investment: Money = store.purchases.iter().map(|p| p.total_cost).sum();

    let margin = if total_revenue.cents() > 0 {
        total_profit.cents() as f64 / total_revenue.cents() as f64 * 100.0
    } else {
        0.0
    };

    // Group by product id, preserving first-seen order so the stable sort
    // keeps a deterministic ranking on ties.
    let mut by_product: Vec<(&str, i64)> = Vec::new();
    for sale in &store.sales {
        match by_product.iter_mut().find(|(id, _)| *id == sale.product_id) {
            Some((_, quantity)) => *quantity += sale.quantity,
            None => by_product.push((sale.product_id.as_str(), sale.quantity)),
        }
    }
    let mut top_selling: Vec<TopSeller> = by_product
        .into_iter()
        .map(|(id, quantity)| TopSeller {
            name: helpers::product_label(store, id, helpers::UNKNOWN_PRODUCT).to_string(),
            quantity,
        })
        .collect();
    top_selling.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    top_selling.truncate(5);

    Ok(CmdResult::default().with_report(SalesReport {
        total_revenue,
        total_profit,
        total_investment,
        margin,
        top_selling,
    }))
}

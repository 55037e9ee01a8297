use chrono::{Days, NaiveDate};

use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Product;
use crate::money::Money;
use crate::store::{StorageBackend, Store};
use crate::LOW_STOCK_THRESHOLD;

#[derive(Debug, Clone)]
pub struct DashboardStats {
    /// Σ(stock × purchase price) over the whole catalog.
    pub inventory_value: Money,
    pub stock_count: i64,
    pub revenue_today: Money,
    pub profit_today: Money,
    pub low_stock_alerts: usize,
    pub out_of_stock_alerts: usize,
}

#[derive(Debug, Clone)]
pub struct DayBucket {
    pub day: NaiveDate,
    pub revenue: Money,
    pub profit: Money,
}

#[derive(Debug, Clone)]
pub struct DashboardData {
    pub stats: DashboardStats,
    /// Trailing 7 calendar days ending at the reference day, oldest first.
    /// Days without sales are present with zeroed amounts.
    pub weekly: Vec<DayBucket>,
    /// Products at or below the low-stock threshold, lowest stock first,
    /// capped at five.
    pub low_stock: Vec<Product>,
}

/// Recompute the dashboard from the live collections. `today` is passed in
/// so the view stays a pure function of (state, date).
pub fn run<B: StorageBackend>(store: &Store<B>, today: NaiveDate) -> Result<CmdResult> {
    let data = DashboardData {
        stats: stats(store, today),
        weekly: weekly_series(store, today),
        low_stock: low_stock(store),
    };
    Ok(CmdResult::default().with_dashboard(data))
}

fn stats<B: StorageBackend>(store: &Store<B>, today: NaiveDate) -> DashboardStats {
    let mut inventory_value = Money::zero();
    let mut stock_count = 0;
    let mut low_stock_alerts = 0;
    let mut out_of_stock_alerts = 0;
    for p in &store.products {
        inventory_value += p.purchase_price * p.stock;
        stock_count += p.stock;
        if p.stock == 0 {
            out_of_stock_alerts += 1;
        } else if p.stock <= LOW_STOCK_THRESHOLD {
            low_stock_alerts += 1;
        }
    }

    let mut revenue_today = Money::zero();
    let mut profit_today = Money::zero();
    for s in store.sales.iter().filter(|s| s.date.date_naive() == today) {
        revenue_today += s.total;
        profit_today += s.profit;
    }

    DashboardStats {
        inventory_value,
        stock_count,
        revenue_today,
        profit_today,
        low_stock_alerts,
        out_of_stock_alerts,
    }
}

fn weekly_series<B: StorageBackend>(store: &Store<B>, today: NaiveDate) -> Vec<DayBucket> {
    (0..7)
        .rev()
        .map(|offset| {
            let day = today - Days::new(offset);
            let mut bucket = DayBucket {
                day,
                revenue: Money::zero(),
                profit: Money::zero(),
            };
            for s in store.sales.iter().filter(|s| s.date.date_naive() == day) {
                bucket.revenue += s.total;
                bucket.profit += s.profit;
            }
            bucket
        })
        .collect()
}

fn low_stock<B: StorageBackend>(store: &Store<B>) -> Vec<Product> {
    let mut flagged: Vec<Product> = store
        .products
        .iter()
        .filter(|p| p.stock <= LOW_STOCK_THRESHOLD)
        .cloned()
        .collect();
    flagged.sort_by_key(|p| p.stock);
    flagged.truncate(5);
    flagged
}

use chrono::NaiveDate;
use std::path::PathBuf;

use crate::model::{Category, Customer, PaymentMethod};
use crate::money::Money;

pub mod customers;
pub mod dashboard;
pub mod export;
pub mod helpers;
pub mod inventory;
pub mod report;
pub mod restock;
pub mod sell;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured output of every command. The CLI layer decides how (and
/// whether) to render each field; commands never print.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub products: Vec<inventory::ProductRow>,
    pub sales: Vec<sell::SaleRow>,
    pub purchases: Vec<restock::PurchaseRow>,
    pub customers: Vec<Customer>,
    pub dashboard: Option<dashboard::DashboardData>,
    pub report: Option<report::SalesReport>,
    pub export_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_products(mut self, products: Vec<inventory::ProductRow>) -> Self {
        self.products = products;
        self
    }

    pub fn with_sales(mut self, sales: Vec<sell::SaleRow>) -> Self {
        self.sales = sales;
        self
    }

    pub fn with_purchases(mut self, purchases: Vec<restock::PurchaseRow>) -> Self {
        self.purchases = purchases;
        self
    }

    pub fn with_customers(mut self, customers: Vec<Customer>) -> Self {
        self.customers = customers;
        self
    }

    pub fn with_dashboard(mut self, dashboard: dashboard::DashboardData) -> Self {
        self.dashboard = Some(dashboard);
        self
    }

    pub fn with_report(mut self, report: report::SalesReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }
}

/// A fully-typed catalog entry, already coerced at the input boundary.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub sku: String,
    pub name: String,
    pub category: Category,
    pub purchase_price: Money,
    pub sale_price: Money,
    pub stock: i64,
    pub supplier: String,
    pub entry_date: NaiveDate,
}

/// Partial catalog update; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub sku: Option<String>,
    pub name: Option<String>,
    pub category: Option<Category>,
    pub purchase_price: Option<Money>,
    pub sale_price: Option<Money>,
    pub stock: Option<i64>,
    pub supplier: Option<String>,
    pub entry_date: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct SaleDraft {
    pub product_id: String,
    pub quantity: i64,
    pub payment_method: PaymentMethod,
    /// Absent means a walk-in sale.
    pub customer_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PurchaseDraft {
    pub product_id: String,
    pub quantity: i64,
    pub unit_cost: Money,
    pub supplier: String,
}

#[derive(Debug, Clone)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

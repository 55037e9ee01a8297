use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lojinha")]
#[command(about = "Small-shop inventory and point-of-sale manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the data directory (also honored via LOJINHA_DATA)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Today's numbers, the weekly series and stock alerts
    #[command(alias = "dash")]
    Dashboard,

    /// List catalog products
    #[command(alias = "ls")]
    Inventory {
        /// Filter by name, SKU or supplier
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add a product to the catalog
    Add {
        /// SKU / code (e.g. ELET-001)
        sku: String,

        /// Product name
        name: String,

        /// Category: eletronicos, vestuario, casa, beleza or outros
        #[arg(short, long, default_value = "outros")]
        category: String,

        /// Unit purchase cost (e.g. 35,50)
        #[arg(long)]
        cost: String,

        /// Unit sale price
        #[arg(long)]
        price: String,

        /// Opening stock
        #[arg(long, default_value_t = 0)]
        stock: i64,

        /// Supplier name
        #[arg(long, default_value = "")]
        supplier: String,

        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        entry_date: Option<NaiveDate>,
    },

    /// Update a catalog product (only the given fields change)
    Update {
        /// Product id or SKU
        product: String,

        #[arg(long)]
        sku: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(short, long)]
        category: Option<String>,

        /// Unit purchase cost
        #[arg(long)]
        cost: Option<String>,

        /// Unit sale price
        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        stock: Option<i64>,

        #[arg(long)]
        supplier: Option<String>,

        #[arg(long)]
        entry_date: Option<NaiveDate>,
    },

    /// Remove a product from the catalog (history keeps its records)
    #[command(alias = "rm")]
    Remove {
        /// Product id or SKU
        product: String,
    },

    /// Record a sale and decrement stock
    Sell {
        /// Product id or SKU
        product: String,

        /// Units sold
        #[arg(short, long)]
        quantity: i64,

        /// Payment: dinheiro, transferencia, cartao or pix
        #[arg(short, long, default_value = "dinheiro")]
        payment: String,

        /// Customer id or name (omit for a walk-in sale)
        #[arg(short, long)]
        customer: Option<String>,
    },

    /// Record a purchase: restock and refresh supplier terms
    Restock {
        /// Product id or SKU
        product: String,

        /// Units received
        #[arg(short, long)]
        quantity: i64,

        /// Unit cost (e.g. 36,00)
        #[arg(short, long)]
        unit_cost: String,

        /// Supplier for this batch
        #[arg(short, long)]
        supplier: String,
    },

    /// Sales history, newest first
    Sales,

    /// Purchase history, newest first
    Purchases,

    /// List customers
    Customers,

    /// Register a customer
    #[command(name = "add-customer")]
    AddCustomer {
        /// Full name
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,
    },

    /// Revenue, profit, investment and top sellers
    Report,

    /// Export the sales report as CSV
    Export {
        /// Output file (defaults to relatorio_vendas.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., currency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

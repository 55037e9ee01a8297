use chrono::{NaiveDate, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use lojinha::api::LojinhaApi;
use lojinha::commands::dashboard::DashboardData;
use lojinha::commands::inventory::{ProductRow, StockStatus};
use lojinha::commands::report::SalesReport;
use lojinha::commands::restock::PurchaseRow;
use lojinha::commands::sell::SaleRow;
use lojinha::commands::{CmdMessage, CustomerDraft, MessageLevel, ProductDraft, ProductPatch};
use lojinha::config::LojinhaConfig;
use lojinha::error::{LojinhaError, Result};
use lojinha::model::{Category, Customer, PaymentMethod};
use lojinha::money::Money;
use lojinha::store::fs::FsBackend;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Erro: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: LojinhaApi<FsBackend>,
    config: LojinhaConfig,
    data_dir: PathBuf,
    today: NaiveDate,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Dashboard) | None => handle_dashboard(&ctx),
        Some(Commands::Inventory { search }) => handle_inventory(&ctx, search),
        Some(Commands::Add {
            sku,
            name,
            category,
            cost,
            price,
            stock,
            supplier,
            entry_date,
        }) => handle_add(&mut ctx, sku, name, category, cost, price, stock, supplier, entry_date),
        Some(Commands::Update {
            product,
            sku,
            name,
            category,
            cost,
            price,
            stock,
            supplier,
            entry_date,
        }) => handle_update(
            &mut ctx, product, sku, name, category, cost, price, stock, supplier, entry_date,
        ),
        Some(Commands::Remove { product }) => handle_remove(&mut ctx, product),
        Some(Commands::Sell {
            product,
            quantity,
            payment,
            customer,
        }) => handle_sell(&mut ctx, product, quantity, payment, customer),
        Some(Commands::Restock {
            product,
            quantity,
            unit_cost,
            supplier,
        }) => handle_restock(&mut ctx, product, quantity, unit_cost, supplier),
        Some(Commands::Sales) => handle_sales(&ctx),
        Some(Commands::Purchases) => handle_purchases(&ctx),
        Some(Commands::Customers) => handle_customers(&ctx),
        Some(Commands::AddCustomer { name, email, phone }) => {
            handle_add_customer(&mut ctx, name, email, phone)
        }
        Some(Commands::Report) => handle_report(&ctx),
        Some(Commands::Export { output }) => handle_export(&ctx, output),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli);
    let config = LojinhaConfig::load(&data_dir).unwrap_or_default();
    let api = LojinhaApi::open(FsBackend::new(data_dir.clone()))?;

    Ok(AppContext {
        api,
        config,
        data_dir,
        today: Utc::now().date_naive(),
    })
}

fn resolve_data_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.data_dir {
        return dir.clone();
    }
    if let Ok(dir) = std::env::var("LOJINHA_DATA") {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("com", "lojinha", "lojinha")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".lojinha"))
}

fn handle_dashboard(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.dashboard(ctx.today)?;
    if let Some(data) = &result.dashboard {
        print_dashboard(data, &ctx.config.currency);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_inventory(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let result = ctx.api.inventory(search.as_deref())?;
    print_products(&result.products, &ctx.config.currency);
    print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_add(
    ctx: &mut AppContext,
    sku: String,
    name: String,
    category: String,
    cost: String,
    price: String,
    stock: i64,
    supplier: String,
    entry_date: Option<NaiveDate>,
) -> Result<()> {
    let draft = ProductDraft {
        sku,
        name,
        category: Category::parse(&category)?,
        purchase_price: Money::parse(&cost)?,
        sale_price: Money::parse(&price)?,
        stock,
        supplier,
        entry_date: entry_date.unwrap_or(ctx.today),
    };
    let result = ctx.api.add_product(draft)?;
    print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_update(
    ctx: &mut AppContext,
    product: String,
    sku: Option<String>,
    name: Option<String>,
    category: Option<String>,
    cost: Option<String>,
    price: Option<String>,
    stock: Option<i64>,
    supplier: Option<String>,
    entry_date: Option<NaiveDate>,
) -> Result<()> {
    let patch = ProductPatch {
        sku,
        name,
        category: category.as_deref().map(Category::parse).transpose()?,
        purchase_price: cost.as_deref().map(Money::parse).transpose()?,
        sale_price: price.as_deref().map(Money::parse).transpose()?,
        stock,
        supplier,
        entry_date,
    };
    let result = ctx.api.update_product(&product, patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, product: String) -> Result<()> {
    let result = ctx.api.remove_product(&product)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_sell(
    ctx: &mut AppContext,
    product: String,
    quantity: i64,
    payment: String,
    customer: Option<String>,
) -> Result<()> {
    let payment_method = PaymentMethod::parse(&payment)?;
    let result = ctx
        .api
        .record_sale(&product, quantity, payment_method, customer.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_restock(
    ctx: &mut AppContext,
    product: String,
    quantity: i64,
    unit_cost: String,
    supplier: String,
) -> Result<()> {
    let unit_cost = Money::parse(&unit_cost)?;
    let result = ctx
        .api
        .record_purchase(&product, quantity, unit_cost, supplier)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_sales(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.sales_history()?;
    print_sales(&result.sales, &ctx.config.currency);
    print_messages(&result.messages);
    Ok(())
}

fn handle_purchases(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.purchases_history()?;
    print_purchases(&result.purchases, &ctx.config.currency);
    print_messages(&result.messages);
    Ok(())
}

fn handle_customers(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.customers()?;
    print_customers(&result.customers);
    print_messages(&result.messages);
    Ok(())
}

fn handle_add_customer(
    ctx: &mut AppContext,
    name: String,
    email: String,
    phone: String,
) -> Result<()> {
    let result = ctx.api.add_customer(CustomerDraft { name, email, phone })?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_report(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.report()?;
    if let Some(report) = &result.report {
        print_report(report, &ctx.config.currency);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let path = output.unwrap_or_else(|| PathBuf::from("relatorio_vendas.csv"));
    let result = ctx.api.export(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) | (Some("currency"), None) => {
            println!("currency = {}", ctx.config.currency);
        }
        (Some("currency"), Some(v)) => {
            let mut config = ctx.config.clone();
            config.currency = v;
            config.save(&ctx.data_dir)?;
            println!("currency = {}", config.currency);
        }
        (Some(other), _) => {
            return Err(LojinhaError::Input(format!(
                "chave de configuração desconhecida: {}",
                other
            )));
        }
    }
    Ok(())
}

// --- Rendering ---

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn amount(currency: &str, value: Money) -> String {
    format!("{} {}", currency, value)
}

fn print_products(rows: &[ProductRow], currency: &str) {
    if rows.is_empty() {
        println!("Nenhum produto encontrado.");
        return;
    }

    for row in rows {
        let p = &row.product;
        let status = match row.status {
            StockStatus::Out => row.status.label().red(),
            StockStatus::Low => row.status.label().yellow(),
            StockStatus::Normal => row.status.label().green(),
        };
        let stock = format!("{:>7}", format!("{} un", p.stock));
        let stock = if p.stock <= lojinha::LOW_STOCK_THRESHOLD {
            stock.red().bold()
        } else {
            stock.normal()
        };
        println!(
            "  {} {} {}  C: {}  V: {}  {}  {}",
            pad_to_width(&p.sku, 10).dimmed(),
            pad_to_width(&p.name, 32).bold(),
            pad_to_width(p.category.label(), 12),
            pad_to_width(&amount(currency, p.purchase_price), 12),
            pad_to_width(&amount(currency, p.sale_price), 12),
            stock,
            status
        );
    }
}

fn print_sales(rows: &[SaleRow], currency: &str) {
    if rows.is_empty() {
        println!("Nenhuma venda registrada ainda.");
        return;
    }

    for row in rows {
        let s = &row.sale;
        // Width is computed before any coloring; escape codes would skew it.
        let line = format!(
            "  {} x{:<4} {}  lucro {}  {}",
            pad_to_width(&row.product_name, 32),
            s.quantity,
            pad_to_width(&amount(currency, s.total), 13),
            pad_to_width(&amount(currency, s.profit), 13),
            pad_to_width(s.payment_method.label(), 14)
        );
        let padding = LINE_WIDTH
            .saturating_sub(line.width())
            .saturating_sub(TIME_WIDTH);
        println!(
            "{}{}{}",
            line,
            " ".repeat(padding),
            format_time_ago(s.date).dimmed()
        );
    }
}

fn print_purchases(rows: &[PurchaseRow], currency: &str) {
    if rows.is_empty() {
        println!("Nenhuma compra registrada ainda.");
        return;
    }

    for row in rows {
        let p = &row.purchase;
        let line = format!(
            "  {} x{:<4} {}  {}",
            pad_to_width(&row.product_name, 32),
            p.quantity,
            pad_to_width(&amount(currency, p.total_cost), 13),
            pad_to_width(&p.supplier, 24)
        );
        let padding = LINE_WIDTH
            .saturating_sub(line.width())
            .saturating_sub(TIME_WIDTH);
        println!(
            "{}{}{}",
            line,
            " ".repeat(padding),
            format_time_ago(p.date).dimmed()
        );
    }
}

fn print_customers(customers: &[Customer]) {
    if customers.is_empty() {
        println!("Nenhum cliente cadastrado.");
        return;
    }

    for customer in customers {
        println!(
            "  {} {} {}",
            pad_to_width(&customer.name, 28).bold(),
            pad_to_width(&customer.email, 30),
            customer.phone
        );
    }
}

fn print_dashboard(data: &DashboardData, currency: &str) {
    let stats = &data.stats;
    println!(
        "{} {}  {}",
        pad_to_width("Valor em Estoque", 20),
        amount(currency, stats.inventory_value).bold(),
        format!("({} itens totais)", stats.stock_count).dimmed()
    );
    println!(
        "{} {}",
        pad_to_width("Vendas do Dia", 20),
        amount(currency, stats.revenue_today).bold()
    );
    println!(
        "{} {}",
        pad_to_width("Lucro do Dia", 20),
        amount(currency, stats.profit_today).bold()
    );
    println!(
        "{} {}  {}",
        pad_to_width("Alertas de Estoque", 20),
        (stats.low_stock_alerts + stats.out_of_stock_alerts)
            .to_string()
            .bold(),
        format!(
            "({} esgotados, {} baixos)",
            stats.out_of_stock_alerts, stats.low_stock_alerts
        )
        .dimmed()
    );

    println!("\n{}", "Desempenho Semanal".bold());
    for bucket in &data.weekly {
        println!(
            "  {}  vendas {}  lucro {}",
            bucket.day.format("%m/%d"),
            pad_to_width(&amount(currency, bucket.revenue), 13),
            pad_to_width(&amount(currency, bucket.profit), 13).green()
        );
    }

    println!("\n{}", "Atenção ao Estoque".bold());
    if data.low_stock.is_empty() {
        println!("  {}", "Tudo sob controle!".dimmed());
    } else {
        for product in &data.low_stock {
            let count = format!("{} un", product.stock);
            let count = if product.stock == 0 {
                count.red()
            } else {
                count.yellow()
            };
            println!(
                "  {} {}  {}",
                pad_to_width(&product.name, 32),
                format!("(SKU: {})", product.sku).dimmed(),
                count
            );
        }
    }
}

fn print_report(report: &SalesReport, currency: &str) {
    println!(
        "{} {}",
        pad_to_width("Receita Bruta Total", 24),
        amount(currency, report.total_revenue).bold()
    );
    println!(
        "{} {}  {}",
        pad_to_width("Lucro Líquido Total", 24),
        amount(currency, report.total_profit).bold(),
        format!("(Margem Média: {:.1}%)", report.margin).dimmed()
    );
    println!(
        "{} {}",
        pad_to_width("Investimento em Estoque", 24),
        amount(currency, report.total_investment).bold()
    );

    println!("\n{}", "Top 5 Produtos Mais Vendidos".bold());
    if report.top_selling.is_empty() {
        println!(
            "  {}",
            "Ainda não há dados suficientes para gerar este ranking.".dimmed()
        );
    } else {
        for (i, item) in report.top_selling.iter().enumerate() {
            println!(
                "  {}. {} {} un",
                i + 1,
                pad_to_width(&item.name, 32),
                item.quantity
            );
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let display = if s.width() > width {
        truncate_to_width(s, width)
    } else {
        s.to_string()
    };
    let padding = width.saturating_sub(display.width());
    format!("{}{}", display, " ".repeat(padding))
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

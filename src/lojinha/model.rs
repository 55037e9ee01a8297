use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{LojinhaError, Result};
use crate::money::Money;

/// Product categories. Serialized with the storefront's Portuguese labels so
/// the persisted JSON matches what the shop actually displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Eletrônicos")]
    Electronics,
    #[serde(rename = "Vestuário")]
    Clothing,
    #[serde(rename = "Casa")]
    Home,
    #[serde(rename = "Beleza")]
    Beauty,
    #[serde(rename = "Outros")]
    Other,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Eletrônicos",
            Category::Clothing => "Vestuário",
            Category::Home => "Casa",
            Category::Beauty => "Beleza",
            Category::Other => "Outros",
        }
    }

    /// Parse user input leniently: the accented label or its plain-ASCII
    /// spelling, any casing.
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_lowercase().as_str() {
            "eletrônicos" | "eletronicos" => Ok(Category::Electronics),
            "vestuário" | "vestuario" => Ok(Category::Clothing),
            "casa" => Ok(Category::Home),
            "beleza" => Ok(Category::Beauty),
            "outros" => Ok(Category::Other),
            other => Err(LojinhaError::Input(format!("categoria inválida: {}", other))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Dinheiro")]
    Cash,
    #[serde(rename = "Transferência")]
    Transfer,
    #[serde(rename = "Cartão")]
    Card,
    #[serde(rename = "PIX")]
    Pix,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Dinheiro",
            PaymentMethod::Transfer => "Transferência",
            PaymentMethod::Card => "Cartão",
            PaymentMethod::Pix => "PIX",
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_lowercase().as_str() {
            "dinheiro" => Ok(PaymentMethod::Cash),
            "transferência" | "transferencia" => Ok(PaymentMethod::Transfer),
            "cartão" | "cartao" => Ok(PaymentMethod::Card),
            "pix" => Ok(PaymentMethod::Pix),
            other => Err(LojinhaError::Input(format!(
                "forma de pagamento inválida: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog entry. `stock` never goes negative; the sell command rejects
/// before mutating. `purchase_price` and `supplier` always reflect the most
/// recent purchase terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub category: Category,
    pub purchase_price: Money,
    pub sale_price: Money,
    pub stock: i64,
    pub supplier: String,
    pub entry_date: NaiveDate,
}

impl Product {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sku: String,
        name: String,
        category: Category,
        purchase_price: Money,
        sale_price: Money,
        stock: i64,
        supplier: String,
        entry_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sku,
            name,
            category,
            purchase_price,
            sale_price,
            stock,
            supplier,
            entry_date,
        }
    }
}

/// One recorded sale. Append-only: never edited or deleted. `total` and
/// `profit` are snapshots of the catalog prices at the moment of sale, so
/// later price changes never alter history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: String,
    pub product_id: String,
    pub quantity: i64,
    pub total: Money,
    pub profit: Money,
    pub date: DateTime<Utc>,
    pub payment_method: PaymentMethod,
    /// Absent means a walk-in sale.
    pub customer_id: Option<String>,
}

impl Sale {
    pub fn new(
        product: &Product,
        quantity: i64,
        payment_method: PaymentMethod,
        customer_id: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            product_id: product.id.clone(),
            quantity,
            total: product.sale_price * quantity,
            profit: (product.sale_price - product.purchase_price) * quantity,
            date: Utc::now(),
            payment_method,
            customer_id,
        }
    }
}

/// One recorded purchase (goods received). Append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Purchase {
    pub id: String,
    pub product_id: String,
    pub quantity: i64,
    pub unit_cost: Money,
    pub total_cost: Money,
    pub date: DateTime<Utc>,
    pub supplier: String,
}

impl Purchase {
    pub fn new(product_id: String, quantity: i64, unit_cost: Money, supplier: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            product_id,
            quantity,
            unit_cost,
            total_cost: unit_cost * quantity,
            date: Utc::now(),
            supplier,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    pub fn new(name: String, email: String, phone: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            phone,
        }
    }
}

/// Default catalog used the first time the shop opens, before anything was
/// ever persisted. Ids are plain strings on purpose: historical data with
/// non-UUID ids keeps loading unchanged.
pub fn seed_catalog() -> Vec<Product> {
    let entry = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("static seed date");
    vec![
        Product {
            id: "1".to_string(),
            sku: "ELET-001".to_string(),
            name: "Smartphone Pro Max".to_string(),
            category: Category::Electronics,
            purchase_price: Money::from_cents(350_000),
            sale_price: Money::from_cents(500_000),
            stock: 12,
            supplier: "Tech Solutions".to_string(),
            entry_date: entry(2023, 10, 1),
        },
        Product {
            id: "2".to_string(),
            sku: "HOME-005".to_string(),
            name: "Luminária LED".to_string(),
            category: Category::Home,
            purchase_price: Money::from_cents(4500),
            sale_price: Money::from_cents(9900),
            stock: 5,
            supplier: "Decor Ltda".to_string(),
            entry_date: entry(2023, 11, 15),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_accented_and_plain_spellings() {
        assert_eq!(Category::parse("Eletrônicos").unwrap(), Category::Electronics);
        assert_eq!(Category::parse("eletronicos").unwrap(), Category::Electronics);
        assert_eq!(Category::parse("VESTUARIO").unwrap(), Category::Clothing);
        assert!(Category::parse("gadgets").is_err());
    }

    #[test]
    fn payment_method_parses_leniently() {
        assert_eq!(PaymentMethod::parse("pix").unwrap(), PaymentMethod::Pix);
        assert_eq!(PaymentMethod::parse("Cartão").unwrap(), PaymentMethod::Card);
        assert_eq!(PaymentMethod::parse("cartao").unwrap(), PaymentMethod::Card);
        assert!(PaymentMethod::parse("fiado").is_err());
    }

    #[test]
    fn enums_serialize_to_storefront_labels() {
        assert_eq!(
            serde_json::to_string(&Category::Electronics).unwrap(),
            "\"Eletrônicos\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Pix).unwrap(),
            "\"PIX\""
        );
    }

    #[test]
    fn sale_snapshots_current_prices() {
        let product = Product::new(
            "SKU-1".into(),
            "Produto".into(),
            Category::Other,
            Money::from_cents(350_000),
            Money::from_cents(500_000),
            12,
            "Fornecedor".into(),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        );
        let sale = Sale::new(&product, 3, PaymentMethod::Card, None);
        assert_eq!(sale.total.cents(), 1_500_000);
        assert_eq!(sale.profit.cents(), 450_000);
        assert_eq!(sale.product_id, product.id);
        assert!(sale.customer_id.is_none());
    }

    #[test]
    fn purchase_totals_unit_cost() {
        let purchase = Purchase::new("1".into(), 5, Money::from_cents(360_000), "Nova".into());
        assert_eq!(purchase.total_cost.cents(), 1_800_000);
    }

    #[test]
    fn seed_catalog_ships_two_products() {
        let seed = seed_catalog();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0].sku, "ELET-001");
        assert_eq!(seed[0].stock, 12);
        assert_eq!(seed[1].sku, "HOME-005");
        assert_eq!(seed[1].stock, 5);
    }
}

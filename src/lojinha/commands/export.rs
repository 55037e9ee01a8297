use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{LojinhaError, Result};
use crate::store::{StorageBackend, Store};
use std::fs;
use std::path::Path;

pub const CSV_HEADER: &str = "ID,Data,Produto,Quantidade,Valor Total,Lucro";

/// Write the sales report CSV to `path`.
pub fn run<B: StorageBackend>(store: &Store<B>, path: &Path) -> Result<CmdResult> {
    let csv = render_csv(store);
    fs::write(path, csv).map_err(LojinhaError::Io)?;

    let mut result = CmdResult::default().with_export_path(path.to_path_buf());
    if store.sales.is_empty() {
        result.add_message(CmdMessage::info("Nenhuma venda registrada ainda."));
    }
    result.add_message(CmdMessage::success(format!(
        "Relatório exportado para {}",
        path.display()
    )));
    Ok(result)
}

/// One row per sale in stored (newest first) order, header first. The
/// product name is quoted with embedded quotes doubled; amounts are plain
/// decimals so spreadsheets parse them as numbers.
pub fn render_csv<B: StorageBackend>(store: &Store<B>) -> String {
    let mut lines = vec![CSV_HEADER.to_string()];
    for sale in &store.sales {
        let name =
            helpers::product_label(store, &sale.product_id, helpers::MISSING_PRODUCT).replace('"', "\"\"");
        lines.push(format!(
            "{},{},\"{}\",{},{},{}",
            sale.id,
            sale.date.to_rfc3339(),
            name,
            sale.quantity,
            sale.total.to_decimal_string(),
            sale.profit.to_decimal_string()
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{sell, SaleDraft};
    use crate::model::PaymentMethod;
    use crate::store::memory::fixtures::{product, store_with};
    use tempfile::TempDir;

    fn sell_one(store: &mut crate::store::Store<crate::store::memory::MemBackend>, id: &str) {
        sell::run(
            store,
            SaleDraft {
                product_id: id.to_string(),
                quantity: 3,
                payment_method: PaymentMethod::Card,
                customer_id: None,
            },
        )
        .unwrap();
    }

    #[test]
    fn header_only_when_no_sales() {
        let store = store_with(vec![]);
        assert_eq!(render_csv(&store), CSV_HEADER);
    }

    #[test]
    fn rows_follow_stored_order_with_quoted_names() {
        let mut store = store_with(vec![product("A", "Smartphone Pro Max", 350_000, 500_000, 12)]);
        let id = store.products[0].id.clone();
        sell_one(&mut store, &id);

        let csv = render_csv(&store);
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), CSV_HEADER);
        let row = lines.next().unwrap();
        assert!(row.contains("\"Smartphone Pro Max\""));
        assert!(row.ends_with(",3,15000.00,4500.00"));
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let mut store = store_with(vec![product("A", "Caneca \"Premium\"", 100, 200, 5)]);
        let id = store.products[0].id.clone();
        sell_one(&mut store, &id);

        assert!(render_csv(&store).contains("\"Caneca \"\"Premium\"\"\""));
    }

    #[test]
    fn removed_products_export_as_placeholder() {
        let mut store = store_with(vec![product("A", "Produto", 100, 200, 5)]);
        let id = store.products[0].id.clone();
        sell_one(&mut store, &id);
        store.products.clear();

        assert!(render_csv(&store).contains(",\"---\","));
    }

    #[test]
    fn run_writes_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("relatorio.csv");
        let store = store_with(vec![]);

        let result = run(&store, &path).unwrap();

        assert_eq!(result.export_path.as_deref(), Some(path.as_path()));
        assert_eq!(fs::read_to_string(path).unwrap(), CSV_HEADER);
    }
}

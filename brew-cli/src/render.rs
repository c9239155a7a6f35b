use brew_catalog::{Beverage, CondimentKind, DrinkKind, LineKind, Price, Receipt};
use serde_json::json;

use crate::app_config::OutputFormat;

const LABEL_WIDTH: usize = 28;

pub fn render_beverage(beverage: &dyn Beverage, format: OutputFormat, with_receipt: bool) -> serde_json::Result<String> {
    match (format, with_receipt) {
        (OutputFormat::Text, false) => Ok(format!("{}: {}", beverage.describe(), beverage.price())),
        (OutputFormat::Text, true) => Ok(receipt_text(&Receipt::for_beverage(beverage))),
        (OutputFormat::Json, false) => serde_json::to_string_pretty(&json!({
            "description": beverage.describe(),
            "price": beverage.price(),
            "display_price": beverage.price().to_string(),
        })),
        (OutputFormat::Json, true) => Receipt::for_beverage(beverage).to_json(),
    }
}

/// One aligned `label  amount` row
fn row(label: &str, amount: Price) -> String {
    format!("  {:<width$}{:>8}", label, amount.to_string(), width = LABEL_WIDTH)
}

fn receipt_text(receipt: &Receipt) -> String {
    let mut rows = vec![receipt.description.clone()];
    rows.extend(receipt.lines.iter().map(|line| match line.kind {
        LineKind::Base => row(&line.label, line.amount),
        LineKind::Condiment => row(&format!("+ {}", line.label), line.amount),
    }));
    rows.push(row("Total", receipt.total));
    rows.join("\n")
}

pub fn render_menu(format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut rows = vec!["Drinks:".to_string()];
            rows.extend(DrinkKind::ALL.iter().map(|kind| row(kind.name(), kind.cost())));
            rows.push("Condiments:".to_string());
            rows.extend(
                CondimentKind::ALL
                    .iter()
                    .map(|kind| row(&format!("+ {}", kind.suffix()), kind.surcharge())),
            );
            Ok(rows.join("\n"))
        }
        OutputFormat::Json => {
            let drinks: Vec<_> = DrinkKind::ALL
                .iter()
                .map(|kind| json!({ "kind": kind, "name": kind.name(), "price": kind.cost() }))
                .collect();
            let condiments: Vec<_> = CondimentKind::ALL
                .iter()
                .map(|kind| json!({ "kind": kind, "suffix": kind.suffix(), "surcharge": kind.surcharge() }))
                .collect();
            serde_json::to_string_pretty(&json!({ "drinks": drinks, "condiments": condiments }))
        }
    }
}

use brew_shared::Price;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::beverage::{layers, Beverage};

/// What a receipt line was charged for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineKind {
    Base,
    Condiment,
}

/// One layer of a beverage and the amount it contributed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReceiptLine {
    pub label: String,
    pub kind: LineKind,
    pub amount: Price,
}

/// Itemised breakdown of a composed beverage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub description: String,
    /// Base drink first, outermost condiment last
    pub lines: Vec<ReceiptLine>,
    pub total: Price,
}

impl Receipt {
    /// Break a chain down into one line per layer, each charged at the
    /// layer's own amount. The lines always sum to `beverage.price()`.
    pub fn for_beverage(beverage: &dyn Beverage) -> Self {
        let mut lines: Vec<ReceiptLine> = layers(beverage)
            .map(|layer| ReceiptLine {
                label: layer.label().to_string(),
                kind: if layer.wrapped().is_some() {
                    LineKind::Condiment
                } else {
                    LineKind::Base
                },
                amount: layer.own_price(),
            })
            .collect();
        lines.reverse();

        let receipt = Self {
            id: Uuid::new_v4(),
            issued_at: Utc::now(),
            description: beverage.describe(),
            total: lines.iter().map(|line| line.amount).sum(),
            lines,
        };

        tracing::debug!(
            "Issued receipt {} for '{}': {} line(s), total {}",
            receipt.id,
            receipt.description,
            receipt.lines.len(),
            receipt.total
        );

        receipt
    }

    /// Sum of the condiment lines only
    pub fn condiment_total(&self) -> Price {
        self.lines
            .iter()
            .filter(|line| line.kind == LineKind::Condiment)
            .map(|line| line.amount)
            .sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

use serde::{Deserialize, Serialize};

use super::item::CategorizedItem;
use super::money::{Money, OddCent};
use super::settlement::SettlementResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    /// Marker appended after every amount.
    pub currency_marker: String,
    pub odd_cent: OddCent,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            currency_marker: "€".to_string(),
            odd_cent: OddCent::Me,
        }
    }
}

/// Render the plain-text report handed to the clipboard.
///
/// Empty categories are left out; ignored items never appear.
pub fn format_summary(result: &SettlementResult, options: &SummaryOptions) -> String {
    let owed = result.owed(options.odd_cent);
    let amount = |m: Money| m.to_string_with_marker(&options.currency_marker);

    let mut lines: Vec<String> = vec![
        "Receipt Split Summary".to_string(),
        "=====================".to_string(),
        String::new(),
    ];

    let sections: [(&str, &[CategorizedItem]); 3] = [
        ("Me:", &result.me_items),
        ("You:", &result.you_items),
        ("Shared (split 50/50):", &result.common_items),
    ];
    for (label, items) in sections {
        if items.is_empty() {
            continue;
        }
        lines.push(label.to_string());
        for entry in items {
            lines.push(format!("  {}: {}", entry.item.name, amount(entry.item.price)));
        }
        lines.push(String::new());
    }

    lines.push("---------------------".to_string());
    lines.push(format!("Me owes: {}", amount(owed.me_owes)));
    lines.push(format!("You owe: {}", amount(owed.you_owes)));

    lines.join("\n")
}

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context};
use serde::Serialize;
use tasajako_core::{
    confirm_items, format_summary, split, CategorizedItem, Category, LineItem, Owed, SettlementResult,
};
use tasajako_ocr::{ReceiptPipeline, UnavailableBackend};

use crate::config::AppConfig;

/// Read a file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

pub fn parse(config: &AppConfig, text: &str, report: bool) -> anyhow::Result<String> {
    // Text arrives complete, so no OCR or PDF engine is involved.
    let pipeline = ReceiptPipeline::new(UnavailableBackend, UnavailableBackend, config.build_parser()?);
    let scan = pipeline.process_text(text);
    let json = if report {
        serde_json::to_string_pretty(&scan)?
    } else {
        serde_json::to_string_pretty(&scan.items)?
    };
    Ok(json)
}

pub fn assign(items_json: &str, categories: &[Category]) -> anyhow::Result<String> {
    let items: Vec<LineItem> = serde_json::from_str(items_json).context("Invalid line item JSON")?;
    let items = confirm_items(items);
    if items.len() != categories.len() {
        bail!(
            "Got {} categories for {} items; every item needs exactly one",
            categories.len(),
            items.len()
        );
    }
    let categorized: Vec<CategorizedItem> = items
        .into_iter()
        .zip(categories.iter().copied())
        .map(|(item, category)| CategorizedItem::new(item, category))
        .collect();
    Ok(serde_json::to_string_pretty(&categorized)?)
}

#[derive(Debug, Serialize)]
struct SplitOutput {
    #[serde(flatten)]
    result: SettlementResult,
    #[serde(flatten)]
    owed: Owed,
}

fn settle(categorized_json: &str) -> anyhow::Result<SettlementResult> {
    let categorized: Vec<CategorizedItem> =
        serde_json::from_str(categorized_json).context("Invalid categorized item JSON")?;
    Ok(split(&categorized))
}

pub fn split_json(config: &AppConfig, categorized_json: &str) -> anyhow::Result<String> {
    let result = settle(categorized_json)?;
    let owed = result.owed(config.summary.odd_cent);
    Ok(serde_json::to_string_pretty(&SplitOutput { result, owed })?)
}

pub fn summary(config: &AppConfig, categorized_json: &str) -> anyhow::Result<String> {
    let result = settle(categorized_json)?;
    Ok(format_summary(&result, &config.summary))
}

pub fn dialects(config: &AppConfig) -> String {
    let table = config.dialect_table();
    let mut lines = Vec::new();
    for dialect in table.iter() {
        let enabled = config.parser.dialects.is_empty() || config.parser.dialects.contains(&dialect.name);
        lines.push(format!(
            "{}{}: {} footer markers, {} discount labels, {} skip patterns",
            dialect.name,
            if enabled { "" } else { " (disabled)" },
            dialect.footer_markers.len(),
            dialect.discount_labels.len(),
            dialect.skip_patterns.len(),
        ));
    }
    lines.join("\n")
}

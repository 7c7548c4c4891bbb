use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tasajako_core::SummaryOptions;
use tasajako_ocr::{DialectTable, ParserConfig, ReceiptDialect, ReceiptParser};

pub const DEFAULT_CONFIG_FILE: &str = "tasajako.toml";

/// Contents of `tasajako.toml`. Every section is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub parser: ParserConfig,
    pub summary: SummaryOptions,
    /// Extra dialects; one with a built-in name replaces the built-in.
    #[serde(rename = "dialect")]
    pub dialects: Vec<ReceiptDialect>,
}

impl AppConfig {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load an explicit config file, or `./tasajako.toml` if it exists, or defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = match explicit {
            Some(path) => path,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    tracing::debug!("no config file; using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn dialect_table(&self) -> DialectTable {
        let mut table = DialectTable::builtin();
        table.extend(self.dialects.iter().cloned());
        table
    }

    pub fn build_parser(&self) -> anyhow::Result<ReceiptParser> {
        ReceiptParser::with_table(self.parser.clone(), &self.dialect_table())
            .context("Invalid [parser] configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tasajako_core::{Money, OddCent};

    #[test]
    fn empty_config_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.parser, ParserConfig::default());
        assert_eq!(config.summary, SummaryOptions::default());
        assert!(config.dialects.is_empty());
    }

    #[test]
    fn full_config_parses() {
        let config = AppConfig::from_toml(
            r#"
[parser]
dialects = ["fi"]
currency_symbols = ["€", "EUR"]
noisy_price_max = "49.99"

[summary]
currency_marker = "EUR"
odd_cent = "you"

[[dialect]]
name = "lidl"
skip_patterns = ["^pfand"]
"#,
        )
        .unwrap();
        assert_eq!(config.parser.dialects, vec!["fi"]);
        assert_eq!(config.parser.noisy_price_max, Money::from_cents(4999));
        assert_eq!(config.parser.max_name_len, 80);
        assert_eq!(config.summary.odd_cent, OddCent::You);
        assert_eq!(config.dialect_table().names(), vec!["fi", "en", "lidl"]);
        assert!(config.build_parser().is_ok());
    }

    #[test]
    fn unknown_dialect_in_config_fails_to_build() {
        let config = AppConfig::from_toml("[parser]\ndialects = [\"nope\"]").unwrap();
        assert!(config.build_parser().is_err());
    }

    #[test]
    fn load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[summary]\ncurrency_marker = \"e\"").unwrap();
        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.summary.currency_marker, "e");
    }

    #[test]
    fn load_missing_explicit_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(AppConfig::load(Some(missing.as_path())).is_err());
    }
}

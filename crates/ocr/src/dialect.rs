//! Receipt dialects: the marker and noise pattern tables the parser runs on.
//!
//! A dialect is plain data. Adding support for a new store layout means adding
//! a table here (or a `[[dialect]]` block in the config file), never touching
//! the passes in [`crate::parser`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DialectError {
    #[error("Failed to parse dialect TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Unknown receipt dialect: '{0}'")]
    Unknown(String),
}

/// A phrase that starts the tax/footer summary. Everything from the first
/// match onwards is dropped before item extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterMarker {
    pub pattern: String,
    /// Markers are tried highest priority first; the first one that matches
    /// anywhere in the text wins, regardless of position.
    #[serde(default)]
    pub priority: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptDialect {
    pub name: String,
    #[serde(default)]
    pub footer_markers: Vec<FooterMarker>,
    /// Literal discount labels ("Plussasetti") that open a discount breakdown.
    #[serde(default)]
    pub discount_labels: Vec<String>,
    /// Case-insensitive patterns; a candidate name matching any of them is noise.
    #[serde(default)]
    pub skip_patterns: Vec<String>,
    /// Column-header fragments stripped out of names where OCR glued them on.
    #[serde(default)]
    pub header_fragments: Vec<String>,
}

// ── Built-in tables ──────────────────────────────────────────────────────────

const FI_FOOTER: &[(&str, i32)] = &[
    (r"alv\s+veroton\s+vero\s+verollinen", 40),
    // Tolerates dropped letters and separators ("KANTAASAKAS").
    (r"kanta.?asi?a?kas", 20),
    (r"yhteensä|vrreensä", 10),
];

const FI_DISCOUNTS: &[&str] = &["Plussa-tasaerä", "Plussasetti", "Tasaerä"];

const FI_SKIP: &[&str] = &[
    r"kuitti tilauksestasi",
    r"ostostesi kokonaishinta",
    r"^tuotteet\s+kuvaus",
    r"kuvaus\s+määrä\s+yhteensä",
    r"yhteensä",
    r"vrreensä",
    r"^kuvaus$",
    r"^määrä$",
    r"^maksukortti",
    r"^plussa-kortti",
    r"^kuittinumero",
    r"^tilaus:",
    r"^säästit",
    r"toimitusmaksun verolliset",
    r"^kanta-asiakas",
    r"^kortti:",
    r"plussaa",
    r"kerryttävät",
    r"ostot\s*$",
    r"^alv\s+\d",
    r"^veroton",
    r"^kiitos käynnistä",
    r"^avoinna",
    r"^ma-pe",
    r"supermarket",
    r"^\d{4}\s+\*{4}",
    r"^k\d{3}\s+m",
    r"m\d{5,}",
    r"^\d{2}:\d{2}\s",
    r"puh\.",
    r"y-tunnus",
];

const FI_HEADERS: &[&str] = &[
    r"Tuotteet\s+Kuvaus\s+määrä\s+yhteensä\s*",
    r"Kuvaus\s+määrä\s+yhteensä\s*",
];

const EN_FOOTER: &[(&str, i32)] = &[(r"card\s+transaction", 30)];

const EN_SKIP: &[&str] = &[
    r"^card\s+transaction",
    r"^card:",
    r"^application:",
    r"^tr\.nr",
    r"^payee",
    r"^reference:",
    r"^debit/charge",
    r"^paypass",
    r"^(?:sub\s*)?total\b",
    r"^(?:vat|tax)\b",
    r"^change\b",
    r"^thank\s+you",
];

const EN_HEADERS: &[&str] = &[r"Description\s+(?:Qty|Quantity)\s+(?:Total|Amount)\s*"];

fn build(
    name: &str,
    footer: &[(&str, i32)],
    discounts: &[&str],
    skip: &[&str],
    headers: &[&str],
) -> ReceiptDialect {
    let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
    ReceiptDialect {
        name: name.to_string(),
        footer_markers: footer
            .iter()
            .map(|(pattern, priority)| FooterMarker {
                pattern: pattern.to_string(),
                priority: *priority,
            })
            .collect(),
        discount_labels: owned(discounts),
        skip_patterns: owned(skip),
        header_fragments: owned(headers),
    }
}

impl ReceiptDialect {
    /// Finnish grocery receipts: K-Ruoka online orders and S-group register tape.
    pub fn finnish() -> Self {
        build("fi", FI_FOOTER, FI_DISCOUNTS, FI_SKIP, FI_HEADERS)
    }

    /// English card-terminal slips and totals lines.
    pub fn english() -> Self {
        build("en", EN_FOOTER, &[], EN_SKIP, EN_HEADERS)
    }
}

// ── Dialect table ────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct DialectFile {
    #[serde(default, rename = "dialect")]
    dialects: Vec<ReceiptDialect>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialectTable {
    dialects: Vec<ReceiptDialect>,
}

impl DialectTable {
    pub fn builtin() -> Self {
        Self { dialects: vec![ReceiptDialect::finnish(), ReceiptDialect::english()] }
    }

    /// Parse a TOML document made of `[[dialect]]` tables.
    pub fn from_toml(toml_content: &str) -> Result<Self, DialectError> {
        let file: DialectFile = toml::from_str(toml_content)?;
        Ok(Self { dialects: file.dialects })
    }

    /// Add dialects, replacing any existing one with the same name.
    pub fn extend(&mut self, dialects: impl IntoIterator<Item = ReceiptDialect>) {
        for dialect in dialects {
            match self.dialects.iter_mut().find(|d| d.name == dialect.name) {
                Some(existing) => *existing = dialect,
                None => self.dialects.push(dialect),
            }
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.dialects.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&ReceiptDialect> {
        self.dialects.iter().find(|d| d.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReceiptDialect> {
        self.dialects.iter()
    }

    /// Resolve dialect names; an empty selection means every dialect in the table.
    pub fn select(&self, names: &[String]) -> Result<Vec<&ReceiptDialect>, DialectError> {
        if names.is_empty() {
            return Ok(self.dialects.iter().collect());
        }
        names
            .iter()
            .map(|n| self.get(n).ok_or_else(|| DialectError::Unknown(n.clone())))
            .collect()
    }
}

// ── Compiled rules ───────────────────────────────────────────────────────────

/// The merged, precompiled pattern set for a selection of dialects.
#[derive(Debug, Clone)]
pub struct CompiledRules {
    footer_markers: Vec<Regex>,
    discount_marker: Option<Regex>,
    discount_line: Option<Regex>,
    currency_item: Regex,
    skip: Vec<Regex>,
    header_fragments: Vec<Regex>,
}

/// Letters accepted at the start of an item name.
pub(crate) const NAME_START: &str = "A-ZÄÖÅa-zäöå";
/// Characters accepted inside an item name (a single line, no line breaks).
pub(crate) const NAME_BODY: &str = r"A-ZÄÖÅa-zäöå0-9 \t\-/%.,:";

fn compile_ci(pattern: &str, dialect: &str) -> Option<Regex> {
    match Regex::new(&format!("(?i){pattern}")) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!(dialect, pattern, error = %e, "skipping invalid receipt pattern");
            None
        }
    }
}

impl CompiledRules {
    pub fn compile(dialects: &[&ReceiptDialect], currency_symbols: &[String]) -> Self {
        let currency = currency_alternation(currency_symbols);

        let mut markers: Vec<(i32, Regex)> = dialects
            .iter()
            .flat_map(|d| {
                d.footer_markers.iter().filter_map(move |m| {
                    compile_ci(&m.pattern, &d.name).map(|re| (m.priority, re))
                })
            })
            .collect();
        // Stable, so equal priorities keep dialect order.
        markers.sort_by(|a, b| b.0.cmp(&a.0));

        let mut labels: Vec<&str> = dialects
            .iter()
            .flat_map(|d| d.discount_labels.iter().map(String::as_str))
            .collect();
        // Longest first, so "Plussa-tasaerä" wins over its "tasaerä" suffix.
        labels.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        labels.dedup();
        let (discount_marker, discount_line) = if labels.is_empty() {
            (None, None)
        } else {
            let alternation = labels.iter().map(|l| regex::escape(l)).collect::<Vec<_>>().join("|");
            (
                compile_ci(
                    &format!(r"(?:{alternation})\s+-[0-9]{{1,3}}[.,][0-9]{{2}}\s*{currency}"),
                    "discount",
                ),
                Regex::new(&format!(
                    r"({alternation})\s+(-[0-9]{{1,3}}[.,][0-9]{{2}})\s*{currency}\s*([{NAME_START}][{NAME_BODY}]+?)\s+([0-9]+)"
                ))
                .ok(),
            )
        };

        let currency_item = Regex::new(&format!(
            r"([{NAME_START}][{NAME_BODY}]+?)\s+(?:([0-9]+(?:[.,][0-9]+)?\s*(?:kg|g|l|ml|kpl|rl|pack|p|-p|eur)?)\s+)?(-?[0-9]{{1,3}}[.,][0-9]{{2}})\s*{currency}"
        ))
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "currency symbols produced an invalid pattern; using €");
            fallback_currency_item()
        });

        Self {
            footer_markers: markers.into_iter().map(|(_, re)| re).collect(),
            discount_marker,
            discount_line,
            currency_item,
            skip: compile_each(dialects, |d| d.skip_patterns.as_slice()),
            header_fragments: compile_each(dialects, |d| d.header_fragments.as_slice()),
        }
    }

    pub fn footer_markers(&self) -> &[Regex] {
        &self.footer_markers
    }

    pub fn discount_marker(&self) -> Option<&Regex> {
        self.discount_marker.as_ref()
    }

    pub fn discount_line(&self) -> Option<&Regex> {
        self.discount_line.as_ref()
    }

    pub fn currency_item(&self) -> &Regex {
        &self.currency_item
    }

    /// Whether a candidate name is header/footer noise rather than a product.
    pub fn is_noise(&self, name: &str) -> bool {
        let trimmed = name.trim();
        trimmed.chars().count() < 3 || self.skip.iter().any(|re| re.is_match(trimmed))
    }

    /// Remove column-header fragments that bled into a name.
    pub fn strip_header_fragments(&self, name: &str) -> String {
        self.header_fragments
            .iter()
            .fold(name.to_string(), |acc, re| re.replace_all(&acc, "").into_owned())
            .trim()
            .to_string()
    }
}

fn compile_each(dialects: &[&ReceiptDialect], select: fn(&ReceiptDialect) -> &[String]) -> Vec<Regex> {
    let mut compiled = Vec::new();
    for dialect in dialects {
        for pattern in select(dialect) {
            if let Some(re) = compile_ci(pattern, &dialect.name) {
                compiled.push(re);
            }
        }
    }
    compiled
}

fn currency_alternation(symbols: &[String]) -> String {
    let escaped: Vec<String> = symbols
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(regex::escape)
        .collect();
    if escaped.is_empty() {
        "(?:€)".to_string()
    } else {
        format!("(?:{})", escaped.join("|"))
    }
}

fn fallback_currency_item() -> Regex {
    static R: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    R.get_or_init(|| {
        Regex::new(&format!(
            r"([{NAME_START}][{NAME_BODY}]+?)\s+(?:([0-9]+(?:[.,][0-9]+)?\s*(?:kg|g|l|ml|kpl|rl|pack|p|-p|eur)?)\s+)?(-?[0-9]{{1,3}}[.,][0-9]{{2}})\s*€"
        ))
        .expect("invalid regex")
    })
    .clone()
}

//! Line-item extraction from raw receipt text.
//!
//! Receipts come in too many layouts for one grammar, so extraction is a
//! cascade of progressively more permissive passes. The first of passes 1–3
//! that yields anything wins; the discount pass always runs on top.

use std::collections::HashSet;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tasajako_core::{LineItem, Money};

use crate::dialect::{CompiledRules, DialectError, DialectTable, ReceiptDialect};
use crate::sections::{self, Sections};

// ── Compiled regex cache ─────────────────────────────────────────────────────

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static Regex {
            static R: OnceLock<Regex> = OnceLock::new();
            R.get_or_init(|| Regex::new($pat).expect("invalid regex"))
        }
    };
}

re!(re_fixed_width, r"(?m)^(.+?)\s{2,}(-?[0-9]{1,3}[.,][0-9]{2})$");
re!(re_noisy_price, r"^([0-9]{1,2})[.,]([0-9]{2})");
re!(re_whitespace, r"\s+");
re!(re_name_garbage, r"[^A-ZÄÖÅa-zäöå0-9\s\-/%.,:]");
re!(re_leading_non_letters, r"^[^A-ZÄÖÅa-zäöå]*");
re!(re_trailing_time, r"\d{1,2}[:.]\d{2}\s*$");
re!(re_trailing_date, r"\d{1,2}[.,]\d{1,2}[.,]\d{2,4}\s*$");

// ── Configuration ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Dialects to load from the table; empty means all of them.
    pub dialects: Vec<String>,
    pub currency_symbols: Vec<String>,
    /// Longest accepted name in the currency and fixed-width passes.
    pub max_name_len: usize,
    /// Longest accepted name in the noisy fallback pass.
    pub noisy_max_name_len: usize,
    /// Plausibility band for prices found by the noisy fallback pass.
    pub noisy_price_min: Money,
    pub noisy_price_max: Money,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            dialects: Vec::new(),
            currency_symbols: vec!["€".to_string()],
            max_name_len: 80,
            noisy_max_name_len: 60,
            noisy_price_min: Money::from_cents(10),
            noisy_price_max: Money::from_cents(9999),
        }
    }
}

const MIN_NAME_LEN: usize = 3;
/// Short names on negative amounts are nearly always stray discount fragments.
const MIN_NEGATIVE_NAME_LEN: usize = 5;

// ── Passes ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassKind {
    /// `<name> [<qty>] <amount> €`
    Currency,
    /// `<name>  <amount>` at end of line, register-tape style.
    FixedWidth,
    /// Last price-looking number on each line.
    Noisy,
    /// `<label> -<amount> € <product> <qty>` from the discount breakdown.
    Discount,
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassKind::Currency => write!(f, "currency"),
            PassKind::FixedWidth => write!(f, "fixed_width"),
            PassKind::Noisy => write!(f, "noisy"),
            PassKind::Discount => write!(f, "discount"),
        }
    }
}

/// Items plus which pass produced them.
#[derive(Debug, Clone, Serialize)]
pub struct ParseReport {
    pub items: Vec<LineItem>,
    /// The item pass that succeeded, if any.
    pub pass: Option<PassKind>,
    pub discount_count: usize,
}

/// Seen `(name, price)` pairs, shared by every pass of one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Dedup {
    seen: HashSet<(String, i64)>,
}

impl Dedup {
    fn admit(&mut self, name: &str, price: Money) -> bool {
        self.seen.insert((name.to_string(), price.to_cents()))
    }
}

fn non_empty(items: Vec<LineItem>) -> Option<Vec<LineItem>> {
    (!items.is_empty()).then_some(items)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub struct ReceiptParser {
    config: ParserConfig,
    rules: CompiledRules,
    #[cfg(test)]
    fail_pass: Option<PassKind>,
}

impl Default for ReceiptParser {
    fn default() -> Self {
        let table = DialectTable::builtin();
        let dialects: Vec<&ReceiptDialect> = table.iter().collect();
        Self::build(ParserConfig::default(), &dialects)
    }
}

impl ReceiptParser {
    /// Parser over the built-in dialect table.
    pub fn new(config: ParserConfig) -> Result<Self, DialectError> {
        Self::with_table(config, &DialectTable::builtin())
    }

    pub fn with_table(config: ParserConfig, table: &DialectTable) -> Result<Self, DialectError> {
        let dialects = table.select(&config.dialects)?;
        Ok(Self::build(config, &dialects))
    }

    fn build(config: ParserConfig, dialects: &[&ReceiptDialect]) -> Self {
        let rules = CompiledRules::compile(dialects, &config.currency_symbols);
        Self {
            config,
            rules,
            #[cfg(test)]
            fail_pass: None,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Extract line items. Never fails; unreadable text gives an empty list.
    pub fn parse(&self, raw_text: &str) -> Vec<LineItem> {
        self.parse_with_report(raw_text).items
    }

    pub fn parse_with_report(&self, raw_text: &str) -> ParseReport {
        let text = sections::normalize_line_endings(raw_text);
        let sections = sections::split_sections(&text, &self.rules);
        tracing::debug!(
            main_len = sections.main.len(),
            discount_len = sections.discounts.len(),
            "receipt sections split"
        );

        let mut dedup = Dedup::default();
        let mut items = Vec::new();
        let mut pass = None;

        for kind in [PassKind::Currency, PassKind::FixedWidth, PassKind::Noisy] {
            if let Some(found) = self.run_pass(kind, &sections, &mut dedup) {
                pass = Some(kind);
                items = found;
                break;
            }
        }

        let discounts = self.run_pass(PassKind::Discount, &sections, &mut dedup).unwrap_or_default();
        let discount_count = discounts.len();
        items.extend(discounts);

        tracing::debug!(items = items.len(), ?pass, discount_count, "receipt parsed");
        ParseReport { items, pass, discount_count }
    }

    /// Run one pass with panics contained: a pass that blows up counts as
    /// having found nothing, and leaves the dedup set untouched.
    fn run_pass(&self, kind: PassKind, sections: &Sections<'_>, dedup: &mut Dedup) -> Option<Vec<LineItem>> {
        let mut scratch = dedup.clone();
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let found = match kind {
                PassKind::Currency => self.currency_items(sections.main, &mut scratch),
                PassKind::FixedWidth => self.fixed_width_items(sections.main, &mut scratch),
                PassKind::Noisy => self.noisy_items(sections.main, &mut scratch),
                PassKind::Discount => self.discount_items(sections.discounts, &mut scratch),
            };
            #[cfg(test)]
            self.inject_failure(kind);
            (found, scratch)
        }));

        match outcome {
            Ok((found, scratch)) => {
                *dedup = scratch;
                tracing::debug!(pass = %kind, found = found.as_ref().map_or(0, Vec::len), "pass finished");
                found
            }
            Err(_) => {
                tracing::warn!(pass = %kind, "pass aborted on malformed input; skipping");
                None
            }
        }
    }

    #[cfg(test)]
    fn inject_failure(&self, kind: PassKind) {
        if self.fail_pass == Some(kind) {
            panic!("injected failure in {kind} pass");
        }
    }

    /// Shared acceptance: not noise, long enough, not seen before.
    fn accept(&self, name: &str, price: Money, min_len: usize, dedup: &mut Dedup) -> bool {
        char_len(name) >= min_len && !self.rules.is_noise(name) && dedup.admit(name, price)
    }

    fn clean_name(&self, raw: &str) -> String {
        let stripped = self.rules.strip_header_fragments(raw);
        re_whitespace().replace_all(&stripped, " ").trim().to_string()
    }

    // Pass 1
    fn currency_items(&self, text: &str, dedup: &mut Dedup) -> Option<Vec<LineItem>> {
        let mut items = Vec::new();
        for caps in self.rules.currency_item().captures_iter(text) {
            let (Some(name), Some(amount)) = (caps.get(1), caps.get(3)) else {
                continue;
            };
            let Some(price) = Money::parse_receipt_amount(amount.as_str()) else {
                continue;
            };
            if price.is_zero() {
                continue;
            }
            let name = self.clean_name(name.as_str());
            if char_len(&name) > self.config.max_name_len {
                continue;
            }
            let min_len = if price.is_negative() { MIN_NEGATIVE_NAME_LEN } else { MIN_NAME_LEN };
            if self.accept(&name, price, min_len, dedup) {
                items.push(LineItem::new(name, price));
            }
        }
        non_empty(items)
    }

    // Pass 2
    fn fixed_width_items(&self, text: &str, dedup: &mut Dedup) -> Option<Vec<LineItem>> {
        let mut items = Vec::new();
        for caps in re_fixed_width().captures_iter(text) {
            let (Some(name), Some(amount)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let Some(price) = Money::parse_receipt_amount(amount.as_str()) else {
                continue;
            };
            if price.is_zero() {
                continue;
            }
            let name = self.clean_name(name.as_str());
            if char_len(&name) > self.config.max_name_len {
                continue;
            }
            if self.accept(&name, price, MIN_NAME_LEN, dedup) {
                items.push(LineItem::new(name, price));
            }
        }
        non_empty(items)
    }

    // Pass 3
    fn noisy_items(&self, text: &str, dedup: &mut Dedup) -> Option<Vec<LineItem>> {
        let mut items = Vec::new();
        for line in text.split('\n') {
            let Some((price_start, price)) = last_price(line) else {
                continue;
            };
            if price < self.config.noisy_price_min || price > self.config.noisy_price_max {
                continue;
            }
            let name = clean_noisy_name(&line[..price_start]);
            if char_len(&name) > self.config.noisy_max_name_len {
                continue;
            }
            if self.accept(&name, price, MIN_NAME_LEN, dedup) {
                items.push(LineItem::new(name, price));
            }
        }
        non_empty(items)
    }

    // Pass 4
    fn discount_items(&self, text: &str, dedup: &mut Dedup) -> Option<Vec<LineItem>> {
        let re = self.rules.discount_line()?;
        let mut items = Vec::new();
        for caps in re.captures_iter(text) {
            let (Some(label), Some(amount), Some(product)) = (caps.get(1), caps.get(2), caps.get(3)) else {
                continue;
            };
            let Some(price) = Money::parse_receipt_amount(amount.as_str()) else {
                continue;
            };
            if price.is_zero() {
                continue;
            }
            let name = format!("{} {}", product.as_str().trim(), label.as_str().trim());
            if dedup.admit(&name, price) {
                items.push(LineItem::new(name, price));
            }
        }
        non_empty(items)
    }
}

/// Byte offset and value of the rightmost price on a line.
///
/// A price must be followed by whitespace, end of line or `.,;:`, so digits
/// running on into longer numbers are not taken. A rejected candidate does
/// not consume its digits: the scan resumes one character later, so in
/// `1.234,56` the price is `34,56`.
fn last_price(line: &str) -> Option<(usize, Money)> {
    let mut last = None;
    let mut pos = 0;
    while let Some(rest) = line.get(pos..).filter(|rest| !rest.is_empty()) {
        if let Some((len, price)) = price_at(rest) {
            last = Some((pos, price));
            pos += len;
            continue;
        }
        pos += rest.chars().next().map_or(1, char::len_utf8);
    }
    last
}

/// A price anchored at the start of `text`, with its byte length.
fn price_at(text: &str) -> Option<(usize, Money)> {
    let caps = re_noisy_price().captures(text)?;
    let end = caps.get(0)?.end();
    let terminated = text[end..]
        .chars()
        .next()
        .map_or(true, |c| c.is_whitespace() || matches!(c, '.' | ',' | ';' | ':'));
    if !terminated {
        return None;
    }
    let amount = format!("{}.{}", caps.get(1)?.as_str(), caps.get(2)?.as_str());
    Money::parse_receipt_amount(&amount).map(|price| (end, price))
}

/// Strip garbage characters, leading line codes and trailing times/dates.
fn clean_noisy_name(raw: &str) -> String {
    let name = re_whitespace().replace_all(raw.trim(), " ");
    let name = re_name_garbage().replace_all(&name, "");
    let name = re_leading_non_letters().replace(name.trim(), "");
    let name = re_trailing_time().replace(&name, "");
    let name = re_trailing_date().replace(&name, "");
    name.trim().to_string()
}

/// Parse with the built-in dialects and default settings.
pub fn parse_receipt(raw_text: &str) -> Vec<LineItem> {
    static PARSER: OnceLock<ReceiptParser> = OnceLock::new();
    PARSER.get_or_init(ReceiptParser::default).parse(raw_text)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[LineItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    fn cents(items: &[LineItem]) -> Vec<i64> {
        items.iter().map(|i| i.price.to_cents()).collect()
    }

    // ── Driver ───────────────────────────────────────────────────────────────

    #[test]
    fn empty_text_yields_nothing() {
        assert!(parse_receipt("").is_empty());
        let report = ReceiptParser::default().parse_with_report("");
        assert_eq!(report.pass, None);
        assert_eq!(report.discount_count, 0);
    }

    #[test]
    fn totals_line_is_excluded() {
        let items = parse_receipt("Apple 2,50 €\nYhteensä 2,50 €");
        assert_eq!(names(&items), vec!["Apple"]);
        assert_eq!(items[0].price, Money::from_cents(250));
    }

    #[test]
    fn garbage_does_not_panic() {
        let items = parse_receipt("!@#$%^&*()\n\0\x01\x02 €€€ ,,, 1,2,3,4");
        assert!(items.iter().all(|i| !i.price.is_zero()));
    }

    #[test]
    fn ids_are_unique_within_a_parse() {
        let items = parse_receipt("Maito 1,29 €\nLeipä 2,49 €\nJuusto 4,99 €");
        let ids: HashSet<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn later_passes_skipped_once_currency_pass_finds_items() {
        let text = "Maito 1,29 €\nLEIPÄ    2,49\n## Kurkku 1,49 x";
        let report = ReceiptParser::default().parse_with_report(text);
        assert_eq!(report.pass, Some(PassKind::Currency));
        assert_eq!(names(&report.items), vec!["Maito"]);
    }

    #[test]
    fn noisy_pass_skipped_once_fixed_width_pass_finds_items() {
        let report = ReceiptParser::default().parse_with_report("LEIPÄ    2,49\n## Kurkku 1,49 x");
        assert_eq!(report.pass, Some(PassKind::FixedWidth));
        assert_eq!(names(&report.items), vec!["LEIPÄ"]);
    }

    #[test]
    fn failed_pass_counts_as_empty_and_cascade_continues() {
        let mut parser = ReceiptParser::default();
        parser.fail_pass = Some(PassKind::Currency);
        let report = parser.parse_with_report("Maito 1,29 €\nLEIPÄ    2,49");
        assert_eq!(report.pass, Some(PassKind::FixedWidth));
        assert_eq!(names(&report.items), vec!["LEIPÄ"]);
    }

    #[test]
    fn failed_pass_leaves_dedup_untouched() {
        let mut parser = ReceiptParser::default();
        parser.fail_pass = Some(PassKind::Currency);
        let mut dedup = Dedup::default();
        dedup.admit("Leipä", Money::from_cents(249));
        let before = dedup.clone();

        let sections = Sections { main: "Maito 1,29 €\nJuusto 4,99 €", discounts: "" };
        assert!(parser.run_pass(PassKind::Currency, &sections, &mut dedup).is_none());
        assert_eq!(dedup, before);

        parser.fail_pass = None;
        assert!(parser.run_pass(PassKind::Currency, &sections, &mut dedup).is_some());
        assert_ne!(dedup, before);
    }

    // ── Pass 1 ───────────────────────────────────────────────────────────────

    #[test]
    fn currency_pass_dedups_name_and_price() {
        let text = "Coffee 3,00 €\nCoffee 3,00 €\nCoffee 3,50 €";
        let report = ReceiptParser::default().parse_with_report(text);
        assert_eq!(report.pass, Some(PassKind::Currency));
        assert_eq!(names(&report.items), vec!["Coffee", "Coffee"]);
        assert_eq!(cents(&report.items), vec![300, 350]);
    }

    #[test]
    fn currency_pass_reads_quantity_and_skips_header() {
        let text = "Kuitti tilauksestasi\n\
                    Tuotteet Kuvaus määrä yhteensä\n\
                    Banaani 1,2 kg 2,35 €\n\
                    Maito 2 kpl 2,58 €\n\
                    ALV veroton vero verollinen\n\
                    14 % 4,33 0,60 4,93 €";
        let items = parse_receipt(text);
        assert_eq!(names(&items), vec!["Banaani", "Maito"]);
        assert_eq!(cents(&items), vec![235, 258]);
    }

    #[test]
    fn currency_pass_strips_glued_header() {
        let items = parse_receipt("Tuotteet Kuvaus määrä yhteensä Banaani 2,35 €\nALV veroton vero verollinen");
        assert_eq!(names(&items), vec!["Banaani"]);
    }

    #[test]
    fn currency_pass_drops_zero_and_short_negative() {
        let text = "Kassi 0,00 €\nAle -0,50 €\nKampanja -0,40 €\nOmena 0,79 €";
        let items = parse_receipt(text);
        assert_eq!(names(&items), vec!["Kampanja", "Omena"]);
        assert_eq!(cents(&items), vec![-40, 79]);
    }

    #[test]
    fn currency_pass_honours_configured_symbols() {
        let config = ParserConfig { currency_symbols: vec!["EUR".to_string()], ..Default::default() };
        let parser = ReceiptParser::new(config).unwrap();
        let report = parser.parse_with_report("Coffee 3,00 EUR\nBagel 2,20 EUR");
        assert_eq!(report.pass, Some(PassKind::Currency));
        assert_eq!(names(&report.items), vec!["Coffee", "Bagel"]);
    }

    #[test]
    fn currency_pass_names_do_not_wrap_across_lines() {
        let report = ReceiptParser::default().parse_with_report("Luomu kevytmaito\nlaktoositon 1 l 1,29 €");
        assert_eq!(report.pass, Some(PassKind::Currency));
        assert_eq!(names(&report.items), vec!["laktoositon"]);
        assert_eq!(cents(&report.items), vec![129]);
    }

    // ── Pass 2 ───────────────────────────────────────────────────────────────

    #[test]
    fn fixed_width_pass_reads_register_tape() {
        let text = "PRISMA\n\
                    MAITO 1L            1,29\n\
                    RUISLEIPÄ           2,49\n\
                    MAITO 1L            1,29\n\
                    YHTEENSÄ            5,07\n\
                    KANTA-ASIAKAS 1234\n";
        let report = ReceiptParser::default().parse_with_report(text);
        assert_eq!(report.pass, Some(PassKind::FixedWidth));
        assert_eq!(names(&report.items), vec!["MAITO 1L", "RUISLEIPÄ"]);
        assert_eq!(cents(&report.items), vec![129, 249]);
    }

    #[test]
    fn fixed_width_pass_keeps_short_negative_names() {
        let items = parse_receipt("PANTTI   -0,40\nOLUT    1,99");
        assert_eq!(names(&items), vec!["PANTTI", "OLUT"]);
        assert_eq!(cents(&items), vec![-40, 199]);
    }

    #[test]
    fn fixed_width_pass_handles_crlf() {
        let items = parse_receipt("KAHVI    4,99\r\nSOKERI    1,49\r\n");
        assert_eq!(names(&items), vec!["KAHVI", "SOKERI"]);
    }

    // ── Pass 3 ───────────────────────────────────────────────────────────────

    #[test]
    fn noisy_pass_takes_last_price_on_line() {
        let text = "#@ Kurkku 1,49 kpl\n2 x Tomaatti 0,89 1,78 ab\n%%% 145,00";
        let report = ReceiptParser::default().parse_with_report(text);
        assert_eq!(report.pass, Some(PassKind::Noisy));
        assert_eq!(names(&report.items), vec!["Kurkku", "x Tomaatti 0,89"]);
        assert_eq!(cents(&report.items), vec![149, 178]);
    }

    #[test]
    fn noisy_pass_strips_trailing_time_and_date() {
        let items = parse_receipt("Kahvi 12:30 3,20 x\nPulla 01.02.2024 1,90 x");
        assert_eq!(names(&items), vec!["Kahvi", "Pulla"]);
    }

    #[test]
    fn noisy_pass_enforces_price_band() {
        let items = parse_receipt("Karkki 0,05 x\nPurkka 0,10 x");
        assert_eq!(names(&items), vec!["Purkka"]);
    }

    #[test]
    fn noisy_pass_ignores_numbers_running_into_digits() {
        assert_eq!(last_price("Tuote 1,234"), None);
        assert_eq!(last_price("Tuote 1,23;"), Some((6, Money::from_cents(123))));
    }

    #[test]
    fn noisy_pass_rescans_inside_rejected_number() {
        assert_eq!(last_price("Tuote 12,345,67"), Some((10, Money::from_cents(4567))));

        let report = ReceiptParser::default().parse_with_report("Televisio 1.234,56 x");
        assert_eq!(report.pass, Some(PassKind::Noisy));
        assert_eq!(names(&report.items), vec!["Televisio 1.2"]);
        assert_eq!(cents(&report.items), vec![3456]);
    }

    #[test]
    fn noisy_pass_reads_ascii_digits_only() {
        assert_eq!(last_price("Tuote 1,50 \u{661},\u{662}\u{663}"), Some((6, Money::from_cents(150))));
    }

    // ── Pass 4 ───────────────────────────────────────────────────────────────

    #[test]
    fn discount_pass_adds_separate_entries() {
        let text = "Juusto 4,99 €\n\
                    Kahvi 5,49 €\n\
                    Plussasetti -1,00 € Juusto 1\n\
                    Plussa-tasaerä -0,50 € Kahvi 1\n\
                    ALV veroton vero verollinen\n\
                    14 % 9,20 1,28 10,48 €";
        let report = ReceiptParser::default().parse_with_report(text);
        assert_eq!(report.pass, Some(PassKind::Currency));
        assert_eq!(report.discount_count, 2);
        assert_eq!(
            names(&report.items),
            vec!["Juusto", "Kahvi", "Juusto Plussasetti", "Kahvi Plussa-tasaerä"]
        );
        assert_eq!(cents(&report.items), vec![499, 549, -100, -50]);
    }

    #[test]
    fn discount_pass_runs_even_without_items() {
        let report = ReceiptParser::default().parse_with_report("Tasaerä -0,30 € Banaani 2");
        assert_eq!(report.pass, None);
        assert_eq!(names(&report.items), vec!["Banaani Tasaerä"]);
    }

    // ── Properties ───────────────────────────────────────────────────────────

    #[test]
    fn output_has_no_duplicates_or_zero_prices() {
        let inputs = [
            "Coffee 3,00 €\nCoffee 3,00 €\nTea 0,00 €\nTea 2,00 €",
            "A   0,00\nLEIPÄ   2,00\nLEIPÄ   2,00\nLEIPÄ   2,10",
            "xx Banaani 0,50 x\nxx Banaani 0,50 x\nKassi 0,00",
            "Juusto 4,99 €\nTasaerä -1,00 € Juusto 1\nTasaerä -1,00 € Juusto 1",
        ];
        for input in inputs {
            let items = parse_receipt(input);
            let mut seen = HashSet::new();
            for item in &items {
                assert!(!item.price.is_zero(), "zero price in {input:?}");
                assert!(seen.insert((item.name.clone(), item.price.to_cents())), "duplicate in {input:?}");
            }
        }
    }

    #[test]
    fn unknown_dialect_is_rejected() {
        let config = ParserConfig { dialects: vec!["xx".to_string()], ..Default::default() };
        assert!(matches!(ReceiptParser::new(config), Err(DialectError::Unknown(_))));
    }
}

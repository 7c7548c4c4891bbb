use std::borrow::Cow;

use crate::dialect::CompiledRules;

/// Receipt text split into the item list and the trailing discount breakdown.
/// The tax/footer summary is already gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections<'a> {
    pub main: &'a str,
    pub discounts: &'a str,
}

pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Cut off the footer, then split the remainder at the discount breakdown.
///
/// Must run before any item pattern: footer totals otherwise parse as items.
pub fn split_sections<'a>(text: &'a str, rules: &CompiledRules) -> Sections<'a> {
    let before_footer = rules
        .footer_markers()
        .iter()
        .find_map(|re| re.find(text))
        .map_or(text, |m| &text[..m.start()]);

    match rules.discount_marker().and_then(|re| re.find(before_footer)) {
        Some(m) => Sections {
            main: &before_footer[..m.start()],
            discounts: &before_footer[m.start()..],
        },
        None => Sections { main: before_footer, discounts: "" },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::DialectTable;

    fn rules() -> CompiledRules {
        let table = DialectTable::builtin();
        CompiledRules::compile(&table.select(&[]).unwrap(), &["€".to_string()])
    }

    #[test]
    fn no_markers_keeps_everything() {
        let s = split_sections("Maito 1,29 €\nLeipä 2,49 €", &rules());
        assert_eq!(s.main, "Maito 1,29 €\nLeipä 2,49 €");
        assert_eq!(s.discounts, "");
    }

    #[test]
    fn totals_marker_cuts_footer() {
        let s = split_sections("Apple 2,50 €\nYhteensä 2,50 €", &rules());
        assert_eq!(s.main, "Apple 2,50 €\n");
    }

    #[test]
    fn priority_beats_position() {
        // The lower-priority totals marker appears first, but the VAT header wins.
        let text = "Tuotteet Kuvaus määrä yhteensä\nMaito 1,29 €\nALV veroton vero verollinen\n14 % 1,13";
        let s = split_sections(text, &rules());
        assert_eq!(s.main, "Tuotteet Kuvaus määrä yhteensä\nMaito 1,29 €\n");
    }

    #[test]
    fn garbled_loyalty_marker_cuts_footer() {
        let s = split_sections("MAITO   1,29\nKANTAASAKAS 1234\nBONUS 0,05", &rules());
        assert_eq!(s.main, "MAITO   1,29\n");
    }

    #[test]
    fn discount_breakdown_is_split_off() {
        let text = "Juusto 4,99 €\nPlussasetti -1,00 € Juusto 1\nALV veroton vero verollinen";
        let s = split_sections(text, &rules());
        assert_eq!(s.main, "Juusto 4,99 €\n");
        assert_eq!(s.discounts, "Plussasetti -1,00 € Juusto 1\n");
    }

    #[test]
    fn crlf_is_normalized() {
        assert_eq!(normalize_line_endings("a\r\nb\rc"), "a\nb\nc");
        assert!(matches!(normalize_line_endings("a\nb"), Cow::Borrowed(_)));
    }
}

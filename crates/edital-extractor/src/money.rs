//! Brazilian currency numerals

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a numeral written the Brazilian way (`1.500,00`)
///
/// Dots are thousands separators and are removed; the comma becomes the
/// decimal point. Sentence punctuation trailing the numeral is ignored.
/// Anything left over that is not a plain decimal yields `None`.
pub fn parse_brl_amount(raw: &str) -> Option<Decimal> {
    let normalized = raw
        .trim()
        .trim_end_matches(['.', ','])
        .replace('.', "")
        .replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    Decimal::from_str(&normalized).ok()
}

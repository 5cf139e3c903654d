//! Portuguese-locale date parsing
//!
//! Numeric dates are day-first (`15/03/2024`, `15-03-24`, `15.03.2024`).
//! Long-form dates spell the month (`15 de março de 2024`, `1 de jan. de 2025`).

use chrono::{NaiveDate, NaiveDateTime};

const MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Parse a date token captured by a date pattern
///
/// Returns midnight of the parsed day. Invalid dates (31/02, month 13,
/// three-digit years) return `None`.
pub fn parse_date(token: &str) -> Option<NaiveDateTime> {
    let token = token.trim();
    let date = if token.contains(" de ") || token.contains(" DE ") {
        parse_long_form(token)
    } else {
        parse_numeric(token)
    }?;
    date.and_hms_opt(0, 0, 0)
}

fn parse_numeric(token: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = token.split(['/', '-', '.']).collect();
    let [day, month, year] = parts.as_slice() else {
        return None;
    };
    let day: u32 = day.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let year = expand_year(year)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_long_form(token: &str) -> Option<NaiveDate> {
    let lowered = token.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let [day, "de", month, "de", year] = words.as_slice() else {
        return None;
    };
    let day: u32 = day.parse().ok()?;
    let month = month_number(month.trim_end_matches('.'))?;
    let year = expand_year(year)?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Month number from a full or three-letter Portuguese month name
fn month_number(name: &str) -> Option<u32> {
    let name = if name == "marco" { "março" } else { name };
    MONTHS
        .iter()
        .position(|month| {
            *month == name || (name.chars().count() == 3 && month.starts_with(name))
        })
        .map(|idx| idx as u32 + 1)
}

/// Two-digit years pivot at 69: 00-68 are 20xx, 69-99 are 19xx
fn expand_year(year: &str) -> Option<i32> {
    let value: i32 = year.parse().ok()?;
    match year.len() {
        2 if value < 69 => Some(2000 + value),
        2 => Some(1900 + value),
        4 => Some(value),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_day_first_numeric() {
        assert_eq!(parse_date("15/03/2024"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_date("05-11-2023"), Some(ymd(2023, 11, 5)));
        assert_eq!(parse_date("1.2.2025"), Some(ymd(2025, 2, 1)));
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(parse_date("10/10/24"), Some(ymd(2024, 10, 10)));
        assert_eq!(parse_date("10/10/68"), Some(ymd(2068, 10, 10)));
        assert_eq!(parse_date("10/10/69"), Some(ymd(1969, 10, 10)));
    }

    #[test]
    fn test_invalid_dates_are_absent() {
        assert_eq!(parse_date("31/02/2024"), None);
        assert_eq!(parse_date("12/13/2024"), None);
        assert_eq!(parse_date("01/01/202"), None);
        assert_eq!(parse_date("01/01"), None);
    }

    #[test]
    fn test_long_form() {
        assert_eq!(parse_date("15 de março de 2024"), Some(ymd(2024, 3, 15)));
        assert_eq!(parse_date("2 DE DEZEMBRO DE 2023"), Some(ymd(2023, 12, 2)));
        assert_eq!(parse_date("1 de jan. de 2025"), Some(ymd(2025, 1, 1)));
        assert_eq!(parse_date("7 de marco de 2024"), Some(ymd(2024, 3, 7)));
    }

    #[test]
    fn test_long_form_unknown_month() {
        assert_eq!(parse_date("15 de brumário de 2024"), None);
    }
}

//! Per-field header extractors
//!
//! Each function scans the whole text with its pattern group and returns the
//! first accepted value. A rejected candidate moves on to the next pattern in
//! the group; running out of patterns is absence.

use crate::dates::parse_date;
use crate::money::parse_brl_amount;
use chrono::NaiveDateTime;
use edital_domain::{JudgmentCriterion, Modality};
use edital_patterns::{OrderedPatterns, PatternTable};
use rust_decimal::Decimal;
use tracing::debug;

/// Organizations need more than this many characters after trimming
pub const MIN_ORGANIZATION_CHARS: usize = 3;

/// Bidding objects need at least this many characters after trimming
pub const MIN_OBJECT_CHARS: usize = 10;

/// Issuing organization
pub fn extract_organization(patterns: &PatternTable, text: &str) -> Option<String> {
    patterns.organization.first_match(text, |candidate| {
        let trimmed = candidate.trim();
        if trimmed.chars().count() > MIN_ORGANIZATION_CHARS {
            Some(trimmed.to_string())
        } else {
            debug!("Rejected organization candidate '{}'", trimmed);
            None
        }
    })
}

/// Modality, looked up in already lower-cased text
pub fn extract_modality(patterns: &PatternTable, lowered: &str) -> Option<Modality> {
    patterns.modality.find_in(lowered)
}

/// Judgment criterion, looked up in already lower-cased text
pub fn extract_criterion(patterns: &PatternTable, lowered: &str) -> Option<JudgmentCriterion> {
    patterns.criterion.find_in(lowered)
}

/// Process number exactly as written
pub fn extract_process_number(patterns: &PatternTable, text: &str) -> Option<String> {
    patterns
        .process_number
        .first_capture(text)
        .map(str::to_string)
}

/// First CNPJ-shaped identifier
pub fn extract_cnpj(patterns: &PatternTable, text: &str) -> Option<String> {
    patterns.cnpj.first_capture(text).map(str::to_string)
}

/// Proposal opening date
pub fn extract_opening_date(patterns: &PatternTable, text: &str) -> Option<NaiveDateTime> {
    first_date(&patterns.opening_date, text)
}

/// Public session date
pub fn extract_session_date(patterns: &PatternTable, text: &str) -> Option<NaiveDateTime> {
    first_date(&patterns.session_date, text)
}

fn first_date(group: &OrderedPatterns, text: &str) -> Option<NaiveDateTime> {
    group.first_match(text, |token| {
        let parsed = parse_date(token);
        if parsed.is_none() {
            debug!("Unparsable {} token '{}'", group.group(), token);
        }
        parsed
    })
}

/// Bidding object, the description of what is being procured
pub fn extract_bidding_object(patterns: &PatternTable, text: &str) -> Option<String> {
    patterns.bidding_object.first_match(text, |candidate| {
        let trimmed = candidate.trim();
        if trimmed.chars().count() >= MIN_OBJECT_CHARS {
            Some(trimmed.to_string())
        } else {
            debug!("Bidding object candidate too short: '{}'", trimmed);
            None
        }
    })
}

/// Estimated contract value
pub fn extract_estimated_value(patterns: &PatternTable, text: &str) -> Option<Decimal> {
    patterns.estimated_value.first_match(text, |numeral| {
        let parsed = parse_brl_amount(numeral);
        if parsed.is_none() {
            debug!("Unparsable currency numeral '{}'", numeral);
        }
        parsed
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn table() -> PatternTable {
        PatternTable::load().unwrap()
    }

    #[test]
    fn test_organization_prefix() {
        let text = "PREFEITURA MUNICIPAL DE CAMPINAS\nEdital de licitação";
        assert_eq!(
            extract_organization(&table(), text).as_deref(),
            Some("CAMPINAS")
        );
    }

    #[test]
    fn test_organization_company() {
        let text = "Contratada: ACME SERVICOS LTDA.";
        assert_eq!(
            extract_organization(&table(), text).as_deref(),
            Some("ACME SERVICOS LTDA.")
        );
    }

    #[test]
    fn test_organization_too_short_is_rejected() {
        // "Rio" has only three characters and nothing else matches
        let text = "Estado de Rio";
        assert_eq!(extract_organization(&table(), text), None);
    }

    #[test]
    fn test_opening_date_numeric() {
        let text = "Abertura das propostas: 15/03/2024 às 09h";
        assert_eq!(
            extract_opening_date(&table(), text),
            NaiveDate::from_ymd_opt(2024, 3, 15).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
    }

    #[test]
    fn test_opening_date_invalid_token_falls_through() {
        // the first pattern captures 31/02/2024, the second "até 10/04/2024"
        let text = "Entrega das propostas: 31/02/2024, prorrogada até 10/04/2024";
        assert_eq!(
            extract_opening_date(&table(), text),
            NaiveDate::from_ymd_opt(2024, 4, 10).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
    }

    #[test]
    fn test_session_date_long_form() {
        let text = "Sessão pública: 2 de abril de 2024, às 10 horas";
        assert_eq!(
            extract_session_date(&table(), text),
            NaiveDate::from_ymd_opt(2024, 4, 2).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
    }

    #[test]
    fn test_bidding_object() {
        let text = "OBJETO: aquisição de material de escritório.\n";
        assert_eq!(
            extract_bidding_object(&table(), text).as_deref(),
            Some("aquisição de material de escritório")
        );
    }

    #[test]
    fn test_estimated_value() {
        let text = "O valor total estimado: R$ 12.345,67 para o período";
        assert_eq!(
            extract_estimated_value(&table(), text),
            Decimal::from_str("12345.67").ok()
        );
    }

    #[test]
    fn test_estimated_value_third_form() {
        let text = "Orçamento estimado: R$ 980,00";
        assert_eq!(
            extract_estimated_value(&table(), text),
            Decimal::from_str("980.00").ok()
        );
    }

    #[test]
    fn test_criterion_and_modality_use_lowered_text() {
        let t = table();
        let lowered = "tipo: técnica e preço. modalidade: tomada de preços";
        assert_eq!(
            extract_criterion(&t, lowered),
            Some(JudgmentCriterion::TecnicaEPreco)
        );
        assert_eq!(extract_modality(&t, lowered), Some(Modality::TomadaDePrecos));
    }
}

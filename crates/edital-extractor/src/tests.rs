//! Extraction scenarios over whole documents

use crate::{HeaderExtractor, RequirementExtractor};
use chrono::NaiveDate;
use edital_domain::{DocumentType, JudgmentCriterion, Modality, RequirementKind};
use edital_patterns::PatternTable;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

const EDITAL: &str = "PREFEITURA MUNICIPAL DE CAMPINAS\n\
CNPJ: 51.885.242/0001-40\n\
EDITAL DE PREGÃO ELETRÔNICO\n\
Processo nº 123/2024\n\
OBJETO: aquisição de material de escritório para as escolas municipais.\n\
Critério de julgamento: menor preço por item.\n\
Abertura das propostas: 15/03/2024\n\
Sessão pública: 18/03/2024\n\
O valor estimado R$ 1.500,00 para o exercício\n\
HABILITAÇÃO\n\
Apresentar CERTIDÃO NEGATIVA DE DÉBITOS FEDERAIS;\n\
Comprovante de inscrição no CNPJ;\n";

fn patterns() -> Arc<PatternTable> {
    Arc::new(PatternTable::load().unwrap())
}

fn midnight(y: i32, m: u32, d: u32) -> Option<chrono::NaiveDateTime> {
    NaiveDate::from_ymd_opt(y, m, d).and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[test]
fn test_process_modality_and_value() {
    let text = "Processo nº 123/2024 ... Pregão Eletrônico ... valor estimado R$ 1.500,00";
    let header = HeaderExtractor::new(patterns()).extract(text);

    assert_eq!(header.process_number.as_deref(), Some("123/2024"));
    assert_eq!(header.modality, Some(Modality::PregaoEletronico));
    assert_eq!(header.modality.unwrap().as_str(), "Pregão Eletrônico");
    assert_eq!(header.estimated_value, Decimal::from_str("1500.00").ok());
}

#[test]
fn test_full_header() {
    let header = HeaderExtractor::new(patterns()).extract(EDITAL);

    assert_eq!(header.issuing_organization.as_deref(), Some("CAMPINAS"));
    assert_eq!(header.cnpj.as_deref(), Some("51.885.242/0001-40"));
    assert_eq!(header.modality, Some(Modality::PregaoEletronico));
    assert_eq!(header.process_number.as_deref(), Some("123/2024"));
    assert_eq!(
        header.bidding_object.as_deref(),
        Some("aquisição de material de escritório para as escolas municipais")
    );
    assert_eq!(header.judgment_criterion, Some(JudgmentCriterion::MenorPreco));
    assert_eq!(header.proposal_opening, midnight(2024, 3, 15));
    assert_eq!(header.public_session, midnight(2024, 3, 18));
    assert_eq!(header.estimated_value, Decimal::from_str("1500.00").ok());
    assert_eq!(header.found_fields(), 9);
}

#[test]
fn test_federal_certificate_is_tagged() {
    let requirements = RequirementExtractor::new(patterns()).extract(EDITAL);

    let tagged: Vec<_> = requirements
        .iter()
        .filter(|r| r.document_type == Some(DocumentType::CndFederal))
        .collect();
    assert!(!tagged.is_empty());
    assert_eq!(tagged[0].kind, RequirementKind::DocumentoExigido);
    assert_eq!(
        tagged[0].description,
        "CERTIDÃO NEGATIVA DE DÉBITOS FEDERAIS"
    );
    assert!(requirements.iter().all(|r| r.mandatory));
}

#[test]
fn test_plain_text_has_no_header() {
    let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit";
    let header = HeaderExtractor::new(patterns()).extract(text);

    assert!(header.is_empty());
    assert_eq!(header.issuing_organization, None);
    assert_eq!(header.modality, None);
    assert_eq!(header.process_number, None);
    assert_eq!(header.cnpj, None);
    assert_eq!(header.proposal_opening, None);
    assert_eq!(header.public_session, None);
    assert_eq!(header.bidding_object, None);
    assert_eq!(header.judgment_criterion, None);
    assert_eq!(header.estimated_value, None);
}

#[test]
fn test_process_pattern_listed_first_wins() {
    // the edital form appears earlier in the text, the processo form is listed first
    let text = "Edital nº 9/2023\nProcesso nº 77/2024";
    let header = HeaderExtractor::new(patterns()).extract(text);
    assert_eq!(header.process_number.as_deref(), Some("77/2024"));
}

#[test]
fn test_short_bidding_object_is_absent() {
    let text = "Objeto:          abc.\n";
    let header = HeaderExtractor::new(patterns()).extract(text);
    assert_eq!(header.bidding_object, None);
}

#[test]
fn test_bidding_object_of_exactly_ten_characters_is_kept() {
    let header = HeaderExtractor::new(patterns()).extract("Objeto: abcdefghij\n");
    assert_eq!(header.bidding_object.as_deref(), Some("abcdefghij"));

    // ten characters captured, nine after trimming
    let header = HeaderExtractor::new(patterns()).extract("Objeto:  abcdefghi \n");
    assert_eq!(header.bidding_object, None);
}

#[test]
fn test_unparsable_value_falls_through_to_next_pattern() {
    let text = "Valor estimado: R$ ...\nOrçamento estimado: R$ 980,00";
    let header = HeaderExtractor::new(patterns()).extract(text);
    assert_eq!(header.estimated_value, Decimal::from_str("980.00").ok());
}

#[test]
fn test_extraction_is_deterministic() {
    let patterns = patterns();
    let header = HeaderExtractor::new(Arc::clone(&patterns));
    let requirements = RequirementExtractor::new(patterns);

    assert_eq!(header.extract(EDITAL), header.extract(EDITAL));
    assert_eq!(requirements.extract(EDITAL), requirements.extract(EDITAL));
}

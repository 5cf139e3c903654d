//! Pattern sources, in the order they are tried
//!
//! All expressions are compiled case-insensitive. Each header-field pattern
//! exposes the value in capture group 1.

use edital_domain::{DocumentType, JudgmentCriterion, Modality, RequirementKind};

/// Issuing organization: institutional prefixes, `... LTDA` companies,
/// universities, institutes
pub const ORGANIZATION: &[&str] = &[
    r"(?:município|prefeitura|câmara|estado|governo)[ \t]+(?:municipal[ \t]+)?(?:de[ \t]+)?([A-Z][a-zA-ZÀ-ÿ \t]+)",
    r"([A-Z][A-Z \t]+LTDA\.?)",
    r"(UNIVERSIDADE[A-Z \t]+)",
    r"(INSTITUTO[A-Z \t]+)",
];

/// Process number forms: processo / edital / licitação
pub const PROCESS_NUMBER: &[&str] = &[
    r"processo\s+n[ºª°]?\s*(\d{1,3}[/.\-]\d{4}(?:[/.\-]\d{2,4})?)",
    r"edital\s+n[ºª°]?\s*(\d{1,3}[/.\-]\d{4})",
    r"licitação\s+n[ºª°]?\s*(\d{1,3}[/.\-]\d{4})",
];

/// CNPJ, with or without punctuation
pub const CNPJ: &[&str] = &[r"(\d{2}\.?\d{3}\.?\d{3}/?\d{4}-?\d{2})"];

/// Estimated contract value
pub const ESTIMATED_VALUE: &[&str] = &[
    r"valor\s+(?:total\s+)?estimado[:\s]+r\$?\s*([\d.,]+)",
    r"valor\s+(?:máximo\s+)?aceito[:\s]+r\$?\s*([\d.,]+)",
    r"orçamento\s+estimado[:\s]+r\$?\s*([\d.,]+)",
];

/// Proposal opening / delivery date; long-form dates are tried last
pub const OPENING_DATE: &[&str] = &[
    r"(?:abertura|entrega)\s+(?:das?\s+)?propostas?[:\s]+(\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4})",
    r"até\s+(?:às?\s+)?(\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4})",
    r"(?:abertura|entrega)\s+(?:das?\s+)?propostas?[:\s]+(\d{1,2}\s+de\s+\p{L}+\.?\s+de\s+\d{4})",
];

/// Public session date; long-form dates are tried last
pub const SESSION_DATE: &[&str] = &[
    r"sessão\s+pública[:\s]+(\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4})",
    r"disputa\s+de\s+lances[:\s]+(\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4})",
    r"sessão\s+pública[:\s]+(\d{1,2}\s+de\s+\p{L}+\.?\s+de\s+\d{4})",
];

/// Bidding object: text between an anchor and a line break or period
pub const BIDDING_OBJECT: &[&str] = &[
    r"objeto[:\s]+(.{10,200}?)(?:\n|\.)",
    r"contratação\s+de\s+(.{10,200}?)(?:\n|\.)",
    r"aquisição\s+de\s+(.{10,200}?)(?:\n|\.)",
];

/// Modality keywords; "pregão eletrônico" must stay ahead of the generic terms
pub const MODALITY_KEYWORDS: &[(&str, Modality)] = &[
    ("pregão eletrônico", Modality::PregaoEletronico),
    ("pregão presencial", Modality::PregaoPresencial),
    ("concorrência", Modality::Concorrencia),
    ("tomada de preços", Modality::TomadaDePrecos),
    ("convite", Modality::Convite),
    ("concurso", Modality::Concurso),
    ("leilão", Modality::Leilao),
];

/// Judgment criterion keywords
pub const CRITERION_KEYWORDS: &[(&str, JudgmentCriterion)] = &[
    ("menor preço", JudgmentCriterion::MenorPreco),
    ("técnica e preço", JudgmentCriterion::TecnicaEPreco),
    ("melhor técnica", JudgmentCriterion::MelhorTecnica),
    ("maior desconto", JudgmentCriterion::MaiorDesconto),
];

/// Requirement description to document type
pub const DOCUMENT_TYPES: &[(&str, DocumentType)] = &[
    ("contrato social", DocumentType::ContratoSocial),
    ("ato constitutivo", DocumentType::ContratoSocial),
    ("estatuto social", DocumentType::ContratoSocial),
    ("certidão negativa de débitos federais", DocumentType::CndFederal),
    ("cnd federal", DocumentType::CndFederal),
    ("certidão conjunta", DocumentType::CndFederal),
    ("certidão negativa de débitos estaduais", DocumentType::CndEstadual),
    ("certidão negativa de débitos municipais", DocumentType::CndMunicipal),
    ("certidão de regularidade do fgts", DocumentType::CertidaoFgts),
    ("crf", DocumentType::CertidaoFgts),
    ("certidão negativa de débitos trabalhistas", DocumentType::CertidaoTrabalhista),
    ("cndt", DocumentType::CertidaoTrabalhista),
    ("alvará de funcionamento", DocumentType::AlvaraFuncionamento),
    ("licença de funcionamento", DocumentType::AlvaraFuncionamento),
    ("atestado de capacidade técnica", DocumentType::AtestadoCapacidadeTecnica),
    ("comprovação de aptidão", DocumentType::AtestadoCapacidadeTecnica),
    ("balanço patrimonial", DocumentType::BalancoPatrimonial),
    ("demonstração de resultados", DocumentType::DemonstracaoResultados),
    ("dre", DocumentType::DemonstracaoResultados),
    ("certidão de falência", DocumentType::CertidaoFalencia),
];

/// Requirement rules, compiled multi-line
pub const REQUIREMENT_RULES: &[(&str, RequirementKind)] = &[
    (
        r"(?:apresentar|juntar|anexar)\s+(.{5,100}?)(?:\n|;|\.|,)",
        RequirementKind::DocumentoExigido,
    ),
    (
        r"certidão\s+(?:negativa\s+)?(?:de\s+)?(.{5,50}?)(?:\n|;|\.|,)",
        RequirementKind::Certidao,
    ),
    (
        r"comprovante\s+(?:de\s+)?(.{5,50}?)(?:\n|;|\.|,)",
        RequirementKind::Comprovante,
    ),
    (
        r"declaração\s+(?:de\s+)?(.{5,50}?)(?:\n|;|\.|,)",
        RequirementKind::Declaracao,
    ),
    (
        r"atestado\s+(?:de\s+)?(.{5,50}?)(?:\n|;|\.|,)",
        RequirementKind::Atestado,
    ),
];

/// Requirement descriptions that carry no information on their own
pub const REQUIREMENT_STOP_WORDS: &[&str] = &["de", "da", "do", "das", "dos"];

/// Entity-ruler phrases, tagged before the language model runs
pub const ENTITY_PHRASES: &[(&str, &str)] = &[
    ("MODALIDADE", "pregão eletrônico"),
    ("MODALIDADE", "concorrência"),
    ("MODALIDADE", "tomada de preços"),
    ("CRITERIO", "menor preço"),
    ("CRITERIO", "técnica e preço"),
];

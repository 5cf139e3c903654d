//! Requirement module - habilitação obligations and the documents that meet them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification tag of a requirement, taken from the rule that matched it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequirementKind {
    /// "apresentar / juntar / anexar ..." - a document the bidder must submit
    DocumentoExigido,
    /// "certidão ..." - a certificate
    Certidao,
    /// "comprovante ..." - a proof / receipt
    Comprovante,
    /// "declaração ..." - a signed statement
    Declaracao,
    /// "atestado ..." - an attestation, usually of technical capacity
    Atestado,
}

impl RequirementKind {
    /// Get the tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementKind::DocumentoExigido => "DOCUMENTO_EXIGIDO",
            RequirementKind::Certidao => "CERTIDAO",
            RequirementKind::Comprovante => "COMPROVANTE",
            RequirementKind::Declaracao => "DECLARACAO",
            RequirementKind::Atestado => "ATESTADO",
        }
    }
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Document type that satisfies a requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    /// Articles of incorporation / bylaws
    ContratoSocial,
    /// Federal tax clearance certificate
    CndFederal,
    /// State tax clearance certificate
    CndEstadual,
    /// Municipal tax clearance certificate
    CndMunicipal,
    /// FGTS regularity certificate
    CertidaoFgts,
    /// Labor debt clearance certificate
    CertidaoTrabalhista,
    /// Operating permit
    AlvaraFuncionamento,
    /// Technical capacity attestation
    AtestadoCapacidadeTecnica,
    /// Balance sheet
    BalancoPatrimonial,
    /// Income statement
    DemonstracaoResultados,
    /// Bankruptcy clearance certificate
    CertidaoFalencia,
}

impl DocumentType {
    /// Get the tag as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::ContratoSocial => "CONTRATO_SOCIAL",
            DocumentType::CndFederal => "CND_FEDERAL",
            DocumentType::CndEstadual => "CND_ESTADUAL",
            DocumentType::CndMunicipal => "CND_MUNICIPAL",
            DocumentType::CertidaoFgts => "CERTIDAO_FGTS",
            DocumentType::CertidaoTrabalhista => "CERTIDAO_TRABALHISTA",
            DocumentType::AlvaraFuncionamento => "ALVARA_FUNCIONAMENTO",
            DocumentType::AtestadoCapacidadeTecnica => "ATESTADO_CAPACIDADE_TECNICA",
            DocumentType::BalancoPatrimonial => "BALANCO_PATRIMONIAL",
            DocumentType::DemonstracaoResultados => "DEMONSTRACAO_RESULTADOS",
            DocumentType::CertidaoFalencia => "CERTIDAO_FALENCIA",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compliance requirement found in the edital
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRequirement {
    /// Tag of the rule that matched
    pub kind: RequirementKind,

    /// Trimmed description captured from the text
    pub description: String,

    /// Document type the description maps to, if any
    pub document_type: Option<DocumentType>,

    /// Whether the requirement is mandatory
    ///
    /// Optional or conditional phrasing is not detected, so this is always true.
    pub mandatory: bool,
}

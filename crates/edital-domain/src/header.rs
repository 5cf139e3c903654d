//! Header module - the metadata block at the top of an edital

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Procurement procedure type
///
/// Serialized with its canonical Portuguese label, which is also what
/// [`Modality::as_str`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    /// Electronic reverse auction
    #[serde(rename = "Pregão Eletrônico")]
    PregaoEletronico,

    /// In-person reverse auction
    #[serde(rename = "Pregão Presencial")]
    PregaoPresencial,

    /// Open competition
    #[serde(rename = "Concorrência")]
    Concorrencia,

    /// Price survey among registered bidders
    #[serde(rename = "Tomada de Preços")]
    TomadaDePrecos,

    /// Invitation
    #[serde(rename = "Convite")]
    Convite,

    /// Contest (technical, scientific or artistic work)
    #[serde(rename = "Concurso")]
    Concurso,

    /// Auction (sale of public goods)
    #[serde(rename = "Leilão")]
    Leilao,
}

impl Modality {
    /// All modalities, in keyword-table order
    pub const ALL: [Modality; 7] = [
        Modality::PregaoEletronico,
        Modality::PregaoPresencial,
        Modality::Concorrencia,
        Modality::TomadaDePrecos,
        Modality::Convite,
        Modality::Concurso,
        Modality::Leilao,
    ];

    /// Get the canonical label
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::PregaoEletronico => "Pregão Eletrônico",
            Modality::PregaoPresencial => "Pregão Presencial",
            Modality::Concorrencia => "Concorrência",
            Modality::TomadaDePrecos => "Tomada de Preços",
            Modality::Convite => "Convite",
            Modality::Concurso => "Concurso",
            Modality::Leilao => "Leilão",
        }
    }

    /// Parse a modality from its label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().to_lowercase() == needle)
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Modality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid modality: {}", s))
    }
}

/// Rule used to select the winning bid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JudgmentCriterion {
    /// Lowest price
    #[serde(rename = "Menor Preço")]
    MenorPreco,

    /// Technique and price combined
    #[serde(rename = "Técnica e Preço")]
    TecnicaEPreco,

    /// Best technique
    #[serde(rename = "Melhor Técnica")]
    MelhorTecnica,

    /// Largest discount
    #[serde(rename = "Maior Desconto")]
    MaiorDesconto,
}

impl JudgmentCriterion {
    /// All criteria, in keyword-table order
    pub const ALL: [JudgmentCriterion; 4] = [
        JudgmentCriterion::MenorPreco,
        JudgmentCriterion::TecnicaEPreco,
        JudgmentCriterion::MelhorTecnica,
        JudgmentCriterion::MaiorDesconto,
    ];

    /// Get the canonical label
    pub fn as_str(&self) -> &'static str {
        match self {
            JudgmentCriterion::MenorPreco => "Menor Preço",
            JudgmentCriterion::TecnicaEPreco => "Técnica e Preço",
            JudgmentCriterion::MelhorTecnica => "Melhor Técnica",
            JudgmentCriterion::MaiorDesconto => "Maior Desconto",
        }
    }

    /// Parse a criterion from its label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().to_lowercase() == needle)
    }
}

impl fmt::Display for JudgmentCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JudgmentCriterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid judgment criterion: {}", s))
    }
}

/// Header metadata of an edital
///
/// Every field is independently optional. `None` means the field was not
/// found in the text, not that it does not apply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderInfo {
    /// Issuing organization (municipality, agency, university...)
    pub issuing_organization: Option<String>,

    /// Procurement modality
    pub modality: Option<Modality>,

    /// Administrative process number, e.g. `123/2024`
    pub process_number: Option<String>,

    /// CNPJ of the issuing body, as written in the text
    pub cnpj: Option<String>,

    /// Deadline / opening of proposals
    pub proposal_opening: Option<NaiveDateTime>,

    /// Public session (bidding dispute) date
    pub public_session: Option<NaiveDateTime>,

    /// What is being procured
    pub bidding_object: Option<String>,

    /// Judgment criterion
    pub judgment_criterion: Option<JudgmentCriterion>,

    /// Estimated contract value in BRL
    pub estimated_value: Option<Decimal>,
}

impl HeaderInfo {
    /// Number of fields that were found
    pub fn found_fields(&self) -> usize {
        [
            self.issuing_organization.is_some(),
            self.modality.is_some(),
            self.process_number.is_some(),
            self.cnpj.is_some(),
            self.proposal_opening.is_some(),
            self.public_session.is_some(),
            self.bidding_object.is_some(),
            self.judgment_criterion.is_some(),
            self.estimated_value.is_some(),
        ]
        .into_iter()
        .filter(|found| *found)
        .count()
    }

    /// True when no field was found
    pub fn is_empty(&self) -> bool {
        self.found_fields() == 0
    }
}

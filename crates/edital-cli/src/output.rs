//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use edital_analyzer::AnalyzerStatus;
use edital_domain::{AnalysisResult, HeaderInfo};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an analysis result.
    pub fn format_analysis(&self, result: &AnalysisResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Table => Ok(self.format_analysis_table(result)),
        }
    }

    fn format_analysis_table(&self, result: &AnalysisResult) -> String {
        let mut sections = vec![
            self.heading("Header"),
            self.header_table(&result.header),
        ];

        sections.push(self.heading(&format!("Entities ({})", result.entities.len())));
        if result.entities.is_empty() {
            sections.push(self.colorize("No entities found.", "yellow"));
        } else {
            let rows = result.entities.iter().map(|e| {
                vec![
                    e.category.to_string(),
                    e.value.clone(),
                    format!("{}..{}", e.start, e.end),
                    format!("{:.2}", e.confidence),
                ]
            });
            sections.push(render(["Category", "Value", "Span", "Confidence"], rows));
        }

        sections.push(self.heading(&format!(
            "Requirements ({})",
            result.requirements.len()
        )));
        if result.requirements.is_empty() {
            sections.push(self.colorize("No requirements found.", "yellow"));
        } else {
            let rows = result.requirements.iter().map(|r| {
                vec![
                    r.kind.to_string(),
                    r.description.clone(),
                    r.document_type
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                    if r.mandatory { "yes" } else { "no" }.to_string(),
                ]
            });
            sections.push(render(["Kind", "Description", "Document", "Mandatory"], rows));
        }

        sections.join("\n")
    }

    fn header_table(&self, header: &HeaderInfo) -> String {
        let fields: [(&str, Option<String>); 9] = [
            ("Organization", header.issuing_organization.clone()),
            ("CNPJ", header.cnpj.clone()),
            ("Modality", header.modality.map(|m| m.to_string())),
            ("Process", header.process_number.clone()),
            ("Object", header.bidding_object.clone()),
            ("Criterion", header.judgment_criterion.map(|c| c.to_string())),
            (
                "Proposal opening",
                header.proposal_opening.map(|d| d.format("%d/%m/%Y").to_string()),
            ),
            (
                "Public session",
                header.public_session.map(|d| d.format("%d/%m/%Y").to_string()),
            ),
            (
                "Estimated value",
                header.estimated_value.map(|v| format!("R$ {}", v)),
            ),
        ];

        let rows = fields.into_iter().map(|(name, value)| {
            vec![
                name.to_string(),
                value.unwrap_or_else(|| self.colorize("not found", "yellow")),
            ]
        });
        render(["Field", "Value"], rows)
    }

    /// Format the analyzer status report.
    pub fn format_status(&self, status: &AnalyzerStatus) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(status)?);
        }

        let mut rows = vec![
            vec!["Model".to_string(), self.flag(status.model_loaded, &status.model_name)],
            vec![
                "Patterns".to_string(),
                self.flag(status.patterns_loaded, "loaded"),
            ],
            vec![
                "Document types".to_string(),
                status.document_types_loaded.to_string(),
            ],
            vec![
                "Cache".to_string(),
                match &status.cache_backend {
                    Some(name) => self.flag(status.cache_connected, name),
                    None => self.colorize("off", "yellow"),
                },
            ],
        ];
        if let Some(counts) = &status.pattern_counts {
            rows.push(vec![
                "Header patterns".to_string(),
                format!("{} in {} groups", counts.field_patterns, counts.field_groups),
            ]);
            rows.push(vec![
                "Requirement rules".to_string(),
                counts.requirement_rules.to_string(),
            ]);
        }

        let summary = if status.is_ready() {
            self.success("Analyzer ready")
        } else {
            self.warning("Analyzer not ready")
        };
        Ok(format!("{}\n{}", render(["Component", "State"], rows), summary))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn heading(&self, title: &str) -> String {
        self.colorize(title, "cyan")
    }

    fn flag(&self, ok: bool, label: &str) -> String {
        if ok {
            self.colorize(label, "green")
        } else {
            self.colorize(label, "red")
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().bold().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render<const N: usize, I>(columns: [&str; N], rows: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut builder = Builder::default();
    builder.push_record(columns);
    for row in rows {
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

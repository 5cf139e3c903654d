//! Status command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use edital_analyzer::EditalAnalyzer;
use tracing::warn;

/// Execute the status command.
///
/// An initialization failure is printed on stderr, followed by the
/// not-ready report.
pub async fn execute_status(config: &Config, formatter: &Formatter) -> Result<()> {
    let mut analyzer = EditalAnalyzer::new(config.analyzer.clone());
    if let Err(e) = analyzer.initialize().await {
        warn!("Analyzer failed to initialize: {}", e);
        eprintln!("{}", formatter.error(&e.to_string()));
    }

    println!("{}", formatter.format_status(&analyzer.status().await)?);
    Ok(())
}

//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use edital_analyzer::{AnalyzerConfig, EditalAnalyzer};
use edital_domain::AnalysisResult;
use std::io::Read;
use tracing::info;

/// Execute the analyze command.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let text = read_input(&args.input)?;
    let analyzer_config = run_config(&args, &config.analyzer);

    let result = analyze_text(&text, analyzer_config).await?;
    println!("{}", formatter.format_analysis(&result)?);
    Ok(())
}

/// Read the edital text from a file, or from stdin when `input` is `-`.
pub fn read_input(input: &str) -> Result<String> {
    let text = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(input)
            .map_err(|e| CliError::InvalidInput(format!("{}: {}", input, e)))?
    };
    info!("Read {} characters from {}", text.chars().count(), input);
    Ok(text)
}

/// Analyzer settings for one run, after command-line flags.
pub fn run_config(args: &AnalyzeArgs, base: &AnalyzerConfig) -> AnalyzerConfig {
    let mut config = base.clone();
    if args.no_cache {
        config.enable_cache = false;
    }
    if let Some(model) = &args.model {
        config.model_name = model.clone();
    }
    config
}

/// Initialize an analyzer and run it once.
pub async fn analyze_text(text: &str, config: AnalyzerConfig) -> Result<AnalysisResult> {
    let mut analyzer = EditalAnalyzer::new(config);
    analyzer.initialize().await?;
    Ok(analyzer.analyze(text).await?)
}

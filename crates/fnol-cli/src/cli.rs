//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// fnol - Extract, validate and route a First Notice of Loss document.
#[derive(Debug, Parser)]
#[command(name = "fnol")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// FNOL document to process (PDF or plain text)
    pub path: PathBuf,

    /// JSONL file of expected records to validate against
    #[arg(short, long, env = "FNOL_EXPECTED")]
    pub expected: Option<PathBuf>,

    /// Also write the JSON report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Configuration file path (defaults to ~/.fnol/config.toml)
    #[arg(short, long, env = "FNOL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Skip LLM reasoning even when credentials are present
    #[arg(long)]
    pub no_llm: bool,

    /// Fail when the expected file cannot be used
    #[arg(long)]
    pub require_validation: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Pretty-printed JSON report (default)
    Json,
    /// Human-readable summary
    Table,
    /// Route only
    Quiet,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_minimal_invocation() {
        let cli = Cli::try_parse_from(["fnol", "claim.pdf"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("claim.pdf"));
        assert!(cli.output.is_none());
        assert!(cli.format.is_none());
        assert!(!cli.debug);
        assert!(!cli.no_llm);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "fnol",
            "claim.txt",
            "-e",
            "expected.jsonl",
            "-o",
            "report.json",
            "-d",
            "-c",
            "fnol.toml",
            "-f",
            "table",
            "--no-llm",
            "--require-validation",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.expected, Some(PathBuf::from("expected.jsonl")));
        assert_eq!(cli.output, Some(PathBuf::from("report.json")));
        assert_eq!(cli.config, Some(PathBuf::from("fnol.toml")));
        assert_eq!(cli.format, Some(CliFormat::Table));
        assert!(cli.debug && cli.no_llm && cli.require_validation && cli.no_color);
    }

    #[test]
    fn test_path_required() {
        assert!(Cli::try_parse_from(["fnol"]).is_err());
    }

    #[test]
    fn test_format_conversion() {
        let format: OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, OutputFormat::Quiet);
    }
}

//! Processing a single document end to end.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use fnol_pipeline::{FnolConfig, OutputReport, Pipeline, PipelineOutcome};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Run the CLI: load configuration, process the document, print the report.
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let outcome = process(&cli, &config.pipeline)?;

    for warning in &outcome.warnings {
        eprintln!("{}", formatter.warning(warning));
    }
    println!("{}", formatter.format_report(&outcome.report)?);

    if let Some(path) = &cli.output {
        write_report(path, &outcome.report)?;
        eprintln!(
            "{}",
            formatter.success(&format!("Output saved to {}", path.display()))
        );
    }

    Ok(())
}

/// Build the pipeline the arguments ask for.
pub fn build_pipeline(cli: &Cli, config: &FnolConfig) -> Result<Pipeline> {
    let pipeline = Pipeline::new(config)?.require_validation(cli.require_validation);
    if cli.no_llm {
        debug!("LLM reasoning disabled by --no-llm");
        return Ok(pipeline);
    }
    Ok(pipeline.with_env_reasoning(&config.llm))
}

/// Process the document named on the command line.
pub fn process(cli: &Cli, config: &FnolConfig) -> Result<PipelineOutcome> {
    check_output_path(cli)?;
    let pipeline = build_pipeline(cli, config)?;
    debug!(?pipeline, "Pipeline ready");
    Ok(pipeline.build_output(&cli.path, cli.expected.as_deref())?)
}

/// Write the JSON report to a file.
pub fn write_report(path: &Path, report: &OutputReport) -> Result<()> {
    let mut json = report.to_json_pretty()?;
    json.push('\n');
    fs::write(path, json)?;
    Ok(())
}

fn check_output_path(cli: &Cli) -> Result<()> {
    let Some(output) = &cli.output else {
        return Ok(());
    };
    if output.is_dir() {
        return Err(CliError::InvalidInput(format!(
            "output path {} is a directory",
            output.display()
        )));
    }
    if output == &cli.path {
        return Err(CliError::InvalidInput(
            "output path must differ from the input document".to_string(),
        ));
    }
    Ok(())
}

use crate::Cli;
use anyhow::{Context, Result};
use logtally_core::analyze::{analyze_lines_file, analyze_requests_file, save_json, to_json};
use logtally_core::conf::{AnalysisMode, LogtallyConfig, load_config};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

pub fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => LogtallyConfig::default(),
    };

    // Flags win over the config file.
    if let Some(mode) = cli.mode {
        config.analysis.mode = mode;
    }
    config.output.pretty |= cli.pretty;

    tracing::debug!(
        input = %cli.input.display(),
        mode = ?config.analysis.mode,
        "starting analysis"
    );

    let output = cli.output.as_deref();
    let pretty = config.output.pretty;
    let analyzing = || format!("analyzing {}", cli.input.display());

    match config.analysis.mode {
        AnalysisMode::Lines => {
            let summary = analyze_lines_file(&cli.input).with_context(analyzing)?;
            emit(&summary, output, pretty)
        }
        AnalysisMode::Requests => {
            let summary =
                analyze_requests_file(&cli.input, &config.analysis).with_context(analyzing)?;
            emit(&summary, output, pretty)
        }
    }
}

fn emit<T: Serialize>(summary: &T, output: Option<&Path>, pretty: bool) -> Result<()> {
    match output {
        Some(path) => save_json(summary, path, pretty)?,
        None => write_summary(&mut io::stdout().lock(), summary, pretty)?,
    }
    Ok(())
}

/// A closed stdout (e.g. `logtally ... | head`) surfaces as an error, not a panic.
fn write_summary<W: Write, T: Serialize>(out: &mut W, summary: &T, pretty: bool) -> Result<()> {
    writeln!(out, "{}", to_json(summary, pretty)?).context("writing summary to stdout")?;
    out.flush().context("writing summary to stdout")?;
    Ok(())
}

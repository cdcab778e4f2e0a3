mod cli;

use clap::Parser;
use logtally_core::conf::AnalysisMode;
use logtally_core::logging::{LogFormat, default_log_format, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logtally",
    version,
    about = "logtally: summarize a log file as JSON"
)]
pub struct Cli {
    /// Log file to analyze
    #[arg(short, long)]
    input: PathBuf,

    /// Summary to produce (defaults to `lines`, or the config file's choice)
    #[arg(short, long, value_enum)]
    mode: Option<AnalysisMode>,

    /// Write the JSON summary to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Indent the JSON summary
    #[arg(long)]
    pretty: bool,

    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Diagnostics format on stderr (filtered by RUST_LOG)
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    if let Err(e) = cli::run(cli) {
        eprintln!("logtally error: {e:#}");
        std::process::exit(1);
    }
}

mod cli_modes;
mod render;

use anyhow::Result;
use clap::Parser;
use cli_modes::{CliModeResult, path_mode, tags_mode, use_color, view_mode};
use render::{ColorMode, RenderOptions, Renderer};
use std::{path::PathBuf, process::ExitCode};
use tlog_core::{Config, read_log_file};
use tracing_subscriber::EnvFilter;

/// tlog — time log viewer
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Prints the path of the entries file
    #[arg(long, short, conflicts_with_all = ["tag", "tags", "totals"])]
    pub path: bool,
    /// Entries file to read instead of the configured `log_file`
    #[arg(long, short, env = "TLOG_FILE")]
    pub file: Option<PathBuf>,
    /// Only show entries carrying this tag (e.g. `tlog --tag work`, `tlog -t '#work'`).
    /// `all` shows every entry.
    #[arg(long, short)]
    pub tag: Option<String>,
    /// Prints every tag found in the log.
    #[arg(long, conflicts_with_all = ["tag", "totals"])]
    pub tags: bool,
    /// Only prints the start, subtotal and total.
    #[arg(long)]
    pub totals: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Log debug information to stderr. `RUST_LOG` is honoured otherwise.
    #[arg(long, short)]
    pub verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tlog: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(file) = &cli.file {
        config.log_file = file.clone();
    }

    let renderer = Renderer::new(RenderOptions {
        start_format: config.start_format.clone(),
        use_color: use_color(cli),
    });

    if let CliModeResult::Finish = path_mode(cli, &renderer, &config)? {
        return Ok(());
    }

    let result = read_log_file(&config.log_file, &config.datetime_format);

    if let CliModeResult::Finish = tags_mode(cli, &renderer, &result)? {
        return Ok(());
    }

    view_mode(cli, &renderer, &config, &result)?;
    Ok(())
}

use crate::locate::SUITE_DIR_NAME;
use crate::logging::{self, LogDestination};
use crate::model::RunConfig;
use crate::orchestrator;
use crate::render::{JsonRenderer, TextRenderer};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "perf-csv-charts",
    version,
    about = "Chart the performance test CSV files of a collabora-online checkout"
)]
pub struct Cli {
    /// Directory searched for the suite checkout (defaults to the home directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Name of the suite checkout directory
    #[arg(long, default_value = SUITE_DIR_NAME)]
    pub suite_dir: String,

    /// Subdirectory of the checkout holding the CSV files
    #[arg(long, default_value = "test")]
    pub test_subdir: String,

    /// Print a text summary of each chart and exit (no TUI)
    #[arg(long, conflicts_with = "json")]
    pub text: bool,

    /// Print each chart as a JSON line and exit (no TUI)
    #[arg(long)]
    pub json: bool,

    /// Log filter directives (e.g. warn, debug, perf_csv_charts=trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Write logs to this file instead of the default location
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// True when charts will be drawn in the terminal viewer.
    pub fn uses_terminal(&self) -> bool {
        cfg!(feature = "tui") && !self.text && !self.json && io::stdout().is_terminal()
    }

    /// Explicit log file, or the default one while the terminal viewer owns stderr's screen.
    pub fn log_destination(&self) -> LogDestination {
        match &self.log_file {
            Some(p) => LogDestination::File(p.clone()),
            None if self.uses_terminal() => logging::default_log_file()
                .map(LogDestination::DefaultFile)
                .unwrap_or(LogDestination::Stderr),
            None => LogDestination::Stderr,
        }
    }
}

/// Build a `RunConfig` from CLI arguments.
pub fn build_config(args: &Cli) -> Result<RunConfig> {
    let root = match &args.root {
        Some(root) => root.clone(),
        None => dirs::home_dir().context("could not determine the home directory")?,
    };
    Ok(RunConfig {
        root,
        suite_dir: args.suite_dir.clone(),
        test_subdir: args.test_subdir.clone(),
    })
}

pub fn run(args: Cli) -> Result<()> {
    let cfg = build_config(&args)?;

    if args.json {
        let mut renderer = JsonRenderer::new(io::stdout().lock());
        return orchestrator::run(&cfg, &mut renderer);
    }

    if args.uses_terminal() {
        #[cfg(feature = "tui")]
        {
            let mut renderer = crate::tui::TerminalRenderer::new();
            return orchestrator::run(&cfg, &mut renderer);
        }
    }

    // Headless: --text, stdout is not a terminal, or built without TUI support.
    let mut renderer = TextRenderer::new(io::stdout().lock());
    orchestrator::run(&cfg, &mut renderer)
}

use anyhow::Result;
use clap::Parser;
use perf_csv_charts::{cli, logging};
use tracing::info;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    logging::init(&args.log_level, &args.log_destination())?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    cli::run(args)
}

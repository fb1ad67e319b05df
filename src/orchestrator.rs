//! Drives one pass over the suite's performance files.
//!
//! The suite directory is located once, then each file is parsed and handed to
//! the renderer in a fixed order. The first failure ends the run.

use crate::chart::{self, GroupedBarChart, LineChart};
use crate::locate;
use crate::model::RunConfig;
use crate::parse;
use crate::render::ChartRenderer;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Latency histograms, rendered in this order.
pub const LATENCY_FILES: [&str; 2] = ["TileLatency.csv", "PingLatency.csv"];
pub const NETWORK_FILE: &str = "Network.csv";
pub const CPU_FILE: &str = "CPU.csv";

/// Locate the suite, then parse and render every performance file.
pub fn run(cfg: &RunConfig, renderer: &mut dyn ChartRenderer) -> Result<()> {
    let suite = locate::find_named_directory(&cfg.root, &cfg.suite_dir).with_context(|| {
        format!(
            "locate '{}' under {}",
            cfg.suite_dir,
            cfg.root.display()
        )
    })?;
    info!(path = %suite.display(), "using suite directory");

    let test_dir = suite.join(&cfg.test_subdir);
    for name in LATENCY_FILES {
        render_latency(&test_dir, name, renderer)?;
    }

    let network = data_file(&test_dir, NETWORK_FILE);
    let bandwidth = parse::parse_bandwidth_pair(&network)
        .with_context(|| format!("read bandwidth data from {}", network.display()))?;
    info!(runs = bandwidth.run_count(), "rendering {NETWORK_FILE}");
    renderer
        .render_line_series(&LineChart::bandwidth(&bandwidth))
        .with_context(|| format!("render {NETWORK_FILE}"))?;

    let cpu = data_file(&test_dir, CPU_FILE);
    let stress = parse::parse_stress_series(&cpu)
        .with_context(|| format!("read stress data from {}", cpu.display()))?;
    info!(runs = stress.run_count(), "rendering {CPU_FILE}");
    renderer
        .render_line_series(&LineChart::stress(&stress))
        .with_context(|| format!("render {CPU_FILE}"))?;

    Ok(())
}

fn render_latency(test_dir: &Path, name: &str, renderer: &mut dyn ChartRenderer) -> Result<()> {
    let path = data_file(test_dir, name);
    let table = parse::parse_latency_table(&path)
        .with_context(|| format!("read latency data from {}", path.display()))?;
    info!(
        runs = table.run_count(),
        buckets = table.headers.len(),
        "rendering {name}"
    );
    let chart = GroupedBarChart::latency(&table, chart::latency_title(name));
    renderer
        .render_grouped_bar_chart(&chart)
        .with_context(|| format!("render {name}"))
}

fn data_file(test_dir: &Path, name: &str) -> PathBuf {
    test_dir.join(name)
}

use serde::Serialize;
use std::path::PathBuf;

/// Where to look for the suite's performance CSV files.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Search root, normally the user's home directory.
    pub root: PathBuf,
    /// Directory name searched for under `root`.
    pub suite_dir: String,
    /// Subdirectory of the suite directory holding the CSV files.
    pub test_subdir: String,
}

/// Latency histogram: one column per response-time bucket, one row per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatencyTable {
    pub headers: Vec<String>,
    pub runs: Vec<Vec<u64>>,
}

impl LatencyTable {
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }
}

/// Incoming/outgoing bandwidth in kB/s, index-aligned by run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BandwidthSeries {
    pub incoming: Vec<i64>,
    pub outgoing: Vec<i64>,
}

impl BandwidthSeries {
    pub fn run_count(&self) -> usize {
        self.incoming.len()
    }
}

/// CPU stress in milliseconds, one value per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StressSeries {
    pub values: Vec<i64>,
}

impl StressSeries {
    pub fn run_count(&self) -> usize {
        self.values.len()
    }
}

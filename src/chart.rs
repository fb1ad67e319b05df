//! Renderer-agnostic chart descriptions built from parsed CSV data.

use crate::model::{BandwidthSeries, LatencyTable, StressSeries};
use serde::Serialize;

/// One named sequence of values. Bar heights are counts; line values may be negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series<T = u64> {
    pub label: String,
    pub values: Vec<T>,
}

impl<T> Series<T> {
    pub fn new(label: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }
}

/// Bars grouped by category: one group per category, one bar per series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedBarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl GroupedBarChart {
    /// One series per run, labelled "Run 1", "Run 2", … in row order.
    pub fn latency(table: &LatencyTable, title: impl Into<String>) -> Self {
        let series = table
            .runs
            .iter()
            .enumerate()
            .map(|(i, row)| Series::new(format!("Run {}", i + 1), row.clone()))
            .collect();
        Self {
            title: title.into(),
            x_label: "Response Time".into(),
            y_label: "Count".into(),
            categories: table.headers.clone(),
            series,
        }
    }

    /// Value of `series` at `category`, or 0 when the series is short.
    pub fn value(&self, series: usize, category: usize) -> u64 {
        self.series
            .get(series)
            .and_then(|s| s.values.get(category))
            .copied()
            .unwrap_or(0)
    }

    pub fn max_value(&self) -> u64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

/// Lines over a shared integer x-axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_values: Vec<u64>,
    pub series: Vec<Series<i64>>,
}

impl LineChart {
    pub fn bandwidth(series: &BandwidthSeries) -> Self {
        Self {
            title: "Incoming and Outgoing Bandwidth Over Runs".into(),
            x_label: "Run Count".into(),
            y_label: "Bandwidth (kB/s)".into(),
            x_values: run_numbers(series.run_count()),
            series: vec![
                Series::new("Incoming Bandwidth (kB/s)", series.incoming.clone()),
                Series::new("Outgoing Bandwidth (kB/s)", series.outgoing.clone()),
            ],
        }
    }

    pub fn stress(series: &StressSeries) -> Self {
        Self {
            title: "Stress Over Runs".into(),
            x_label: "Run Count".into(),
            y_label: "Stress (ms)".into(),
            x_values: run_numbers(series.run_count()),
            series: vec![Series::new("Stress", series.values.clone())],
        }
    }

    /// `(x, y)` pairs for `series`, truncated to the shorter of the two axes.
    pub fn points(&self, series: usize) -> Vec<(f64, f64)> {
        self.series
            .get(series)
            .map(|s| {
                self.x_values
                    .iter()
                    .zip(&s.values)
                    .map(|(x, y)| (*x as f64, *y as f64))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Largest plotted value, never below 0 so the axis starts at the origin.
    pub fn max_value(&self) -> i64 {
        self.values().max().unwrap_or(0).max(0)
    }

    /// Smallest plotted value, never above 0.
    pub fn min_value(&self) -> i64 {
        self.values().min().unwrap_or(0).min(0)
    }

    fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.series.iter().flat_map(|s| s.values.iter().copied())
    }

    pub fn x_range(&self) -> (u64, u64) {
        let min = self.x_values.iter().copied().min().unwrap_or(0);
        let max = self.x_values.iter().copied().max().unwrap_or(0);
        (min, max)
    }
}

/// Title used for each latency histogram chart.
pub fn latency_title(file_name: &str) -> String {
    format!("Performance Variation for {file_name}")
}

fn run_numbers(n: usize) -> Vec<u64> {
    (1..=n as u64).collect()
}

//! Chart rendering seam.
//!
//! The orchestrator only talks to [`ChartRenderer`]. The terminal viewer lives in
//! `crate::tui`; the headless renderers below write to any [`Write`] sink.

use crate::chart::{GroupedBarChart, LineChart};
use crate::text_summary;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

pub trait ChartRenderer {
    /// Draw one bar group per category and one bar per series within each group.
    /// Interactive renderers return once the viewer is dismissed.
    fn render_grouped_bar_chart(&mut self, chart: &GroupedBarChart) -> Result<()>;

    /// Draw one line per series over the shared x-axis, with a marker per point.
    fn render_line_series(&mut self, chart: &LineChart) -> Result<()>;
}

/// Writes a plain-text summary of each chart.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.out, "{line}").context("write text summary")?;
        }
        writeln!(self.out).context("write text summary")?;
        self.out.flush().context("flush text summary")
    }
}

impl<W: Write> ChartRenderer for TextRenderer<W> {
    fn render_grouped_bar_chart(&mut self, chart: &GroupedBarChart) -> Result<()> {
        let summary = text_summary::build_bar_summary(chart);
        self.write_lines(&summary.lines)
    }

    fn render_line_series(&mut self, chart: &LineChart) -> Result<()> {
        let summary = text_summary::build_line_summary(chart);
        self.write_lines(&summary.lines)
    }
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ChartDocument<'a> {
    GroupedBar(&'a GroupedBarChart),
    Line(&'a LineChart),
}

/// Writes each chart as one JSON document per line.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_document(&mut self, doc: &ChartDocument<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.out, doc).context("serialize chart")?;
        writeln!(self.out).context("write chart")?;
        self.out.flush().context("flush chart")
    }
}

impl<W: Write> ChartRenderer for JsonRenderer<W> {
    fn render_grouped_bar_chart(&mut self, chart: &GroupedBarChart) -> Result<()> {
        self.write_document(&ChartDocument::GroupedBar(chart))
    }

    fn render_line_series(&mut self, chart: &LineChart) -> Result<()> {
        self.write_document(&ChartDocument::Line(chart))
    }
}

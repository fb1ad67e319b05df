//! Text summary builder for headless output.
//!
//! Formats chart descriptions as human-readable lines: a table of the plotted
//! values followed by per-series statistics.

use crate::chart::{GroupedBarChart, LineChart, Series};
use crate::metrics;

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

pub(crate) fn build_bar_summary(chart: &GroupedBarChart) -> TextSummary {
    let mut lines = vec![format!("== {} ==", chart.title)];
    lines.push(format!(
        "{} / {} ({} buckets, {} runs)",
        chart.x_label,
        chart.y_label,
        chart.categories.len(),
        chart.series.len()
    ));

    let label_width = chart
        .categories
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0);
    for (idx, category) in chart.categories.iter().enumerate() {
        let values: Vec<String> = (0..chart.series.len())
            .map(|s| format!("{:>8}", chart.value(s, idx)))
            .collect();
        lines.push(format!(
            "  {:<width$} {}",
            category,
            values.join(""),
            width = label_width
        ));
    }

    push_series_metrics(&mut lines, &chart.series);
    TextSummary { lines }
}

pub(crate) fn build_line_summary(chart: &LineChart) -> TextSummary {
    let mut lines = vec![format!("== {} ==", chart.title)];
    lines.push(format!(
        "{} / {} ({} runs)",
        chart.x_label,
        chart.y_label,
        chart.x_values.len()
    ));

    for series in &chart.series {
        let values: Vec<String> = series.values.iter().map(i64::to_string).collect();
        lines.push(format!("  {}: {}", series.label, values.join(" ")));
    }

    push_series_metrics(&mut lines, &chart.series);
    TextSummary { lines }
}

fn push_series_metrics<T>(lines: &mut Vec<String>, series: &[Series<T>])
where
    T: Copy + Ord + Into<i128>,
{
    for s in series {
        if let Some(m) = metrics::compute_metrics(&s.values) {
            lines.push(format!(
                "  {}: avg {:.1} med {:.0} p25 {:.0} p75 {:.0}",
                s.label, m.mean, m.median, m.p25, m.p75
            ));
        }
    }
}

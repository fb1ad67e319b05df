use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, LegendPosition,
        Paragraph, Wrap,
    },
    Frame,
};

use crate::chart::{GroupedBarChart, LineChart, Series};
use crate::metrics;

const SERIES_COLORS: [Color; 10] = [
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::Yellow,
    Color::Blue,
    Color::LightRed,
    Color::LightGreen,
    Color::LightCyan,
    Color::LightMagenta,
    Color::LightYellow,
];

/// Width of the y-axis label column left of the bar chart.
const Y_LABEL_WIDTH: u16 = 8;

pub fn series_color(idx: usize) -> Color {
    SERIES_COLORS[idx % SERIES_COLORS.len()]
}

/// Colored legend entries, one per series.
fn legend_line<T>(series: &[Series<T>]) -> Line<'_> {
    let mut spans = Vec::with_capacity(series.len() * 2);
    for (idx, s) in series.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled("■ ", Style::default().fg(series_color(idx))));
        spans.push(Span::raw(s.label.as_str()));
    }
    Line::from(spans)
}

/// Bar width that lets every group fit in `width` columns.
pub fn bar_width_for(width: u16, groups: usize, bars_per_group: usize, group_gap: u16) -> u16 {
    if groups == 0 || bars_per_group == 0 {
        return 1;
    }
    let per_group = (width as usize / groups).saturating_sub(group_gap as usize);
    (per_group / bars_per_group).max(1) as u16
}

/// Shorten `label` to at most `width` characters, marking the cut with '…'.
pub fn abbreviate(label: &str, width: usize) -> String {
    let count = label.chars().count();
    if count <= width {
        return label.to_string();
    }
    if width <= 1 {
        return label.chars().take(width).collect();
    }
    let mut out: String = label.chars().take(width - 1).collect();
    out.push('…');
    out
}

pub fn draw_grouped_bar_chart(area: Rect, f: &mut Frame, chart: &GroupedBarChart) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(chart.title.as_str())
        .title_bottom(Line::from(format!(" {} ", chart.x_label)).alignment(Alignment::Center));

    if chart.categories.is_empty() || chart.series.is_empty() {
        let empty = Paragraph::new("No data available.").block(block);
        f.render_widget(empty, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let legend = legend_line(&chart.series);
    let legend_height = legend_rows(&legend, inner.width);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(legend_height)].as_ref())
        .split(inner);

    let plot = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(Y_LABEL_WIDTH), Constraint::Min(0)].as_ref())
        .split(chunks[0]);

    let max = chart.max_value().max(1);
    draw_y_labels(f, plot[0], &chart.y_label, max);

    let group_gap = 1;
    let bar_width = bar_width_for(
        plot[1].width,
        chart.categories.len(),
        chart.series.len(),
        group_gap,
    );
    let group_width = bar_width as usize * chart.series.len();

    let mut bar_chart = BarChart::default()
        .bar_width(bar_width)
        .bar_gap(0)
        .group_gap(group_gap)
        .max(max);
    for (cat_idx, category) in chart.categories.iter().enumerate() {
        let bars: Vec<Bar> = (0..chart.series.len())
            .map(|s| {
                Bar::default()
                    .value(chart.value(s, cat_idx))
                    .style(Style::default().fg(series_color(s)))
                    .value_style(Style::default().fg(Color::Black).bg(series_color(s)))
            })
            .collect();
        let label = abbreviate(category, group_width);
        bar_chart = bar_chart.data(
            BarGroup::default()
                .label(Line::from(label).alignment(Alignment::Center))
                .bars(&bars),
        );
    }
    f.render_widget(bar_chart, plot[1]);

    f.render_widget(
        Paragraph::new(legend).wrap(Wrap { trim: true }),
        chunks[1],
    );
}

pub fn draw_line_chart(area: Rect, f: &mut Frame, chart: &LineChart) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(chart.title.as_str());

    if chart.x_values.is_empty() || chart.series.is_empty() {
        let empty = Paragraph::new("No data available.").block(block);
        f.render_widget(empty, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(chart.series.len() as u16)].as_ref())
        .split(inner);

    let points: Vec<Vec<(f64, f64)>> = (0..chart.series.len()).map(|i| chart.points(i)).collect();

    // Each series is drawn twice: a named line for the legend and unnamed point markers.
    let mut datasets = Vec::with_capacity(chart.series.len() * 2);
    for (idx, s) in chart.series.iter().enumerate() {
        let color = series_color(idx);
        datasets.push(
            Dataset::default()
                .name(s.label.as_str())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(&points[idx]),
        );
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(color))
                .data(&points[idx]),
        );
    }

    let (x_min, x_max) = chart.x_range();
    let x_max = if x_max > x_min { x_max } else { x_min + 1 };
    let y_max = (chart.max_value() as f64 * 1.1).max(1.0);
    let y_min = chart.min_value() as f64 * 1.1;

    let x_axis = Axis::default()
        .title(chart.x_label.as_str())
        .style(Style::default().fg(Color::Gray))
        .bounds([x_min as f64, x_max as f64])
        .labels(vec![
            x_min.to_string(),
            ((x_min + x_max) / 2).to_string(),
            x_max.to_string(),
        ]);
    let y_axis = Axis::default()
        .title(chart.y_label.as_str())
        .style(Style::default().fg(Color::Gray))
        .bounds([y_min, y_max])
        .labels(vec![
            format!("{:.0}", y_min),
            format!("{:.0}", (y_min + y_max) / 2.0),
            format!("{:.0}", y_max),
        ]);

    let line_chart = Chart::new(datasets)
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(Some(LegendPosition::TopLeft))
        .hidden_legend_constraints((Constraint::Ratio(1, 1), Constraint::Ratio(1, 1)));
    f.render_widget(line_chart, chunks[0]);

    let metrics_lines: Vec<Line> = chart
        .series
        .iter()
        .enumerate()
        .map(|(idx, s)| render_metrics_text(s, series_color(idx)))
        .collect();
    f.render_widget(
        Paragraph::new(metrics_lines).alignment(Alignment::Center),
        chunks[1],
    );
}

fn draw_y_labels(f: &mut Frame, area: Rect, y_label: &str, max: u64) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // axis title
            Constraint::Length(1), // max
            Constraint::Min(0),
            Constraint::Length(1), // 0
            Constraint::Length(1), // group labels row
        ])
        .split(area);
    let width = area.width.saturating_sub(1) as usize;
    f.render_widget(
        Paragraph::new(abbreviate(y_label, width)).style(Style::default().fg(Color::Gray)),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(format!("{:>width$}", max)).style(Style::default().fg(Color::Gray)),
        rows[1],
    );
    f.render_widget(
        Paragraph::new(format!("{:>width$}", 0)).style(Style::default().fg(Color::Gray)),
        rows[3],
    );
}

/// avg/med/p25/p75 for one series, or just its label when there are too few runs.
fn render_metrics_text<T>(series: &Series<T>, color: Color) -> Line<'_>
where
    T: Copy + Ord + Into<i128>,
{
    let mut spans = vec![Span::styled(
        series.label.as_str(),
        Style::default().fg(color),
    )];
    if let Some(m) = metrics::compute_metrics(&series.values) {
        for (name, value) in [("avg", m.mean), ("med", m.median), ("p25", m.p25), ("p75", m.p75)] {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(name, Style::default().fg(Color::Gray)));
            spans.push(Span::styled(format!(" {:.0}", value), Style::default().fg(color)));
        }
    }
    Line::from(spans)
}

fn legend_rows(legend: &Line, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let len = legend.width();
    len.div_ceil(width).clamp(1, 4) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BandwidthSeries, LatencyTable};
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(width: u16, height: u16, draw: impl FnOnce(&mut Frame)) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn abbreviates_long_labels() {
        assert_eq!(abbreviate("short", 10), "short");
        assert_eq!(abbreviate("100-200ms", 5), "100-…");
        assert_eq!(abbreviate("abc", 1), "a");
        assert_eq!(abbreviate("abc", 0), "");
    }

    #[test]
    fn bar_width_fits_groups() {
        assert_eq!(bar_width_for(100, 5, 2, 1), 9);
        assert_eq!(bar_width_for(10, 20, 3, 1), 1);
        assert_eq!(bar_width_for(10, 0, 3, 1), 1);
    }

    #[test]
    fn bar_chart_shows_title_and_legend() {
        let table = LatencyTable {
            headers: vec!["A".into(), "B".into()],
            runs: vec![vec![1, 2], vec![3, 4]],
        };
        let chart = GroupedBarChart::latency(&table, "Performance Variation for Ping");
        let screen = rendered(80, 20, |f| draw_grouped_bar_chart(f.area(), f, &chart));
        assert!(screen.contains("Performance Variation for Ping"));
        assert!(screen.contains("Run 1"));
        assert!(screen.contains("Run 2"));
        assert!(screen.contains("Response Time"));
    }

    #[test]
    fn empty_bar_chart_shows_placeholder() {
        let table = LatencyTable {
            headers: vec!["A".into()],
            runs: vec![],
        };
        let chart = GroupedBarChart::latency(&table, "Empty");
        let screen = rendered(40, 10, |f| draw_grouped_bar_chart(f.area(), f, &chart));
        assert!(screen.contains("No data available."));
    }

    #[test]
    fn line_chart_shows_legend() {
        let chart = LineChart::bandwidth(&BandwidthSeries {
            incoming: vec![100, 200, 150],
            outgoing: vec![50, 75, 60],
        });
        let screen = rendered(100, 30, |f| draw_line_chart(f.area(), f, &chart));
        assert!(screen.contains("Incoming and Outgoing Bandwidth Over Runs"));
        assert!(screen.contains("Incoming Bandwidth (kB/s)"));
        assert!(screen.contains("Outgoing Bandwidth (kB/s)"));
    }
}

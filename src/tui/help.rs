use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Footer shown under every chart: position in the sequence and the keybinds.
pub fn footer_line(chart_number: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("Chart {chart_number}"),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  "),
        Span::styled("q", Style::default().fg(Color::Magenta)),
        Span::raw(" / "),
        Span::styled("Esc", Style::default().fg(Color::Magenta)),
        Span::raw(" / "),
        Span::styled("Enter", Style::default().fg(Color::Magenta)),
        Span::raw("  Next chart  "),
        Span::styled("Ctrl-C", Style::default().fg(Color::Magenta)),
        Span::raw("  Abort"),
    ])
}

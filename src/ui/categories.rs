use crate::app::{App, Category};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Renders the four mutually exclusive category labels. The active one is
/// underlined, matching the selector row above the discovery grid.
pub fn render_categories(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();

    for (index, category) in Category::ALL.into_iter().enumerate() {
        spans.push(Span::styled(
            format!(" {} ", index + 1),
            Style::default().fg(Color::DarkGray),
        ));

        let style = if category == app.selected_category {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(category.label(), style));
        spans.push(Span::raw("  "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

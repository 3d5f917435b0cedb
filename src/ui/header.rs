use crate::app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the header block with the title and the search box.
/// The box accepts text but no search is wired to it.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title_block = Block::default()
        .title("What do you want to watch?")
        .title_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL);

    let search_line = if app.search_term.is_empty() && !app.searching {
        Line::from(Span::styled(
            "🔍 Search",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let mut spans = vec![
            Span::styled("🔍 ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                app.search_term.clone(),
                Style::default().fg(Color::White),
            ),
        ];
        if app.searching {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    };

    let search = Paragraph::new(search_line).block(title_block);
    frame.render_widget(search, area);
}

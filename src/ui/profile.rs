use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the placeholder profile tab.
pub fn render_profile(frame: &mut Frame, area: Rect) {
    let block = Block::default().title("Profile").borders(Borders::ALL);

    let text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Nothing here yet",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press (Tab) to go back to the movie list",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

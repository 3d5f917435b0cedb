use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Current frame of the spinner animation (simple rotating character)
pub fn spinner() -> char {
    let spinner_chars = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
    let spinner_idx = (Utc::now().timestamp_millis() / 100) as usize % spinner_chars.len();
    spinner_chars[spinner_idx]
}

/// Renders a centered loading message with the spinner.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let loading_text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} {}", spinner(), message),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let loading_paragraph = Paragraph::new(loading_text).alignment(Alignment::Center);
    frame.render_widget(loading_paragraph, area);
}

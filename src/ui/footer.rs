use crate::app::{App, CurrentTab};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Text,
    widgets::{Block, Borders, Paragraph},
};

/// Returns the appropriate instruction text based on app state
fn get_instruction_text(app: &App) -> String {
    let base = if app.searching {
        "type to edit, (Enter) close, (Esc) clear and close"
    } else {
        match app.current_tab {
            CurrentTab::Home => {
                "(←→/hl) move, (↑↓/jk) rows, (f) focus, (1-4) category, (/) search, (g) refresh, (Tab) profile, (q) quit"
            }
            CurrentTab::Profile => "(Tab) home, (q) quit",
        }
    };

    match &app.last_updated {
        Some(stamp) => format!("{} | updated {}", base, stamp.format("%H:%M:%S")),
        None => base.to_string(),
    }
}

/// Renders the footer with instructions at the bottom of the screen
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let bottom_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default());

    let instruction_text = get_instruction_text(app);
    let bottom = Paragraph::new(Text::styled(instruction_text, Style::default()))
        .block(bottom_block);

    frame.render_widget(bottom, area);
}

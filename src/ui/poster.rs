use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use ratatui_image::{Resize, StatefulImage, protocol::StatefulProtocol};

use super::loading::spinner;

/// Renders the poster pane for the highlighted movie: the poster image on
/// top and the overview text below it.
pub fn render_poster_pane(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(12),   // Poster
            Constraint::Length(9), // Overview
        ])
        .split(area);

    render_poster(frame, chunks[0], app);
    render_overview(frame, chunks[1], app);
}

fn render_poster(frame: &mut Frame, area: Rect, app: &mut App) {
    let poster_block = Block::default().borders(Borders::ALL).title("Poster");

    if app.poster_loading {
        let loading_text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                format!("{} Downloading poster...", spinner()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        let loading_paragraph = Paragraph::new(loading_text)
            .alignment(Alignment::Center)
            .block(poster_block);

        frame.render_widget(loading_paragraph, area);
    } else if let Some(protocol) = &mut app.poster_protocol {
        let image = StatefulImage::<StatefulProtocol>::default().resize(Resize::Fit(None));

        let inner_area = poster_block.inner(area);
        frame.render_widget(poster_block, area);
        frame.render_stateful_widget(image, inner_area, protocol);
    } else {
        // Missing poster path or failed download both land here
        let placeholder_text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "No poster available",
                Style::default().fg(Color::Gray),
            )),
        ];

        let placeholder_paragraph = Paragraph::new(placeholder_text)
            .alignment(Alignment::Center)
            .block(poster_block);

        frame.render_widget(placeholder_paragraph, area);
    }
}

fn render_overview(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Overview");

    let lines = match app.highlighted_movie() {
        Some(movie) => {
            let mut lines = vec![Line::from(Span::styled(
                movie.title.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))];
            if movie.overview.is_empty() {
                lines.push(Line::from(Span::styled(
                    "No overview available",
                    Style::default().fg(Color::Gray),
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    movie.overview.clone(),
                    Style::default().fg(Color::White),
                )));
            }
            lines
        }
        None => vec![Line::from(Span::styled(
            "Nothing highlighted",
            Style::default().fg(Color::Gray),
        ))],
    };

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

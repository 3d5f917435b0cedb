use crate::app::{App, ListSlot, MovieSummary, GRID_COLUMNS};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::loading::{render_loading, spinner};

const STRIP_CARD_WIDTH: u16 = 22;
const GRID_CELL_HEIGHT: u16 = 3;

/// Renders the horizontally navigable strip of popular movies.
pub fn render_primary_strip(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == ListSlot::Primary;
    let block = Block::default()
        .title(list_title(
            "Popular",
            app.primary_loading,
            app.primary_error.is_some(),
        ))
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.primary_list.is_empty() {
        render_empty_list(
            frame,
            inner,
            app.primary_loading,
            app.primary_error.as_deref(),
        );
        return;
    }

    let visible = (inner.width / STRIP_CARD_WIDTH).max(1) as usize;
    let start = if app.primary_selected >= visible {
        app.primary_selected + 1 - visible
    } else {
        0
    };

    for (slot, (index, movie)) in app
        .primary_list
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .enumerate()
    {
        let card = Rect {
            x: inner.x + slot as u16 * STRIP_CARD_WIDTH,
            y: inner.y,
            width: STRIP_CARD_WIDTH.min(inner.width - slot as u16 * STRIP_CARD_WIDTH),
            height: inner.height,
        };
        let selected = focused && index == app.primary_selected;
        render_card(frame, card, movie, selected);
    }
}

/// Renders the wrapped grid of the selected category's movies. Cells are
/// sized smaller than the strip cards.
pub fn render_discovery_grid(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == ListSlot::Secondary;
    let block = Block::default()
        .title(list_title(
            app.selected_category.label(),
            app.secondary_loading,
            app.secondary_error.is_some(),
        ))
        .borders(Borders::ALL)
        .border_style(border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.secondary_list.is_empty() {
        render_empty_list(
            frame,
            inner,
            app.secondary_loading,
            app.secondary_error.as_deref(),
        );
        return;
    }

    let cell_width = (inner.width / GRID_COLUMNS as u16).max(1);
    let visible_rows = (inner.height / GRID_CELL_HEIGHT).max(1) as usize;
    let selected_row = app.secondary_selected / GRID_COLUMNS;
    let start_row = if selected_row >= visible_rows {
        selected_row + 1 - visible_rows
    } else {
        0
    };

    for (index, movie) in app.secondary_list.iter().enumerate() {
        let row = index / GRID_COLUMNS;
        if row < start_row || row >= start_row + visible_rows {
            continue;
        }
        let column = index % GRID_COLUMNS;
        let cell = Rect {
            x: inner.x + column as u16 * cell_width,
            y: inner.y + (row - start_row) as u16 * GRID_CELL_HEIGHT,
            width: cell_width,
            height: GRID_CELL_HEIGHT.min(inner.height),
        };
        let selected = focused && index == app.secondary_selected;
        render_card(frame, cell, movie, selected);
    }
}

fn render_card(frame: &mut Frame, area: Rect, movie: &MovieSummary, selected: bool) {
    if area.width < 4 || area.height < 3 {
        return;
    }
    let style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let block = Block::default().borders(Borders::ALL).border_style(style);

    let mut lines = vec![Line::from(Span::styled(movie.title.clone(), style))];
    if area.height > 4 && !movie.overview.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            movie.overview.clone(),
            Style::default().fg(Color::Gray),
        )));
    }

    let card = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(card, area);
}

fn render_empty_list(frame: &mut Frame, area: Rect, loading: bool, error: Option<&str>) {
    if loading {
        render_loading(frame, area, "Loading movies...");
        return;
    }
    let message = if error.is_some() {
        Span::styled("Failed to load", Style::default().fg(Color::Red))
    } else {
        Span::styled("No movies", Style::default().fg(Color::Gray))
    };
    frame.render_widget(
        Paragraph::new(vec![Line::from(""), Line::from(message)])
            .alignment(ratatui::layout::Alignment::Center),
        area,
    );
}

fn list_title(name: &str, loading: bool, failed: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(
        name.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    if loading {
        spans.push(Span::styled(
            format!(" {}", spinner()),
            Style::default().fg(Color::Cyan),
        ));
    } else if failed {
        // prior results stay on screen; the title carries the indicator
        spans.push(Span::styled(
            " ✗ failed to load",
            Style::default().fg(Color::Red),
        ));
    }
    Line::from(spans)
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

use crate::app::{App, CurrentTab};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::categories::render_categories;
use super::footer::render_footer;
use super::header::render_header;
use super::home::{render_discovery_grid, render_primary_strip};
use super::missing_key::render_missing_key;
use super::poster::render_poster_pane;
use super::profile::render_profile;

/// Main UI rendering function that orchestrates all UI components
pub fn ui(frame: &mut Frame, app: &mut App) {
    // Without a credential there is nothing to fetch; show the setup page
    if app.client.is_none() {
        render_missing_key(frame, frame.area());
        return;
    }

    // Create the main layout: header, content area, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header with search box
            Constraint::Min(1),     // Content
            Constraint::Length(3),  // Footer
        ])
        .split(frame.area());

    // Render header
    render_header(frame, app, chunks[0]);

    // Render content based on current tab
    match app.current_tab {
        CurrentTab::Home => render_home(frame, app, chunks[1]),
        CurrentTab::Profile => render_profile(frame, chunks[1]),
    }

    // Render footer with instructions
    render_footer(frame, app, chunks[2]);
}

/// Home screen: popular strip on top, category selector, discovery grid,
/// with the highlighted movie's poster in a side pane.
fn render_home(frame: &mut Frame, app: &mut App, area: ratatui::layout::Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // lists
            Constraint::Length(34), // poster pane
        ])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // popular strip
            Constraint::Length(1), // category selector
            Constraint::Min(5),    // discovery grid
        ])
        .split(columns[0]);

    render_primary_strip(frame, app, rows[0]);
    render_categories(frame, app, rows[1]);
    render_discovery_grid(frame, app, rows[2]);
    render_poster_pane(frame, app, columns[1]);
}

mod app;
use app::App;

mod ui;

use std::error::Error;
use std::io;
use std::time::Duration;

use ratatui::Terminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::{Backend, CrosstermBackend};
use ratatui_image::picker::Picker;

use crate::app::tmdb::TmdbClient;
use crate::app::{Category, CurrentTab};

fn main() -> Result<(), Box<dyn Error>> {
    // setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr(); // This is a special case. Normally using stdout is fine
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // create app and run it
    let client = TmdbClient::from_env().ok();
    let picker = Picker::from_query_stdio().ok();
    let mut app = App::new(client, picker);
    app.mount();
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend + 'static>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        // Drain messages from the background fetch threads
        app.poll_messages();

        // Poll for events with a timeout to allow UI updates
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Release {
                    // Skip events that are not KeyEventKind::Press
                    continue;
                }
                // Handle search input when the search box is focused.
                // Typing edits the field; nothing runs a search.
                if app.searching {
                    match key.code {
                        KeyCode::Char(c) => {
                            app.search_term.push(c);
                        }
                        KeyCode::Backspace => {
                            app.search_term.pop();
                        }
                        KeyCode::Enter => {
                            app.searching = false;
                        }
                        KeyCode::Esc => {
                            app.searching = false;
                            app.search_term.clear();
                        }
                        _ => {}
                    }
                    continue;
                }

                match app.current_tab {
                    CurrentTab::Home => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Tab => {
                            app.current_tab = CurrentTab::Profile;
                        }
                        KeyCode::Char('/') => {
                            app.searching = true;
                        }
                        KeyCode::Char('g') => {
                            app.refresh();
                        }
                        KeyCode::Char('1') => {
                            app.select_category(Category::NowPlaying);
                        }
                        KeyCode::Char('2') => {
                            app.select_category(Category::Popular);
                        }
                        KeyCode::Char('3') => {
                            app.select_category(Category::TopRated);
                        }
                        KeyCode::Char('4') => {
                            app.select_category(Category::Upcoming);
                        }
                        KeyCode::Char('f') => {
                            app.toggle_focus();
                        }
                        KeyCode::Right | KeyCode::Char('l') => {
                            app.move_horizontal(1);
                        }
                        KeyCode::Left | KeyCode::Char('h') => {
                            app.move_horizontal(-1);
                        }
                        KeyCode::Down | KeyCode::Char('j') => {
                            app.move_vertical(1);
                        }
                        KeyCode::Up | KeyCode::Char('k') => {
                            app.move_vertical(-1);
                        }
                        KeyCode::Enter => {
                            // No action is bound to opening a movie
                        }
                        _ => {}
                    },
                    CurrentTab::Profile => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Tab => {
                            app.current_tab = CurrentTab::Home;
                        }
                        _ => {}
                    },
                }
            }
        }
    }
}

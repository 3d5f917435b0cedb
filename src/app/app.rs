use std::sync::mpsc;
use std::thread;

use chrono::{DateTime, Local};
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;

use crate::app::models::{Category, MovieSummary};
use crate::app::tmdb::{self, TmdbClient};

/// Columns in the discovery grid; keyboard row movement steps by this.
pub const GRID_COLUMNS: usize = 4;

/// Identifies which result list a fetch was issued for. The two lists are
/// independent and never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListSlot {
    Primary,
    Secondary,
}

/// Tag carried by every in-flight collection fetch. A completion is applied
/// only while its tag is still the current request for that slot, which is
/// what keeps a late response for a superseded category from overwriting a
/// newer selection's results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub slot: ListSlot,
    pub category: Category,
    pub page: u32,
    pub generation: u64,
}

pub enum FetchMessage {
    Complete {
        request: FetchRequest,
        movies: Vec<MovieSummary>,
    },
    Failed {
        request: FetchRequest,
        error: String,
    },
}

pub enum PosterMessage {
    Ready {
        movie_id: i64,
        image: image::DynamicImage,
    },
    Failed {
        movie_id: i64,
    },
}

/// Which tab screen is active. The profile tab is a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentTab {
    Home,
    Profile,
}

pub struct App {
    pub client: Option<TmdbClient>,
    pub current_tab: CurrentTab,

    pub selected_category: Category,
    // carried in every request but never advanced by any control
    pub page: u32,

    pub primary_list: Vec<MovieSummary>,
    pub secondary_list: Vec<MovieSummary>,
    pub primary_loading: bool,
    pub secondary_loading: bool,
    pub primary_error: Option<String>,
    pub secondary_error: Option<String>,
    pub primary_request: Option<FetchRequest>,
    pub secondary_request: Option<FetchRequest>,

    pub focus: ListSlot,
    pub primary_selected: usize,
    pub secondary_selected: usize,

    pub searching: bool,
    pub search_term: String,

    pub picker: Option<Picker>,
    pub poster_movie_id: Option<i64>,
    pub poster_loading: bool,
    pub poster_protocol: Option<StatefulProtocol>,

    pub last_updated: Option<DateTime<Local>>,

    generation: u64,
    primary_rx: Option<mpsc::Receiver<FetchMessage>>,
    secondary_rx: Option<mpsc::Receiver<FetchMessage>>,
    poster_rx: Option<mpsc::Receiver<PosterMessage>>,
}

impl App {
    pub fn new(client: Option<TmdbClient>, picker: Option<Picker>) -> Self {
        Self {
            client,
            current_tab: CurrentTab::Home,
            selected_category: Category::default(),
            page: 1,
            primary_list: Vec::new(),
            secondary_list: Vec::new(),
            primary_loading: false,
            secondary_loading: false,
            primary_error: None,
            secondary_error: None,
            primary_request: None,
            secondary_request: None,
            focus: ListSlot::Primary,
            primary_selected: 0,
            secondary_selected: 0,
            searching: false,
            search_term: String::new(),
            picker,
            poster_movie_id: None,
            poster_loading: false,
            poster_protocol: None,
            last_updated: None,
            generation: 0,
            primary_rx: None,
            secondary_rx: None,
            poster_rx: None,
        }
    }

    /// Initial load: the primary strip always shows the popular collection,
    /// the discovery grid loads whatever category is selected.
    pub fn mount(&mut self) {
        self.begin_fetch(ListSlot::Primary, Category::Popular);
        self.begin_fetch(ListSlot::Secondary, self.selected_category);
    }

    /// Switches the discovery grid to `category` and issues exactly one
    /// fetch for its first page. Returns the tag of the issued request.
    pub fn select_category(&mut self, category: Category) -> Option<FetchRequest> {
        if self.selected_category == category {
            return None;
        }
        self.selected_category = category;
        self.begin_fetch(ListSlot::Secondary, category)
    }

    /// Re-issues both fetches, superseding anything still in flight.
    pub fn refresh(&mut self) {
        self.begin_fetch(ListSlot::Primary, Category::Popular);
        self.begin_fetch(ListSlot::Secondary, self.selected_category);
    }

    fn begin_fetch(&mut self, slot: ListSlot, category: Category) -> Option<FetchRequest> {
        let client = self.client.clone()?;
        self.generation += 1;
        let request = FetchRequest {
            slot,
            category,
            page: self.page,
            generation: self.generation,
        };

        let (sender, receiver) = mpsc::channel();
        match slot {
            ListSlot::Primary => {
                // dropping the old receiver orphans any superseded worker
                self.primary_rx = Some(receiver);
                self.primary_request = Some(request);
                self.primary_loading = true;
            }
            ListSlot::Secondary => {
                self.secondary_rx = Some(receiver);
                self.secondary_request = Some(request);
                self.secondary_loading = true;
            }
        }

        thread::spawn(move || tmdb::fetch_collection_worker(client, request, sender));
        Some(request)
    }

    /// Drains any completed background work into state. Called once per
    /// draw tick from the event loop.
    pub fn poll_messages(&mut self) {
        if let Some(receiver) = &self.primary_rx {
            match receiver.try_recv() {
                Ok(message) => {
                    self.primary_rx = None;
                    self.apply_fetch_message(message);
                }
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.primary_rx = None;
                    self.primary_loading = false;
                }
                Err(mpsc::TryRecvError::Empty) => {}
            }
        }

        if let Some(receiver) = &self.secondary_rx {
            match receiver.try_recv() {
                Ok(message) => {
                    self.secondary_rx = None;
                    self.apply_fetch_message(message);
                }
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.secondary_rx = None;
                    self.secondary_loading = false;
                }
                Err(mpsc::TryRecvError::Empty) => {}
            }
        }

        if let Some(receiver) = &self.poster_rx {
            match receiver.try_recv() {
                Ok(message) => {
                    self.poster_rx = None;
                    self.apply_poster_message(message);
                }
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.poster_rx = None;
                    self.poster_loading = false;
                }
                Err(mpsc::TryRecvError::Empty) => {}
            }
        }
    }

    /// Applies a tagged fetch outcome. Stale tags are discarded without
    /// touching either list; failures keep the prior contents and only set
    /// the per-list error indicator.
    pub fn apply_fetch_message(&mut self, message: FetchMessage) {
        match message {
            FetchMessage::Complete { request, movies } => {
                if self.is_stale(&request) {
                    return;
                }
                match request.slot {
                    ListSlot::Primary => {
                        self.primary_list = movies;
                        self.primary_loading = false;
                        self.primary_error = None;
                        self.primary_selected = 0;
                    }
                    ListSlot::Secondary => {
                        self.secondary_list = movies;
                        self.secondary_loading = false;
                        self.secondary_error = None;
                        self.secondary_selected = 0;
                    }
                }
                self.last_updated = Some(Local::now());
                self.request_poster();
            }
            FetchMessage::Failed { request, error } => {
                if self.is_stale(&request) {
                    return;
                }
                match request.slot {
                    ListSlot::Primary => {
                        self.primary_loading = false;
                        self.primary_error = Some(error);
                    }
                    ListSlot::Secondary => {
                        self.secondary_loading = false;
                        self.secondary_error = Some(error);
                    }
                }
            }
        }
    }

    fn is_stale(&self, request: &FetchRequest) -> bool {
        let current = match request.slot {
            ListSlot::Primary => self.primary_request,
            ListSlot::Secondary => self.secondary_request,
        };
        current != Some(*request)
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            ListSlot::Primary => ListSlot::Secondary,
            ListSlot::Secondary => ListSlot::Primary,
        };
        self.request_poster();
    }

    /// Moves the highlight within the focused list. Highlighting carries no
    /// navigation; it only drives the poster pane.
    pub fn move_horizontal(&mut self, delta: isize) {
        match self.focus {
            ListSlot::Primary => {
                self.primary_selected =
                    step_wrapping(self.primary_selected, delta, self.primary_list.len());
            }
            ListSlot::Secondary => {
                self.secondary_selected =
                    step_wrapping(self.secondary_selected, delta, self.secondary_list.len());
            }
        }
        self.request_poster();
    }

    /// Row movement in the discovery grid. From the strip, moving down
    /// drops focus into the grid; moving up from the top row returns to it.
    pub fn move_vertical(&mut self, delta: isize) {
        match self.focus {
            ListSlot::Primary => {
                if delta > 0 && !self.secondary_list.is_empty() {
                    self.focus = ListSlot::Secondary;
                }
            }
            ListSlot::Secondary => {
                let step = delta * GRID_COLUMNS as isize;
                let next = self.secondary_selected as isize + step;
                if next < 0 {
                    self.focus = ListSlot::Primary;
                } else if (next as usize) < self.secondary_list.len() {
                    self.secondary_selected = next as usize;
                }
            }
        }
        self.request_poster();
    }

    pub fn highlighted_movie(&self) -> Option<&MovieSummary> {
        match self.focus {
            ListSlot::Primary => self.primary_list.get(self.primary_selected),
            ListSlot::Secondary => self.secondary_list.get(self.secondary_selected),
        }
    }

    /// Starts a poster download for the highlighted movie if it changed.
    /// Responses are tagged by movie id; a late poster for a previously
    /// highlighted movie is discarded.
    pub fn request_poster(&mut self) {
        let (movie_id, poster_path) = match self.highlighted_movie() {
            Some(movie) => (movie.id, movie.poster_path.clone()),
            None => {
                self.poster_movie_id = None;
                self.poster_protocol = None;
                self.poster_loading = false;
                self.poster_rx = None;
                return;
            }
        };
        if self.poster_movie_id == Some(movie_id) {
            return;
        }

        self.poster_movie_id = Some(movie_id);
        self.poster_protocol = None;
        self.poster_loading = false;
        self.poster_rx = None;

        if self.picker.is_none() {
            return;
        }
        let Some(url) = tmdb::poster_url(poster_path.as_deref()) else {
            // no path means placeholder, no request at all
            return;
        };

        let (sender, receiver) = mpsc::channel();
        self.poster_rx = Some(receiver);
        self.poster_loading = true;
        thread::spawn(move || tmdb::fetch_poster_worker(url, movie_id, sender));
    }

    fn apply_poster_message(&mut self, message: PosterMessage) {
        match message {
            PosterMessage::Ready { movie_id, image } => {
                if self.poster_movie_id != Some(movie_id) {
                    return;
                }
                self.poster_loading = false;
                if let Some(picker) = &self.picker {
                    self.poster_protocol = Some(picker.new_resize_protocol(image));
                }
            }
            PosterMessage::Failed { movie_id } => {
                if self.poster_movie_id != Some(movie_id) {
                    return;
                }
                self.poster_loading = false;
                self.poster_protocol = None;
            }
        }
    }
}

fn step_wrapping(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (((current as isize + delta) % len + len) % len) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let client = TmdbClient::new("http://127.0.0.1:9", "test-key").unwrap();
        App::new(Some(client), None)
    }

    fn movie(id: i64) -> MovieSummary {
        MovieSummary {
            id,
            title: format!("Movie {id}"),
            poster_path: Some(format!("/{id}.jpg")),
            overview: String::new(),
        }
    }

    #[test]
    fn mount_issues_one_popular_fetch_for_the_primary_strip() {
        let mut app = test_app();
        // initial selection is not popular, the strip still loads popular
        assert_eq!(app.selected_category, Category::NowPlaying);
        app.mount();

        let request = app.primary_request.unwrap();
        assert_eq!(request.slot, ListSlot::Primary);
        assert_eq!(request.category, Category::Popular);
        assert_eq!(request.page, 1);
        assert!(app.primary_loading);
    }

    #[test]
    fn mount_loads_the_selected_category_into_the_grid() {
        let mut app = test_app();
        app.mount();

        let request = app.secondary_request.unwrap();
        assert_eq!(request.slot, ListSlot::Secondary);
        assert_eq!(request.category, Category::NowPlaying);
        assert_eq!(request.page, 1);
    }

    #[test]
    fn selecting_a_category_issues_exactly_one_page_one_fetch() {
        let mut app = test_app();
        app.mount();
        let before_primary = app.primary_request;

        let request = app.select_category(Category::TopRated).unwrap();
        assert_eq!(request.slot, ListSlot::Secondary);
        assert_eq!(request.category, Category::TopRated);
        assert_eq!(request.page, 1);
        assert_eq!(app.secondary_request, Some(request));
        // the primary strip is untouched by category changes
        assert_eq!(app.primary_request, before_primary);
    }

    #[test]
    fn reselecting_the_current_category_issues_nothing() {
        let mut app = test_app();
        app.mount();
        let before = app.secondary_request;
        assert!(app.select_category(Category::NowPlaying).is_none());
        assert_eq!(app.secondary_request, before);
    }

    #[test]
    fn completion_replaces_the_grid_verbatim() {
        let mut app = test_app();
        app.mount();
        let request = app.secondary_request.unwrap();

        app.apply_fetch_message(FetchMessage::Complete {
            request,
            movies: vec![movie(2), movie(1), movie(2)],
        });
        let ids: Vec<i64> = app.secondary_list.iter().map(|m| m.id).collect();
        // order preserved, no dedup
        assert_eq!(ids, vec![2, 1, 2]);
        assert!(!app.secondary_loading);
        assert!(app.secondary_error.is_none());
    }

    #[test]
    fn lists_are_independent() {
        let mut app = test_app();
        app.mount();
        let primary = app.primary_request.unwrap();
        let secondary = app.secondary_request.unwrap();

        app.apply_fetch_message(FetchMessage::Complete {
            request: secondary,
            movies: vec![movie(1)],
        });
        app.apply_fetch_message(FetchMessage::Complete {
            request: primary,
            movies: vec![movie(9)],
        });
        assert_eq!(app.secondary_list[0].id, 1);
        assert_eq!(app.primary_list[0].id, 9);
    }

    #[test]
    fn stale_completion_for_a_superseded_category_is_discarded() {
        let mut app = test_app();
        app.mount();
        let first = app.secondary_request.unwrap();

        // category switched before the first response lands
        let second = app.select_category(Category::Upcoming).unwrap();

        // the late first response resolves after the switch
        app.apply_fetch_message(FetchMessage::Complete {
            request: first,
            movies: vec![movie(1), movie(2)],
        });
        assert!(app.secondary_list.is_empty());
        assert!(app.secondary_loading);

        app.apply_fetch_message(FetchMessage::Complete {
            request: second,
            movies: vec![movie(3)],
        });
        let ids: Vec<i64> = app.secondary_list.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn stale_completion_is_discarded_regardless_of_arrival_order() {
        let mut app = test_app();
        app.mount();
        let first = app.secondary_request.unwrap();
        let second = app.select_category(Category::TopRated).unwrap();

        // newest response first, stale one afterwards
        app.apply_fetch_message(FetchMessage::Complete {
            request: second,
            movies: vec![movie(3)],
        });
        app.apply_fetch_message(FetchMessage::Complete {
            request: first,
            movies: vec![movie(1), movie(2)],
        });
        let ids: Vec<i64> = app.secondary_list.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn failure_keeps_prior_results_and_sets_the_indicator() {
        let mut app = test_app();
        app.mount();
        let request = app.secondary_request.unwrap();
        app.apply_fetch_message(FetchMessage::Complete {
            request,
            movies: vec![movie(5)],
        });

        let retry = app.select_category(Category::Upcoming).unwrap();
        app.apply_fetch_message(FetchMessage::Failed {
            request: retry,
            error: "HTTP 503".into(),
        });
        assert_eq!(app.secondary_list[0].id, 5);
        assert_eq!(app.secondary_error.as_deref(), Some("HTTP 503"));
        assert!(!app.secondary_loading);
    }

    #[test]
    fn highlight_movement_triggers_no_fetch() {
        let mut app = test_app();
        app.mount();
        let primary = app.primary_request.unwrap();
        let secondary = app.secondary_request.unwrap();
        app.apply_fetch_message(FetchMessage::Complete {
            request: primary,
            movies: vec![movie(1), movie(2), movie(3)],
        });
        app.apply_fetch_message(FetchMessage::Complete {
            request: secondary,
            movies: vec![movie(4), movie(5)],
        });

        let (before_primary, before_secondary) = (app.primary_request, app.secondary_request);
        app.move_horizontal(1);
        app.toggle_focus();
        app.move_horizontal(1);
        app.move_vertical(1);
        assert_eq!(app.primary_request, before_primary);
        assert_eq!(app.secondary_request, before_secondary);
    }

    #[test]
    fn highlight_wraps_within_the_focused_list() {
        let mut app = test_app();
        app.mount();
        let primary = app.primary_request.unwrap();
        app.apply_fetch_message(FetchMessage::Complete {
            request: primary,
            movies: vec![movie(1), movie(2), movie(3)],
        });

        app.move_horizontal(-1);
        assert_eq!(app.primary_selected, 2);
        app.move_horizontal(1);
        assert_eq!(app.primary_selected, 0);
    }

    #[test]
    fn poster_is_not_requested_without_a_poster_path() {
        let mut app = test_app();
        app.mount();
        let primary = app.primary_request.unwrap();
        app.apply_fetch_message(FetchMessage::Complete {
            request: primary,
            movies: vec![MovieSummary {
                id: 11,
                title: "No art".into(),
                poster_path: None,
                overview: String::new(),
            }],
        });
        // placeholder state, no download in flight
        assert_eq!(app.poster_movie_id, Some(11));
        assert!(!app.poster_loading);
        assert!(app.poster_protocol.is_none());
    }

    #[test]
    fn stale_poster_is_discarded() {
        let mut app = test_app();
        app.mount();
        let primary = app.primary_request.unwrap();
        app.apply_fetch_message(FetchMessage::Complete {
            request: primary,
            movies: vec![movie(1), movie(2)],
        });
        app.move_horizontal(1);
        assert_eq!(app.poster_movie_id, Some(2));

        // a late poster for the previously highlighted movie
        app.apply_poster_message(PosterMessage::Failed { movie_id: 1 });
        // still tracking the current movie
        assert_eq!(app.poster_movie_id, Some(2));
    }
}

pub mod app;
pub mod models;
pub mod tmdb;

pub use app::{App, CurrentTab, FetchMessage, FetchRequest, ListSlot, PosterMessage, GRID_COLUMNS};
pub use models::{Category, MovieSummary};

mod categories;
mod footer;
mod header;
mod home;
mod loading;
mod missing_key;
mod poster;
mod profile;
mod ui;

pub use ui::ui;

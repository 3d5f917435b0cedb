use std::env;
use std::fs;
use std::sync::mpsc;
use std::time::Duration;

use thiserror::Error;

use crate::app::models::{Category, CollectionPage, MovieSummary};
use crate::app::{FetchMessage, FetchRequest, PosterMessage};

pub const API_BASE: &str = "https://api.themoviedb.org/3";
pub const POSTER_BASE: &str = "https://image.tmdb.org/t/p/w500";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Error type for catalog fetches.
///
/// - `Network` — transport failure (wraps `reqwest::Error`)
/// - `Http` — non-2xx status code
/// - `Decode` — malformed JSON payload
/// - `Poster` — poster bytes could not be decoded into an image
/// - `MissingApiKey` — no credential available, no request was made
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("poster decode failed: {0}")]
    Poster(#[from] image::ImageError),

    #[error("TMDB API key is not set")]
    MissingApiKey,
}

pub type Result<T> = std::result::Result<T, FetchError>;

/// Thin client bound to the catalog base URL and an API key.
#[derive(Debug, Clone)]
pub struct TmdbClient {
    base_url: String,
    api_key: String,
    http: reqwest::blocking::Client,
}

impl TmdbClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            http,
        })
    }

    /// Create a client from `TMDB_API_KEY`, falling back to the one-line
    /// `api_key` file under the platform config directory.
    pub fn from_env() -> Result<Self> {
        let api_key = resolve_api_key().ok_or(FetchError::MissingApiKey)?;
        Self::new(API_BASE, &api_key)
    }

    pub fn collection_url(&self, category: Category, page: u32) -> String {
        format!(
            "{}/movie/{}?page={}&api_key={}",
            self.base_url,
            category.as_path(),
            page,
            self.api_key
        )
    }

    /// Fetches one page of a catalog collection, in API order.
    pub fn fetch_collection(&self, category: Category, page: u32) -> Result<Vec<MovieSummary>> {
        let response = self.http.get(self.collection_url(category, page)).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }
        let body = response.text()?;
        let page: CollectionPage = serde_json::from_str(&body)?;
        Ok(page.results)
    }
}

/// Builds the CDN URL for a poster. An absent or empty path yields no URL
/// at all rather than a string ending in "null".
pub fn poster_url(poster_path: Option<&str>) -> Option<String> {
    let path = poster_path?;
    if path.is_empty() {
        return None;
    }
    Some(format!("{POSTER_BASE}{path}"))
}

/// Downloads a poster and decodes it for terminal rendering.
pub fn download_poster(url: &str) -> Result<image::DynamicImage> {
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Http {
            status: status.as_u16(),
        });
    }
    let bytes = response.bytes()?;
    Ok(image::load_from_memory(&bytes)?)
}

fn resolve_api_key() -> Option<String> {
    if let Ok(key) = env::var("TMDB_API_KEY") {
        let key = key.trim();
        if !key.is_empty() {
            return Some(key.to_string());
        }
    }
    let path = dirs::config_dir()?.join("tmdb_tui").join("api_key");
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Runs one collection fetch on the calling worker thread and reports the
/// tagged outcome. Send errors are ignored: a dropped receiver means the
/// request was superseded or the screen went away.
pub fn fetch_collection_worker(
    client: TmdbClient,
    request: FetchRequest,
    sender: mpsc::Sender<FetchMessage>,
) {
    match client.fetch_collection(request.category, request.page) {
        Ok(movies) => {
            let _ = sender.send(FetchMessage::Complete { request, movies });
        }
        Err(e) => {
            let _ = sender.send(FetchMessage::Failed {
                request,
                error: e.to_string(),
            });
        }
    }
}

/// Downloads and decodes one poster on the calling worker thread. The
/// protocol is built back on the UI thread, so only the decoded image
/// crosses the channel.
pub fn fetch_poster_worker(url: String, movie_id: i64, sender: mpsc::Sender<PosterMessage>) {
    match download_poster(&url) {
        Ok(image) => {
            let _ = sender.send(PosterMessage::Ready { movie_id, image });
        }
        Err(_) => {
            let _ = sender.send(PosterMessage::Failed { movie_id });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> TmdbClient {
        TmdbClient::new("https://api.example.test/3/", "test-key").unwrap()
    }

    #[test]
    fn collection_url_hits_the_category_endpoint_with_page() {
        let client = test_client();
        assert_eq!(
            client.collection_url(Category::Popular, 1),
            "https://api.example.test/3/movie/popular?page=1&api_key=test-key"
        );
        assert_eq!(
            client.collection_url(Category::NowPlaying, 1),
            "https://api.example.test/3/movie/now_playing?page=1&api_key=test-key"
        );
        assert_eq!(
            client.collection_url(Category::TopRated, 1),
            "https://api.example.test/3/movie/top_rated?page=1&api_key=test-key"
        );
        assert_eq!(
            client.collection_url(Category::Upcoming, 1),
            "https://api.example.test/3/movie/upcoming?page=1&api_key=test-key"
        );
    }

    #[test]
    fn collection_url_is_stable_across_switch_sequences() {
        let client = test_client();
        let first = client.collection_url(Category::NowPlaying, 1);
        for category in Category::ALL {
            let _ = client.collection_url(category, 1);
        }
        assert_eq!(client.collection_url(Category::NowPlaying, 1), first);
    }

    #[test]
    fn poster_url_concatenates_base_and_path() {
        assert_eq!(
            poster_url(Some("/abc123.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc123.jpg")
        );
    }

    #[test]
    fn absent_poster_path_yields_no_url() {
        assert_eq!(poster_url(None), None);
        assert_eq!(poster_url(Some("")), None);
    }

    // Live test, exercised only when a real key is available.
    #[test]
    fn fetch_popular_page_one_live() {
        if env::var("TMDB_API_KEY").is_err() {
            eprintln!("skipping live test: TMDB_API_KEY not set");
            return;
        }
        let client = TmdbClient::from_env().unwrap();
        let movies = client.fetch_collection(Category::Popular, 1).unwrap();
        assert!(!movies.is_empty(), "expected at least one popular movie");
        assert!(movies.len() <= 20, "collection pages are bounded");
    }
}

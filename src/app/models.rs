use serde::Deserialize;

/// One of the four fixed catalog partitions exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    NowPlaying,
    Popular,
    TopRated,
    Upcoming,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::NowPlaying,
        Category::Popular,
        Category::TopRated,
        Category::Upcoming,
    ];

    /// Path segment used by the `/movie/{category}` endpoints.
    pub fn as_path(&self) -> &'static str {
        match self {
            Category::NowPlaying => "now_playing",
            Category::Popular => "popular",
            Category::TopRated => "top_rated",
            Category::Upcoming => "upcoming",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::NowPlaying => "Now Playing",
            Category::Popular => "Popular",
            Category::TopRated => "Top Rated",
            Category::Upcoming => "Upcoming",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::NowPlaying
    }
}

/// One movie entry as returned inside a collection page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    // null or missing in the wire format must land as None, never "null"
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: String,
}

/// Wire wrapper around one page of collection results. Only `results`
/// is consumed; order is preserved verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionPage {
    #[serde(default)]
    pub page: u32,
    pub results: Vec<MovieSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_paths_are_stable() {
        assert_eq!(Category::NowPlaying.as_path(), "now_playing");
        assert_eq!(Category::Popular.as_path(), "popular");
        assert_eq!(Category::TopRated.as_path(), "top_rated");
        assert_eq!(Category::Upcoming.as_path(), "upcoming");
    }

    #[test]
    fn category_path_mapping_is_idempotent() {
        // Switching through every category and back yields the same segment
        // for the same category, in both directions.
        for category in Category::ALL {
            let first = category.as_path();
            for other in Category::ALL {
                let _ = other.as_path();
            }
            assert_eq!(category.as_path(), first);
        }
    }

    #[test]
    fn null_poster_path_deserializes_to_none() {
        let raw = r#"{"id": 7, "title": "Untitled", "poster_path": null, "overview": ""}"#;
        let movie: MovieSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(movie.poster_path, None);
    }

    #[test]
    fn missing_optional_fields_are_tolerated() {
        let raw = r#"{"id": 3, "title": "Bare"}"#;
        let movie: MovieSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(movie.poster_path, None);
        assert_eq!(movie.overview, "");
    }

    #[test]
    fn collection_page_preserves_result_order() {
        let raw = r#"{
            "page": 1,
            "results": [
                {"id": 2, "title": "B", "poster_path": "/b.jpg", "overview": "second"},
                {"id": 1, "title": "A", "poster_path": "/a.jpg", "overview": "first"},
                {"id": 2, "title": "B", "poster_path": "/b.jpg", "overview": "second"}
            ]
        }"#;
        let page: CollectionPage = serde_json::from_str(raw).unwrap();
        // order preserved, duplicates kept
        let ids: Vec<i64> = page.results.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![2, 1, 2]);
    }
}

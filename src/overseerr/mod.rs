//! Overseerr gateway.
//!
//! Thin pass-through client for the upstream movie metadata API. Responses are
//! returned as raw JSON; only movie details are mapped into the catalog shape.

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::models::CreateMovieRequest;

/// Header carrying the Overseerr API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Failure talking to Overseerr.
#[derive(Debug)]
pub enum OverseerrError {
    /// Connection, timeout or body read failure
    Request(reqwest::Error),
    /// Overseerr answered with a non-success status
    Status(StatusCode),
    /// The response body did not have the expected shape
    Decode(serde_json::Error),
}

impl std::fmt::Display for OverseerrError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverseerrError::Request(e) => write!(f, "Overseerr request failed: {}", e),
            OverseerrError::Status(status) => write!(f, "Overseerr API error: {}", status),
            OverseerrError::Decode(e) => write!(f, "Unexpected Overseerr response: {}", e),
        }
    }
}

impl std::error::Error for OverseerrError {}

impl From<reqwest::Error> for OverseerrError {
    fn from(err: reqwest::Error) -> Self {
        OverseerrError::Request(err)
    }
}

/// Trending window accepted by `/trending/movies`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Day,
    #[default]
    Week,
}

impl TimeWindow {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }
}

/// Page number from a query string; an empty `page=` counts as absent.
pub fn deserialize_page<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(page) => page.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Filters for `/discover/movies`. Absent filters are not forwarded.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverParams {
    #[serde(default, deserialize_with = "deserialize_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: Option<u32>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub genre: Option<i64>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub primary_release_date_gte: Option<String>,
    #[serde(default)]
    pub primary_release_date_lte: Option<String>,
    #[serde(default)]
    pub vote_average_gte: Option<f64>,
    #[serde(default)]
    pub vote_average_lte: Option<f64>,
}

impl DiscoverParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("page", self.page.unwrap_or(1).to_string())];
        if let Some(language) = &self.language {
            query.push(("language", language.clone()));
        }
        if let Some(genre) = self.genre {
            query.push(("genre", genre.to_string()));
        }
        if let Some(sort_by) = &self.sort_by {
            query.push(("sortBy", sort_by.clone()));
        }
        if let Some(gte) = &self.primary_release_date_gte {
            query.push(("primaryReleaseDateGte", gte.clone()));
        }
        if let Some(lte) = &self.primary_release_date_lte {
            query.push(("primaryReleaseDateLte", lte.clone()));
        }
        if let Some(gte) = self.vote_average_gte {
            query.push(("voteAverageGte", gte.to_string()));
        }
        if let Some(lte) = self.vote_average_lte {
            query.push(("voteAverageLte", lte.to_string()));
        }
        query.push(("mediaType", "movie".to_string()));
        query
    }
}

/// Overseerr API client.
pub struct OverseerrClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OverseerrClient {
    pub fn new(client: reqwest::Client, base_url: String, api_key: Option<String>) -> Self {
        if api_key.is_none() {
            tracing::warn!("OVERSEERR_API_KEY not set. Some API calls may fail.");
        }

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn request(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<serde_json::Value, OverseerrError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut req = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .query(query);
        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }

        tracing::debug!(%url, "overseerr request");

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(OverseerrError::Status(status));
        }

        Ok(resp.json().await?)
    }

    /// Search movies by free text.
    pub async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> Result<serde_json::Value, OverseerrError> {
        self.request(
            "/search",
            &[
                ("query", query.to_string()),
                ("page", page.to_string()),
                ("language", "en".to_string()),
            ],
        )
        .await
    }

    /// Discover movies with filters.
    pub async fn discover_movies(
        &self,
        params: &DiscoverParams,
    ) -> Result<serde_json::Value, OverseerrError> {
        self.request("/discover/movies", &params.to_query()).await
    }

    /// Get detailed movie info.
    pub async fn get_movie(&self, id: i64) -> Result<serde_json::Value, OverseerrError> {
        self.request(&format!("/movie/{}", id), &[]).await
    }

    /// Get trending movies.
    pub async fn get_trending_movies(
        &self,
        page: u32,
        window: TimeWindow,
    ) -> Result<serde_json::Value, OverseerrError> {
        self.request(
            "/trending/movies",
            &[
                ("page", page.to_string()),
                ("timeWindow", window.as_str().to_string()),
            ],
        )
        .await
    }

    /// Get popular movies.
    pub async fn get_popular_movies(&self, page: u32) -> Result<serde_json::Value, OverseerrError> {
        self.request(
            "/discover/movies",
            &[
                ("page", page.to_string()),
                ("sortBy", "popularity.desc".to_string()),
            ],
        )
        .await
    }
}

/// Fields of an Overseerr movie detail that the catalog keeps.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OverseerrMovie {
    id: i64,
    title: String,
    overview: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    release_date: Option<String>,
    vote_average: Option<f64>,
    runtime: Option<i64>,
}

/// Map a raw Overseerr movie detail into the catalog's upsert record.
pub fn format_movie(raw: &serde_json::Value) -> Result<CreateMovieRequest, OverseerrError> {
    let movie = OverseerrMovie::deserialize(raw).map_err(OverseerrError::Decode)?;

    Ok(CreateMovieRequest {
        id: movie.id.to_string(),
        title: movie.title,
        overview: movie.overview,
        poster_path: movie.poster_path,
        backdrop_path: movie.backdrop_path,
        release_date: movie.release_date,
        vote_average: movie.vote_average.map(|v| v.to_string()),
        runtime: movie.runtime,
        external_movie_id: Some(movie.id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_movie_maps_fields() {
        let raw = json!({
            "id": 550,
            "title": "Fight Club",
            "overview": "An insomniac office worker...",
            "posterPath": "/poster.jpg",
            "backdropPath": "/backdrop.jpg",
            "releaseDate": "1999-10-15",
            "voteAverage": 8.4,
            "runtime": 139,
            "genres": [{ "id": 18, "name": "Drama" }]
        });

        let movie = format_movie(&raw).unwrap();
        assert_eq!(movie.id, "550");
        assert_eq!(movie.external_movie_id, Some(550));
        assert_eq!(movie.vote_average.as_deref(), Some("8.4"));
        assert_eq!(movie.poster_path.as_deref(), Some("/poster.jpg"));
        assert_eq!(movie.runtime, Some(139));
    }

    #[test]
    fn test_format_movie_whole_vote_average() {
        let raw = json!({ "id": 1, "title": "Whole", "voteAverage": 8 });
        let movie = format_movie(&raw).unwrap();
        assert_eq!(movie.vote_average.as_deref(), Some("8"));
        assert!(movie.overview.is_none());
    }

    #[test]
    fn test_format_movie_rejects_missing_id() {
        let raw = json!({ "title": "No Id" });
        assert!(matches!(
            format_movie(&raw),
            Err(OverseerrError::Decode(_))
        ));
    }

    #[test]
    fn test_empty_page_is_absent() {
        let params: DiscoverParams = serde_json::from_value(json!({ "page": "" })).unwrap();
        assert_eq!(params.page, None);
        assert_eq!(params.to_query()[0], ("page", "1".to_string()));

        let params: DiscoverParams = serde_json::from_value(json!({ "page": "3" })).unwrap();
        assert_eq!(params.page, Some(3));

        assert!(serde_json::from_value::<DiscoverParams>(json!({ "page": "two" })).is_err());
    }

    #[test]
    fn test_discover_query_skips_absent_filters() {
        let params = DiscoverParams {
            genre: Some(18),
            vote_average_gte: Some(7.5),
            ..Default::default()
        };

        let query = params.to_query();
        assert_eq!(
            query,
            vec![
                ("page", "1".to_string()),
                ("genre", "18".to_string()),
                ("voteAverageGte", "7.5".to_string()),
                ("mediaType", "movie".to_string()),
            ]
        );
    }
}

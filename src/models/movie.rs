//! Catalog movie model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A locally persisted movie metadata record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Upstream numeric id rendered as text
    pub id: String,
    pub title: String,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub vote_average: Option<String>,
    pub runtime: Option<i64>,
    pub external_movie_id: Option<i64>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// Upsert payload keyed by `id`, used by `POST /api/movies` and the
/// Overseerr detail route.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    #[validate(length(min = 1, message = "Movie id is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "Movie title is required"))]
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<String>,
    #[serde(default)]
    pub runtime: Option<i64>,
    #[serde(default)]
    pub external_movie_id: Option<i64>,
}

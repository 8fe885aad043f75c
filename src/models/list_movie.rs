//! List membership model.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Movie;

/// Association between a list and a movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMovie {
    pub id: String,
    pub list_id: String,
    pub movie_id: String,
    pub watched: bool,
    pub added_at: String,
    /// Set when `watched` becomes true, cleared when it becomes false
    pub watched_at: Option<String>,
    pub added_by_name: Option<String>,
    pub updated_at: String,
}

/// A membership joined with the movie's current catalog record.
///
/// `movie` is `None` when the movie was added without ever being fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMovieWithMovie {
    #[serde(flatten)]
    pub entry: ListMovie,
    pub movie: Option<Movie>,
}

/// Request body for adding a movie to a list.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddMovieToListRequest {
    #[validate(length(min = 1, message = "Movie id is required"))]
    pub movie_id: String,
    #[serde(default)]
    pub added_by_name: Option<String>,
}

/// Request body for updating a movie in a list.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovieInListRequest {
    #[serde(default)]
    pub watched: Option<bool>,
}

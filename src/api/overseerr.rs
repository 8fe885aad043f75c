//! Overseerr proxy endpoints.
//!
//! Upstream failures are logged in full and answered with a generic 500.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use super::extract::ValidatedQuery;
use crate::errors::AppError;
use crate::overseerr::{deserialize_page, format_movie, DiscoverParams, TimeWindow};
use crate::AppState;

/// Query for `GET /api/overseerr/search`.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchQuery {
    #[serde(default)]
    #[validate(length(min = 1, message = "Search query is required"))]
    pub query: String,
    #[serde(default, deserialize_with = "deserialize_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: Option<u32>,
}

/// Query for `GET /api/overseerr/popular`.
#[derive(Debug, Deserialize, Validate)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "deserialize_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: Option<u32>,
}

/// Query for `GET /api/overseerr/trending`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TrendingQuery {
    #[serde(default, deserialize_with = "deserialize_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    pub page: Option<u32>,
    #[serde(default)]
    pub time_window: TimeWindow,
}

/// GET /api/overseerr/search - Search movies.
pub async fn search(
    State(state): State<AppState>,
    ValidatedQuery(q): ValidatedQuery<SearchQuery>,
) -> Result<Json<Value>, AppError> {
    state
        .overseerr
        .search_movies(&q.query, q.page.unwrap_or(1))
        .await
        .map(Json)
        .map_err(|e| AppError::upstream("Failed to search movies", e))
}

/// GET /api/overseerr/discover - Discover movies with filters.
pub async fn discover(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<DiscoverParams>,
) -> Result<Json<Value>, AppError> {
    state
        .overseerr
        .discover_movies(&params)
        .await
        .map(Json)
        .map_err(|e| AppError::upstream("Failed to discover movies", e))
}

/// GET /api/overseerr/movie/:id - Movie details, saved into the catalog.
pub async fn movie_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::validation("Movie id must be numeric"))?;

    let details = state
        .overseerr
        .get_movie(id)
        .await
        .map_err(|e| AppError::upstream("Failed to fetch movie details", e))?;

    let record = format_movie(&details)
        .map_err(|e| AppError::upstream("Failed to fetch movie details", e))?;
    state
        .repo
        .upsert_movie(&record)
        .await
        .map_err(|e| AppError::upstream("Failed to fetch movie details", e))?;

    Ok(Json(details))
}

/// GET /api/overseerr/trending - Trending movies for a day or week window.
pub async fn trending(
    State(state): State<AppState>,
    ValidatedQuery(q): ValidatedQuery<TrendingQuery>,
) -> Result<Json<Value>, AppError> {
    state
        .overseerr
        .get_trending_movies(q.page.unwrap_or(1), q.time_window)
        .await
        .map(Json)
        .map_err(|e| AppError::upstream("Failed to fetch trending movies", e))
}

/// GET /api/overseerr/popular - Popular movies.
pub async fn popular(
    State(state): State<AppState>,
    ValidatedQuery(q): ValidatedQuery<PageQuery>,
) -> Result<Json<Value>, AppError> {
    state
        .overseerr
        .get_popular_movies(q.page.unwrap_or(1))
        .await
        .map(Json)
        .map_err(|e| AppError::upstream("Failed to fetch popular movies", e))
}

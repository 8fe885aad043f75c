//! Movie catalog API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::extract::ValidatedJson;
use super::{MovieResponse, MoviesResponse, SuccessResponse};
use crate::errors::AppError;
use crate::models::CreateMovieRequest;
use crate::AppState;

/// GET /api/movies - List all catalog movies.
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<MoviesResponse>, AppError> {
    let movies = state.repo.list_movies().await?;
    Ok(Json(MoviesResponse { movies }))
}

/// GET /api/movies/:id - Get a single movie.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MovieResponse>, AppError> {
    match state.repo.get_movie(&id).await? {
        Some(movie) => Ok(Json(MovieResponse { movie })),
        None => Err(AppError::NotFound("Movie not found".to_string())),
    }
}

/// POST /api/movies - Create a movie, or update it if the ID already exists.
pub async fn upsert_movie(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateMovieRequest>,
) -> Result<(StatusCode, Json<MovieResponse>), AppError> {
    let movie = state.repo.upsert_movie(&request).await?;
    Ok((StatusCode::CREATED, Json(MovieResponse { movie })))
}

/// DELETE /api/movies/:id - Delete a movie and every membership referencing it.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    state.repo.delete_movie(&id).await?;
    Ok(Json(SuccessResponse::ok()))
}

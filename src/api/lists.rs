//! List and list membership API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::extract::ValidatedJson;
use super::{ListMovieResponse, ListMoviesResponse, ListResponse, ListsResponse, SuccessResponse};
use crate::errors::AppError;
use crate::models::{
    AddMovieToListRequest, CreateListRequest, UpdateListRequest, UpdateMovieInListRequest,
};
use crate::AppState;

fn list_not_found() -> AppError {
    AppError::NotFound("List not found".to_string())
}

/// Membership routes answer 404 for an unknown list before touching anything.
async fn ensure_list_exists(state: &AppState, id: &str) -> Result<(), AppError> {
    match state.repo.get_list(id).await? {
        Some(_) => Ok(()),
        None => Err(list_not_found()),
    }
}

/// GET /api/lists - List all lists, most recently active first.
pub async fn list_lists(State(state): State<AppState>) -> Result<Json<ListsResponse>, AppError> {
    let lists = state.repo.list_lists().await?;
    Ok(Json(ListsResponse { lists }))
}

/// GET /api/lists/:id - Get a single list.
pub async fn get_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListResponse>, AppError> {
    let list = state.repo.get_list(&id).await?.ok_or_else(list_not_found)?;
    Ok(Json(ListResponse { list }))
}

/// POST /api/lists - Create a new list.
pub async fn create_list(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateListRequest>,
) -> Result<(StatusCode, Json<ListResponse>), AppError> {
    let list = state.repo.create_list(&request).await?;
    Ok((StatusCode::CREATED, Json(ListResponse { list })))
}

/// PUT /api/lists/:id - Update a list.
pub async fn update_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateListRequest>,
) -> Result<Json<ListResponse>, AppError> {
    let list = state.repo.update_list(&id, &request).await?;
    Ok(Json(ListResponse { list }))
}

/// DELETE /api/lists/:id - Delete a list and its memberships.
pub async fn delete_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    let list = state.repo.delete_list(&id).await?;
    tracing::info!(list_id = %list.id, name = %list.name, "list deleted");
    Ok(Json(SuccessResponse::ok()))
}

/// GET /api/lists/:id/movies - Movies in a list, most recently added first.
pub async fn list_movies_in_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListMoviesResponse>, AppError> {
    ensure_list_exists(&state, &id).await?;
    let movies = state.repo.list_movies_in_list(&id).await?;
    Ok(Json(ListMoviesResponse { movies }))
}

/// POST /api/lists/:id/movies - Add a movie to a list.
pub async fn add_movie_to_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<AddMovieToListRequest>,
) -> Result<(StatusCode, Json<ListMovieResponse>), AppError> {
    ensure_list_exists(&state, &id).await?;
    let list_movie = state.repo.add_movie_to_list(&id, &request).await?;
    Ok((StatusCode::CREATED, Json(ListMovieResponse { list_movie })))
}

/// DELETE /api/lists/:id/movies/:movieId - Remove a movie from a list.
pub async fn remove_movie_from_list(
    State(state): State<AppState>,
    Path((id, movie_id)): Path<(String, String)>,
) -> Result<Json<SuccessResponse>, AppError> {
    ensure_list_exists(&state, &id).await?;
    state.repo.remove_movie_from_list(&id, &movie_id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// PATCH /api/lists/:id/movies/:movieId - Mark a movie watched or unwatched.
pub async fn update_movie_in_list(
    State(state): State<AppState>,
    Path((id, movie_id)): Path<(String, String)>,
    ValidatedJson(request): ValidatedJson<UpdateMovieInListRequest>,
) -> Result<Json<ListMovieResponse>, AppError> {
    ensure_list_exists(&state, &id).await?;
    let list_movie = state
        .repo
        .update_movie_in_list(&id, &movie_id, &request)
        .await?;
    Ok(Json(ListMovieResponse { list_movie }))
}

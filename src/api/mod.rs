//! REST API module.
//!
//! Contains all API routes and handlers following the web client contract.

mod extract;
mod lists;
mod movies;
mod overseerr;

pub use lists::*;
pub use movies::*;
pub use overseerr::*;

use serde::Serialize;

use crate::models::{ListMovie, ListMovieWithMovie, Movie, MovieList};

/// `{"list": ...}`
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub list: MovieList,
}

/// `{"lists": [...]}`
#[derive(Debug, Serialize)]
pub struct ListsResponse {
    pub lists: Vec<MovieList>,
}

/// `{"movies": [...]}` for the memberships of one list.
#[derive(Debug, Serialize)]
pub struct ListMoviesResponse {
    pub movies: Vec<ListMovieWithMovie>,
}

/// `{"listMovie": ...}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMovieResponse {
    pub list_movie: ListMovie,
}

/// `{"movie": ...}`
#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub movie: Movie,
}

/// `{"movies": [...]}` for the catalog.
#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    pub movies: Vec<Movie>,
}

/// `{"success": true}` returned by deletes.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

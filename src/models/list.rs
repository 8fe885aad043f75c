//! Watchlist model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A named, shareable collection of movies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieList {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_by_name: Option<String>,
    /// Refreshed on every change to the list or its memberships
    pub last_activity_at: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating a new list.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateListRequest {
    #[validate(length(min = 1, message = "List name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_by_name: Option<String>,
}

/// Request body for updating an existing list. Absent fields are left alone.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "List name is required"))]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

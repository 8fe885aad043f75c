//! Database repository for CRUD operations.
//!
//! Writes that belong together (a membership change and the parent list's
//! activity touch, a delete and its cascade) share one transaction.

use sqlx::{sqlite::SqliteRow, Row, SqliteConnection, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    now_timestamp, AddMovieToListRequest, CreateListRequest, CreateMovieRequest, ListMovie,
    ListMovieWithMovie, Movie, MovieList, UpdateListRequest, UpdateMovieInListRequest,
};

const LIST_NOT_FOUND: &str = "List not found";
const MOVIE_NOT_FOUND: &str = "Movie not found";
const MEMBERSHIP_NOT_FOUND: &str = "Movie not found in list";

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Close the underlying pool, waiting for checked-out connections.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    // ==================== LIST OPERATIONS ====================

    /// List all lists, most recently active first.
    pub async fn list_lists(&self) -> Result<Vec<MovieList>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, description, created_by_name, last_activity_at, created_at, updated_at FROM lists ORDER BY last_activity_at DESC, created_at DESC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(list_from_row).collect())
    }

    /// Get a list by ID.
    pub async fn get_list(&self, id: &str) -> Result<Option<MovieList>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, description, created_by_name, last_activity_at, created_at, updated_at FROM lists WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(list_from_row))
    }

    /// Create a new list.
    pub async fn create_list(&self, request: &CreateListRequest) -> Result<MovieList, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = now_timestamp();

        sqlx::query(
            "INSERT INTO lists (id, name, description, created_by_name, last_activity_at, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(&request.name)
        .bind(&request.description)
        .bind(&request.created_by_name)
        .bind(&now)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        tracing::debug!(list_id = %id, "created list");

        Ok(MovieList {
            id,
            name: request.name.clone(),
            description: request.description.clone(),
            created_by_name: request.created_by_name.clone(),
            last_activity_at: now.clone(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Update a list's name and/or description. Absent fields keep their value.
    pub async fn update_list(
        &self,
        id: &str,
        request: &UpdateListRequest,
    ) -> Result<MovieList, AppError> {
        let now = now_timestamp();

        let row = sqlx::query(
            r#"UPDATE lists SET
                name = COALESCE(?, name),
                description = COALESCE(?, description),
                updated_at = ?,
                last_activity_at = ?
            WHERE id = ?
            RETURNING id, name, description, created_by_name, last_activity_at, created_at, updated_at"#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(&now)
        .bind(&now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref()
            .map(list_from_row)
            .ok_or_else(|| AppError::NotFound(LIST_NOT_FOUND.to_string()))
    }

    /// Delete a list together with its memberships.
    pub async fn delete_list(&self, id: &str) -> Result<MovieList, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            "DELETE FROM lists WHERE id = ? RETURNING id, name, description, created_by_name, last_activity_at, created_at, updated_at"
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Err(AppError::NotFound(LIST_NOT_FOUND.to_string()));
        };

        let removed = sqlx::query("DELETE FROM list_movies WHERE list_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            list_id = %id,
            memberships = removed.rows_affected(),
            "deleted list"
        );

        Ok(list_from_row(&row))
    }

    // ==================== MEMBERSHIP OPERATIONS ====================

    /// Get all memberships of a list joined with catalog data, newest first.
    pub async fn list_movies_in_list(
        &self,
        list_id: &str,
    ) -> Result<Vec<ListMovieWithMovie>, AppError> {
        let rows = sqlx::query(
            r#"SELECT lm.id, lm.list_id, lm.movie_id, lm.watched, lm.added_at,
                      lm.watched_at, lm.added_by_name, lm.updated_at,
                      m.id AS m_id, m.title AS m_title, m.overview AS m_overview,
                      m.poster_path AS m_poster_path, m.backdrop_path AS m_backdrop_path,
                      m.release_date AS m_release_date, m.vote_average AS m_vote_average,
                      m.runtime AS m_runtime, m.external_movie_id AS m_external_movie_id,
                      m.created_at AS m_created_at, m.updated_at AS m_updated_at
               FROM list_movies lm
               LEFT JOIN movies m ON m.id = lm.movie_id
               WHERE lm.list_id = ?
               ORDER BY lm.added_at DESC, lm.rowid DESC"#,
        )
        .bind(list_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| ListMovieWithMovie {
                entry: list_movie_from_row(row),
                movie: joined_movie_from_row(row),
            })
            .collect())
    }

    /// Add a movie to a list.
    ///
    /// The list's activity is touched whether or not the list or movie exist;
    /// callers check list existence first.
    pub async fn add_movie_to_list(
        &self,
        list_id: &str,
        request: &AddMovieToListRequest,
    ) -> Result<ListMovie, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = now_timestamp();

        let mut tx = self.pool.begin().await?;
        touch_list(&mut tx, list_id, &now).await?;

        sqlx::query(
            "INSERT INTO list_movies (id, list_id, movie_id, watched, added_at, watched_at, added_by_name, updated_at) VALUES (?, ?, ?, 0, ?, NULL, ?, ?)"
        )
        .bind(&id)
        .bind(list_id)
        .bind(&request.movie_id)
        .bind(&now)
        .bind(&request.added_by_name)
        .bind(&now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(ListMovie {
            id,
            list_id: list_id.to_string(),
            movie_id: request.movie_id.clone(),
            watched: false,
            added_at: now.clone(),
            watched_at: None,
            added_by_name: request.added_by_name.clone(),
            updated_at: now,
        })
    }

    /// Remove a movie from a list.
    ///
    /// The activity touch is committed even when no membership matched.
    pub async fn remove_movie_from_list(
        &self,
        list_id: &str,
        movie_id: &str,
    ) -> Result<ListMovie, AppError> {
        let now = now_timestamp();

        let mut tx = self.pool.begin().await?;
        touch_list(&mut tx, list_id, &now).await?;

        let row = sqlx::query(
            "DELETE FROM list_movies WHERE list_id = ? AND movie_id = ? RETURNING id, list_id, movie_id, watched, added_at, watched_at, added_by_name, updated_at"
        )
        .bind(list_id)
        .bind(movie_id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        row.as_ref()
            .map(list_movie_from_row)
            .ok_or_else(|| AppError::NotFound(MEMBERSHIP_NOT_FOUND.to_string()))
    }

    /// Update a membership's watched state.
    ///
    /// `watched = true` stamps `watched_at`, `false` clears it, absent leaves
    /// both untouched. The list's activity is touched unconditionally.
    pub async fn update_movie_in_list(
        &self,
        list_id: &str,
        movie_id: &str,
        request: &UpdateMovieInListRequest,
    ) -> Result<ListMovie, AppError> {
        let now = now_timestamp();

        let mut tx = self.pool.begin().await?;
        touch_list(&mut tx, list_id, &now).await?;

        let row = match request.watched {
            Some(watched) => {
                let watched_at = watched.then(|| now.clone());
                sqlx::query(
                    r#"UPDATE list_movies SET watched = ?, watched_at = ?, updated_at = ?
                    WHERE list_id = ? AND movie_id = ?
                    RETURNING id, list_id, movie_id, watched, added_at, watched_at, added_by_name, updated_at"#,
                )
                .bind(watched as i32)
                .bind(&watched_at)
                .bind(&now)
                .bind(list_id)
                .bind(movie_id)
                .fetch_optional(&mut *tx)
                .await?
            }
            None => {
                sqlx::query(
                    r#"UPDATE list_movies SET updated_at = ?
                    WHERE list_id = ? AND movie_id = ?
                    RETURNING id, list_id, movie_id, watched, added_at, watched_at, added_by_name, updated_at"#,
                )
                .bind(&now)
                .bind(list_id)
                .bind(movie_id)
                .fetch_optional(&mut *tx)
                .await?
            }
        };

        tx.commit().await?;

        row.as_ref()
            .map(list_movie_from_row)
            .ok_or_else(|| AppError::NotFound(MEMBERSHIP_NOT_FOUND.to_string()))
    }

    // ==================== MOVIE OPERATIONS ====================

    /// List all catalog movies, newest first.
    pub async fn list_movies(&self) -> Result<Vec<Movie>, AppError> {
        let rows = sqlx::query(
            r#"SELECT id, title, overview, poster_path, backdrop_path, release_date,
                      vote_average, runtime, external_movie_id, created_at, updated_at
               FROM movies ORDER BY created_at DESC, rowid DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(movie_from_row).collect())
    }

    /// Get a movie by ID.
    pub async fn get_movie(&self, id: &str) -> Result<Option<Movie>, AppError> {
        let row = sqlx::query(
            r#"SELECT id, title, overview, poster_path, backdrop_path, release_date,
                      vote_average, runtime, external_movie_id, created_at, updated_at
               FROM movies WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(movie_from_row))
    }

    /// Insert a movie, or update the existing record with the same ID.
    ///
    /// On conflict the title is replaced, optional fields are replaced only
    /// when supplied, and `created_at` is kept.
    pub async fn upsert_movie(&self, request: &CreateMovieRequest) -> Result<Movie, AppError> {
        let now = now_timestamp();

        let row = sqlx::query(
            r#"INSERT INTO movies (
                id, title, overview, poster_path, backdrop_path, release_date,
                vote_average, runtime, external_movie_id, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                overview = COALESCE(excluded.overview, movies.overview),
                poster_path = COALESCE(excluded.poster_path, movies.poster_path),
                backdrop_path = COALESCE(excluded.backdrop_path, movies.backdrop_path),
                release_date = COALESCE(excluded.release_date, movies.release_date),
                vote_average = COALESCE(excluded.vote_average, movies.vote_average),
                runtime = COALESCE(excluded.runtime, movies.runtime),
                external_movie_id = COALESCE(excluded.external_movie_id, movies.external_movie_id),
                updated_at = excluded.updated_at
            RETURNING id, title, overview, poster_path, backdrop_path, release_date,
                      vote_average, runtime, external_movie_id, created_at, updated_at"#,
        )
        .bind(&request.id)
        .bind(&request.title)
        .bind(&request.overview)
        .bind(&request.poster_path)
        .bind(&request.backdrop_path)
        .bind(&request.release_date)
        .bind(&request.vote_average)
        .bind(request.runtime)
        .bind(request.external_movie_id)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await?;

        Ok(movie_from_row(&row))
    }

    /// Delete a movie together with every membership referencing it.
    pub async fn delete_movie(&self, id: &str) -> Result<Movie, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"DELETE FROM movies WHERE id = ?
            RETURNING id, title, overview, poster_path, backdrop_path, release_date,
                      vote_average, runtime, external_movie_id, created_at, updated_at"#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Err(AppError::NotFound(MOVIE_NOT_FOUND.to_string()));
        };

        sqlx::query("DELETE FROM list_movies WHERE movie_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(movie_from_row(&row))
    }
}

/// Refresh a list's activity timestamp inside the caller's transaction.
async fn touch_list(conn: &mut SqliteConnection, list_id: &str, now: &str) -> Result<(), AppError> {
    sqlx::query("UPDATE lists SET last_activity_at = ? WHERE id = ?")
        .bind(now)
        .bind(list_id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

// Helper functions for row conversion

fn list_from_row(row: &SqliteRow) -> MovieList {
    MovieList {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        created_by_name: row.get("created_by_name"),
        last_activity_at: row.get("last_activity_at"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn list_movie_from_row(row: &SqliteRow) -> ListMovie {
    let watched: i32 = row.get("watched");
    ListMovie {
        id: row.get("id"),
        list_id: row.get("list_id"),
        movie_id: row.get("movie_id"),
        watched: watched != 0,
        added_at: row.get("added_at"),
        watched_at: row.get("watched_at"),
        added_by_name: row.get("added_by_name"),
        updated_at: row.get("updated_at"),
    }
}

fn movie_from_row(row: &SqliteRow) -> Movie {
    Movie {
        id: row.get("id"),
        title: row.get("title"),
        overview: row.get("overview"),
        poster_path: row.get("poster_path"),
        backdrop_path: row.get("backdrop_path"),
        release_date: row.get("release_date"),
        vote_average: row.get("vote_average"),
        runtime: row.get("runtime"),
        external_movie_id: row.get("external_movie_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Movie columns of the membership join; all NULL when the movie is not in the catalog.
fn joined_movie_from_row(row: &SqliteRow) -> Option<Movie> {
    let id: Option<String> = row.get("m_id");
    let title: Option<String> = row.get("m_title");
    let created_at: Option<String> = row.get("m_created_at");

    Some(Movie {
        id: id?,
        title: title?,
        overview: row.get("m_overview"),
        poster_path: row.get("m_poster_path"),
        backdrop_path: row.get("m_backdrop_path"),
        release_date: row.get("m_release_date"),
        vote_average: row.get("m_vote_average"),
        runtime: row.get("m_runtime"),
        external_movie_id: row.get("m_external_movie_id"),
        created_at: created_at.unwrap_or_default(),
        updated_at: row.get("m_updated_at"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use tempfile::TempDir;

    async fn repo() -> (Repository, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let pool = init_database(&temp_dir.path().join("repo.sqlite"))
            .await
            .expect("Failed to init DB");
        (Repository::new(pool), temp_dir)
    }

    async fn tick() {
        tokio::time::sleep(std::time::Duration::from_millis(15)).await;
    }

    fn new_list(name: &str) -> CreateListRequest {
        CreateListRequest {
            name: name.to_string(),
            description: None,
            created_by_name: Some("Sam".to_string()),
        }
    }

    fn movie(id: &str, title: &str) -> CreateMovieRequest {
        CreateMovieRequest {
            id: id.to_string(),
            title: title.to_string(),
            overview: None,
            poster_path: None,
            backdrop_path: None,
            release_date: None,
            vote_average: None,
            runtime: None,
            external_movie_id: None,
        }
    }

    fn add(movie_id: &str) -> AddMovieToListRequest {
        AddMovieToListRequest {
            movie_id: movie_id.to_string(),
            added_by_name: None,
        }
    }

    #[tokio::test]
    async fn test_create_list_timestamps_match() {
        let (repo, _dir) = repo().await;

        let list = repo.create_list(&new_list("Weekend")).await.unwrap();
        assert_eq!(list.last_activity_at, list.created_at);
        assert_eq!(list.updated_at, list.created_at);

        let fetched = repo.get_list(&list.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Weekend");
        assert_eq!(fetched.created_by_name.as_deref(), Some("Sam"));
    }

    #[tokio::test]
    async fn test_lists_ordered_by_activity() {
        let (repo, _dir) = repo().await;

        let older = repo.create_list(&new_list("Older")).await.unwrap();
        tick().await;
        let newer = repo.create_list(&new_list("Newer")).await.unwrap();

        let lists = repo.list_lists().await.unwrap();
        assert_eq!(lists[0].id, newer.id);

        tick().await;
        repo.add_movie_to_list(&older.id, &add("550")).await.unwrap();

        let lists = repo.list_lists().await.unwrap();
        assert_eq!(lists[0].id, older.id);
        assert_eq!(lists[1].id, newer.id);
    }

    #[tokio::test]
    async fn test_update_list_keeps_absent_fields() {
        let (repo, _dir) = repo().await;

        let list = repo
            .create_list(&CreateListRequest {
                name: "Horror".to_string(),
                description: Some("Spooky".to_string()),
                created_by_name: None,
            })
            .await
            .unwrap();
        tick().await;

        let updated = repo
            .update_list(
                &list.id,
                &UpdateListRequest {
                    name: Some("Halloween".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Halloween");
        assert_eq!(updated.description.as_deref(), Some("Spooky"));
        assert_eq!(updated.created_at, list.created_at);
        assert!(updated.last_activity_at > list.last_activity_at);

        let missing = repo
            .update_list("missing", &UpdateListRequest::default())
            .await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_upsert_movie_updates_in_place() {
        let (repo, _dir) = repo().await;

        let mut request = movie("550", "Fight Club");
        request.overview = Some("An insomniac office worker...".to_string());
        let first = repo.upsert_movie(&request).await.unwrap();
        tick().await;

        let mut second_request = movie("550", "Fight Club (1999)");
        second_request.vote_average = Some("8.4".to_string());
        let second = repo.upsert_movie(&second_request).await.unwrap();

        assert_eq!(second.id, "550");
        assert_eq!(second.title, "Fight Club (1999)");
        assert_eq!(second.vote_average.as_deref(), Some("8.4"));
        // Not supplied the second time, so kept.
        assert_eq!(
            second.overview.as_deref(),
            Some("An insomniac office worker...")
        );
        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at > first.updated_at);

        assert_eq!(repo.list_movies().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_members_joined_and_newest_first() {
        let (repo, _dir) = repo().await;

        let list = repo.create_list(&new_list("Weekend")).await.unwrap();
        repo.upsert_movie(&movie("550", "Fight Club")).await.unwrap();

        repo.add_movie_to_list(&list.id, &add("550")).await.unwrap();
        tick().await;
        repo.add_movie_to_list(&list.id, &add("603")).await.unwrap();

        let members = repo.list_movies_in_list(&list.id).await.unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].entry.movie_id, "603");
        assert!(members[0].movie.is_none());
        assert_eq!(members[1].entry.movie_id, "550");
        assert_eq!(
            members[1].movie.as_ref().map(|m| m.title.as_str()),
            Some("Fight Club")
        );

        // The join reflects the catalog's current fields.
        repo.upsert_movie(&movie("550", "Fight Club Remastered"))
            .await
            .unwrap();
        let members = repo.list_movies_in_list(&list.id).await.unwrap();
        assert_eq!(
            members[1].movie.as_ref().map(|m| m.title.as_str()),
            Some("Fight Club Remastered")
        );
    }

    #[tokio::test]
    async fn test_watched_toggle_sets_and_clears_watched_at() {
        let (repo, _dir) = repo().await;

        let list = repo.create_list(&new_list("Weekend")).await.unwrap();
        repo.add_movie_to_list(&list.id, &add("550")).await.unwrap();

        let watched = repo
            .update_movie_in_list(
                &list.id,
                "550",
                &UpdateMovieInListRequest {
                    watched: Some(true),
                },
            )
            .await
            .unwrap();
        assert!(watched.watched);
        assert!(watched.watched_at.is_some());

        let untouched = repo
            .update_movie_in_list(&list.id, "550", &UpdateMovieInListRequest::default())
            .await
            .unwrap();
        assert!(untouched.watched);
        assert_eq!(untouched.watched_at, watched.watched_at);

        let unwatched = repo
            .update_movie_in_list(
                &list.id,
                "550",
                &UpdateMovieInListRequest {
                    watched: Some(false),
                },
            )
            .await
            .unwrap();
        assert!(!unwatched.watched);
        assert!(unwatched.watched_at.is_none());
    }

    #[tokio::test]
    async fn test_remove_missing_membership_still_touches_list() {
        let (repo, _dir) = repo().await;

        let list = repo.create_list(&new_list("Weekend")).await.unwrap();
        tick().await;

        let result = repo.remove_movie_from_list(&list.id, "does-not-exist").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        let after = repo.get_list(&list.id).await.unwrap().unwrap();
        assert!(after.last_activity_at > list.last_activity_at);
    }

    #[tokio::test]
    async fn test_update_missing_membership_still_touches_list() {
        let (repo, _dir) = repo().await;

        let list = repo.create_list(&new_list("Weekend")).await.unwrap();
        tick().await;

        let result = repo
            .update_movie_in_list(
                &list.id,
                "does-not-exist",
                &UpdateMovieInListRequest {
                    watched: Some(true),
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        let after = repo.get_list(&list.id).await.unwrap().unwrap();
        assert!(after.last_activity_at > list.last_activity_at);
        assert_eq!(after.updated_at, list.updated_at);
    }

    #[tokio::test]
    async fn test_add_movie_touches_list() {
        let (repo, _dir) = repo().await;

        let list = repo.create_list(&new_list("Weekend")).await.unwrap();
        tick().await;

        let entry = repo.add_movie_to_list(&list.id, &add("550")).await.unwrap();

        let after = repo.get_list(&list.id).await.unwrap().unwrap();
        assert!(after.last_activity_at > list.last_activity_at);
        assert_eq!(after.last_activity_at, entry.added_at);
    }

    #[tokio::test]
    async fn test_delete_list_cascades_memberships() {
        let (repo, _dir) = repo().await;

        let list = repo.create_list(&new_list("Weekend")).await.unwrap();
        let other = repo.create_list(&new_list("Other")).await.unwrap();
        repo.add_movie_to_list(&list.id, &add("550")).await.unwrap();
        repo.add_movie_to_list(&other.id, &add("550")).await.unwrap();

        let deleted = repo.delete_list(&list.id).await.unwrap();
        assert_eq!(deleted.id, list.id);

        assert!(repo.get_list(&list.id).await.unwrap().is_none());
        assert!(repo.list_movies_in_list(&list.id).await.unwrap().is_empty());
        assert_eq!(repo.list_movies_in_list(&other.id).await.unwrap().len(), 1);

        assert!(matches!(
            repo.delete_list(&list.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_movie_cascades_memberships() {
        let (repo, _dir) = repo().await;

        let list = repo.create_list(&new_list("Weekend")).await.unwrap();
        repo.upsert_movie(&movie("550", "Fight Club")).await.unwrap();
        repo.add_movie_to_list(&list.id, &add("550")).await.unwrap();

        let deleted = repo.delete_movie("550").await.unwrap();
        assert_eq!(deleted.title, "Fight Club");
        assert!(repo.get_movie("550").await.unwrap().is_none());
        assert!(repo.list_movies_in_list(&list.id).await.unwrap().is_empty());
    }
}

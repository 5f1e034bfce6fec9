//! Repository for the `actors` and `directors` tables.

use chrono::Utc;
use filmcrew_core::people::PersonKind;
use filmcrew_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::person::{CreatePerson, Person, UpdatePerson};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, dob, bio, created_at, updated_at";

/// Provides CRUD operations for people. Every method takes the
/// [`PersonKind`] that selects the table.
pub struct PersonRepo;

impl PersonRepo {
    /// Insert a new person, returning the created row.
    ///
    /// `created_at` and `updated_at` are both set to the current time.
    pub async fn create(
        pool: &SqlitePool,
        kind: PersonKind,
        input: &CreatePerson,
    ) -> Result<Person, sqlx::Error> {
        let query = format!(
            "INSERT INTO {table} (name, dob, bio, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)
             RETURNING {COLUMNS}",
            table = kind.table()
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(&input.name)
            .bind(input.dob)
            .bind(&input.bio)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a person by ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        kind: PersonKind,
        id: DbId,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {} WHERE id = ?1", kind.table());
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all people of a kind in insertion order.
    pub async fn list(pool: &SqlitePool, kind: PersonKind) -> Result<Vec<Person>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {} ORDER BY id ASC", kind.table());
        sqlx::query_as::<_, Person>(&query).fetch_all(pool).await
    }

    /// Count the rows of a kind.
    pub async fn count(pool: &SqlitePool, kind: PersonKind) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {}", kind.table());
        sqlx::query_scalar::<_, i64>(&query).fetch_one(pool).await
    }

    /// Replace `name`, `dob` and `bio` and bump `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        kind: PersonKind,
        id: DbId,
        input: &UpdatePerson,
    ) -> Result<Option<Person>, sqlx::Error> {
        let query = format!(
            "UPDATE {table} SET
                name = ?2,
                dob = ?3,
                bio = ?4,
                updated_at = ?5
             WHERE id = ?1
             RETURNING {COLUMNS}",
            table = kind.table()
        );
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.dob)
            .bind(&input.bio)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a person by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, kind: PersonKind, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = ?1", kind.table());
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

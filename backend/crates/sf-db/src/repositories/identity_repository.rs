//! Identity store, keyed by email.
//!
//! Uniqueness of the email is enforced by the table constraint, so two
//! concurrent registrations for the same address cannot both succeed.
//! Replacement is whole-record: there is no version column and the last
//! writer wins.

use crate::{DbError, Result as DbErrorResult};

use sf_core::IdentityRecord;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const SELECT_COLUMNS: &str = r#"
    SELECT id, first_name, last_name, email, credential_hash,
        contact_number, profile_image, created_at, updated_at
    FROM identities
"#;

pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new identity; `DbError::Duplicate` if the email is taken
    pub async fn create(&self, record: &IdentityRecord) -> DbErrorResult<Uuid> {
        sqlx::query(
            r#"
                INSERT INTO identities (
                    id, first_name, last_name, email, credential_hash,
                    contact_number, profile_image, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.id.to_string())
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(&record.email)
        .bind(&record.credential_hash)
        .bind(&record.contact_number)
        .bind(&record.profile_image)
        .bind(record.created_at.timestamp())
        .bind(record.updated_at.timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from_insert(e, &record.email))?;

        Ok(record.id)
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<IdentityRecord>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE email = ?"))
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    pub async fn exists(&self, email: &str) -> DbErrorResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM identities WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Overwrite every mutable column of the record with the same email.
    ///
    /// `id` and `created_at` are never touched. `DbError::NotFound` when no
    /// row matches.
    pub async fn replace(&self, record: &IdentityRecord) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
                UPDATE identities SET
                    first_name = ?,
                    last_name = ?,
                    credential_hash = ?,
                    contact_number = ?,
                    profile_image = ?,
                    updated_at = ?
                WHERE email = ?
            "#,
        )
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(&record.credential_hash)
        .bind(&record.contact_number)
        .bind(&record.profile_image)
        .bind(record.updated_at.timestamp())
        .bind(&record.email)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                email: record.email.clone(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<IdentityRecord> {
        let id: String = row.try_get("id")?;
        let created_at: i64 = row.try_get("created_at")?;
        let updated_at: i64 = row.try_get("updated_at")?;

        Ok(IdentityRecord {
            id: Uuid::parse_str(&id).map_err(|e| DbError::Initialization {
                message: format!("Invalid UUID in identities.id: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            credential_hash: row.try_get("credential_hash")?,
            contact_number: row.try_get("contact_number")?,
            profile_image: row.try_get("profile_image")?,
            created_at: Self::timestamp(created_at, "created_at")?,
            updated_at: Self::timestamp(updated_at, "updated_at")?,
        })
    }

    #[track_caller]
    fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
        DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::Initialization {
            message: format!("Invalid timestamp in identities.{}", column),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

//! Credential store: identity lookups, creation, and linkage updates.
//!
//! Email and federated-id uniqueness live in the schema, not in
//! application code, so concurrent registrations and link attempts for
//! the same credential are serialized by the constraint: the second
//! writer receives `DbError::Duplicate`.

use crate::{DbError, Result as DbErrorResult};

use kino_core::{Identity, Provider, normalize_email};

use std::str::FromStr;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const IDENTITY_COLUMNS: &str =
    "id, email, password_hash, federated_id, display_name, avatar_url, provider, \
     created_at, updated_at";

pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, identity: &Identity) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO identities (
                    id, email, password_hash, federated_id, display_name, avatar_url,
                    provider, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(identity.id.to_string())
        .bind(identity.email.as_deref())
        .bind(identity.password_hash.as_deref())
        .bind(identity.federated_id.as_deref())
        .bind(identity.display_name.as_deref())
        .bind(identity.avatar_url.as_deref())
        .bind(identity.provider.as_str())
        .bind(identity.created_at.timestamp())
        .bind(identity.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Persist mutated linkage/profile fields of an existing identity.
    /// `id`, `created_at` are immutable and never written here.
    pub async fn save(&self, identity: &Identity) -> DbErrorResult<()> {
        let result = sqlx::query(
            r#"
                UPDATE identities
                SET email = ?, password_hash = ?, federated_id = ?, display_name = ?,
                    avatar_url = ?, provider = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(identity.email.as_deref())
        .bind(identity.password_hash.as_deref())
        .bind(identity.federated_id.as_deref())
        .bind(identity.display_name.as_deref())
        .bind(identity.avatar_url.as_deref())
        .bind(identity.provider.as_str())
        .bind(identity.updated_at.timestamp())
        .bind(identity.id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::row(format!(
                "identity {} does not exist",
                identity.id
            )));
        }

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(&format!(
            "SELECT {IDENTITY_COLUMNS} FROM identities WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| decode_identity(&r)).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(&format!(
            "SELECT {IDENTITY_COLUMNS} FROM identities WHERE email = ?"
        ))
        .bind(normalize_email(email))
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| decode_identity(&r)).transpose()
    }

    pub async fn find_by_federated_id(
        &self,
        federated_id: &str,
    ) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(&format!(
            "SELECT {IDENTITY_COLUMNS} FROM identities WHERE federated_id = ?"
        ))
        .bind(federated_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| decode_identity(&r)).transpose()
    }

    /// Combined lookup used by the federated login flow.
    ///
    /// Precedence is explicit and order-sensitive: the federated-id match
    /// is the authoritative link for the provider, so it wins even when a
    /// *different* record matches the email.
    pub async fn find_by_email_or_federated_id(
        &self,
        email: Option<&str>,
        federated_id: &str,
    ) -> DbErrorResult<Option<Identity>> {
        if let Some(identity) = self.find_by_federated_id(federated_id).await? {
            return Ok(Some(identity));
        }

        match email {
            Some(email) => self.find_by_email(email).await,
            None => Ok(None),
        }
    }
}

fn decode_identity(row: &SqliteRow) -> DbErrorResult<Identity> {
    let id: String = row.try_get("id")?;
    let provider: String = row.try_get("provider")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Identity {
        id: Uuid::parse_str(&id)
            .map_err(|e| DbError::row(format!("invalid UUID in identities.id: {e}")))?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        federated_id: row.try_get("federated_id")?,
        display_name: row.try_get("display_name")?,
        avatar_url: row.try_get("avatar_url")?,
        provider: Provider::from_str(&provider)
            .map_err(|e| DbError::row(format!("invalid identities.provider: {e}")))?,
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::row("invalid timestamp in identities.created_at"))?,
        updated_at: DateTime::from_timestamp(updated_at, 0)
            .ok_or_else(|| DbError::row("invalid timestamp in identities.updated_at"))?,
    })
}

//! Booking store. Bookings are append-only in this system.

use crate::{DbError, Result as DbErrorResult};

use kino_core::Booking;

use chrono::DateTime;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct BookingRepository {
    pool: SqlitePool,
}

impl BookingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, booking: &Booking) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO bookings (
                    id, user_id, title, movie_id, date, seats, name,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(booking.id.to_string())
        .bind(booking.user_id.to_string())
        .bind(&booking.title)
        .bind(booking.movie_id)
        .bind(booking.date.timestamp())
        .bind(booking.seats)
        .bind(&booking.name)
        .bind(booking.created_at.timestamp())
        .bind(booking.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// All bookings owned by an identity, newest first
    pub async fn find_by_user(&self, user_id: Uuid) -> DbErrorResult<Vec<Booking>> {
        let rows = sqlx::query(
            r#"
                SELECT id, user_id, title, movie_id, date, seats, name,
                       created_at, updated_at
                FROM bookings
                WHERE user_id = ?
                ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(decode_booking).collect()
    }
}

fn decode_booking(row: &SqliteRow) -> DbErrorResult<Booking> {
    let id: String = row.try_get("id")?;
    let user_id: String = row.try_get("user_id")?;
    let date: i64 = row.try_get("date")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Booking {
        id: Uuid::parse_str(&id)
            .map_err(|e| DbError::row(format!("invalid UUID in bookings.id: {e}")))?,
        user_id: Uuid::parse_str(&user_id)
            .map_err(|e| DbError::row(format!("invalid UUID in bookings.user_id: {e}")))?,
        title: row.try_get("title")?,
        movie_id: row.try_get("movie_id")?,
        date: DateTime::from_timestamp(date, 0)
            .ok_or_else(|| DbError::row("invalid timestamp in bookings.date"))?,
        seats: row.try_get("seats")?,
        name: row.try_get("name")?,
        created_at: DateTime::from_timestamp(created_at, 0)
            .ok_or_else(|| DbError::row("invalid timestamp in bookings.created_at"))?,
        updated_at: DateTime::from_timestamp(updated_at, 0)
            .ok_or_else(|| DbError::row("invalid timestamp in bookings.updated_at"))?,
    })
}

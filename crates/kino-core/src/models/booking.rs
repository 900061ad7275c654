//! Booking entity - a seat reservation owned by exactly one identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A booking record. Created, never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    /// Owning identity
    pub user_id: Uuid,
    pub title: String,
    pub movie_id: Option<i64>,
    pub date: DateTime<Utc>,
    pub seats: i64,
    /// Display name on the reservation
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        user_id: Uuid,
        title: String,
        movie_id: Option<i64>,
        date: DateTime<Utc>,
        seats: i64,
        name: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            movie_id,
            date,
            seats,
            name,
            created_at: now,
            updated_at: now,
        }
    }
}

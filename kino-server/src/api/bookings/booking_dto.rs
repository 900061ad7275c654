use kino_core::Booking;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<i64>,
    pub date: DateTime<Utc>,
    pub seats: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Booking> for BookingDto {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id.to_string(),
            user_id: booking.user_id.to_string(),
            title: booking.title.clone(),
            movie_id: booking.movie_id,
            date: booking.date,
            seats: booking.seats,
            name: booking.name.clone(),
            created_at: booking.created_at,
        }
    }
}

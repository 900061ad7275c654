use crate::api::error::{ApiError, Result as ApiErrorResult};

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Incoming booking payload.
///
/// Clients send the film title under either `title` or `movieTitle`;
/// both are accepted and the first one present wins.
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub title: Option<String>,
    #[serde(rename = "movieTitle")]
    pub movie_title: Option<String>,
    #[serde(rename = "movieId")]
    pub movie_id: Option<i64>,
    pub date: Option<DateTime<Utc>>,
    pub seats: Option<i64>,
    pub name: Option<String>,
}

impl CreateBookingRequest {
    /// Resolve the title across both accepted field names
    pub fn resolve_title(&self) -> ApiErrorResult<String> {
        self.title
            .as_deref()
            .or(self.movie_title.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .ok_or_else(|| ApiError::validation_field("Movie title is required", "title"))
    }

    pub fn resolve_seats(&self) -> ApiErrorResult<i64> {
        match self.seats {
            Some(seats) if seats >= 1 => Ok(seats),
            Some(_) => Err(ApiError::validation_field(
                "Seats must be at least 1",
                "seats",
            )),
            None => Err(ApiError::validation_field("Seats is required", "seats")),
        }
    }
}

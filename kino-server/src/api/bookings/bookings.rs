//! Booking handlers. Both routes require a valid bearer token and only
//! ever touch the authenticated caller's rows.

use crate::api::bookings::{BookingDto, CreateBookingRequest};
use crate::api::error::{ApiError, Result as ApiErrorResult};
use crate::api::extractors::auth_user::AuthUser;
use crate::state::AppState;

use kino_core::Booking;
use kino_db::BookingRepository;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;
use uuid::Uuid;

/// POST /bookings
pub async fn create_booking(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(request): Json<CreateBookingRequest>,
) -> ApiErrorResult<(StatusCode, Json<BookingDto>)> {
    let title = request.resolve_title()?;
    let seats = request.resolve_seats()?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::InvalidToken)?;

    // Missing date means "book for now"; missing name falls back to the
    // account email on the token.
    let date = request.date.unwrap_or_else(Utc::now);
    let name = request
        .name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| claims.email.clone());

    let booking = Booking::new(user_id, title, request.movie_id, date, seats, name);
    BookingRepository::new(state.pool.clone())
        .create(&booking)
        .await?;

    log::info!("Booking {} created for identity {}", booking.id, user_id);

    Ok((StatusCode::CREATED, Json(BookingDto::from(&booking))))
}

/// GET /bookings - the caller's bookings, newest first
pub async fn list_bookings(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> ApiErrorResult<Json<Vec<BookingDto>>> {
    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::InvalidToken)?;

    let bookings = BookingRepository::new(state.pool.clone())
        .find_by_user(user_id)
        .await?;

    Ok(Json(bookings.iter().map(BookingDto::from).collect()))
}

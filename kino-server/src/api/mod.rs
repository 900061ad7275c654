pub mod auth;
pub mod bookings;
pub mod error;
pub mod extractors;
pub mod oauth;

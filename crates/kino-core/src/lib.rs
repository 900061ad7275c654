pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::booking::Booking;
pub use models::identity::{Identity, normalize_email};
pub use models::provider::Provider;

#[cfg(test)]
mod tests;

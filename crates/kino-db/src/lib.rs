pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::booking_repository::BookingRepository;
pub use repositories::identity_repository::IdentityRepository;

/// Embedded schema migrations, run at startup and by test pools
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

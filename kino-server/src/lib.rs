pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod oauth;
pub mod routes;
pub mod state;

pub use api::error::{ApiError, Result as ApiResult};
pub use api::extractors::auth_user::AuthUser;
pub use routes::build_router;
pub use state::AppState;

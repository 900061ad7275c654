mod auth;
mod auth_response;
mod check_auth_response;
mod login_request;
mod register_request;
mod user_dto;

pub use auth::{check_auth, login, register};
pub use auth_response::AuthResponse;
pub use check_auth_response::{CheckAuthResponse, ProfileDto};
pub use login_request::LoginRequest;
pub use register_request::RegisterRequest;
pub use user_dto::UserDto;

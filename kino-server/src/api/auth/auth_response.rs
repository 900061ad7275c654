use crate::api::auth::UserDto;

use serde::Serialize;

/// Body of a successful register or login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
}

use kino_core::Identity;

use serde::Serialize;

/// Minimal account view returned alongside a freshly-issued token
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub email: Option<String>,
}

impl From<&Identity> for UserDto {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            email: identity.email.clone(),
        }
    }
}

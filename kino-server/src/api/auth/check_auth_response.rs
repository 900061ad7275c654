use kino_core::Identity;

use serde::Serialize;

/// Body of GET /auth/check. Always a 200; authentication state is
/// carried in the payload, not the status code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAuthResponse {
    pub is_authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<ProfileDto>,
}

impl CheckAuthResponse {
    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            user: None,
        }
    }

    pub fn authenticated(identity: &Identity) -> Self {
        Self {
            is_authenticated: true,
            user: Some(ProfileDto::from(identity)),
        }
    }
}

/// Full profile view for an authenticated session
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    pub provider: String,
}

impl From<&Identity> for ProfileDto {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            email: identity.email.clone(),
            display_name: identity.display_name.clone(),
            avatar: identity.avatar_url.clone(),
            provider: identity.provider.as_str().to_string(),
        }
    }
}

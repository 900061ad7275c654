use serde::Serialize;

/// Body of GET /auth/federated/url
#[derive(Debug, Serialize)]
pub struct AuthorizeUrlResponse {
    pub url: String,
}

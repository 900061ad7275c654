use crate::api::error::{ApiError, Result as ApiErrorResult};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> ApiErrorResult<(String, &str)> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ApiError::validation_field("Email is required", "email"));
        }
        if self.password.is_empty() {
            return Err(ApiError::validation_field(
                "Password is required",
                "password",
            ));
        }
        Ok((email.to_string(), &self.password))
    }
}

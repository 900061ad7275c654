pub mod claims;
pub mod error;
pub mod jwt_issuer;
pub mod jwt_validator;
pub mod password;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_issuer::{JwtIssuer, TOKEN_TTL_DAYS};
pub use jwt_validator::JwtValidator;
pub use password::{hash_password, verify_password};

#[cfg(test)]
mod tests;

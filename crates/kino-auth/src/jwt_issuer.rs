use crate::{AuthError, Claims, Result as AuthErrorResult};

use kino_core::Identity;

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Fixed bearer-token lifetime
pub const TOKEN_TTL_DAYS: i64 = 7;

/// Mints HS256 bearer tokens signed with the server-held secret.
///
/// Pure function of the secret: no side effects, freely shareable.
pub struct JwtIssuer {
    encoding_key: EncodingKey,
}

impl JwtIssuer {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
        }
    }

    /// Issue a token carrying the identity's claims, expiring in 7 days
    #[track_caller]
    pub fn issue(&self, identity: &Identity) -> AuthErrorResult<String> {
        let claims = Claims::for_identity(identity, TOKEN_TTL_DAYS);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}

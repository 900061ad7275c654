//! Password hashing and verification.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// bcrypt work factor. Fixed so that stored hashes stay comparable across
/// deployments; raising it only affects newly-created hashes.
pub const BCRYPT_COST: u32 = 12;

/// Hash a password with bcrypt (salted, cost 12)
#[track_caller]
pub fn hash_password(plain: &str) -> AuthErrorResult<String> {
    bcrypt::hash(plain, BCRYPT_COST).map_err(|e| AuthError::PasswordHash {
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Verify a password against a stored hash.
///
/// An unparsable hash counts as a mismatch; the caller cannot tell the
/// difference, which keeps the login failure path uniform.
pub fn verify_password(plain: &str, hash: &str) -> bool {
    bcrypt::verify(plain, hash).unwrap_or(false)
}

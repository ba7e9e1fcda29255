//! JWT issuing and verification.
//!
//! Tokens are HS256-signed with a shared secret and carry the user id and
//! email plus issued-at/expiry timestamps. Validity is signature + expiry
//! only; there is no revocation list. The signing keys are built once from
//! the configured secret and live in [`crate::server::state::AppState`], so
//! nothing here touches the process environment.

use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Tokens expire one hour after issue.
const TOKEN_TTL_SECS: u64 = 60 * 60;

/// Claims embedded in every issued token.
///
/// `sub` is typed as a [`Uuid`], so a signed token whose subject is not a
/// UUID fails deserialization and is rejected as malformed.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Owning user's id.
    pub sub: Uuid,
    /// Owning user's email.
    pub email: String,
    /// Expiration time (Unix timestamp).
    pub exp: u64,
    /// Issued-at time (Unix timestamp).
    pub iat: u64,
}

/// Why a presented token was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Invalid authentication token")]
    InvalidSignature,
    #[error("Authentication token expired")]
    Expired,
    #[error("Malformed authentication token")]
    Malformed,
}

/// Signing and verification keys derived from the shared secret.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Issue a signed token for a user, expiring in one hour.
    pub fn issue(&self, user_id: Uuid, email: String) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        let claims = Claims {
            sub: user_id,
            email,
            exp: now + TOKEN_TTL_SECS,
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a token and return its claims unchanged.
    ///
    /// Distinguishes the three rejection reasons so the gate can log them;
    /// all of them surface to the client as 401.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })
    }
}

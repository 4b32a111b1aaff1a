//! Bearer token issuing and verification.
//!
//! Tokens are HS256 JWTs carrying the user id, email and username. Expiry is checked on
//! every verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::server::{
    error::{auth::AuthError, internal::InternalError},
    model::user::User,
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    pub user_id: Uuid,
    pub email: String,
    pub username: String,
    /// Expiry as a Unix timestamp in seconds.
    pub exp: usize,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

#[derive(Clone)]
pub struct TokenService {
    keys: Arc<Keys>,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service signing with `secret`; tokens expire after `ttl`.
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
            ttl,
        }
    }

    /// Issues a signed token for `user`.
    pub fn issue(&self, user: &User) -> Result<String, InternalError> {
        let exp = (Utc::now() + self.ttl).timestamp().max(0) as usize;
        let claims = Claims {
            user_id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(InternalError::TokenEncoding)
    }

    /// Verifies signature and expiry of `token`.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expired means expired, no grace period
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.keys.decoding, &validation)?;

        Ok(data.claims)
    }
}

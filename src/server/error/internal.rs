use thiserror::Error;

/// Internal failures indicating unexpected behavior or misconfiguration.
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to hash or verify a password with bcrypt.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[source] bcrypt::BcryptError),

    /// Failure to sign a JWT.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to encode token: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),

    /// A role string stored in the database is not a known role.
    #[error("Unknown role '{0}' stored for user")]
    UnknownRole(String),
}

//! Authentication ports.

/// Claims carried by a verified bearer token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub username: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

/// Token service - stateless issuance and verification of bearer tokens.
///
/// Validity is determined purely by signature and expiry at verification
/// time; there is no server-side session state and no revocation.
pub trait TokenService: Send + Sync {
    /// Produce a signed token for the operator, expiring after the fixed
    /// token lifetime.
    fn issue(&self, username: &str) -> Result<String, AuthError>;

    /// Check signature integrity and expiry, returning the embedded claims.
    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password with a fresh salt.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingToken,

    #[error("Hashing error: {0}")]
    Hashing(String),
}

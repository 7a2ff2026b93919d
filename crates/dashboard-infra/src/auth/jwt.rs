//! JWT token service implementation.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use dashboard_core::ports::{AuthError, TokenClaims, TokenService};

/// Fixed bearer token lifetime: two hours from issuance.
const TOKEN_LIFETIME_SECS: i64 = 2 * 60 * 60;

/// Internal JWT claims structure for serialization.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// JWT-based token service (HS256, server-held secret).
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtTokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, username: &str) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: username.to_string(),
            iat: now,
            exp: now + TOKEN_LIFETIME_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    _ => AuthError::InvalidToken(e.to_string()),
                }
            })?;

        // jsonwebtoken still accepts exp == now even with zero leeway; the
        // expiry instant itself is already outside the token's lifetime.
        if Utc::now().timestamp() >= token_data.claims.exp {
            return Err(AuthError::TokenExpired);
        }

        Ok(TokenClaims {
            username: token_data.claims.sub,
            issued_at: token_data.claims.iat,
            expires_at: token_data.claims.exp,
        })
    }
}

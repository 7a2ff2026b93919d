//! Access guard - bearer token extraction and verification.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};
use std::sync::Arc;

use dashboard_core::ports::{TokenClaims, TokenService};

use crate::middleware::error::AppError;

/// Verified operator identity extractor.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.username)
/// }
/// ```
///
/// A missing or garbled `Authorization` header rejects with 401; a present
/// but invalid or expired token rejects with 403. The guard never touches
/// post data and never issues tokens.
#[derive(Debug, Clone)]
pub struct Identity {
    pub username: String,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            username: claims.username,
        }
    }
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_service = match req.app_data::<web::Data<Arc<dyn TokenService>>>() {
            Some(service) => service,
            None => {
                tracing::error!("TokenService not found in app data");
                return ready(Err(AppError::Internal(
                    "server configuration error".to_string(),
                )));
            }
        };

        // Extract the token segment of `Authorization: Bearer <token>`
        let token = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty());

        let token = match token {
            Some(t) => t,
            None => return ready(Err(AppError::MissingToken)),
        };

        match token_service.verify(token) {
            Ok(claims) => ready(Ok(Identity::from(claims))),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected bearer token");
                ready(Err(AppError::InvalidToken))
            }
        }
    }
}

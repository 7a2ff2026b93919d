//! Login handler.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use dashboard_core::ports::TokenService;
use dashboard_shared::dto::{LoginRequest, TokenResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/login
///
/// Bypasses the access guard: checks the supplied pair against the fixed
/// operator identity and issues a fresh bearer token. The response does not
/// distinguish an unknown username from a wrong password.
pub async fn login(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let valid = state.credentials.verify(&req.username, &req.password)?;
    if !valid {
        return Err(AppError::InvalidCredentials);
    }

    let token = token_service
        .issue(&req.username)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!(operator = %req.username, "Operator logged in");

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

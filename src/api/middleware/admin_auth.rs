//! Admin authentication middleware
//!
//! Guards the mutating station endpoints. The extractor runs before the
//! handler body, so a denied request never reaches the registry and leaves
//! its state unchanged. Read endpoints simply do not use the extractor.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// Extractor that requires a valid admin token
///
/// Extracts the credential from the Authorization header:
/// `Bearer <admin_token>`. Missing, malformed and wrong tokens are all
/// rejected the same way, with 401.
#[derive(Debug, Clone)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        if !state.admin_verifier.verify(&token) {
            debug!("Rejected mutating request with invalid admin token");
            return Err(ApiError::unauthorized("Invalid admin token"));
        }

        Ok(RequireAdmin)
    }
}

/// Extract the bearer token from the Authorization header
fn extract_bearer_token(headers: &axum::http::HeaderMap) -> Result<String, ApiError> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        // A credential that cannot even be decoded is malformed, which lands
        // in the same deny branch as a wrong token.
        let auth_str = auth_header
            .to_str()
            .map_err(|_| ApiError::unauthorized("Invalid Authorization header encoding"))?;

        if let Some(token) = auth_str.strip_prefix("Bearer ") {
            return Ok(token.trim().to_string());
        }
    }

    Err(ApiError::unauthorized(
        "Admin token required. Provide via 'Authorization: Bearer <token>' header",
    ))
}

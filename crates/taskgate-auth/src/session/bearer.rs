//! Authorization header parsing.

use taskgate_core::error::AppError;
use taskgate_core::result::AppResult;

const BEARER_PREFIX: &str = "Bearer ";

/// Extracts the token from a `Bearer <token>` header value.
pub fn extract_bearer(header: Option<&str>) -> AppResult<&str> {
    let value = header.ok_or_else(|| AppError::invalid_token("Missing authorization header"))?;
    let token = value
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .ok_or_else(|| AppError::invalid_token("Authorization header is not a bearer token"))?;

    if token.is_empty() {
        return Err(AppError::invalid_token("Empty bearer token"));
    }
    Ok(token)
}

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::{
    body::Body,
    extract::State,
    http::{Request, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::AppState;
use crate::auth::{Claims, Permission};
use crate::error::{ApiError, ErrorCode};

/// JWT authentication middleware.
///
/// Verified claims are stored in the request extensions. With security
/// disabled every request runs as [`Claims::unrestricted`].
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    if !state.config.security_enabled {
        request.extensions_mut().insert(Claims::unrestricted());
        return Ok(next.run(request).await);
    }

    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            ApiError::with_code(
                ErrorCode::TokenMissing,
                "Missing or invalid Authorization header",
            )
        })?;

    let claims = state.jwt_service.decode_token(token)?;
    debug!(user = %claims.sub, roles = ?claims.roles, "Request authenticated");

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Extractor for authenticated user claims
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Claims);

impl AuthenticatedUser {
    /// Fail with 403 unless one of the user's roles grants `permission`
    pub fn require(&self, permission: &Permission) -> Result<(), ApiError> {
        if self.0.has_permission(permission) {
            return Ok(());
        }
        Err(ApiError::Forbidden(format!(
            "Access denied. Missing permission: {}",
            permission
        )))
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized("No authentication found".to_string()))?;

        Ok(AuthenticatedUser(claims))
    }
}

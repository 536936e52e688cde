//! Authorization checks applied in front of handler groups.

use axum::{
    extract::{Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::auth::{AuthenticatedUser, Permission};
use crate::error::ApiError;

/// Action a request performs on a resource, by HTTP method
pub fn action_for(method: &Method) -> &'static str {
    match *method {
        Method::GET | Method::HEAD => "read",
        Method::POST => "create",
        Method::PUT | Method::PATCH => "update",
        Method::DELETE => "delete",
        _ => "other",
    }
}

/// Route layer requiring `<resource>:<action>` for the authenticated user.
/// Runs before body extraction, so a forbidden request is never validated.
pub async fn require_resource_access(
    State(resource): State<&'static str>,
    user: AuthenticatedUser,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let permission = Permission::new(resource, action_for(request.method()));
    user.require(&permission)?;
    Ok(next.run(request).await)
}

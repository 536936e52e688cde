//! Extractors that turn rejections into structured [`ApiError`]s.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::dto::ValidateFields;
use crate::error::{ApiError, ErrorCode, handle_rejection};

/// Path parameters; a value that does not parse is a 400.
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| ApiPath(value))
            .map_err(|rejection| {
                ApiError::with_details(
                    ErrorCode::InvalidFormat,
                    "Invalid path parameter",
                    rejection.body_text(),
                )
            })
    }
}

/// JSON body that has passed every field rule.
///
/// Parsing and validation both finish before the handler runs, so a body
/// that breaks a rule never reaches the clinic service.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + ValidateFields,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(handle_rejection)?;
        value.validate_fields()?;
        Ok(ValidJson(value))
    }
}

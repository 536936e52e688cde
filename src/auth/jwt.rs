use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use tracing::debug;

use super::{Claims, Role};
use crate::constants::auth::JWT_ISSUER;
use crate::error::{ApiError, ErrorCode, Result};

/// Issues and verifies HS256 bearer tokens.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration_secs: i64,
}

impl JwtService {
    pub fn new(secret: &str, expiration_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiration_secs,
        }
    }

    pub fn generate_token(&self, subject: &str, roles: &[Role]) -> Result<String> {
        let claims = Claims::new(subject, roles, self.expiration_secs);
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ApiError::Internal(format!("Failed to sign token: {}", e)))
    }

    pub fn decode_token(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!(error = %e, "Rejected bearer token");
                match e.kind() {
                    ErrorKind::ExpiredSignature => ApiError::token_expired(),
                    _ => ApiError::with_code(ErrorCode::TokenInvalid, "Invalid or expired token"),
                }
            })
    }
}

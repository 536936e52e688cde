//! Application constants and configuration values.
//!
//! This module centralizes hardcoded values and field limits so handlers,
//! validation and documentation agree on them.

/// API constants
pub mod api {
    /// Request id header set by the request logger
    pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

    /// Location of the generated OpenAPI document
    pub const OPENAPI_PATH: &str = "/api/docs/openapi.json";
}

/// Authentication and security constants
pub mod auth {
    /// Default JWT expiration in seconds
    pub const JWT_EXPIRATION_SECS: i64 = 86_400;

    /// Issuer written into and required from every token
    pub const JWT_ISSUER: &str = "petclinic-api";

    /// Minimum accepted HMAC secret length
    pub const MIN_SECRET_LENGTH: usize = 32;
}

/// Pet field limits
///
/// Weight is stored as DECIMAL(5,2): three integer digits, two fraction digits.
pub mod pet {
    /// Scale shared by the weight bounds below
    pub const WEIGHT_SCALE: u32 = 2;

    /// Smallest accepted weight (0.00), inclusive
    pub const MIN_WEIGHT_MANTISSA: i64 = 0;

    /// Largest accepted weight (999.99), inclusive
    pub const MAX_WEIGHT_MANTISSA: i64 = 99_999;

    /// Maximum integer digits of a weight
    pub const WEIGHT_INTEGER_DIGITS: u32 = 3;

    /// Maximum fraction digits of a weight
    pub const WEIGHT_FRACTION_DIGITS: u32 = 2;

    /// Maximum pet name length
    pub const MAX_NAME_LENGTH: u64 = 30;

    /// Maximum pet type name length
    pub const MAX_TYPE_NAME_LENGTH: u64 = 80;
}

/// HTTP constants
pub mod http {
    /// Default request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Default listening port
    pub const DEFAULT_PORT: u16 = 9966;
}

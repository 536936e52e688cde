use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod jwt;
pub mod middleware;
pub mod roles;

pub use jwt::JwtService;
pub use middleware::{AuthenticatedUser, auth_middleware};
pub use roles::{Permission, Role};

use crate::constants::auth::JWT_ISSUER;

/// Claims carried by clinic bearer tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub sub: String,        // Subject (user name)
    pub roles: Vec<String>, // Granted roles, e.g. "OWNER_ADMIN"
    pub exp: i64,           // Expiration time
    pub iat: i64,           // Issued at
    pub iss: String,        // Issuer
}

impl Claims {
    pub fn new(subject: impl Into<String>, roles: &[Role], ttl_secs: i64) -> Self {
        let now = Utc::now();
        let exp = now + chrono::Duration::seconds(ttl_secs);

        Self {
            sub: subject.into(),
            roles: roles.iter().map(ToString::to_string).collect(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
        }
    }

    /// Principal used when security is switched off: every role, no expiry check
    pub fn unrestricted() -> Self {
        Self::new("anonymous", &Role::all(), 0)
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Roles that parse; unknown role names are ignored
    pub fn parsed_roles(&self) -> Vec<Role> {
        self.roles.iter().filter_map(|r| r.parse().ok()).collect()
    }

    pub fn has_role(&self, required: Role) -> bool {
        self.parsed_roles().contains(&required)
    }

    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.parsed_roles()
            .iter()
            .any(|role| role.has_permission(permission))
    }
}

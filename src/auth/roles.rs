//! Role-based access control (RBAC) module.
//!
//! Clinic roles map to "resource:action" permissions; handlers ask for a
//! permission rather than a role.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Permission represents a specific action on a resource.
/// Format: "resource:action" (e.g., "pets:read", "owners:update")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission(String);

impl Permission {
    pub fn new(resource: &str, action: &str) -> Self {
        Self(format!("{}:{}", resource, action))
    }

    pub fn resource(&self) -> &str {
        self.0.split(':').next().unwrap_or("")
    }

    pub fn action(&self) -> &str {
        self.0.split(':').nth(1).unwrap_or("")
    }

    pub fn is_wildcard(&self) -> bool {
        self.0.ends_with(":*")
    }

    /// Check if this permission grants access to the requested permission
    pub fn grants(&self, requested: &Permission) -> bool {
        if self.0 == requested.0 {
            return true;
        }

        self.is_wildcard() && self.resource() == requested.resource()
    }
}

impl From<&str> for Permission {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Clinic staff roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Manages owners and their pets
    OwnerAdmin,
    /// Manages vets, specialties and pet types
    VetAdmin,
    /// Manages user accounts
    Admin,
}

impl Role {
    pub fn all() -> [Role; 3] {
        [Role::OwnerAdmin, Role::VetAdmin, Role::Admin]
    }

    /// Get all permissions for this role
    pub fn permissions(&self) -> HashSet<Permission> {
        let granted: &[&str] = match self {
            Role::OwnerAdmin => &["owners:*", "pets:*", "visits:*", "pettypes:read"],
            Role::VetAdmin => &["vets:*", "specialties:*", "pettypes:*"],
            Role::Admin => &["users:*"],
        };
        granted.iter().copied().map(Permission::from).collect()
    }

    /// Check if role has a specific permission
    pub fn has_permission(&self, permission: &Permission) -> bool {
        self.permissions().iter().any(|p| p.grants(permission))
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    /// Accepts `OWNER_ADMIN` as well as the prefixed `ROLE_OWNER_ADMIN`,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        match upper.strip_prefix("ROLE_").unwrap_or(&upper) {
            "OWNER_ADMIN" => Ok(Role::OwnerAdmin),
            "VET_ADMIN" => Ok(Role::VetAdmin),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(RoleParseError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::OwnerAdmin => "OWNER_ADMIN",
            Role::VetAdmin => "VET_ADMIN",
            Role::Admin => "ADMIN",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug)]
pub struct RoleParseError(String);

impl std::fmt::Display for RoleParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid role: {}", self.0)
    }
}

impl std::error::Error for RoleParseError {}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access tier controlling which dashboard sections a user can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
    Manager,
    Viewer,
}

/// A role string that is not one of the known tiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role `{0}`")]
pub struct UnknownRole(pub String);

impl Role {
    /// Role assumed when the session carries none.
    pub const DEFAULT: Role = Role::User;

    /// Canonical upper-case code, as sent over the wire.
    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
            Role::Manager => "MANAGER",
            Role::Viewer => "VIEWER",
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::User => "User",
            Role::Manager => "Manager",
            Role::Viewer => "Viewer",
        }
    }

    /// Every tier, in the order the menu catalog lists them.
    pub const ALL: &'static [Role] = &[Role::Admin, Role::User, Role::Manager, Role::Viewer];

    pub fn all() -> Vec<Role> {
        Self::ALL.to_vec()
    }

    /// Parse a code case-insensitively. The code must match exactly
    /// otherwise, padding included.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "ADMIN" => Some(Role::Admin),
            "USER" => Some(Role::User),
            "MANAGER" => Some(Role::Manager),
            "VIEWER" => Some(Role::Viewer),
            _ => None,
        }
    }

    /// Resolve the role of a session.
    ///
    /// A missing or empty value falls back to [`Role::DEFAULT`]; anything
    /// else that is not a known code, whitespace included, is an error.
    pub fn normalize(raw: Option<&str>) -> Result<Self, UnknownRole> {
        match raw.filter(|s| !s.is_empty()) {
            None => Ok(Self::DEFAULT),
            Some(code) => Self::from_code(code).ok_or_else(|| UnknownRole(code.to_string())),
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

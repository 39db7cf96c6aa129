//! Explicit caller identity for query calls
//!
//! The engine holds no ambient session state: every list/export call takes
//! a [`Caller`] describing who is asking, and contact details are masked
//! for callers below operator level.

use axum::http::HeaderMap;

/// Request header naming the caller's role.
pub const ROLE_HEADER: &str = "x-requester-role";

/// Caller role, ordered from most to least privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Admin,
    Operator,
    #[default]
    Viewer,
}

impl Role {
    /// Parse a role name. Unknown or empty values read as `Viewer`.
    pub fn parse_role(value: &str) -> Role {
        match value.to_lowercase().as_str() {
            "admin" => Role::Admin,
            "operator" => Role::Operator,
            _ => Role::Viewer,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Operator => "operator",
            Role::Viewer => "viewer",
        }
    }
}

/// The identity a query is executed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Caller {
    pub role: Role,
}

impl Caller {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    pub fn admin() -> Self {
        Self::new(Role::Admin)
    }

    pub fn operator() -> Self {
        Self::new(Role::Operator)
    }

    pub fn viewer() -> Self {
        Self::new(Role::Viewer)
    }

    /// Resolve the caller from request headers; absent header means viewer.
    pub fn from_headers(headers: &HeaderMap) -> Caller {
        let role = headers
            .get(ROLE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(Role::parse_role)
            .unwrap_or_default();
        Caller::new(role)
    }

    /// Whether this caller may see unmasked contact details.
    pub fn can_view_contacts(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Operator)
    }
}

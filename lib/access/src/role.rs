//! Role types for platform access control.
//!
//! Every authenticated actor carries exactly one role, issued at login and
//! embedded in the session token. Route restrictions are expressed as sets
//! of permitted roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role claimed by an authenticated actor.
///
/// Roles are serialized lowercase and parsed case-insensitively, so a
/// token minted with `"Admin"` and a policy written with `"admin"` can
/// never silently fail to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Platform administrator with full back-office access.
    Admin,
    /// Consulting dermatologist with access to the doctor panel.
    Doctor,
    /// Store staff handling order fulfilment.
    Staff,
    /// Regular shopper.
    Customer,
}

impl Role {
    /// Returns the canonical lowercase identifier for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Doctor => "doctor",
            Self::Staff => "staff",
            Self::Customer => "customer",
        }
    }

    /// Returns true if this role grants access to any back-office panel.
    #[must_use]
    pub fn is_back_office(&self) -> bool {
        matches!(self, Self::Admin | Self::Doctor | Self::Staff)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a role from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError {
    /// The string that failed to parse.
    pub value: String,
}

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: '{}'", self.value)
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "doctor" => Ok(Self::Doctor),
            "staff" => Ok(Self::Staff),
            "customer" => Ok(Self::Customer),
            _ => Err(ParseRoleError {
                value: s.to_string(),
            }),
        }
    }
}

/// Set of roles permitted to access a restricted resource.
///
/// Order-preserving and duplicate-free; an empty set permits nobody.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet {
    roles: Vec<Role>,
}

impl RoleSet {
    /// Creates an empty role set (permits nobody).
    #[must_use]
    pub fn none() -> Self {
        Self { roles: Vec::new() }
    }

    /// Creates a role set from a list of roles, dropping duplicates.
    #[must_use]
    pub fn of(roles: &[Role]) -> Self {
        let mut set = Self::none();
        for role in roles {
            if !set.roles.contains(role) {
                set.roles.push(*role);
            }
        }
        set
    }

    /// Creates a role set permitting any authenticated actor.
    #[must_use]
    pub fn any_authenticated() -> Self {
        Self::of(&[Role::Admin, Role::Doctor, Role::Staff, Role::Customer])
    }

    /// Returns true if the given role is a member of the set.
    #[must_use]
    pub fn contains(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Returns true if the set permits nobody.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Returns the roles as a slice.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }
}

impl Default for RoleSet {
    fn default() -> Self {
        Self::none()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        let mut set = Self::none();
        for role in iter {
            if !set.roles.contains(&role) {
                set.roles.push(role);
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        for role in [Role::Admin, Role::Doctor, Role::Staff, Role::Customer] {
            let parsed: Role = role.as_str().parse().expect("should parse");
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Admin".parse::<Role>().expect("parse"), Role::Admin);
        assert_eq!("ADMIN".parse::<Role>().expect("parse"), Role::Admin);
        assert_eq!("DoCtOr".parse::<Role>().expect("parse"), Role::Doctor);
    }

    #[test]
    fn unknown_role_fails_to_parse() {
        let err = "superuser".parse::<Role>().unwrap_err();
        assert_eq!(err.value, "superuser");
    }

    #[test]
    fn role_serialization_format() {
        let json = serde_json::to_string(&Role::Admin).expect("serialize");
        assert_eq!(json, "\"admin\"");

        let json = serde_json::to_string(&Role::Customer).expect("serialize");
        assert_eq!(json, "\"customer\"");
    }

    #[test]
    fn back_office_roles() {
        assert!(Role::Admin.is_back_office());
        assert!(Role::Doctor.is_back_office());
        assert!(Role::Staff.is_back_office());
        assert!(!Role::Customer.is_back_office());
    }

    #[test]
    fn empty_role_set_permits_nobody() {
        let set = RoleSet::none();
        assert!(set.is_empty());
        assert!(!set.contains(Role::Admin));
    }

    #[test]
    fn role_set_membership() {
        let set = RoleSet::of(&[Role::Admin, Role::Staff]);
        assert!(set.contains(Role::Admin));
        assert!(set.contains(Role::Staff));
        assert!(!set.contains(Role::Doctor));
        assert!(!set.contains(Role::Customer));
    }

    #[test]
    fn role_set_drops_duplicates() {
        let set = RoleSet::of(&[Role::Admin, Role::Admin, Role::Staff]);
        assert_eq!(set.roles(), &[Role::Admin, Role::Staff]);
    }

    #[test]
    fn any_authenticated_contains_every_role() {
        let set = RoleSet::any_authenticated();
        for role in [Role::Admin, Role::Doctor, Role::Staff, Role::Customer] {
            assert!(set.contains(role));
        }
    }

    #[test]
    fn role_set_serialization_roundtrip() {
        let set = RoleSet::of(&[Role::Doctor, Role::Admin]);
        let json = serde_json::to_string(&set).expect("serialize");
        let parsed: RoleSet = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(set, parsed);
    }
}

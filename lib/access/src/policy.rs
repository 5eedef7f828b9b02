//! Static route authorization policy.
//!
//! The policy is a fixed, ordered list of (path prefix, permitted roles)
//! entries, loaded once at process start and never mutated at runtime.
//! Resolution picks the longest registered prefix that is a prefix of the
//! request path; ties break in favor of the first-registered entry. Paths
//! matching no entry fall back to the configured default access.

use serde::{Deserialize, Serialize};

use crate::role::RoleSet;

/// Access applied to paths that match no registered prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultAccess {
    /// Unmatched paths are unrestricted.
    Open,
    /// Unmatched paths are denied to everyone.
    Deny,
}

/// A single (prefix, permitted roles) policy entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyEntry {
    prefix: String,
    allowed: RoleSet,
}

impl PolicyEntry {
    /// Returns the path prefix this entry restricts.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the roles permitted under this prefix.
    #[must_use]
    pub fn allowed(&self) -> &RoleSet {
        &self.allowed
    }
}

/// Result of resolving a path against the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access<'a> {
    /// No restriction applies; no session is required.
    Unrestricted,
    /// Only the given roles may pass.
    Restricted(&'a RoleSet),
}

/// The route authorization policy table.
#[derive(Debug, Clone)]
pub struct RoutePolicy {
    entries: Vec<PolicyEntry>,
    default_access: DefaultAccess,
    // Returned for unmatched paths under default-deny; permits nobody.
    deny_all: RoleSet,
}

impl RoutePolicy {
    /// Creates an empty policy with the given default for unmatched paths.
    #[must_use]
    pub fn new(default_access: DefaultAccess) -> Self {
        Self {
            entries: Vec::new(),
            default_access,
            deny_all: RoleSet::none(),
        }
    }

    /// Registers a restricted prefix. Registration order is significant:
    /// among equally-long matching prefixes, the first registered wins.
    #[must_use]
    pub fn restrict(mut self, prefix: impl Into<String>, allowed: RoleSet) -> Self {
        self.entries.push(PolicyEntry {
            prefix: prefix.into(),
            allowed,
        });
        self
    }

    /// Returns the registered entries in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[PolicyEntry] {
        &self.entries
    }

    /// Returns the default applied to unmatched paths.
    #[must_use]
    pub fn default_access(&self) -> DefaultAccess {
        self.default_access
    }

    /// Resolves the access restriction for a request path.
    ///
    /// Longest matching prefix wins; ties break by declaration order.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Access<'_> {
        let mut best: Option<&PolicyEntry> = None;
        for entry in &self.entries {
            if !path.starts_with(&entry.prefix) {
                continue;
            }
            match best {
                // Strictly-longer prefixes win; equal length keeps the
                // earlier registration.
                Some(current) if entry.prefix.len() <= current.prefix.len() => {}
                _ => best = Some(entry),
            }
        }

        match best {
            Some(entry) => Access::Restricted(&entry.allowed),
            None => match self.default_access {
                DefaultAccess::Open => Access::Unrestricted,
                DefaultAccess::Deny => Access::Restricted(&self.deny_all),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::Role;

    fn policy() -> RoutePolicy {
        RoutePolicy::new(DefaultAccess::Open)
            .restrict("/admin", RoleSet::of(&[Role::Admin]))
            .restrict("/admin/orders", RoleSet::of(&[Role::Admin, Role::Staff]))
            .restrict("/doctor", RoleSet::of(&[Role::Doctor, Role::Admin]))
    }

    #[test]
    fn unmatched_path_is_unrestricted_by_default() {
        assert_eq!(policy().resolve("/products/123"), Access::Unrestricted);
        assert_eq!(policy().resolve("/"), Access::Unrestricted);
    }

    #[test]
    fn matching_prefix_restricts() {
        let policy = policy();
        match policy.resolve("/admin/reports") {
            Access::Restricted(allowed) => {
                assert!(allowed.contains(Role::Admin));
                assert!(!allowed.contains(Role::Staff));
            }
            Access::Unrestricted => panic!("expected restriction"),
        }
    }

    #[test]
    fn longest_prefix_wins() {
        let policy = policy();
        match policy.resolve("/admin/orders/42") {
            Access::Restricted(allowed) => {
                // The more specific /admin/orders entry applies.
                assert!(allowed.contains(Role::Staff));
            }
            Access::Unrestricted => panic!("expected restriction"),
        }
    }

    #[test]
    fn equal_length_tie_keeps_first_registration() {
        let policy = RoutePolicy::new(DefaultAccess::Open)
            .restrict("/panel", RoleSet::of(&[Role::Staff]))
            .restrict("/panel", RoleSet::of(&[Role::Doctor]));

        match policy.resolve("/panel/today") {
            Access::Restricted(allowed) => {
                assert!(allowed.contains(Role::Staff));
                assert!(!allowed.contains(Role::Doctor));
            }
            Access::Unrestricted => panic!("expected restriction"),
        }
    }

    #[test]
    fn default_deny_restricts_unmatched_paths_to_nobody() {
        let policy = RoutePolicy::new(DefaultAccess::Deny);
        match policy.resolve("/anything") {
            Access::Restricted(allowed) => assert!(allowed.is_empty()),
            Access::Unrestricted => panic!("expected restriction"),
        }
    }

    #[test]
    fn registered_entries_preserve_order() {
        let policy = policy();
        let prefixes: Vec<&str> = policy.entries().iter().map(|e| e.prefix()).collect();
        assert_eq!(prefixes, vec!["/admin", "/admin/orders", "/doctor"]);
    }
}

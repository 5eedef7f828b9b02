//! Typed identifiers for domain entities.
//!
//! Every ID wraps a ULID and renders with a short type prefix
//! (`usr_...`, `ord_...`), so a misplaced identifier is caught at the
//! type level instead of deep inside an API call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Error returned when an ID string does not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// Name of the ID type being parsed.
    pub id_type: &'static str,
    /// Underlying ULID parse failure.
    pub reason: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.id_type, self.reason)
    }
}

impl std::error::Error for ParseIdError {}

/// Defines a ULID-backed ID type with a display prefix.
///
/// The wire format is the bare ULID (`#[serde(transparent)]`); the
/// prefix only appears in `Display` output and is optional on parse.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Ulid);

        impl $name {
            /// Generates a fresh random ID.
            #[must_use]
            pub fn new() -> Self {
                Self(Ulid::new())
            }

            /// Wraps an existing ULID.
            #[must_use]
            pub const fn from_ulid(ulid: Ulid) -> Self {
                Self(ulid)
            }

            /// Returns the raw ULID.
            #[must_use]
            pub const fn as_ulid(&self) -> Ulid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .strip_prefix(concat!($prefix, "_"))
                    .unwrap_or(s);
                Ulid::from_str(raw).map(Self).map_err(|e| ParseIdError {
                    id_type: stringify!($name),
                    reason: e.to_string(),
                })
            }
        }

        impl From<Ulid> for $name {
            fn from(ulid: Ulid) -> Self {
                Self(ulid)
            }
        }

        impl From<$name> for Ulid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Unique identifier for a user account.
    UserId,
    "usr"
);

define_id!(
    /// Unique identifier for a catalog product.
    ProductId,
    "prd"
);

define_id!(
    /// Unique identifier for a customer order.
    OrderId,
    "ord"
);

define_id!(
    /// Unique identifier for a blog post.
    BlogPostId,
    "post"
);

define_id!(
    /// Unique identifier for a consultation request.
    ConsultationId,
    "cons"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_prefix() {
        assert!(UserId::new().to_string().starts_with("usr_"));
        assert!(ProductId::new().to_string().starts_with("prd_"));
        assert!(ConsultationId::new().to_string().starts_with("cons_"));
    }

    #[test]
    fn parse_with_prefix() {
        let id = OrderId::new();
        let parsed: OrderId = id.to_string().parse().expect("should parse");
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_without_prefix() {
        let ulid = Ulid::new();
        let id: ProductId = ulid.to_string().parse().expect("should parse");
        assert_eq!(id.as_ulid(), ulid);
    }

    #[test]
    fn parse_garbage_names_the_type() {
        let err = "not_a_ulid".parse::<ProductId>().unwrap_err();
        assert_eq!(err.id_type, "ProductId");
    }

    #[test]
    fn equality_and_hashing_follow_the_ulid() {
        use std::collections::HashSet;

        let ulid = Ulid::new();
        assert_eq!(UserId::from_ulid(ulid), UserId::from_ulid(ulid));

        let mut set = HashSet::new();
        let id = OrderId::new();
        set.insert(id);
        set.insert(OrderId::new());
        set.insert(id); // duplicate
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serde_uses_bare_ulid() {
        let id = BlogPostId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, format!("\"{}\"", id.as_ulid()));
        let parsed: BlogPostId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(id, parsed);
    }
}

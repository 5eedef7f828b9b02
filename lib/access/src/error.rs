//! Error taxonomy for the authorization and session layer.
//!
//! At the boundary exposed to the gate and guards every one of these
//! collapses into exactly two outcomes, allow or deny; the specific
//! variant is used only for logging and diagnostics. A fetch failure is
//! treated identically to an absent session: a network error never
//! grants access.

use std::fmt;

use crate::token::DecodeError;

/// Why an access check did not produce a usable session or an allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessError {
    /// The presented token is structurally invalid or fails verification.
    TokenMalformed,
    /// The presented token is past its expiry.
    TokenExpired,
    /// No credential was presented at all.
    NoSession,
    /// The token decoded but carries no recognizable role claim.
    RoleMissing,
    /// The session's role is not in the permitted set for the resource.
    RoleNotAllowed,
    /// The client-side session fetch failed; treated as unauthenticated.
    SessionFetchFailed,
}

impl AccessError {
    /// Short label for structured log fields.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::TokenMalformed => "token_malformed",
            Self::TokenExpired => "token_expired",
            Self::NoSession => "no_session",
            Self::RoleMissing => "role_missing",
            Self::RoleNotAllowed => "role_not_allowed",
            Self::SessionFetchFailed => "session_fetch_failed",
        }
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenMalformed => write!(f, "session token is malformed"),
            Self::TokenExpired => write!(f, "session token has expired"),
            Self::NoSession => write!(f, "no session credential presented"),
            Self::RoleMissing => write!(f, "session carries no role claim"),
            Self::RoleNotAllowed => write!(f, "role is not permitted for this resource"),
            Self::SessionFetchFailed => write!(f, "session fetch failed"),
        }
    }
}

impl std::error::Error for AccessError {}

impl From<DecodeError> for AccessError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Malformed => Self::TokenMalformed,
            DecodeError::Expired => Self::TokenExpired,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_labels_are_stable() {
        assert_eq!(AccessError::NoSession.reason(), "no_session");
        assert_eq!(AccessError::RoleNotAllowed.reason(), "role_not_allowed");
        assert_eq!(AccessError::SessionFetchFailed.reason(), "session_fetch_failed");
    }

    #[test]
    fn decode_errors_map_onto_access_errors() {
        assert_eq!(
            AccessError::from(DecodeError::Malformed),
            AccessError::TokenMalformed
        );
        assert_eq!(
            AccessError::from(DecodeError::Expired),
            AccessError::TokenExpired
        );
    }

    #[test]
    fn display_never_mentions_resource_existence() {
        // Denial messages are for logs only, but keep them free of any
        // hint about which resource was requested.
        for err in [
            AccessError::TokenMalformed,
            AccessError::TokenExpired,
            AccessError::NoSession,
            AccessError::RoleMissing,
            AccessError::RoleNotAllowed,
            AccessError::SessionFetchFailed,
        ] {
            let text = err.to_string();
            assert!(!text.contains('/'));
        }
    }
}

//! Domain error types for server operations.
//!
//! Internal variants carry detail for logs; `into_server_error` converts
//! them to the user-safe messages that cross the server-function boundary.

use leptos::server_fn::error::ServerFnError;
use std::fmt;

/// Session-related errors.
#[derive(Debug)]
pub enum SessionError {
    /// No session cookie was presented.
    NotAuthenticated,
    /// The session token failed to decode or verify.
    InvalidToken { reason: String },
    /// The session token has expired.
    Expired,
    /// The session's role is not permitted for this operation.
    RoleDenied { role: String },
    /// Failed to extract request parts.
    Internal { details: String },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAuthenticated => write!(f, "not authenticated"),
            Self::InvalidToken { reason } => {
                write!(f, "invalid session token: {}", reason)
            }
            Self::Expired => write!(f, "session has expired"),
            Self::RoleDenied { role } => {
                write!(f, "role '{}' is not permitted", role)
            }
            Self::Internal { details } => {
                write!(f, "session extraction error: {}", details)
            }
        }
    }
}

impl std::error::Error for SessionError {}

impl SessionError {
    /// Convert to a user-safe ServerFnError.
    ///
    /// Role denials deliberately read the same as a missing resource so
    /// callers cannot probe which operations exist for other roles.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            SessionError::NotAuthenticated
            | SessionError::InvalidToken { .. }
            | SessionError::Expired => ServerFnError::new("Not authenticated"),
            SessionError::RoleDenied { .. } => ServerFnError::new("Not found"),
            SessionError::Internal { .. } => ServerFnError::new("Internal server error"),
        }
    }
}

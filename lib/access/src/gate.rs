//! Server-side request gate.
//!
//! Runs once per request, before page rendering: resolve the policy for
//! the request path, then check the decoded session claims against it.
//! Unrestricted paths forward without requiring a session. The gate is
//! stateless across requests and performs no I/O; the caller supplies the
//! already-decoded claims (or their absence).

use crate::error::AccessError;
use crate::policy::{Access, RoutePolicy};
use crate::token::Claims;

/// Terminal outcome of gating one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Pass the request through unchanged.
    Forward,
    /// Reject the request. The reason is for diagnostics only; callers
    /// must signal a rejection indistinguishable from "not found".
    Deny(AccessError),
}

impl GateOutcome {
    /// Returns true if the request may proceed.
    #[must_use]
    pub fn is_forward(&self) -> bool {
        matches!(self, Self::Forward)
    }
}

/// Evaluates the gate for one request.
///
/// `claims` is the decoded session token, or `None` when no credential was
/// presented or the token failed to decode; callers log the decode failure
/// themselves, the gate only distinguishes presence from absence.
#[must_use]
pub fn evaluate(policy: &RoutePolicy, path: &str, claims: Option<&Claims>) -> GateOutcome {
    match policy.resolve(path) {
        Access::Unrestricted => GateOutcome::Forward,
        Access::Restricted(allowed) => match claims {
            None => {
                tracing::debug!(path, reason = AccessError::NoSession.reason(), "gate denied");
                GateOutcome::Deny(AccessError::NoSession)
            }
            Some(claims) if allowed.contains(claims.role) => GateOutcome::Forward,
            Some(claims) => {
                tracing::debug!(
                    path,
                    role = %claims.role,
                    reason = AccessError::RoleNotAllowed.reason(),
                    "gate denied"
                );
                GateOutcome::Deny(AccessError::RoleNotAllowed)
            }
        },
    }
}

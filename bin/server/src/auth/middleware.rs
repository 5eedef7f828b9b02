//! Request gate middleware for Axum.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use lumera_access::gate::{self, GateOutcome};
use lumera_access::token::{Claims, TokenCodec};
use std::sync::Arc;

use super::AppState;

/// Session cookie name.
pub const SESSION_COOKIE: &str = "session";

/// Decodes the session cookie into claims, if a valid one is present.
///
/// A missing, malformed, or expired cookie all yield `None`; the reason
/// goes to the logs and nowhere else.
pub fn session_claims(codec: &TokenCodec, jar: &CookieJar) -> Option<Claims> {
    let cookie = jar.get(SESSION_COOKIE)?;
    match codec.decode(cookie.value()) {
        Ok(claims) => Some(claims),
        Err(err) => {
            tracing::debug!(reason = %err, "Rejected session cookie");
            None
        }
    }
}

/// Paths the gate never evaluates: static assets, server-function
/// endpoints, and the credential flow itself. A deny-by-default policy
/// must not lock out the routes used to sign in.
fn bypasses_gate(path: &str) -> bool {
    path.starts_with("/pkg/")
        || path.starts_with("/api/")
        || path.starts_with("/auth/")
        || path == "/login"
        || path == "/register"
}

/// Gates every page request against the route policy table.
///
/// Denials return a plain 404, indistinguishable from a path that does
/// not exist. Asset and server-function endpoints are passed through;
/// server functions enforce their own role checks.
pub async fn route_gate(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();
    if bypasses_gate(path) {
        return next.run(request).await;
    }

    let claims = session_claims(&state.codec, &jar);
    match gate::evaluate(&state.policy, path, claims.as_ref()) {
        GateOutcome::Forward => next.run(request).await,
        GateOutcome::Deny(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::route_policy;

    #[test]
    fn sign_in_flow_bypasses_the_gate() {
        assert!(bypasses_gate("/auth/login"));
        assert!(bypasses_gate("/auth/register"));
        assert!(bypasses_gate("/auth/logout"));
        assert!(bypasses_gate("/login"));
        assert!(bypasses_gate("/register"));
    }

    #[test]
    fn pages_and_assets_outside_the_exemptions_are_gated() {
        assert!(!bypasses_gate("/"));
        assert!(!bypasses_gate("/admin"));
        assert!(!bypasses_gate("/account"));
        assert!(!bypasses_gate("/logins"));
    }

    #[test]
    fn login_stays_reachable_under_default_deny() {
        let policy = route_policy(true);
        // The deny-by-default policy rejects the unmatched sign-in paths;
        // only the gate exemption keeps authentication possible.
        assert!(!gate::evaluate(&policy, "/login", None).is_forward());
        assert!(bypasses_gate("/login"));
        assert!(bypasses_gate("/auth/login"));
    }
}

//! Authentication module for the Lumera server.
//!
//! This module provides:
//! - Credential login against the upstream API
//! - Signed-token session cookies
//! - The request gate middleware for Axum routes
//!
//! # Authorization Model
//!
//! The upstream API authenticates credentials and issues a signed token
//! carrying the user's single role (admin, doctor, staff, or customer).
//! That token becomes the session cookie verbatim; this server validates
//! it with a shared secret and never stores session state of its own.
//!
//! Role changes take effect on next login (or token expiry). Stateless
//! tokens cannot be revoked early, so the session duration stays short
//! enough to bound the revocation latency.
//!
//! Route-level authorization is a static prefix table built at startup;
//! the [`middleware::route_gate`] layer consults it on every request.

pub mod middleware;
pub mod routes;

pub use routes::{login, logout, register};

use crate::api::ApiClient;
use crate::config::SessionConfig;
use lumera_access::policy::{DefaultAccess, RoutePolicy};
use lumera_access::role::{Role, RoleSet};
use lumera_access::token::TokenCodec;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    /// Client for the upstream commerce API.
    pub api: Arc<ApiClient>,
    /// Codec for session tokens.
    pub codec: Arc<TokenCodec>,
    /// Static route policy table.
    pub policy: RoutePolicy,
    /// Session configuration.
    pub session_config: SessionConfig,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        api: Arc<ApiClient>,
        codec: Arc<TokenCodec>,
        policy: RoutePolicy,
        session_config: SessionConfig,
    ) -> Self {
        Self {
            api,
            codec,
            policy,
            session_config,
        }
    }
}

/// Builds the route policy table.
///
/// Entries are matched longest-prefix-first; `/account` and `/checkout`
/// admit any authenticated role, the panels are restricted to their
/// back-office roles (admins can enter the doctor and staff panels).
#[must_use]
pub fn route_policy(default_deny: bool) -> RoutePolicy {
    let default = if default_deny {
        DefaultAccess::Deny
    } else {
        DefaultAccess::Open
    };
    RoutePolicy::new(default)
        .restrict("/admin", RoleSet::of(&[Role::Admin]))
        .restrict("/doctor", RoleSet::of(&[Role::Doctor, Role::Admin]))
        .restrict("/staff", RoleSet::of(&[Role::Staff, Role::Admin]))
        .restrict("/account", RoleSet::any_authenticated())
        .restrict("/checkout", RoleSet::any_authenticated())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use lumera_access::gate::{self, GateOutcome};
    use lumera_access::token::Claims;
    use lumera_core::UserId;

    fn claims_for(role: Role) -> Claims {
        Claims::new(UserId::new(), role, Utc::now(), Duration::hours(1))
    }

    #[test]
    fn storefront_is_open_by_default() {
        let policy = route_policy(false);
        for path in ["/", "/products", "/products/prd_x", "/blog", "/quiz"] {
            assert!(gate::evaluate(&policy, path, None).is_forward(), "{path}");
        }
    }

    #[test]
    fn admin_area_requires_the_admin_role() {
        let policy = route_policy(false);

        // No credential and a staff credential both fail the same way
        // from the caller's perspective.
        assert!(!gate::evaluate(&policy, "/admin/reports", None).is_forward());
        let staff = claims_for(Role::Staff);
        assert!(!gate::evaluate(&policy, "/admin/reports", Some(&staff)).is_forward());

        let admin = claims_for(Role::Admin);
        assert_eq!(
            gate::evaluate(&policy, "/admin/reports", Some(&admin)),
            GateOutcome::Forward
        );
    }

    #[test]
    fn admins_can_enter_doctor_and_staff_panels() {
        let policy = route_policy(false);
        let admin = claims_for(Role::Admin);
        assert!(gate::evaluate(&policy, "/doctor", Some(&admin)).is_forward());
        assert!(gate::evaluate(&policy, "/staff", Some(&admin)).is_forward());
    }

    #[test]
    fn doctors_cannot_enter_the_staff_panel() {
        let policy = route_policy(false);
        let doctor = claims_for(Role::Doctor);
        assert!(gate::evaluate(&policy, "/doctor/consultations", Some(&doctor)).is_forward());
        assert!(!gate::evaluate(&policy, "/staff/orders", Some(&doctor)).is_forward());
    }

    #[test]
    fn account_admits_any_authenticated_role() {
        let policy = route_policy(false);
        for role in [Role::Admin, Role::Doctor, Role::Staff, Role::Customer] {
            let claims = claims_for(role);
            assert!(gate::evaluate(&policy, "/account", Some(&claims)).is_forward());
        }
        assert!(!gate::evaluate(&policy, "/account", None).is_forward());
    }

    #[test]
    fn default_deny_closes_unlisted_paths() {
        let policy = route_policy(true);
        assert!(!gate::evaluate(&policy, "/products", None).is_forward());
        let customer = claims_for(Role::Customer);
        assert!(!gate::evaluate(&policy, "/products", Some(&customer)).is_forward());
        // Listed entries still work.
        assert!(gate::evaluate(&policy, "/account", Some(&customer)).is_forward());
    }
}

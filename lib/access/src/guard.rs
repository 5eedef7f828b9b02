//! Client-side view guard logic.
//!
//! A guard wraps a renderable page. On mount it resolves the current
//! session (the single suspension point), applies the guard's mode, and
//! either renders the wrapped content or navigates away. While the fetch
//! is pending the guarded subtree must not render at all.
//!
//! The framework-facing pieces live in the server crate; this module holds
//! the pure decision function and the per-mount lifecycle cell that
//! enforces the ordering guarantees: at most one terminal decision per
//! guard instance, and resolutions that land after the guard unmounted
//! are discarded.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::role::{Role, RoleSet};
use crate::session::Session;

/// What a guard protects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardMode {
    /// Requires a session whose role is in the permitted set.
    Protected(RoleSet),
    /// Requires the absence of a session (sign-in and registration pages);
    /// authenticated actors are sent to their role's landing page.
    PublicOnly,
}

/// Client-side navigation target emitted on denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// The sign-in entry point.
    SignIn,
    /// The generic "not authorized" page.
    NotAuthorized,
    /// The admin back-office landing.
    AdminHome,
    /// The doctor panel landing.
    DoctorHome,
    /// The storefront home page.
    Home,
}

impl Destination {
    /// Returns the route path for this destination.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::SignIn => "/login",
            Self::NotAuthorized => "/unauthorized",
            Self::AdminHome => "/admin",
            Self::DoctorHome => "/doctor",
            Self::Home => "/",
        }
    }
}

/// Terminal decision for one guard mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the wrapped content.
    Render,
    /// Render nothing and navigate to the destination.
    Redirect(Destination),
}

/// Returns the landing destination for an authenticated role.
#[must_use]
pub fn landing_for(role: Role) -> Destination {
    match role {
        Role::Admin => Destination::AdminHome,
        Role::Doctor => Destination::DoctorHome,
        Role::Staff | Role::Customer => Destination::Home,
    }
}

/// Applies a guard mode to a resolved session.
///
/// Pure: the session has already been validated (an expired or
/// undecodable credential arrives here as `None`).
#[must_use]
pub fn decide(mode: &GuardMode, session: Option<&Session>) -> GuardDecision {
    match (mode, session) {
        (GuardMode::Protected(_), None) => GuardDecision::Redirect(Destination::SignIn),
        (GuardMode::Protected(allowed), Some(session)) => {
            if allowed.contains(session.role()) {
                GuardDecision::Render
            } else {
                GuardDecision::Redirect(Destination::NotAuthorized)
            }
        }
        (GuardMode::PublicOnly, Some(session)) => {
            GuardDecision::Redirect(landing_for(session.role()))
        }
        (GuardMode::PublicOnly, None) => GuardDecision::Render,
    }
}

/// Source of the current session for client-side guards.
///
/// Implementations must resolve to `None` on any failure. Network errors
/// and "logged out" are indistinguishable to callers, and a failure never
/// grants access.
#[async_trait(?Send)]
pub trait SessionSource {
    /// Fetches the current session, or `None` if there is none or the
    /// fetch failed.
    async fn fetch_session(&self) -> Option<Session>;
}

enum SlotState {
    Checking,
    Decided(GuardDecision),
    Cancelled,
}

/// Per-mount decision cell.
///
/// A guard mount settles its slot exactly once; later settlements and
/// settlements after cancellation are no-ops. Cancel the slot when the
/// guard unmounts so a late fetch cannot fire navigation for a component
/// that no longer exists.
pub struct DecisionSlot {
    state: Mutex<SlotState>,
}

impl DecisionSlot {
    /// Creates a slot in the `Checking` state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SlotState::Checking),
        }
    }

    /// Records the terminal decision.
    ///
    /// Returns `Some(decision)` only for the call that actually decided;
    /// returns `None` if the slot was already decided or cancelled.
    pub fn settle(&self, decision: GuardDecision) -> Option<GuardDecision> {
        let mut state = self.state.lock().expect("slot lock poisoned");
        match *state {
            SlotState::Checking => {
                *state = SlotState::Decided(decision);
                Some(decision)
            }
            SlotState::Decided(_) | SlotState::Cancelled => None,
        }
    }

    /// Discards any future resolution; call on unmount.
    pub fn cancel(&self) {
        let mut state = self.state.lock().expect("slot lock poisoned");
        if matches!(*state, SlotState::Checking) {
            *state = SlotState::Cancelled;
        }
    }

    /// Returns the terminal decision, if one was reached.
    #[must_use]
    pub fn decision(&self) -> Option<GuardDecision> {
        match *self.state.lock().expect("slot lock poisoned") {
            SlotState::Decided(decision) => Some(decision),
            _ => None,
        }
    }

    /// Returns true while no terminal decision has been reached and the
    /// slot has not been cancelled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(
            *self.state.lock().expect("slot lock poisoned"),
            SlotState::Checking
        )
    }
}

impl Default for DecisionSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives one guard mount to its terminal decision.
///
/// Suspends at exactly one point, the session fetch. Returns the decision
/// if this resolution won the slot, or `None` if the slot was cancelled
/// (or already decided) in the meantime, in which case the caller must
/// produce no render or navigation side effect.
pub async fn resolve_guard<S: SessionSource>(
    source: &S,
    mode: &GuardMode,
    slot: &DecisionSlot,
) -> Option<GuardDecision> {
    let session = source.fetch_session().await;
    let decision = decide(mode, session.as_ref());
    let settled = slot.settle(decision);
    if let Some(decision) = settled {
        tracing::debug!(?decision, "guard resolved");
    }
    settled
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use lumera_core::UserId;
    use tokio::sync::oneshot;

    fn session_with_role(role: Role) -> Session {
        let now = Utc::now();
        Session::new(
            UserId::new(),
            role,
            "api-token".to_string(),
            now,
            now + Duration::hours(1),
        )
    }

    fn protected(roles: &[Role]) -> GuardMode {
        GuardMode::Protected(RoleSet::of(roles))
    }

    /// Session source that resolves when (and if) the test says so.
    struct DeferredSource {
        rx: Mutex<Option<oneshot::Receiver<Option<Session>>>>,
    }

    impl DeferredSource {
        fn new(rx: oneshot::Receiver<Option<Session>>) -> Self {
            Self {
                rx: Mutex::new(Some(rx)),
            }
        }
    }

    #[async_trait(?Send)]
    impl SessionSource for DeferredSource {
        async fn fetch_session(&self) -> Option<Session> {
            let rx = self.rx.lock().expect("lock").take().expect("single fetch");
            // A dropped sender models a failed fetch: fail closed.
            rx.await.unwrap_or(None)
        }
    }

    #[test]
    fn protected_without_session_redirects_to_sign_in() {
        let decision = decide(&protected(&[Role::Customer]), None);
        assert_eq!(decision, GuardDecision::Redirect(Destination::SignIn));
    }

    #[test]
    fn protected_with_excluded_role_redirects_to_not_authorized() {
        let session = session_with_role(Role::Customer);
        let decision = decide(&protected(&[Role::Admin]), Some(&session));
        assert_eq!(decision, GuardDecision::Redirect(Destination::NotAuthorized));
    }

    #[test]
    fn protected_with_permitted_role_renders() {
        let session = session_with_role(Role::Admin);
        let decision = decide(&protected(&[Role::Admin]), Some(&session));
        assert_eq!(decision, GuardDecision::Render);
    }

    #[test]
    fn public_only_redirects_by_role() {
        let admin = session_with_role(Role::Admin);
        assert_eq!(
            decide(&GuardMode::PublicOnly, Some(&admin)),
            GuardDecision::Redirect(Destination::AdminHome)
        );

        let doctor = session_with_role(Role::Doctor);
        assert_eq!(
            decide(&GuardMode::PublicOnly, Some(&doctor)),
            GuardDecision::Redirect(Destination::DoctorHome)
        );

        for role in [Role::Staff, Role::Customer] {
            let session = session_with_role(role);
            assert_eq!(
                decide(&GuardMode::PublicOnly, Some(&session)),
                GuardDecision::Redirect(Destination::Home)
            );
        }
    }

    #[test]
    fn public_only_without_session_renders() {
        assert_eq!(decide(&GuardMode::PublicOnly, None), GuardDecision::Render);
    }

    #[test]
    fn slot_settles_exactly_once() {
        let slot = DecisionSlot::new();
        assert_eq!(
            slot.settle(GuardDecision::Render),
            Some(GuardDecision::Render)
        );
        // A stale in-flight resolution is a no-op.
        assert_eq!(
            slot.settle(GuardDecision::Redirect(Destination::SignIn)),
            None
        );
        assert_eq!(slot.decision(), Some(GuardDecision::Render));
    }

    #[test]
    fn cancelled_slot_discards_resolutions() {
        let slot = DecisionSlot::new();
        slot.cancel();
        assert_eq!(slot.settle(GuardDecision::Render), None);
        assert_eq!(slot.decision(), None);
    }

    #[test]
    fn cancel_after_decision_keeps_the_decision() {
        let slot = DecisionSlot::new();
        slot.settle(GuardDecision::Render);
        slot.cancel();
        assert_eq!(slot.decision(), Some(GuardDecision::Render));
    }

    #[tokio::test]
    async fn no_terminal_decision_while_fetch_is_pending() {
        let (tx, rx) = oneshot::channel();
        let source = DeferredSource::new(rx);
        let slot = DecisionSlot::new();
        let mode = protected(&[Role::Admin]);

        let guard = resolve_guard(&source, &mode, &slot);
        let observer = async {
            // The guard is suspended on the fetch; nothing may have
            // rendered or navigated yet.
            assert!(slot.is_pending());
            assert_eq!(slot.decision(), None);
            tx.send(None).expect("send session");
        };

        let (decision, ()) = tokio::join!(guard, observer);
        assert_eq!(decision, Some(GuardDecision::Redirect(Destination::SignIn)));
    }

    #[tokio::test]
    async fn unmount_before_resolution_suppresses_navigation() {
        let (tx, rx) = oneshot::channel();
        let source = DeferredSource::new(rx);
        let slot = DecisionSlot::new();
        let mode = protected(&[Role::Admin]);

        let guard = resolve_guard(&source, &mode, &slot);
        let unmount = async {
            slot.cancel();
            tx.send(Some(session_with_role(Role::Admin)))
                .expect("send session");
        };

        let (decision, ()) = tokio::join!(guard, unmount);
        assert_eq!(decision, None);
        assert_eq!(slot.decision(), None);
    }

    #[tokio::test]
    async fn failed_fetch_resolves_as_unauthenticated() {
        let (tx, rx) = oneshot::channel::<Option<Session>>();
        let source = DeferredSource::new(rx);
        let slot = DecisionSlot::new();
        let mode = protected(&[Role::Customer]);

        // Dropping the sender models a network failure.
        drop(tx);

        let decision = resolve_guard(&source, &mode, &slot).await;
        assert_eq!(decision, Some(GuardDecision::Redirect(Destination::SignIn)));
    }

    #[tokio::test]
    async fn resolution_with_session_renders_protected_content() {
        let (tx, rx) = oneshot::channel();
        let source = DeferredSource::new(rx);
        let slot = DecisionSlot::new();
        let mode = protected(&[Role::Doctor]);

        tx.send(Some(session_with_role(Role::Doctor)))
            .expect("send session");

        let decision = resolve_guard(&source, &mode, &slot).await;
        assert_eq!(decision, Some(GuardDecision::Render));
        assert!(!slot.is_pending());
    }
}

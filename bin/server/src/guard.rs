//! View guard components.
//!
//! Guards wrap page content that depends on who is looking at it. On
//! mount they fetch the current session once, then either render their
//! children or navigate away. While the check is in flight nothing
//! renders, so protected content never flashes for an actor about to
//! be redirected.
//!
//! The decision lifecycle (single resolution, cancellation on unmount)
//! lives in `lumera_access::guard`; this module binds it to Leptos.

use async_trait::async_trait;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use lumera_access::guard::{DecisionSlot, GuardDecision, GuardMode, SessionSource, resolve_guard};
use lumera_access::role::Role;
use lumera_access::session::Session;
use std::sync::Arc;

use crate::session::fetch_current_session;

/// The `current_session` server function as a guard session source.
struct SessionEndpoint;

#[async_trait(?Send)]
impl SessionSource for SessionEndpoint {
    async fn fetch_session(&self) -> Option<Session> {
        fetch_current_session().await
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum GuardState {
    Checking,
    Authorized,
    Denied,
}

fn run_guard(mode: GuardMode, children: ChildrenFn) -> impl IntoView {
    let (state, set_state) = signal(GuardState::Checking);
    let slot = StoredValue::new(Arc::new(DecisionSlot::new()));
    let navigate = use_navigate();

    // A late resolution must not navigate on behalf of a guard that no
    // longer exists.
    on_cleanup(move || slot.get_value().cancel());

    Effect::new(move |_| {
        let mode = mode.clone();
        let slot = slot.get_value();
        let navigate = navigate.clone();
        spawn_local(async move {
            match resolve_guard(&SessionEndpoint, &mode, &slot).await {
                Some(GuardDecision::Render) => set_state.set(GuardState::Authorized),
                Some(GuardDecision::Redirect(destination)) => {
                    set_state.set(GuardState::Denied);
                    navigate(destination.path(), Default::default());
                }
                // The slot was cancelled or already decided; render and
                // navigation stay untouched.
                None => {}
            }
        });
    });

    view! {
        <Show when=move || state.get() == GuardState::Authorized fallback=|| ()>
            {children()}
        </Show>
    }
}

/// Renders its children only for sessions whose role is in `allowed`.
///
/// Unauthenticated actors are sent to the sign-in page; authenticated
/// actors with an excluded role are sent to the not-authorized page.
#[component]
pub fn Protected(allowed: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    run_guard(GuardMode::Protected(allowed.into_iter().collect()), children)
}

/// Renders its children only when no session is active.
///
/// Authenticated actors are sent to their role's landing page instead
/// (sign-in and registration make no sense while signed in).
#[component]
pub fn PublicOnly(children: ChildrenFn) -> impl IntoView {
    run_guard(GuardMode::PublicOnly, children)
}

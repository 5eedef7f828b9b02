//! The session endpoint shared by all client-side guards.

use leptos::prelude::*;
use lumera_access::session::Session;

/// Server function returning the current session, if any.
///
/// This is the single source of session truth for the client. Absent,
/// malformed, and expired cookies all come back as `Ok(None)`; the
/// decode failure reason is logged server-side and never leaves.
#[server]
pub async fn current_session() -> Result<Option<Session>, ServerFnError> {
    use crate::auth::middleware::SESSION_COOKIE;
    use axum::Extension;
    use axum_extra::extract::CookieJar;
    use lumera_access::token::TokenCodec;
    use std::sync::Arc;

    let jar: CookieJar = leptos_axum::extract().await?;
    let Extension(codec): Extension<Arc<TokenCodec>> = leptos_axum::extract().await?;

    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Ok(None);
    };

    match codec.decode(cookie.value()) {
        Ok(claims) => Ok(Some(Session::from_claims(
            &claims,
            cookie.value().to_string(),
        ))),
        Err(err) => {
            tracing::debug!(reason = %err, "Rejected session cookie");
            Ok(None)
        }
    }
}

/// Fetches the current session, treating any failure as "no session".
///
/// Guards must fail closed: a network error during the fetch never
/// grants access, it only looks like being logged out.
pub async fn fetch_current_session() -> Option<Session> {
    current_session().await.unwrap_or(None)
}

//! Authentication routes for login, registration, and logout.
//!
//! The upstream API owns the credential check and issues the signed
//! session token; these handlers validate the token with the shared
//! secret, set it as the session cookie, and send the actor to their
//! role's landing page.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use time::Duration as TimeDuration;

use super::{AppState, middleware::SESSION_COOKIE};
use crate::api::{Credentials, Registration};
use lumera_access::guard::landing_for;
use lumera_access::token::Claims;

/// Login form fields.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    email: String,
    password: String,
}

/// Registration form fields.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    name: String,
    email: String,
    password: String,
}

/// Exchanges credentials for a session cookie.
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> impl IntoResponse {
    let grant = match state
        .api
        .login(&Credentials {
            email: form.email,
            password: form.password,
        })
        .await
    {
        Ok(grant) => grant,
        Err(err) => {
            tracing::debug!(error = %err, "Login rejected by upstream");
            return (jar, Redirect::to("/login?error=credentials")).into_response();
        }
    };

    establish_session(&state, jar, &grant.token)
}

/// Creates a new customer account and signs them in.
pub async fn register(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> impl IntoResponse {
    let grant = match state
        .api
        .register(&Registration {
            name: form.name,
            email: form.email,
            password: form.password,
        })
        .await
    {
        Ok(grant) => grant,
        Err(err) => {
            tracing::debug!(error = %err, "Registration rejected by upstream");
            return (jar, Redirect::to("/register?error=registration")).into_response();
        }
    };

    establish_session(&state, jar, &grant.token)
}

/// Logs out by clearing the session cookie.
///
/// There is no server-side session to delete; the token simply stops
/// being presented and expires on its own.
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    let remove_session = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(TimeDuration::ZERO);

    (jar.add(remove_session), Redirect::to("/"))
}

/// Validates an upstream token and sets it as the session cookie.
fn establish_session(
    state: &AppState,
    jar: CookieJar,
    token: &str,
) -> axum::response::Response {
    let claims = match state.codec.decode(token) {
        Ok(claims) => claims,
        Err(err) => {
            // The upstream issued a token this server cannot verify;
            // most likely a shared-secret mismatch between deployments.
            tracing::error!(reason = %err, "Upstream token failed validation");
            return (jar, Redirect::to("/login?error=internal")).into_response();
        }
    };

    let cookie = session_cookie(state, token, &claims);
    let landing = landing_for(claims.role).path();
    tracing::info!(subject = %claims.sub, role = %claims.role, "Session established");

    (jar.add(cookie), Redirect::to(landing)).into_response()
}

/// Builds the session cookie for a validated token.
///
/// The cookie lifetime is the remaining token validity, capped by the
/// configured session duration.
fn session_cookie(state: &AppState, token: &str, claims: &Claims) -> Cookie<'static> {
    let remaining = (claims.expires_at() - Utc::now()).num_minutes();
    let minutes = remaining.clamp(0, state.session_config.duration_minutes);

    Cookie::build((SESSION_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .secure(state.session_config.secure_cookies)
        .same_site(SameSite::Lax)
        .max_age(TimeDuration::minutes(minutes))
        .build()
}

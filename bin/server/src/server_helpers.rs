//! Helper functions for server functions with proper error handling and logging.
//!
//! Server functions bypass the route gate (they live under `/api/`), so
//! every role-restricted operation re-checks the session here.

use crate::auth::middleware::SESSION_COOKIE;
use crate::error::SessionError;
use axum::Extension;
use axum_extra::extract::CookieJar;
use lumera_access::role::Role;
use lumera_access::session::Session;
use lumera_access::token::TokenCodec;
use std::sync::Arc;

/// Extracts and validates the current session from the request.
///
/// Logs structured errors for debugging while returning typed errors
/// that convert to user-safe messages.
pub async fn get_authenticated_session() -> Result<Session, SessionError> {
    let jar: CookieJar = leptos_axum::extract().await.map_err(|e| {
        tracing::debug!(error = %e, "Failed to extract cookie jar");
        SessionError::Internal {
            details: e.to_string(),
        }
    })?;

    let Extension(codec): Extension<Arc<TokenCodec>> =
        leptos_axum::extract().await.map_err(|e| {
            tracing::error!(error = %e, "Token codec missing from request extensions");
            SessionError::Internal {
                details: e.to_string(),
            }
        })?;

    let cookie = jar
        .get(SESSION_COOKIE)
        .ok_or(SessionError::NotAuthenticated)?;

    let claims = codec.decode(cookie.value()).map_err(|err| {
        tracing::debug!(reason = %err, "Rejected session cookie");
        SessionError::InvalidToken {
            reason: err.to_string(),
        }
    })?;

    Ok(Session::from_claims(&claims, cookie.value().to_string()))
}

/// Extracts a session and requires its role to be in `allowed`.
pub async fn require_role(allowed: &[Role]) -> Result<Session, SessionError> {
    let session = get_authenticated_session().await?;

    if !allowed.contains(&session.role()) {
        tracing::warn!(
            subject = %session.subject(),
            role = %session.role(),
            "Role-restricted operation denied"
        );
        return Err(SessionError::RoleDenied {
            role: session.role().to_string(),
        });
    }

    Ok(session)
}

/// Gets the upstream API client from the request extensions.
pub async fn get_api_client() -> Result<Arc<crate::api::ApiClient>, SessionError> {
    let Extension(api): Extension<Arc<crate::api::ApiClient>> =
        leptos_axum::extract().await.map_err(|e| {
            tracing::error!(error = %e, "API client missing from request extensions");
            SessionError::Internal {
                details: e.to_string(),
            }
        })?;
    Ok(api)
}

//! Session values for authenticated actors.
//!
//! A session is an immutable value derived from a decoded session token:
//! the subject's identity, their role claim, the opaque access token used
//! for upstream API calls, and the validity window. A new login produces a
//! new session replacing the old one; nothing mutates a session in place.
//! Gates and guards receive sessions as explicit values, never through
//! ambient state.

use chrono::{DateTime, Utc};
use lumera_core::UserId;
use serde::{Deserialize, Serialize};

use crate::role::Role;
use crate::token::Claims;

/// An authenticated actor's session.
///
/// Serializable because it is the payload of the same-origin session
/// endpoint consumed by client-side guards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The authenticated user's ID.
    subject: UserId,
    /// Role claimed at login.
    role: Role,
    /// Opaque bearer credential for the upstream domain API.
    access_token: String,
    /// When the session was issued.
    issued_at: DateTime<Utc>,
    /// When the session expires.
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session value.
    #[must_use]
    pub fn new(
        subject: UserId,
        role: Role,
        access_token: String,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            subject,
            role,
            access_token,
            issued_at,
            expires_at,
        }
    }

    /// Builds a session from decoded token claims and the raw token.
    ///
    /// The raw token doubles as the bearer credential for upstream calls.
    #[must_use]
    pub fn from_claims(claims: &Claims, access_token: String) -> Self {
        Self {
            subject: claims.sub,
            role: claims.role,
            access_token,
            issued_at: claims.issued_at(),
            expires_at: claims.expires_at(),
        }
    }

    /// Returns the authenticated user's ID.
    #[must_use]
    pub fn subject(&self) -> UserId {
        self.subject
    }

    /// Returns the session's role claim.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the opaque access token for upstream API calls.
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Returns when the session was issued.
    #[must_use]
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Returns when the session expires.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns true if the session is expired at the given instant.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Returns true if the session is expired now.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session_with_ttl(ttl: Duration) -> Session {
        let now = Utc::now();
        Session::new(
            UserId::new(),
            Role::Customer,
            "api-token".to_string(),
            now,
            now + ttl,
        )
    }

    #[test]
    fn session_exposes_its_fields() {
        let session = session_with_ttl(Duration::hours(1));
        assert_eq!(session.role(), Role::Customer);
        assert_eq!(session.access_token(), "api-token");
        assert!(session.expires_at() > session.issued_at());
    }

    #[test]
    fn fresh_session_is_not_expired() {
        let session = session_with_ttl(Duration::hours(1));
        assert!(!session.is_expired());
    }

    #[test]
    fn stale_session_is_expired() {
        let session = session_with_ttl(Duration::seconds(-1));
        assert!(session.is_expired());
    }

    #[test]
    fn expiry_boundary_is_expired() {
        let session = session_with_ttl(Duration::hours(1));
        assert!(session.is_expired_at(session.expires_at()));
        assert!(!session.is_expired_at(session.expires_at() - Duration::seconds(1)));
    }

    #[test]
    fn from_claims_carries_subject_and_role() {
        let claims = Claims::new(UserId::new(), Role::Doctor, Utc::now(), Duration::hours(1));
        let session = Session::from_claims(&claims, "raw-token".to_string());

        assert_eq!(session.subject(), claims.sub);
        assert_eq!(session.role(), Role::Doctor);
        assert_eq!(session.access_token(), "raw-token");
        assert_eq!(session.expires_at(), claims.expires_at());
    }

    #[test]
    fn session_serialization_roundtrip() {
        let session = session_with_ttl(Duration::hours(1));
        let json = serde_json::to_string(&session).expect("serialize");
        let parsed: Session = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(session, parsed);
    }
}

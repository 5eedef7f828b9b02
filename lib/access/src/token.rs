//! Session token claims and codec.
//!
//! A session is carried as a signed HS256 bearer token. The codec verifies
//! the signature and shape, but checks expiry against a caller-supplied
//! clock so that decoding is a pure function of (token, now). A token whose
//! expiry is at or before `now` decodes structurally but is still rejected;
//! callers treat both failure kinds as "no usable session".

use chrono::{DateTime, Duration, Utc};
use lumera_core::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::role::Role;

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated user's ID.
    pub sub: UserId,
    /// Role claimed by the subject.
    pub role: Role,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a session issued at `issued_at` and valid for `ttl`.
    #[must_use]
    pub fn new(sub: UserId, role: Role, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub,
            role,
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    /// Returns when the claims were issued.
    #[must_use]
    pub fn issued_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.iat, 0).unwrap_or_default()
    }

    /// Returns when the claims expire.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_default()
    }

    /// Returns true if the claims are expired at the given instant.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.exp <= now.timestamp()
    }
}

/// Reason a token could not be turned into usable claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The token is structurally invalid or its signature does not verify.
    Malformed,
    /// The token decoded but its expiry is at or before the check time.
    Expired,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "token is malformed"),
            Self::Expired => write!(f, "token has expired"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Error returned when signing a token fails.
#[cfg(feature = "codec")]
#[derive(Debug)]
pub struct EncodeError {
    reason: String,
}

#[cfg(feature = "codec")]
impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to sign session token: {}", self.reason)
    }
}

#[cfg(feature = "codec")]
impl std::error::Error for EncodeError {}

/// Signs and verifies session tokens with a shared HS256 secret.
#[cfg(feature = "codec")]
pub struct TokenCodec {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
    validation: jsonwebtoken::Validation,
}

#[cfg(feature = "codec")]
impl TokenCodec {
    /// Creates a codec from the shared signing secret.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        let mut validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::HS256);
        // Expiry is checked against the caller's clock in `decode_at`, not
        // the library's, so decode stays deterministic for a fixed `now`.
        validation.validate_exp = false;
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Signs the given claims into a bearer token.
    pub fn encode(&self, claims: &Claims) -> Result<String, EncodeError> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding).map_err(
            |e| EncodeError {
                reason: e.to_string(),
            },
        )
    }

    /// Verifies and decodes a token as of the given instant.
    ///
    /// Signature or shape failure yields [`DecodeError::Malformed`]; a
    /// structurally valid token whose expiry is at or before `now` yields
    /// [`DecodeError::Expired`]. No side effects.
    pub fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, DecodeError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|_| DecodeError::Malformed)?;
        if data.claims.is_expired_at(now) {
            return Err(DecodeError::Expired);
        }
        Ok(data.claims)
    }

    /// Verifies and decodes a token as of the current time.
    pub fn decode(&self, token: &str) -> Result<Claims, DecodeError> {
        self.decode_at(token, Utc::now())
    }
}

#[cfg(all(test, feature = "codec"))]
mod tests {
    use super::*;

    const SECRET: &str = "test-signing-secret";

    fn codec() -> TokenCodec {
        TokenCodec::new(SECRET)
    }

    fn claims_at(issued_at: DateTime<Utc>, ttl: Duration) -> Claims {
        Claims::new(UserId::new(), Role::Customer, issued_at, ttl)
    }

    #[test]
    fn encode_decode_roundtrip() {
        let codec = codec();
        let now = Utc::now();
        let claims = claims_at(now, Duration::hours(1));

        let token = codec.encode(&claims).expect("encode");
        let decoded = codec.decode_at(&token, now).expect("decode");

        assert_eq!(decoded, claims);
    }

    #[test]
    fn garbage_token_is_malformed() {
        let codec = codec();
        let err = codec.decode_at("not-a-token", Utc::now()).unwrap_err();
        assert_eq!(err, DecodeError::Malformed);
    }

    #[test]
    fn wrong_secret_is_malformed() {
        let now = Utc::now();
        let claims = claims_at(now, Duration::hours(1));
        let token = TokenCodec::new("other-secret").encode(&claims).expect("encode");

        let err = codec().decode_at(&token, now).unwrap_err();
        assert_eq!(err, DecodeError::Malformed);
    }

    #[test]
    fn expired_token_is_rejected_even_though_it_decodes() {
        let codec = codec();
        let issued = Utc::now() - Duration::hours(2);
        let claims = claims_at(issued, Duration::hours(1));
        let token = codec.encode(&claims).expect("encode");

        let err = codec.decode_at(&token, Utc::now()).unwrap_err();
        assert_eq!(err, DecodeError::Expired);
    }

    #[test]
    fn token_expiring_exactly_now_is_expired() {
        let codec = codec();
        let now = Utc::now();
        let claims = claims_at(now - Duration::hours(1), Duration::hours(1));
        let token = codec.encode(&claims).expect("encode");

        // exp == now counts as expired
        let err = codec.decode_at(&token, claims.expires_at()).unwrap_err();
        assert_eq!(err, DecodeError::Expired);
    }

    #[test]
    fn decode_is_deterministic_for_fixed_now() {
        let codec = codec();
        let now = Utc::now();
        let claims = claims_at(now, Duration::minutes(30));
        let token = codec.encode(&claims).expect("encode");

        let first = codec.decode_at(&token, now);
        let second = codec.decode_at(&token, now);
        assert_eq!(first, second);
    }

    #[test]
    fn role_claim_survives_roundtrip() {
        let codec = codec();
        let now = Utc::now();
        let claims = Claims::new(UserId::new(), Role::Doctor, now, Duration::hours(1));
        let token = codec.encode(&claims).expect("encode");

        let decoded = codec.decode_at(&token, now).expect("decode");
        assert_eq!(decoded.role, Role::Doctor);
    }
}

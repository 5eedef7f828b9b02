//! Session, role, and route authorization for the Lumera platform.
//!
//! This crate provides:
//! - Role-based access control (`Role`, `RoleSet`)
//! - Signed session tokens (`Claims`, `TokenCodec`, behind the `codec` feature)
//! - Immutable session values (`Session`)
//! - The static route policy table (`RoutePolicy`)
//! - The server-side request gate (`gate::evaluate`)
//! - Client-side view-guard logic (`guard`)
//!
//! # Access Control Model
//!
//! Every authenticated actor carries one role (admin, doctor, staff, or
//! customer), embedded in a signed session token at login. The server-side
//! gate checks the request path against a static prefix policy before any
//! page renders; client-side guards re-check on component mount, covering
//! client-side navigation the gate's matcher never sees. All failure modes
//! collapse to a single deny outcome; reasons exist only for logs.
//!
//! # Example
//!
//! ```
//! use lumera_access::gate::{self, GateOutcome};
//! use lumera_access::policy::{DefaultAccess, RoutePolicy};
//! use lumera_access::role::{Role, RoleSet};
//! use lumera_access::token::{Claims, TokenCodec};
//! use chrono::{Duration, Utc};
//! use lumera_core::UserId;
//!
//! let policy = RoutePolicy::new(DefaultAccess::Open)
//!     .restrict("/admin", RoleSet::of(&[Role::Admin]))
//!     .restrict("/staff", RoleSet::of(&[Role::Staff, Role::Admin]));
//!
//! let codec = TokenCodec::new("signing-secret");
//! let claims = Claims::new(UserId::new(), Role::Admin, Utc::now(), Duration::hours(1));
//! let token = codec.encode(&claims).expect("sign token");
//!
//! let decoded = codec.decode(&token).expect("decode token");
//! assert_eq!(gate::evaluate(&policy, "/admin/reports", Some(&decoded)), GateOutcome::Forward);
//! assert!(!gate::evaluate(&policy, "/admin/reports", None).is_forward());
//! ```

pub mod error;
pub mod gate;
pub mod guard;
pub mod policy;
pub mod role;
pub mod session;
pub mod token;

// Re-export main types at crate root
pub use error::AccessError;
pub use gate::{GateOutcome, evaluate};
pub use guard::{
    DecisionSlot, Destination, GuardDecision, GuardMode, SessionSource, decide, landing_for,
    resolve_guard,
};
pub use policy::{Access, DefaultAccess, PolicyEntry, RoutePolicy};
pub use role::{Role, RoleSet};
pub use session::Session;
pub use token::{Claims, DecodeError};
#[cfg(feature = "codec")]
pub use token::{EncodeError, TokenCodec};

//! Credential and session subsystem: token issuance and rotation
//! ([`token`], [`session`]), bearer-token identity resolution
//! ([`resolver`]) and role-gated authorization ([`gate`]).
//!
//! The gate is pure; everything else touches storage only through the
//! `crewdesk-identity` store traits.

pub mod gate;
pub mod password;
pub mod resolver;
pub mod session;
pub mod token;

pub use gate::{PrincipalRole, RoleGate};
pub use password::{hash_password, validate_strength, verify_password};
pub use resolver::{extract_bearer, AuthContext, IdentityResolver, ResolvedIdentity};
pub use session::SessionManager;
pub use token::{AccessClaims, RefreshClaims, TokenConfig, TokenError, TokenIssuer, TokenPair};

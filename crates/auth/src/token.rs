//! Signed, time-bounded access and refresh tokens.
//!
//! Two distinct HS256 secrets sign the two token classes, so compromise of
//! one does not compromise the other. Access tokens embed `{sub, email}` and
//! expire within minutes; refresh tokens embed only `{sub}` (plus a fresh
//! `jti` so consecutive rotations never mint byte-identical tokens) and
//! expire after days.

use anyhow::Context as _;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crewdesk_core::{DomainError, DomainResult, PrincipalId};

const MIN_SECRET_LEN: usize = 32;

/// Token signing configuration.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl_minutes: i64,
    pub refresh_ttl_days: i64,
    pub issuer: String,
}

impl TokenConfig {
    /// Load configuration from the environment.
    ///
    /// `CREWDESK_ACCESS_SECRET` and `CREWDESK_REFRESH_SECRET` are required
    /// (at least 32 bytes each, and must differ); TTLs can be overridden via
    /// `CREWDESK_ACCESS_TTL_MINUTES` / `CREWDESK_REFRESH_TTL_DAYS`.
    pub fn from_env() -> anyhow::Result<Self> {
        let access_secret =
            std::env::var("CREWDESK_ACCESS_SECRET").context("CREWDESK_ACCESS_SECRET not set")?;
        let refresh_secret =
            std::env::var("CREWDESK_REFRESH_SECRET").context("CREWDESK_REFRESH_SECRET not set")?;

        if access_secret.len() < MIN_SECRET_LEN || refresh_secret.len() < MIN_SECRET_LEN {
            anyhow::bail!("token secrets must be at least {MIN_SECRET_LEN} bytes");
        }
        if access_secret == refresh_secret {
            anyhow::bail!("access and refresh secrets must differ");
        }

        let access_ttl_minutes = match std::env::var("CREWDESK_ACCESS_TTL_MINUTES") {
            Ok(v) => v.parse().context("CREWDESK_ACCESS_TTL_MINUTES not an integer")?,
            Err(_) => 15,
        };
        let refresh_ttl_days = match std::env::var("CREWDESK_REFRESH_TTL_DAYS") {
            Ok(v) => v.parse().context("CREWDESK_REFRESH_TTL_DAYS not an integer")?,
            Err(_) => 7,
        };

        Ok(Self {
            access_secret,
            refresh_secret,
            access_ttl_minutes,
            refresh_ttl_days,
            issuer: std::env::var("CREWDESK_ISSUER").unwrap_or_else(|_| "crewdesk".to_string()),
        })
    }

    /// Fixed secrets and short TTLs for deterministic tests.
    pub fn for_tests() -> Self {
        Self {
            access_secret: "test-access-secret-0123456789abcdef".to_string(),
            refresh_secret: "test-refresh-secret-0123456789abcdef".to_string(),
            access_ttl_minutes: 15,
            refresh_ttl_days: 7,
            issuer: "crewdesk-test".to_string(),
        }
    }
}

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: PrincipalId,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

/// Claims carried by a refresh token. Identity only; no role material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: PrincipalId,
    /// Fresh per-issue id; makes every rotation produce a distinct token
    /// even within the same clock second.
    pub jti: Uuid,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

/// Token verification failure.
///
/// Both variants normalize to [`DomainError::Unauthenticated`]; the split
/// exists for logging only and never reaches callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("invalid token")]
    Invalid,
}

impl From<TokenError> for DomainError {
    fn from(_: TokenError) -> Self {
        DomainError::Unauthenticated
    }
}

/// A freshly minted access/refresh pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Mints and verifies both token classes.
pub struct TokenIssuer {
    config: TokenConfig,
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
}

impl TokenIssuer {
    pub fn new(config: TokenConfig) -> Self {
        let access_encoding = EncodingKey::from_secret(config.access_secret.as_bytes());
        let access_decoding = DecodingKey::from_secret(config.access_secret.as_bytes());
        let refresh_encoding = EncodingKey::from_secret(config.refresh_secret.as_bytes());
        let refresh_decoding = DecodingKey::from_secret(config.refresh_secret.as_bytes());
        Self {
            config,
            access_encoding,
            access_decoding,
            refresh_encoding,
            refresh_decoding,
        }
    }

    /// Mint a fresh access/refresh pair for a principal.
    pub fn issue(&self, principal: PrincipalId, email: &str) -> DomainResult<TokenPair> {
        let now = Utc::now();

        let access = AccessClaims {
            sub: principal,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.config.access_ttl_minutes)).timestamp(),
            iss: self.config.issuer.clone(),
        };
        let refresh = RefreshClaims {
            sub: principal,
            jti: Uuid::now_v7(),
            iat: now.timestamp(),
            exp: (now + Duration::days(self.config.refresh_ttl_days)).timestamp(),
            iss: self.config.issuer.clone(),
        };

        let access = encode(&Header::default(), &access, &self.access_encoding)
            .map_err(|e| DomainError::internal(format!("access token encoding failed: {e}")))?;
        let refresh = encode(&Header::default(), &refresh, &self.refresh_encoding)
            .map_err(|e| DomainError::internal(format!("refresh token encoding failed: {e}")))?;

        Ok(TokenPair { access, refresh })
    }

    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let validation = self.validation();
        decode::<AccessClaims>(token, &self.access_decoding, &validation)
            .map(|data| data.claims)
            .map_err(classify)
    }

    pub fn verify_refresh(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        let validation = self.validation();
        decode::<RefreshClaims>(token, &self.refresh_decoding, &validation)
            .map(|data| data.claims)
            .map_err(classify)
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss"]);
        validation
    }
}

fn classify(err: jsonwebtoken::errors::Error) -> TokenError {
    match err.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    }
}

// ============================
// crates/userhub-lib/src/auth/token.rs
// ============================
//! Stateless signed bearer tokens.
//!
//! Tokens are self-contained: validity is determined entirely by the
//! signature and the embedded expiry, never by server-side state.
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject: user id
    sub: String,
    /// Absolute expiry as a unix timestamp
    exp: i64,
}

/// Issues and validates HS256-signed tokens.
///
/// Constructed once at startup from explicit configuration; the signing
/// secret never changes for the lifetime of the process.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    default_ttl: Duration,
}

impl TokenCodec {
    pub fn new(secret: &str, default_ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            default_ttl,
        }
    }

    /// Issue a token for `subject` expiring at now + ttl (the configured
    /// default when `ttl` is `None`).
    pub fn issue(&self, subject: Uuid, ttl: Option<Duration>) -> Result<String, AppError> {
        let expiry = Utc::now() + ttl.unwrap_or(self.default_ttl);
        let claims = Claims {
            sub: subject.to_string(),
            exp: expiry.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))
    }

    /// Parse and validate a token, returning the subject id.
    ///
    /// Bad signature, missing claims, a non-UUID subject and expiry all
    /// collapse to one error kind; the cause is only distinguished in
    /// debug logs.
    pub fn parse(&self, token: &str) -> Result<Uuid, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // strict expiry: now >= exp means expired, no clock-skew leeway
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            tracing::debug!(error = %e, "token rejected");
            invalid_token()
        })?;

        // jsonwebtoken still accepts exp == now; the contract is that a
        // token is expired the instant the clock reaches its expiry
        if Utc::now().timestamp() >= data.claims.exp {
            tracing::debug!("token rejected: expired");
            return Err(invalid_token());
        }

        Uuid::parse_str(&data.claims.sub).map_err(|e| {
            tracing::debug!(error = %e, "token subject is not a valid id");
            invalid_token()
        })
    }
}

fn invalid_token() -> AppError {
    AppError::Unauthorized("Could not validate credentials".to_string())
}

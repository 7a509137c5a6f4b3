//! # Test JWT for the signed-in session
//!
//! The backend has no token endpoint, so the client mints its own HS256 token at
//! login and attaches it as a bearer token to later requests. The claims are the
//! [`CurrentUser`] projection plus `iat`/`exp` (seconds since the epoch).
//!
//! [`parse_token`] checks structure, signature and expiry; a token that fails any
//! of them is rejected and the login is refused.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

use crate::models::CurrentUser;

type HmacSha256 = Hmac<Sha256>;

const HEADER: &str = r#"{"alg":"HS256","typ":"JWT"}"#;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is not three base64url segments")]
    Malformed,
    #[error("token signature does not match")]
    BadSignature,
    #[error("token expired")]
    Expired,
    #[error("token claims are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid signing key")]
    InvalidKey,
    #[error("token lifetime of {0} seconds is out of range")]
    InvalidTtl(u64),
}

/// Convert a configured lifetime in seconds into a [`Duration`].
pub fn ttl_from_secs(secs: u64) -> Result<Duration, TokenError> {
    i64::try_from(secs)
        .ok()
        .and_then(Duration::try_seconds)
        .ok_or(TokenError::InvalidTtl(secs))
}

/// Claims carried by the session token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub user: CurrentUser,
    pub iat: i64,
    pub exp: i64,
}

fn sign(signing_input: &str, secret: &str) -> Result<HmacSha256, TokenError> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| TokenError::InvalidKey)?;
    mac.update(signing_input.as_bytes());
    Ok(mac)
}

/// Issue a token for `user`, valid for `ttl` from `now`.
pub fn create_token(
    user: &CurrentUser,
    secret: &str,
    ttl: Duration,
    now: DateTime<Utc>,
) -> Result<String, TokenError> {
    let expires = now
        .checked_add_signed(ttl)
        .ok_or(TokenError::InvalidTtl(ttl.num_seconds().unsigned_abs()))?;
    let claims = Claims {
        user: user.clone(),
        iat: now.timestamp(),
        exp: expires.timestamp(),
    };
    let header = URL_SAFE_NO_PAD.encode(HEADER);
    let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims)?);
    let signing_input = format!("{header}.{payload}");
    let signature = URL_SAFE_NO_PAD.encode(sign(&signing_input, secret)?.finalize().into_bytes());
    Ok(format!("{signing_input}.{signature}"))
}

/// Verify `token` and return its claims.
pub fn parse_token(token: &str, secret: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
    let mut parts = token.split('.');
    let (Some(header), Some(payload), Some(signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Malformed);
    };

    let signature = URL_SAFE_NO_PAD
        .decode(signature)
        .map_err(|_| TokenError::Malformed)?;
    sign(&format!("{header}.{payload}"), secret)?
        .verify_slice(&signature)
        .map_err(|_| TokenError::BadSignature)?;

    let payload = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| TokenError::Malformed)?;
    let claims: Claims = serde_json::from_slice(&payload)?;

    if claims.exp <= now.timestamp() {
        return Err(TokenError::Expired);
    }
    Ok(claims)
}

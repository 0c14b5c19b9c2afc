use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Name of the session cookie set on successful login.
pub const AUTH_COOKIE: &str = "auth_token";

/// The only subject tokens are ever issued for.
pub const ADMIN_SUBJECT: &str = "admin";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Mint a signed session token for the admin subject, expiring after the
/// configured session lifetime.
pub fn issue_session_token(config: &Config) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let expiration = now
        .checked_add_signed(Duration::seconds(config.session_ttl().as_secs() as i64))
        .expect("valid timestamp")
        .timestamp();

    let claims = Claims {
        sub: ADMIN_SUBJECT.to_string(),
        exp: expiration,
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
}

/// Signature and expiry check. Every failure mode looks the same to the
/// caller; the reason is never surfaced to the client.
pub fn verify_session_token(
    token: &str,
    config: &Config,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    // Tokens are good strictly until `exp`, with no grace window.
    validation.leeway = 0;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

/// Direct comparison against the configured admin secret. Empty input counts
/// as a mismatch.
pub fn verify_admin_password(config: &Config, candidate: &str) -> bool {
    !candidate.is_empty() && candidate == config.admin_password
}

/// `Set-Cookie` value for a fresh session. Max-Age tracks the token lifetime
/// so cookie and token expire together.
pub fn session_cookie(token: &str, config: &Config) -> String {
    let mut cookie = format!(
        "{AUTH_COOKIE}={token}; Path=/; HttpOnly; SameSite=Strict; Max-Age={}",
        config.session_ttl_secs
    );
    if config.is_production() {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that overwrites the session cookie with an expired
/// one. The token itself stays cryptographically valid until its own expiry.
pub fn clear_session_cookie(config: &Config) -> String {
    let mut cookie = format!("{AUTH_COOKIE}=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0");
    if config.is_production() {
        cookie.push_str("; Secure");
    }
    cookie
}

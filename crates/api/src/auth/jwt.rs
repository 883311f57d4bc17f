//! Access tokens for the admin dashboard.
//!
//! Tokens are HS256 JWTs signed with `JWT_SECRET`. There are no refresh
//! tokens: the dashboard logs in again once `exp` passes.

use bakehouse_core::types::DbId;
use chrono::{TimeDelta, Utc};
use jsonwebtoken::{errors::Error as JwtError, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 60;

/// Payload carried by every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: DbId,
    /// `ADMIN` or `USER`.
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    /// Random per-token id, useful when correlating logs.
    pub jti: String,
}

impl Claims {
    fn new(user_id: DbId, role: &str, lifetime: TimeDelta) -> Self {
        let issued_at = Utc::now();
        Self {
            sub: user_id,
            role: role.to_owned(),
            exp: (issued_at + lifetime).timestamp(),
            iat: issued_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }
}

/// Signing secret and token lifetime.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
}

impl JwtConfig {
    /// Read `JWT_SECRET` (required, non-empty) and `JWT_ACCESS_EXPIRY_MINS`
    /// (default 60).
    ///
    /// # Panics
    ///
    /// On a missing or empty secret, or a lifetime that is not a positive
    /// integer.
    pub fn from_env() -> Self {
        let secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ => panic!("JWT_SECRET must be set to a non-empty value"),
        };

        let access_token_expiry_mins = match std::env::var("JWT_ACCESS_EXPIRY_MINS") {
            Ok(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|mins| *mins > 0)
                .unwrap_or_else(|| panic!("JWT_ACCESS_EXPIRY_MINS must be a positive integer, got {raw:?}")),
            Err(_) => DEFAULT_ACCESS_EXPIRY_MINS,
        };

        Self {
            secret,
            access_token_expiry_mins,
        }
    }

    /// Token lifetime in seconds, reported to clients as `expiresIn`.
    pub fn access_token_expiry_secs(&self) -> i64 {
        self.lifetime().num_seconds()
    }

    fn lifetime(&self) -> TimeDelta {
        TimeDelta::minutes(self.access_token_expiry_mins)
    }
}

/// A freshly signed token and its lifetime in seconds.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

/// Sign an access token for `user_id` with the given role.
pub fn issue_access_token(
    user_id: DbId,
    role: &str,
    config: &JwtConfig,
) -> Result<IssuedToken, JwtError> {
    let claims = Claims::new(user_id, role, config.lifetime());
    let token = jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(IssuedToken {
        token,
        expires_in: config.access_token_expiry_secs(),
    })
}

/// Verify signature and expiry and return the claims.
pub fn decode_access_token(token: &str, config: &JwtConfig) -> Result<Claims, JwtError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}

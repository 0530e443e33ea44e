use crate::auth::config::AuthConfig;
use crate::models::enums::Role;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, thiserror::Error)]
pub enum SessionTokenError {
    #[error("verification error: {0}")]
    Verify(String),
}

#[derive(Serialize, Deserialize)]
struct SessionClaims {
    iss: String,
    sub: String, // user_id
    role: Role,
    iat: u64,
    exp: u64,
}

pub fn issue_session_token(
    user_id: i32,
    role: Role,
    cfg: &AuthConfig,
) -> Result<String, SessionTokenError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let claims = SessionClaims {
        iss: cfg.issuer.clone(),
        sub: user_id.to_string(),
        role,
        iat: now,
        exp: now + cfg.expiry_secs,
    };
    let header = Header::new(Algorithm::HS256);
    encode(
        &header,
        &claims,
        &EncodingKey::from_secret(cfg.secret.as_bytes()),
    )
    .map_err(|e| SessionTokenError::Verify(e.to_string()))
}

pub fn verify_session_token(
    token: &str,
    cfg: &AuthConfig,
) -> Result<(i32, Role), SessionTokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[cfg.issuer.as_str()]);
    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(cfg.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| SessionTokenError::Verify(e.to_string()))?;
    let user_id: i32 = data
        .claims
        .sub
        .parse()
        .map_err(|e| SessionTokenError::Verify(format!("invalid sub: {e}")))?;
    Ok((user_id, data.claims.role))
}

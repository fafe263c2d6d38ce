use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: Uuid,       // vendor id
    pub username: String,
    pub token_type: TokenType,
    pub exp: i64,        // expiration timestamp
    pub iat: i64,        // issued at timestamp
}

fn create_token(
    vendor_id: Uuid,
    username: &str,
    token_type: TokenType,
    lifetime: Duration,
    secret: &str,
) -> AppResult<String> {
    let now = Utc::now();
    let exp = now + lifetime;

    let claims = Claims {
        sub: vendor_id,
        username: username.to_string(),
        token_type,
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
}

pub fn create_access_token(
    vendor_id: Uuid,
    username: &str,
    secret: &str,
    lifetime_minutes: i64,
) -> AppResult<String> {
    create_token(
        vendor_id,
        username,
        TokenType::Access,
        Duration::minutes(lifetime_minutes),
        secret,
    )
}

pub fn create_refresh_token(
    vendor_id: Uuid,
    username: &str,
    secret: &str,
    lifetime_hours: i64,
) -> AppResult<String> {
    create_token(
        vendor_id,
        username,
        TokenType::Refresh,
        Duration::hours(lifetime_hours),
        secret,
    )
}

pub fn verify_token(token: &str, secret: &str, expected: TokenType) -> AppResult<Claims> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

    if claims.token_type != expected {
        return Err(AppError::Unauthorized("Wrong token type".to_string()));
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn access_token_round_trip() {
        let id = Uuid::new_v4();
        let token = create_access_token(id, "acme", SECRET, 60).unwrap();
        let claims = verify_token(&token, SECRET, TokenType::Access).unwrap();

        assert_eq!(claims.sub, id);
        assert_eq!(claims.username, "acme");
        assert_eq!(claims.token_type, TokenType::Access);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = create_access_token(Uuid::new_v4(), "acme", SECRET, 60).unwrap();
        let result = verify_token(&token, "other-secret", TokenType::Access);

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn refresh_token_cannot_be_used_as_access() {
        let token = create_refresh_token(Uuid::new_v4(), "acme", SECRET, 24).unwrap();
        let result = verify_token(&token, SECRET, TokenType::Access);

        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}

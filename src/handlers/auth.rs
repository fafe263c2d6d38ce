use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use axum::{extract::State, Json};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::{Deserialize, Serialize};

use crate::entities::vendor;
use crate::error::{AppError, AppResult};
use crate::utils::jwt::{create_access_token, create_refresh_token, verify_token, TokenType};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

#[derive(Debug, Serialize)]
pub struct AccessTokenResponse {
    pub access: String,
}

/// Issue an access/refresh token pair for valid vendor credentials
pub async fn obtain_token(
    State(state): State<AppState>,
    Json(payload): Json<TokenRequest>,
) -> AppResult<Json<TokenPairResponse>> {
    let vendor = vendor::Entity::find()
        .filter(vendor::Column::Username.eq(&payload.username))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

    let parsed_hash = PasswordHash::new(&vendor.password_hash)
        .map_err(|e| AppError::Internal(format!("Failed to parse password hash: {}", e)))?;

    Argon2::default()
        .verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized("Invalid username or password".to_string()))?;

    let access = create_access_token(
        vendor.id,
        &vendor.username,
        &state.config.jwt_secret,
        state.config.access_token_minutes,
    )?;
    let refresh = create_refresh_token(
        vendor.id,
        &vendor.username,
        &state.config.jwt_secret,
        state.config.refresh_token_hours,
    )?;

    Ok(Json(TokenPairResponse { access, refresh }))
}

/// Exchange a valid refresh token for a new access token
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> AppResult<Json<AccessTokenResponse>> {
    let claims = verify_token(
        &payload.refresh,
        &state.config.jwt_secret,
        TokenType::Refresh,
    )?;

    let access = create_access_token(
        claims.sub,
        &claims.username,
        &state.config.jwt_secret,
        state.config.access_token_minutes,
    )?;

    Ok(Json(AccessTokenResponse { access }))
}

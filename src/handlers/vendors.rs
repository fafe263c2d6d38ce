use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::vendor;
use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateVendorRequest {
    pub username: String,
    pub password: String,
    pub company_name: String,
    pub profile_image: Option<String>,
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateVendorRequest {
    pub company_name: Option<String>,
    pub profile_image: Option<String>,
    pub rating: Option<f64>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VendorResponse {
    pub id: Uuid,
    pub username: String,
    pub company_name: String,
    pub profile_image: Option<String>,
    pub rating: f64,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

impl From<vendor::Model> for VendorResponse {
    fn from(v: vendor::Model) -> Self {
        Self {
            id: v.id,
            username: v.username,
            company_name: v.company_name,
            profile_image: v.profile_image,
            rating: v.rating,
            location: v.location,
            created_at: v.created_at.with_timezone(&Utc),
        }
    }
}

/// List all vendors
pub async fn list_vendors(State(state): State<AppState>) -> AppResult<Json<Vec<VendorResponse>>> {
    let vendors = vendor::Entity::find().all(&state.db).await?;

    Ok(Json(vendors.into_iter().map(Into::into).collect()))
}

/// Get a vendor by id
pub async fn get_vendor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<VendorResponse>> {
    let vendor = vendor::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Vendor not found".to_string()))?;

    Ok(Json(vendor.into()))
}

/// Create a vendor account
pub async fn create_vendor(
    State(state): State<AppState>,
    Json(payload): Json<CreateVendorRequest>,
) -> AppResult<Json<VendorResponse>> {
    let existing = vendor::Entity::find()
        .filter(vendor::Column::Username.eq(&payload.username))
        .one(&state.db)
        .await?;

    if existing.is_some() {
        return Err(AppError::Conflict("Username already taken".to_string()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(payload.password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();

    let new_vendor = vendor::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(payload.username),
        password_hash: Set(password_hash),
        company_name: Set(payload.company_name),
        profile_image: Set(payload.profile_image),
        rating: Set(0.0),
        location: Set(payload.location),
        ..Default::default()
    };

    let vendor = new_vendor.insert(&state.db).await?;
    Ok(Json(vendor.into()))
}

/// Update a vendor (partial)
pub async fn update_vendor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateVendorRequest>,
) -> AppResult<Json<VendorResponse>> {
    let vendor = vendor::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Vendor not found".to_string()))?;

    let mut active: vendor::ActiveModel = vendor.into();

    if let Some(company_name) = payload.company_name {
        active.company_name = Set(company_name);
    }

    if let Some(profile_image) = payload.profile_image {
        active.profile_image = Set(Some(profile_image));
    }

    if let Some(rating) = payload.rating {
        if rating < 0.0 {
            return Err(AppError::Validation("Rating must not be negative".to_string()));
        }
        active.rating = Set(rating);
    }

    if let Some(location) = payload.location {
        active.location = Set(location);
    }

    let updated = active.update(&state.db).await?;
    Ok(Json(updated.into()))
}

/// Delete a vendor; its services and their availability, bookings and
/// reviews go with it via the cascade rules.
pub async fn delete_vendor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let result = vendor::Entity::delete_by_id(id).exec(&state.db).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Vendor not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "Vendor deleted" })))
}

use axum::{
    extract::{Path, State},
    Json,
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;

use crate::entities::{service, vendor};
use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateServiceRequest {
    pub vendor_id: Uuid,
    pub name: String,
    pub category: String,
    pub price: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
}

/// List all services
pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<Vec<service::Model>>> {
    let services = service::Entity::find().all(&state.db).await?;
    Ok(Json(services))
}

/// Get a service by id
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<service::Model>> {
    let service = service::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

    Ok(Json(service))
}

/// Create a service for a vendor
pub async fn create_service(
    State(state): State<AppState>,
    Json(payload): Json<CreateServiceRequest>,
) -> AppResult<Json<service::Model>> {
    vendor::Entity::find_by_id(payload.vendor_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Vendor not found".to_string()))?;

    if payload.price <= 0.0 {
        return Err(AppError::Validation("Price must be positive".to_string()));
    }

    let new_service = service::ActiveModel {
        id: Set(Uuid::new_v4()),
        vendor_id: Set(payload.vendor_id),
        name: Set(payload.name),
        category: Set(payload.category),
        price: Set(payload.price),
    };

    let service = new_service.insert(&state.db).await?;
    Ok(Json(service))
}

/// Update a service (partial)
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServiceRequest>,
) -> AppResult<Json<service::Model>> {
    let service = service::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

    let mut active: service::ActiveModel = service.into();

    if let Some(name) = payload.name {
        active.name = Set(name);
    }

    if let Some(category) = payload.category {
        active.category = Set(category);
    }

    if let Some(price) = payload.price {
        if price <= 0.0 {
            return Err(AppError::Validation("Price must be positive".to_string()));
        }
        active.price = Set(price);
    }

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}

/// Delete a service (cascades to availability, bookings and reviews)
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let result = service::Entity::delete_by_id(id).exec(&state.db).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Service not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "Service deleted" })))
}

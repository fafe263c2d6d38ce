use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::Deserialize;
use uuid::Uuid;

use crate::entities::{availability, service};
use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateAvailabilityRequest {
    pub service_id: Uuid,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_blocked: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAvailabilityRequest {
    pub date: Option<NaiveDate>,
    pub is_blocked: Option<bool>,
}

/// List all availability records
pub async fn list_availability(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<availability::Model>>> {
    let records = availability::Entity::find().all(&state.db).await?;
    Ok(Json(records))
}

/// Get an availability record by id
pub async fn get_availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<availability::Model>> {
    let record = availability::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Availability record not found".to_string()))?;

    Ok(Json(record))
}

/// Create an availability record for a service date
pub async fn create_availability(
    State(state): State<AppState>,
    Json(payload): Json<CreateAvailabilityRequest>,
) -> AppResult<Json<availability::Model>> {
    service::Entity::find_by_id(payload.service_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

    // One record per (service, date)
    let existing = availability::Entity::find()
        .filter(availability::Column::ServiceId.eq(payload.service_id))
        .filter(availability::Column::Date.eq(payload.date))
        .one(&state.db)
        .await?;

    if existing.is_some() {
        return Err(AppError::Conflict(
            "Availability already recorded for this date".to_string(),
        ));
    }

    let new_record = availability::ActiveModel {
        id: Set(Uuid::new_v4()),
        service_id: Set(payload.service_id),
        date: Set(payload.date),
        is_blocked: Set(payload.is_blocked),
    };

    let record = new_record.insert(&state.db).await?;
    Ok(Json(record))
}

/// Update an availability record (partial)
pub async fn update_availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAvailabilityRequest>,
) -> AppResult<Json<availability::Model>> {
    let record = availability::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Availability record not found".to_string()))?;

    let service_id = record.service_id;
    let mut active: availability::ActiveModel = record.into();

    if let Some(date) = payload.date {
        let duplicate = availability::Entity::find()
            .filter(availability::Column::ServiceId.eq(service_id))
            .filter(availability::Column::Date.eq(date))
            .filter(availability::Column::Id.ne(id))
            .one(&state.db)
            .await?;

        if duplicate.is_some() {
            return Err(AppError::Conflict(
                "Availability already recorded for this date".to_string(),
            ));
        }

        active.date = Set(date);
    }

    if let Some(is_blocked) = payload.is_blocked {
        active.is_blocked = Set(is_blocked);
    }

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}

/// Delete an availability record
pub async fn delete_availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let result = availability::Entity::delete_by_id(id).exec(&state.db).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Availability record not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "Availability record deleted" })))
}

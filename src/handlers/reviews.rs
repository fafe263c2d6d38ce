use axum::{
    extract::{Path, State},
    Json,
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde::Deserialize;
use uuid::Uuid;

use crate::entities::{review, service};
use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub service_id: Uuid,
    pub reviewer_name: String,
    pub rating: i32,
    pub comment: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateReviewRequest {
    pub reviewer_name: Option<String>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

/// List all reviews
pub async fn list_reviews(State(state): State<AppState>) -> AppResult<Json<Vec<review::Model>>> {
    let reviews = review::Entity::find().all(&state.db).await?;
    Ok(Json(reviews))
}

/// Get a review by id
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<review::Model>> {
    let review = review::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

    Ok(Json(review))
}

/// Create a review for a service
pub async fn create_review(
    State(state): State<AppState>,
    Json(payload): Json<CreateReviewRequest>,
) -> AppResult<Json<review::Model>> {
    service::Entity::find_by_id(payload.service_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

    let new_review = review::ActiveModel {
        id: Set(Uuid::new_v4()),
        service_id: Set(payload.service_id),
        reviewer_name: Set(payload.reviewer_name),
        rating: Set(payload.rating),
        comment: Set(payload.comment),
    };

    let review = new_review.insert(&state.db).await?;
    Ok(Json(review))
}

/// Update a review (partial)
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateReviewRequest>,
) -> AppResult<Json<review::Model>> {
    let review = review::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

    let mut active: review::ActiveModel = review.into();

    if let Some(reviewer_name) = payload.reviewer_name {
        active.reviewer_name = Set(reviewer_name);
    }

    if let Some(rating) = payload.rating {
        active.rating = Set(rating);
    }

    if let Some(comment) = payload.comment {
        active.comment = Set(comment);
    }

    let updated = active.update(&state.db).await?;
    Ok(Json(updated))
}

/// Delete a review
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let result = review::Entity::delete_by_id(id).exec(&state.db).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Review not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "Review deleted" })))
}

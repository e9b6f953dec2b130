// src/handlers/reviews.rs

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::review::{CreateReview, ReportReview},
    store::Store,
    utils::{extract::ValidatedJson, jwt::Claims},
};

/// Create a new review. One review per user and campsite.
pub async fn create_review(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(payload): ValidatedJson<CreateReview>,
) -> Result<impl IntoResponse, AppError> {
    let review = store.create_review(claims.user_id()?, payload).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// Toggle the caller's helpful vote on a review.
pub async fn toggle_helpful(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    Path(review_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let state = store.toggle_helpful(claims.user_id()?, review_id).await?;
    Ok(Json(state))
}

/// Report a review to the moderators.
pub async fn report_review(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    Path(review_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<ReportReview>,
) -> Result<impl IntoResponse, AppError> {
    store
        .report_review(claims.user_id()?, review_id, payload)
        .await?;
    Ok(StatusCode::CREATED)
}

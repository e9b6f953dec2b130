// src/handlers/admin.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::admin::{CampsiteApprovalAction, OwnerRequestAction, ReviewModerationAction},
    store::Store,
    utils::extract::ValidatedJson,
};

/// Approves or rejects a pending campsite listing.
/// Admin only.
pub async fn review_campsite(
    State(store): State<Arc<dyn Store>>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CampsiteApprovalAction>,
) -> Result<impl IntoResponse, AppError> {
    let campsite = store.review_campsite(id, payload).await.map_err(|e| {
        tracing::warn!("Failed to review campsite {}: {}", id, e);
        e
    })?;

    Ok(Json(campsite))
}

/// Approves or rejects a pending owner request.
/// Admin only.
pub async fn review_owner_request(
    State(store): State<Arc<dyn Store>>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<OwnerRequestAction>,
) -> Result<impl IntoResponse, AppError> {
    let request = store.review_owner_request(id, payload).await.map_err(|e| {
        tracing::warn!("Failed to review owner request {}: {}", id, e);
        e
    })?;

    Ok(Json(request))
}

/// Hides, unhides, deletes or dismisses reports on a review.
/// Admin only. Deleting answers 204.
pub async fn moderate_review(
    State(store): State<Arc<dyn Store>>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<ReviewModerationAction>,
) -> Result<Response, AppError> {
    let review = store.moderate_review(id, payload).await.map_err(|e| {
        tracing::warn!("Failed to moderate review {}: {}", id, e);
        e
    })?;

    Ok(match review {
        Some(review) => Json(review).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

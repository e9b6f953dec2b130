// src/handlers/inquiries.rs

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
    models::inquiry::{CreateInquiry, UpdateInquiryStatus},
    store::Store,
    utils::{
        extract::ValidatedJson,
        jwt::{Claims, MaybeClaims},
    },
};

/// Send an inquiry to a campsite owner.
/// Guests may inquire; signed-in senders are linked to their account.
pub async fn create_inquiry(
    State(store): State<Arc<dyn Store>>,
    MaybeClaims(claims): MaybeClaims,
    ValidatedJson(payload): ValidatedJson<CreateInquiry>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = claims.as_ref().map(Claims::user_id).transpose()?;

    let inquiry = store.create_inquiry(user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(inquiry)))
}

/// Update the status of an inquiry.
/// Requires: Login + (Campsite Owner OR Admin).
pub async fn update_inquiry_status(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateInquiryStatus>,
) -> Result<impl IntoResponse, AppError> {
    let inquiry = store
        .update_inquiry_status(claims.actor()?, id, payload)
        .await?;
    Ok(Json(inquiry))
}

// src/handlers/owner_requests.rs

use std::sync::Arc;

use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    error::AppError,
    models::owner_request::CreateOwnerRequest,
    store::Store,
    utils::{extract::ValidatedJson, jwt::Claims},
};

/// Ask to become a campsite owner. One pending request per user.
pub async fn create_owner_request(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(payload): ValidatedJson<CreateOwnerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let request = store
        .create_owner_request(claims.user_id()?, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(request)))
}

// src/handlers/wishlist.rs

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
    models::wishlist::AddToWishlist,
    store::Store,
    utils::{extract::ValidatedJson, jwt::Claims},
};

/// List the caller's wishlist, most recent first.
pub async fn list_wishlist(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, AppError> {
    let items = store.list_wishlist(claims.user_id()?).await?;
    Ok(Json(items))
}

/// Save a campsite to the wishlist.
pub async fn add_to_wishlist(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(payload): ValidatedJson<AddToWishlist>,
) -> Result<impl IntoResponse, AppError> {
    let item = store.add_to_wishlist(claims.user_id()?, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Remove a campsite from the wishlist.
pub async fn remove_from_wishlist(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    Path(campsite_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    store
        .remove_from_wishlist(claims.user_id()?, campsite_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

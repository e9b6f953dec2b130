// src/handlers/campsites.rs

use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{campsite::CreateCampsite, search::SearchFilters, wishlist::CompareCampsites},
    store::Store,
    utils::{
        extract::{ValidatedJson, ValidatedQuery},
        jwt::{Claims, ROLE_ADMIN, ROLE_OWNER},
    },
};

/// Search approved campsites.
/// Query keys follow the search page URL (`q`, `types`, `minPrice`, ...).
pub async fn search_campsites(
    State(store): State<Arc<dyn Store>>,
    ValidatedQuery(filters): ValidatedQuery<SearchFilters>,
) -> Result<impl IntoResponse, AppError> {
    let page = store.search_campsites(&filters).await?;
    Ok(Json(page))
}

/// Query parameters for the compare view.
#[derive(Debug, Deserialize)]
pub struct CompareParams {
    /// Comma-joined campsite ids.
    pub ids: Option<String>,
}

/// Side-by-side data for two or three campsites.
pub async fn compare_campsites(
    State(store): State<Arc<dyn Store>>,
    Query(params): Query<CompareParams>,
) -> Result<impl IntoResponse, AppError> {
    let compare = CompareCampsites::parse(params.ids.as_deref().unwrap_or_default())?;
    let campsites = store.compare_campsites(&compare.ids).await?;
    Ok(Json(campsites))
}

/// Get a single approved campsite by ID.
pub async fn get_campsite(
    State(store): State<Arc<dyn Store>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let campsite = store.get_campsite(id).await?;
    Ok(Json(campsite))
}

/// Submit a new listing for approval.
/// Requires: Login + (Owner OR Admin Role).
pub async fn create_campsite(
    State(store): State<Arc<dyn Store>>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(payload): ValidatedJson<CreateCampsite>,
) -> Result<impl IntoResponse, AppError> {
    if claims.role != ROLE_OWNER && claims.role != ROLE_ADMIN {
        return Err(AppError::Forbidden(
            "Only campsite owners can list campsites".to_string(),
        ));
    }

    let campsite = store.create_campsite(claims.user_id()?, payload).await?;
    Ok((StatusCode::CREATED, Json(campsite)))
}

// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{delete, get, post, put},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{admin, campsites, inquiries, owner_requests, reviews, wishlist},
    state::AppState,
    utils::jwt::{admin_middleware, auth_middleware, optional_auth_middleware},
};

/// Assembles the main application router.
///
/// * Merges all sub-routers (campsites, inquiries, reviews, wishlist, owner requests, admin).
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Store + Config).
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let auth = middleware::from_fn_with_state(state.clone(), auth_middleware);

    let campsite_routes = Router::new()
        .route(
            "/",
            // Searching is public, listing a campsite is not
            get(campsites::search_campsites)
                .merge(post(campsites::create_campsite).layer(auth.clone())),
        )
        .route("/compare", get(campsites::compare_campsites))
        .route("/{id}", get(campsites::get_campsite));

    let inquiry_routes = Router::new()
        .route(
            "/",
            post(inquiries::create_inquiry).layer(middleware::from_fn_with_state(
                state.clone(),
                optional_auth_middleware,
            )),
        )
        .merge(
            Router::new()
                .route("/{id}/status", put(inquiries::update_inquiry_status))
                .layer(auth.clone()),
        );

    let review_routes = Router::new()
        .route("/", post(reviews::create_review))
        .route("/{id}/helpful", post(reviews::toggle_helpful))
        .route("/{id}/report", post(reviews::report_review))
        .layer(auth.clone());

    let wishlist_routes = Router::new()
        .route(
            "/",
            get(wishlist::list_wishlist).post(wishlist::add_to_wishlist),
        )
        .route("/{campsite_id}", delete(wishlist::remove_from_wishlist))
        .layer(auth.clone());

    let owner_request_routes = Router::new()
        .route("/", post(owner_requests::create_owner_request))
        .layer(auth.clone());

    let admin_routes = Router::new()
        .route("/campsites/{id}/review", post(admin::review_campsite))
        .route("/owner-requests/{id}", post(admin::review_owner_request))
        .route("/reviews/{id}/moderate", post(admin::moderate_review))
        // Double middleware protection: Auth first, then Admin check
        .layer(middleware::from_fn(admin_middleware))
        .layer(auth);

    Router::new()
        .nest("/api/campsites", campsite_routes)
        .nest("/api/inquiries", inquiry_routes)
        .nest("/api/reviews", review_routes)
        .nest("/api/wishlist", wishlist_routes)
        .nest("/api/owner-requests", owner_request_routes)
        .nest("/api/admin", admin_routes)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

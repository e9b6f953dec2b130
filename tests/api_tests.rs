// tests/api_tests.rs

use std::sync::Arc;

use campsite_backend::{
    config::Config,
    models::{
        campsite::Campsite,
        enums::{ApprovalStatus, CampsiteType},
    },
    routes,
    state::AppState,
    store::MemoryStore,
    utils::jwt::{ROLE_ADMIN, ROLE_OWNER, ROLE_USER, sign_jwt, verify_jwt},
};
use chrono::Utc;
use serde_json::{Value, json};
use uuid::Uuid;

const JWT_SECRET: &str = "test_secret_for_integration_tests";

struct TestApp {
    address: String,
    store: Arc<MemoryStore>,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// Adds an approved campsite straight to the store.
    async fn seed_campsite(&self, name: &str, campsite_type: CampsiteType, min_price: f64) -> Uuid {
        let campsite = Campsite {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            name: name.to_string(),
            description: format!("{name} sits by the river with shaded pitches."),
            province_id: 38,
            province_slug: Some("chiang-mai".to_string()),
            campsite_type,
            address: None,
            latitude: None,
            longitude: None,
            min_price,
            max_price: min_price * 2.0,
            amenities: vec!["wifi".to_string()],
            phone: None,
            email: None,
            website: None,
            average_rating: 0.0,
            review_count: 0,
            is_featured: false,
            status: ApprovalStatus::Approved,
            rejection_reason: None,
            created_at: Utc::now(),
        };
        let id = campsite.id;
        self.store.insert_campsite(campsite).await;
        id
    }
}

fn token(role: &str) -> (Uuid, String) {
    let id = Uuid::new_v4();
    let token = sign_jwt(id, role, JWT_SECRET, 600).expect("Failed to sign token");
    (id, token)
}

/// Helper function to spawn the app on a random port for testing.
async fn spawn_app() -> TestApp {
    let config = Config {
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        jwt_secret: JWT_SECRET.to_string(),
        rust_log: "error".to_string(),
        log_dir: "logs".to_string(),
        cors_origins: vec!["http://localhost:3000".to_string()],
        strict_calendar_dates: false,
    };

    let store = Arc::new(MemoryStore::new());
    let state = AppState {
        store: store.clone(),
        config,
    };
    let app = routes::create_router(state);

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        store,
        client: reqwest::Client::new(),
    }
}

fn field_paths(body: &Value) -> Vec<String> {
    body["fields"]
        .as_array()
        .map(|fields| {
            fields
                .iter()
                .filter_map(|f| f["path"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn unknown_path_is_404() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(app.url("/random_path_that_does_not_exist"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn search_filters_and_paginates() {
    let app = spawn_app().await;
    app.seed_campsite("Pine Ridge", CampsiteType::Camping, 300.0).await;
    app.seed_campsite("Cloud Tents", CampsiteType::Glamping, 2500.0).await;
    app.seed_campsite("Log Cabin", CampsiteType::Cabin, 1800.0).await;

    let body: Value = app
        .client
        .get(app.url("/api/campsites?types=glamping,cabin&sort=price_asc"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["total"], 2);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 12);
    assert_eq!(body["items"][0]["name"], "Log Cabin");
    assert_eq!(body["items"][1]["name"], "Cloud Tents");

    let body: Value = app
        .client
        .get(app.url("/api/campsites?limit=1&page=2&sort=price_asc"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["total_pages"], 3);
    assert_eq!(body["items"][0]["name"], "Log Cabin");
}

#[tokio::test]
async fn search_rejects_invalid_filters_with_every_field() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(app.url("/api/campsites?page=0&types=hotel&minRating=9"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Validation failed");
    let paths = field_paths(&body);
    for path in ["page", "types", "minRating"] {
        assert!(paths.iter().any(|p| p == path), "missing {path} in {paths:?}");
    }
}

#[tokio::test]
async fn compare_validates_the_id_list() {
    let app = spawn_app().await;
    let a = app.seed_campsite("River Bend", CampsiteType::Camping, 200.0).await;
    let b = app.seed_campsite("Hilltop", CampsiteType::Bungalow, 900.0).await;

    let response = app
        .client
        .get(app.url(&format!("/api/campsites/compare?ids={a}")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["fields"][0]["path"], "ids");
    assert_eq!(
        body["fields"][0]["message"],
        "At least 2 campsites are required for comparison"
    );

    let body: Value = app
        .client
        .get(app.url(&format!("/api/campsites/compare?ids={b},{a}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body[0]["name"], "Hilltop");
    assert_eq!(body[1]["name"], "River Bend");
}

#[tokio::test]
async fn campsite_listing_goes_through_approval() {
    let app = spawn_app().await;
    let (_, owner) = token(ROLE_OWNER);
    let (_, user) = token(ROLE_USER);
    let (_, admin) = token(ROLE_ADMIN);
    let listing = json!({
        "name": "Mae Kampong Camp",
        "description": "Terraced pitches in a coffee village, cool nights all year.",
        "province_id": 38,
        "campsite_type": "camping",
        "min_price": 400,
        "max_price": 800,
    });

    // Anonymous and plain users cannot list
    let response = app.client.post(app.url("/api/campsites")).json(&listing).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 401);
    let response = app
        .client
        .post(app.url("/api/campsites"))
        .bearer_auth(&user)
        .json(&listing)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 403);

    let response = app
        .client
        .post(app.url("/api/campsites"))
        .bearer_auth(&owner)
        .json(&listing)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["status"], "pending");
    let id = created["id"].as_str().unwrap().to_string();

    // Pending listings are invisible
    let response = app.client.get(app.url(&format!("/api/campsites/{id}"))).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);

    // Owners are not admins
    let response = app
        .client
        .post(app.url(&format!("/api/admin/campsites/{id}/review")))
        .bearer_auth(&owner)
        .json(&json!({ "action": "approve" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 403);

    let response = app
        .client
        .post(app.url(&format!("/api/admin/campsites/{id}/review")))
        .bearer_auth(&admin)
        .json(&json!({ "action": "reject" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let response = app
        .client
        .post(app.url(&format!("/api/admin/campsites/{id}/review")))
        .bearer_auth(&admin)
        .json(&json!({ "action": "approve" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let response = app.client.get(app.url(&format!("/api/campsites/{id}"))).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    // A decision is final
    let response = app
        .client
        .post(app.url(&format!("/api/admin/campsites/{id}/review")))
        .bearer_auth(&admin)
        .json(&json!({ "action": "approve" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn guests_can_send_inquiries() {
    let app = spawn_app().await;
    let campsite_id = app.seed_campsite("Lakeside", CampsiteType::TentedResort, 1200.0).await;

    let response = app
        .client
        .post(app.url("/api/inquiries"))
        .json(&json!({
            "campsite_id": campsite_id,
            "guest_name": "Malee",
            "guest_email": "malee@example.com",
            "guest_phone": "081-234-5678",
            "inquiry_type": "booking",
            "message": "Is the lakeside tent free on the first weekend of March?",
            "check_in_date": "2026-03-06",
            "check_out_date": "2026-03-08",
            "guest_count": "2",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["guest_phone"], "0812345678");
    assert_eq!(body["status"], "new");
    assert_eq!(body["user_id"], Value::Null);
}

#[tokio::test]
async fn inquiry_errors_are_listed_per_field() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/inquiries"))
        .json(&json!({
            "campsite_id": "not-a-uuid",
            "guest_name": "M",
            "guest_email": "nope",
            "message": "short",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let paths = field_paths(&response.json().await.unwrap());
    for path in ["campsite_id", "guest_name", "guest_email", "message"] {
        assert!(paths.iter().any(|p| p == path), "missing {path} in {paths:?}");
    }
}

#[tokio::test]
async fn inquiry_with_bad_token_is_rejected() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/inquiries"))
        .bearer_auth("garbage")
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn malformed_json_is_a_plain_bad_request() {
    let app = spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/inquiries"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["fields"], Value::Null);
}

#[tokio::test]
async fn reviews_votes_and_moderation() {
    let app = spawn_app().await;
    let campsite_id = app.seed_campsite("Waterfall Camp", CampsiteType::Camping, 250.0).await;
    let (_, author) = token(ROLE_USER);
    let (_, reader) = token(ROLE_USER);
    let (_, admin) = token(ROLE_ADMIN);
    let review = json!({
        "campsite_id": campsite_id,
        "rating_overall": 4,
        "reviewer_type": "couple",
        "content": "Loud waterfall at night but the sunrise was worth it.",
    });

    let response = app
        .client
        .post(app.url("/api/reviews"))
        .bearer_auth(&author)
        .json(&review)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let review_id = response.json::<Value>().await.unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    // One review per user and campsite
    let response = app
        .client
        .post(app.url("/api/reviews"))
        .bearer_auth(&author)
        .json(&review)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 409);

    let campsite: Value = app
        .client
        .get(app.url(&format!("/api/campsites/{campsite_id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(campsite["review_count"], 1);
    assert_eq!(campsite["average_rating"], 4.0);

    // Helpful votes toggle
    let helpful = app.url(&format!("/api/reviews/{review_id}/helpful"));
    let vote: Value = app.client.post(&helpful).bearer_auth(&reader).send().await.unwrap().json().await.unwrap();
    assert_eq!(vote, json!({ "count": 1, "voted": true }));
    let vote: Value = app.client.post(&helpful).bearer_auth(&reader).send().await.unwrap().json().await.unwrap();
    assert_eq!(vote, json!({ "count": 0, "voted": false }));

    // Reports are one per user
    let report = app.url(&format!("/api/reviews/{review_id}/report"));
    let response = app
        .client
        .post(&report)
        .bearer_auth(&reader)
        .json(&json!({ "reason": "spam" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let response = app
        .client
        .post(&report)
        .bearer_auth(&reader)
        .json(&json!({ "reason": "spam" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 409);

    // Hiding needs a reason and drops the review from the rating
    let moderate = app.url(&format!("/api/admin/reviews/{review_id}/moderate"));
    let response = app
        .client
        .post(&moderate)
        .bearer_auth(&admin)
        .json(&json!({ "action": "hide" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let hidden: Value = app
        .client
        .post(&moderate)
        .bearer_auth(&admin)
        .json(&json!({ "action": "hide", "hide_reason": "Reported as spam" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(hidden["is_hidden"], true);

    let campsite: Value = app
        .client
        .get(app.url(&format!("/api/campsites/{campsite_id}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(campsite["review_count"], 0);

    let response = app
        .client
        .post(&moderate)
        .bearer_auth(&admin)
        .json(&json!({ "action": "delete" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);
}

#[tokio::test]
async fn wishlist_add_list_remove() {
    let app = spawn_app().await;
    let campsite_id = app.seed_campsite("Star Field", CampsiteType::Glamping, 3000.0).await;
    let (user_id, user) = token(ROLE_USER);

    let response = app.client.get(app.url("/api/wishlist")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 401);

    let add = json!({ "campsite_id": campsite_id, "notes": "Anniversary?" });
    let response = app
        .client
        .post(app.url("/api/wishlist"))
        .bearer_auth(&user)
        .json(&add)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);

    let response = app
        .client
        .post(app.url("/api/wishlist"))
        .bearer_auth(&user)
        .json(&add)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 409);

    let items: Value = app
        .client
        .get(app.url("/api/wishlist"))
        .bearer_auth(&user)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(items.as_array().map(Vec::len), Some(1));
    assert_eq!(items[0]["user_id"], user_id.to_string());

    let remove = app.url(&format!("/api/wishlist/{campsite_id}"));
    let response = app.client.delete(&remove).bearer_auth(&user).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 204);
    let response = app.client.delete(&remove).bearer_auth(&user).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn owner_requests_are_reviewed_by_admins() {
    let app = spawn_app().await;
    let (_, user) = token(ROLE_USER);
    let (_, admin) = token(ROLE_ADMIN);

    let response = app
        .client
        .post(app.url("/api/owner-requests"))
        .bearer_auth(&user)
        .json(&json!({ "business_name": "Doi Camp", "contact_phone": "0531234567" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let id = response.json::<Value>().await.unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .client
        .post(app.url("/api/owner-requests"))
        .bearer_auth(&user)
        .json(&json!({ "business_name": "Doi Camp", "contact_phone": "0531234567" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 409);

    let reviewed: Value = app
        .client
        .post(app.url(&format!("/api/admin/owner-requests/{id}")))
        .bearer_auth(&admin)
        .json(&json!({
            "action": "reject",
            "rejection_reason": "Business registration is missing",
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(reviewed["status"], "rejected");
    assert_eq!(reviewed["rejection_reason"], "Business registration is missing");
}

#[tokio::test]
async fn only_the_owner_updates_an_inquiry() {
    let app = spawn_app().await;
    let (owner_id, owner) = token(ROLE_OWNER);
    let (_, stranger) = token(ROLE_OWNER);

    let campsite_id = Uuid::new_v4();
    app.store
        .insert_campsite(Campsite {
            id: campsite_id,
            owner_id,
            name: "Owner's Camp".to_string(),
            description: "A quiet meadow with six pitches and a fire pit.".to_string(),
            province_id: 50,
            province_slug: None,
            campsite_type: CampsiteType::Camping,
            address: None,
            latitude: None,
            longitude: None,
            min_price: 150.0,
            max_price: 300.0,
            amenities: vec![],
            phone: None,
            email: None,
            website: None,
            average_rating: 0.0,
            review_count: 0,
            is_featured: true,
            status: ApprovalStatus::Approved,
            rejection_reason: None,
            created_at: Utc::now(),
        })
        .await;

    let inquiry: Value = app
        .client
        .post(app.url("/api/inquiries"))
        .json(&json!({
            "campsite_id": campsite_id,
            "guest_name": "Anan",
            "guest_email": "anan@example.com",
            "message": "Can we bring our dog along to the meadow?",
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let status_url = app.url(&format!("/api/inquiries/{}/status", inquiry["id"].as_str().unwrap()));
    let update = json!({ "status": "resolved", "owner_reply": "Dogs are welcome." });

    let response = app
        .client
        .put(&status_url)
        .bearer_auth(&stranger)
        .json(&update)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 403);

    let updated: Value = app
        .client
        .put(&status_url)
        .bearer_auth(&owner)
        .json(&update)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["status"], "resolved");
    assert_eq!(updated["owner_reply"], "Dogs are welcome.");
}

#[tokio::test]
async fn tokens_with_unknown_roles_are_rejected() {
    let app = spawn_app().await;
    let token = sign_jwt(Uuid::new_v4(), "superuser", JWT_SECRET, 600).unwrap();

    assert!(verify_jwt(&token, JWT_SECRET).is_err());

    let response = app
        .client
        .get(app.url("/api/wishlist"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);
}

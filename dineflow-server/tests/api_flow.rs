//! HTTP API integration tests
//!
//! 通过 tower oneshot 驱动完整路由，mock 支付网关，内存数据库。

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use dineflow_server::api;
use dineflow_server::db::DbService;
use dineflow_server::notify::NotificationService;
use dineflow_server::{
    ChargeOutcome, ChargeRequest, Config, GatewayError, PaymentGateway, ServerState,
};

// ========================================================================
// Test harness
// ========================================================================

struct MockGateway {
    status: String,
    requests: Mutex<Vec<ChargeRequest>>,
}

impl MockGateway {
    fn with_status(status: &str) -> Arc<Self> {
        Arc::new(Self {
            status: status.to_string(),
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn create_charge(&self, request: &ChargeRequest) -> Result<ChargeOutcome, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(ChargeOutcome {
            reference: "pi_test_123".to_string(),
            status: self.status.clone(),
        })
    }
}

async fn test_app(gateway: Arc<MockGateway>) -> Router {
    let db = DbService::open_memory().await.unwrap().db;
    let state = ServerState::with_parts(
        Config::with_overrides("/tmp/dineflow-test", 0),
        db,
        gateway,
        NotificationService::start(None, None, None),
    );
    api::app(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

fn post_json(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn bistro_payload() -> Value {
    json!({
        "name": "Zen Sushi House",
        "description": "Fresh sushi daily",
        "address": "456 Sushi Ave, Bangkok",
        "phone": "02-987-6543",
        "depositPerPerson": 50.0,
        "tables": [
            { "tableId": "S01", "capacity": 2, "type": "sushi bar" },
            { "tableId": "S02", "capacity": 4, "type": "standard" },
            { "tableId": "S03", "capacity": 6, "type": "shared" }
        ]
    })
}

/// Create a restaurant through the admin API, returning its id
async fn seed_restaurant(app: &Router) -> String {
    let (status, body) = send(app, post_json("/api/admin/restaurants", bistro_payload())).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

fn booking_payload(restaurant_id: &str, table_id: &str, guests: i64) -> Value {
    json!({
        "restaurantId": restaurant_id,
        "customerName": "Alice Example",
        "customerEmail": "alice@example.com",
        "customerPhone": "+66811111111",
        "bookingDate": "2026-09-01",
        "bookingTime": "19:00",
        "numGuests": guests,
        "tableId": table_id
    })
}

// ========================================================================
// Health
// ========================================================================

#[tokio::test]
async fn test_health() {
    let app = test_app(MockGateway::with_status("succeeded")).await;

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

// ========================================================================
// Restaurants & availability
// ========================================================================

#[tokio::test]
async fn test_list_restaurants() {
    let app = test_app(MockGateway::with_status("succeeded")).await;
    seed_restaurant(&app).await;

    let (status, body) = send(&app, get("/api/restaurants")).await;
    assert_eq!(status, StatusCode::OK);
    let restaurants = body.as_array().unwrap();
    assert_eq!(restaurants.len(), 1);
    assert_eq!(restaurants[0]["name"], "Zen Sushi House");
    assert_eq!(restaurants[0]["tables"].as_array().unwrap().len(), 3);
    // Table entries keep the wire shape {tableId, capacity, type}
    assert_eq!(restaurants[0]["tables"][0]["tableId"], "S01");
    assert_eq!(restaurants[0]["tables"][0]["type"], "sushi bar");
}

#[tokio::test]
async fn test_availability_missing_params() {
    let app = test_app(MockGateway::with_status("succeeded")).await;
    let id = seed_restaurant(&app).await;

    let (status, _) = send(
        &app,
        get(&format!("/api/restaurants/{id}/tables/available?date=2026-09-01")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_availability_invalid_guests() {
    let app = test_app(MockGateway::with_status("succeeded")).await;
    let id = seed_restaurant(&app).await;

    for guests in ["zero", "0", "-1"] {
        let (status, _) = send(
            &app,
            get(&format!(
                "/api/restaurants/{id}/tables/available?date=2026-09-01&time=19:00&guests={guests}"
            )),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_availability_unknown_restaurant() {
    let app = test_app(MockGateway::with_status("succeeded")).await;

    let (status, _) = send(
        &app,
        get("/api/restaurants/restaurant:nope/tables/available?date=2026-09-01&time=19:00&guests=2"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_availability_filters_capacity() {
    let app = test_app(MockGateway::with_status("succeeded")).await;
    let id = seed_restaurant(&app).await;

    let (status, body) = send(
        &app,
        get(&format!(
            "/api/restaurants/{id}/tables/available?date=2026-09-01&time=19:00&guests=5"
        )),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let tables = body.as_array().unwrap();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0]["tableId"], "S03");
}

// ========================================================================
// Booking flow
// ========================================================================

#[tokio::test]
async fn test_booking_missing_fields() {
    let app = test_app(MockGateway::with_status("succeeded")).await;
    let id = seed_restaurant(&app).await;

    let (status, _) = send(
        &app,
        post_json("/api/bookings", json!({ "restaurantId": id })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_unknown_restaurant() {
    let app = test_app(MockGateway::with_status("succeeded")).await;

    let (status, _) = send(
        &app,
        post_json(
            "/api/bookings",
            booking_payload("restaurant:doesnotexist", "S01", 2),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_booking_conflict() {
    let app = test_app(MockGateway::with_status("succeeded")).await;
    let id = seed_restaurant(&app).await;

    let (status, body) = send(&app, post_json("/api/bookings", booking_payload(&id, "S02", 4))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["depositAmount"], 200.0);
    assert_eq!(body["restaurantName"], "Zen Sushi House");
    assert_eq!(body["tableDetails"]["tableId"], "S02");

    // Sequential double-booking of the same slot is rejected
    let (status, _) = send(&app, post_json("/api/bookings", booking_payload(&id, "S02", 2))).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_booked_table_disappears_from_availability() {
    let app = test_app(MockGateway::with_status("succeeded")).await;
    let id = seed_restaurant(&app).await;

    send(&app, post_json("/api/bookings", booking_payload(&id, "S02", 4))).await;

    let (status, body) = send(
        &app,
        get(&format!(
            "/api/restaurants/{id}/tables/available?date=2026-09-01&time=19:00&guests=2"
        )),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["tableId"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["S01", "S03"]);
}

// ========================================================================
// Payment flow
// ========================================================================

#[tokio::test]
async fn test_payment_success_and_double_charge_blocked() {
    let gateway = MockGateway::with_status("succeeded");
    let app = test_app(gateway.clone()).await;
    let id = seed_restaurant(&app).await;

    let (_, booking) = send(&app, post_json("/api/bookings", booking_payload(&id, "S02", 4))).await;
    let booking_id = booking["bookingId"].as_str().unwrap().to_string();

    // depositPerPerson 50 × 4 guests = 200 → 20000 minor units
    let (status, body) = send(
        &app,
        post_json(
            "/api/payments/process",
            json!({ "bookingId": booking_id, "paymentMethodId": "pm_card_visa", "amount": 20000 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["bookingId"], booking_id.as_str());
    assert_eq!(gateway.requests.lock().unwrap()[0].amount_minor, 20000);

    // The booking is now paid + confirmed in the admin listing
    let (_, bookings) = send(&app, get("/api/admin/bookings")).await;
    let listed = &bookings.as_array().unwrap()[0];
    assert_eq!(listed["paymentStatus"], "paid");
    assert_eq!(listed["bookingStatus"], "confirmed");
    assert_eq!(listed["restaurantId"]["name"], "Zen Sushi House");

    // Charging again is a 400 state error and does not reach the gateway
    let (status, _) = send(
        &app,
        post_json(
            "/api/payments/process",
            json!({ "bookingId": booking_id, "paymentMethodId": "pm_card_visa", "amount": 20000 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(gateway.requests.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_payment_declined() {
    let app = test_app(MockGateway::with_status("requires_action")).await;
    let id = seed_restaurant(&app).await;

    let (_, booking) = send(&app, post_json("/api/bookings", booking_payload(&id, "S02", 4))).await;
    let booking_id = booking["bookingId"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        post_json(
            "/api/payments/process",
            json!({ "bookingId": booking_id, "paymentMethodId": "pm_card_visa", "amount": 20000 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["gatewayStatus"], "requires_action");

    let (_, bookings) = send(&app, get("/api/admin/bookings")).await;
    assert_eq!(bookings[0]["paymentStatus"], "failed");
    assert_eq!(bookings[0]["bookingStatus"], "pending");
}

#[tokio::test]
async fn test_payment_unknown_booking() {
    let app = test_app(MockGateway::with_status("succeeded")).await;

    let (status, _) = send(
        &app,
        post_json(
            "/api/payments/process",
            json!({ "bookingId": "booking:doesnotexist", "paymentMethodId": "pm", "amount": 100 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ========================================================================
// Admin
// ========================================================================

#[tokio::test]
async fn test_admin_create_restaurant_requires_name() {
    let app = test_app(MockGateway::with_status("succeeded")).await;

    let (status, _) = send(
        &app,
        post_json("/api/admin/restaurants", json!({ "description": "anonymous" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_update_booking_status() {
    let app = test_app(MockGateway::with_status("succeeded")).await;
    let id = seed_restaurant(&app).await;

    let (_, booking) = send(&app, post_json("/api/bookings", booking_payload(&id, "S01", 2))).await;
    let booking_id = booking["bookingId"].as_str().unwrap().to_string();

    // Invalid status value → 400, record unchanged
    let (status, _) = send(
        &app,
        put_json(
            &format!("/api/admin/bookings/{booking_id}/status"),
            json!({ "status": "arrived" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, bookings) = send(&app, get("/api/admin/bookings")).await;
    assert_eq!(bookings[0]["bookingStatus"], "pending");

    // pending is creation-only and not staff-settable
    let (status, _) = send(
        &app,
        put_json(
            &format!("/api/admin/bookings/{booking_id}/status"),
            json!({ "status": "pending" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Valid overwrite
    let (status, body) = send(
        &app,
        put_json(
            &format!("/api/admin/bookings/{booking_id}/status"),
            json!({ "status": "no-show" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["booking"]["bookingStatus"], "no-show");

    // Unknown booking → 404
    let (status, _) = send(
        &app,
        put_json(
            "/api/admin/bookings/booking:doesnotexist/status",
            json!({ "status": "confirmed" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

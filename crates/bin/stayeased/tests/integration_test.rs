//! End-to-end tests for the full stayeased stack.
//!
//! Each test wires real repositories (`SQLite` or document collection), the
//! real service and the real axum router, and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`. No TCP port is bound.

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use stayease_adapter_storage_document::DocumentBookingRepository;
use stayease_adapter_storage_sqlite_sqlx::{Config, Database, SqliteBookingRepository};
use stayease_app::ports::BookingRepository;
use stayease_app::services::booking_service::BookingService;
use stayease_domain::booking::Booking;
use stayease_domain::id::BookingId;
use stayeased::{bootstrap, server};
use tower::ServiceExt;

fn workspace_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../..")
        .join(name)
}

async fn memory_database() -> Database {
    Config::from_url("sqlite::memory:")
        .build()
        .await
        .expect("in-memory database should initialise")
}

/// Router backed by an empty in-memory `SQLite` database.
async fn sqlite_app() -> axum::Router {
    let db = memory_database().await;
    let repo = SqliteBookingRepository::new(db.pool().clone());
    server::app(BookingService::new(repo))
}

/// Router backed by an empty in-memory document collection.
fn document_app() -> axum::Router {
    server::app(BookingService::new(DocumentBookingRepository::in_memory()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn login(uri: &str, email: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "email": email }).to_string()))
        .unwrap()
}

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ---------------------------------------------------------------------------
// Seeding and login, on both backends
// ---------------------------------------------------------------------------

async fn assert_seed_then_login(app: axum::Router) {
    let (status, body) = send(&app, login("/api/login", "john@example.com")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Email not found in database.");

    let (_, body) = send(&app, get("/api/init")).await;
    assert_eq!(body["message"], "Dummy data created.");
    let (_, body) = send(&app, get("/api/init")).await;
    assert_eq!(body, json!({"message": "Database already populated."}));

    let (status, body) = send(&app, login("/api/login", "john@example.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "name": "John Doe"}));

    let (status, body) = send(
        &app,
        login("/api/hotel/login", "mason.davis456@example.com"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hotel login successful.");
}

#[tokio::test]
async fn should_seed_then_login_when_backend_is_sqlite() {
    assert_seed_then_login(sqlite_app().await).await;
}

#[tokio::test]
async fn should_seed_then_login_when_backend_is_document() {
    assert_seed_then_login(document_app()).await;
}

async fn assert_dashboards_after_seed(app: axum::Router) {
    send(&app, get("/api/init")).await;

    let (status, body) = send(&app, get("/api/hotel/dashboard")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["occupancy_rate"], 71);
    let names: Vec<&str> = body["recent_bookings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["John Doe", "Abhijeet Vaidya"]);
    assert_eq!(
        body["recent_activity"][0],
        json!({"activity_type": "Payment from John Doe", "total_paid": 30000.0})
    );

    let (status, body) = send(
        &app,
        get("/api/user/dashboard?user_name=Abhijeet%20Vaidya"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["personal_info"],
        json!({"name": "Abhijeet Vaidya", "email": "mason.davis456@example.com"})
    );
    assert_eq!(
        body["current_trip"],
        json!({
            "room_type": "Suite",
            "price_per_night": 14940.0,
            "checkin_date": "2025-10-26",
            "checkout_date": "2025-11-02",
            "country": "Bali, Indonesia"
        })
    );
    assert_eq!(body["upcoming_trips"], json!([]));
}

#[tokio::test]
async fn should_build_dashboards_when_backend_is_sqlite() {
    assert_dashboards_after_seed(sqlite_app().await).await;
}

#[tokio::test]
async fn should_build_dashboards_when_backend_is_document() {
    assert_dashboards_after_seed(document_app()).await;
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_catalog_regardless_of_store_state() {
    let app = sqlite_app().await;

    let (status, body) = send(&app, get("/api/hotels")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);

    let (status, body) = send(&app, get("/api/hotel/details?id=3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 3, "name": "The City Lofts", "location": "London, UK", "price": 9130, "room_type": "Standard"})
    );

    let (status, body) = send(&app, get("/api/hotel/details?id=99")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Hotel not found."}));
}

// ---------------------------------------------------------------------------
// Bootstrap from the shipped setup script
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_bootstrap_from_shipped_setup_script() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("stayease.db");

    let database = bootstrap::ensure_database(&db_path, &workspace_file("database_setup.sql"))
        .await
        .unwrap();
    let app = server::app(BookingService::new(SqliteBookingRepository::new(
        database.pool().clone(),
    )));

    let (status, body) = send(&app, login("/api/login", "priya.sharma@example.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Priya Sharma");

    let (_, body) = send(&app, get("/api/init")).await;
    assert_eq!(body["message"], "Database already populated.");
}

// ---------------------------------------------------------------------------
// CSV import round-trip
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_serve_imported_bookings_after_csv_import() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("stayease.db");

    let count = bootstrap::import_csv(&db_path, &workspace_file("data/hotel_bookings_sample.csv"))
        .await
        .unwrap();
    assert_eq!(count, 12);

    let database = Config::for_path(&db_path).build().await.unwrap();
    let app = server::app(BookingService::new(SqliteBookingRepository::new(
        database.pool().clone(),
    )));

    let (status, body) = send(&app, login("/api/login", " sofia.rossi@example.com ")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Sofia Rossi");

    // Two active stays; the later check-in is the current trip.
    let (status, body) = send(&app, get("/api/user/dashboard?user_name=Sofia%20Rossi")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["current_trip"]["checkin_date"], "2025-10-10");
    assert_eq!(
        body["upcoming_trips"],
        json!([{
            "room_type": "Family",
            "checkin_date": "2025-03-20",
            "checkout_date": "2025-03-27",
            "rating": 5.0
        }])
    );

    // Cancelled bookings never show up on the dashboard.
    let (_, body) = send(&app, get("/api/hotel/dashboard")).await;
    let recent: Vec<&str> = body["recent_bookings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        recent,
        ["Chen Wei", "Sofia Rossi", "Lucas Martin", "Ananya Iyer", "Emma Müller"]
    );
}

#[tokio::test]
async fn should_read_back_every_field_after_csv_import() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("stayease.db");
    let csv_path = dir.path().join("bookings.csv");
    std::fs::write(
        &csv_path,
        "booking_id,name,age,gender,country,email,phone,booking_date,checkin_date,checkout_date,days_stayed,number_of_guests,room_type,price_per_night,promo_code,discount_pct,subtotal,total_paid,payment_method,booking_channel,special_requests,repeat_guest,cancelled,rating,review\n\
         BK-7001, Ines Duarte ,41,Female,Portugal, ines.duarte@example.com ,+351-555-0107,2025-04-02,2025-06-14,2025-06-18,4,3,Family,210.5,SUMMER5,5,842,799.9,Debit Card,Travel Agent,Crib in room,true,,4.5,Would come back\n",
    )
    .unwrap();

    assert_eq!(bootstrap::import_csv(&db_path, &csv_path).await.unwrap(), 1);

    let database = Config::for_path(&db_path).build().await.unwrap();
    let repo = SqliteBookingRepository::new(database.pool().clone());
    let stored = repo
        .find_by_email("ines.duarte@example.com")
        .await
        .unwrap()
        .unwrap();

    let expected = Booking {
        booking_id: BookingId::from("BK-7001"),
        name: "Ines Duarte".to_string(),
        age: 41,
        gender: "Female".to_string(),
        country: "Portugal".to_string(),
        email: "ines.duarte@example.com".to_string(),
        phone: "+351-555-0107".to_string(),
        booking_date: "2025-04-02".to_string(),
        checkin_date: "2025-06-14".to_string(),
        checkout_date: "2025-06-18".to_string(),
        days_stayed: 4,
        number_of_guests: 3,
        room_type: "Family".to_string(),
        price_per_night: 210.5,
        promo_code: "SUMMER5".to_string(),
        discount_pct: 5.0,
        subtotal: 842.0,
        total_paid: 799.9,
        payment_method: "Debit Card".to_string(),
        booking_channel: "Travel Agent".to_string(),
        special_requests: "Crib in room".to_string(),
        repeat_guest: true,
        cancelled: false,
        rating: 4.5,
        review: "Would come back".to_string(),
    };
    assert_eq!(stored, expected);
    database.close().await;
}

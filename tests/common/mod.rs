// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use poem::http::Method;
use poem::{Endpoint, EndpointExt, Request, Response};
use sea_orm::Database;

use inventory_app::api;
use inventory_app::app_data::AppData;

/// Creates application data backed by a fresh in-memory SQLite database
/// with migrations applied
pub async fn setup_app_data() -> Arc<AppData> {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    Arc::new(AppData::init(db))
}

/// The composed route table with the given application data attached
pub fn test_app(app_data: Arc<AppData>) -> impl Endpoint {
    api::routes().data(app_data)
}

/// Perform a GET request against the test app
pub async fn get(app: &impl Endpoint, path: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(path.parse().expect("Invalid test path"))
        .finish();

    app.get_response(req).await
}

/// Perform a form POST against the test app
pub async fn post_form(app: &impl Endpoint, path: &str, fields: &[(&str, &str)]) -> Response {
    let body = serde_urlencoded::to_string(fields).expect("Failed to encode form body");

    let req = Request::builder()
        .method(Method::POST)
        .uri(path.parse().expect("Invalid test path"))
        .content_type("application/x-www-form-urlencoded")
        .body(body);

    app.get_response(req).await
}

/// Read the Location header of a redirect response
pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("location")
        .expect("Response has no Location header")
        .to_str()
        .expect("Location header is not valid UTF-8")
        .to_string()
}

/// Consume the response and return its body as text
pub async fn body_text(resp: Response) -> String {
    resp.into_body()
        .into_string()
        .await
        .expect("Failed to read response body")
}

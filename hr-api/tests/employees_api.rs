//! Router-level tests for the employee lookup endpoint

use std::io;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use hr_api::AppState;
use hr_api::api::create_router;
use hr_api::db::{EmployeeStore, MemoryEmployeeStore, StoreError, StoreResult};
use hr_api::services::SimulatedLatency;
use hr_api::services::employee::FETCH_FAILED_MESSAGE;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use shared::models::employee::Employee;
use tower::ServiceExt;

struct UnreachableStore;

#[async_trait]
impl EmployeeStore for UnreachableStore {
    async fn find_by_email(&self, _email: &str) -> StoreResult<Option<Employee>> {
        Err(StoreError::Backend(
            "Can't connect to MySQL server on '127.0.0.1:3306'".to_string(),
        ))
    }
}

fn employee(first: &str, last: &str, email: &str, department: &str, cents: i64) -> Employee {
    let now = chrono::Utc::now().naive_utc();
    Employee {
        id: 1,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        salary: Decimal::new(cents, 2),
        department: department.to_string(),
        created_at: now,
        updated_at: now,
    }
}

fn app_with(store: impl EmployeeStore + 'static, latency: SimulatedLatency) -> Router {
    create_router(AppState::from_parts(Arc::new(store), latency))
}

fn seeded_app() -> Router {
    let store = MemoryEmployeeStore::new([
        employee("Jane", "Doe", "jane@co.com", "Eng", 9_500_050),
        employee("John", "Smith", "a@b.com", "Sales", 4_200_000),
    ]);
    app_with(store, SimulatedLatency::disabled())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_lookup_returns_normalized_employee() {
    let (status, body) = get(seeded_app(), "/employees/jane@co.com").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "full_name": "Jane Doe",
            "email": "jane@co.com",
            "department": "Eng",
            "salary": 95000.5,
        })
    );
}

#[tokio::test]
async fn test_percent_encoded_email_is_decoded() {
    let (status, body) = get(seeded_app(), "/employees/jane%40co.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "jane@co.com");
}

#[tokio::test]
async fn test_missing_employee_is_404_with_email_in_message() {
    let (status, body) = get(seeded_app(), "/employees/missing@co.com").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 8001);
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("missing@co.com"), "message: {message}");
    assert_eq!(body["details"]["email"], "missing@co.com");
}

#[tokio::test]
async fn test_lookup_is_case_sensitive() {
    let (status, _) = get(seeded_app(), "/employees/A@b.com").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(seeded_app(), "/employees/a@b.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["full_name"], "John Smith");
    assert_eq!(body["salary"], json!(42000.0));
}

#[tokio::test]
async fn test_store_failure_is_opaque_500() {
    let app = app_with(UnreachableStore, SimulatedLatency::disabled());
    let (status, body) = get(app, "/employees/jane@co.com").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], 9001);
    assert_eq!(
        body["message"],
        "An error occurred while fetching employee data"
    );
    let raw = body.to_string();
    assert!(!raw.contains("MySQL"));
    assert!(!raw.contains("3306"));
}

/// Log sink shared between the subscriber and the test
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_store_failure_is_logged_once_with_cause() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = app_with(UnreachableStore, SimulatedLatency::disabled());
    let (status, _) = get(app, "/employees/jane@co.com").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let output = logs.contents();
    let failure_lines: Vec<&str> = output
        .lines()
        .filter(|line| line.contains(FETCH_FAILED_MESSAGE))
        .collect();
    assert_eq!(failure_lines.len(), 1, "logs: {output}");
    assert!(failure_lines[0].contains("ERROR"));
    assert!(failure_lines[0].contains("Can't connect to MySQL server"));
}

#[tokio::test]
async fn test_response_waits_for_simulated_latency() {
    let store = MemoryEmployeeStore::new([employee("Jane", "Doe", "jane@co.com", "Eng", 9_500_050)]);
    let latency = SimulatedLatency::from_millis(50, 80).unwrap();
    let app = app_with(store, latency);

    let started = Instant::now();
    let (status, _) = get(app, "/employees/jane@co.com").await;
    assert_eq!(status, StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[tokio::test]
async fn test_concurrent_lookups_are_independent() {
    let app = seeded_app();
    let uris = ["/employees/jane@co.com", "/employees/a@b.com", "/employees/nobody@co.com"];

    let handles: Vec<_> = uris
        .into_iter()
        .map(|uri| tokio::spawn(get(app.clone(), uri)))
        .collect();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap().0);
    }
    assert_eq!(
        statuses,
        vec![StatusCode::OK, StatusCode::OK, StatusCode::NOT_FOUND]
    );
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let response = seeded_app()
        .oneshot(
            Request::get("/employees/jane@co.com")
                .header("x-request-id", "req-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-123");

    let response = seeded_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_health_and_unknown_route() {
    let (status, body) = get(seeded_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "hr-api");

    let (status, body) = get(seeded_app(), "/employees").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3);
}

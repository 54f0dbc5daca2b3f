//! API routes

pub mod employees;
pub mod health;
pub mod middleware;

use axum::http::{HeaderValue, Request, Uri};
use axum::routing::get;
use axum::{Router, middleware as axum_middleware};
use shared::error::AppError;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::state::AppState;

/// Request ID generator (UUID v4)
#[derive(Clone, Copy)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Create the application router with middleware and state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/employees/{email}", get(employees::get_by_email))
        .fallback(route_not_found)
        // Request logging - sees the request id set below
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        // Request ID - outermost, keeps an incoming x-request-id
        .layer(SetRequestIdLayer::x_request_id(XRequestId))
        .with_state(state)
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

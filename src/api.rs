// 🌐 HTTP API - Receipt routes with Axum
//
// POST /receipts/process     → {"id": "..."}
// GET  /receipts/:id/points  → {"points": N}
// GET  /health               → {"status": "ok", "receipts": N}

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::ServiceError;
use crate::receipt::Receipt;
use crate::schema::ValidationError;
use crate::service::ReceiptService;

pub const INVALID_RECEIPT_MESSAGE: &str = "The receipt is invalid";
pub const NOT_FOUND_MESSAGE: &str = "No receipt found for that id";

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    pub service: ReceiptService,
}

impl AppState {
    pub fn new(service: ReceiptService) -> Self {
        AppState { service }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub receipts: usize,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        match self {
            ServiceError::InvalidReceipt(_) => (StatusCode::BAD_REQUEST, INVALID_RECEIPT_MESSAGE).into_response(),
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
        }
    }
}

// ============================================================================
// API Handlers
// ============================================================================

/// POST /receipts/process - Score a receipt and return its id
async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ServiceError> {
    let Json(receipt) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "unreadable receipt payload");
        ServiceError::InvalidReceipt(vec![ValidationError {
            field: "body".to_string(),
            message: rejection.body_text(),
        }])
    })?;

    let id = state.service.submit(receipt)?;
    Ok(Json(ProcessResponse { id: id.to_string() }))
}

/// GET /receipts/:id/points - Points awarded to a receipt
async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ServiceError> {
    let points = state.service.retrieve(&id)?;
    Ok(Json(PointsResponse { points }))
}

/// GET /health - Health check
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        receipts: state.service.store().len(),
    })
}

// ============================================================================
// Router
// ============================================================================

pub fn build_router(state: AppState, enable_cors: bool) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_check))
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/:id/points", get(get_points))
        .with_state(state);

    if enable_cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http())
}

// ============================================================================
// TESTS
// ============================================================================

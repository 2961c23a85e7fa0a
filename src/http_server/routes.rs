//! HTTP route handlers.
//!
//! Verb/path mapping:
//! - `POST /upload` (multipart file) — ingest, replacing the table
//! - `GET /records?column=&value=` — list, optionally filtered
//! - `GET /records/:id` — single record
//! - `PUT /records/:id` — partial update from a JSON object
//! - `DELETE /records/:id` — remove one record
//! - `GET /columns` — current table description
//! - `GET /health` — liveness probe

use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::normalizer::normalize;
use crate::observability::Logger;
use crate::store::{
    IngestReport, MutationOutcome, StoredRecord, TableDescription, TableStore,
};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// State shared across handlers
pub struct AppState {
    pub store: TableStore,
}

impl AppState {
    pub fn new(store: TableStore) -> Self {
        Self { store }
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct RecordsQuery {
    #[serde(default)]
    pub column: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub count: usize,
}

impl UploadResponse {
    fn from_report(report: &IngestReport) -> Self {
        Self {
            message: format!(
                "CSV uploaded successfully. {} records stored.",
                report.rows_loaded
            ),
            count: report.rows_loaded,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub records: Vec<StoredRecord>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub record: StoredRecord,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub storage: &'static str,
}

// ==================
// Routers
// ==================

/// Routes operating on the table store.
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/upload", post(upload_handler))
        .route("/records", get(list_records_handler))
        .route("/records/:id", get(get_record_handler))
        .route("/records/:id", put(update_record_handler))
        .route("/records/:id", delete(delete_record_handler))
        .route("/columns", get(columns_handler))
        .with_state(state)
}

/// Liveness probe, stateless.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

// ==================
// Handlers
// ==================

async fn upload_handler(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidBody(e.to_string()))?
    {
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::InvalidBody(e.to_string()))?;

        let table = normalize(&data).map_err(|e| {
            Logger::error("INGEST_REJECTED", &[("reason", &e.to_string())]);
            ApiError::UploadFailed(e.to_string())
        })?;

        let report = state.store.rebuild_and_load(table).map_err(|e| {
            Logger::error("INGEST_FAILED", &[("reason", &e.to_string())]);
            ApiError::UploadFailed(e.to_string())
        })?;

        Logger::info(
            "INGEST_OK",
            &[
                ("table", &report.table),
                ("columns", &report.columns.to_string()),
                ("rows", &report.rows_loaded.to_string()),
            ],
        );

        return Ok(Json(UploadResponse::from_report(&report)));
    }

    Err(ApiError::InvalidBody("no file provided".to_string()))
}

async fn list_records_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RecordsQuery>,
) -> ApiResult<Json<RecordsResponse>> {
    // Filter applies only when both parameters are present and non-empty
    let filter = match (query.column.as_deref(), query.value.as_deref()) {
        (Some(column), Some(value)) if !column.is_empty() && !value.is_empty() => {
            Some((column, value))
        }
        _ => None,
    };

    let records = state.store.records().list(filter);
    Ok(Json(RecordsResponse {
        count: records.len(),
        records,
    }))
}

async fn get_record_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<RecordResponse>> {
    let record = state.store.records().get(id).ok_or(ApiError::NotFound)?;
    Ok(Json(RecordResponse { record }))
}

async fn update_record_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> ApiResult<Json<MessageResponse>> {
    let fields = patch_fields(&body)?;

    let access = state.store.records();
    if access.get(id).is_none() {
        return Err(ApiError::NotFound);
    }

    let outcome = access
        .update(id, &fields)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    match outcome {
        MutationOutcome::Applied => {
            Logger::info("RECORD_UPDATED", &[("id", &id.to_string())]);
            Ok(Json(MessageResponse::new("Record updated successfully")))
        }
        // Lost a race with a delete or re-ingest after the existence check
        MutationOutcome::RecordMissing | MutationOutcome::TableMissing => {
            Err(ApiError::Internal("failed to update record".to_string()))
        }
    }
}

async fn delete_record_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    match state.store.records().delete(id) {
        MutationOutcome::Applied => {
            Logger::info("RECORD_DELETED", &[("id", &id.to_string())]);
            Ok(Json(MessageResponse::new("Record deleted successfully")))
        }
        MutationOutcome::RecordMissing | MutationOutcome::TableMissing => Err(ApiError::NotFound),
    }
}

async fn columns_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TableDescription>> {
    state.store.describe().map(Json).ok_or(ApiError::NoTable)
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        storage: "in-memory",
    })
}

// ==================
// Helpers
// ==================

/// Validate a PUT body into (column, text value) pairs.
///
/// The body must be a non-empty JSON object. String values pass through;
/// numbers and booleans are stringified since every stored value is text.
fn patch_fields(body: &Value) -> ApiResult<Vec<(String, String)>> {
    let object = body
        .as_object()
        .ok_or_else(|| ApiError::InvalidBody("request body must be a JSON object".to_string()))?;

    if object.is_empty() {
        return Err(ApiError::InvalidBody("no updates provided".to_string()));
    }

    let mut fields = Vec::with_capacity(object.len());
    for (column, value) in object {
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => {
                return Err(ApiError::InvalidBody(format!(
                    "field '{}' must be a text value",
                    column
                )))
            }
        };
        fields.push((column.clone(), text));
    }

    Ok(fields)
}

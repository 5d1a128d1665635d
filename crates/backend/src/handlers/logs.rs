use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::domain::log_record::service::{self, ExtractError};
use crate::shared::config;

/// GET /logs
pub async fn list_all() -> (StatusCode, Json<Value>) {
    match service::list_all().await {
        Ok(logs) => (StatusCode::OK, Json(json!({ "data": logs }))),
        Err(error) => {
            tracing::error!("Failed to list log records: {error:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "message": format!(
                        "It was not possible to retrieve log record from the database {error}"
                    )
                })),
            )
        }
    }
}

/// POST /logs/extract
///
/// Status contract consumed by the frontend: 200 with a record sample,
/// 404 when the source directory is empty, 500 with a message mentioning
/// "extract" for scan failures and any other message for save failures.
pub async fn extract() -> (StatusCode, Json<Value>) {
    let source_dir = &config::get_config().logs.dir;

    match service::extract_and_save(source_dir).await {
        Ok(sample) => (StatusCode::OK, Json(json!({ "data": sample }))),
        Err(ExtractError::NoLogs) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": ExtractError::NoLogs.to_string() })),
        ),
        Err(error) => {
            tracing::error!("Extraction failed: {error:?}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": error.to_string() })),
            )
        }
    }
}

/// GET /log/:id
pub async fn get_by_id(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    let id = match id.parse::<i32>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Invalid log record id" })),
            )
        }
    };

    match service::get_by_id(id).await {
        Ok(Some(record)) => (StatusCode::OK, Json(json!({ "data": record }))),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Log record not found" })),
        ),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "message": format!(
                    "It was not possible to retrieve log record from the database {error}"
                )
            })),
        ),
    }
}

/// DELETE /log/:id
pub async fn delete_by_id(Path(id): Path<String>) -> (StatusCode, Json<Value>) {
    let parsed = match id.parse::<i32>() {
        Ok(parsed) => parsed,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Invalid log record id" })),
            )
        }
    };

    match service::delete_by_id(parsed).await {
        Ok(_) => (StatusCode::OK, Json(json!({ "data": id }))),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "message": format!(
                    "It was not possible to delete log record from the database {error}"
                )
            })),
        ),
    }
}

/// DELETE /logs
pub async fn delete_all() -> (StatusCode, Json<Value>) {
    match service::delete_all().await {
        Ok(deleted) => (StatusCode::OK, Json(json!({ "data": deleted }))),
        Err(error) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "message": format!(
                    "It was not possible to delete all log records from the database {error}"
                )
            })),
        ),
    }
}

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sea_orm::DbErr;
use thiserror::Error;

use crate::services::pagination::PaginationError;

/// Erreurs remontées par les services vers les routes
#[derive(Debug, Error)]
pub enum AppError {
    #[error("database error during {operation}: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: DbErr,
    },

    #[error("{operation} timed out after {timeout_ms} ms")]
    Timeout {
        operation: &'static str,
        timeout_ms: u128,
    },

    #[error(transparent)]
    Pagination(#[from] PaginationError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Pagination(_) => StatusCode::BAD_REQUEST,
            AppError::Database { .. } | AppError::Timeout { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Le détail reste dans les logs : le client ne voit que "DB Error"
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Pagination(e) => HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            })),
            _ => {
                tracing::error!(error = %self, "request failed");
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": "DB Error"
                }))
            }
        }
    }
}

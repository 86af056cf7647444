//! Client-facing error responses.
//!
//! # Response Shapes
//! ```text
//! 422 Unprocessable Entity  {"detail": [{"loc": [...], "msg": "...", "type": "..."}]}
//! 400 Bad Request           {"detail": "price too high"}
//! 404 Not Found             {"detail": "Not Found"}
//! ```
//!
//! # Design Decisions
//! - Extractor rejections are folded into the validation shape so that
//!   every malformed input looks the same to clients
//! - Transport-level rejections (body too large, etc.) keep their status

use axum::{
    extract::{
        path::ErrorKind,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::items::{FieldError, ItemError};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Input failed type, shape or range checks.
    #[error("request validation failed ({} errors)", .0.len())]
    Validation(Vec<FieldError>),

    /// Well-formed input that breaks a domain rule.
    #[error("{0}")]
    BusinessRule(String),

    #[error("Not Found")]
    NotFound,

    /// Rejection raised below the validation layer.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BusinessRule(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Rejected { status, .. } => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(errors) => json!({ "detail": errors }),
            other => json!({ "detail": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ItemError> for ApiError {
    fn from(err: ItemError) -> Self {
        ApiError::BusinessRule(err.to_string())
    }
}

impl From<Vec<FieldError>> for ApiError {
    fn from(errors: Vec<FieldError>) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "model_attributes_type",
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "missing_content_type",
            _ => {
                return ApiError::Rejected {
                    status: rejection.status(),
                    message: rejection.body_text(),
                }
            }
        };
        ApiError::Validation(vec![FieldError::new(&["body"], rejection.body_text(), kind)])
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        match rejection {
            QueryRejection::FailedToDeserializeQueryString(inner) => ApiError::Validation(vec![
                FieldError::new(&["query"], inner.body_text(), "query_invalid"),
            ]),
            other => ApiError::Rejected {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(inner) => {
                let mut loc = vec!["path".to_string()];
                if let ErrorKind::ParseErrorAtKey { key, .. } = inner.kind() {
                    loc.push(key.clone());
                }
                ApiError::Validation(vec![FieldError {
                    loc,
                    msg: inner.body_text(),
                    kind: "path_invalid".to_string(),
                }])
            }
            other => ApiError::Rejected {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

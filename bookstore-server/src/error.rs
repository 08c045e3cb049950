//! Mapping of catalog errors onto HTTP responses

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bookstore_core::{CatalogError, ErrorCode, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned for every failed request
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceError {
    pub error_code: ErrorCode,
    pub error_message: String,
    pub details: Option<Value>,
}

/// Errors a handler can return
#[derive(Debug)]
pub enum ApiError {
    Catalog(CatalogError),

    /// The request could not be decoded (bad JSON body, bad query parameters)
    Malformed(String),
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Catalog(e.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        Self::Malformed(e.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(e: QueryRejection) -> Self {
        Self::Malformed(e.body_text())
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
        ErrorCode::BookNotFound => StatusCode::NOT_FOUND,
        ErrorCode::BookAlreadyExist => StatusCode::CONFLICT,
        ErrorCode::UnexpectedError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self {
            Self::Catalog(e) => {
                let code = e.code();
                if code == ErrorCode::UnexpectedError {
                    tracing::error!(error = %e, "Unexpected catalog error");
                } else {
                    tracing::warn!(code = code.as_str(), error = %e, "Request rejected");
                }
                ServiceError {
                    error_code: code,
                    error_message: e.to_string(),
                    details: e.details(),
                }
            }
            Self::Malformed(reason) => {
                tracing::warn!(%reason, "Malformed request");
                ServiceError {
                    error_code: ErrorCode::ValidationError,
                    error_message: "Validation Failed".to_string(),
                    details: Some(Value::String(reason)),
                }
            }
        };
        (status_for(body.error_code), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::from(ValidationError::EmptyId),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(CatalogError::BookNotFound { id: "x".into() }),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(CatalogError::BookAlreadyExists {
                    name: "n".into(),
                    author: "a".into(),
                }),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::from(CatalogError::Storage(
                    std::io::Error::other("disk on fire").into(),
                )),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (ApiError::Malformed("bad".into()), StatusCode::BAD_REQUEST),
        ];
        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }
}

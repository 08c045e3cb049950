//! Error types for the bookstore catalog

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Top-level error type for all catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Book with id {id} does not exist")]
    BookNotFound { id: String },

    #[error("Book already exists with name {name} and author {author}")]
    BookAlreadyExists { name: String, author: String },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl CatalogError {
    /// Machine-readable code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(_) => ErrorCode::ValidationError,
            Self::BookNotFound { .. } => ErrorCode::BookNotFound,
            Self::BookAlreadyExists { .. } => ErrorCode::BookAlreadyExist,
            Self::Storage(_) => ErrorCode::UnexpectedError,
        }
    }

    /// Structured payload for client diagnostics
    pub fn details(&self) -> Option<Value> {
        match self {
            Self::Validation(e) => e.details(),
            Self::BookNotFound { id } => Some(json!({ "id": id })),
            Self::BookAlreadyExists { name, author } => {
                Some(json!({ "name": name, "author": author }))
            }
            Self::Storage(_) => None,
        }
    }
}

/// Error codes reported to clients
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    BookNotFound,
    BookAlreadyExist,
    UnexpectedError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BookNotFound => "BOOK_NOT_FOUND",
            Self::BookAlreadyExist => "BOOK_ALREADY_EXIST",
            Self::UnexpectedError => "UNEXPECTED_ERROR",
        }
    }
}

/// Malformed input: bad ids, bad queries, missing pagination
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unsupported search operation: {0}")]
    UnsupportedOperation(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Book is missing required property: {0}")]
    MissingProperty(&'static str),

    #[error("Invalid argument, id is empty")]
    EmptyId,

    #[error("Pagination must be provided")]
    MissingPagination,

    #[error("Page size must not be less than one")]
    InvalidPageSize,
}

impl ValidationError {
    pub fn details(&self) -> Option<Value> {
        match self {
            Self::InvalidQuery(query) => Some(json!({ "query": query })),
            Self::UnknownField(field) => Some(json!({ "field": field })),
            Self::UnsupportedOperation(op) => Some(json!({ "operation": op })),
            Self::UnknownCategory(category) => Some(json!({ "category": category })),
            Self::MissingProperty(property) => Some(json!({ "property": property })),
            Self::EmptyId | Self::MissingPagination | Self::InvalidPageSize => None,
        }
    }
}

/// Errors raised by repository implementations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Conflicting record for name {name} and author {author}")]
    Conflict { name: String, author: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

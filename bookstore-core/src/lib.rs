//! Bookstore Core Library
//!
//! This crate provides the catalog types, the query predicate builder and the
//! catalog service for the bookstore. Transports (HTTP, CLI) talk to the
//! [`CatalogService`], which enforces the catalog invariants on top of a
//! pluggable [`storage::BookRepository`].

pub mod error;
pub mod query;
pub mod service;
pub mod storage;
pub mod types;

pub use error::{CatalogError, ErrorCode, Result, StorageError, ValidationError};
pub use query::{parse_query, BookField, Criterion, Filter, FilterBuilder, SearchOperation};
pub use service::CatalogService;
pub use types::{Book, Category, Page, PageRequest};

//! Book catalog handlers

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use bookstore_core::{Book, Category, Page, PageRequest};
use serde::{Deserialize, Serialize};

/// Request body for adding a book
#[derive(Debug, Deserialize, Serialize)]
pub struct AddBookRequest {
    pub name: String,
    pub author: String,
    pub category: Category,
}

impl From<AddBookRequest> for Book {
    fn from(request: AddBookRequest) -> Self {
        Book::new(request.name, request.author, request.category)
    }
}

/// Book as returned to clients
#[derive(Debug, Serialize, Deserialize)]
pub struct BookResponse {
    pub id: String,
    pub name: String,
    pub author: String,
    pub category: Category,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            name: book.name,
            author: book.author,
            category: book.category,
        }
    }
}

/// Paged list response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedBookResponse {
    pub books: Vec<BookResponse>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
}

impl From<Page<Book>> for PagedBookResponse {
    fn from(page: Page<Book>) -> Self {
        let page = page.map(BookResponse::from);
        Self {
            books: page.items,
            current_page: page.page,
            total_pages: page.total_pages,
            total_items: page.total_items,
        }
    }
}

/// Response for a created book
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Query parameters for listing books
#[derive(Debug, Deserialize)]
pub struct ListBooksQuery {
    pub author: Option<String>,
    pub category: Option<String>,

    /// Page number (0-indexed)
    #[serde(default)]
    pub page: u32,

    /// Items per page
    #[serde(default = "default_size")]
    pub size: u32,
}

/// Query parameters for searching books
#[derive(Debug, Deserialize)]
pub struct SearchBooksQuery {
    /// `field:value`, e.g. `author:Chetan`
    pub query: String,

    #[serde(default)]
    pub page: u32,

    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_size() -> u32 {
    50
}

/// Empty parameters are treated as absent
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Add a book to the catalog
pub async fn add_book(
    State(state): State<AppState>,
    body: Result<Json<AddBookRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let book = state.catalog.add(request.into()).await?;

    let location = format!("/api/v1/books/{}", book.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CreatedResponse { id: book.id }),
    ))
}

/// Delete a book
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.catalog.delete(&id).await?;
    Ok(StatusCode::OK)
}

/// Get a single book
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = state.catalog.get(&id).await?;
    Ok(Json(book.into()))
}

/// List books, optionally filtered by author and/or category
pub async fn list_books(
    State(state): State<AppState>,
    query: Result<Query<ListBooksQuery>, QueryRejection>,
) -> Result<Json<PagedBookResponse>, ApiError> {
    let Query(query) = query?;
    let request = PageRequest::new(query.page, query.size)?;

    let category = non_empty(query.category)
        .map(|c| c.parse::<Category>())
        .transpose()?;
    let author = non_empty(query.author);

    let page = state
        .catalog
        .list(author.as_deref(), category, Some(request))
        .await?;
    Ok(Json(page.into()))
}

/// Search books with a `field:value` query
pub async fn search_books(
    State(state): State<AppState>,
    query: Result<Query<SearchBooksQuery>, QueryRejection>,
) -> Result<Json<PagedBookResponse>, ApiError> {
    let Query(query) = query?;
    let request = PageRequest::new(query.page, query.size)?;

    let page = state.catalog.search(&query.query, Some(request)).await?;
    Ok(Json(page.into()))
}

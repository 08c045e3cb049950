//! Persistence abstraction for the catalog

mod json_file;
mod memory;
mod table;

pub use json_file::JsonFileRepository;
pub use memory::MemoryRepository;

use crate::error::StorageError;
use crate::query::{BookField, Criterion, Filter};
use crate::types::{Book, Category, Page, PageRequest};
use async_trait::async_trait;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Abstract book repository
///
/// `save` only ever inserts: implementations must reject a book whose id or
/// `(name, author)` pair is already stored with [`StorageError::Conflict`].
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Look up a book by id
    async fn find_by_id(&self, id: &str) -> StorageResult<Option<Book>>;

    /// Look up a book by its unique name and author pair
    async fn find_by_name_and_author(&self, name: &str, author: &str)
        -> StorageResult<Option<Book>>;

    /// Persist a book and return the stored record
    async fn save(&self, book: Book) -> StorageResult<Book>;

    /// Remove the book with the given id
    async fn delete_by_id(&self, id: &str) -> StorageResult<()>;

    /// Check whether a book with the given id exists
    async fn exists_by_id(&self, id: &str) -> StorageResult<bool>;

    /// Evaluate an optional filter, then paginate the matches
    async fn find_all(
        &self,
        filter: Option<&Filter>,
        request: PageRequest,
    ) -> StorageResult<Page<Book>>;

    async fn find_by_author(&self, author: &str, request: PageRequest) -> StorageResult<Page<Book>> {
        let filter = Filter::field_eq(BookField::Author, author);
        self.find_all(Some(&filter), request).await
    }

    async fn find_by_category(
        &self,
        category: Category,
        request: PageRequest,
    ) -> StorageResult<Page<Book>> {
        let filter = Filter::field_eq(BookField::Category, category.as_str());
        self.find_all(Some(&filter), request).await
    }

    async fn find_by_author_and_category(
        &self,
        author: &str,
        category: Category,
        request: PageRequest,
    ) -> StorageResult<Page<Book>> {
        let filter = Filter::field_eq(BookField::Author, author)
            .and(Criterion::equals(BookField::Category, category.as_str()));
        self.find_all(Some(&filter), request).await
    }
}

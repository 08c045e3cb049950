//! Catalog service: the operations exposed to transports

use crate::error::{CatalogError, Result, StorageError, ValidationError};
use crate::query::{parse_query, Filter};
use crate::storage::BookRepository;
use crate::types::{Book, Category, Page, PageRequest};
use std::sync::Arc;

/// Orchestrates catalog operations and enforces the catalog invariants
#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn BookRepository>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// Add a book, rejecting incomplete records, duplicate name/author pairs
    /// and ids that are already taken
    pub async fn add(&self, book: Book) -> Result<Book> {
        book.validate()?;

        if self.repository.exists_by_id(&book.id).await?
            || self
                .repository
                .find_by_name_and_author(&book.name, &book.author)
                .await?
                .is_some()
        {
            return Err(already_exists(book.name, book.author));
        }

        tracing::info!(id = %book.id, "Saving book");
        self.repository.save(book).await.map_err(|e| match e {
            StorageError::Conflict { name, author } => already_exists(name, author),
            other => other.into(),
        })
    }

    /// Delete the book with the given id
    pub async fn delete(&self, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        if !self.repository.exists_by_id(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(id, "Deleting book");
        self.repository.delete_by_id(id).await.map_err(|e| match e {
            StorageError::NotFound(_) => not_found(id),
            other => other.into(),
        })
    }

    /// Fetch the book with the given id
    pub async fn get(&self, id: &str) -> Result<Book> {
        if id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }

        tracing::info!(id, "Fetching book");
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List books, optionally restricted to an author and/or category
    pub async fn list(
        &self,
        author: Option<&str>,
        category: Option<Category>,
        request: Option<PageRequest>,
    ) -> Result<Page<Book>> {
        let request = request.ok_or(ValidationError::MissingPagination)?;
        tracing::info!(page = request.page(), size = request.size(), "Listing books");

        let page = match (author, category) {
            (Some(author), Some(category)) => {
                tracing::info!(author, %category, "Fetching books by author and category");
                self.repository
                    .find_by_author_and_category(author, category, request)
                    .await?
            }
            (Some(author), None) => {
                tracing::info!(author, "Fetching books by author");
                self.repository.find_by_author(author, request).await?
            }
            (None, Some(category)) => {
                tracing::info!(%category, "Fetching books by category");
                self.repository.find_by_category(category, request).await?
            }
            (None, None) => {
                tracing::info!("Fetching all books");
                self.repository.find_all(None, request).await?
            }
        };
        Ok(page)
    }

    /// Evaluate a prebuilt filter; `None` lists every book
    pub async fn find(
        &self,
        filter: Option<&Filter>,
        request: Option<PageRequest>,
    ) -> Result<Page<Book>> {
        let request = request.ok_or(ValidationError::MissingPagination)?;
        match filter {
            Some(filter) => tracing::info!(
                %filter,
                page = request.page(),
                size = request.size(),
                "Fetching books by filter"
            ),
            None => tracing::info!(page = request.page(), size = request.size(), "Fetching all books"),
        }
        Ok(self.repository.find_all(filter, request).await?)
    }

    /// Search with a `field:value` query string
    pub async fn search(&self, query: &str, request: Option<PageRequest>) -> Result<Page<Book>> {
        let request = request.ok_or(ValidationError::MissingPagination)?;
        let filter = parse_query(query)?;
        self.find(Some(&filter), Some(request)).await
    }
}

fn not_found(id: &str) -> CatalogError {
    CatalogError::BookNotFound { id: id.to_string() }
}

fn already_exists(name: String, author: String) -> CatalogError {
    CatalogError::BookAlreadyExists { name, author }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::query::FilterBuilder;
    use crate::storage::{MemoryRepository, StorageResult};
    use async_trait::async_trait;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(MemoryRepository::new()))
    }

    fn page(page: u32, size: u32) -> Option<PageRequest> {
        Some(PageRequest::new(page, size).unwrap())
    }

    #[tokio::test]
    async fn test_add_and_get() {
        let service = service();
        let saved = service
            .add(Book::new("Learn DSA", "Chetan Bhatt", Category::Technical))
            .await
            .unwrap();
        assert!(!saved.id.is_empty());

        let fetched = service.get(&saved.id).await.unwrap();
        assert_eq!(fetched, saved);
    }

    #[tokio::test]
    async fn test_add_duplicate() {
        let service = service();
        service
            .add(Book::new("Learn DSA", "Chetan Bhatt", Category::Technical))
            .await
            .unwrap();
        let err = service
            .add(Book::new("Learn DSA", "Chetan Bhatt", Category::Fiction))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::BookAlreadyExist);
        assert!(matches!(err, CatalogError::BookAlreadyExists { ref name, .. } if name == "Learn DSA"));
    }

    #[tokio::test]
    async fn test_add_rejects_empty_properties() {
        let err = service()
            .add(Book::new("Learn DSA", "", Category::Technical))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::MissingProperty("author"))
        ));
    }

    /// Repository whose lookup never sees the existing record, forcing the
    /// conflict to surface from `save`
    struct BlindLookup(MemoryRepository);

    #[async_trait]
    impl BookRepository for BlindLookup {
        async fn find_by_id(&self, id: &str) -> StorageResult<Option<Book>> {
            self.0.find_by_id(id).await
        }
        async fn find_by_name_and_author(&self, _: &str, _: &str) -> StorageResult<Option<Book>> {
            Ok(None)
        }
        async fn save(&self, book: Book) -> StorageResult<Book> {
            self.0.save(book).await
        }
        async fn delete_by_id(&self, id: &str) -> StorageResult<()> {
            self.0.delete_by_id(id).await
        }
        async fn exists_by_id(&self, id: &str) -> StorageResult<bool> {
            self.0.exists_by_id(id).await
        }
        async fn find_all(
            &self,
            filter: Option<&Filter>,
            request: PageRequest,
        ) -> StorageResult<Page<Book>> {
            self.0.find_all(filter, request).await
        }
    }

    #[tokio::test]
    async fn test_save_conflict_maps_to_already_exists() {
        let service = CatalogService::new(Arc::new(BlindLookup(MemoryRepository::new())));
        service
            .add(Book::new("Book1", "Author", Category::Technical))
            .await
            .unwrap();
        let err = service
            .add(Book::new("Book1", "Author", Category::Technical))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::BookAlreadyExist);
    }

    #[tokio::test]
    async fn test_add_never_replaces_existing_id() {
        let service = service();
        let original = service
            .add(Book::new("Learn DSA", "Chetan", Category::Technical))
            .await
            .unwrap();

        let mut other = Book::new("Other", "Someone", Category::Fiction);
        other.id = original.id.clone();
        let err = service.add(other).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::BookAlreadyExist);

        assert_eq!(service.get(&original.id).await.unwrap(), original);
    }

    #[tokio::test]
    async fn test_delete() {
        let service = service();
        let saved = service
            .add(Book::new("Book", "Author", Category::Technical))
            .await
            .unwrap();

        service.delete(&saved.id).await.unwrap();
        let err = service.get(&saved.id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::BookNotFound);

        let err = service.delete(&saved.id).await.unwrap_err();
        assert!(matches!(err, CatalogError::BookNotFound { ref id } if *id == saved.id));
    }

    #[tokio::test]
    async fn test_empty_id_is_validation_error() {
        let service = service();
        assert_eq!(service.get("").await.unwrap_err().code(), ErrorCode::ValidationError);
        assert_eq!(service.delete("").await.unwrap_err().code(), ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_list_requires_pagination() {
        let err = service().list(None, None, None).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::MissingPagination)
        ));
    }

    #[tokio::test]
    async fn test_list_dispatch() {
        let service = service();
        for (name, author, category) in [
            ("A", "Chetan", Category::Technical),
            ("B", "Chetan", Category::Technical),
            ("C", "Chetan", Category::Technical),
            ("D", "Chetan", Category::Fiction),
            ("E", "Tim", Category::Technical),
        ] {
            service.add(Book::new(name, author, category)).await.unwrap();
        }

        let both = service
            .list(Some("Chetan"), Some(Category::Technical), page(0, 2))
            .await
            .unwrap();
        assert_eq!(both.items.len(), 2);
        assert_eq!(both.total_items, 3);
        assert_eq!(both.total_pages, 2);

        let by_author = service.list(Some("Chetan"), None, page(0, 50)).await.unwrap();
        assert_eq!(by_author.total_items, 4);

        let by_category = service
            .list(None, Some(Category::Technical), page(0, 50))
            .await
            .unwrap();
        assert_eq!(by_category.total_items, 4);

        let all = service.list(None, None, page(0, 50)).await.unwrap();
        assert_eq!(all.total_items, 5);
    }

    #[tokio::test]
    async fn test_search() {
        let service = service();
        service
            .add(Book::new("Half Girlfriend", "Chetan", Category::Fiction))
            .await
            .unwrap();
        service
            .add(Book::new("Learn DSA", "chetan", Category::Technical))
            .await
            .unwrap();

        let results = service.search("author:Chetan", page(0, 50)).await.unwrap();
        assert_eq!(results.total_items, 1);
        assert_eq!(results.items[0].author, "Chetan");

        let err = service.search("bogus", page(0, 50)).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn test_find_without_filter_equals_unfiltered_list() {
        let service = service();
        service
            .add(Book::new("Book1", "Author", Category::Technical))
            .await
            .unwrap();
        service
            .add(Book::new("Book2", "Author", Category::Science))
            .await
            .unwrap();

        let filter = FilterBuilder::new().build();
        assert!(filter.is_none());
        let found = service.find(filter.as_ref(), page(0, 50)).await.unwrap();
        let listed = service.list(None, None, page(0, 50)).await.unwrap();
        assert_eq!(found, listed);
    }
}

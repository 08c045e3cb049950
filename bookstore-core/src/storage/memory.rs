//! In-memory repository

use super::table::BookTable;
use super::{BookRepository, StorageResult};
use crate::query::Filter;
use crate::types::{Book, Page, PageRequest};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Repository holding the catalog in process memory (for testing and ephemeral servers)
#[derive(Debug, Default)]
pub struct MemoryRepository {
    table: RwLock<BookTable>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for MemoryRepository {
    async fn find_by_id(&self, id: &str) -> StorageResult<Option<Book>> {
        Ok(self.table.read().await.find_by_id(id).cloned())
    }

    async fn find_by_name_and_author(
        &self,
        name: &str,
        author: &str,
    ) -> StorageResult<Option<Book>> {
        Ok(self
            .table
            .read()
            .await
            .find_by_name_and_author(name, author)
            .cloned())
    }

    async fn save(&self, book: Book) -> StorageResult<Book> {
        self.table.write().await.insert(book)
    }

    async fn delete_by_id(&self, id: &str) -> StorageResult<()> {
        self.table.write().await.remove(id)?;
        Ok(())
    }

    async fn exists_by_id(&self, id: &str) -> StorageResult<bool> {
        Ok(self.table.read().await.find_by_id(id).is_some())
    }

    async fn find_all(
        &self,
        filter: Option<&Filter>,
        request: PageRequest,
    ) -> StorageResult<Page<Book>> {
        Ok(self.table.read().await.query(filter, request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::types::Category;

    fn page(page: u32, size: u32) -> PageRequest {
        PageRequest::new(page, size).unwrap()
    }

    #[tokio::test]
    async fn test_memory_repository() {
        let repo = MemoryRepository::new();
        let book = Book::new("Book1", "Author", Category::Technical);

        // Save
        let saved = repo.save(book.clone()).await.unwrap();
        assert_eq!(saved.id, book.id);

        // Find
        assert!(repo.exists_by_id(&book.id).await.unwrap());
        assert!(repo.find_by_id(&book.id).await.unwrap().is_some());
        assert!(repo
            .find_by_name_and_author("Book1", "Author")
            .await
            .unwrap()
            .is_some());

        // Delete
        repo.delete_by_id(&book.id).await.unwrap();
        assert!(!repo.exists_by_id(&book.id).await.unwrap());
        assert!(matches!(
            repo.delete_by_id(&book.id).await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_find_by_helpers() {
        let repo = MemoryRepository::new();
        repo.save(Book::new("Book1", "Author", Category::Technical))
            .await
            .unwrap();
        repo.save(Book::new("Book2", "Author", Category::Fiction))
            .await
            .unwrap();
        repo.save(Book::new("Book3", "Other", Category::Technical))
            .await
            .unwrap();

        let by_author = repo.find_by_author("Author", page(0, 2)).await.unwrap();
        assert_eq!(by_author.total_items, 2);

        let by_category = repo
            .find_by_category(Category::Technical, page(0, 2))
            .await
            .unwrap();
        assert_eq!(by_category.total_items, 2);

        let both = repo
            .find_by_author_and_category("Author", Category::Technical, page(0, 2))
            .await
            .unwrap();
        assert_eq!(both.total_items, 1);
        assert_eq!(both.items[0].name, "Book1");

        let all = repo.find_all(None, page(0, 2)).await.unwrap();
        assert_eq!(all.items.len(), 2);
        assert_eq!(all.total_items, 3);
        assert_eq!(all.total_pages, 2);
    }
}

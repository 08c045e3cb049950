//! Repository persisted as a JSON document on the local filesystem

use super::table::BookTable;
use super::{BookRepository, StorageResult};
use crate::query::Filter;
use crate::types::{Book, Page, PageRequest};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// File-backed repository
///
/// The whole table is held in memory and rewritten after every mutation.
/// Writes go to a temp file in the same directory which is then renamed over
/// the catalog, so a crash never leaves a partially written file.
#[derive(Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
    table: RwLock<BookTable>,
}

impl JsonFileRepository {
    /// Open the catalog at `path`, starting empty if the file does not exist
    pub async fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let table = load(&path).await?;
        tracing::debug!(path = %path.display(), books = table.len(), "Opened catalog");
        Ok(Self {
            path,
            table: RwLock::new(table),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn load(path: &Path) -> StorageResult<BookTable> {
    // Read file directly, handle NotFound as empty catalog
    match tokio::fs::read_to_string(path).await {
        Ok(data) => Ok(serde_json::from_str(&data)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BookTable::default()),
        Err(e) => Err(e.into()),
    }
}

async fn persist(path: &Path, table: &BookTable) -> StorageResult<()> {
    let data = serde_json::to_string_pretty(table)?;

    // Same directory keeps the rename on one filesystem
    let temp_path = path.with_extension("json.tmp");
    tokio::fs::write(&temp_path, &data).await?;
    tokio::fs::rename(&temp_path, path).await?;
    Ok(())
}

#[async_trait]
impl BookRepository for JsonFileRepository {
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
        let mut table = self.table.write().await;
        let mut updated = table.clone();
        let saved = updated.insert(book)?;
        persist(&self.path, &updated).await?;
        *table = updated;
        Ok(saved)
    }

    async fn delete_by_id(&self, id: &str) -> StorageResult<()> {
        let mut table = self.table.write().await;
        let mut updated = table.clone();
        updated.remove(id)?;
        persist(&self.path, &updated).await?;
        *table = updated;
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
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::open(dir.path().join("catalog.json"))
            .await
            .unwrap();
        let page = repo
            .find_all(None, PageRequest::new(0, 10).unwrap())
            .await
            .unwrap();
        assert_eq!(page.total_items, 0);
        assert!(!repo.path().exists());
    }

    #[tokio::test]
    async fn test_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("catalog.json");

        let book = Book::new("Book1", "Author", Category::Technical);
        let other = Book::new("Book2", "Author", Category::Fiction);
        {
            let repo = JsonFileRepository::open(&path).await.unwrap();
            repo.save(book.clone()).await.unwrap();
            repo.save(other.clone()).await.unwrap();
            repo.delete_by_id(&other.id).await.unwrap();
        }

        let repo = JsonFileRepository::open(&path).await.unwrap();
        assert_eq!(repo.find_by_id(&book.id).await.unwrap(), Some(book));
        assert!(!repo.exists_by_id(&other.id).await.unwrap());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_conflict_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        let repo = JsonFileRepository::open(&path).await.unwrap();
        repo.save(Book::new("Book1", "Author", Category::Technical))
            .await
            .unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let err = repo
            .save(Book::new("Book1", "Author", Category::History))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Conflict { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "not json").unwrap();
        let err = JsonFileRepository::open(&path).await.unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }
}

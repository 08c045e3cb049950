//! In-process record table shared by the repository implementations

use super::StorageResult;
use crate::error::StorageError;
use crate::query::{evaluate, Filter};
use crate::types::{Book, Page, PageRequest};
use serde::{Deserialize, Serialize};

/// Books in insertion order, with the `(name, author)` unique constraint
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub(crate) struct BookTable {
    books: Vec<Book>,
}

impl BookTable {
    pub fn find_by_id(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn find_by_name_and_author(&self, name: &str, author: &str) -> Option<&Book> {
        self.books
            .iter()
            .find(|b| b.name == name && b.author == author)
    }

    /// Insert a new book; stored books are never replaced
    pub fn insert(&mut self, book: Book) -> StorageResult<Book> {
        if self.find_by_id(&book.id).is_some()
            || self
                .find_by_name_and_author(&book.name, &book.author)
                .is_some()
        {
            return Err(StorageError::Conflict {
                name: book.name,
                author: book.author,
            });
        }

        self.books.push(book.clone());
        Ok(book)
    }

    pub fn remove(&mut self, id: &str) -> StorageResult<Book> {
        let index = self
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| StorageError::NotFound(id.to_string()))?;
        Ok(self.books.remove(index))
    }

    pub fn query(&self, filter: Option<&Filter>, request: PageRequest) -> Page<Book> {
        evaluate(filter, &self.books, request)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }
}

//! Add command implementation

use anyhow::Result;
use bookstore_core::{Book, CatalogService, Category};

/// Add a book and print its generated id
pub async fn add(
    catalog: &CatalogService,
    name: String,
    author: String,
    category: Category,
) -> Result<()> {
    let book = catalog.add(Book::new(name, author, category)).await?;
    tracing::debug!(id = %book.id, "Book added");
    println!("{}", book.id);
    Ok(())
}

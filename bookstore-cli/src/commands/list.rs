//! List and search command implementations

use anyhow::Result;
use bookstore_core::{Book, CatalogService, Category, Page, PageRequest};
use serde::Serialize;

/// Page output for JSON mode
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageOutput<'a> {
    books: &'a [Book],
    current_page: u32,
    total_pages: u32,
    total_items: u64,
}

fn print_page(page: &Page<Book>, json: bool) -> Result<()> {
    if json {
        let output = PageOutput {
            books: &page.items,
            current_page: page.page,
            total_pages: page.total_pages,
            total_items: page.total_items,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (i, book) in page.items.iter().enumerate() {
        if i > 0 {
            println!();
        }
        super::print_book(book);
    }
    println!(
        "-- page {} of {} ({} books)",
        page.page.saturating_add(1),
        page.total_pages.max(1),
        page.total_items
    );
    Ok(())
}

/// List books, optionally by author and category
pub async fn list(
    catalog: &CatalogService,
    author: Option<&str>,
    category: Option<Category>,
    page: u32,
    size: u32,
    json: bool,
) -> Result<()> {
    let request = PageRequest::new(page, size)?;
    let result = catalog.list(author, category, Some(request)).await?;
    print_page(&result, json)
}

/// Search books with a field:value query
pub async fn search(
    catalog: &CatalogService,
    query: &str,
    page: u32,
    size: u32,
    json: bool,
) -> Result<()> {
    let request = PageRequest::new(page, size)?;
    let result = catalog.search(query, Some(request)).await?;
    print_page(&result, json)
}

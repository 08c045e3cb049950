//! Get command implementation

use anyhow::Result;
use bookstore_core::CatalogService;

/// Display a single book
pub async fn get(catalog: &CatalogService, id: &str, json: bool) -> Result<()> {
    let book = catalog.get(id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    } else {
        super::print_book(&book);
    }

    Ok(())
}

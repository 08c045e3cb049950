//! Delete command implementation

use anyhow::Result;
use bookstore_core::CatalogService;

pub async fn delete(catalog: &CatalogService, id: &str) -> Result<()> {
    catalog.delete(id).await?;
    println!("Deleted {}", id);
    Ok(())
}

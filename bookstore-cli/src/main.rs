//! Bookstore CLI - Command-line access to a catalog file

mod commands;

use anyhow::{Context, Result};
use bookstore_core::storage::JsonFileRepository;
use bookstore_core::{CatalogService, Category};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate page size argument (must be at least 1)
fn parse_size(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("size must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "bookstore-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Catalog file
    #[arg(long, global = true, default_value = "./bookstore_data/catalog.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a book to the catalog
    Add {
        /// Book name
        #[arg(short, long)]
        name: String,

        /// Author name
        #[arg(short, long)]
        author: String,

        /// Category (technical, fiction, biography, history, science, children)
        #[arg(short, long)]
        category: Category,
    },

    /// Show a single book
    Get {
        /// Book id
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a book
    Delete {
        /// Book id
        id: String,
    },

    /// List books, optionally filtered by author and category
    List {
        /// Only books by this author
        #[arg(short, long)]
        author: Option<String>,

        /// Only books in this category
        #[arg(short, long)]
        category: Option<Category>,

        #[command(flatten)]
        page: PageArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search books with a field:value query
    Search {
        /// Query such as author:Chetan
        query: String,

        #[command(flatten)]
        page: PageArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct PageArgs {
    /// Page number (0-indexed)
    #[arg(long, default_value = "0")]
    page: u32,

    /// Items per page (must be at least 1)
    #[arg(long, default_value = "50", value_parser = parse_size)]
    size: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "bookstore_cli=debug,bookstore_core=debug"
    } else {
        "bookstore_cli=info,bookstore_core=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let repository = JsonFileRepository::open(&cli.store)
        .await
        .with_context(|| format!("Failed to open catalog: {}", cli.store.display()))?;
    let catalog = CatalogService::new(Arc::new(repository));

    match cli.command {
        Commands::Add {
            name,
            author,
            category,
        } => commands::add(&catalog, name, author, category).await,

        Commands::Get { id, json } => commands::get(&catalog, &id, json).await,

        Commands::Delete { id } => commands::delete(&catalog, &id).await,

        Commands::List {
            author,
            category,
            page,
            json,
        } => {
            commands::list(
                &catalog,
                author.as_deref(),
                category,
                page.page,
                page.size,
                json,
            )
            .await
        }

        Commands::Search { query, page, json } => {
            commands::search(&catalog, &query, page.page, page.size, json).await
        }
    }
}

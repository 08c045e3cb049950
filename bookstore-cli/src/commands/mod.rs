//! CLI command implementations

mod add;
mod delete;
mod get;
mod list;

pub use add::add;
pub use delete::delete;
pub use get::get;
pub use list::{list, search};

use bookstore_core::Book;

/// Print one book as aligned text
fn print_book(book: &Book) {
    println!("Id:       {}", book.id);
    println!("Name:     {}", book.name);
    println!("Author:   {}", book.author);
    println!("Category: {}", book.category);
}

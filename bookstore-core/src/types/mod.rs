//! Core catalog types

mod book;
mod category;
mod page;

pub use book::Book;
pub use category::Category;
pub use page::{Page, PageRequest};

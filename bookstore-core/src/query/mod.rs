//! Query predicates: criteria, the filter builder, and filter evaluation
//!
//! A raw search string such as `author:Chetan` is parsed into [`Criterion`]
//! values, accumulated by a [`FilterBuilder`], and compiled into a [`Filter`]
//! that repositories evaluate before pagination.

mod builder;
mod criterion;
mod filter;
mod parser;

pub use builder::{Composition, FilterBuilder};
pub use criterion::{BookField, Criterion, SearchOperation, EQUALITY_TOKEN};
pub use filter::{evaluate, Filter};
pub use parser::parse_query;

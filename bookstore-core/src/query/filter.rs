//! Composed filters and their evaluation against book records

use super::{BookField, Criterion, SearchOperation};
use crate::types::{Book, Page, PageRequest};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One or more criteria combined with logical AND
///
/// Always holds at least one criterion; "no filter" is expressed as
/// `Option<Filter>::None` by the builder and the repositories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Filter {
    criteria: Vec<Criterion>,
}

impl Filter {
    /// A filter with a single criterion
    pub fn new(criterion: Criterion) -> Self {
        Self {
            criteria: vec![criterion],
        }
    }

    /// Equality on a single field
    pub fn field_eq(field: BookField, value: impl Into<String>) -> Self {
        Self::new(Criterion::equals(field, value))
    }

    /// AND another criterion onto this filter
    pub fn and(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    /// Whether a book satisfies every criterion
    pub fn matches(&self, book: &Book) -> bool {
        self.criteria.iter().all(|c| criterion_matches(c, book))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, criterion) in self.criteria.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{}", criterion)?;
        }
        Ok(())
    }
}

fn criterion_matches(criterion: &Criterion, book: &Book) -> bool {
    match criterion.operation() {
        SearchOperation::Equality => book.field(criterion.field()) == criterion.value(),
    }
}

/// Filter a record set, then cut the requested page out of the matches
///
/// Totals on the returned page count every match, not just the page.
pub fn evaluate<'a, I>(filter: Option<&Filter>, books: I, request: PageRequest) -> Page<Book>
where
    I: IntoIterator<Item = &'a Book>,
{
    let matches = books
        .into_iter()
        .filter(|book| filter.map_or(true, |f| f.matches(book)))
        .cloned();
    Page::from_matches(matches, request)
}

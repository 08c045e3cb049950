//! Incremental construction of composed filters

use super::{Criterion, Filter, SearchOperation};
use crate::error::ValidationError;

/// How accumulated criteria are compiled by [`FilterBuilder::build`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Composition {
    /// Only the first accumulated criterion is honored
    #[default]
    FirstOnly,

    /// Every accumulated criterion is ANDed together
    Conjunctive,
}

/// Accumulates criteria and compiles them into one [`Filter`]
///
/// ```
/// use bookstore_core::query::FilterBuilder;
///
/// let filter = FilterBuilder::new().with("author", ":", "Chetan")?.build();
/// assert!(filter.is_some());
/// assert!(FilterBuilder::new().build().is_none());
/// # Ok::<(), bookstore_core::error::ValidationError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    criteria: Vec<Criterion>,
    composition: Composition,
}

impl FilterBuilder {
    /// Builder that honors only the first criterion
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder that ANDs all criteria
    pub fn conjunctive() -> Self {
        Self {
            criteria: Vec::new(),
            composition: Composition::Conjunctive,
        }
    }

    /// Add a criterion, failing on an unknown field or operator token
    pub fn with(
        mut self,
        key: &str,
        token: &str,
        value: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        self.criteria.push(Criterion::parse(key, token, value)?);
        Ok(self)
    }

    /// Add a criterion, silently skipping it if the operator token is not recognised
    ///
    /// Unknown fields are still rejected.
    pub fn with_lenient(
        self,
        key: &str,
        token: &str,
        value: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if SearchOperation::from_token(token).is_err() {
            tracing::debug!(key, operation = token, "Skipping criterion with unsupported operation");
            return Ok(self);
        }
        self.with(key, token, value)
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Compile the accumulated criteria; `None` when nothing was added
    pub fn build(self) -> Option<Filter> {
        let mut criteria = self.criteria.into_iter();
        let first = Filter::new(criteria.next()?);
        match self.composition {
            Composition::FirstOnly => Some(first),
            Composition::Conjunctive => Some(criteria.fold(first, Filter::and)),
        }
    }
}

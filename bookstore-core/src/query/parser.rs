//! Parsing of raw `field:value` search queries

use super::{Filter, FilterBuilder, EQUALITY_TOKEN};
use crate::error::ValidationError;

/// Parse a search query of the form `field:value` into a single-criterion filter
///
/// The query is trimmed and split on the first `:`, so the value may itself
/// contain colons. Queries without a separator or with an empty value are rejected.
pub fn parse_query(query: &str) -> Result<Filter, ValidationError> {
    let trimmed = query.trim();
    let (key, value) = trimmed
        .split_once(EQUALITY_TOKEN)
        .ok_or_else(|| ValidationError::InvalidQuery(query.to_string()))?;

    if value.is_empty() {
        return Err(ValidationError::InvalidQuery(query.to_string()));
    }

    FilterBuilder::new()
        .with(key, &EQUALITY_TOKEN.to_string(), value)?
        .build()
        .ok_or_else(|| ValidationError::InvalidQuery(query.to_string()))
}

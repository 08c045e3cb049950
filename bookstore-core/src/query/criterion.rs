//! Single filter conditions

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between field and value in a search query
pub const EQUALITY_TOKEN: char = ':';

/// Book fields that can appear in a criterion
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BookField {
    Id,
    Name,
    Author,
    Category,
}

impl BookField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Author => "author",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the field name
impl FromStr for BookField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "author" => Ok(Self::Author),
            "category" => Ok(Self::Category),
            _ => Err(ValidationError::UnknownField(s.to_string())),
        }
    }
}

/// Comparison operators. Only equality is supported for now.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SearchOperation {
    Equality,
}

impl SearchOperation {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            EQUALITY_TOKEN => Some(Self::Equality),
            _ => None,
        }
    }

    /// Parse an operator token; tokens are exactly one character
    pub fn from_token(token: &str) -> Result<Self, ValidationError> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
        .ok_or_else(|| ValidationError::UnsupportedOperation(token.to_string()))
    }

    pub fn token(&self) -> char {
        match self {
            Self::Equality => EQUALITY_TOKEN,
        }
    }
}

/// A single field/operator/value condition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Criterion {
    field: BookField,
    operation: SearchOperation,
    value: String,
}

impl Criterion {
    pub fn new(field: BookField, operation: SearchOperation, value: impl Into<String>) -> Self {
        Self {
            field,
            operation,
            value: value.into(),
        }
    }

    /// Build from raw key and operator token, rejecting unknown fields and operators
    pub fn parse(key: &str, token: &str, value: impl Into<String>) -> Result<Self, ValidationError> {
        let operation = SearchOperation::from_token(token)?;
        let field = key.parse()?;
        Ok(Self::new(field, operation, value))
    }

    /// Shorthand for an equality criterion
    pub fn equals(field: BookField, value: impl Into<String>) -> Self {
        Self::new(field, SearchOperation::Equality, value)
    }

    pub fn field(&self) -> BookField {
        self.field
    }

    pub fn operation(&self) -> SearchOperation {
        self.operation
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, self.operation.token(), self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_equality() {
        let criterion = Criterion::parse("author", ":", "Chetan").unwrap();
        assert_eq!(criterion.field(), BookField::Author);
        assert_eq!(criterion.operation(), SearchOperation::Equality);
        assert_eq!(criterion.value(), "Chetan");
        assert_eq!(criterion.to_string(), "author:Chetan");
    }

    #[test]
    fn test_unknown_operation() {
        assert_eq!(
            Criterion::parse("author", ">", "x"),
            Err(ValidationError::UnsupportedOperation(">".into()))
        );
        assert_eq!(
            SearchOperation::from_token(""),
            Err(ValidationError::UnsupportedOperation("".into()))
        );
        assert!(SearchOperation::from_token("::").is_err());
    }

    #[test]
    fn test_unknown_field() {
        assert_eq!(
            Criterion::parse("title", ":", "x"),
            Err(ValidationError::UnknownField("title".into()))
        );
        // field names are case-sensitive
        assert!(Criterion::parse("Author", ":", "x").is_err());
    }
}

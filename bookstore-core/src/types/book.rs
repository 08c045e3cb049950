//! The Book record stored in the catalog

use super::Category;
use crate::error::ValidationError;
use crate::query::BookField;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Unique identifier, assigned at creation
    pub id: String,

    /// Book title
    pub name: String,

    /// Author name
    pub author: String,

    pub category: Category,
}

impl Book {
    /// Create a new book with a freshly generated id
    pub fn new(name: impl Into<String>, author: impl Into<String>, category: Category) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            author: author.into(),
            category,
        }
    }

    /// String value of a filterable field
    pub fn field(&self, field: BookField) -> &str {
        match field {
            BookField::Id => &self.id,
            BookField::Name => &self.name,
            BookField::Author => &self.author,
            BookField::Category => self.category.as_str(),
        }
    }

    /// Check that every property is present
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingProperty("id"));
        }
        if self.name.is_empty() {
            return Err(ValidationError::MissingProperty("name"));
        }
        if self.author.is_empty() {
            return Err(ValidationError::MissingProperty("author"));
        }
        Ok(())
    }
}

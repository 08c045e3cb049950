//! Book categories

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of categories a book can belong to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Technical,
    Fiction,
    Biography,
    History,
    Science,
    Children,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Technical,
        Category::Fiction,
        Category::Biography,
        Category::History,
        Category::Science,
        Category::Children,
    ];

    /// Canonical value used for storage and filtering
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::Fiction => "Fiction",
            Self::Biography => "Biography",
            Self::History => "History",
            Self::Science => "Science",
            Self::Children => "Children",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse, for user-supplied values
impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

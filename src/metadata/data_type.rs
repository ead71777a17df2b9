use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Declared type of a metadata column. Drives which operators a column
/// accepts and how literals are coerced against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    Text,
    Boolean,
    Integer,
    DateTime,
    Json,
    Tabular,
}

impl DataType {
    /// Ordering comparisons (`<`, `<=`, `>`, `>=`) and BETWEEN only make
    /// sense for types with a total order in the store.
    pub fn is_ordered(self) -> bool {
        matches!(self, DataType::Text | DataType::Integer | DataType::DateTime)
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Text => "text",
            DataType::Boolean => "boolean",
            DataType::Integer => "integer",
            DataType::DateTime => "datetime",
            DataType::Json => "json",
            DataType::Tabular => "tabular",
        };
        write!(f, "{}", name)
    }
}

use std::fmt::{self, Display};

/// Error raised while binding raw query names against the registry.
/// Resolution is all-or-nothing; the first failing name aborts the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// The name matches no current or historical registry entry.
    UnknownIdentifier(String),
    /// A tabular entity was named where a scalar column is required, so
    /// which of its columns is meant cannot be decided.
    AmbiguousTabularReference(String),
    /// The FROM clause or a dotted qualifier names something that is not a
    /// tabular entity.
    NotAnEntity(String),
}

impl Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionError::UnknownIdentifier(name) => {
                write!(f, "Unknown identifier '{}'", name)
            }
            ResolutionError::AmbiguousTabularReference(name) => {
                write!(f, "'{}' is a tabular entity; name one of its columns", name)
            }
            ResolutionError::NotAnEntity(name) => {
                write!(f, "'{}' is not a queryable entity", name)
            }
        }
    }
}

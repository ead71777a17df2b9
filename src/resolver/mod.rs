pub mod error;
pub use error::*;

pub mod logical_query;
pub use logical_query::*;

pub mod identifier_resolver;
pub use identifier_resolver::*;

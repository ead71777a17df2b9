pub mod error;
pub use error::*;

pub mod value;
pub use value::*;

pub mod plan;
pub use plan::*;

pub mod predicate_compiler;
pub use predicate_compiler::*;

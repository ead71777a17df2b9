pub mod query_parser;
pub use query_parser::*;

pub mod keyword;
pub use keyword::*;

pub mod keywords;
pub use keywords::*;

pub mod syntax_error;
pub use syntax_error::*;

pub mod ast;

pub mod name;
pub use name::*;

pub mod literal;
pub use literal::*;

pub mod column;
pub use column::*;

pub mod predicate;
pub use predicate::*;

pub mod order_term;
pub use order_term::*;

pub mod query;
pub use query::*;

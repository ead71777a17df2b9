pub mod data_type;
pub use data_type::*;

pub mod descriptor;
pub use descriptor::*;

pub mod registry;
pub use registry::*;

pub mod catalog;
pub use catalog::*;

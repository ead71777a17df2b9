use std::fmt::{self, Display};

use crate::metadata::DataType;
use crate::parser::SyntaxError;
use crate::resolver::ResolutionError;

/// Error raised while lowering a resolved predicate against column types.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeError {
    /// The operator is not defined for the column's type, e.g. LIKE on a
    /// boolean or `<` on json.
    IncompatibleOperator {
        column: String,
        data_type: DataType,
        operator: String,
    },
    /// The literal cannot be coerced to the column's type.
    IncompatibleLiteral {
        column: String,
        data_type: DataType,
        literal: String,
    },
}

impl Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::IncompatibleOperator { column, data_type, operator } => {
                write!(f, "Operator {} is not valid for {} column '{}'", operator, data_type, column)
            }
            TypeError::IncompatibleLiteral { column, data_type, literal } => {
                write!(f, "Value {} cannot be applied to {} column '{}'", literal, data_type, column)
            }
        }
    }
}

/// Any failure along the compile pipeline, in pipeline order.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    Syntax(SyntaxError),
    Resolution(ResolutionError),
    Type(TypeError),
}

impl From<SyntaxError> for CompileError {
    fn from(value: SyntaxError) -> Self {
        CompileError::Syntax(value)
    }
}

impl From<ResolutionError> for CompileError {
    fn from(value: ResolutionError) -> Self {
        CompileError::Resolution(value)
    }
}

impl From<TypeError> for CompileError {
    fn from(value: TypeError) -> Self {
        CompileError::Type(value)
    }
}

impl Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::Syntax(err) => write!(f, "{}", err),
            CompileError::Resolution(err) => write!(f, "{}", err),
            CompileError::Type(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CompileError {}

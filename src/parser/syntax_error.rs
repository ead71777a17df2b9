use std::fmt::Display;

use crate::parser::QueryParser;

/// The source text does not conform to the grammar. Carries the offending
/// slice of the input and its character span.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    pub message: String,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl SyntaxError {
    pub fn new(message: &str, pivot: usize, parser: &QueryParser) -> Self {
        Self {
            message: message.to_string(),
            text: parser.text_from_range(pivot, parser.position + 1),
            start: pivot,
            end: parser.position,
        }
    }

    pub fn err<T>(self) -> Result<T, SyntaxError> {
        Err(self)
    }
}

impl Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SyntaxError: {}\n  at [{}:{}] -> '{}'",
            self.message,
            self.start,
            self.end,
            self.text
        )
    }
}

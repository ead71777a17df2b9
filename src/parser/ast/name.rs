use crate::parser::{Keyword, QueryParser, SyntaxError};

pub struct NameCollector;

impl NameCollector {
    /// Collect one bare identifier: a letter or underscore followed by
    /// letters, digits or underscores. Stops at any delimiter.
    pub fn collect(parser: &mut QueryParser) -> Result<String, SyntaxError> {
        let pivot = parser.position;

        let current = parser.current();
        if !current.is_ascii_alphabetic() && current != '_' {
            return SyntaxError::new("Invalid name", pivot, parser).err();
        }

        while !parser.eof() && !Keyword::is_delimiter(parser.current()) {
            let current = parser.current();
            if !current.is_ascii_alphanumeric() && current != '_' {
                return SyntaxError::new("Invalid name", pivot, parser).err();
            }
            parser.next();
        }

        Ok(parser.text_from_pivot(pivot))
    }
}

use crate::parser::QueryParser;

/// Case-insensitive matcher for one keyword or symbol at the cursor.
///
/// A match only succeeds when the character following the word is one of the
/// configured postfixes, so `LIKEWISE` never matches the `LIKE` keyword.
#[derive(Debug, Default)]
pub struct Keyword {
    pub length: usize,
    word: Vec<char>,
    whitespace_postfix: bool,
    any_delimiter_postfix: bool,
    eof: bool,
    delimiter: Option<char>,
    optional_postfix: Vec<char>,
}

impl Keyword {
    pub fn new(word: &str) -> Self {
        Self {
            length: word.chars().count(),
            word: word.to_uppercase().chars().collect(),
            whitespace_postfix: false,
            any_delimiter_postfix: false,
            eof: false,
            delimiter: None,
            optional_postfix: vec![],
        }
    }

    pub fn is_delimiter(ch: char) -> bool {
        ch == ',' || ch == '(' || ch == ')' || ch == '.' || ch.is_ascii_whitespace()
    }

    pub fn reach_eof(&self, parser: &QueryParser) -> bool {
        parser.position + self.length >= parser.length
    }

    pub fn matches(&self, parser: &QueryParser) -> bool {
        let mut position = 0;
        while position < self.length {
            if (parser.position + position) >= parser.length ||
                self.word[position] != parser.text_v[parser.position + position].to_ascii_uppercase() {
                return false;
            }
            position += 1;
        }

        if self.reach_eof(parser) {
            return self.eof;
        }

        if self.delimiter.is_none() && !self.any_delimiter_postfix && !self.whitespace_postfix &&
            self.optional_postfix.is_empty() {
            return true;
        }

        let next = parser.text_v[parser.position + position];

        if let Some(delimiter) = self.delimiter {
            if next == delimiter {
                return true;
            }
        }

        if self.any_delimiter_postfix && Self::is_delimiter(next) {
            return true;
        }

        if self.whitespace_postfix && next.is_ascii_whitespace() {
            return true;
        }

        self.optional_postfix.contains(&next)
    }

    pub fn with_eof(mut self) -> Self { self.eof = true; self }
    pub fn with_whitespace_postfix(mut self) -> Self { self.whitespace_postfix = true; self }
    pub fn with_any_delimiter_postfix(mut self) -> Self { self.any_delimiter_postfix = true; self }
    pub fn with_delimiter(mut self, delimiter: char) -> Self { self.delimiter = Some(delimiter); self }
    pub fn with_optional_postfix(mut self, value: char) -> Self { self.optional_postfix.push(value); self }
}

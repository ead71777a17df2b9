use std::fmt::{self, Display};

use ordered_float::NotNan;

use crate::parser::{QueryParser, SyntaxError};

/// A literal value appearing in a WHERE clause.
///
/// `Now` is a symbolic literal; it keeps its symbolic form in the AST and is
/// resolved to a wall-clock timestamp by the predicate compiler, not at
/// execution time.
#[derive(Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    Numeric(NotNan<f64>),
    String(String),
    Bool(bool),
    Null,
    Now,
}

impl Literal {
    pub fn parse(parser: &mut QueryParser) -> Result<Self, SyntaxError> {
        let pivot = parser.position;
        let current = parser.current();

        if current == '\'' || current == '"' {
            return Ok(Literal::String(Self::parse_quoted(parser)?));
        }

        if current.is_ascii_digit() || current == '+' || current == '-' {
            return Self::parse_number(parser);
        }

        if parser.keywords.b_true.matches(parser) {
            parser.jump(parser.keywords.b_true.length);
            return Ok(Literal::Bool(true));
        }

        if parser.keywords.b_false.matches(parser) {
            parser.jump(parser.keywords.b_false.length);
            return Ok(Literal::Bool(false));
        }

        if parser.keywords.null.matches(parser) {
            parser.jump(parser.keywords.null.length);
            return Ok(Literal::Null);
        }

        if parser.keywords.now.matches(parser) {
            parser.jump(parser.keywords.now.length);
            return Ok(Literal::Now);
        }

        SyntaxError::new("Invalid literal", pivot, parser).err()
    }

    /// Parse a single- or double-quoted string. The closing quote must match
    /// the opening one; there is no escape sequence in the grammar.
    pub fn parse_quoted(parser: &mut QueryParser) -> Result<String, SyntaxError> {
        let quote = parser.current();
        if quote != '\'' && quote != '"' {
            return SyntaxError::new("Invalid string value", parser.position, parser).err();
        }
        parser.next();
        let pivot = parser.position;

        while !parser.eof() && parser.current() != quote {
            parser.next();
        }
        if parser.eof() {
            return SyntaxError::new("Unterminated string", pivot, parser).err();
        }

        let text = parser.text_from_pivot(pivot);
        parser.next();

        Ok(text)
    }

    fn parse_number(parser: &mut QueryParser) -> Result<Self, SyntaxError> {
        let pivot = parser.position;
        let mut is_numeric = false;

        if parser.current() == '+' || parser.current() == '-' {
            parser.next();
        }

        while !parser.eof() && (parser.current().is_ascii_digit() || parser.current() == '.') {
            if parser.current() == '.' {
                if is_numeric {
                    return SyntaxError::new("Invalid number value", pivot, parser).err();
                }
                is_numeric = true;
            }
            parser.next();
        }

        let text = parser.text_from_pivot(pivot);
        if text.is_empty() || text == "+" || text == "-" {
            return SyntaxError::new("Invalid number value", pivot, parser).err();
        }

        if is_numeric {
            let value = text.parse::<f64>()
                .map_err(|_| SyntaxError::new("Invalid number value", pivot, parser))?;
            let value = NotNan::new(value)
                .map_err(|_| SyntaxError::new("Invalid number value", pivot, parser))?;
            return Ok(Literal::Numeric(value));
        }

        let value = text.parse::<i64>()
            .map_err(|_| SyntaxError::new("Invalid number value", pivot, parser))?;
        Ok(Literal::Integer(value))
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(i) => write!(f, "{}", i),
            Literal::Numeric(n) => write!(f, "{}", n.into_inner()),
            Literal::String(s) => write!(f, "'{}'", s),
            Literal::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Literal::Null => write!(f, "NULL"),
            Literal::Now => write!(f, "NOW"),
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(_) => write!(f, "Integer({})", self),
            Literal::Numeric(_) => write!(f, "Numeric({})", self),
            Literal::String(_) => write!(f, "String({})", self),
            Literal::Bool(_) => write!(f, "Bool({})", self),
            Literal::Null => write!(f, "Null"),
            Literal::Now => write!(f, "Now"),
        }
    }
}

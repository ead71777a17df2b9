use std::fmt;

use crate::parser::{ast::{Literal, NameCollector}, QueryParser, SyntaxError};

/// An unresolved column reference, optionally qualified by a tabular entity
/// name (`alias.path`).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    pub entity: Option<String>,
    pub name: String,
}

impl ColumnRef {
    pub fn parse(parser: &mut QueryParser) -> Result<Self, SyntaxError> {
        let first = NameCollector::collect(parser)?;

        if parser.current() == '.' {
            parser.next();
            let name = NameCollector::collect(parser)?;
            return Ok(Self { entity: Some(first), name });
        }

        Ok(Self { entity: None, name: first })
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.entity {
            Some(entity) => write!(f, "{}.{}", entity, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl fmt::Debug for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColumnRef({})", self)
    }
}

/// One SELECT list entry: a column with an optional output alias.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectColumn {
    pub column: ColumnRef,
    pub alias: Option<String>,
}

impl SelectColumn {
    /// Parse `column (AS? (NAME | STRING))?`. The AS keyword is optional: a
    /// trailing bare name or string that is not a clause keyword is still an
    /// alias, resolved by lookahead.
    pub fn parse(parser: &mut QueryParser) -> Result<Self, SyntaxError> {
        let column = ColumnRef::parse(parser)?;
        parser.next_non_whitespace();

        if parser.eof() || parser.current() == ',' {
            return Ok(Self { column, alias: None });
        }

        if Self::at_clause_keyword(parser) {
            return Ok(Self { column, alias: None });
        }

        if parser.keywords.alias.matches(parser) {
            parser.jump(parser.keywords.alias.length);
            parser.next_non_whitespace();
        }

        let alias = if parser.current() == '\'' || parser.current() == '"' {
            Literal::parse_quoted(parser)?
        } else {
            NameCollector::collect(parser)?
        };

        Ok(Self { column, alias: Some(alias) })
    }

    pub fn parse_list(parser: &mut QueryParser) -> Result<Vec<Self>, SyntaxError> {
        let mut items = vec![];

        loop {
            parser.next_non_whitespace();
            items.push(Self::parse(parser)?);
            parser.next_non_whitespace();

            if parser.current() == ',' {
                parser.next();
                continue;
            }
            if parser.check_next_phase() {
                break;
            }
            return SyntaxError::new("Expected ',' or FROM", parser.position, parser).err();
        }

        Ok(items)
    }

    fn at_clause_keyword(parser: &QueryParser) -> bool {
        parser.keywords.from.matches(parser)
            || parser.keywords.r#where.matches(parser)
            || parser.keywords.order_by.matches(parser)
            || parser.keywords.limit.matches(parser)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::SelectColumn, QueryParser};

    #[test]
    pub fn test_select_column_bare() {
        let mut parser = QueryParser::new("title");
        let result = SelectColumn::parse(&mut parser).expect("Failed to parse column");
        assert_eq!(result.column.name, "title");
        assert_eq!(result.column.entity, None);
        assert_eq!(result.alias, None);
    }

    #[test]
    pub fn test_select_column_dotted() {
        let mut parser = QueryParser::new("alias.path");
        let result = SelectColumn::parse(&mut parser).expect("Failed to parse column");
        assert_eq!(result.column.entity.as_deref(), Some("alias"));
        assert_eq!(result.column.name, "path");
    }

    #[test]
    pub fn test_select_column_with_as_alias() {
        let mut parser = QueryParser::new("path AS p");
        let result = SelectColumn::parse(&mut parser).expect("Failed to parse column");
        assert_eq!(result.column.name, "path");
        assert_eq!(result.alias.as_deref(), Some("p"));
    }

    #[test]
    pub fn test_select_column_alias_without_as() {
        let mut parser = QueryParser::new("path p");
        let result = SelectColumn::parse(&mut parser).expect("Failed to parse column");
        assert_eq!(result.alias.as_deref(), Some("p"));
    }

    #[test]
    pub fn test_select_column_string_alias_without_as() {
        let mut parser = QueryParser::new("path 'the path'");
        let result = SelectColumn::parse(&mut parser).expect("Failed to parse column");
        assert_eq!(result.alias.as_deref(), Some("the path"));
    }

    #[test]
    pub fn test_select_column_keyword_is_not_alias() {
        let mut parser = QueryParser::new("title FROM page");
        let result = SelectColumn::parse(&mut parser).expect("Failed to parse column");
        assert_eq!(result.alias, None);
    }

    #[test]
    pub fn test_select_column_list() {
        let mut parser = QueryParser::new("title, created, alias.path AS p FROM page");
        let result = SelectColumn::parse_list(&mut parser).expect("Failed to parse columns");
        assert_eq!(result.len(), 3);
        assert_eq!(result[2].alias.as_deref(), Some("p"));
    }

    #[test]
    pub fn test_select_column_list_trailing_junk() {
        let mut parser = QueryParser::new("title &");
        assert!(SelectColumn::parse_list(&mut parser).is_err());
    }

    #[test]
    pub fn test_select_column_double_dot_rejected() {
        let mut parser = QueryParser::new("a.b.c FROM page");
        assert!(SelectColumn::parse_list(&mut parser).is_err());
    }
}

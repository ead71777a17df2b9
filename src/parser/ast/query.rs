use std::fmt;

use crate::parser::{
    ast::{Literal, NameCollector, OrderTerm, PredicateChain, SelectColumn},
    Phase, QueryParser, SyntaxError,
};

/// The parsed but unresolved form of one logical query. Column and table
/// names are still plain strings; the identifier resolver validates them.
#[derive(Debug, Clone, PartialEq)]
pub struct RawQuery {
    pub columns: Vec<SelectColumn>,
    pub table: String,
    pub predicate: Option<PredicateChain>,
    pub order_by: Vec<OrderTerm>,
    pub limit: Option<u32>,
}

impl RawQuery {
    pub fn parse(parser: &mut QueryParser) -> Result<Self, SyntaxError> {
        parser.next_non_whitespace();

        if !parser.keywords.select.matches(parser) {
            return SyntaxError::new("Expected SELECT", parser.position, parser).err();
        }
        parser.jump(parser.keywords.select.length);

        let columns = SelectColumn::parse_list(parser)?;

        if parser.phase != Phase::Source {
            return SyntaxError::new("Expected FROM", parser.position, parser).err();
        }
        parser.jump(parser.keywords.from.length);
        parser.next_non_whitespace();
        let table = NameCollector::collect(parser)?;

        if !parser.check_next_phase() {
            return SyntaxError::new("Unexpected input after table name", parser.position, parser).err();
        }

        let mut query = RawQuery {
            columns,
            table,
            predicate: None,
            order_by: vec![],
            limit: None,
        };

        while parser.phase != Phase::EOF {
            match parser.phase {
                Phase::Criteria => query.predicate = Some(PredicateChain::parse(parser)?),
                Phase::OrderBy => query.order_by = OrderTerm::parse(parser)?,
                Phase::Limit => query.limit = Some(Self::parse_limit(parser)?),
                _ => return SyntaxError::new("Unexpected clause", parser.position, parser).err(),
            }
        }

        Ok(query)
    }

    fn parse_limit(parser: &mut QueryParser) -> Result<u32, SyntaxError> {
        if !parser.keywords.limit.matches(parser) {
            return SyntaxError::new("Expected LIMIT", parser.position, parser).err();
        }
        parser.jump(parser.keywords.limit.length);
        parser.next_non_whitespace();

        let pivot = parser.position;
        let value = Literal::parse(parser)?;
        let limit = match value {
            Literal::Integer(v) if (0..=i64::from(u32::MAX)).contains(&v) => v as u32,
            _ => return SyntaxError::new("Invalid limit", pivot, parser).err(),
        };

        if !parser.check_next_phase() || parser.phase != Phase::EOF {
            return SyntaxError::new("Unexpected input after LIMIT", parser.position, parser).err();
        }

        Ok(limit)
    }
}

impl TryFrom<&str> for RawQuery {
    type Error = SyntaxError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut parser = QueryParser::new(value);
        RawQuery::parse(&mut parser)
    }
}

impl fmt::Display for RawQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.columns.iter()
            .map(|c| format!("{:?}", c))
            .collect::<Vec<_>>()
            .join(", ");
        let pred = match &self.predicate {
            Some(p) => format!("{:?}", p),
            None => "None".to_string(),
        };
        let order = self.order_by.iter()
            .map(|o| format!("{:?}", o))
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "RawQuery(columns=[{}], table={}, predicate={}, order_by=[{}], limit={:?})",
               cols, self.table, pred, order, self.limit)
    }
}

use crate::parser::{ast::ColumnRef, Phase, QueryParser, SyntaxError};

/// One ORDER BY term. Ascending is the default direction.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTerm {
    pub column: ColumnRef,
    pub descending: bool,
}

impl OrderTerm {
    pub fn parse_single(parser: &mut QueryParser) -> Result<Self, SyntaxError> {
        let column = ColumnRef::parse(parser)?;
        parser.next_non_whitespace();

        if parser.current() == ',' || parser.check_next_phase() {
            return Ok(Self { column, descending: false });
        }

        if parser.keywords.asc.matches(parser) {
            parser.jump(parser.keywords.asc.length);
            parser.check_next_phase();
            return Ok(Self { column, descending: false });
        }

        if parser.keywords.desc.matches(parser) {
            parser.jump(parser.keywords.desc.length);
            parser.check_next_phase();
            return Ok(Self { column, descending: true });
        }

        SyntaxError::new("Invalid order by", parser.position, parser).err()
    }

    pub fn parse(parser: &mut QueryParser) -> Result<Vec<Self>, SyntaxError> {
        if !parser.keywords.order_by.matches(parser) {
            return SyntaxError::new("Expected ORDER BY", parser.position, parser).err();
        }
        parser.jump(parser.keywords.order_by.length);
        parser.next_non_whitespace();

        let mut terms: Vec<Self> = vec![];
        let mut can_consume = true;
        while parser.phase == Phase::OrderBy {
            if parser.current() == ',' {
                if can_consume {
                    return SyntaxError::new("Invalid order by", parser.position, parser).err();
                }
                can_consume = true;
                parser.next();
                parser.next_non_whitespace();
            }
            if can_consume {
                terms.push(Self::parse_single(parser)?);
                parser.next_non_whitespace();
                can_consume = false;
            } else {
                return SyntaxError::new("Invalid order by", parser.position, parser).err();
            }
        }

        Ok(terms)
    }
}

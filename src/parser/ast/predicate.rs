use serde::{Deserialize, Serialize};

use crate::parser::{ast::{ColumnRef, Literal}, QueryParser, SyntaxError};

/// `=`, `<`, `<=`, `>`, `>=`, `!=` (also spelled `<>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl CompareOp {
    pub fn is_equality(self) -> bool {
        matches!(self, CompareOp::Eq | CompareOp::NotEq)
    }

    /// Consume the operator at the cursor, if any.
    pub fn parse(parser: &mut QueryParser) -> Option<Self> {
        match parser.current() {
            '=' => {
                parser.next();
                Some(CompareOp::Eq)
            }
            '!' if parser.peek(1) == '=' => {
                parser.jump(2);
                Some(CompareOp::NotEq)
            }
            '<' => match parser.peek(1) {
                '=' => {
                    parser.jump(2);
                    Some(CompareOp::LtEq)
                }
                '>' => {
                    parser.jump(2);
                    Some(CompareOp::NotEq)
                }
                _ => {
                    parser.next();
                    Some(CompareOp::Lt)
                }
            },
            '>' => {
                if parser.peek(1) == '=' {
                    parser.jump(2);
                    Some(CompareOp::GtEq)
                } else {
                    parser.next();
                    Some(CompareOp::Gt)
                }
            }
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::NotEq => "!=",
            CompareOp::Lt => "<",
            CompareOp::LtEq => "<=",
            CompareOp::Gt => ">",
            CompareOp::GtEq => ">=",
        }
    }
}

/// Connective between two neighbouring predicates in a WHERE chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BooleanOp {
    And,
    Or,
}

/// LIKE uses `%`/`_` wildcards, GLOB uses `*`/`?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternKind {
    Like,
    Glob,
}

/// One predicate of a WHERE chain, still unresolved. NOT is folded into the
/// `negated` flag rather than kept as a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Comparison { column: ColumnRef, op: CompareOp, value: Literal },
    LikeOrGlob { column: ColumnRef, negated: bool, kind: PatternKind, pattern: Literal },
    Between { column: ColumnRef, negated: bool, low: Literal, high: Literal },
    InList { column: ColumnRef, negated: bool, values: Vec<Literal> },
}

impl Predicate {
    pub fn column(&self) -> &ColumnRef {
        match self {
            Predicate::Comparison { column, .. }
            | Predicate::LikeOrGlob { column, .. }
            | Predicate::Between { column, .. }
            | Predicate::InList { column, .. } => column,
        }
    }

    pub fn parse_single(parser: &mut QueryParser) -> Result<Self, SyntaxError> {
        let column = ColumnRef::parse(parser)?;
        parser.next_non_whitespace();

        let pivot = parser.position;

        if let Some(op) = CompareOp::parse(parser) {
            parser.next_non_whitespace();
            let value = Literal::parse(parser)?;
            return Ok(Self::Comparison { column, op, value });
        }

        let mut negated = false;
        if parser.keywords.not.matches(parser) {
            parser.jump(parser.keywords.not.length);
            parser.next_non_whitespace();
            negated = true;
        }

        if parser.keywords.like.matches(parser) {
            let pattern = Self::parse_pattern(parser, parser.keywords.like.length)?;
            return Ok(Self::LikeOrGlob { column, negated, kind: PatternKind::Like, pattern });
        }

        if parser.keywords.glob.matches(parser) {
            let pattern = Self::parse_pattern(parser, parser.keywords.glob.length)?;
            return Ok(Self::LikeOrGlob { column, negated, kind: PatternKind::Glob, pattern });
        }

        if parser.keywords.between.matches(parser) {
            parser.jump(parser.keywords.between.length);
            parser.next_non_whitespace();
            let low = Literal::parse(parser)?;
            parser.next_non_whitespace();

            if !parser.keywords.and.matches(parser) {
                return SyntaxError::new("Expected AND in BETWEEN", parser.position, parser).err();
            }
            parser.jump(parser.keywords.and.length);
            parser.next_non_whitespace();
            let high = Literal::parse(parser)?;

            return Ok(Self::Between { column, negated, low, high });
        }

        if parser.keywords.r#in.matches(parser) {
            parser.jump(parser.keywords.r#in.length);
            let values = Self::parse_in_list(parser)?;
            return Ok(Self::InList { column, negated, values });
        }

        SyntaxError::new("Invalid predicate", pivot, parser).err()
    }

    fn parse_pattern(parser: &mut QueryParser, keyword_length: usize) -> Result<Literal, SyntaxError> {
        parser.jump(keyword_length);
        parser.next_non_whitespace();
        Literal::parse(parser)
    }

    /// Parse `'(' (literal (',' literal)*)? ')'`. An empty list is legal.
    fn parse_in_list(parser: &mut QueryParser) -> Result<Vec<Literal>, SyntaxError> {
        parser.next_non_whitespace();
        if parser.current() != '(' {
            return SyntaxError::new("Expected '(' after IN", parser.position, parser).err();
        }
        parser.next();
        parser.next_non_whitespace();

        let mut values = vec![];
        if parser.current() == ')' {
            parser.next();
            return Ok(values);
        }

        loop {
            values.push(Literal::parse(parser)?);
            parser.next_non_whitespace();

            match parser.current() {
                ',' => {
                    parser.next();
                    parser.next_non_whitespace();
                }
                ')' => {
                    parser.next();
                    return Ok(values);
                }
                _ => return SyntaxError::new("Expected ',' or ')' in IN list", parser.position, parser).err(),
            }
        }
    }
}

/// The flat WHERE chain: predicates joined left-to-right by AND/OR, with no
/// precedence and no grouping. The shape itself guarantees one fewer
/// operator than predicates.
#[derive(Debug, Clone, PartialEq)]
pub struct PredicateChain {
    pub first: Predicate,
    pub rest: Vec<(BooleanOp, Predicate)>,
}

impl PredicateChain {
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn parse(parser: &mut QueryParser) -> Result<Self, SyntaxError> {
        if !parser.keywords.r#where.matches(parser) {
            return SyntaxError::new("Expected WHERE", parser.position, parser).err();
        }
        parser.jump(parser.keywords.r#where.length);
        parser.next_non_whitespace();

        let first = Predicate::parse_single(parser)?;
        let mut rest = vec![];

        loop {
            if parser.check_next_phase() {
                break;
            }

            let op = if parser.keywords.and.matches(parser) {
                parser.jump(parser.keywords.and.length);
                BooleanOp::And
            } else if parser.keywords.or.matches(parser) {
                parser.jump(parser.keywords.or.length);
                BooleanOp::Or
            } else {
                return SyntaxError::new("Expected AND, OR or end of WHERE", parser.position, parser).err();
            };

            parser.next_non_whitespace();
            rest.push((op, Predicate::parse_single(parser)?));
        }

        Ok(Self { first, rest })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{ast::{BooleanOp, CompareOp, Literal, PatternKind, Predicate, PredicateChain}, QueryParser};

    fn parse_chain(text: &str) -> PredicateChain {
        let mut parser = QueryParser::new(text);
        parser.check_next_phase();
        PredicateChain::parse(&mut parser).expect("Failed to parse predicate chain")
    }

    #[test]
    pub fn test_predicate_comparison_ops() {
        for (text, expected) in [
            ("region = 'US'", CompareOp::Eq),
            ("revision != 3", CompareOp::NotEq),
            ("revision <> 3", CompareOp::NotEq),
            ("revision < 3", CompareOp::Lt),
            ("revision <= 3", CompareOp::LtEq),
            ("revision > 3", CompareOp::Gt),
            ("revision >= 3", CompareOp::GtEq),
        ] {
            let mut parser = QueryParser::new(text);
            let result = Predicate::parse_single(&mut parser).expect("Failed to parse predicate");
            match result {
                Predicate::Comparison { op, .. } => assert_eq!(op, expected, "{}", text),
                _ => panic!(),
            }
        }
    }

    #[test]
    pub fn test_predicate_like() {
        let mut parser = QueryParser::new("title LIKE 'Intro%'");
        let result = Predicate::parse_single(&mut parser).expect("Failed to parse predicate");
        match result {
            Predicate::LikeOrGlob { negated, kind, pattern, .. } => {
                assert!(!negated);
                assert_eq!(kind, PatternKind::Like);
                assert_eq!(pattern, Literal::String("Intro%".into()));
            }
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_predicate_not_glob() {
        let mut parser = QueryParser::new("title NOT GLOB 'draft*'");
        let result = Predicate::parse_single(&mut parser).expect("Failed to parse predicate");
        match result {
            Predicate::LikeOrGlob { negated, kind, .. } => {
                assert!(negated);
                assert_eq!(kind, PatternKind::Glob);
            }
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_predicate_between() {
        let mut parser = QueryParser::new("revision BETWEEN 1 AND 10");
        let result = Predicate::parse_single(&mut parser).expect("Failed to parse predicate");
        match result {
            Predicate::Between { negated, low, high, .. } => {
                assert!(!negated);
                assert_eq!(low, Literal::Integer(1));
                assert_eq!(high, Literal::Integer(10));
            }
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_predicate_not_between_missing_and() {
        let mut parser = QueryParser::new("revision BETWEEN 1 10");
        assert!(Predicate::parse_single(&mut parser).is_err());
    }

    #[test]
    pub fn test_predicate_in() {
        let mut parser = QueryParser::new("region IN ('US', 'EU', 'APAC')");
        let result = Predicate::parse_single(&mut parser).expect("Failed to parse predicate");
        match result {
            Predicate::InList { negated, values, .. } => {
                assert!(!negated);
                assert_eq!(values.len(), 3);
            }
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_predicate_not_in_empty() {
        let mut parser = QueryParser::new("region NOT IN ()");
        let result = Predicate::parse_single(&mut parser).expect("Failed to parse predicate");
        match result {
            Predicate::InList { negated, values, .. } => {
                assert!(negated);
                assert!(values.is_empty());
            }
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_predicate_not_without_operator() {
        let mut parser = QueryParser::new("region NOT 'US'");
        assert!(Predicate::parse_single(&mut parser).is_err());
    }

    #[test]
    pub fn test_chain_single() {
        let chain = parse_chain("WHERE region = 'US'");
        assert_eq!(chain.len(), 1);
        assert!(chain.rest.is_empty());
    }

    #[test]
    pub fn test_chain_preserves_order_and_operators() {
        let chain = parse_chain("WHERE a = 1 OR b = 2 AND c = 3");
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.rest[0].0, BooleanOp::Or);
        assert_eq!(chain.rest[1].0, BooleanOp::And);
    }

    #[test]
    pub fn test_chain_stops_at_next_clause() {
        let mut parser = QueryParser::new("WHERE a = 1 ORDER BY a");
        parser.check_next_phase();
        let chain = PredicateChain::parse(&mut parser).expect("Failed to parse predicate chain");
        assert_eq!(chain.len(), 1);
        assert_eq!(parser.phase, crate::parser::Phase::OrderBy);
    }

    #[test]
    pub fn test_chain_missing_connective() {
        let mut parser = QueryParser::new("WHERE a = 1 b = 2");
        parser.check_next_phase();
        assert!(PredicateChain::parse(&mut parser).is_err());
    }

    #[test]
    pub fn test_between_and_does_not_terminate_chain() {
        let chain = parse_chain("WHERE revision BETWEEN 1 AND 10 AND region = 'US'");
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.rest[0].0, BooleanOp::And);
    }
}

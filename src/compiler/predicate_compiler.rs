use crate::compiler::{
    pattern_to_regex, CompiledPredicate, CompiledValue, PredicateTree, TypeError,
};
use crate::metadata::DataType;
use crate::parser::ast::Literal;
use crate::resolver::{ResolvedColumn, ResolvedPredicate, ResolvedPredicateChain};

/// Lowers a resolved predicate chain into the plan's predicate tree,
/// checking every operator and literal against its column type.
pub struct PredicateCompiler;

impl PredicateCompiler {
    /// Fold the flat chain left to right into a binary tree. With no
    /// operator precedence the leftmost connective binds tightest.
    pub fn compile(chain: &ResolvedPredicateChain) -> Result<PredicateTree, TypeError> {
        let mut tree = PredicateTree::Leaf(Self::compile_single(&chain.first)?);
        for (op, predicate) in &chain.rest {
            tree = PredicateTree::Branch {
                left: Box::new(tree),
                op: *op,
                right: Box::new(PredicateTree::Leaf(Self::compile_single(predicate)?)),
            };
        }
        Ok(tree)
    }

    fn compile_single(predicate: &ResolvedPredicate) -> Result<CompiledPredicate, TypeError> {
        match predicate {
            ResolvedPredicate::Comparison { column, op, value } => {
                if *value == Literal::Null {
                    if !op.is_equality() {
                        return Err(Self::bad_operator(column, op.symbol()));
                    }
                    return Ok(CompiledPredicate::Absent {
                        column: column.clone(),
                        negated: *op == crate::parser::ast::CompareOp::NotEq,
                    });
                }

                if !op.is_equality() && !column.data_type.is_ordered() {
                    return Err(Self::bad_operator(column, op.symbol()));
                }

                Ok(CompiledPredicate::Compare {
                    column: column.clone(),
                    op: *op,
                    value: CompiledValue::coerce(column, value)?,
                })
            }

            ResolvedPredicate::LikeOrGlob { column, negated, kind, pattern } => {
                let name = match kind {
                    crate::parser::ast::PatternKind::Like => "LIKE",
                    crate::parser::ast::PatternKind::Glob => "GLOB",
                };
                if column.data_type != DataType::Text {
                    return Err(Self::bad_operator(column, name));
                }
                let Literal::String(text) = pattern else {
                    return Err(Self::bad_literal(column, pattern));
                };

                Ok(CompiledPredicate::Match {
                    column: column.clone(),
                    negated: *negated,
                    kind: *kind,
                    pattern: text.clone(),
                    regex: pattern_to_regex(*kind, text),
                })
            }

            ResolvedPredicate::Between { column, negated, low, high } => {
                if !column.data_type.is_ordered() {
                    return Err(Self::bad_operator(column, "BETWEEN"));
                }
                Ok(CompiledPredicate::Range {
                    column: column.clone(),
                    negated: *negated,
                    low: Self::coerce_non_null(column, low)?,
                    high: Self::coerce_non_null(column, high)?,
                })
            }

            ResolvedPredicate::InList { column, negated, values } => {
                if values.is_empty() {
                    return Ok(CompiledPredicate::Const(*negated));
                }
                let mut compiled = Vec::with_capacity(values.len());
                for value in values {
                    compiled.push(Self::coerce_non_null(column, value)?);
                }
                Ok(CompiledPredicate::InSet {
                    column: column.clone(),
                    negated: *negated,
                    values: compiled,
                })
            }
        }
    }

    /// NULL only pairs with `=`/`!=`; inside BETWEEN or IN it is an error.
    fn coerce_non_null(column: &ResolvedColumn, literal: &Literal) -> Result<CompiledValue, TypeError> {
        if *literal == Literal::Null {
            return Err(Self::bad_literal(column, literal));
        }
        CompiledValue::coerce(column, literal)
    }

    fn bad_operator(column: &ResolvedColumn, operator: &str) -> TypeError {
        TypeError::IncompatibleOperator {
            column: column.logical_name.clone(),
            data_type: column.data_type,
            operator: operator.to_string(),
        }
    }

    fn bad_literal(column: &ResolvedColumn, literal: &Literal) -> TypeError {
        TypeError::IncompatibleLiteral {
            column: column.logical_name.clone(),
            data_type: column.data_type,
            literal: literal.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::compiler::{CompiledPredicate, PredicateCompiler, PredicateTree, TypeError};
    use crate::metadata::Registry;
    use crate::parser::ast::{BooleanOp, RawQuery};
    use crate::resolver::IdentifierResolver;

    fn compile_where(criteria: &str) -> Result<PredicateTree, TypeError> {
        let text = format!("SELECT title FROM page WHERE {}", criteria);
        let raw = RawQuery::try_from(text.as_str()).expect("Failed to parse query");
        let logical = IdentifierResolver::resolve(&raw, Registry::shared()).expect("Failed to resolve");
        PredicateCompiler::compile(logical.predicate.as_ref().expect("expected predicate"))
    }

    #[test]
    pub fn test_compile_left_fold_shape() {
        let tree = compile_where("region = 'US' OR revision = 2 AND ispublished = TRUE")
            .expect("Failed to compile");

        match tree {
            PredicateTree::Branch { left, op, right } => {
                assert_eq!(op, BooleanOp::And);
                assert!(matches!(*right, PredicateTree::Leaf(_)));
                match *left {
                    PredicateTree::Branch { op, .. } => assert_eq!(op, BooleanOp::Or),
                    _ => panic!("expected nested branch on the left"),
                }
            }
            _ => panic!("expected branch"),
        }
    }

    #[test]
    pub fn test_compile_null_becomes_absent() {
        let tree = compile_where("description = NULL").expect("Failed to compile");
        match tree {
            PredicateTree::Leaf(CompiledPredicate::Absent { negated, .. }) => assert!(!negated),
            other => panic!("unexpected: {:?}", other),
        }

        let tree = compile_where("description != NULL").expect("Failed to compile");
        match tree {
            PredicateTree::Leaf(CompiledPredicate::Absent { negated, .. }) => assert!(negated),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    pub fn test_compile_null_with_ordering_rejected() {
        assert!(matches!(
            compile_where("revision < NULL"),
            Err(TypeError::IncompatibleOperator { .. })
        ));
    }

    #[test]
    pub fn test_compile_null_inside_between_rejected() {
        assert!(matches!(
            compile_where("revision BETWEEN NULL AND 10"),
            Err(TypeError::IncompatibleLiteral { .. })
        ));
    }

    #[test]
    pub fn test_compile_null_inside_in_rejected() {
        assert!(matches!(
            compile_where("region IN ('US', NULL)"),
            Err(TypeError::IncompatibleLiteral { .. })
        ));
    }

    #[test]
    pub fn test_compile_empty_in_is_const() {
        let tree = compile_where("region IN ()").expect("Failed to compile");
        assert_eq!(tree, PredicateTree::Leaf(CompiledPredicate::Const(false)));

        let tree = compile_where("region NOT IN ()").expect("Failed to compile");
        assert_eq!(tree, PredicateTree::Leaf(CompiledPredicate::Const(true)));
    }

    #[test]
    pub fn test_compile_ordering_on_boolean_rejected() {
        match compile_where("ispublished < TRUE") {
            Err(TypeError::IncompatibleOperator { column, operator, .. }) => {
                assert_eq!(column, "ispublished");
                assert_eq!(operator, "<");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    pub fn test_compile_like_only_on_text() {
        assert!(compile_where("title LIKE 'Intro%'").is_ok());

        match compile_where("ispublished LIKE 'yes%'") {
            Err(TypeError::IncompatibleOperator { operator, .. }) => assert_eq!(operator, "LIKE"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    pub fn test_compile_like_pattern_must_be_string() {
        assert!(matches!(
            compile_where("title LIKE 42"),
            Err(TypeError::IncompatibleLiteral { .. })
        ));
    }

    #[test]
    pub fn test_compile_not_between_lowering() {
        let tree = compile_where("revision NOT BETWEEN 1 AND 10").expect("Failed to compile");
        match tree {
            PredicateTree::Leaf(CompiledPredicate::Range { negated, .. }) => assert!(negated),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    pub fn test_compile_between_on_json_rejected() {
        assert!(matches!(
            compile_where("properties BETWEEN '{}' AND '{}'"),
            Err(TypeError::IncompatibleOperator { .. })
        ));
    }

    #[test]
    pub fn test_compile_in_set_values_typed() {
        let tree = compile_where("revision IN (1, 2, 3)").expect("Failed to compile");
        match tree {
            PredicateTree::Leaf(CompiledPredicate::InSet { values, negated, .. }) => {
                assert_eq!(values.len(), 3);
                assert!(!negated);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    pub fn test_compile_in_rejects_mistyped_value() {
        assert!(matches!(
            compile_where("revision IN (1, 'two')"),
            Err(TypeError::IncompatibleLiteral { .. })
        ));
    }
}

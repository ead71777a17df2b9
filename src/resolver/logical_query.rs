use serde::{Deserialize, Serialize};

use crate::metadata::DataType;
use crate::parser::ast::{BooleanOp, CompareOp, Literal, PatternKind};

/// The tabular entity a resolved column belongs to, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub logical_name: String,
    pub persistent_name: String,
}

/// A column bound to its registry descriptor. The persistent name is the
/// one the execution layer reads from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedColumn {
    pub logical_name: String,
    pub persistent_name: String,
    pub data_type: DataType,
    pub entity: Option<EntityRef>,
}

/// The resolved FROM target: the root entity or one tabular entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTable {
    pub logical_name: String,
    pub persistent_name: String,
    pub tabular: bool,
}

/// One resolved SELECT list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectItem {
    pub column: ResolvedColumn,
    pub alias: Option<String>,
}

impl SelectItem {
    /// The name the output column is reported under.
    pub fn output_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.column.logical_name)
    }
}

/// One resolved ORDER BY term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSpec {
    pub column: ResolvedColumn,
    pub descending: bool,
}

/// A predicate whose column is bound. Literals are still untyped; the
/// predicate compiler coerces them against the column type.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedPredicate {
    Comparison { column: ResolvedColumn, op: CompareOp, value: Literal },
    LikeOrGlob { column: ResolvedColumn, negated: bool, kind: PatternKind, pattern: Literal },
    Between { column: ResolvedColumn, negated: bool, low: Literal, high: Literal },
    InList { column: ResolvedColumn, negated: bool, values: Vec<Literal> },
}

/// The WHERE chain with every column bound, same flat shape as the raw one.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPredicateChain {
    pub first: ResolvedPredicate,
    pub rest: Vec<(BooleanOp, ResolvedPredicate)>,
}

/// The fully name-bound query, ready for predicate compilation.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalQuery {
    pub columns: Vec<SelectItem>,
    pub table: ResolvedTable,
    pub predicate: Option<ResolvedPredicateChain>,
    pub order_by: Vec<OrderSpec>,
    pub limit: Option<u32>,
}

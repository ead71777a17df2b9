use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::compiler::CompiledValue;
use crate::parser::ast::{BooleanOp, CompareOp, PatternKind};
use crate::resolver::{OrderSpec, ResolvedColumn, ResolvedTable, SelectItem};

/// One lowered predicate leaf. Columns carry persistent names, values are
/// typed, and LIKE/GLOB patterns are already translated to anchored
/// regular expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CompiledPredicate {
    Compare {
        column: ResolvedColumn,
        op: CompareOp,
        value: CompiledValue,
    },
    Match {
        column: ResolvedColumn,
        negated: bool,
        kind: PatternKind,
        pattern: String,
        regex: String,
    },
    Range {
        column: ResolvedColumn,
        negated: bool,
        low: CompiledValue,
        high: CompiledValue,
    },
    InSet {
        column: ResolvedColumn,
        negated: bool,
        values: Vec<CompiledValue>,
    },
    /// `column = NULL` and `column != NULL` become presence tests.
    Absent {
        column: ResolvedColumn,
        negated: bool,
    },
    /// A predicate decided at compile time, e.g. an empty IN list.
    Const(bool),
}

impl CompiledPredicate {
    /// Evaluate a Match leaf against a text value. Invalid patterns never
    /// match rather than failing the whole evaluation.
    pub fn matches_text(regex: &str, text: &str) -> bool {
        Regex::new(regex).map(|re| re.is_match(text)).unwrap_or(false)
    }
}

/// Translate a LIKE or GLOB pattern into an anchored regex. LIKE matches
/// case-insensitively with `%`/`_` wildcards, GLOB case-sensitively with
/// `*`/`?`.
pub fn pattern_to_regex(kind: PatternKind, pattern: &str) -> String {
    let (any, one) = match kind {
        PatternKind::Like => ('%', '_'),
        PatternKind::Glob => ('*', '?'),
    };

    let mut regex = String::with_capacity(pattern.len() + 8);
    if kind == PatternKind::Like {
        regex.push_str("(?i)");
    }
    regex.push('^');
    for ch in pattern.chars() {
        if ch == any {
            regex.push_str(".*");
        } else if ch == one {
            regex.push('.');
        } else {
            regex.push_str(&regex::escape(&ch.to_string()));
        }
    }
    regex.push('$');
    regex
}

/// The lowered WHERE clause: leaves joined by binary AND/OR nodes. The
/// chain folds left to right, so `a OR b AND c` becomes `(a OR b) AND c`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PredicateTree {
    Leaf(CompiledPredicate),
    Branch {
        left: Box<PredicateTree>,
        op: BooleanOp,
        right: Box<PredicateTree>,
    },
}

impl PredicateTree {
    pub fn leaf_count(&self) -> usize {
        match self {
            PredicateTree::Leaf(_) => 1,
            PredicateTree::Branch { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// The finished compilation product: everything the execution layer needs,
/// with no remaining reference to source text or logical-only names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledQueryPlan {
    pub table: ResolvedTable,
    pub columns: Vec<SelectItem>,
    pub predicate: Option<PredicateTree>,
    pub order_by: Vec<OrderSpec>,
    pub limit: Option<u32>,
}

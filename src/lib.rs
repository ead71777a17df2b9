pub mod parser;

pub mod metadata;
pub use metadata::{DataType, Descriptor, Registry};

pub mod resolver;
pub use resolver::{IdentifierResolver, LogicalQuery, ResolutionError};

pub mod compiler;
pub use compiler::{CompileError, CompiledQueryPlan, PredicateCompiler, PredicateTree};

use parser::ast::RawQuery;

/// Compile a query against the built-in page catalogue.
pub fn compile(source: &str) -> Result<CompiledQueryPlan, CompileError> {
    compile_with(source, Registry::shared())
}

/// The full pipeline: parse, resolve names against `registry`, lower the
/// predicate chain, assemble the plan. Fails on the first error of any
/// stage.
pub fn compile_with(source: &str, registry: &Registry) -> Result<CompiledQueryPlan, CompileError> {
    let raw = RawQuery::try_from(source)?;
    tracing::debug!(table = %raw.table, columns = raw.columns.len(), "parsed query");

    let logical = IdentifierResolver::resolve(&raw, registry)?;

    let predicate = match &logical.predicate {
        Some(chain) => Some(PredicateCompiler::compile(chain)?),
        None => None,
    };

    let plan = CompiledQueryPlan {
        table: logical.table,
        columns: logical.columns,
        predicate,
        order_by: logical.order_by,
        limit: logical.limit,
    };
    tracing::debug!(table = %plan.table.logical_name, "compiled query plan");

    Ok(plan)
}

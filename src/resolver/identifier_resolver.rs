use crate::metadata::{Descriptor, Registry, ScalarDescriptor, TabularDescriptor};
use crate::parser::ast::{ColumnRef, Predicate, PredicateChain, RawQuery};
use crate::resolver::{
    EntityRef, LogicalQuery, OrderSpec, ResolutionError, ResolvedColumn, ResolvedPredicate,
    ResolvedPredicateChain, ResolvedTable, SelectItem,
};

/// Where a column reference appears. A bare tabular entity name is legal in
/// the SELECT list, where it stands for the entity's identifier column, but
/// ambiguous in WHERE and ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Select,
    Predicate,
    Order,
}

/// Binds every name in a raw query against the registry, producing a
/// `LogicalQuery` or the first `ResolutionError`.
pub struct IdentifierResolver<'a> {
    registry: &'a Registry,
    table: ResolvedTable,
    scope: Option<&'a TabularDescriptor>,
}

impl<'a> IdentifierResolver<'a> {
    pub fn resolve(query: &RawQuery, registry: &'a Registry) -> Result<LogicalQuery, ResolutionError> {
        let (table, scope) = Self::resolve_table(&query.table, registry)?;
        let resolver = Self { registry, table, scope };

        let mut columns = vec![];
        for item in &query.columns {
            columns.push(SelectItem {
                column: resolver.resolve_column(&item.column, Position::Select)?,
                alias: item.alias.clone(),
            });
        }

        let predicate = match &query.predicate {
            Some(chain) => Some(resolver.resolve_chain(chain)?),
            None => None,
        };

        let mut order_by = vec![];
        for term in &query.order_by {
            order_by.push(OrderSpec {
                column: resolver.resolve_column(&term.column, Position::Order)?,
                descending: term.descending,
            });
        }

        Ok(LogicalQuery {
            columns,
            table: resolver.table,
            predicate,
            order_by,
            limit: query.limit,
        })
    }

    fn resolve_table(
        name: &str,
        registry: &'a Registry,
    ) -> Result<(ResolvedTable, Option<&'a TabularDescriptor>), ResolutionError> {
        if registry.is_root(name) {
            let table = ResolvedTable {
                logical_name: registry.root_name().to_string(),
                persistent_name: registry.root_name().to_string(),
                tabular: false,
            };
            return Ok((table, None));
        }

        match registry.lookup(name) {
            Some(Descriptor::Tabular(entity)) => {
                let table = ResolvedTable {
                    logical_name: entity.logical_name.clone(),
                    persistent_name: entity.persistent_name.clone(),
                    tabular: true,
                };
                Ok((table, Some(entity)))
            }
            Some(Descriptor::Scalar(_)) => Err(ResolutionError::NotAnEntity(name.trim().to_string())),
            None => Err(ResolutionError::UnknownIdentifier(name.trim().to_string())),
        }
    }

    fn resolve_column(&self, column: &ColumnRef, position: Position) -> Result<ResolvedColumn, ResolutionError> {
        match self.scope {
            Some(entity) => self.resolve_in_entity(entity, column),
            None => self.resolve_in_root(column, position),
        }
    }

    /// FROM names a tabular entity: only its own columns are visible, and a
    /// dotted qualifier must be the entity itself.
    fn resolve_in_entity(
        &self,
        entity: &TabularDescriptor,
        column: &ColumnRef,
    ) -> Result<ResolvedColumn, ResolutionError> {
        if let Some(qualifier) = &column.entity {
            if !entity.answers_to(&qualifier.trim().to_lowercase()) {
                return Err(ResolutionError::UnknownIdentifier(format!("{}.{}", qualifier, column.name)));
            }
        }

        match entity.child(&column.name) {
            Some(child) => Ok(self.bind(child, Some(entity))),
            None => Err(ResolutionError::UnknownIdentifier(column.name.clone())),
        }
    }

    /// FROM names the root: scalar columns resolve directly, dotted names
    /// reach into a tabular entity, and a bare tabular name stands for its
    /// identifier column in the SELECT list only.
    fn resolve_in_root(&self, column: &ColumnRef, position: Position) -> Result<ResolvedColumn, ResolutionError> {
        if let Some(qualifier) = &column.entity {
            let entity = match self.registry.lookup(qualifier) {
                Some(Descriptor::Tabular(entity)) => entity,
                Some(Descriptor::Scalar(_)) => {
                    return Err(ResolutionError::NotAnEntity(qualifier.trim().to_string()));
                }
                None => return Err(ResolutionError::UnknownIdentifier(qualifier.trim().to_string())),
            };
            return match entity.child(&column.name) {
                Some(child) => Ok(self.bind(child, Some(entity))),
                None => Err(ResolutionError::UnknownIdentifier(format!("{}.{}", qualifier, column.name))),
            };
        }

        match self.registry.lookup(&column.name) {
            Some(Descriptor::Scalar(scalar)) => Ok(self.bind(scalar, None)),
            Some(Descriptor::Tabular(entity)) => match position {
                Position::Select => Ok(self.bind(&entity.identifier, Some(entity))),
                Position::Predicate | Position::Order => {
                    Err(ResolutionError::AmbiguousTabularReference(column.name.clone()))
                }
            },
            None => Err(ResolutionError::UnknownIdentifier(column.name.clone())),
        }
    }

    fn bind(&self, scalar: &ScalarDescriptor, entity: Option<&TabularDescriptor>) -> ResolvedColumn {
        ResolvedColumn {
            logical_name: scalar.logical_name.clone(),
            persistent_name: scalar.persistent_name.clone(),
            data_type: scalar.data_type,
            entity: entity.map(|e| EntityRef {
                logical_name: e.logical_name.clone(),
                persistent_name: e.persistent_name.clone(),
            }),
        }
    }

    fn resolve_chain(&self, chain: &PredicateChain) -> Result<ResolvedPredicateChain, ResolutionError> {
        let first = self.resolve_predicate(&chain.first)?;
        let mut rest = vec![];
        for (op, predicate) in &chain.rest {
            rest.push((*op, self.resolve_predicate(predicate)?));
        }
        Ok(ResolvedPredicateChain { first, rest })
    }

    fn resolve_predicate(&self, predicate: &Predicate) -> Result<ResolvedPredicate, ResolutionError> {
        let column = self.resolve_column(predicate.column(), Position::Predicate)?;
        Ok(match predicate {
            Predicate::Comparison { op, value, .. } => ResolvedPredicate::Comparison {
                column,
                op: *op,
                value: value.clone(),
            },
            Predicate::LikeOrGlob { negated, kind, pattern, .. } => ResolvedPredicate::LikeOrGlob {
                column,
                negated: *negated,
                kind: *kind,
                pattern: pattern.clone(),
            },
            Predicate::Between { negated, low, high, .. } => ResolvedPredicate::Between {
                column,
                negated: *negated,
                low: low.clone(),
                high: high.clone(),
            },
            Predicate::InList { negated, values, .. } => ResolvedPredicate::InList {
                column,
                negated: *negated,
                values: values.clone(),
            },
        })
    }
}

use std::fmt;

use crate::{SelectionContainer, SelectionSet};

/// Name given to an operation when the caller supplies none.
///
/// A default-named operation cannot coexist with any other operation in the
/// same document.
pub const DEFAULT_OPERATION_NAME: &str = "default";

/// The `Operation` type represents a top-level named query or mutation block.
///
/// *OperationDefinition*:
///     OperationType Name SelectionSet
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#sec-Language.Operations).
///
/// Operations are created only through the document's
/// [`add_query`](crate::Document::add_query) and
/// [`add_mutation`](crate::Document::add_mutation) entry points, which
/// enforce the document-level naming invariants.
#[derive(Debug, PartialEq, Clone)]
pub struct Operation {
    operation_type: OperationType,
    name: String,
    selection_set: SelectionSet,
}

impl Operation {
    pub(crate) fn new(operation_type: OperationType, name: impl Into<String>) -> Self {
        Self {
            operation_type,
            name: name.into(),
            selection_set: SelectionSet::new(),
        }
    }

    /// The operation's name. Assigned at creation and never changed.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The operation's kind.
    pub fn operation_type(&self) -> OperationType {
        self.operation_type
    }

    pub(crate) fn has_default_name(&self) -> bool {
        self.name == DEFAULT_OPERATION_NAME
    }

    /// Render the operation block.
    pub fn to_query(&self) -> String {
        format!(
            "{} {} {{\n{}\n}}",
            self.operation_type,
            self.name,
            self.selection_set.to_query(1)
        )
    }
}

impl SelectionContainer for Operation {
    fn selections(&self) -> &SelectionSet {
        &self.selection_set
    }

    fn selections_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection_set
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query())
    }
}

/// The `OperationType` type represents the kind of operation.
///
/// *OperationType*:
///     query | mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    /// Represents a query operation
    Query,
    /// Represents a mutation operation
    Mutation,
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationType::Query => write!(f, "query"),
            OperationType::Mutation => write!(f, "mutation"),
        }
    }
}

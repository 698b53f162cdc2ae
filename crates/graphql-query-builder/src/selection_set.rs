use crate::{Field, FragmentSpread, InlineFragment};

/// The `SelectionSet` type holds the child selections of an operation, a
/// field, a fragment or an inline fragment.
///
/// *SelectionSet*:
///     Selection*
///
/// Selections render exactly in insertion order; identically named fields are
/// not de-duplicated.
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#sec-Selection-Sets).
#[derive(Debug, PartialEq, Clone, Default)]
pub struct SelectionSet {
    selections: Vec<Selection>,
}

impl SelectionSet {
    /// Create an empty selection set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the selection set holds no selections.
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// The selections in insertion order.
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    pub(crate) fn push_field(&mut self, field: Field) -> &mut Field {
        self.selections.push(Selection::Field(field));
        match self.selections.last_mut() {
            Some(Selection::Field(field)) => field,
            _ => unreachable!("a field was just pushed"),
        }
    }

    pub(crate) fn push_fragment_spread(&mut self, spread: FragmentSpread) {
        self.selections.push(Selection::FragmentSpread(spread));
    }

    pub(crate) fn push_inline_fragment(&mut self, inline: InlineFragment) -> &mut InlineFragment {
        self.selections.push(Selection::InlineFragment(inline));
        match self.selections.last_mut() {
            Some(Selection::InlineFragment(inline)) => inline,
            _ => unreachable!("an inline fragment was just pushed"),
        }
    }

    /// Render every selection, one per line, each line prefixed with two
    /// spaces per `indent_level`.
    pub fn to_query(&self, indent_level: usize) -> String {
        self.selections
            .iter()
            .map(|selection| selection.to_query(indent_level))
            .collect::<Vec<String>>()
            .join("\n")
    }
}

/// The `Selection` type represents a single item in a selection set.
///
/// *Selection*:
///     Field | FragmentSpread | InlineFragment
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#Selection).
#[derive(Debug, PartialEq, Clone)]
pub enum Selection {
    /// Represents a field
    Field(Field),
    /// Represents a fragment spread
    FragmentSpread(FragmentSpread),
    /// Represents an inline fragment
    InlineFragment(InlineFragment),
}

impl Selection {
    pub(crate) fn to_query(&self, indent_level: usize) -> String {
        match self {
            Selection::Field(field) => field.to_query(indent_level),
            Selection::FragmentSpread(spread) => spread.to_query(indent_level),
            Selection::InlineFragment(inline) => inline.to_query(indent_level),
        }
    }
}

/// Shared behaviour for every node that owns a selection set: operations,
/// fields, fragments and inline fragments.
///
/// The provided methods are the only way child selections enter the tree, so
/// each node kind implements just the two storage accessors and inherits the
/// builders.
///
/// ### Example
/// ```rust
/// use std::sync::Arc;
/// use graphql_query_builder::{Document, Schema, SelectionContainer};
/// use indoc::indoc;
///
/// let schema = Arc::new(
///     Schema::from_introspection_json(
///         r#"{ "__schema": { "queryType": { "name": "QueryRoot" }, "types": [
///             { "kind": "OBJECT", "name": "QueryRoot" },
///             { "kind": "OBJECT", "name": "Shop" }
///         ] } }"#,
///     )
///     .unwrap(),
/// );
///
/// let mut document = Document::new(schema);
/// let query = document.add_query(Some("getShop")).unwrap();
/// query.add_field_with("shop", |shop| {
///     shop.add_field("name");
/// });
///
/// assert_eq!(
///     document.to_query(),
///     indoc! {r#"
///         query getShop {
///           shop {
///             name
///           }
///         }
///     "#}
/// );
/// ```
pub trait SelectionContainer {
    /// The node's selection set.
    fn selections(&self) -> &SelectionSet;

    /// The node's selection set, for mutation.
    fn selections_mut(&mut self) -> &mut SelectionSet;

    /// Append a field selection and return it for further configuration.
    fn add_field(&mut self, name: impl Into<String>) -> &mut Field {
        self.selections_mut().push_field(Field::new(name))
    }

    /// Append a field selection, invoking `build` with the new field so the
    /// caller can attach arguments and nested selections.
    fn add_field_with(
        &mut self,
        name: impl Into<String>,
        build: impl FnOnce(&mut Field),
    ) -> &mut Field {
        let field = self.selections_mut().push_field(Field::new(name));
        build(&mut *field);
        field
    }

    /// Append a fragment spread referring to `fragment_name`.
    ///
    /// The name is not checked against the document's fragments: a spread may
    /// forward-reference a fragment defined later in build order.
    fn add_fragment(&mut self, fragment_name: impl Into<String>) {
        self.selections_mut()
            .push_fragment_spread(FragmentSpread::new(fragment_name));
    }

    /// Append an inline fragment scoped to the type named `on`.
    fn add_inline_fragment(&mut self, on: impl Into<String>) -> &mut InlineFragment {
        self.selections_mut()
            .push_inline_fragment(InlineFragment::new(on))
    }

    /// Append an inline fragment, invoking `build` with the new fragment.
    fn add_inline_fragment_with(
        &mut self,
        on: impl Into<String>,
        build: impl FnOnce(&mut InlineFragment),
    ) -> &mut InlineFragment {
        let inline = self
            .selections_mut()
            .push_inline_fragment(InlineFragment::new(on));
        build(&mut *inline);
        inline
    }

    /// Append a relay-style connection field.
    ///
    /// Selects `id` on the current node, then `<name>` containing
    /// `edges { cursor node { ... } }` and
    /// `pageInfo { hasPreviousPage hasNextPage }`. `build` is invoked with the
    /// `node` field; connection arguments such as `first` go on the returned
    /// connection field. Sugar over [`add_field`](Self::add_field), not part
    /// of the core contract.
    fn add_connection(
        &mut self,
        name: impl Into<String>,
        build: impl FnOnce(&mut Field),
    ) -> &mut Field {
        self.add_field("id");
        self.add_field_with(name, |connection| {
            connection.add_field_with("edges", |edges| {
                edges.add_field("cursor");
                edges.add_field_with("node", build);
            });
            connection.add_field_with("pageInfo", |page_info| {
                page_info.add_field("hasPreviousPage");
                page_info.add_field("hasNextPage");
            });
        })
    }
}

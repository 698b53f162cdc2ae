use std::fmt;

use crate::{SelectionContainer, SelectionSet, TypeDescriptor};

/// The `Fragment` type represents a named, schema-type-bound, reusable
/// selection set, defined once per document and spread by name.
///
/// *FragmentDefinition*:
///     fragment FragmentName TypeCondition SelectionSet
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#FragmentDefinition).
///
/// Fragments are created only through
/// [`Document::define_fragment`](crate::Document::define_fragment), which
/// resolves and checks the target type against the schema.
#[derive(Debug, PartialEq, Clone)]
pub struct Fragment {
    name: String,
    type_: TypeDescriptor,
    selection_set: SelectionSet,
}

impl Fragment {
    pub(crate) fn new(name: impl Into<String>, type_: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            type_,
            selection_set: SelectionSet::new(),
        }
    }

    /// The fragment's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The schema type the fragment is declared on.
    pub fn type_(&self) -> &TypeDescriptor {
        &self.type_
    }

    /// Render the fragment definition.
    pub fn to_query(&self) -> String {
        format!(
            "fragment {} on {} {{\n{}\n}}",
            self.name,
            self.type_.name(),
            self.selection_set.to_query(1)
        )
    }
}

impl SelectionContainer for Fragment {
    fn selections(&self) -> &SelectionSet {
        &self.selection_set
    }

    fn selections_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection_set
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query())
    }
}

/// The `FragmentSpread` type represents a named fragment used in a selection
/// set.
///
/// *FragmentSpread*:
///     ... FragmentName
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#FragmentSpread).
///
/// A spread is a name-only link: it never owns or resolves the fragment it
/// refers to. Resolution happens at the document level, and only when
/// fragment *definitions* are rendered, so a spread may be added before the
/// fragment it names is defined.
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentSpread {
    name: String,
}

impl FragmentSpread {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The referenced fragment's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn to_query(&self, indent_level: usize) -> String {
        format!("{}...{}", "  ".repeat(indent_level), self.name)
    }
}

impl fmt::Display for FragmentSpread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query(0))
    }
}

/// The `InlineFragment` type represents a selection scoped to a concrete
/// type, used to select type-specific fields within a polymorphic selection.
///
/// *InlineFragment*:
///     ... TypeCondition SelectionSet
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#sec-Inline-Fragments).
///
/// Unlike [`Fragment`], the target type is not resolved against the schema.
#[derive(Debug, PartialEq, Clone)]
pub struct InlineFragment {
    on: String,
    selection_set: SelectionSet,
}

impl InlineFragment {
    pub(crate) fn new(on: impl Into<String>) -> Self {
        Self {
            on: on.into(),
            selection_set: SelectionSet::new(),
        }
    }

    /// The name of the type the inline fragment is scoped to.
    pub fn on(&self) -> &str {
        &self.on
    }

    pub(crate) fn to_query(&self, indent_level: usize) -> String {
        let indent = "  ".repeat(indent_level);
        format!(
            "{indent}... on {} {{\n{}\n{indent}}}",
            self.on,
            self.selection_set.to_query(indent_level + 1)
        )
    }
}

impl SelectionContainer for InlineFragment {
    fn selections(&self) -> &SelectionSet {
        &self.selection_set
    }

    fn selections_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection_set
    }
}

impl fmt::Display for InlineFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query(0))
    }
}

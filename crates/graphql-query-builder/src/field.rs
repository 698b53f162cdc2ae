use std::fmt::{self, Write as _};

use crate::{Arguments, SelectionContainer, SelectionSet, Value};

/// The `Field` type represents a named selection item with optional arguments
/// and an optional nested selection set.
///
/// *Field*:
///     Name Arguments? SelectionSet?
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#sec-Language.Fields).
///
/// A field without sub-selections renders as a single line; a field with
/// sub-selections renders its own block, indented two spaces per nesting
/// level.
#[derive(Debug, PartialEq, Clone)]
pub struct Field {
    name: String,
    arguments: Arguments,
    selection_set: SelectionSet,
}

impl Field {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Arguments::new(),
            selection_set: SelectionSet::new(),
        }
    }

    /// The field's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an argument. Arguments render in the order supplied.
    pub fn argument(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.arguments.push(name, value);
        self
    }

    /// The field's argument list.
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// Render the field at the given nesting level.
    pub fn to_query(&self, indent_level: usize) -> String {
        let indent = "  ".repeat(indent_level);
        let mut text = format!("{indent}{}", self.name);

        if !self.arguments.is_empty() {
            let _ = write!(text, "({})", self.arguments);
        }

        if !self.selection_set.is_empty() {
            let _ = write!(
                text,
                " {{\n{}\n{indent}}}",
                self.selection_set.to_query(indent_level + 1)
            );
        }

        text
    }
}

impl SelectionContainer for Field {
    fn selections(&self) -> &SelectionSet {
        &self.selection_set
    }

    fn selections_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection_set
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_encodes_a_leaf_field() {
        let field = Field::new("name");

        assert_eq!(field.to_query(0), "name");
    }

    #[test]
    fn it_encodes_a_field_with_arguments() {
        let mut field = Field::new("productByHandle");
        field.argument("handle", "test");

        assert_eq!(field.to_query(0), r#"productByHandle(handle: "test")"#);
    }

    #[test]
    fn it_encodes_arguments_in_the_order_supplied() {
        let mut field = Field::new("products");
        field.argument("first", 10).argument("reverse", true);

        assert_eq!(field.to_query(0), "products(first: 10, reverse: true)");
    }

    #[test]
    fn it_encodes_a_field_with_a_nested_selection_set() {
        let mut field = Field::new("customerCreate");
        field.argument(
            "input",
            Value::Object(vec![
                (String::from("email"), Value::from("email")),
                (String::from("password"), Value::from("password")),
            ]),
        );
        field.add_field_with("customer", |customer| {
            customer.add_field("email");
        });

        assert_eq!(
            field.to_query(0),
            indoc! {r#"
                customerCreate(input: { email: "email", password: "password" }) {
                  customer {
                    email
                  }
                }"#}
        );
    }

    #[test]
    fn it_prefixes_nested_fields_with_the_given_indent() {
        let mut field = Field::new("shop");
        field.add_field("name");

        assert_eq!(field.to_query(1), "  shop {\n    name\n  }");
    }
}

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;

use crate::{Fragment, Operation, OperationType, Schema, DEFAULT_OPERATION_NAME};

/// Errors raised while assembling a document.
///
/// Every failure is structural and surfaced at the offending call; a failed
/// add leaves the document untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    /// An operation with this name already exists in the document.
    #[error("duplicate operation name: {name}")]
    DuplicateOperationName {
        /// The offending operation name.
        name: String,
    },

    /// Document-level naming consistency was violated.
    #[error("invalid document: {reason}")]
    InvalidDocument {
        /// What was violated.
        reason: String,
    },

    /// The fragment's declared target type cannot be resolved in the schema
    /// or is not a type fragments may target.
    #[error("invalid fragment target: {name}")]
    InvalidFragmentTarget {
        /// The requested target type name.
        name: String,
    },
}

/// The `Document` type is the aggregate root of the builder: it owns named
/// operations and named fragments and renders the full GraphQL text.
///
/// *Document*:
///     FragmentDefinition* OperationDefinition*
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#sec-Document).
///
/// Operation names are unique within a document, and once more than one
/// operation exists every operation must be explicitly named. Fragment target
/// types are resolved and checked against the schema at definition time.
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
///             { "kind": "OBJECT", "name": "Shop" },
///             { "kind": "OBJECT", "name": "Image" }
///         ] } }"#,
///     )
///     .unwrap(),
/// );
///
/// let document = Document::build(schema, |d| {
///     d.define_fragment_with("imageFields", "Image", |f| {
///         f.add_field("src");
///     })?;
///
///     d.add_query_with(Some("getShop"), |q| {
///         q.add_field_with("shop", |shop| {
///             shop.add_field("name");
///         });
///     })?;
///
///     Ok(())
/// })
/// .unwrap();
///
/// assert_eq!(
///     document.to_query(),
///     indoc! {r#"
///         fragment imageFields on Image {
///           src
///         }
///
///         query getShop {
///           shop {
///             name
///           }
///         }
///     "#}
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Document {
    schema: Arc<Schema>,
    operations: IndexMap<String, Operation>,
    fragments: IndexMap<String, Fragment>,
}

impl Document {
    /// Create an empty document bound to `schema`.
    pub fn new(schema: Arc<Schema>) -> Self {
        Self {
            schema,
            operations: IndexMap::new(),
            fragments: IndexMap::new(),
        }
    }

    /// Create a document and populate it through `build`.
    pub fn build<F>(schema: Arc<Schema>, build: F) -> Result<Self, DocumentError>
    where
        F: FnOnce(&mut Self) -> Result<(), DocumentError>,
    {
        let mut document = Self::new(schema);
        build(&mut document)?;
        Ok(document)
    }

    /// The schema this document is bound to.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The document's operations, keyed by name in insertion order.
    pub fn operations(&self) -> &IndexMap<String, Operation> {
        &self.operations
    }

    /// The document's fragments, keyed by name in insertion order.
    pub fn fragments(&self) -> &IndexMap<String, Fragment> {
        &self.fragments
    }

    /// Add a query operation. `None` uses the reserved default name.
    pub fn add_query(&mut self, name: Option<&str>) -> Result<&mut Operation, DocumentError> {
        self.add_operation(OperationType::Query, name)
    }

    /// Add a query operation and populate it through `build`.
    pub fn add_query_with(
        &mut self,
        name: Option<&str>,
        build: impl FnOnce(&mut Operation),
    ) -> Result<&mut Operation, DocumentError> {
        let operation = self.add_operation(OperationType::Query, name)?;
        build(&mut *operation);
        Ok(operation)
    }

    /// Add a mutation operation. `None` uses the reserved default name.
    pub fn add_mutation(&mut self, name: Option<&str>) -> Result<&mut Operation, DocumentError> {
        self.add_operation(OperationType::Mutation, name)
    }

    /// Add a mutation operation and populate it through `build`.
    pub fn add_mutation_with(
        &mut self,
        name: Option<&str>,
        build: impl FnOnce(&mut Operation),
    ) -> Result<&mut Operation, DocumentError> {
        let operation = self.add_operation(OperationType::Mutation, name)?;
        build(&mut *operation);
        Ok(operation)
    }

    fn add_operation(
        &mut self,
        operation_type: OperationType,
        name: Option<&str>,
    ) -> Result<&mut Operation, DocumentError> {
        let name = name.unwrap_or(DEFAULT_OPERATION_NAME);

        if self.operations.contains_key(name) {
            return Err(DocumentError::DuplicateOperationName {
                name: name.to_string(),
            });
        }

        let mixes_default_name = name == DEFAULT_OPERATION_NAME
            || self.operations.values().any(Operation::has_default_name);
        if !self.operations.is_empty() && mixes_default_name {
            return Err(DocumentError::InvalidDocument {
                reason: String::from(
                    "a document with multiple operations must name every operation",
                ),
            });
        }

        let operation = Operation::new(operation_type, name);
        Ok(self.operations.entry(name.to_string()).or_insert(operation))
    }

    /// Define a fragment named `name` targeting the schema type `on`.
    ///
    /// The target type is resolved once, here; spreads referring to the
    /// fragment are never re-checked.
    pub fn define_fragment(
        &mut self,
        name: &str,
        on: &str,
    ) -> Result<&mut Fragment, DocumentError> {
        if self.fragments.contains_key(name) {
            return Err(DocumentError::InvalidDocument {
                reason: format!("duplicate fragment name: {name}"),
            });
        }

        let type_ = self
            .schema
            .type_(on)
            .filter(|type_| type_.is_composite())
            .ok_or_else(|| DocumentError::InvalidFragmentTarget {
                name: on.to_string(),
            })?
            .clone();

        let fragment = Fragment::new(name, type_);
        Ok(self.fragments.entry(name.to_string()).or_insert(fragment))
    }

    /// Define a fragment and populate it through `build`.
    pub fn define_fragment_with(
        &mut self,
        name: &str,
        on: &str,
        build: impl FnOnce(&mut Fragment),
    ) -> Result<&mut Fragment, DocumentError> {
        let fragment = self.define_fragment(name, on)?;
        build(&mut *fragment);
        Ok(fragment)
    }

    /// Render every fragment definition in insertion order, separated by
    /// blank lines; empty string when the document defines no fragments.
    pub fn fragment_definitions(&self) -> String {
        if self.fragments.is_empty() {
            return String::new();
        }

        let mut text = self
            .fragments
            .values()
            .map(Fragment::to_query)
            .collect::<Vec<String>>()
            .join("\n\n");
        text.push('\n');
        text
    }

    /// Render the full document: fragment definitions first, then every
    /// operation in insertion order, one blank line between blocks.
    ///
    /// Rendering never mutates the document; rendering twice yields
    /// identical text.
    pub fn to_query(&self) -> String {
        let mut blocks: Vec<String> = self.fragments.values().map(Fragment::to_query).collect();
        blocks.extend(self.operations.values().map(Operation::to_query));

        if blocks.is_empty() {
            return String::new();
        }

        let mut text = blocks.join("\n\n");
        text.push('\n');
        text
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SelectionContainer, TypeKind, Value};
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn test_schema() -> Arc<Schema> {
        let introspection = serde_json::json!({
            "data": {
                "__schema": {
                    "queryType": { "name": "QueryRoot" },
                    "mutationType": { "name": "Mutation" },
                    "types": [
                        { "kind": "OBJECT", "name": "QueryRoot" },
                        { "kind": "OBJECT", "name": "Mutation" },
                        { "kind": "OBJECT", "name": "Shop" },
                        { "kind": "OBJECT", "name": "Image" },
                        { "kind": "OBJECT", "name": "Product" },
                        { "kind": "SCALAR", "name": "String" },
                        { "kind": "SCALAR", "name": "Boolean" },
                        { "kind": "ENUM", "name": "CurrencyCode" }
                    ]
                }
            }
        });

        Arc::new(Schema::from_introspection_value(introspection).expect("valid fixture"))
    }

    #[test]
    fn build_yields_the_new_document() {
        let document = Document::build(test_schema(), |d| {
            d.add_query(Some("getShop"))?;
            Ok(())
        })
        .unwrap();

        assert_eq!(document.operations().len(), 1);
    }

    #[test]
    fn add_query_creates_a_query_operation() {
        let mut document = Document::new(test_schema());
        let query = document.add_query(Some("getUser")).unwrap();

        assert_eq!(query.operation_type(), OperationType::Query);
        assert_eq!(query.name(), "getUser");
        assert_eq!(
            document.operations().keys().collect::<Vec<_>>(),
            vec!["getUser"]
        );
    }

    #[test]
    fn add_mutation_creates_a_mutation_operation() {
        let mut document = Document::new(test_schema());
        let mutation = document.add_mutation(Some("createUser")).unwrap();

        assert_eq!(mutation.operation_type(), OperationType::Mutation);
        assert_eq!(
            document.operations().keys().collect::<Vec<_>>(),
            vec!["createUser"]
        );
    }

    #[test]
    fn add_operation_sets_the_default_name() {
        let mut document = Document::new(test_schema());
        let query = document.add_query(None).unwrap();

        assert_eq!(query.name(), "default");
        assert_eq!(
            document.operations().keys().collect::<Vec<_>>(),
            vec!["default"]
        );
    }

    #[test]
    fn add_query_with_yields_the_new_operation() {
        let mut document = Document::new(test_schema());
        document
            .add_query_with(None, |q| {
                q.add_field("shop");
            })
            .unwrap();

        let operation = &document.operations()["default"];
        assert_eq!(operation.selections().selections().len(), 1);
    }

    #[test]
    fn add_operation_supports_multiple_unique_operations() {
        let mut document = Document::new(test_schema());
        document.add_query(Some("getUser")).unwrap();
        document.add_query(Some("getPosts")).unwrap();

        assert_eq!(
            document.operations().keys().collect::<Vec<_>>(),
            vec!["getUser", "getPosts"]
        );
    }

    #[test]
    fn add_operation_enforces_unique_names() {
        let mut document = Document::new(test_schema());
        document.add_query(Some("getUser")).unwrap();

        let error = document.add_query(Some("getUser")).unwrap_err();

        assert_eq!(
            error,
            DocumentError::DuplicateOperationName {
                name: String::from("getUser")
            }
        );
        assert_eq!(document.operations().len(), 1);
    }

    #[test]
    fn a_document_with_multiple_operations_must_name_them_all() {
        let mut document = Document::new(test_schema());
        document.add_query(None).unwrap();

        let error = document.add_query(Some("getUser")).unwrap_err();

        assert!(matches!(error, DocumentError::InvalidDocument { .. }));
        assert_eq!(document.operations().len(), 1);
    }

    #[test]
    fn a_default_operation_cannot_join_named_operations() {
        let mut document = Document::new(test_schema());
        document.add_query(Some("getUser")).unwrap();

        let error = document.add_mutation(None).unwrap_err();

        assert!(matches!(error, DocumentError::InvalidDocument { .. }));
        assert_eq!(document.operations().len(), 1);
    }

    #[test]
    fn define_fragment_creates_a_fragment() {
        let mut document = Document::new(test_schema());
        let fragment = document.define_fragment("imageFields", "Image").unwrap();

        assert_eq!(fragment.name(), "imageFields");
        assert_eq!(fragment.type_().name(), "Image");
        assert_eq!(fragment.type_().kind(), TypeKind::Object);
        assert_eq!(
            document.fragments().keys().collect::<Vec<_>>(),
            vec!["imageFields"]
        );
    }

    #[test]
    fn define_fragment_rejects_scalar_targets() {
        let mut document = Document::new(test_schema());

        let error = document.define_fragment("imageFields", "String").unwrap_err();

        assert_eq!(
            error,
            DocumentError::InvalidFragmentTarget {
                name: String::from("String")
            }
        );
        assert!(document.fragments().is_empty());
    }

    #[test]
    fn define_fragment_rejects_unknown_targets() {
        let mut document = Document::new(test_schema());

        let error = document.define_fragment("missingFields", "Missing").unwrap_err();

        assert_eq!(
            error,
            DocumentError::InvalidFragmentTarget {
                name: String::from("Missing")
            }
        );
    }

    #[test]
    fn define_fragment_rejects_duplicate_names() {
        let mut document = Document::new(test_schema());
        document.define_fragment("imageFields", "Image").unwrap();

        let error = document.define_fragment("imageFields", "Shop").unwrap_err();

        assert!(matches!(error, DocumentError::InvalidDocument { .. }));
        assert_eq!(document.fragments().len(), 1);
    }

    #[test]
    fn fragment_definitions_is_the_fragments_definition_string() {
        let mut document = Document::new(test_schema());
        document
            .define_fragment_with("imageFields", "Image", |f| {
                f.add_field("src");
            })
            .unwrap();
        document
            .define_fragment_with("shopName", "Shop", |f| {
                f.add_field("name");
            })
            .unwrap();

        assert_eq!(
            document.fragment_definitions(),
            indoc! {r#"
                fragment imageFields on Image {
                  src
                }

                fragment shopName on Shop {
                  name
                }
            "#}
        );
    }

    #[test]
    fn fragment_definitions_is_empty_without_fragments() {
        let document = Document::new(test_schema());

        assert_eq!(document.fragment_definitions(), "");
    }

    #[test]
    fn to_query_joins_all_operations() {
        let document = Document::build(test_schema(), |d| {
            d.add_query_with(Some("shopQuery"), |q| {
                q.add_field_with("shop", |shop| {
                    shop.add_field("name");
                });
            })?;

            d.add_mutation_with(Some("customers"), |c| {
                c.add_field_with("customerCreate", |create| {
                    create.argument(
                        "input",
                        Value::Object(vec![
                            (String::from("email"), Value::from("email")),
                            (String::from("password"), Value::from("password")),
                        ]),
                    );
                    create.add_field_with("customer", |customer| {
                        customer.add_field("email");
                    });
                });
            })?;

            Ok(())
        })
        .unwrap();

        assert_eq!(
            document.to_query(),
            indoc! {r#"
                query shopQuery {
                  shop {
                    name
                  }
                }

                mutation customers {
                  customerCreate(input: { email: "email", password: "password" }) {
                    customer {
                      email
                    }
                  }
                }
            "#}
        );
    }

    #[test]
    fn to_query_includes_fragment_definitions() {
        let document = Document::build(test_schema(), |d| {
            d.define_fragment_with("imageFields", "Image", |f| {
                f.add_field("src");
            })?;

            d.add_query_with(Some("getShop"), |q| {
                q.add_field_with("shop", |shop| {
                    shop.add_field("name");
                });
            })?;

            d.add_query_with(Some("getProductImages"), |q| {
                q.add_field_with("shop", |shop| {
                    shop.add_field_with("productByHandle", |product| {
                        product.argument("handle", "test");
                        let images = product.add_connection("images", |node| {
                            node.add_fragment("imageFields");
                            node.add_inline_fragment_with("Image", |f| {
                                f.add_field("altText");
                            });
                        });
                        images.argument("first", 10);
                    });
                });
            })?;

            Ok(())
        })
        .unwrap();

        assert_eq!(
            document.to_query(),
            indoc! {r#"
                fragment imageFields on Image {
                  src
                }

                query getShop {
                  shop {
                    name
                  }
                }

                query getProductImages {
                  shop {
                    productByHandle(handle: "test") {
                      id
                      images(first: 10) {
                        edges {
                          cursor
                          node {
                            ...imageFields
                            ... on Image {
                              altText
                            }
                          }
                        }
                        pageInfo {
                          hasPreviousPage
                          hasNextPage
                        }
                      }
                    }
                  }
                }
            "#}
        );
    }

    #[test]
    fn rendering_is_a_pure_function_of_the_tree() {
        let document = Document::build(test_schema(), |d| {
            d.define_fragment_with("imageFields", "Image", |f| {
                f.add_field("src");
            })?;
            d.add_query_with(Some("getShop"), |q| {
                q.add_field_with("shop", |shop| {
                    shop.add_fragment("imageFields");
                });
            })?;
            Ok(())
        })
        .unwrap();

        assert_eq!(document.to_query(), document.to_query());
    }

    #[test]
    fn an_empty_document_renders_nothing() {
        let document = Document::new(test_schema());

        assert_eq!(document.to_query(), "");
    }
}

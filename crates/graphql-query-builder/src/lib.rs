//! A library to programmatically build, validate and serialise GraphQL query
//! documents.
//!
//! A [`Document`] owns named operations and named fragments, each holding a
//! tree of field selections, fragment spreads and inline fragments. The tree
//! is assembled in memory through builder callbacks, checked against a
//! [`Schema`] description where the language requires it, and rendered to
//! GraphQL text with two-space indentation and stable, insertion-order
//! output.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use graphql_query_builder::{Document, Schema, SelectionContainer, Value};
//! use indoc::indoc;
//!
//! let schema = Arc::new(
//!     Schema::from_introspection_json(
//!         r#"{ "__schema": { "queryType": { "name": "QueryRoot" }, "types": [
//!             { "kind": "OBJECT", "name": "QueryRoot" },
//!             { "kind": "OBJECT", "name": "Mutation" },
//!             { "kind": "OBJECT", "name": "Shop" }
//!         ] } }"#,
//!     )
//!     .unwrap(),
//! );
//!
//! let document = Document::build(schema, |d| {
//!     d.add_query_with(Some("shopQuery"), |q| {
//!         q.add_field_with("shop", |shop| {
//!             shop.add_field("name");
//!         });
//!     })?;
//!
//!     d.add_mutation_with(Some("customers"), |m| {
//!         m.add_field_with("customerCreate", |create| {
//!             create.argument(
//!                 "input",
//!                 Value::Object(vec![
//!                     (String::from("email"), Value::from("email")),
//!                     (String::from("password"), Value::from("password")),
//!                 ]),
//!             );
//!             create.add_field_with("customer", |customer| {
//!                 customer.add_field("email");
//!             });
//!         });
//!     })?;
//!
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert_eq!(
//!     document.to_query(),
//!     indoc! {r#"
//!         query shopQuery {
//!           shop {
//!             name
//!           }
//!         }
//!
//!         mutation customers {
//!           customerCreate(input: { email: "email", password: "password" }) {
//!             customer {
//!               email
//!             }
//!           }
//!         }
//!     "#}
//! );
//! ```
//!
//! Building is single-threaded and synchronous; rendering borrows the tree
//! immutably, so a fully built document can be rendered from several threads
//! at once. Sending a rendered document over HTTP is the job of the
//! [`HttpTransport`] collaborator, which the builder core never depends on.

#![forbid(unsafe_code)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, future_incompatible, unreachable_pub, rust_2018_idioms)]

mod client;
mod document;
mod field;
mod fragment;
mod operation;
mod response;
mod schema;
mod selection_set;
mod transport;
mod value;

pub use client::Client;
pub use document::{Document, DocumentError};
pub use field::Field;
pub use fragment::{Fragment, FragmentSpread, InlineFragment};
pub use operation::{Operation, OperationType, DEFAULT_OPERATION_NAME};
pub use response::Response;
pub use schema::{Schema, SchemaError, TypeDescriptor, TypeKind};
pub use selection_set::{Selection, SelectionContainer, SelectionSet};
pub use transport::{Config, HttpTransport, TransportError};
pub use value::{Arguments, Value};

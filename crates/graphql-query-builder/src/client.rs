use std::sync::Arc;

use crate::{Config, Document, DocumentError, HttpTransport, Response, Schema, TransportError};

/// The `Client` type ties a schema to a transport: it mints schema-bound
/// documents and sends their rendered text to the endpoint.
///
/// It performs no retries and caches nothing.
///
/// ### Example
/// ```no_run
/// use std::sync::Arc;
/// use graphql_query_builder::{Client, Config, Schema, SelectionContainer};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let introspection_json = "";
/// let schema = Arc::new(Schema::from_introspection_json(introspection_json)?);
/// let config = Config::new("https://shop.example.com/api/graphql")?;
/// let client = Client::new(config, schema);
///
/// let document = client.build_document(|d| {
///     d.add_query_with(Some("getShop"), |q| {
///         q.add_field_with("shop", |shop| {
///             shop.add_field("name");
///         });
///     })?;
///     Ok(())
/// })?;
///
/// let response = client.query(&document, Some("getShop"))?;
/// println!("{:?}", response.data());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    schema: Arc<Schema>,
    transport: HttpTransport,
}

impl Client {
    /// Create a client for the given endpoint configuration and schema.
    pub fn new(config: Config, schema: Arc<Schema>) -> Self {
        Self {
            schema,
            transport: HttpTransport::new(config),
        }
    }

    /// The schema this client binds documents to.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Create an empty document bound to the client's schema.
    pub fn document(&self) -> Document {
        Document::new(Arc::clone(&self.schema))
    }

    /// Create a document bound to the client's schema and populate it
    /// through `build`.
    pub fn build_document<F>(&self, build: F) -> Result<Document, DocumentError>
    where
        F: FnOnce(&mut Document) -> Result<(), DocumentError>,
    {
        Document::build(Arc::clone(&self.schema), build)
    }

    /// Render `document` and send it, selecting `operation_name` when the
    /// document holds more than one operation.
    pub fn query(
        &self,
        document: &Document,
        operation_name: Option<&str>,
    ) -> Result<Response, TransportError> {
        self.transport.request(&document.to_query(), operation_name)
    }

    /// Send an already-rendered query string.
    pub fn raw_query(&self, query: &str) -> Result<Response, TransportError> {
        self.transport.request(query, None)
    }
}

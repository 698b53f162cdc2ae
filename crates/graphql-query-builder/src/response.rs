/// The `Response` type wraps the parsed JSON body of a GraphQL response.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    body: serde_json::Value,
}

impl Response {
    /// Wrap an already-parsed response body.
    pub fn new(body: serde_json::Value) -> Self {
        Self { body }
    }

    /// Parse a response body from JSON text.
    pub fn from_json_str(body: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            body: serde_json::from_str(body)?,
        })
    }

    /// The whole response body.
    pub fn body(&self) -> &serde_json::Value {
        &self.body
    }

    /// The response's `data` member, when present.
    pub fn data(&self) -> Option<&serde_json::Value> {
        self.body.get("data")
    }

    /// The response's `errors` member, when present.
    pub fn errors(&self) -> Option<&serde_json::Value> {
        self.body.get("errors")
    }

    /// Consume the wrapper, returning the body.
    pub fn into_body(self) -> serde_json::Value {
        self.body
    }
}

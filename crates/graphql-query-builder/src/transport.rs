use reqwest::blocking;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{IntoUrl, Url};
use thiserror::Error;
use tracing::{debug, trace};

use crate::Response;

const JSON_MIME_TYPE: &str = "application/json";

/// Errors raised by the HTTP transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server answered with a non-success status.
    #[error("network error: {status}/{message}")]
    Http {
        /// The HTTP status code.
        status: u16,
        /// The status' canonical reason phrase.
        message: String,
    },

    /// The request could not be built or sent.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The response body is not valid JSON.
    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Endpoint configuration for the HTTP transport.
///
/// Caller-supplied headers are merged over the JSON defaults and win on
/// conflicting keys.
#[derive(Debug, Clone)]
pub struct Config {
    url: Url,
    username: Option<String>,
    password: Option<String>,
    headers: HeaderMap,
}

impl Config {
    /// Create a configuration for the given endpoint URL.
    ///
    /// TLS is used automatically when the URL's scheme is `https`.
    pub fn new(url: impl IntoUrl) -> Result<Self, TransportError> {
        Ok(Self {
            url: url.into_url()?,
            username: None,
            password: None,
            headers: HeaderMap::new(),
        })
    }

    /// Set HTTP basic authentication credentials.
    pub fn basic_auth(mut self, username: impl Into<String>, password: Option<&str>) -> Self {
        self.username = Some(username.into());
        self.password = password.map(str::to_string);
        self
    }

    /// Add a header sent with every request, overriding the default of the
    /// same name.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// The configured endpoint URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    fn merged_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_MIME_TYPE));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MIME_TYPE));
        for (name, value) in self.headers.iter() {
            headers.insert(name, value.clone());
        }
        headers
    }
}

/// The `HttpTransport` type sends a rendered document string to a GraphQL
/// endpoint and hands back the parsed JSON response.
///
/// The builder core never depends on it; it only ever receives a final query
/// string plus an optional operation name.
///
/// ### Example
/// ```no_run
/// use graphql_query_builder::{Config, HttpTransport};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::new("https://shop.example.com/api/graphql")?
///     .basic_auth("api", Some("secret"));
/// let transport = HttpTransport::new(config);
///
/// let response = transport.request("query default {\n  shop\n}\n", None)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpTransport {
    config: Config,
    client: blocking::Client,
}

impl HttpTransport {
    /// Create a transport for the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: blocking::Client::new(),
        }
    }

    /// POST `query` to the configured endpoint and parse the JSON response.
    ///
    /// The request body is
    /// `{"query": ..., "variables": {}, "operation_name": ...}`. Any
    /// non-success response fails with [`TransportError::Http`] carrying the
    /// status code and reason; nothing is retried.
    pub fn request(
        &self,
        query: &str,
        operation_name: Option<&str>,
    ) -> Result<Response, TransportError> {
        debug!(operation_name, "sending GraphQL request");
        trace!("query: {query}");

        let mut request = self
            .client
            .post(self.config.url.clone())
            .headers(self.config.merged_headers());
        if let Some(username) = &self.config.username {
            request = request.basic_auth(username, self.config.password.as_deref());
        }

        let response = request.json(&request_body(query, operation_name)).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Http {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown").to_string(),
            });
        }

        let body = response.text()?;
        trace!("response body: {body}");

        Ok(Response::from_json_str(&body)?)
    }
}

fn request_body(query: &str, operation_name: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "query": query,
        "variables": {},
        "operation_name": operation_name,
    })
}

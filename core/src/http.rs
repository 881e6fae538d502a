//! HTTP transport types and the pluggable transport seam.
//!
//! # Design
//! Requests and responses are described as plain data. Controllers build
//! `HttpRequest` values, the shared `Requester` hands them to a `Transport`,
//! and the resulting `HttpResponse` is parsed by `crate::response`. Callers
//! who want to run the I/O themselves can stop after the build step.
//!
//! The default transport is a blocking `ureq` agent. Anything implementing
//! `Transport` (a proxy-aware agent, a recording test double) can replace it
//! through `Client::set_transport`.

use std::time::Duration;

use strum::Display;
use ureq::typestate::{WithBody, WithoutBody};
use ureq::RequestBuilder;
use url::Url;

use crate::error::TransportError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

/// An HTTP request described as plain data.
///
/// `path` holds the absolute URL without its query string; query parameters
/// live in `query` so interceptors can inspect and replace them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Sets a query parameter, replacing any existing value for `key`.
    pub fn set_query(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.query.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.query.push((key.to_string(), value)),
        }
    }

    /// Returns the first value of query parameter `key`.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the first value of header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Absolute URL with the query string encoded.
    pub fn url(&self) -> Result<Url, url::ParseError> {
        if self.query.is_empty() {
            Url::parse(&self.path)
        } else {
            Url::parse_with_params(&self.path, &self.query)
        }
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a single HTTP round-trip.
///
/// Implementations must return non-2xx responses as `Ok`; status handling
/// belongs to the response parser.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by a `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Agent with a global timeout that reports 4xx/5xx as data.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Wraps a caller-configured agent (proxies, TLS, custom timeouts).
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url()?;
        let url = url.as_str();

        let mut response = match request.method {
            HttpMethod::Get => call(self.agent.get(url), request),
            HttpMethod::Delete => call(self.agent.delete(url), request),
            HttpMethod::Post => send(self.agent.post(url), request),
            HttpMethod::Patch => send(self.agent.patch(url), request),
        }?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

// Status handling is forced off per request so an agent injected through
// `Client::set_http_client` still hands back 4xx/5xx bodies.
fn call(
    builder: RequestBuilder<WithoutBody>,
    request: &HttpRequest,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    let mut builder = builder.config().http_status_as_error(false).build();
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder.call()
}

fn send(
    builder: RequestBuilder<WithBody>,
    request: &HttpRequest,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    let mut builder = builder.config().http_status_as_error(false).build();
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    match &request.body {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_query_replaces_existing_key() {
        let mut req = HttpRequest::new(HttpMethod::Get, "https://api.pinterest.com/v1/me/");
        req.set_query("access_token", "T1");
        req.set_query("fields", "id");
        req.set_query("access_token", "T2");

        assert_eq!(req.query.len(), 2);
        assert_eq!(req.query_param("access_token"), Some("T2"));
    }

    #[test]
    fn url_encodes_query() {
        let mut req = HttpRequest::new(HttpMethod::Get, "https://api.pinterest.com/v1/me/");
        req.set_query("fields", "id,username");
        req.set_query("query", "blue shoes");

        let url = req.url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.pinterest.com/v1/me/?fields=id%2Cusername&query=blue+shoes"
        );
    }

    #[test]
    fn url_without_query_has_no_question_mark() {
        let req = HttpRequest::new(HttpMethod::Delete, "https://api.pinterest.com/v1/pins/1/");
        assert_eq!(req.url().unwrap().as_str(), "https://api.pinterest.com/v1/pins/1/");
    }

    #[test]
    fn header_lookup_ignores_case() {
        let mut req = HttpRequest::new(HttpMethod::Post, "https://api.pinterest.com/v1/pins/");
        req.headers
            .push(("content-type".to_string(), "application/json".to_string()));
        assert_eq!(req.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn method_displays_uppercase() {
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
    }
}

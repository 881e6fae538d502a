//! The request builder shared by every controller.
//!
//! # Design
//! `Requester` owns the base URL, the default content type, one transport
//! and at most one request interceptor. Controllers borrow it, so a token
//! registered on the client is seen by every controller without any global
//! state. The interceptor runs at dispatch, after the controller has built
//! the request and before the transport sees it.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, field, instrument, warn, Span};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::models::Paginated;
use crate::response;

/// Hook that mutates every outgoing request before dispatch.
pub type RequestInterceptor = Arc<dyn Fn(&mut HttpRequest) + Send + Sync>;

pub struct Requester {
    base_url: String,
    content_type: String,
    transport: Box<dyn Transport>,
    interceptor: Option<RequestInterceptor>,
}

impl fmt::Debug for Requester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Requester")
            .field("base_url", &self.base_url)
            .field("content_type", &self.content_type)
            .field("interceptor", &self.interceptor.is_some())
            .finish_non_exhaustive()
    }
}

impl Requester {
    pub fn new(base_url: &str, content_type: &str, transport: Box<dyn Transport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            content_type: content_type.to_string(),
            transport,
            interceptor: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn set_transport(&mut self, transport: Box<dyn Transport>) {
        self.transport = transport;
    }

    pub(crate) fn set_interceptor(&mut self, interceptor: RequestInterceptor) {
        self.interceptor = Some(interceptor);
    }

    /// Request for `path` relative to the base URL.
    pub fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        HttpRequest::new(method, format!("{}{path}", self.base_url))
    }

    /// Request with `fields` set to `fields`, or to `default` when `None`.
    pub fn request_with_fields(
        &self,
        method: HttpMethod,
        path: &str,
        fields: Option<&[&str]>,
        default: &[&str],
    ) -> HttpRequest {
        let mut request = self.request(method, path);
        request.set_query("fields", fields.unwrap_or(default).join(","));
        request
    }

    /// Attaches `payload` as a JSON body with the default content type.
    pub fn with_json<B: Serialize>(
        &self,
        mut request: HttpRequest,
        payload: &B,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(payload).map_err(ApiError::Serialization)?;
        request
            .headers
            .push(("content-type".to_string(), self.content_type.clone()));
        request.body = Some(body);
        Ok(request)
    }

    /// Applies the interceptor and executes the request.
    #[instrument(
        name = "pinterest_request",
        skip(self, request),
        fields(
            http.method = %request.method,
            http.path = %request.path,
            http.status_code = field::Empty,
        )
    )]
    pub fn dispatch(&self, mut request: HttpRequest) -> Result<HttpResponse, ApiError> {
        if let Some(interceptor) = &self.interceptor {
            (interceptor.as_ref())(&mut request);
        }
        request.url()?;

        debug!("sending request");
        let response = self.transport.execute(&request)?;
        Span::current().record("http.status_code", response.status);

        if response.is_success() {
            debug!(bytes = response.body.len(), "received response");
        } else {
            warn!(status = response.status, "request rejected");
        }
        Ok(response)
    }

    pub fn send<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        response::parse_data(self.dispatch(request)?)
    }

    pub fn send_page<T: DeserializeOwned>(
        &self,
        request: HttpRequest,
    ) -> Result<Paginated<T>, ApiError> {
        response::parse_page(self.dispatch(request)?)
    }

    pub fn send_json<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        response::parse_json(self.dispatch(request)?)
    }

    pub fn send_empty(&self, request: HttpRequest) -> Result<(), ApiError> {
        response::parse_empty(self.dispatch(request)?)
    }
}

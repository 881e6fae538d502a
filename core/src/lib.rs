//! Typed, blocking client for the Pinterest v1 REST API.
//!
//! # Overview
//! [`Client`] aggregates one controller per resource group (`oauth`,
//! `users`, `boards`, `pins`, `me`). Every controller method performs one
//! HTTP round-trip and returns either a fully decoded model or an
//! [`ApiError`].
//!
//! # Design
//! - A single `Requester` is shared by all controllers; the access token is
//!   injected by its request interceptor, never by a global.
//! - Each operation also has a `build_*` method returning the request as
//!   plain data, and `response::parse_*` functions decode a response, so a
//!   caller can run the I/O with its own stack.
//! - Collection endpoints return `Paginated<T>`; the cursor travels next to
//!   the items rather than inside any model.

pub mod client;
pub mod controllers;
pub mod error;
pub mod http;
pub mod models;
pub mod request;
pub mod response;

pub use client::{Client, ClientBuilder};
pub use controllers::{PageOptions, SuggestedBoardsOptions};
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use models::{
    AccessToken, Attribution, Board, CreateBoard, CreatePin, Interest, Media, Page, Paginated,
    Pin, PinCounts, PinImage, Scope, UpdateBoard, UpdatePin, User,
};

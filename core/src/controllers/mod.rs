//! One controller per API resource group.
//!
//! # Design
//! Controllers are thin views over the client's `Requester`: they pick the
//! verb and path, attach parameters and the field selection, and decode
//! into the matching model. Each operation has a `build_*` counterpart that
//! returns the request as plain data for callers that run their own I/O.

mod boards;
mod me;
mod oauth;
mod pins;
mod users;

pub use boards::BoardsController;
pub use me::{MeController, SuggestedBoardsOptions};
pub use oauth::{OAuthController, AUTHORIZE_URL};
pub use pins::PinsController;
pub use users::UsersController;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::http::HttpRequest;

/// Everything but RFC 3986 unreserved characters.
const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes one path segment, so `/`, `?` and `#` stay inside it.
pub(crate) fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, SEGMENT_ENCODE_SET).to_string()
}

/// Encodes a `<username>/<board_name>` spec as two segments.
pub(crate) fn board_segments(board: &str) -> String {
    board.split('/').map(segment).collect::<Vec<_>>().join("/")
}

/// Query options shared by collection endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Cursor from a previous page's `Page::cursor`.
    pub cursor: Option<String>,
    pub limit: Option<u32>,
    /// Explicit field selection; `None` requests the canonical set.
    pub fields: Option<Vec<String>>,
}

impl PageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub(crate) fn apply(&self, request: &mut HttpRequest, default: &[&str]) {
        let fields = match &self.fields {
            Some(fields) => fields.join(","),
            None => default.join(","),
        };
        request.set_query("fields", fields);
        if let Some(cursor) = &self.cursor {
            request.set_query("cursor", cursor.as_str());
        }
        if let Some(limit) = self.limit {
            request.set_query("limit", limit.to_string());
        }
    }
}

use serde::{Deserialize, Serialize};

/// Pagination block returned next to collection data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    /// Opaque cursor for the following page; `None` on the last page.
    pub cursor: Option<String>,
    /// Absolute URL of the following page.
    pub next: Option<String>,
}

/// One page of a collection endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: Page,
}

impl<T> Paginated<T> {
    /// Cursor to pass back for the next page, if there is one.
    pub fn next_cursor(&self) -> Option<&str> {
        self.page.cursor.as_deref().filter(|c| !c.is_empty())
    }
}

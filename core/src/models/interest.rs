use serde::{Deserialize, Serialize};

pub const INTEREST_FIELDS: &[&str] = &["id", "name"];

/// A topic the user follows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interest {
    pub id: String,
    pub name: String,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{iso8601, null_as_default, Thumbnail, User};

pub const BOARD_FIELDS: &[&str] = &[
    "id",
    "name",
    "url",
    "description",
    "creator",
    "created_at",
    "counts",
    "image",
    "privacy",
    "reason",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Board {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub creator: User,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub counts: BoardCounts,
    #[serde(deserialize_with = "null_as_default")]
    pub image: Thumbnail,
    #[serde(deserialize_with = "null_as_default")]
    pub privacy: String,
    /// Why the board was suggested; only set on suggestion results.
    #[serde(deserialize_with = "null_as_default")]
    pub reason: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardCounts {
    pub pins: i32,
    pub collaborators: i32,
    pub followers: i32,
}

/// Payload for `POST /boards/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateBoard {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for `PATCH /boards/{board}/`. Omitted fields remain unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateBoard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

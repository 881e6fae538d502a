//! Resource models for the Pinterest v1 API.
//!
//! # Design
//! Models are plain values decoded from one response body. Every struct
//! uses `#[serde(default)]`, so fields missing from a partial response
//! (see the `*_FIELDS` selection constants) decode to their zero value.
//! Fields the API is known to send as `null` go through `null_as_default`
//! for the same reason.

mod board;
mod interest;
mod oauth;
mod page;
mod pin;
mod user;

pub mod iso8601;

pub use board::{Board, BoardCounts, CreateBoard, UpdateBoard, BOARD_FIELDS};
pub use interest::{Interest, INTEREST_FIELDS};
pub use oauth::{AccessToken, Scope};
pub use page::{Page, Paginated};
pub use pin::{
    Attribution, CreatePin, Media, Pin, PinCounts, PinImage, PinMetadata, UpdatePin, PIN_FIELDS,
};
pub use user::{User, UserCounts, USER_FIELDS};

use serde::{Deserialize, Deserializer, Serialize};

/// A single image rendition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// The 60x60 thumbnail attached to boards and users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thumbnail {
    #[serde(rename = "60x60", deserialize_with = "null_as_default")]
    pub small: Image,
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{json, Value};

    /// A user response carrying every field in `USER_FIELDS`.
    pub(crate) fn user() -> Value {
        json!({
            "id": "1",
            "username": "alice",
            "first_name": "Alice",
            "last_name": "Liddell",
            "bio": "Pies and tarts",
            "created_at": "2012-03-04T05:06:07",
            "counts": {"pins": 10, "following": 2, "followers": 3, "boards": 4, "likes": 5},
            "image": {"60x60": {"url": "https://i.pinimg.com/60x60/a.jpg", "width": 60, "height": 60}},
            "account_type": "individual",
            "url": "https://www.pinterest.com/alice/"
        })
    }

    /// A board response carrying every field in `BOARD_FIELDS`.
    pub(crate) fn board() -> Value {
        json!({
            "id": "77",
            "name": "Recipes",
            "url": "https://www.pinterest.com/alice/recipes/",
            "description": "Food",
            "creator": user(),
            "created_at": "2016-01-05T09:00:00.250",
            "counts": {"pins": 40, "collaborators": 2, "followers": 300},
            "image": {"60x60": {"url": "https://i.pinimg.com/60x60/r.jpg", "width": 60, "height": 60}},
            "privacy": "public",
            "reason": "Popular in Food"
        })
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{iso8601, null_as_default, Thumbnail};

pub const USER_FIELDS: &[&str] = &[
    "id",
    "username",
    "first_name",
    "last_name",
    "bio",
    "created_at",
    "counts",
    "image",
    "account_type",
    "url",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bio: String,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub counts: UserCounts,
    #[serde(deserialize_with = "null_as_default")]
    pub image: Thumbnail,
    #[serde(deserialize_with = "null_as_default")]
    pub account_type: String,
    pub url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserCounts {
    pub pins: i32,
    pub following: i32,
    pub followers: i32,
    pub boards: i32,
    pub likes: i32,
}

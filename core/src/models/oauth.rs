use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Permission scopes requested during authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    ReadPublic,
    WritePublic,
    ReadRelationships,
    WriteRelationships,
}

/// Result of exchanging an authorization code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
    pub scope: Vec<String>,
}

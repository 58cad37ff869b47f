pub mod album;
pub mod artist;
pub mod id;
pub mod page;
pub mod track;

use serde::{Deserialize, Serialize};

use std::collections::HashMap;

/// Known external URLs for a resource, keyed by type (e.g. `"spotify"`).
pub type ExternalUrl = HashMap<String, String>;

/// Known external IDs for a resource, keyed by type (`"isrc"`, `"upc"`, `"ean"`).
pub type ExternalIds = HashMap<String, String>;

/// Cover art or artist picture. Width and height are absent when unknown.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub url: String,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Followers {
    pub total: u32,
    /// Always null in the current version of the Web API.
    pub href: Option<String>,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Copyright {
    pub text: String,
    /// `C` for copyright, `P` for sound recording (performance) copyright.
    #[serde(rename = "type")]
    pub _type: String,
}

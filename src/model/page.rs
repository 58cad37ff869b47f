//! Paging objects returned by the listing endpoints.
//!
//! Every listing endpoint wraps its results in the same envelope:
//!
//! ```json
//! {
//!   "href": "https://api.spotify.com/v1/artists/{id}/albums?offset=20&limit=10",
//!   "items": [ ... ],
//!   "limit": 10,
//!   "next": "https://api.spotify.com/v1/artists/{id}/albums?offset=30&limit=10",
//!   "offset": 20,
//!   "previous": "https://api.spotify.com/v1/artists/{id}/albums?offset=10&limit=10",
//!   "total": 37
//! }
//! ```
//!
//! Only the item type changes between endpoints, and so can the name of the
//! field holding them. Decoding is done in two steps: the scalars first into a
//! [`RawPage`], keeping every other field as untyped JSON, then the item
//! field against the type the caller asked for.

// Use 3rd party
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Use local
use crate::model::album::SimpleAlbum;
use crate::model::id::Href;
use crate::model::track::SimpleTrack;

/// One page of results, in the order the server sent them.
///
/// `total` is the number of items available server side and can be larger
/// than `items.len()`.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Link to the endpoint returning this page.
    #[serde(rename = "href")]
    pub endpoint: Href,
    pub total: u32,
    /// Maximum number of items in the response, as set in the query or by default.
    pub limit: u32,
    pub offset: u32,
    pub next: Option<Href>,
    pub previous: Option<Href>,
    pub items: Vec<T>,
}

pub type SimpleAlbumPage = Page<SimpleAlbum>;
pub type SimpleTrackPage = Page<SimpleTrack>;

/// Page envelope whose items haven't been decoded yet.
#[derive(Debug, Deserialize)]
pub struct RawPage {
    pub href: Href,
    pub total: u32,
    pub limit: u32,
    pub offset: u32,
    pub next: Option<Href>,
    pub previous: Option<Href>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl RawPage {
    /// Decodes the array stored under `items_field` as `T`s.
    pub fn into_page<T: DeserializeOwned>(mut self, items_field: &str) -> serde_json::Result<Page<T>> {
        let items = self
            .rest
            .remove(items_field)
            .ok_or_else(|| serde_json::Error::custom(format!("missing field `{}`", items_field)))?;
        let items: Vec<T> = serde_json::from_value(items)?;

        Ok(Page {
            endpoint: self.href,
            total: self.total,
            limit: self.limit,
            offset: self.offset,
            next: self.next,
            previous: self.previous,
            items,
        })
    }
}

/// Decodes a response body holding a page envelope.
pub fn decode_page<T: DeserializeOwned>(body: &str, items_field: &str) -> serde_json::Result<Page<T>> {
    let raw: RawPage = serde_json::from_str(body)?;
    raw.into_page(items_field)
}

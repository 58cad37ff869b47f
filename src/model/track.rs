// Use 3rd party
use serde::{Deserialize, Serialize};

use crate::model::album::SimpleAlbum;
use crate::model::artist::SimpleArtist;
use crate::model::id::{Href, Id, Uri};
use crate::model::{ExternalIds, ExternalUrl};

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimpleTrack {
    pub artists: Vec<SimpleArtist>,
    #[serde(default)]
    pub available_markets: Vec<String>,
    /// Usually 1 unless the album has more than one disc.
    pub disc_number: u32,
    pub duration_ms: u32,
    pub explicit: bool,
    pub external_urls: ExternalUrl,
    pub href: Href,
    pub id: Id,
    pub name: String,
    /// 30 second MP3 preview, null when there is none.
    pub preview_url: Option<String>,
    pub track_number: u32,
    pub uri: Uri,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct FullTrack {
    #[serde(flatten)]
    pub simple: SimpleTrack,
    pub album: SimpleAlbum,
    #[serde(default)]
    pub external_ids: ExternalIds,
    /// Between 0 and 100, 100 being the most popular.
    pub popularity: u8,
}

#[derive(Default, Debug, Deserialize)]
pub(crate) struct FullTracks {
    pub tracks: Vec<FullTrack>,
}

#[derive(Default, Debug, Deserialize)]
pub(crate) struct SeveralTracks {
    pub tracks: Vec<Option<FullTrack>>,
}

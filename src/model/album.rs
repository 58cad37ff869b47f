// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::artist::SimpleArtist;
use crate::model::id::{Href, Id, Uri};
use crate::model::page::Page;
use crate::model::track::SimpleTrack;
use crate::model::{Copyright, ExternalIds, ExternalUrl, Image};
use crate::options::AlbumType;

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimpleAlbum {
    pub name: String,
    /// One of `album`, `single`, `compilation` or `appears_on`.
    pub album_type: String,
    /// Only present when listing the albums of an artist.
    #[serde(default)]
    pub album_group: Option<String>,
    pub artists: Vec<SimpleArtist>,
    pub id: Id,
    pub uri: Uri,
    /// ISO 3166-1 alpha-2 codes of the markets where the album is available.
    #[serde(default)]
    pub available_markets: Vec<String>,
    pub href: Href,
    /// Widest first.
    #[serde(default)]
    pub images: Vec<Image>,
    pub external_urls: ExternalUrl,
    pub release_date: String,
    /// `year`, `month` or `day`.
    pub release_date_precision: String,
    pub total_tracks: u32,
}

impl SimpleAlbum {
    /// Category of the album, `None` when Spotify sent one this crate doesn't know.
    pub fn kind(&self) -> Option<AlbumType> {
        self.album_type.parse().ok()
    }
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct FullAlbum {
    #[serde(flatten)]
    pub simple: SimpleAlbum,
    #[serde(default)]
    pub copyrights: Vec<Copyright>,
    #[serde(default)]
    pub external_ids: ExternalIds,
    /// Empty if the album has not been classified yet.
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub label: Option<String>,
    pub popularity: u8,
    /// First page of the album's tracks.
    pub tracks: Page<SimpleTrack>,
}

#[derive(Default, Debug, Deserialize)]
pub(crate) struct SeveralAlbums {
    pub albums: Vec<Option<FullAlbum>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_album_kind() {
        let album = SimpleAlbum {
            album_type: "compilation".to_owned(),
            ..Default::default()
        };
        assert_eq!(album.kind(), Some(AlbumType::COMPILATION));

        let album = SimpleAlbum {
            album_type: "mixtape".to_owned(),
            ..Default::default()
        };
        assert_eq!(album.kind(), None);
    }
}

// Use 3rd party
use serde::{Deserialize, Serialize};

// Use local
use crate::model::id::{Href, Id, Uri};
use crate::model::{ExternalUrl, Followers, Image};

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimpleArtist {
    pub name: String,
    pub id: Id,
    pub uri: Uri,
    pub href: Href,
    pub external_urls: ExternalUrl,
}

/// Artist with popularity, genres, followers and images on top of the
/// simplified fields.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct FullArtist {
    #[serde(flatten)]
    pub simple: SimpleArtist,
    /// Between 0 and 100, calculated from the popularity of all the artist's tracks.
    pub popularity: u8,
    /// Empty if the artist has not been classified yet.
    #[serde(default)]
    pub genres: Vec<String>,
    pub followers: Followers,
    /// Widest first.
    #[serde(default)]
    pub images: Vec<Image>,
}

// Wrappers used by the endpoints returning several artists at once.

#[derive(Default, Debug, Deserialize)]
pub(crate) struct FullArtists {
    pub artists: Vec<FullArtist>,
}

#[derive(Default, Debug, Deserialize)]
pub(crate) struct SeveralArtists {
    pub artists: Vec<Option<FullArtist>>,
}

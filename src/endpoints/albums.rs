//! Endpoint functions relating to albums

use crate::client::{ClientResult, Spotify};
use crate::model::album::{FullAlbum, SeveralAlbums};
use crate::model::id::{join_ids, Id};
use crate::model::page::SimpleTrackPage;
use crate::options::{build_query, encode_query, Options};

pub struct Albums<'a>(pub &'a Spotify);

impl Albums<'_> {
    pub async fn get(&self, id: &Id) -> ClientResult<FullAlbum> {
        let url = format!("/albums/{}", id.path_segment());
        let result = self.0.get(&url, None).await?;
        Spotify::convert_result::<FullAlbum>(&result)
    }

    /// Several albums in the order requested, `None` for the ones that could not be found.
    pub async fn several(&self, ids: &[Id]) -> ClientResult<Vec<Option<FullAlbum>>> {
        let query = encode_query(vec![("ids", join_ids(ids))])?;
        let result = self.0.get("/albums", Some(&query)).await?;
        let albums = Spotify::convert_result::<SeveralAlbums>(&result)?.albums;
        Ok(albums)
    }

    pub async fn tracks(&self, id: &Id) -> ClientResult<SimpleTrackPage> {
        self.tracks_opt(id, None).await
    }

    /// Tracks of the album, paged by `options`.
    ///
    /// A track appears once per album whatever the market, so no fallback
    /// market is sent when `options` has no country.
    pub async fn tracks_opt(&self, id: &Id, options: Option<&Options>) -> ClientResult<SimpleTrackPage> {
        let url = format!("/albums/{}/tracks", id.path_segment());
        let query = build_query(options, None, None)?;
        self.0.get_page(&url, query.as_deref(), "items").await
    }
}

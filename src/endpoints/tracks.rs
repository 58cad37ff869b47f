//! Endpoint functions related to tracks

use crate::client::{ClientResult, Spotify};
use crate::model::id::{join_ids, Id};
use crate::model::track::{FullTrack, SeveralTracks};
use crate::options::encode_query;

pub struct Tracks<'a>(pub &'a Spotify);

impl Tracks<'_> {
    pub async fn get(&self, id: &Id) -> ClientResult<FullTrack> {
        let url = format!("/tracks/{}", id.path_segment());
        let result = self.0.get(&url, None).await?;
        Spotify::convert_result::<FullTrack>(&result)
    }

    /// Several tracks in the order requested, `None` for the ones that could not be found.
    pub async fn several(&self, ids: &[Id]) -> ClientResult<Vec<Option<FullTrack>>> {
        let query = encode_query(vec![("ids", join_ids(ids))])?;
        let result = self.0.get("/tracks", Some(&query)).await?;
        let tracks = Spotify::convert_result::<SeveralTracks>(&result)?.tracks;
        Ok(tracks)
    }
}

//! Endpoint functions related to artists

use crate::client::{ClientResult, Spotify};
use crate::model::artist::{FullArtist, FullArtists, SeveralArtists};
use crate::model::id::{join_ids, Id};
use crate::model::page::SimpleAlbumPage;
use crate::model::track::{FullTrack, FullTracks};
use crate::options::{build_query, encode_query, AlbumType, Options};

pub struct Artists<'a>(pub &'a Spotify);

impl Artists<'_> {
    /// Catalog information for a single artist.
    pub async fn get(&self, id: &Id) -> ClientResult<FullArtist> {
        let url = format!("/artists/{}", id.path_segment());
        let result = self.0.get(&url, None).await?;
        Spotify::convert_result::<FullArtist>(&result)
    }

    /// Catalog information for several artists, in the order requested.
    ///
    /// Artists that could not be found are `None` in their position, and
    /// duplicate IDs give duplicate artists.
    pub async fn several(&self, ids: &[Id]) -> ClientResult<Vec<Option<FullArtist>>> {
        let query = encode_query(vec![("ids", join_ids(ids))])?;
        let result = self.0.get("/artists", Some(&query)).await?;
        let artists = Spotify::convert_result::<SeveralArtists>(&result)?.artists;
        Ok(artists)
    }

    /// Up to 10 of the artist's most popular tracks in `country`, an
    /// ISO 3166-1 alpha-2 code.
    pub async fn top_tracks(&self, id: &Id, country: &str) -> ClientResult<Vec<FullTrack>> {
        let url = format!("/artists/{}/top-tracks", id.path_segment());
        let query = encode_query(vec![("country", country.to_owned())])?;
        let result = self.0.get(&url, Some(&query)).await?;
        let tracks = Spotify::convert_result::<FullTracks>(&result)?.tracks;
        Ok(tracks)
    }

    /// Up to 20 artists that listeners of this artist also listen to.
    pub async fn related(&self, id: &Id) -> ClientResult<Vec<FullArtist>> {
        let url = format!("/artists/{}/related-artists", id.path_segment());
        let result = self.0.get(&url, None).await?;
        let artists = Spotify::convert_result::<FullArtists>(&result)?.artists;
        Ok(artists)
    }

    /// First page of the artist's albums. Same as `albums_opt(id, None, None)`.
    pub async fn albums(&self, id: &Id) -> ClientResult<SimpleAlbumPage> {
        self.albums_opt(id, None, None).await
    }

    /// The artist's albums, filtered and paged by `options`.
    ///
    /// `album_type` restricts the result to the given kinds of album and is
    /// only sent along with `options`. Without a country in `options`, the
    /// configured fallback market is used, since Spotify otherwise returns
    /// one copy of each album per market it is available in.
    pub async fn albums_opt(
        &self,
        id: &Id,
        options: Option<&Options>,
        album_type: Option<AlbumType>,
    ) -> ClientResult<SimpleAlbumPage> {
        let url = format!("/artists/{}/albums", id.path_segment());
        let fallback = self.0.config().fallback_market.as_deref();
        let query = build_query(options, album_type, fallback)?;
        self.0.get_page(&url, query.as_deref(), "items").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{
        client, config, mock_request_error, mock_request_success, mock_request_success_from_file,
    };
    use crate::client::ClientError;
    use mockito::Matcher;

    #[tokio::test]
    async fn get() {
        let _mock = mock_request_success_from_file(
            "GET",
            "/artists/0TnOYISbd1XYRBk9myaseg",
            vec![],
            "tests/files/artist.json",
        );

        let result: FullArtist = client().artists().get(&"0TnOYISbd1XYRBk9myaseg".into()).await.unwrap();
        assert_eq!(result.simple.id, Id::from("0TnOYISbd1XYRBk9myaseg"));
        assert_eq!(result.simple.name, "Pitbull");
        assert_eq!(result.popularity, 82);
        assert_eq!(result.followers.total, 9719580);
        assert_eq!(result.images.len(), 3);
    }

    #[tokio::test]
    async fn get_unknown() {
        let _mock = mock_request_error(
            "GET",
            "/artists/0000000000000000000000",
            404,
            r#"{"error": {"status": 404, "message": "non existing id"}}"#,
        );

        let result = client().artists().get(&"0000000000000000000000".into()).await;
        match result {
            Err(ClientError::Api(error)) => {
                assert_eq!(error.status, 404);
                assert_eq!(error.message, "non existing id");
            }
            other => panic!("expected an API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn get_null() {
        let _mock = mock_request_success_from_file("GET", "/artists/nullartist", vec![], "tests/files/null.json");

        let result = client().artists().get(&"nullartist".into()).await;
        assert!(matches!(result, Err(ClientError::ParseJSON(_))));
    }

    #[tokio::test]
    async fn get_keeps_id_in_one_segment() {
        let _mock = mock_request_success_from_file("GET", "/artists/odd%2Fid%3Fx", vec![], "tests/files/artist.json");

        let result = client().artists().get(&"odd/id?x".into()).await.unwrap();
        assert_eq!(result.simple.name, "Pitbull");
    }

    #[tokio::test]
    async fn get_unexpected_shape() {
        let _mock = mock_request_success("GET", "/artists/unexpectedartist", r#"{"unexpected": true}"#);

        let result = client().artists().get(&"unexpectedartist".into()).await;
        assert!(matches!(result, Err(ClientError::ParseJSON(_))));
    }

    #[tokio::test]
    async fn get_error_envelope_with_success_status() {
        let _mock = mock_request_success(
            "GET",
            "/artists/envelopeartist",
            r#"{"error": {"status": 404, "message": "non existing id"}}"#,
        );

        let result = client().artists().get(&"envelopeartist".into()).await;
        assert!(matches!(result, Err(ClientError::ParseJSON(_))));
    }

    #[tokio::test]
    async fn several() {
        let _mock = mock_request_success_from_file(
            "GET",
            "/artists",
            vec![Matcher::UrlEncoded(
                "ids".into(),
                "0TnOYISbd1XYRBk9myaseg,0OdUWJ0sBjDrqHygGUXeCF,0TnOYISbd1XYRBk9myaseg,0000000000000000000000".into(),
            )],
            "tests/files/artists.json",
        );

        let ids: Vec<Id> = vec![
            "0TnOYISbd1XYRBk9myaseg".into(),
            "0OdUWJ0sBjDrqHygGUXeCF".into(),
            "0TnOYISbd1XYRBk9myaseg".into(),
            "0000000000000000000000".into(),
        ];
        let result = client().artists().several(&ids).await.unwrap();

        assert_eq!(result.len(), 4);
        let names: Vec<Option<&str>> = result
            .iter()
            .map(|artist| artist.as_ref().map(|artist| artist.simple.name.as_str()))
            .collect();
        assert_eq!(names, vec![Some("Pitbull"), Some("Band of Horses"), Some("Pitbull"), None]);
        assert_eq!(result[0], result[2]);
    }

    #[tokio::test]
    async fn top_tracks() {
        let _mock = mock_request_success_from_file(
            "GET",
            "/artists/0OdUWJ0sBjDrqHygGUXeCF/top-tracks",
            vec![Matcher::UrlEncoded("country".into(), "SE".into())],
            "tests/files/artist_top_tracks.json",
        );

        let result: Vec<FullTrack> = client()
            .artists()
            .top_tracks(&"0OdUWJ0sBjDrqHygGUXeCF".into(), "SE")
            .await
            .unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].simple.name, "The Funeral");
        assert_eq!(result[0].album.name, "Everything All The Time");
        assert_eq!(result[1].popularity, 61);
    }

    #[tokio::test]
    async fn related() {
        let _mock = mock_request_success_from_file(
            "GET",
            "/artists/0OdUWJ0sBjDrqHygGUXeCF/related-artists",
            vec![],
            "tests/files/related_artists.json",
        );

        let result: Vec<FullArtist> = client().artists().related(&"0OdUWJ0sBjDrqHygGUXeCF".into()).await.unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].simple.name, "Iron & Wine");
        assert_eq!(result[1].genres, vec!["indie folk".to_owned()]);
    }

    #[tokio::test]
    async fn albums() {
        let _mock = mock_request_success_from_file(
            "GET",
            "/artists/1vCWHaC5f2uS3yhpwWbIA6/albums",
            vec![],
            "tests/files/artist_albums.json",
        );

        let result = client().artists().albums(&"1vCWHaC5f2uS3yhpwWbIA6".into()).await.unwrap();
        assert_eq!(result.total, 37);
        assert_eq!(result.limit, 10);
        assert_eq!(result.offset, 20);
        assert_eq!(result.items.len(), 10);
        let names: Vec<&str> = result.items.iter().map(|album| album.name.as_str()).collect();
        let expected: Vec<String> = (21..=30).map(|n| format!("Album {}", n)).collect();
        assert_eq!(names, expected);
    }

    #[tokio::test]
    async fn albums_opt() {
        let _mock = mock_request_success_from_file(
            "GET",
            "/artists/optsartist/albums",
            vec![
                Matcher::UrlEncoded("album_type".into(), "album,single".into()),
                Matcher::UrlEncoded("market".into(), "US".into()),
                Matcher::UrlEncoded("limit".into(), "10".into()),
                Matcher::UrlEncoded("offset".into(), "20".into()),
            ],
            "tests/files/artist_albums.json",
        );

        let options = Options::default().limit(10).offset(20);
        let result = client()
            .artists()
            .albums_opt(&"optsartist".into(), Some(&options), Some(AlbumType::ALBUM | AlbumType::SINGLE))
            .await
            .unwrap();
        assert_eq!(result.items.len(), 10);
        assert_eq!(result.items[0].kind(), Some(AlbumType::ALBUM));
    }

    #[tokio::test]
    async fn albums_opt_configured_fallback() {
        let _mock = mock_request_success_from_file(
            "GET",
            "/artists/fallbackartist/albums",
            vec![Matcher::UrlEncoded("market".into(), "SE".into())],
            "tests/files/artist_albums.json",
        );

        let client = client().with_config(config().fallback_market(Some("SE")));
        let result = client
            .artists()
            .albums_opt(&"fallbackartist".into(), Some(&Options::default()), None)
            .await
            .unwrap();
        assert_eq!(result.total, 37);
    }

    #[tokio::test]
    async fn albums_opt_without_fallback() {
        let _mock = mock_request_success_from_file(
            "GET",
            "/artists/nofallbackartist/albums",
            vec![Matcher::Exact("limit=10".into())],
            "tests/files/artist_albums.json",
        );

        let client = client().with_config(config().fallback_market(None));
        let options = Options::default().limit(10);
        let result = client
            .artists()
            .albums_opt(&"nofallbackartist".into(), Some(&options), None)
            .await;
        assert!(result.is_ok());
    }
}

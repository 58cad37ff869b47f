//! Rspotcat is a wrapper for the catalog endpoints of the Spotify Web API.
//!
//! ## Configuration
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rspotcat = "0.1.0"
//! ```
//!
//! By default, Rspotcat uses asynchronous programming with `async` and `await`.
//!
//! ## Authorization
//!
//! Every request needs an access token. Obtaining one through any of
//! Spotify's authorization flows is up to your application; Rspotcat only
//! sends it along as a bearer token. A `reqwest::Client` that already takes
//! care of authorization can be used instead with [`Spotify::with_client`].
//!
//! ## Paging and options
//!
//! Listing endpoints return a [`Page`](model::page::Page) holding one page of
//! results plus the total available. The `*_opt` variants accept
//! [`Options`](options::Options) to choose the market, limit and offset, and
//! [`Spotify::next_page`] follows the link to the next page.
//!
//! Listing the albums of an artist without a market makes Spotify return one
//! copy of each album per market, so a fallback market (`US` unless
//! configured otherwise with [`ClientConfig::fallback_market`]) is sent when
//! options are given without a country.
//!
//! ### Examples
//!
//! ```toml
//! [dependencies]
//! rspotcat = { version = "0.1.0" }
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ```rust,no_run
//! use rspotcat::auth::SpotifyCredentials;
//! use rspotcat::client::Spotify;
//! use rspotcat::options::{AlbumType, Options};
//! use dotenv::dotenv;
//! use std::env;
//!
//! #[tokio::main]
//! async fn main() {
//!     {
//!         dotenv().ok();
//!     }
//!
//!     // Set a token obtained from one of Spotify's authorization flows.
//!     let token = env::var("RSPOTCAT_ACCESS_TOKEN").unwrap();
//!     let credentials = SpotifyCredentials::new(&token);
//!
//!     // Use the credentials to start the client
//!     let client = Spotify::new(credentials).unwrap();
//!     let artist = client.artists().get(&"0OdUWJ0sBjDrqHygGUXeCF".into()).await;
//!     println!("{:?}", artist.unwrap());
//!
//!     let options = Options::default().country("SE").limit(5);
//!     let albums = client
//!         .artists()
//!         .albums_opt(&"0OdUWJ0sBjDrqHygGUXeCF".into(), Some(&options), Some(AlbumType::ALBUM | AlbumType::SINGLE))
//!         .await
//!         .unwrap();
//!     for album in albums.items {
//!         println!("{}", album.name);
//!     }
//! }
//! ```
//!
//! ## Default client
//!
//! The functions at the root of the crate use a process wide client, for
//! programs that only ever need one. Install it once at startup with
//! [`Spotify::install_default`]; it is only read afterwards, so the functions
//! can be called from any task.

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod model;
pub mod options;

pub use client::{default_client, ApiError, ClientError, ClientResult, Spotify};
pub use config::ClientConfig;

use crate::model::album::FullAlbum;
use crate::model::artist::FullArtist;
use crate::model::id::Id;
use crate::model::page::{SimpleAlbumPage, SimpleTrackPage};
use crate::model::track::FullTrack;
use crate::options::{AlbumType, Options};

/// Wrapper around `default_client().artists().get(id)`.
pub async fn artist(id: &Id) -> ClientResult<FullArtist> {
    default_client().artists().get(id).await
}

/// Wrapper around `default_client().artists().several(ids)`.
pub async fn artists(ids: &[Id]) -> ClientResult<Vec<Option<FullArtist>>> {
    default_client().artists().several(ids).await
}

/// Wrapper around `default_client().artists().top_tracks(id, country)`.
pub async fn artist_top_tracks(id: &Id, country: &str) -> ClientResult<Vec<FullTrack>> {
    default_client().artists().top_tracks(id, country).await
}

/// Wrapper around `default_client().artists().related(id)`.
pub async fn related_artists(id: &Id) -> ClientResult<Vec<FullArtist>> {
    default_client().artists().related(id).await
}

/// Wrapper around `default_client().artists().albums(id)`.
pub async fn artist_albums(id: &Id) -> ClientResult<SimpleAlbumPage> {
    default_client().artists().albums(id).await
}

/// Wrapper around `default_client().artists().albums_opt(id, options, album_type)`.
pub async fn artist_albums_opt(
    id: &Id,
    options: Option<&Options>,
    album_type: Option<AlbumType>,
) -> ClientResult<SimpleAlbumPage> {
    default_client().artists().albums_opt(id, options, album_type).await
}

/// Wrapper around `default_client().albums().get(id)`.
pub async fn album(id: &Id) -> ClientResult<FullAlbum> {
    default_client().albums().get(id).await
}

/// Wrapper around `default_client().albums().several(ids)`.
pub async fn albums(ids: &[Id]) -> ClientResult<Vec<Option<FullAlbum>>> {
    default_client().albums().several(ids).await
}

/// Wrapper around `default_client().albums().tracks(id)`.
pub async fn album_tracks(id: &Id) -> ClientResult<SimpleTrackPage> {
    default_client().albums().tracks(id).await
}

/// Wrapper around `default_client().albums().tracks_opt(id, options)`.
pub async fn album_tracks_opt(id: &Id, options: Option<&Options>) -> ClientResult<SimpleTrackPage> {
    default_client().albums().tracks_opt(id, options).await
}

/// Wrapper around `default_client().tracks().get(id)`.
pub async fn track(id: &Id) -> ClientResult<FullTrack> {
    default_client().tracks().get(id).await
}

/// Wrapper around `default_client().tracks().several(ids)`.
pub async fn tracks(ids: &[Id]) -> ClientResult<Vec<Option<FullTrack>>> {
    default_client().tracks().several(ids).await
}

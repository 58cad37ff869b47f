// Use 3rd party
use log::debug;
use reqwest::header::InvalidHeaderValue;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

// Use built-in library
use std::borrow::Cow;
use std::sync::OnceLock;

// Use internal modules
use crate::auth::SpotifyCredentials;
use crate::config::ClientConfig;
use crate::model::page::{decode_page, Page};

// Possible errors returned from `rspotcat` client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("spotify error: {0}")]
    Api(#[from] ApiError),
    #[error("json parse error: {0}")]
    ParseJSON(#[from] serde_json::Error),
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid access token: {0}")]
    Token(#[from] InvalidHeaderValue),
    #[error("query encoding error: {0}")]
    EncodeQuery(#[from] serde_urlencoded::ser::Error),
}

/// Error reported by Spotify in the body of a non-successful response.
#[derive(Clone, Debug, Error, Deserialize, PartialEq, Eq)]
#[error("{status}: {message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

impl ApiError {
    /// Decodes the `{"error": {"status": 404, "message": "..."}}` envelope
    /// used by the Web API.
    pub fn from_envelope(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<ErrorEnvelope>(body).map(|envelope| envelope.error)
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

static DEFAULT_CLIENT: OnceLock<Spotify> = OnceLock::new();

/// Client used by the crate level functions.
///
/// Returns the client set with [`Spotify::install_default`], or an
/// unauthenticated one if none was installed before the first call.
pub fn default_client() -> &'static Spotify {
    DEFAULT_CLIENT.get_or_init(Spotify::default)
}

// Spotify Web API
//
// Every call is a single GET; nothing is cached, retried or shared
// between calls, so a client can be used from many tasks at once.
#[derive(Debug)]
pub struct Spotify {
    client: Client,
    config: ClientConfig,
}

impl Default for Spotify {
    fn default() -> Self {
        Self::with_client(Client::new(), ClientConfig::default())
    }
}

impl Spotify {
    /// Client sending `credentials` as a bearer token with every request.
    pub fn new(credentials: SpotifyCredentials) -> ClientResult<Self> {
        let client = Client::builder()
            .default_headers(credentials.headers()?)
            .build()?;
        Ok(Self::with_client(client, ClientConfig::default()))
    }

    /// Client using an already configured `reqwest::Client`, which is
    /// expected to take care of authorization itself.
    #[must_use]
    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    #[must_use]
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Makes this client the one used by the crate level functions.
    ///
    /// Meant to be called once at startup; gives the client back if a
    /// default was already in place.
    pub fn install_default(self) -> Result<&'static Spotify, Spotify> {
        DEFAULT_CLIENT.set(self)?;
        Ok(default_client())
    }

    /// GETs `url`, relative to the base URL unless it is absolute, and
    /// returns the body of a successful response.
    pub async fn get(&self, url: &str, query: Option<&str>) -> ClientResult<String> {
        let mut url: Cow<str> = url.into();
        if !url.starts_with("http") {
            url = [self.config.base_url.as_str(), &*url].concat().into();
        }
        if let Some(query) = query.filter(|query| !query.is_empty()) {
            url = format!("{}?{}", url, query).into();
        }

        debug!("GET {}", url);
        let response = self.client.get(&*url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("GET {} returned {}", url, status);

        if status.is_success() {
            Ok(body)
        } else {
            Err(self.decode_error(&body))
        }
    }

    /// GETs a page envelope whose items are stored under `items_field`.
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        url: &str,
        query: Option<&str>,
        items_field: &str,
    ) -> ClientResult<Page<T>> {
        let result = self.get(url, query).await?;
        decode_page(&result, items_field).map_err(Into::into)
    }

    /// Fetches the page following `page`, `None` if it was the last one.
    pub async fn next_page<T: DeserializeOwned>(
        &self,
        page: &Page<T>,
        items_field: &str,
    ) -> ClientResult<Option<Page<T>>> {
        match &page.next {
            Some(next) => self.get_page(next.as_str(), None, items_field).await.map(Some),
            None => Ok(None),
        }
    }

    fn decode_error(&self, body: &str) -> ClientError {
        match (self.config.error_decoder)(body) {
            Ok(error) => error.into(),
            Err(error) => error.into(),
        }
    }

    pub(crate) fn convert_result<'a, T: Deserialize<'a>>(input: &'a str) -> ClientResult<T> {
        serde_json::from_str::<T>(input).map_err(Into::into)
    }
}

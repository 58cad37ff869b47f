//! Settings shared by every request made by a [`Spotify`](crate::client::Spotify) client.

use crate::client::ApiError;
use crate::options::COUNTRY_USA;

use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://api.spotify.com/v1";

/// Turns the body of a non-successful response into an [`ApiError`].
pub type ErrorDecoder = fn(&str) -> serde_json::Result<ApiError>;

#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Market sent by the endpoints that would otherwise return one copy of
    /// each result per market, when the caller didn't choose one. `None`
    /// sends no market at all.
    pub fallback_market: Option<String>,
    pub error_decoder: ErrorDecoder,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            fallback_market: Some(COUNTRY_USA.to_owned()),
            error_decoder: ApiError::from_envelope,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("fallback_market", &self.fallback_market)
            .finish()
    }
}

impl ClientConfig {
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    pub fn fallback_market(mut self, market: Option<&str>) -> Self {
        self.fallback_market = market.map(ToOwned::to_owned);
        self
    }

    pub fn error_decoder(mut self, decoder: ErrorDecoder) -> Self {
        self.error_decoder = decoder;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.spotify.com/v1");
        assert_eq!(config.fallback_market.as_deref(), Some("US"));
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let config = ClientConfig::default().base_url("http://127.0.0.1:1234/");
        assert_eq!(config.base_url, "http://127.0.0.1:1234");
    }

    #[test]
    fn fallback_market_can_be_disabled() {
        let config = ClientConfig::default().fallback_market(None);
        assert_eq!(config.fallback_market, None);

        let config = ClientConfig::default().fallback_market(Some("SE"));
        assert_eq!(config.fallback_market.as_deref(), Some("SE"));
    }
}

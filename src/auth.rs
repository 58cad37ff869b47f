// Use 3rd party
use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, AUTHORIZATION};

/// Access token obtained from one of Spotify's authorization flows.
///
/// Obtaining and refreshing the token is left to the application; the
/// client only attaches it to every request.
#[derive(Clone)]
pub struct SpotifyCredentials {
    pub token: String,
}

impl SpotifyCredentials {
    #[must_use]
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_owned(),
        }
    }

    /// Headers to send along with every request.
    pub fn headers(&self) -> Result<HeaderMap, InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }
}

impl std::fmt::Debug for SpotifyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyCredentials")
            .field("token", &"<redacted>")
            .finish()
    }
}

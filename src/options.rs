//! Optional query parameters accepted by the listing endpoints.

// Use 3rd party
use serde_urlencoded::ser::Error as EncodeError;
use thiserror::Error;

// Use built-in library
use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

// ISO 3166-1 alpha-2 codes for some of the markets Spotify is available in.
pub const COUNTRY_USA: &str = "US";
pub const COUNTRY_UNITED_KINGDOM: &str = "GB";
pub const COUNTRY_CANADA: &str = "CA";
pub const COUNTRY_AUSTRALIA: &str = "AU";
pub const COUNTRY_GERMANY: &str = "DE";
pub const COUNTRY_FRANCE: &str = "FR";
pub const COUNTRY_SPAIN: &str = "ES";
pub const COUNTRY_SWEDEN: &str = "SE";
pub const COUNTRY_BRAZIL: &str = "BR";
pub const COUNTRY_JAPAN: &str = "JP";

/// Paging and market parameters. Fields left as `None` are not sent;
/// `Some(0)` is sent as `0`.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Options {
    /// ISO 3166-1 alpha-2 country code, sent as `market`.
    pub country: Option<String>,
    /// Maximum number of results to return.
    pub limit: Option<u32>,
    /// Index of the first result to return.
    pub offset: Option<u32>,
}

impl Options {
    pub fn country(mut self, country: &str) -> Self {
        self.country = Some(country.to_owned());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Query string for these options.
    ///
    /// When no country is set, `market_fallback` is sent as the market
    /// instead.
    pub fn to_query(
        &self,
        album_type: Option<AlbumType>,
        market_fallback: Option<&str>,
    ) -> Result<String, EncodeError> {
        let mut params: Vec<(&str, String)> = Vec::new();

        if let Some(album_type) = album_type.filter(|t| !t.is_empty()) {
            params.push(("album_type", album_type.encode()));
        }
        if let Some(market) = self.country.as_deref().or(market_fallback) {
            params.push(("market", market.to_owned()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("offset", offset.to_string()));
        }

        encode_query(params)
    }
}

/// Query string for an endpoint called with optional `options`, `None` when
/// the endpoint should be called without one.
///
/// `album_type` is only sent along with options.
pub fn build_query(
    options: Option<&Options>,
    album_type: Option<AlbumType>,
    market_fallback: Option<&str>,
) -> Result<Option<String>, EncodeError> {
    options
        .map(|options| options.to_query(album_type, market_fallback))
        .transpose()
}

/// Percent-encodes `params` sorted by name.
pub(crate) fn encode_query(mut params: Vec<(&str, String)>) -> Result<String, EncodeError> {
    params.sort_by(|a, b| a.0.cmp(b.0));
    serde_urlencoded::to_string(&params)
}

/// Kind of album, as used to filter the albums of an artist.
///
/// Categories combine with `|`:
///
/// ```
/// use rspotcat::options::AlbumType;
///
/// let types = AlbumType::ALBUM | AlbumType::SINGLE;
/// assert_eq!(types.encode(), "album,single");
/// assert_eq!("album,single".parse::<AlbumType>().unwrap(), types);
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct AlbumType(u8);

impl AlbumType {
    pub const ALBUM: Self = Self(1);
    pub const SINGLE: Self = Self(1 << 1);
    pub const APPEARS_ON: Self = Self(1 << 2);
    pub const COMPILATION: Self = Self(1 << 3);

    const NAMES: [(Self, &'static str); 4] = [
        (Self::ALBUM, "album"),
        (Self::SINGLE, "single"),
        (Self::APPEARS_ON, "appears_on"),
        (Self::COMPILATION, "compilation"),
    ];

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(Self::ALBUM.0 | Self::SINGLE.0 | Self::APPEARS_ON.0 | Self::COMPILATION.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Comma separated names of the categories in the set.
    pub fn encode(self) -> String {
        Self::NAMES
            .iter()
            .filter(|(t, _)| self.contains(*t))
            .map(|(_, name)| *name)
            .collect::<Vec<&str>>()
            .join(",")
    }
}

impl BitOr for AlbumType {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for AlbumType {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for AlbumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown album type: {0}")]
pub struct ParseAlbumTypeError(String);

impl FromStr for AlbumType {
    type Err = ParseAlbumTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut album_type = Self::empty();
        for token in s.split(',').map(str::trim).filter(|token| !token.is_empty()) {
            let (t, _) = Self::NAMES
                .iter()
                .find(|(_, name)| *name == token)
                .ok_or_else(|| ParseAlbumTypeError(token.to_owned()))?;
            album_type |= *t;
        }
        Ok(album_type)
    }
}

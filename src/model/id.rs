//! Typed strings for the different ways Spotify addresses a resource.
//!
//! A catalog ID (`0TnOYISbd1XYRBk9myaseg`), a URI
//! (`spotify:artist:0TnOYISbd1XYRBk9myaseg`) and an endpoint link
//! (`https://api.spotify.com/v1/artists/0TnOYISbd1XYRBk9myaseg`) all look
//! like plain strings but are never interchangeable.

// Use 3rd party
use serde::{Deserialize, Serialize};

// Use built-in library
use std::borrow::Cow;
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Percent-encoded form, safe to embed as one segment of a URL path.
            pub fn path_segment(&self) -> Cow<'_, str> {
                urlencoding::encode(&self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Spotify catalog ID of an artist, album or track.
    Id
);

string_id!(
    /// Spotify URI, e.g. `spotify:track:6rqhFgbbKwnb9MLmUQDhG6`.
    Uri
);

string_id!(
    /// Link to the Web API endpoint holding the full details of a resource.
    Href
);

/// Joins IDs into the comma separated list used by the `ids` parameter.
pub(crate) fn join_ids(ids: &[Id]) -> String {
    ids.iter().map(Id::as_str).collect::<Vec<&str>>().join(",")
}

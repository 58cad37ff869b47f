pub mod albums;
pub mod artists;
pub mod tracks;

use crate::client::Spotify;
use crate::endpoints::albums::*;
use crate::endpoints::artists::*;
use crate::endpoints::tracks::*;

// Endpoint function namespaces

impl Spotify {
    pub const fn albums(&self) -> Albums<'_> {
        Albums(self)
    }

    pub const fn artists(&self) -> Artists<'_> {
        Artists(self)
    }

    pub const fn tracks(&self) -> Tracks<'_> {
        Tracks(self)
    }
}

use serde::{Deserialize, Serialize};

use super::{Coords, Location};

/// A saved location as persisted under the bookmarks key.
///
/// Title and coordinates are denormalized copies taken when the location was
/// saved. Older blobs may lack them, so both default when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub coords: Coords,
}

impl BookmarkRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>, coords: Coords) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            coords,
        }
    }
}

impl From<&Location> for BookmarkRecord {
    fn from(location: &Location) -> Self {
        Self::new(location.id.clone(), location.title.clone(), location.coords)
    }
}

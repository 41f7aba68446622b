use serde::Serialize;
use std::fmt;

use super::{CategoryId, Coords};

/// A bookmark joined with its catalog entry, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedCard {
    pub id: String,
    pub category: CategoryId,
    pub title: String,
    pub coords: Coords,
    pub description: String,
    pub image: String,
}

impl fmt::Display for SavedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.title, self.id)?;
        write!(f, "  {}", self.coords)
    }
}

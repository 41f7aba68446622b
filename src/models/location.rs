use serde::Serialize;
use std::fmt;

use super::{CategoryId, Coords};

/// A park in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub id: String,
    pub category: CategoryId,
    pub title: String,
    pub coords: Coords,
    pub description: String,
    /// Asset file name of the cover image.
    pub image: String,
}

impl Location {
    pub fn new(
        id: impl Into<String>,
        category: CategoryId,
        title: impl Into<String>,
        coords: Coords,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            title: title.into(),
            coords,
            description: String::new(),
            image: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.title, self.id)?;
        writeln!(f, "  Category: {}", self.category)?;
        writeln!(f, "  {}", self.coords)?;
        if !self.image.is_empty() {
            writeln!(f, "  Image: {}", self.image)?;
        }
        if !self.description.is_empty() {
            writeln!(f)?;
            write!(f, "  {}", self.description)?;
        }
        Ok(())
    }
}

//! Read-only catalog of parks, categories, stories and wildlife facts.

mod data;

use rand::Rng;

use crate::models::{BlogPost, Category, CategoryId, Coords, Location};

/// Source of the immutable reference data.
pub trait CatalogProvider: Send + Sync {
    fn locations(&self) -> &[Location];

    fn categories(&self) -> &[Category];

    fn blog_posts(&self) -> &[BlogPost];

    fn location(&self, id: &str) -> Option<&Location> {
        self.locations().iter().find(|l| l.id == id)
    }

    fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories().iter().find(|c| c.id == id)
    }

    /// Locations of one category, in catalog order.
    fn locations_in(&self, category: CategoryId) -> Vec<&Location> {
        self.locations()
            .iter()
            .filter(|l| l.category == category)
            .collect()
    }

    fn blog_post(&self, id: &str) -> Option<&BlogPost> {
        self.blog_posts().iter().find(|p| p.id == id)
    }
}

/// Catalog backed by the data compiled into the binary.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    locations: Vec<Location>,
    categories: Vec<Category>,
    blog_posts: Vec<BlogPost>,
    facts: Vec<String>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        let categories = data::CATEGORIES
            .iter()
            .map(|c| Category {
                id: c.id,
                title: c.title.to_string(),
                subtitle: c.subtitle.to_string(),
            })
            .collect();

        let locations = data::LOCATIONS
            .iter()
            .map(|l| {
                Location::new(l.id, l.category, l.title, Coords::new(l.lat, l.lng))
                    .with_description(l.description)
                    .with_image(l.image)
            })
            .collect();

        let blog_posts = data::BLOG_POSTS
            .iter()
            .map(|p| BlogPost::new(p.id, p.title, p.body))
            .collect();

        let facts = data::WILD_FACTS.iter().map(|f| f.to_string()).collect();

        Self {
            locations,
            categories,
            blog_posts,
            facts,
        }
    }

    /// Builds a catalog from explicit locations and categories, with no
    /// stories or facts.
    pub fn from_parts(locations: Vec<Location>, categories: Vec<Category>) -> Self {
        Self {
            locations,
            categories,
            blog_posts: Vec::new(),
            facts: Vec::new(),
        }
    }

    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    pub fn random_fact<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.facts.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.facts.len());
        Some(self.facts[index].as_str())
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogProvider for StaticCatalog {
    fn locations(&self) -> &[Location] {
        &self.locations
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn blog_posts(&self) -> &[BlogPost] {
        &self.blog_posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_static_catalog_contents() {
        let catalog = StaticCatalog::new();
        assert_eq!(catalog.categories().len(), 3);
        assert_eq!(catalog.locations().len(), 15);
        assert_eq!(catalog.blog_posts().len(), 20);
        assert_eq!(catalog.facts().len(), 20);
    }

    #[test]
    fn test_location_ids_are_unique() {
        let catalog = StaticCatalog::new();
        let ids: HashSet<&str> = catalog.locations().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.locations().len());
    }

    #[test]
    fn test_every_location_has_a_known_category() {
        let catalog = StaticCatalog::new();
        for location in catalog.locations() {
            assert!(catalog.category(location.category).is_some());
        }
    }

    #[test]
    fn test_location_lookup() {
        let catalog = StaticCatalog::new();

        let banff = catalog.location("banff").unwrap();
        assert_eq!(banff.title, "Banff National Park");
        assert_eq!(banff.coords, Coords::new(51.4968, -115.9281));
        assert_eq!(banff.image, "banff.png");

        assert!(catalog.location("yellowstone").is_none());
        assert!(catalog.location("").is_none());
    }

    #[test]
    fn test_locations_in_category() {
        let catalog = StaticCatalog::new();

        let remote = catalog.locations_in(CategoryId::Remote);
        assert_eq!(remote.len(), 5);
        assert_eq!(remote[0].id, "nahanni");
        assert!(remote.iter().all(|l| l.category == CategoryId::Remote));
    }

    #[test]
    fn test_blog_post_lookup() {
        let catalog = StaticCatalog::new();
        let post = catalog.blog_post("20").unwrap();
        assert_eq!(post.title, "Why I Guide");
        assert!(catalog.blog_post("21").is_none());
    }

    #[test]
    fn test_random_fact() {
        let catalog = StaticCatalog::new();
        let mut rng = rand::rng();
        let fact = catalog.random_fact(&mut rng).unwrap();
        assert!(catalog.facts().iter().any(|f| f == fact));

        let empty = StaticCatalog::from_parts(Vec::new(), Vec::new());
        assert!(empty.random_fact(&mut rng).is_none());
    }
}

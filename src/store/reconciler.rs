use crate::catalog::CatalogProvider;
use crate::models::{BookmarkRecord, SavedCard};

use super::BookmarkStore;

/// Joins bookmarks with the catalog, in bookmark order.
///
/// The catalog entry is authoritative for every displayed field. Bookmarks
/// whose location is no longer in the catalog are left out of the result;
/// they stay in the store.
pub fn resolve<C>(bookmarks: &[BookmarkRecord], catalog: &C) -> Vec<SavedCard>
where
    C: CatalogProvider + ?Sized,
{
    bookmarks
        .iter()
        .filter_map(|bookmark| match catalog.location(&bookmark.id) {
            Some(location) => Some(SavedCard {
                id: bookmark.id.clone(),
                category: location.category,
                title: location.title.clone(),
                coords: location.coords,
                description: location.description.clone(),
                image: location.image.clone(),
            }),
            None => {
                tracing::debug!("Skipping saved location {} missing from catalog", bookmark.id);
                None
            }
        })
        .collect()
}

/// Reads the store and resolves it against the catalog.
pub async fn saved_cards<C>(store: &BookmarkStore, catalog: &C) -> Vec<SavedCard>
where
    C: CatalogProvider + ?Sized,
{
    let bookmarks = store.list().await;
    resolve(&bookmarks, catalog)
}

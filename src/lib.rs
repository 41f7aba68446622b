//! Fauna Parks
//!
//! Catalog of Canadian wildlife parks and stories, with a locally persisted
//! list of saved locations and a small settings record.

pub mod catalog;
pub mod config;
pub mod db;
pub mod models;
pub mod share;
pub mod store;

pub use catalog::{CatalogProvider, StaticCatalog};
pub use config::{Config, ConfigError, ConfigSource, ConfigValue};
pub use db::{init_db, KeyValueStore, KvError, MemoryKvStore, SqliteKvStore};
pub use models::{
    BlogPost, BookmarkRecord, Category, CategoryId, Coords, Location, SavedCard, Settings,
};
pub use share::{MapDisplay, ShareTarget};
pub use store::{
    resolve, saved_cards, BookmarkEvent, BookmarkStore, DetailError, DetailView, SettingsStore,
    ToggleState,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

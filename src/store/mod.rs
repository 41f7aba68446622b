//! Persisted user state: settings, saved locations, and the views over them.

mod bookmarks;
mod reconciler;
mod settings;
mod toggle;

pub use bookmarks::{BookmarkEvent, BookmarkStore, BOOKMARKS_KEY};
pub use reconciler::{resolve, saved_cards};
pub use settings::{SettingsStore, SETTINGS_KEY};
pub use toggle::{DetailError, DetailView, ToggleState};

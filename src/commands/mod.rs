mod blog;
mod categories;
mod config_cmd;
mod devices;
mod fact;
mod locations;
mod saved;
mod settings_cmd;

pub use blog::BlogCommand;
pub use categories::CategoriesCommand;
pub use config_cmd::ConfigCommand;
pub use devices::{StdoutMap, StdoutShare};
pub use fact::{FactCommand, ShareAppCommand};
pub use locations::LocationsCommand;
pub use saved::SavedCommand;
pub use settings_cmd::SettingsCommand;

use clap::ValueEnum;
use std::sync::Arc;

use fauna_parks::{init_db, BookmarkStore, Config, KeyValueStore, SettingsStore, SqliteKvStore};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Both stores over the configured database.
pub struct Stores {
    pub bookmarks: BookmarkStore,
    pub settings: SettingsStore,
}

impl Stores {
    pub async fn open(config: &Config) -> Result<Self, sqlx::Error> {
        let pool = init_db(&config.database_path.value).await?;
        let kv: Arc<dyn KeyValueStore> = Arc::new(SqliteKvStore::new(pool));
        Ok(Self::with_backend(kv))
    }

    pub fn with_backend(kv: Arc<dyn KeyValueStore>) -> Self {
        Self {
            bookmarks: BookmarkStore::new(kv.clone()),
            settings: SettingsStore::new(kv),
        }
    }
}

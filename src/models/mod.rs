mod blog_post;
mod bookmark;
mod category;
mod coords;
mod location;
mod saved_card;
mod settings;

pub use blog_post::BlogPost;
pub use bookmark::BookmarkRecord;
pub use category::{Category, CategoryId};
pub use coords::Coords;
pub use location::Location;
pub use saved_card::SavedCard;
pub use settings::Settings;

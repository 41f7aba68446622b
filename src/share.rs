//! Share texts and the device capabilities that receive them.

use thiserror::Error;

use crate::models::{BlogPost, Coords, Location};

pub const APP_NAME: &str = "Rana Fauna Parks";

#[derive(Error, Debug)]
pub enum ShareError {
    #[error("Share failed: {0}")]
    Failed(String),

    #[error("Map unavailable: {0}")]
    MapUnavailable(String),
}

/// Accepts a text message, e.g. a platform share sheet.
pub trait ShareTarget {
    fn share(&self, message: &str) -> Result<(), ShareError>;
}

/// Shows a point on a map.
pub trait MapDisplay {
    fn show(&self, title: &str, coords: Coords) -> Result<(), ShareError>;
}

/// Shares `message`, logging instead of failing. Returns whether it was
/// delivered.
pub fn share_quietly(target: &dyn ShareTarget, message: &str) -> bool {
    match target.share(message) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("Share dismissed: {}", e);
            false
        }
    }
}

pub fn location_message(location: &Location) -> String {
    format!(
        "{}\n{}\n\n{}",
        location.title, location.coords, location.description
    )
}

pub fn story_message(post: &BlogPost) -> String {
    format!("{}\n\n{}", post.title, post.body)
}

pub fn app_message() -> String {
    format!(
        "{}\n\nDiscover wildlife parks across Canada, explore stories, and save your favorite places.",
        APP_NAME
    )
}

pub fn fact_message(fact: &str) -> String {
    format!("{} — Did you know? {}", APP_NAME, fact)
}

/// OpenStreetMap link centred on `coords`.
pub fn map_url(coords: Coords) -> String {
    format!(
        "https://www.openstreetmap.org/?mlat={lat}&mlon={lng}#map=10/{lat}/{lng}",
        lat = coords.lat,
        lng = coords.lng
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryId;
    use std::cell::RefCell;

    struct Recorder {
        messages: RefCell<Vec<String>>,
        fail: bool,
    }

    impl ShareTarget for Recorder {
        fn share(&self, message: &str) -> Result<(), ShareError> {
            if self.fail {
                return Err(ShareError::Failed("dismissed".into()));
            }
            self.messages.borrow_mut().push(message.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_location_message() {
        let location = Location::new(
            "fundy",
            CategoryId::Family,
            "Fundy National Park",
            Coords::new(45.5951, -64.9564),
        )
        .with_description("Highest tides in the world.");

        assert_eq!(
            location_message(&location),
            "Fundy National Park\nCoordinates: 45.5951, -64.9564\n\nHighest tides in the world."
        );
    }

    #[test]
    fn test_story_message() {
        let post = BlogPost::new("20", "Why I Guide", "Body text");
        assert_eq!(story_message(&post), "Why I Guide\n\nBody text");
    }

    #[test]
    fn test_app_and_fact_messages() {
        assert!(app_message().starts_with("Rana Fauna Parks\n\nDiscover wildlife parks"));
        assert_eq!(
            fact_message("Elk shed and regrow their antlers every year."),
            "Rana Fauna Parks — Did you know? Elk shed and regrow their antlers every year."
        );
    }

    #[test]
    fn test_map_url() {
        assert_eq!(
            map_url(Coords::new(49.5, -57.25)),
            "https://www.openstreetmap.org/?mlat=49.5&mlon=-57.25#map=10/49.5/-57.25"
        );
    }

    #[test]
    fn test_share_quietly() {
        let ok = Recorder {
            messages: RefCell::new(Vec::new()),
            fail: false,
        };
        assert!(share_quietly(&ok, "hello"));
        assert_eq!(ok.messages.borrow().as_slice(), ["hello".to_string()]);

        let failing = Recorder {
            messages: RefCell::new(Vec::new()),
            fail: true,
        };
        assert!(!share_quietly(&failing, "hello"));
        assert!(failing.messages.borrow().is_empty());
    }
}

use fauna_parks::share::{map_url, MapDisplay, ShareError, ShareTarget};
use fauna_parks::Coords;

/// Prints share messages to stdout for the user to copy.
pub struct StdoutShare;

impl ShareTarget for StdoutShare {
    fn share(&self, message: &str) -> Result<(), ShareError> {
        println!("{}", message);
        Ok(())
    }
}

/// Prints a map link instead of rendering a map.
pub struct StdoutMap;

impl MapDisplay for StdoutMap {
    fn show(&self, title: &str, coords: Coords) -> Result<(), ShareError> {
        println!("Map for {}: {}", title, map_url(coords));
        Ok(())
    }
}

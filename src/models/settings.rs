use serde::{Deserialize, Serialize};
use std::fmt;

/// User preferences persisted under the settings key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub notification: bool,
    pub vibration: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notification: true,
            vibration: false,
        }
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let on_off = |flag: bool| if flag { "on" } else { "off" };
        writeln!(f, "notification: {}", on_off(self.notification))?;
        write!(f, "vibration: {}", on_off(self.vibration))
    }
}

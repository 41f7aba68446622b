use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of park categories. Persisted and printed as `1`, `2`, `3`;
/// also read from `iconic`, `remote`, `family`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub enum CategoryId {
    Iconic = 1,
    Remote = 2,
    Family = 3,
}

impl CategoryId {
    pub const ALL: [CategoryId; 3] = [CategoryId::Iconic, CategoryId::Remote, CategoryId::Family];

    pub fn number(self) -> u8 {
        self as u8
    }
}

impl From<CategoryId> for u8 {
    fn from(id: CategoryId) -> Self {
        id.number()
    }
}

impl TryFrom<u8> for CategoryId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(CategoryId::Iconic),
            2 => Ok(CategoryId::Remote),
            3 => Ok(CategoryId::Family),
            other => Err(format!("Unknown category {}. Valid options: 1, 2, 3", other)),
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for CategoryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "iconic" => Ok(CategoryId::Iconic),
            "2" | "remote" => Ok(CategoryId::Remote),
            "3" | "family" => Ok(CategoryId::Family),
            _ => Err(format!(
                "Invalid category '{}'. Valid options: 1 (iconic), 2 (remote), 3 (family)",
                s
            )),
        }
    }
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u8),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => CategoryId::try_from(n).map_err(de::Error::custom),
            Repr::Name(name) => name.parse().map_err(de::Error::custom),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    pub subtitle: String,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}", self.id, self.subtitle)?;
        write!(f, "    {}", self.title.replace('\n', " "))
    }
}

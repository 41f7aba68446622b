use serde::Serialize;
use std::fmt;

/// A short story from the park guide's blog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl BlogPost {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

impl fmt::Display for BlogPost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        writeln!(f)?;
        write!(f, "{}", self.body)
    }
}

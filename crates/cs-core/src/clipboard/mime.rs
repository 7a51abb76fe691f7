use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MimeType(pub String);

impl MimeType {
    pub fn text_plain() -> Self {
        Self("text/plain".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Any `image/*` representation.
    pub fn is_image(&self) -> bool {
        self.0.starts_with("image/")
    }

    /// The two text targets the exporter accepts: `text/plain` and the
    /// X11 atom name `UTF8_STRING`.
    pub fn is_plain_text_target(&self) -> bool {
        self.0 == "text/plain" || self.0 == "UTF8_STRING"
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MimeType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MimeType(s.to_string()))
    }
}

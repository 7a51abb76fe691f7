use serde::{Deserialize, Serialize};

use crate::image::ImageData;

/// One decoded clipboard payload: image or text, never both.
///
/// Ownership passes from the fetch step to the save step and the payload is
/// dropped as soon as the save completes or is canceled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClipboardPayload {
    /// UTF-8 text
    Text { text: String },

    /// decoded image pixels
    Image { image: ImageData },
}

impl ClipboardPayload {
    /// A zero-length payload is treated the same as no content at all.
    pub fn is_empty(&self) -> bool {
        match self {
            ClipboardPayload::Text { text } => text.is_empty(),
            ClipboardPayload::Image { image } => image.bytes.is_empty(),
        }
    }
}

//! Clipboard domain models.
mod mime;
pub mod negotiate;
mod payload;

pub use mime::MimeType;
pub use negotiate::{select_target, SelectedTarget, TargetKind};
pub use payload::ClipboardPayload;

#[cfg(test)]
mod tests;

//! # cs-platform
//!
//! Platform adapters for clipsave.
//!
//! Implements the cs-core ports against the real system: `clipboard-rs` for
//! clipboard access, `rfd` for the native save dialog, and `image` for
//! encoding.

pub mod clipboard;
pub mod dialog;
pub mod encoder;

pub use clipboard::SystemClipboard;
pub use dialog::NativeSaveDialog;
pub use encoder::ImageEncoder;

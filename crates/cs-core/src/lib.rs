//! # cs-core
//!
//! Core domain models and business logic for clipsave.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod clipboard;
pub mod image;
pub mod ports;

// Re-export commonly used types at the crate root
pub use clipboard::{ClipboardPayload, MimeType, SelectedTarget, TargetKind};
pub use image::{ImageData, ImageFormat};

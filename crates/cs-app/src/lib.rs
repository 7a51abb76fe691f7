//! # cs-app
//!
//! Application orchestration layer for clipsave.
//!
//! This crate contains the export use case that sequences the clipboard,
//! dialog, and encoder ports into one linear flow.

pub mod usecases;

pub use usecases::export_clipboard::{ExportClipboard, ExportError, ExportOutcome};

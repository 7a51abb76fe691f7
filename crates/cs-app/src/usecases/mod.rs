//! Business logic use cases.

pub mod export_clipboard;

//! Port interfaces for the application layer
//!
//! Ports define the contract between the export flow and infrastructure
//! implementations. This follows Hexagonal Architecture principles, allowing
//! the core business logic to remain independent of the host clipboard, the
//! native dialog toolkit, and the image codec.

mod clipboard;
mod dialog;
mod encoder;

pub use clipboard::ClipboardPort;
pub use dialog::{FileFilter, SaveDialogPort, SaveDialogRequest};
pub use encoder::{EncodeError, ImageEncoderPort};

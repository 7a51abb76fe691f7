//! Clipboard port - abstracts system clipboard access

use anyhow::Result;
use async_trait::async_trait;

use crate::clipboard::{ClipboardPayload, MimeType, SelectedTarget};

/// Clipboard port - abstracts system clipboard access
///
/// This trait exposes the two clipboard operations the export flow needs,
/// so the flow can run against a real clipboard backend or a mock.
#[async_trait]
pub trait ClipboardPort: Send + Sync {
    /// List the content-type identifiers the clipboard currently offers,
    /// in host-provided order.
    async fn list_targets(&self) -> Result<Vec<MimeType>>;

    /// Fetch and decode the payload for a negotiated target.
    ///
    /// Returns `None` when the clipboard yields nothing decodable for the
    /// target.
    async fn fetch(&self, target: &SelectedTarget) -> Result<Option<ClipboardPayload>>;
}

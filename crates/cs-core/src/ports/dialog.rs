//! Save dialog port - abstracts the native file save dialog

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One extension filter offered by the save dialog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileFilter {
    /// Label shown to the user, e.g. "PNG Image (*.png)".
    pub name: String,
    /// Extensions without the leading dot, e.g. `["png"]`.
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(name: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

/// Everything the native save dialog is shown with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveDialogRequest {
    pub title: String,
    /// Default filename suggested to the user.
    pub file_name: String,
    pub filters: Vec<FileFilter>,
}

/// Save dialog port - abstracts the native file save dialog
#[async_trait]
pub trait SaveDialogPort: Send + Sync {
    /// Show the dialog and wait for the user.
    ///
    /// Returns the chosen destination path, or `None` when the user
    /// dismissed the dialog.
    async fn pick_save_path(&self, request: SaveDialogRequest) -> Result<Option<PathBuf>>;
}

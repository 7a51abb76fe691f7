//! Native save dialog adapter backed by `rfd`.

use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

use cs_core::ports::{SaveDialogPort, SaveDialogRequest};

/// [`SaveDialogPort`] implementation over `rfd`'s async file dialog.
#[derive(Debug, Default)]
pub struct NativeSaveDialog;

impl NativeSaveDialog {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SaveDialogPort for NativeSaveDialog {
    async fn pick_save_path(&self, request: SaveDialogRequest) -> Result<Option<PathBuf>> {
        let mut builder = rfd::AsyncFileDialog::new()
            .set_title(&request.title)
            .set_file_name(&request.file_name);

        for filter in &request.filters {
            let extensions: Vec<&str> = filter.extensions.iter().map(String::as_str).collect();
            builder = builder.add_filter(&filter.name, &extensions);
        }

        let picked = builder.save_file().await;
        debug!(accepted = picked.is_some(), "save dialog closed");

        Ok(picked.map(|file| file.path().to_path_buf()))
    }
}

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use cs_core::clipboard::{select_target, ClipboardPayload, MimeType, TargetKind};
use cs_core::image::{ImageData, ImageFormat};
use cs_core::ports::{
    ClipboardPort, EncodeError, FileFilter, ImageEncoderPort, SaveDialogPort, SaveDialogRequest,
};

/// Default filename suggested by the text save dialog.
pub const DEFAULT_TEXT_FILE_NAME: &str = "clipboard_text.txt";

/// Default filename suggested by the image save dialog.
pub const DEFAULT_IMAGE_FILE_NAME: &str = "clipboard_image.png";

/// Terminal result of one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Text written verbatim to `path`.
    TextSaved { path: PathBuf },

    /// Encoded image written to `path`.
    ImageSaved { path: PathBuf },

    /// The user dismissed the text save dialog.
    TextCanceled,

    /// The user dismissed the image save dialog.
    ImageCanceled,

    /// Negotiation found no image or text target. Carries everything the
    /// clipboard offered so the caller can report it.
    NoContent { targets: Vec<MimeType> },

    /// A target was selected but the fetched payload was empty or not
    /// decodable.
    Unsupported,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("clipboard access failed: {0}")]
    Clipboard(#[source] anyhow::Error),

    #[error("save dialog failed: {0}")]
    Dialog(#[source] anyhow::Error),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// Which flow the write belonged to, for user-facing reporting.
        kind: TargetKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Export the current clipboard content to a user-chosen file.
///
/// This use case is the whole program: a linear flow that never branches
/// back.
///
/// Responsibilities:
/// - Negotiate one target out of what the clipboard offers
/// - Fetch and classify the payload
/// - Ask the user for a destination through the native save dialog
/// - Write text verbatim, or encode and write the image
pub struct ExportClipboard<C, D, E>
where
    C: ClipboardPort,
    D: SaveDialogPort,
    E: ImageEncoderPort,
{
    clipboard: Arc<C>,
    dialog: Arc<D>,
    encoder: Arc<E>,
}

impl<C, D, E> ExportClipboard<C, D, E>
where
    C: ClipboardPort,
    D: SaveDialogPort,
    E: ImageEncoderPort,
{
    pub fn new(clipboard: Arc<C>, dialog: Arc<D>, encoder: Arc<E>) -> Self {
        Self {
            clipboard,
            dialog,
            encoder,
        }
    }

    /// Run the flow to one of its terminal outcomes.
    ///
    /// At most one save dialog is shown per call, and exactly one file is
    /// written on the saved outcomes.
    pub async fn execute(&self) -> Result<ExportOutcome, ExportError> {
        let targets = self
            .clipboard
            .list_targets()
            .await
            .map_err(ExportError::Clipboard)?;
        debug!(count = targets.len(), "clipboard targets enumerated");

        let Some(selected) = select_target(&targets) else {
            return Ok(ExportOutcome::NoContent { targets });
        };
        debug!(mime = %selected.mime, kind = ?selected.kind, "target selected");

        let payload = self
            .clipboard
            .fetch(&selected)
            .await
            .map_err(ExportError::Clipboard)?;

        match payload {
            None => Ok(ExportOutcome::Unsupported),
            Some(payload) if payload.is_empty() => Ok(ExportOutcome::Unsupported),
            Some(ClipboardPayload::Text { text }) => self.save_text(text).await,
            Some(ClipboardPayload::Image { image }) => self.save_image(image).await,
        }
    }

    async fn save_text(&self, text: String) -> Result<ExportOutcome, ExportError> {
        info!("text data detected, opening save dialog");

        let request = SaveDialogRequest {
            title: "Save Text File".to_string(),
            file_name: DEFAULT_TEXT_FILE_NAME.to_string(),
            filters: vec![FileFilter::new("Text Files (*.txt)", &["txt"])],
        };

        let Some(path) = self
            .dialog
            .pick_save_path(request)
            .await
            .map_err(ExportError::Dialog)?
        else {
            return Ok(ExportOutcome::TextCanceled);
        };

        // Verbatim: no trailing-newline normalization, no transformation.
        self.write_file(TargetKind::Text, &path, text.as_bytes())
            .await?;
        Ok(ExportOutcome::TextSaved { path })
    }

    async fn save_image(&self, image: ImageData) -> Result<ExportOutcome, ExportError> {
        info!("image data detected, opening save dialog");

        let request = SaveDialogRequest {
            title: "Save Image File".to_string(),
            file_name: DEFAULT_IMAGE_FILE_NAME.to_string(),
            filters: vec![
                FileFilter::new("PNG Image (*.png)", &["png"]),
                FileFilter::new("JPEG Image (*.jpg)", &["jpg"]),
            ],
        };

        let Some(path) = self
            .dialog
            .pick_save_path(request)
            .await
            .map_err(ExportError::Dialog)?
        else {
            return Ok(ExportOutcome::ImageCanceled);
        };

        let format = ImageFormat::from_path(&path);
        debug!(?format, "encoding clipboard image");
        let encoded = self.encoder.encode(&image, format)?;

        self.write_file(TargetKind::Image, &path, &encoded).await?;
        Ok(ExportOutcome::ImageSaved { path })
    }

    async fn write_file(
        &self,
        kind: TargetKind,
        path: &Path,
        bytes: &[u8],
    ) -> Result<(), ExportError> {
        tokio::fs::write(path, bytes)
            .await
            .map_err(|source| ExportError::Io {
                kind,
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), bytes = bytes.len(), "file written");
        Ok(())
    }
}

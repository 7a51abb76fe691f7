//! System clipboard adapter backed by `clipboard-rs`.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use clipboard_rs::common::RustImage;
use clipboard_rs::{Clipboard, ClipboardContext, RustImageData};
use tracing::debug;

use cs_core::clipboard::{ClipboardPayload, MimeType, SelectedTarget, TargetKind};
use cs_core::image::ImageData;
use cs_core::ports::ClipboardPort;

/// [`ClipboardPort`] implementation over the host clipboard.
///
/// The `clipboard-rs` context is not `Sync`, so a fresh one is opened per
/// operation on the blocking pool; one export run touches the clipboard at
/// most twice.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClipboardPort for SystemClipboard {
    async fn list_targets(&self) -> Result<Vec<MimeType>> {
        tokio::task::spawn_blocking(list_targets_blocking).await?
    }

    async fn fetch(&self, target: &SelectedTarget) -> Result<Option<ClipboardPayload>> {
        let target = target.clone();
        tokio::task::spawn_blocking(move || fetch_blocking(&target)).await?
    }
}

fn open_context() -> Result<ClipboardContext> {
    ClipboardContext::new().map_err(|e| anyhow!("failed to open clipboard: {e}"))
}

fn list_targets_blocking() -> Result<Vec<MimeType>> {
    let ctx = open_context()?;
    let formats = ctx.available_formats().map_err(|e| anyhow!(e))?;
    debug!(?formats, "clipboard formats enumerated");

    Ok(formats.into_iter().map(MimeType).collect())
}

fn fetch_blocking(target: &SelectedTarget) -> Result<Option<ClipboardPayload>> {
    let ctx = open_context()?;

    match target.kind {
        TargetKind::Image => {
            if let Ok(img) = ctx.get_image() {
                if let Some(image) = decode_image(img) {
                    return Ok(Some(ClipboardPayload::Image { image }));
                }
            }

            // The target advertised an image but nothing decoded; some hosts
            // still yield text for the same selection.
            Ok(read_text(&ctx))
        }
        TargetKind::Text => Ok(read_text(&ctx)),
    }
}

fn read_text(ctx: &ClipboardContext) -> Option<ClipboardPayload> {
    ctx.get_text()
        .ok()
        .map(|text| ClipboardPayload::Text { text })
}

fn decode_image(img: RustImageData) -> Option<ImageData> {
    let png = img.to_png().ok()?;
    let decoded = image::load_from_memory(png.get_bytes()).ok()?;
    let rgba = decoded.to_rgba8();

    Some(ImageData {
        width: rgba.width(),
        height: rgba.height(),
        bytes: rgba.into_raw(),
    })
}

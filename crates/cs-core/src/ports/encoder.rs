//! Image encoder port - abstracts pixel-buffer encoding

use thiserror::Error;

use crate::image::{ImageData, ImageFormat};

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("pixel buffer does not match dimensions ({width}x{height}, {len} bytes)")]
    InvalidDimensions { width: u32, height: u32, len: usize },

    #[error("failed to encode image as {format:?}: {source}")]
    Encode {
        format: ImageFormat,
        #[source]
        source: anyhow::Error,
    },
}

/// Image encoder port - abstracts pixel-buffer encoding
///
/// Encoding is CPU-bound and synchronous; implementations must not touch
/// the filesystem.
pub trait ImageEncoderPort: Send + Sync {
    /// Encode RGBA pixels into the container `format`.
    fn encode(&self, image: &ImageData, format: ImageFormat) -> Result<Vec<u8>, EncodeError>;
}

//! Image payload model shared between the clipboard and encoder ports.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Decoded image data: dimensions plus raw RGBA bytes, row-major.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageData {
    /// Width of the image in pixels.
    pub width: u32,
    /// Height of the image in pixels.
    pub height: u32,
    /// Raw RGBA bytes, `width * height * 4` long.
    pub bytes: Vec<u8>,
}

/// Encoding formats the exporter can write.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ImageFormat {
    Png,
    Jpeg,
}

impl ImageFormat {
    /// Infer the encoding from the destination path the user picked.
    ///
    /// `.jpg` / `.jpeg` (any case) mean JPEG; everything else, including a
    /// missing extension, falls back to PNG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") => {
                ImageFormat::Jpeg
            }
            _ => ImageFormat::Png,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_path_jpg() {
        assert_eq!(
            ImageFormat::from_path(&PathBuf::from("/tmp/shot.jpg")),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_from_path_jpeg() {
        assert_eq!(
            ImageFormat::from_path(&PathBuf::from("/tmp/shot.jpeg")),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_from_path_jpg_uppercase() {
        assert_eq!(
            ImageFormat::from_path(&PathBuf::from("/tmp/SHOT.JPG")),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_from_path_png() {
        assert_eq!(
            ImageFormat::from_path(&PathBuf::from("/tmp/shot.png")),
            ImageFormat::Png
        );
    }

    #[test]
    fn test_from_path_unknown_extension_is_png() {
        assert_eq!(
            ImageFormat::from_path(&PathBuf::from("/tmp/shot.webp")),
            ImageFormat::Png
        );
    }

    #[test]
    fn test_from_path_no_extension_is_png() {
        assert_eq!(
            ImageFormat::from_path(&PathBuf::from("/tmp/shot")),
            ImageFormat::Png
        );
    }
}

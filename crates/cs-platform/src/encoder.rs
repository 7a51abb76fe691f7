//! Image encoding adapter backed by the `image` crate.

use std::io::Cursor;

use image::{DynamicImage, RgbaImage};

use cs_core::image::{ImageData, ImageFormat};
use cs_core::ports::{EncodeError, ImageEncoderPort};

/// [`ImageEncoderPort`] implementation over the `image` crate.
///
/// JPEG has no alpha channel, so RGBA pixels are flattened to RGB before
/// encoding; PNG keeps the alpha channel.
#[derive(Debug, Default)]
pub struct ImageEncoder;

impl ImageEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl ImageEncoderPort for ImageEncoder {
    fn encode(&self, image: &ImageData, format: ImageFormat) -> Result<Vec<u8>, EncodeError> {
        let rgba = RgbaImage::from_raw(image.width, image.height, image.bytes.clone()).ok_or(
            EncodeError::InvalidDimensions {
                width: image.width,
                height: image.height,
                len: image.bytes.len(),
            },
        )?;

        let (dynamic, target) = match format {
            ImageFormat::Png => (DynamicImage::ImageRgba8(rgba), image::ImageFormat::Png),
            ImageFormat::Jpeg => (
                DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(rgba).to_rgb8()),
                image::ImageFormat::Jpeg,
            ),
        };

        let mut out = Cursor::new(Vec::new());
        dynamic
            .write_to(&mut out, target)
            .map_err(|source| EncodeError::Encode {
                format,
                source: source.into(),
            })?;

        Ok(out.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> ImageData {
        // 2x2 opaque pixels: red, green, blue, white.
        ImageData {
            width: 2,
            height: 2,
            bytes: vec![
                255, 0, 0, 255, //
                0, 255, 0, 255, //
                0, 0, 255, 255, //
                255, 255, 255, 255,
            ],
        }
    }

    #[test]
    fn test_encode_png_roundtrips_dimensions() {
        let encoded = ImageEncoder::new()
            .encode(&sample_image(), ImageFormat::Png)
            .unwrap();

        assert_eq!(
            image::guess_format(&encoded).unwrap(),
            image::ImageFormat::Png
        );
        let decoded = image::load_from_memory(&encoded).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (2, 2));
    }

    #[test]
    fn test_encode_jpeg_produces_jpeg_container() {
        let encoded = ImageEncoder::new()
            .encode(&sample_image(), ImageFormat::Jpeg)
            .unwrap();

        assert_eq!(
            image::guess_format(&encoded).unwrap(),
            image::ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_encode_rejects_mismatched_buffer() {
        let broken = ImageData {
            width: 4,
            height: 4,
            bytes: vec![0; 8],
        };

        let err = ImageEncoder::new()
            .encode(&broken, ImageFormat::Png)
            .unwrap_err();
        assert!(matches!(err, EncodeError::InvalidDimensions { .. }));
    }
}

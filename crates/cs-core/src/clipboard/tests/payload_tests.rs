//! Tests for [`ClipboardPayload`].

use crate::clipboard::ClipboardPayload;
use crate::image::ImageData;

#[test]
fn test_empty_text_is_empty() {
    let payload = ClipboardPayload::Text {
        text: String::new(),
    };
    assert!(payload.is_empty());
}

#[test]
fn test_nonempty_text_is_not_empty() {
    let payload = ClipboardPayload::Text {
        text: "hello\n".to_string(),
    };
    assert!(!payload.is_empty());
}

#[test]
fn test_image_without_pixels_is_empty() {
    let payload = ClipboardPayload::Image {
        image: ImageData {
            width: 0,
            height: 0,
            bytes: vec![],
        },
    };
    assert!(payload.is_empty());
}

#[test]
fn test_image_with_pixels_is_not_empty() {
    let payload = ClipboardPayload::Image {
        image: ImageData {
            width: 1,
            height: 1,
            bytes: vec![0, 0, 0, 255],
        },
    };
    assert!(!payload.is_empty());
}

//! Tests for the target negotiation policy.

use super::fixtures::*;
use crate::clipboard::{select_target, TargetKind};

#[test]
fn test_image_wins_when_first() {
    let selected = select_target(&targets(&["image/png", "text/plain"])).unwrap();
    assert_eq!(selected.kind, TargetKind::Image);
    assert_eq!(selected.mime.as_str(), "image/png");
}

#[test]
fn test_image_wins_regardless_of_position() {
    let selected =
        select_target(&targets(&["text/plain", "UTF8_STRING", "image/bmp"])).unwrap();
    assert_eq!(selected.kind, TargetKind::Image);
    assert_eq!(selected.mime.as_str(), "image/bmp");
}

#[test]
fn test_first_image_target_wins_tie_break() {
    // Host order decides among multiple image targets; the policy must not
    // re-rank them.
    let selected =
        select_target(&targets(&["image/tiff", "image/png", "image/jpeg"])).unwrap();
    assert_eq!(selected.mime.as_str(), "image/tiff");
}

#[test]
fn test_text_plain_chosen_without_image() {
    let selected = select_target(&targets(&["text/html", "text/plain"])).unwrap();
    assert_eq!(selected.kind, TargetKind::Text);
    assert_eq!(selected.mime.as_str(), "text/plain");
}

#[test]
fn test_utf8_string_chosen_without_image() {
    let selected = select_target(&targets(&["text/html", "UTF8_STRING"])).unwrap();
    assert_eq!(selected.kind, TargetKind::Text);
    assert_eq!(selected.mime.as_str(), "UTF8_STRING");
}

#[test]
fn test_first_text_target_wins_in_host_order() {
    let selected = select_target(&targets(&["UTF8_STRING", "text/plain"])).unwrap();
    assert_eq!(selected.mime.as_str(), "UTF8_STRING");
}

#[test]
fn test_no_selection_for_unrelated_targets() {
    assert!(select_target(&targets(&["text/html", "application/x-moz-url"])).is_none());
}

#[test]
fn test_no_selection_for_empty_list() {
    assert!(select_target(&[]).is_none());
}

#[test]
fn test_other_text_subtypes_are_not_text_targets() {
    // Only the two exact identifiers count; text/html alone selects nothing.
    assert!(select_target(&targets(&["text/html"])).is_none());
}

//! Target negotiation: pick the one clipboard representation to fetch.

use serde::{Deserialize, Serialize};

use super::MimeType;

/// What kind of payload a negotiated target is expected to yield.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Image,
    Text,
}

/// The single target chosen out of everything the clipboard offers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectedTarget {
    pub mime: MimeType,
    pub kind: TargetKind,
}

/// Select the representation to fetch from the targets the clipboard offers.
///
/// Priority, first match wins:
/// 1. any `image/*` target
/// 2. `text/plain` or `UTF8_STRING`
/// 3. nothing
///
/// When several image targets are offered, the first one in the list wins.
/// The list order comes from the host clipboard and varies across platforms;
/// the policy deliberately does not re-rank it.
pub fn select_target(targets: &[MimeType]) -> Option<SelectedTarget> {
    if let Some(mime) = targets.iter().find(|t| t.is_image()) {
        return Some(SelectedTarget {
            mime: mime.clone(),
            kind: TargetKind::Image,
        });
    }

    targets
        .iter()
        .find(|t| t.is_plain_text_target())
        .map(|mime| SelectedTarget {
            mime: mime.clone(),
            kind: TargetKind::Text,
        })
}

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhotoKind {
    Png,
    Jpeg,
    Unsupported,
}

impl PhotoKind {
    pub fn is_sortable(self) -> bool {
        self != Self::Unsupported
    }
}

/// Decoded pixels ready to blit, packed as `0x00RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPhoto {
    pub width: u32,
    pub height: u32,
    pub kind: PhotoKind,
    pub pixels: Vec<u32>,
}

/// Only `.png` and `.jpg` are sorted; `.jpeg` is left alone.
pub fn detect_photo_kind(path: &Path) -> PhotoKind {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return PhotoKind::Unsupported;
    };

    match ext.to_ascii_lowercase().as_str() {
        "png" => PhotoKind::Png,
        "jpg" => PhotoKind::Jpeg,
        _ => PhotoKind::Unsupported,
    }
}

//! Asset availability, as reported by the host's loader.
//!
//! The controller never loads assets itself. It only needs to know whether
//! the themed overlay image exists so it can fall back to a plain rectangle.

use std::collections::HashSet;

use stagefire_core::constants::*;
use stagefire_core::state::Backdrop;

/// Image keys the host has successfully loaded.
pub trait AssetCatalog {
    fn has_image(&self, key: &str) -> bool;
}

/// The stock asset pack: background, sprites, and the menu backdrop.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAssets;

impl AssetCatalog for StandardAssets {
    fn has_image(&self, key: &str) -> bool {
        matches!(key, "background" | "sonic" | "villain" | "bullet" | MENU_IMAGE_KEY)
    }
}

impl AssetCatalog for HashSet<String> {
    fn has_image(&self, key: &str) -> bool {
        self.contains(key)
    }
}

/// Backdrop for modal overlays: the menu image, or a translucent black
/// rectangle of the same footprint when the image is missing.
pub fn overlay_backdrop(assets: &dyn AssetCatalog) -> Backdrop {
    if assets.has_image(MENU_IMAGE_KEY) {
        return Backdrop::Image {
            key: MENU_IMAGE_KEY.to_string(),
        };
    }

    log::warn!("overlay image '{MENU_IMAGE_KEY}' unavailable, drawing plain backdrop");
    Backdrop::Rect {
        width: OVERLAY_SIZE[0],
        height: OVERLAY_SIZE[1],
        color: OVERLAY_FALLBACK_COLOR,
        alpha: OVERLAY_FALLBACK_ALPHA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_assets_use_menu_image() {
        assert_eq!(
            overlay_backdrop(&StandardAssets),
            Backdrop::Image {
                key: "menu".to_string()
            }
        );
    }

    #[test]
    fn missing_menu_image_falls_back_to_rect() {
        let loaded: HashSet<String> = ["background".to_string()].into_iter().collect();
        match overlay_backdrop(&loaded) {
            Backdrop::Rect {
                width,
                height,
                alpha,
                ..
            } => {
                assert_eq!((width, height), (384.0, 448.0));
                assert_eq!(alpha, 0.8);
            }
            other => panic!("expected fallback rect, got {other:?}"),
        }
    }
}

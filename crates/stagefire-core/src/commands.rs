//! Input sent from the host engine to the controller.
//!
//! Edge-triggered key presses are queued as `PlayerCommand`s and processed
//! at the next frame boundary. Held keys are polled state, replaced wholesale
//! each frame.

use serde::{Deserialize, Serialize};

use crate::enums::ShopItem;

/// Edge-triggered player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Fire key (Z).
    Fire,
    /// Pause key (ESC). Toggles pause, or leaves the shop.
    TogglePause,
    /// Resume key (SPACE). Leaves pause or the shop; ignored while playing.
    Resume,
    /// Shop purchase key (A / S / F).
    Purchase { item: ShopItem },
}

/// Movement keys held during the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

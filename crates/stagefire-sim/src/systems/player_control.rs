//! Player input handling: knockback expiry, horizontal movement, jumping.

use hecs::World;

use stagefire_core::commands::HeldKeys;
use stagefire_core::components::Body;
use stagefire_core::config::PlayerTuning;
use stagefire_core::enums::{Facing, MoveTieBreak};

use crate::run_state::PlayerState;

/// Movement direction from the held keys, or `None` to stand still.
pub fn resolve_move_intent(held: HeldKeys, tie_break: MoveTieBreak) -> Option<Facing> {
    match (held.left, held.right) {
        (false, false) => None,
        (true, false) => Some(Facing::Left),
        (false, true) => Some(Facing::Right),
        (true, true) => Some(match tie_break {
            MoveTieBreak::PreferLeft => Facing::Left,
            MoveTieBreak::PreferRight => Facing::Right,
        }),
    }
}

/// Apply held-key input to the player body.
///
/// While knocked back, input is ignored and the body keeps the velocity the
/// hit gave it.
pub fn run(
    world: &mut World,
    player: &mut PlayerState,
    held: HeldKeys,
    tuning: &PlayerTuning,
    now_ms: u64,
) {
    if let Some(until) = player.knockback_until {
        if now_ms > until {
            player.knockback_until = None;
        }
    }
    if player.knocked_back() {
        return;
    }

    let Ok(mut body) = world.get::<&mut Body>(player.entity) else {
        return;
    };

    let mut vx = 0.0;
    if let Some(facing) = resolve_move_intent(held, tuning.tie_break) {
        player.facing = facing;
        vx = facing.sign() * tuning.base_move_speed;
    }

    if held.jump && body.touching_down {
        body.velocity.y = tuning.jump_impulse;
    }

    body.velocity.x = vx * player.speed as f32 / tuning.baseline_speed_stat as f32;
}

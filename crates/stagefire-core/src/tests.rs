#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::{HeldKeys, PlayerCommand};
    use crate::enums::*;
    use crate::events::{CollisionEvent, GameEvent};
    use crate::state::{Backdrop, GameStateSnapshot, OverlayView};
    use crate::types::{BodyState, EntityId, Rect, SimTime};

    #[test]
    fn test_facing_sign() {
        assert_eq!(Facing::Left.sign(), -1.0);
        assert_eq!(Facing::Right.sign(), 1.0);
        assert_eq!(Facing::default(), Facing::Right);
    }

    #[test]
    fn test_health_scaling_policies() {
        assert_eq!(HealthScaling::Additive.enemy_health(5, 1), 5);
        assert_eq!(HealthScaling::Additive.enemy_health(5, 4), 8);
        assert_eq!(HealthScaling::Multiplicative.enemy_health(5, 1), 5);
        assert_eq!(HealthScaling::Multiplicative.enemy_health(5, 4), 20);
    }

    #[test]
    fn test_physics_frozen_outside_play() {
        assert!(!GamePhase::Playing.physics_frozen());
        assert!(GamePhase::Paused.physics_frozen());
        assert!(GamePhase::ShopActive.physics_frozen());
        assert!(GamePhase::GameOver.physics_frozen());
    }

    #[test]
    fn test_sim_time_advances_in_ms() {
        let mut time = SimTime::default();
        for _ in 0..12 {
            time.advance();
        }
        assert_eq!(time.tick, 12);
        assert_eq!(time.elapsed_ms, 200);
        for _ in 0..48 {
            time.advance();
        }
        assert_eq!(time.elapsed_ms, 1000);
    }

    #[test]
    fn test_rect_top_edge() {
        let rect = Rect::new(Vec2::new(292.5, 410.0), Vec2::new(215.0, 40.0));
        assert_eq!(rect.top(), 390.0);
    }

    /// Commands arrive from the host as tagged JSON.
    #[test]
    fn test_player_command_json_shape() {
        let cmd: PlayerCommand =
            serde_json::from_str(r#"{ "type": "Purchase", "item": "Heal" }"#).unwrap();
        assert_eq!(
            cmd,
            PlayerCommand::Purchase {
                item: ShopItem::Heal
            }
        );
        let cmd: PlayerCommand = serde_json::from_str(r#"{ "type": "TogglePause" }"#).unwrap();
        assert_eq!(cmd, PlayerCommand::TogglePause);
    }

    #[test]
    fn test_held_keys_default_missing_fields() {
        let keys: HeldKeys = serde_json::from_str(r#"{ "left": true }"#).unwrap();
        assert!(keys.left);
        assert!(!keys.right);
        assert!(!keys.jump);
    }

    #[test]
    fn test_collision_event_json_shape() {
        let event: CollisionEvent =
            serde_json::from_str(r#"{ "type": "BulletEnemy", "bullet": 3, "enemy": 9 }"#).unwrap();
        assert_eq!(
            event,
            CollisionEvent::BulletEnemy {
                bullet: EntityId(3),
                enemy: EntityId(9)
            }
        );

        let event: CollisionEvent =
            serde_json::from_str(r#"{ "type": "BulletBlocked", "bullet": 3, "solid": 1 }"#)
                .unwrap();
        assert_eq!(
            event,
            CollisionEvent::BulletBlocked {
                bullet: EntityId(3),
                solid: EntityId(1)
            }
        );
    }

    #[test]
    fn test_body_state_contact_flags_optional() {
        let body: BodyState =
            serde_json::from_str(r#"{ "position": [10.0, 20.0], "velocity": [0.0, 0.0] }"#)
                .unwrap();
        assert_eq!(body.position, Vec2::new(10.0, 20.0));
        assert!(!body.touching_down);
        assert!(!body.blocked_left);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snapshot = GameStateSnapshot {
            overlay: Some(OverlayView {
                kind: OverlayKind::Pause,
                text: "Press SPACE or ESC to Continue".into(),
                backdrop: Some(Backdrop::Image { key: "menu".into() }),
            }),
            events: vec![GameEvent::Paused, GameEvent::StageCleared { stage: 1 }],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.overlay, snapshot.overlay);
        assert_eq!(back.events, snapshot.events);
    }
}

//! Collision registration table.
//!
//! Mirrors the collider/overlap registrations the host physics engine is
//! configured with: which kind pairs interact, whether they block or merely
//! overlap, an optional filter deciding if a given contact is honored, and
//! which `CollisionEvent` (if any) the host should report back.

use stagefire_core::components::Body;
use stagefire_core::constants::ONE_WAY_TOLERANCE;
use stagefire_core::enums::EntityKind;
use stagefire_core::types::Rect;

/// How the host resolves a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Bodies are separated.
    Collide,
    /// Bodies pass through; only a notification is raised.
    Overlap,
}

/// Predicate run before honoring a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFilter {
    /// Solid only when landing on the top surface from above.
    OneWayPlatform,
}

/// Event the host should report when the contact is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notify {
    None,
    PlayerEnemy,
    BulletEnemy,
    BulletBlocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionRule {
    /// (mover, other). Lookup is order-insensitive.
    pub pair: (EntityKind, EntityKind),
    pub response: Response,
    pub filter: Option<ContactFilter>,
    pub notify: Notify,
}

/// Ordered set of collision rules.
#[derive(Debug, Clone, Default)]
pub struct CollisionTable {
    rules: Vec<CollisionRule>,
}

impl CollisionTable {
    /// Register a rule. The first registered rule matching a pair wins.
    pub fn register(
        &mut self,
        mover: EntityKind,
        other: EntityKind,
        response: Response,
        filter: Option<ContactFilter>,
        notify: Notify,
    ) -> &mut Self {
        self.rules.push(CollisionRule {
            pair: (mover, other),
            response,
            filter,
            notify,
        });
        self
    }

    /// The rule set the game ships with.
    pub fn standard() -> Self {
        use EntityKind::*;

        let mut table = Self::default();
        table
            .register(Player, Ground, Response::Collide, None, Notify::None)
            .register(Player, Barrier, Response::Collide, None, Notify::None)
            .register(
                Player,
                Platform,
                Response::Collide,
                Some(ContactFilter::OneWayPlatform),
                Notify::None,
            )
            .register(Enemy, Ground, Response::Collide, None, Notify::None)
            .register(Enemy, Barrier, Response::Collide, None, Notify::None)
            .register(
                Enemy,
                Platform,
                Response::Collide,
                Some(ContactFilter::OneWayPlatform),
                Notify::None,
            )
            .register(Bullet, Ground, Response::Collide, None, Notify::BulletBlocked)
            .register(Bullet, Barrier, Response::Collide, None, Notify::BulletBlocked)
            .register(Bullet, Platform, Response::Collide, None, Notify::BulletBlocked)
            .register(Player, Enemy, Response::Collide, None, Notify::PlayerEnemy)
            .register(Bullet, Enemy, Response::Overlap, None, Notify::BulletEnemy);
        table
    }

    /// Find the rule for a kind pair, in either order.
    pub fn rule_for(&self, a: EntityKind, b: EntityKind) -> Option<&CollisionRule> {
        self.rules
            .iter()
            .find(|r| r.pair == (a, b) || r.pair == (b, a))
    }

    /// Notification a contact between the two kinds raises. Pairs with no
    /// rule raise nothing.
    pub fn notify_for(&self, a: EntityKind, b: EntityKind) -> Notify {
        self.rule_for(a, b).map_or(Notify::None, |rule| rule.notify)
    }

    /// Whether the host should separate a moving body from a static solid.
    /// Pairs with no rule and overlap-only pairs are never separated.
    pub fn should_collide(
        &self,
        mover_kind: EntityKind,
        mover: &Body,
        solid_kind: EntityKind,
        solid: &Rect,
    ) -> bool {
        match self.rule_for(mover_kind, solid_kind) {
            Some(rule) if rule.response == Response::Collide => match rule.filter {
                None => true,
                Some(ContactFilter::OneWayPlatform) => lands_on_platform(mover, solid),
            },
            _ => false,
        }
    }
}

/// One-way platform test: the mover is not rising and its bottom edge is at
/// or just below the platform top.
pub fn lands_on_platform(mover: &Body, platform: &Rect) -> bool {
    let mover_bottom = mover.position.y + mover.size.y / 2.0;
    mover.velocity.y >= 0.0 && mover_bottom <= platform.top() + ONE_WAY_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn body(center_y: f32, velocity_y: f32) -> Body {
        Body {
            position: Vec2::new(300.0, center_y),
            velocity: Vec2::new(0.0, velocity_y),
            size: Vec2::new(40.0, 56.0),
            allow_gravity: true,
            touching_down: false,
            blocked_left: false,
            blocked_right: false,
        }
    }

    fn platform() -> Rect {
        // top = 390
        Rect::new(Vec2::new(292.5, 410.0), Vec2::new(215.0, 40.0))
    }

    #[test]
    fn falling_onto_platform_lands() {
        // bottom = 362 + 28 = 390
        assert!(lands_on_platform(&body(362.0, 120.0), &platform()));
        // bottom = 398, within tolerance
        assert!(lands_on_platform(&body(370.0, 0.0), &platform()));
    }

    #[test]
    fn rising_through_platform_passes() {
        assert!(!lands_on_platform(&body(362.0, -300.0), &platform()));
    }

    #[test]
    fn from_below_or_side_passes() {
        // bottom = 430, well past the top surface
        assert!(!lands_on_platform(&body(402.0, 50.0), &platform()));
    }

    #[test]
    fn standard_table_filters_platforms_only() {
        let table = CollisionTable::standard();
        let rising = body(362.0, -300.0);
        let landing = body(362.0, 10.0);
        assert!(!table.should_collide(
            EntityKind::Player,
            &rising,
            EntityKind::Platform,
            &platform()
        ));
        assert!(table.should_collide(
            EntityKind::Player,
            &rising,
            EntityKind::Ground,
            &platform()
        ));
        assert!(table.should_collide(
            EntityKind::Enemy,
            &landing,
            EntityKind::Platform,
            &platform()
        ));
    }

    #[test]
    fn overlap_pairs_are_never_separated() {
        let mut table = CollisionTable::default();
        table.register(
            EntityKind::Bullet,
            EntityKind::Platform,
            Response::Overlap,
            None,
            Notify::BulletBlocked,
        );
        assert!(!table.should_collide(
            EntityKind::Bullet,
            &body(362.0, 0.0),
            EntityKind::Platform,
            &platform()
        ));
        assert_eq!(
            table.notify_for(EntityKind::Platform, EntityKind::Bullet),
            Notify::BulletBlocked
        );
        assert_eq!(
            table.notify_for(EntityKind::Player, EntityKind::Enemy),
            Notify::None
        );
    }

    #[test]
    fn rule_lookup_is_order_insensitive() {
        let table = CollisionTable::standard();
        let rule = table.rule_for(EntityKind::Enemy, EntityKind::Bullet).unwrap();
        assert_eq!(rule.response, Response::Overlap);
        assert_eq!(rule.notify, Notify::BulletEnemy);
        assert!(table.rule_for(EntityKind::Enemy, EntityKind::Enemy).is_none());
    }
}

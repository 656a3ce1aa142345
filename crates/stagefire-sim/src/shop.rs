//! Stage-clear shop.
//!
//! Each item can be bought at most once per shop visit. A key press
//! consumes the item's arming whether or not the purchase goes through;
//! all items are re-armed only on the next stage clear.

use std::collections::HashSet;

use stagefire_core::config::ShopTuning;
use stagefire_core::enums::{PurchaseOutcome, ShopItem};

use crate::run_state::PlayerState;

/// Per-visit arming of the shop items.
#[derive(Debug, Clone, Default)]
pub struct ShopOffer {
    armed: HashSet<ShopItem>,
}

impl ShopOffer {
    /// Arm every item. Called exactly once on entering the shop.
    pub fn arm_all(&mut self) {
        self.armed.extend(ShopItem::ALL);
    }

    pub fn disarm_all(&mut self) {
        self.armed.clear();
    }

    pub fn is_armed(&self, item: ShopItem) -> bool {
        self.armed.contains(&item)
    }

    /// Handle one purchase key press.
    pub fn purchase(
        &mut self,
        item: ShopItem,
        tuning: &ShopTuning,
        currency: &mut u32,
        player: &mut PlayerState,
    ) -> PurchaseOutcome {
        if !self.armed.remove(&item) {
            return PurchaseOutcome::NotArmed;
        }
        if *currency < tuning.price {
            return PurchaseOutcome::InsufficientFunds;
        }

        match item {
            ShopItem::Heal => {
                if player.health >= player.max_health {
                    return PurchaseOutcome::AlreadyFull;
                }
                player.health = (player.health + tuning.heal_amount).min(player.max_health);
            }
            ShopItem::Speed => player.speed += tuning.speed_step,
            ShopItem::Damage => player.bullet_damage += tuning.damage_step,
        }

        *currency -= tuning.price;
        PurchaseOutcome::Purchased
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stagefire_core::config::GameConfig;

    fn player(health: u32) -> PlayerState {
        let mut world = hecs::World::new();
        let entity = world.spawn(());
        let mut player = PlayerState::new(entity, &GameConfig::default());
        player.health = health;
        player
    }

    fn armed_offer() -> ShopOffer {
        let mut offer = ShopOffer::default();
        offer.arm_all();
        offer
    }

    #[test]
    fn heal_is_capped_at_max() {
        let mut offer = armed_offer();
        let mut currency = 10;
        let mut p = player(20);
        let outcome = offer.purchase(ShopItem::Heal, &ShopTuning::default(), &mut currency, &mut p);
        assert_eq!(outcome, PurchaseOutcome::Purchased);
        assert_eq!(p.health, 25);
        assert_eq!(currency, 0);
    }

    #[test]
    fn heal_at_full_health_is_noop() {
        let mut offer = armed_offer();
        let mut currency = 10;
        let mut p = player(25);
        let outcome = offer.purchase(ShopItem::Heal, &ShopTuning::default(), &mut currency, &mut p);
        assert_eq!(outcome, PurchaseOutcome::AlreadyFull);
        assert_eq!(p.health, 25);
        assert_eq!(currency, 10);
    }

    #[test]
    fn insufficient_funds_is_noop_for_every_item() {
        let tuning = ShopTuning::default();
        for item in ShopItem::ALL {
            let mut offer = armed_offer();
            let mut currency = 9;
            let mut p = player(10);
            let before = p.clone();
            let outcome = offer.purchase(item, &tuning, &mut currency, &mut p);
            assert_eq!(outcome, PurchaseOutcome::InsufficientFunds);
            assert_eq!(currency, 9);
            assert_eq!(p, before);
        }
    }

    #[test]
    fn speed_and_damage_upgrades() {
        let tuning = ShopTuning::default();
        let mut offer = armed_offer();
        let mut currency = 25;
        let mut p = player(25);
        assert_eq!(
            offer.purchase(ShopItem::Speed, &tuning, &mut currency, &mut p),
            PurchaseOutcome::Purchased
        );
        assert_eq!(
            offer.purchase(ShopItem::Damage, &tuning, &mut currency, &mut p),
            PurchaseOutcome::Purchased
        );
        assert_eq!(p.speed, 6);
        assert_eq!(p.bullet_damage, 10);
        assert_eq!(currency, 5);
    }

    #[test]
    fn each_item_is_consumed_by_one_press() {
        let tuning = ShopTuning::default();
        let mut offer = armed_offer();
        let mut currency = 100;
        let mut p = player(25);
        assert_eq!(
            offer.purchase(ShopItem::Damage, &tuning, &mut currency, &mut p),
            PurchaseOutcome::Purchased
        );
        assert_eq!(
            offer.purchase(ShopItem::Damage, &tuning, &mut currency, &mut p),
            PurchaseOutcome::NotArmed
        );
        assert_eq!(currency, 90);
        assert_eq!(p.bullet_damage, 10);
    }

    #[test]
    fn refused_press_still_consumes_item() {
        let tuning = ShopTuning::default();
        let mut offer = armed_offer();
        let mut currency = 5;
        let mut p = player(25);
        offer.purchase(ShopItem::Speed, &tuning, &mut currency, &mut p);
        assert!(!offer.is_armed(ShopItem::Speed));
        currency = 50;
        assert_eq!(
            offer.purchase(ShopItem::Speed, &tuning, &mut currency, &mut p),
            PurchaseOutcome::NotArmed
        );
    }

    #[test]
    fn disarmed_offer_refuses_everything() {
        let tuning = ShopTuning::default();
        let mut offer = armed_offer();
        offer.disarm_all();
        let mut currency = 100;
        let mut p = player(1);
        for item in ShopItem::ALL {
            assert_eq!(
                offer.purchase(item, &tuning, &mut currency, &mut p),
                PurchaseOutcome::NotArmed
            );
        }
        assert_eq!(currency, 100);
    }
}

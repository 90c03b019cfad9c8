//! Accessory records.

use super::{
    gold_value, shops_for, stat_bonus, BuildContext, CraftingRoll, EffectRoll, ItemBuilder,
    ValueRoll,
};
use crate::{
    Ability, AbilityBonuses, Accessory, AccessoryStats, Category, Item, ItemBase, ItemForgeResult,
    Rarity,
};
use rand::rngs::StdRng;
use rand::Rng;

const VALUE_RANGE: (u32, u32) = (150, 1800);

/// Rarity-independent accessory stats: which abilities get a bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessoryRoll {
    /// Indexed like `Ability::ALL`
    pub boosted: [bool; 6],
}

impl AccessoryRoll {
    pub fn sample(rng: &mut StdRng) -> Self {
        let mut boosted = [false; 6];
        for flag in boosted.iter_mut() {
            *flag = rng.gen_bool(0.5);
        }
        Self { boosted }
    }

    pub fn stats(&self, rarity: Rarity) -> AccessoryStats {
        let bonus = stat_bonus(rarity);
        let mut bonuses = AbilityBonuses::default();
        for (ability, boosted) in Ability::ALL.into_iter().zip(self.boosted) {
            if boosted {
                bonuses.set(ability, bonus);
            }
        }

        AccessoryStats {
            bonuses,
            mana_regeneration: bonus,
            health_regeneration: bonus.saturating_sub(1),
            experience_bonus: if rarity.is_premium() {
                (5.0 * rarity.multiplier()) as u32
            } else {
                0
            },
        }
    }
}

pub struct AccessoryBuilder;

impl ItemBuilder for AccessoryBuilder {
    fn category(&self) -> Category {
        Category::Accessory
    }

    fn build(&self, ctx: &BuildContext<'_>, rng: &mut StdRng) -> ItemForgeResult<Item> {
        let roll = AccessoryRoll::sample(rng);
        let value = ValueRoll::sample(VALUE_RANGE.0, rng);
        let effects = EffectRoll::sample(ctx.lexicon, rng)?;
        let durability = rng.gen_range(40..=120);
        let crafting = CraftingRoll::sample(ctx.lexicon, 2, 3, false, rng)?;

        Ok(Item::Accessory(Accessory {
            base: ItemBase::new(
                Category::Accessory,
                ctx.id,
                &ctx.name.name,
                ctx.rarity,
                gold_value(ctx.rarity, VALUE_RANGE.0, VALUE_RANGE.1, value.jitter),
            ),
            accessory_type: ctx.name.noun.kind.clone(),
            level_requirement: value.level_requirement(ctx.rarity),
            stats: roll.stats(ctx.rarity),
            special_effects: effects.effects(ctx.rarity),
            durability,
            crafting: crafting.recipe(ctx.id, ctx.rarity),
            shop_availability: shops_for(ctx.lexicon, Category::Accessory, ctx.rarity),
        }))
    }
}

//! Armor suit records.

use super::{
    gold_value, scaled, shops_for, stat_bonus, tier_choice, BuildContext, CraftingRoll,
    EffectRoll, ItemBuilder, ValueRoll,
};
use crate::{
    AbilityBonuses, Armor, ArmorStats, Category, ElementalResistance, Item, ItemBase,
    ItemForgeResult, Rarity,
};
use rand::rngs::StdRng;
use rand::Rng;

/// Resistance options per tier; each list's quantiles grow with the tier.
pub const RESISTANCE_OPTIONS: [&[u32]; 5] = [&[0], &[0, 5], &[5, 10, 15], &[10, 15, 20], &[15, 20, 25]];

const VALUE_RANGE: (u32, u32) = (120, 1800);

/// Rarity-independent armor stats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmorRoll {
    pub base_defense: u32,
    pub defense_jitter: u32,
    pub strength: bool,
    pub dexterity: bool,
    pub constitution: bool,
    /// Fire, ice, lightning, poison
    pub resistance_fractions: [f64; 4],
}

impl ArmorRoll {
    pub fn sample(rng: &mut StdRng) -> Self {
        Self {
            base_defense: rng.gen_range(12..=20),
            defense_jitter: rng.gen_range(0..=3),
            strength: rng.gen_bool(0.5),
            dexterity: rng.gen_bool(0.5),
            constitution: rng.gen_bool(0.5),
            resistance_fractions: [rng.gen(), rng.gen(), rng.gen(), rng.gen()],
        }
    }

    pub fn stats(&self, rarity: Rarity) -> ArmorStats {
        let bonus = stat_bonus(rarity);
        let maybe = |flag: bool| if flag { bonus } else { 0 };
        let [fire, ice, lightning, poison] = self
            .resistance_fractions
            .map(|fraction| tier_choice(&RESISTANCE_OPTIONS, rarity, fraction));

        ArmorStats {
            defense: scaled(self.base_defense, rarity) + self.defense_jitter,
            armor_class_bonus: (rarity.multiplier() as u32).min(3),
            bonuses: AbilityBonuses {
                strength_bonus: maybe(self.strength),
                dexterity_bonus: maybe(self.dexterity),
                constitution_bonus: maybe(self.constitution),
                ..AbilityBonuses::default()
            },
            elemental_resistance: ElementalResistance {
                fire,
                ice,
                lightning,
                poison,
            },
        }
    }
}

pub struct ArmorBuilder;

impl ItemBuilder for ArmorBuilder {
    fn category(&self) -> Category {
        Category::Armor
    }

    fn build(&self, ctx: &BuildContext<'_>, rng: &mut StdRng) -> ItemForgeResult<Item> {
        let roll = ArmorRoll::sample(rng);
        let value = ValueRoll::sample(VALUE_RANGE.0, rng);
        let effects = EffectRoll::sample(ctx.lexicon, rng)?;
        let durability = rng.gen_range(110..=190);
        let crafting = CraftingRoll::sample(ctx.lexicon, 3, 5, false, rng)?;

        Ok(Item::Armor(Armor {
            base: ItemBase::new(
                Category::Armor,
                ctx.id,
                &ctx.name.name,
                ctx.rarity,
                gold_value(ctx.rarity, VALUE_RANGE.0, VALUE_RANGE.1, value.jitter),
            ),
            armor_type: "suit".to_string(),
            weight_class: ctx.name.noun.kind.clone(),
            level_requirement: value.level_requirement(ctx.rarity),
            stats: roll.stats(ctx.rarity),
            special_effects: effects.effects(ctx.rarity),
            durability,
            crafting: crafting.recipe(ctx.id, ctx.rarity),
            shop_availability: shops_for(ctx.lexicon, Category::Armor, ctx.rarity),
        }))
    }
}

//! Consumable records: potions, elixirs and friends.

use super::{gold_value, shops_for, BuildContext, CraftingRoll, ItemBuilder, ValueRoll};
use crate::{
    Category, Consumable, ConsumableEffect, ConsumableEffectKind, EffectWord, Item, ItemBase,
    ItemForgeError, ItemForgeResult, Rarity, StatsAffected,
};
use rand::rngs::StdRng;

const VALUE_RANGE: (u32, u32) = (20, 400);

const HEAL_VALUES: [u32; 5] = [120, 350, 600, 900, 1400];
const MANA_VALUES: [u32; 5] = [100, 200, 350, 500, 750];
const BOOST_AMOUNTS: [u32; 5] = [1, 2, 3, 4, 5];
const BOOST_DURATIONS: [u32; 5] = [300, 300, 600, 900, 1200];
const SPEED_VALUES: [u32; 5] = [15, 20, 25, 30, 35];
const SPEED_DURATIONS: [u32; 5] = [180, 180, 300, 420, 420];

/// The effect block of a consumable with the given effect word and tier.
///
/// # Examples
///
/// ```
/// use itemforge::{consumable_effect, ConsumableEffectKind, EffectWord, Rarity};
///
/// let health = EffectWord {
///     word: "Health".to_string(),
///     kind: ConsumableEffectKind::Heal,
///     ability: None,
/// };
/// let effect = consumable_effect(&health, Rarity::Rare);
/// assert_eq!(effect.value, 600);
/// assert_eq!(effect.stats_affected.health, 600);
/// assert!(effect.instant);
/// ```
pub fn consumable_effect(word: &EffectWord, rarity: Rarity) -> ConsumableEffect {
    let tier = rarity.tier();
    let mut stats_affected = StatsAffected::default();

    let (value, duration, instant) = match word.kind {
        ConsumableEffectKind::Heal => {
            stats_affected.health = HEAL_VALUES[tier];
            (HEAL_VALUES[tier], 0, true)
        }
        ConsumableEffectKind::ManaRestore => {
            stats_affected.mana = MANA_VALUES[tier];
            (MANA_VALUES[tier], 0, true)
        }
        ConsumableEffectKind::StatBoost => {
            if let Some(ability) = word.ability {
                stats_affected.set_ability(ability, BOOST_AMOUNTS[tier]);
            }
            (0, BOOST_DURATIONS[tier], false)
        }
        ConsumableEffectKind::SpeedBoost => (SPEED_VALUES[tier], SPEED_DURATIONS[tier], false),
    };

    ConsumableEffect {
        kind: word.kind,
        value,
        duration,
        instant,
        stats_affected,
    }
}

/// Flavor text for a consumable.
pub fn consumable_description(kind: ConsumableEffectKind, rarity: Rarity) -> &'static str {
    match kind {
        ConsumableEffectKind::Heal => match rarity {
            Rarity::Common => "Restores a modest amount of health instantly.",
            Rarity::Uncommon => "A potent brew that restores more health.",
            Rarity::Rare => "A strong restorative for grievous wounds.",
            Rarity::Epic => "An elite draught favored by champions.",
            Rarity::Legendary => "A mythical concoction that mends any injury.",
        },
        ConsumableEffectKind::ManaRestore => "Replenishes a portion of mana instantly.",
        ConsumableEffectKind::StatBoost => "Temporarily enhances attributes.",
        ConsumableEffectKind::SpeedBoost => "Increases movement speed for a short time.",
    }
}

pub struct ConsumableBuilder;

impl ItemBuilder for ConsumableBuilder {
    fn category(&self) -> Category {
        Category::Consumable
    }

    fn build(&self, ctx: &BuildContext<'_>, rng: &mut StdRng) -> ItemForgeResult<Item> {
        let word = ctx.name.effect.as_ref().ok_or_else(|| {
            ItemForgeError::SchemaInvariantViolation {
                id: ctx.id.to_string(),
                detail: "consumable name carries no effect word".to_string(),
            }
        })?;
        let value = ValueRoll::sample(VALUE_RANGE.0, rng);
        let crafting = CraftingRoll::sample(ctx.lexicon, 2, 3, true, rng)?;

        Ok(Item::Consumable(Consumable {
            base: ItemBase::new(
                Category::Consumable,
                ctx.id,
                &ctx.name.name,
                ctx.rarity,
                gold_value(ctx.rarity, VALUE_RANGE.0, VALUE_RANGE.1, value.jitter),
            ),
            consumable_type: ctx.name.noun.kind.clone(),
            effect: consumable_effect(word, ctx.rarity),
            stack_size: if ctx.rarity.is_premium() { 10 } else { 99 },
            crafting: crafting.recipe(ctx.id, ctx.rarity),
            shop_availability: shops_for(ctx.lexicon, Category::Consumable, ctx.rarity),
            description: consumable_description(word.kind, ctx.rarity).to_string(),
        }))
    }
}

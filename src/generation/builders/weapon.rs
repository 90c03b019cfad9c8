//! Weapon records.

use super::{
    band_value, gold_value, scaled, shops_for, stat_bonus, BuildContext, CraftingRoll, EffectRoll,
    ItemBuilder, TierBands, ValueRoll,
};
use crate::{
    AbilityBonuses, Category, Item, ItemBase, ItemForgeResult, Rarity, Weapon, WeaponStats,
};
use rand::rngs::StdRng;
use rand::Rng;

pub const CRIT_CHANCE_BANDS: TierBands = [(3, 4), (5, 7), (8, 10), (10, 12), (12, 15)];

const VALUE_RANGE: (u32, u32) = (100, 900);

/// Rarity-independent weapon stats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponRoll {
    pub base_attack: u32,
    pub attack_jitter: u32,
    pub constitution: bool,
    pub crit_fraction: f64,
}

impl WeaponRoll {
    pub fn sample(rng: &mut StdRng) -> Self {
        Self {
            base_attack: rng.gen_range(10..=20),
            attack_jitter: rng.gen_range(0..=3),
            constitution: rng.gen_bool(0.5),
            crit_fraction: rng.gen(),
        }
    }

    pub fn stats(&self, rarity: Rarity) -> WeaponStats {
        let bonus = stat_bonus(rarity);
        WeaponStats {
            attack: scaled(self.base_attack, rarity) + self.attack_jitter,
            bonuses: AbilityBonuses {
                strength_bonus: bonus,
                dexterity_bonus: bonus,
                constitution_bonus: if self.constitution { bonus } else { 0 },
                ..AbilityBonuses::default()
            },
            critical_chance: band_value(&CRIT_CHANCE_BANDS, rarity, self.crit_fraction),
            critical_damage: 120 + (10.0 * rarity.multiplier()).round_ties_even() as u32,
        }
    }
}

pub struct WeaponBuilder;

impl ItemBuilder for WeaponBuilder {
    fn category(&self) -> Category {
        Category::Weapon
    }

    fn build(&self, ctx: &BuildContext<'_>, rng: &mut StdRng) -> ItemForgeResult<Item> {
        let roll = WeaponRoll::sample(rng);
        let value = ValueRoll::sample(VALUE_RANGE.0, rng);
        let effects = EffectRoll::sample(ctx.lexicon, rng)?;
        let durability = rng.gen_range(70..=180);
        let crafting = CraftingRoll::sample(ctx.lexicon, 2, 4, false, rng)?;

        Ok(Item::Weapon(Weapon {
            base: ItemBase::new(
                Category::Weapon,
                ctx.id,
                &ctx.name.name,
                ctx.rarity,
                gold_value(ctx.rarity, VALUE_RANGE.0, VALUE_RANGE.1, value.jitter),
            ),
            weapon_type: ctx.name.noun.kind.clone(),
            level_requirement: value.level_requirement(ctx.rarity),
            stats: roll.stats(ctx.rarity),
            special_effects: effects.effects(ctx.rarity),
            durability,
            crafting: crafting.recipe(ctx.id, ctx.rarity),
            shop_availability: shops_for(ctx.lexicon, Category::Weapon, ctx.rarity),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{derive_identifier, Lexicon, NounEntry, SynthesizedName};
    use rand::SeedableRng;

    #[test]
    fn test_weapon_type_follows_noun() -> ItemForgeResult<()> {
        let lexicon = Lexicon::standard();
        let name = SynthesizedName {
            name: "Storm Claymore".to_string(),
            noun: NounEntry::new("Claymore", "sword"),
            adjective: "Storm".to_string(),
            effect: None,
        };
        let id = derive_identifier(&name.name);
        let ctx = BuildContext {
            lexicon: &lexicon,
            name: &name,
            id: &id,
            rarity: Rarity::Epic,
        };
        let mut rng = StdRng::seed_from_u64(42);

        match WeaponBuilder.build(&ctx, &mut rng)? {
            Item::Weapon(weapon) => {
                assert_eq!(weapon.weapon_type, "sword");
                assert_eq!(weapon.base.image, "res://assets/textures/weapons/storm_claymore.png");
                assert_eq!(weapon.crafting.recipe_id, "rcp_storm_claymore");
                assert_eq!(weapon.special_effects.len(), 2);
                assert!((13..=17).contains(&weapon.level_requirement));
                assert!((70..=180).contains(&weapon.durability));
                // repeated picks merge into one entry
                assert!((1..=4).contains(&weapon.crafting.materials.len()));
            }
            other => panic!("expected a weapon, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_weapon_stats_by_tier() {
        let roll = WeaponRoll {
            base_attack: 10,
            attack_jitter: 2,
            constitution: false,
            crit_fraction: 0.0,
        };
        let common = roll.stats(Rarity::Common);
        assert_eq!(common.attack, 12);
        assert_eq!(common.critical_chance, 3);
        assert_eq!(common.critical_damage, 130);
        assert_eq!(common.bonuses.constitution_bonus, 0);

        let legendary = roll.stats(Rarity::Legendary);
        assert_eq!(legendary.attack, 67);
        assert_eq!(legendary.critical_chance, 12);
        assert_eq!(legendary.critical_damage, 185);
        assert_eq!(legendary.bonuses.strength_bonus, 6);
    }
}

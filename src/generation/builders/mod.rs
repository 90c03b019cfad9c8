//! # Category Builders
//!
//! One builder per category turns a synthesized name, its id and a rarity tier
//! into a complete item record.
//!
//! Every builder works in two steps. It first samples a *roll* that does not
//! depend on rarity (base values, jitter, fractions, picks), then *scales* the
//! roll by tier. Scaling only ever uses per-tier tables and multipliers that
//! grow with the tier, so for a fixed roll every numeric stat is
//! non-decreasing from common to legendary.

pub mod accessory;
pub mod armor;
pub mod consumable;
pub mod material;
pub mod weapon;

pub use accessory::*;
pub use armor::*;
pub use consumable::*;
pub use material::*;
pub use weapon::*;

use super::utils::pick;
use super::SynthesizedName;
use crate::{
    recipe_id, Category, Crafting, EffectShape, Item, ItemForgeResult, Lexicon, Rarity, ShopKind,
    SpecialEffect, SpecialEffectKind,
};
use rand::rngs::StdRng;
use rand::Rng;
use std::collections::BTreeMap;

/// Everything a builder needs besides the random stream.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a> {
    pub lexicon: &'a Lexicon,
    pub name: &'a SynthesizedName,
    pub id: &'a str,
    pub rarity: Rarity,
}

/// Builds item records of one category.
pub trait ItemBuilder {
    fn category(&self) -> Category;

    /// Builds a complete record. Builders never touch shared state.
    fn build(&self, ctx: &BuildContext<'_>, rng: &mut StdRng) -> ItemForgeResult<Item>;
}

/// The builder responsible for a category.
pub fn builder_for(category: Category) -> &'static dyn ItemBuilder {
    match category {
        Category::Weapon => &WeaponBuilder,
        Category::Armor => &ArmorBuilder,
        Category::Accessory => &AccessoryBuilder,
        Category::Consumable => &ConsumableBuilder,
        Category::Material => &MaterialBuilder,
    }
}

/// Inclusive per-tier ranges, indexed by tier.
pub type TierBands = [(u32, u32); 5];

pub const LEVEL_BANDS: TierBands = [(1, 4), (5, 8), (9, 12), (13, 17), (18, 20)];

/// Samples a tier band at `fraction` (in `[0, 1)`).
///
/// Bands are ordered and do not overlap, so one fraction gives a value that
/// never decreases with the tier.
pub fn band_value(bands: &TierBands, rarity: Rarity, fraction: f64) -> u32 {
    let (low, high) = bands[rarity.tier()];
    let span = (high - low + 1) as f64;
    (low + (fraction.clamp(0.0, 1.0) * span) as u32).min(high)
}

/// Picks from a per-tier option list at `fraction`.
pub fn tier_choice(options: &[&[u32]; 5], rarity: Rarity, fraction: f64) -> u32 {
    let choices = options[rarity.tier()];
    let index = ((fraction.clamp(0.0, 1.0) * choices.len() as f64) as usize).min(choices.len() - 1);
    choices[index]
}

/// Gold value: interpolates `min..max` by tier, plus the rolled jitter.
pub fn gold_value(rarity: Rarity, min: u32, max: u32, jitter: u32) -> u32 {
    let t = rarity.tier() as f64 / (Rarity::ALL.len() - 1) as f64;
    (min as f64 + (max - min) as f64 * t) as u32 + jitter
}

/// Ability bonus of a tier: the multiplier, halves rounded to even.
pub fn stat_bonus(rarity: Rarity) -> u32 {
    rarity.multiplier().round_ties_even() as u32
}

/// `base * multiplier`, halves rounded to even.
pub fn scaled(base: u32, rarity: Rarity) -> u32 {
    (base as f64 * rarity.multiplier()).round_ties_even() as u32
}

/// Shops for a category: standard shops below rare, premium shops above.
pub fn shops_for(lexicon: &Lexicon, category: Category, rarity: Rarity) -> Vec<ShopKind> {
    match lexicon.shop_route(category) {
        Some(route) if rarity.is_premium() => route.premium.clone(),
        Some(route) => route.standard.clone(),
        None => vec![ShopKind::GeneralStore],
    }
}

/// Rarity-independent part of a value: a fraction and a jitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRoll {
    pub jitter: u32,
    pub level_fraction: f64,
}

impl ValueRoll {
    pub fn sample(min_value: u32, rng: &mut StdRng) -> Self {
        Self {
            jitter: rng.gen_range(0..=min_value),
            level_fraction: rng.gen(),
        }
    }

    pub fn level_requirement(&self, rarity: Rarity) -> u32 {
        band_value(&LEVEL_BANDS, rarity, self.level_fraction)
    }
}

/// Material picks of a recipe; the quantity comes from the tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraftingRoll {
    pub picks: Vec<String>,
}

impl CraftingRoll {
    /// Draws `min..=max` materials; with `liquid`, a third of the draws become
    /// `pure_water`.
    pub fn sample(
        lexicon: &Lexicon,
        min: usize,
        max: usize,
        liquid: bool,
        rng: &mut StdRng,
    ) -> ItemForgeResult<Self> {
        let count = rng.gen_range(min..=max);
        let mut picks = Vec::with_capacity(count);
        for _ in 0..count {
            let mut material = pick(&lexicon.crafting_materials, "crafting_materials", rng)?.clone();
            if liquid && material != "pure_water" && rng.gen_bool(0.33) {
                material = "pure_water".to_string();
            }
            picks.push(material);
        }
        Ok(Self { picks })
    }

    pub fn recipe(&self, id: &str, rarity: Rarity) -> Crafting {
        let quantity = 1 + rarity.tier() as u32 / 2;
        let materials: BTreeMap<String, u32> = self
            .picks
            .iter()
            .map(|material| (material.clone(), quantity))
            .collect();
        Crafting {
            recipe_id: recipe_id(id),
            materials,
        }
    }
}

/// Rarity-independent part of the special effects of a piece of equipment.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectRoll {
    /// Below 0.33 the item gets an effect even when it is not rare
    pub proc: f64,
    pub kinds: [SpecialEffectKind; 2],
    pub durations: [u32; 2],
}

impl EffectRoll {
    pub fn sample(lexicon: &Lexicon, rng: &mut StdRng) -> ItemForgeResult<Self> {
        let proc = rng.gen();
        let first = *pick(&lexicon.special_effects, "special_effects", rng)?;
        let second = *pick(&lexicon.special_effects, "special_effects", rng)?;
        Ok(Self {
            proc,
            kinds: [first, second],
            durations: [rng.gen_range(3..=6), rng.gen_range(3..=6)],
        })
    }

    /// One effect with 33% chance or from rare up, a second from epic up.
    pub fn effects(&self, rarity: Rarity) -> Vec<SpecialEffect> {
        if self.proc >= 0.33 && !rarity.is_premium() {
            return Vec::new();
        }
        let count = if rarity.is_exalted() { 2 } else { 1 };
        let magnitude = (5.0 * rarity.multiplier()) as u32;

        self.kinds
            .iter()
            .zip(self.durations)
            .take(count)
            .map(|(&kind, duration_secs)| match kind.shape() {
                EffectShape::OnHit => SpecialEffect::OnHit {
                    kind,
                    chance_pct: 10 + magnitude,
                    duration_secs,
                },
                EffectShape::Percent => SpecialEffect::Percent {
                    kind,
                    bonus_pct: 5 + magnitude,
                },
                EffectShape::Flag => SpecialEffect::Flag(kind),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_band_value_stays_in_band() {
        for rarity in Rarity::ALL {
            let (low, high) = LEVEL_BANDS[rarity.tier()];
            assert_eq!(band_value(&LEVEL_BANDS, rarity, 0.0), low);
            assert_eq!(band_value(&LEVEL_BANDS, rarity, 0.999_999), high);
            assert_eq!(band_value(&LEVEL_BANDS, rarity, 1.0), high);
        }
    }

    #[test]
    fn test_gold_value_interpolates_by_tier() {
        assert_eq!(gold_value(Rarity::Common, 100, 900, 0), 100);
        assert_eq!(gold_value(Rarity::Rare, 100, 900, 0), 500);
        assert_eq!(gold_value(Rarity::Legendary, 100, 900, 7), 907);
    }

    #[test]
    fn test_stat_bonus_follows_multiplier() {
        let bonuses: Vec<u32> = Rarity::ALL.into_iter().map(stat_bonus).collect();
        assert_eq!(bonuses, vec![1, 2, 2, 4, 6]);
        assert_eq!(scaled(10, Rarity::Uncommon), 15);
        // halves go to the even neighbour
        assert_eq!(scaled(11, Rarity::Uncommon), 16);
        assert_eq!(scaled(13, Rarity::Rare), 32);
        assert_eq!(scaled(15, Rarity::Rare), 38);
    }

    #[test]
    fn test_shops_switch_to_premium_from_rare() {
        let lexicon = Lexicon::standard();
        assert_eq!(
            shops_for(&lexicon, Category::Consumable, Rarity::Common),
            vec![ShopKind::GeneralStore, ShopKind::Alchemist]
        );
        assert_eq!(
            shops_for(&lexicon, Category::Consumable, Rarity::Epic),
            vec![ShopKind::Alchemist, ShopKind::RareGoods]
        );
        assert!(!shops_for(&lexicon, Category::Material, Rarity::Rare).is_empty());
    }

    #[test]
    fn test_recipe_quantity_grows_with_tier() {
        let roll = CraftingRoll {
            picks: vec!["iron_ingot".to_string(), "oak_wood".to_string()],
        };
        let common = roll.recipe("iron_sword", Rarity::Common);
        let legendary = roll.recipe("iron_sword", Rarity::Legendary);
        assert_eq!(common.recipe_id, "rcp_iron_sword");
        assert_eq!(common.materials["iron_ingot"], 1);
        assert_eq!(legendary.materials["oak_wood"], 3);
    }

    #[test]
    fn test_crafting_roll_respects_bounds() -> ItemForgeResult<()> {
        let lexicon = Lexicon::standard();
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..50 {
            let roll = CraftingRoll::sample(&lexicon, 2, 4, false, &mut rng)?;
            assert!((2..=4).contains(&roll.picks.len()));
            assert!(roll
                .picks
                .iter()
                .all(|pick| lexicon.crafting_materials.contains(pick)));
        }
        Ok(())
    }

    #[test]
    fn test_effect_counts_by_tier() {
        let roll = EffectRoll {
            proc: 0.9,
            kinds: [SpecialEffectKind::BurnOnHit, SpecialEffectKind::SpellFocus],
            durations: [4, 5],
        };
        assert!(roll.effects(Rarity::Common).is_empty());
        assert_eq!(roll.effects(Rarity::Rare).len(), 1);

        let legendary = roll.effects(Rarity::Legendary);
        assert_eq!(legendary.len(), 2);
        assert_eq!(legendary[0].to_string(), "burn_on_hit:42%:4s");
        assert_eq!(legendary[1].to_string(), "clarity:spell_focus:37%");

        let lucky = EffectRoll { proc: 0.1, ..roll };
        assert_eq!(lucky.effects(Rarity::Common).len(), 1);
    }
}

//! # Supply Records
//!
//! Consumables and raw crafting materials.

use super::{Crafting, ItemBase};
use crate::{Ability, ConsumableEffectKind, ShopKind, SourceKind};
use serde::{Deserialize, Serialize};

/// Change applied to each of the eight character stats. Every key is always
/// present; untouched stats stay at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsAffected {
    pub health: u32,
    pub mana: u32,
    pub strength: u32,
    pub dexterity: u32,
    pub constitution: u32,
    pub intelligence: u32,
    pub wisdom: u32,
    pub charisma: u32,
}

impl StatsAffected {
    /// Names of the affected-stat keys in document order.
    pub const KEYS: [&'static str; 8] = [
        "health",
        "mana",
        "strength",
        "dexterity",
        "constitution",
        "intelligence",
        "wisdom",
        "charisma",
    ];

    pub fn set_ability(&mut self, ability: Ability, amount: u32) {
        let slot = match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Constitution => &mut self.constitution,
            Ability::Intelligence => &mut self.intelligence,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Charisma => &mut self.charisma,
        };
        *slot = amount;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumableEffect {
    #[serde(rename = "type")]
    pub kind: ConsumableEffectKind,
    pub value: u32,
    /// Seconds; zero for instant effects
    pub duration: u32,
    pub instant: bool,
    pub stats_affected: StatsAffected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consumable {
    #[serde(flatten)]
    pub base: ItemBase,
    pub consumable_type: String,
    pub effect: ConsumableEffect,
    pub stack_size: u32,
    pub crafting: Crafting,
    pub shop_availability: Vec<ShopKind>,
    pub description: String,
}

/// One way of obtaining a material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSource {
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub source_id: String,
    /// Units per hour for territory income, otherwise zero
    pub rate_per_hour: f64,
    /// Percent drop chance for dungeon drops, otherwise zero
    pub drop_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    #[serde(flatten)]
    pub base: ItemBase,
    pub material_type: String,
    pub stack_size: u32,
    pub sources: Vec<MaterialSource>,
    pub description: String,
}

//! # Equipment Records
//!
//! Weapons, armor suits and accessories.

use super::{Crafting, ItemBase, SpecialEffect};
use crate::{Ability, ShopKind};
use serde::{Deserialize, Serialize};

/// Bonus to each of the six abilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityBonuses {
    pub strength_bonus: u32,
    pub dexterity_bonus: u32,
    pub constitution_bonus: u32,
    pub intelligence_bonus: u32,
    pub wisdom_bonus: u32,
    pub charisma_bonus: u32,
}

impl AbilityBonuses {
    pub fn get(&self, ability: Ability) -> u32 {
        match ability {
            Ability::Strength => self.strength_bonus,
            Ability::Dexterity => self.dexterity_bonus,
            Ability::Constitution => self.constitution_bonus,
            Ability::Intelligence => self.intelligence_bonus,
            Ability::Wisdom => self.wisdom_bonus,
            Ability::Charisma => self.charisma_bonus,
        }
    }

    pub fn set(&mut self, ability: Ability, bonus: u32) {
        let slot = match ability {
            Ability::Strength => &mut self.strength_bonus,
            Ability::Dexterity => &mut self.dexterity_bonus,
            Ability::Constitution => &mut self.constitution_bonus,
            Ability::Intelligence => &mut self.intelligence_bonus,
            Ability::Wisdom => &mut self.wisdom_bonus,
            Ability::Charisma => &mut self.charisma_bonus,
        };
        *slot = bonus;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub attack: u32,
    #[serde(flatten)]
    pub bonuses: AbilityBonuses,
    /// Percent chance to crit
    pub critical_chance: u32,
    /// Crit damage in percent of a normal hit
    pub critical_damage: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    #[serde(flatten)]
    pub base: ItemBase,
    pub weapon_type: String,
    pub level_requirement: u32,
    pub stats: WeaponStats,
    pub special_effects: Vec<SpecialEffect>,
    pub durability: u32,
    pub crafting: Crafting,
    pub shop_availability: Vec<ShopKind>,
}

/// Percent resistance per element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementalResistance {
    pub fire: u32,
    pub ice: u32,
    pub lightning: u32,
    pub poison: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorStats {
    pub defense: u32,
    pub armor_class_bonus: u32,
    #[serde(flatten)]
    pub bonuses: AbilityBonuses,
    pub elemental_resistance: ElementalResistance,
}

/// A full armor suit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    #[serde(flatten)]
    pub base: ItemBase,
    /// Always `suit`; pieces for other slots are not generated
    pub armor_type: String,
    /// light, medium or heavy
    pub weight_class: String,
    pub level_requirement: u32,
    pub stats: ArmorStats,
    pub special_effects: Vec<SpecialEffect>,
    pub durability: u32,
    pub crafting: Crafting,
    pub shop_availability: Vec<ShopKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryStats {
    #[serde(flatten)]
    pub bonuses: AbilityBonuses,
    pub mana_regeneration: u32,
    pub health_regeneration: u32,
    /// Percent bonus experience, zero below rare
    pub experience_bonus: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessory {
    #[serde(flatten)]
    pub base: ItemBase,
    pub accessory_type: String,
    pub level_requirement: u32,
    pub stats: AccessoryStats,
    pub special_effects: Vec<SpecialEffect>,
    pub durability: u32,
    pub crafting: Crafting,
    pub shop_availability: Vec<ShopKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_bonuses_set_and_get() {
        let mut bonuses = AbilityBonuses::default();
        for (value, ability) in Ability::ALL.into_iter().enumerate() {
            bonuses.set(ability, value as u32 + 1);
        }
        assert_eq!(bonuses.get(Ability::Strength), 1);
        assert_eq!(bonuses.get(Ability::Charisma), 6);
    }

    #[test]
    fn test_weapon_stats_flatten_bonuses() {
        let stats = WeaponStats {
            attack: 14,
            bonuses: AbilityBonuses {
                strength_bonus: 2,
                ..AbilityBonuses::default()
            },
            critical_chance: 5,
            critical_damage: 135,
        };
        let value = serde_json::to_value(stats).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 9);
        assert_eq!(value["strength_bonus"], 2);
        assert_eq!(value["charisma_bonus"], 0);
    }
}

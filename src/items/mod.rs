//! # Item Records
//!
//! The catalog schema: one record type per category, tagged by the `type`
//! field in the serialized document.
//!
//! All records share an [`ItemBase`] (id, name, rarity, value, image). The
//! category specific parts live in [`equipment`] (weapons, armor, accessories)
//! and [`supplies`] (consumables, crafting materials).

pub mod effects;
pub mod equipment;
pub mod supplies;

pub use effects::*;
pub use equipment::*;
pub use supplies::*;

use crate::{config, Category, Rarity, ShopKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fields every catalog item carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemBase {
    /// Catalog-unique snake_case key derived from `name`
    pub id: String,
    /// Human readable display name
    pub name: String,
    pub rarity: Rarity,
    /// Shop price in gold
    pub value: u32,
    /// Engine resource path of the item texture
    pub image: String,
}

impl ItemBase {
    /// Creates the shared fields, deriving the texture path from the category.
    pub fn new(category: Category, id: &str, name: &str, rarity: Rarity, value: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            rarity,
            value,
            image: image_path(category, id),
        }
    }
}

/// Recipe for crafting an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crafting {
    pub recipe_id: String,
    /// Material id to quantity; ids are references, not owned records
    pub materials: BTreeMap<String, u32>,
}

/// A generated catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Item {
    #[serde(rename = "weapon")]
    Weapon(Weapon),
    #[serde(rename = "armor")]
    Armor(Armor),
    #[serde(rename = "accessory")]
    Accessory(Accessory),
    #[serde(rename = "consumable")]
    Consumable(Consumable),
    #[serde(rename = "crafting_material")]
    Material(Material),
}

impl Item {
    pub fn base(&self) -> &ItemBase {
        match self {
            Item::Weapon(item) => &item.base,
            Item::Armor(item) => &item.base,
            Item::Accessory(item) => &item.base,
            Item::Consumable(item) => &item.base,
            Item::Material(item) => &item.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn rarity(&self) -> Rarity {
        self.base().rarity
    }

    pub fn category(&self) -> Category {
        match self {
            Item::Weapon(_) => Category::Weapon,
            Item::Armor(_) => Category::Armor,
            Item::Accessory(_) => Category::Accessory,
            Item::Consumable(_) => Category::Consumable,
            Item::Material(_) => Category::Material,
        }
    }

    /// Crafting recipe, for every category except raw materials.
    pub fn crafting(&self) -> Option<&Crafting> {
        match self {
            Item::Weapon(item) => Some(&item.crafting),
            Item::Armor(item) => Some(&item.crafting),
            Item::Accessory(item) => Some(&item.crafting),
            Item::Consumable(item) => Some(&item.crafting),
            Item::Material(_) => None,
        }
    }

    /// Shops stocking the item; materials come from sources instead.
    pub fn shop_availability(&self) -> Option<&[ShopKind]> {
        match self {
            Item::Weapon(item) => Some(&item.shop_availability),
            Item::Armor(item) => Some(&item.shop_availability),
            Item::Accessory(item) => Some(&item.shop_availability),
            Item::Consumable(item) => Some(&item.shop_availability),
            Item::Material(_) => None,
        }
    }

    /// Special effects of equipment; empty for everything else.
    pub fn special_effects(&self) -> &[SpecialEffect] {
        match self {
            Item::Weapon(item) => &item.special_effects,
            Item::Armor(item) => &item.special_effects,
            Item::Accessory(item) => &item.special_effects,
            Item::Consumable(_) | Item::Material(_) => &[],
        }
    }

    pub fn stack_size(&self) -> Option<u32> {
        match self {
            Item::Consumable(item) => Some(item.stack_size),
            Item::Material(item) => Some(item.stack_size),
            _ => None,
        }
    }
}

/// Texture path of an item: `res://assets/textures/<folder>/<id>.png`.
///
/// # Examples
///
/// ```
/// use itemforge::{image_path, Category};
///
/// assert_eq!(
///     image_path(Category::Weapon, "iron_sword"),
///     "res://assets/textures/weapons/iron_sword.png"
/// );
/// ```
pub fn image_path(category: Category, id: &str) -> String {
    format!("{}/{}/{}.png", config::TEXTURE_ROOT, category.folder(), id)
}

/// Recipe id of an item.
pub fn recipe_id(id: &str) -> String {
    format!("{}{}", config::RECIPE_PREFIX, id)
}

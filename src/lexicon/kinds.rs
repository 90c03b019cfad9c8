//! # Closed Vocabularies
//!
//! Every label that ends up in a catalog and is not free text is one of the
//! enums below. Lexicons may only reference these variants, so an unknown shop
//! or effect label is rejected when the lexicon is loaded rather than leaking
//! into generated items. New labels are added here, as new variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five top-level item kinds of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Weapon,
    Armor,
    Accessory,
    Consumable,
    Material,
}

impl Category {
    /// All categories in catalog order.
    pub const ALL: [Category; 5] = [
        Category::Weapon,
        Category::Armor,
        Category::Accessory,
        Category::Consumable,
        Category::Material,
    ];

    /// Plural name used both as the catalog array key and as the texture folder.
    ///
    /// # Examples
    ///
    /// ```
    /// use itemforge::Category;
    ///
    /// assert_eq!(Category::Accessory.folder(), "accessories");
    /// assert_eq!(Category::Armor.folder(), "armor");
    /// ```
    pub fn folder(self) -> &'static str {
        match self {
            Category::Weapon => "weapons",
            Category::Armor => "armor",
            Category::Accessory => "accessories",
            Category::Consumable => "consumables",
            Category::Material => "materials",
        }
    }

    /// Value of the `type` field on items of this category.
    pub fn type_tag(self) -> &'static str {
        match self {
            Category::Weapon => "weapon",
            Category::Armor => "armor",
            Category::Accessory => "accessory",
            Category::Consumable => "consumable",
            Category::Material => "crafting_material",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.folder())
    }
}

/// Shops an item can be bought from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopKind {
    Blacksmith,
    GeneralStore,
    MagicShop,
    Alchemist,
    RareGoods,
    HuntersGuild,
    DungeonMerchant,
}

impl ShopKind {
    pub const ALL: [ShopKind; 7] = [
        ShopKind::Blacksmith,
        ShopKind::GeneralStore,
        ShopKind::MagicShop,
        ShopKind::Alchemist,
        ShopKind::RareGoods,
        ShopKind::HuntersGuild,
        ShopKind::DungeonMerchant,
    ];

    /// Wire name of the shop, as used for material source ids.
    pub fn as_str(self) -> &'static str {
        match self {
            ShopKind::Blacksmith => "blacksmith",
            ShopKind::GeneralStore => "general_store",
            ShopKind::MagicShop => "magic_shop",
            ShopKind::Alchemist => "alchemist",
            ShopKind::RareGoods => "rare_goods",
            ShopKind::HuntersGuild => "hunters_guild",
            ShopKind::DungeonMerchant => "dungeon_merchant",
        }
    }
}

/// Damage elements used by resistances and affinities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Fire,
    Ice,
    Lightning,
    Poison,
}

/// The six character abilities that items can boost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];
}

/// What drinking or eating a consumable does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsumableEffectKind {
    Heal,
    ManaRestore,
    StatBoost,
    SpeedBoost,
}

/// Where a crafting material comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    TerritoryIncome,
    Shop,
    DungeonDrop,
}

/// How a special effect carries its magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectShape {
    /// Proc chance plus a duration in seconds
    OnHit,
    /// A single percentage bonus
    Percent,
    /// No magnitude at all
    Flag,
}

/// Known special effects for equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialEffectKind {
    BleedOnHit,
    BurnOnHit,
    FreezeOnHit,
    ShockOnHit,
    ManaLeech,
    LifeLeech,
    BackstabBonus,
    ParryWindow,
    FireAffinity,
    IceAffinity,
    LightningAffinity,
    SpellFocus,
    FrostAura,
    FearAura,
    Thorns,
    RegenOverTime,
    DashCooldownReduction,
    CritChain,
    LightningChain,
}

impl SpecialEffectKind {
    pub const ALL: [SpecialEffectKind; 19] = [
        SpecialEffectKind::BleedOnHit,
        SpecialEffectKind::BurnOnHit,
        SpecialEffectKind::FreezeOnHit,
        SpecialEffectKind::ShockOnHit,
        SpecialEffectKind::ManaLeech,
        SpecialEffectKind::LifeLeech,
        SpecialEffectKind::BackstabBonus,
        SpecialEffectKind::ParryWindow,
        SpecialEffectKind::FireAffinity,
        SpecialEffectKind::IceAffinity,
        SpecialEffectKind::LightningAffinity,
        SpecialEffectKind::SpellFocus,
        SpecialEffectKind::FrostAura,
        SpecialEffectKind::FearAura,
        SpecialEffectKind::Thorns,
        SpecialEffectKind::RegenOverTime,
        SpecialEffectKind::DashCooldownReduction,
        SpecialEffectKind::CritChain,
        SpecialEffectKind::LightningChain,
    ];

    /// Label written before any magnitude in the item document.
    pub fn label(self) -> &'static str {
        match self {
            SpecialEffectKind::BleedOnHit => "bleed_on_hit",
            SpecialEffectKind::BurnOnHit => "burn_on_hit",
            SpecialEffectKind::FreezeOnHit => "freeze_on_hit",
            SpecialEffectKind::ShockOnHit => "shock_on_hit",
            SpecialEffectKind::ManaLeech => "mana_leech",
            SpecialEffectKind::LifeLeech => "life_leech",
            SpecialEffectKind::BackstabBonus => "backstab_bonus",
            SpecialEffectKind::ParryWindow => "parry_window",
            SpecialEffectKind::FireAffinity => "elemental_affinity:fire",
            SpecialEffectKind::IceAffinity => "elemental_affinity:ice",
            SpecialEffectKind::LightningAffinity => "elemental_affinity:lightning",
            SpecialEffectKind::SpellFocus => "clarity:spell_focus",
            SpecialEffectKind::FrostAura => "frost_aura",
            SpecialEffectKind::FearAura => "fear_aura",
            SpecialEffectKind::Thorns => "thorns",
            SpecialEffectKind::RegenOverTime => "regen_over_time",
            SpecialEffectKind::DashCooldownReduction => "dash_cooldown_reduction",
            SpecialEffectKind::CritChain => "crit_chain",
            SpecialEffectKind::LightningChain => "lightning_chain",
        }
    }

    pub fn shape(self) -> EffectShape {
        match self {
            SpecialEffectKind::BleedOnHit
            | SpecialEffectKind::BurnOnHit
            | SpecialEffectKind::FreezeOnHit
            | SpecialEffectKind::ShockOnHit => EffectShape::OnHit,
            SpecialEffectKind::FireAffinity
            | SpecialEffectKind::IceAffinity
            | SpecialEffectKind::LightningAffinity
            | SpecialEffectKind::SpellFocus => EffectShape::Percent,
            _ => EffectShape::Flag,
        }
    }
}

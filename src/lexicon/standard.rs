//! # Standard Lexicon
//!
//! The word pools shipped with the crate. Noun pools are disjoint across
//! categories; `Lexicon::validate` keeps it that way when they are edited.

use super::{
    Ability, CategoryLexicon, ConsumableEffectKind, EffectWord, Lexicon, NounEntry, ShopKind,
    ShopRoute, ShopRoutes, SpecialEffectKind,
};

const EQUIPMENT_ADJECTIVES: &[&str] = &[
    "Iron", "Steel", "Shadow", "Storm", "Ember", "Frost", "Moon", "Sun", "Dragon", "Raven",
    "Phoenix", "Crystal", "Obsidian", "Silver", "Golden", "Void", "Arcane", "Whisper", "Glacier",
    "Oak", "Sunsteel", "Thorn", "Ashen", "Runed", "Gilded", "Hallowed", "Cinder", "Tempest",
    "Twilight", "Verdant",
];

const EXALTED_ADJECTIVES: &[&str] = &[
    "Mythic", "Eternal", "Godforged", "Celestial", "Starforged", "Abyssal",
];

const WEAPON_ADJECTIVES: &[&str] = &["Keen", "Jagged", "Serrated", "Tempered"];
const ARMOR_ADJECTIVES: &[&str] = &["Reinforced", "Riveted", "Lacquered", "Burnished"];
const ACCESSORY_ADJECTIVES: &[&str] = &["Etched", "Jeweled", "Whispering", "Braided"];

const WEAPON_NOUNS: &[(&str, &str)] = &[
    ("Sword", "sword"),
    ("Blade", "sword"),
    ("Saber", "sword"),
    ("Cutlass", "sword"),
    ("Claymore", "sword"),
    ("Axe", "axe"),
    ("Waraxe", "axe"),
    ("Mace", "mace"),
    ("Hammer", "mace"),
    ("Maul", "mace"),
    ("Dagger", "dagger"),
    ("Dirk", "dagger"),
    ("Spear", "spear"),
    ("Halberd", "polearm"),
    ("Glaive", "polearm"),
    ("Lance", "lance"),
    ("Bow", "bow"),
    ("Crossbow", "crossbow"),
    ("Staff", "staff"),
    ("Scythe", "scythe"),
];

// Armor nouns are full suits; the kind is the suit's weight class.
const ARMOR_NOUNS: &[(&str, &str)] = &[
    ("Armor", "medium"),
    ("Mail", "medium"),
    ("Plate Armor", "heavy"),
    ("Scale Armor", "medium"),
    ("Brigandine", "medium"),
    ("Leather Armor", "light"),
    ("Chainmail", "medium"),
    ("Dragonscale Armor", "heavy"),
    ("Battle Armor", "heavy"),
    ("War Armor", "heavy"),
    ("Hauberk", "medium"),
    ("Cuirass", "heavy"),
    ("Jerkin", "light"),
    ("Gambeson", "light"),
];

const ACCESSORY_NOUNS: &[(&str, &str)] = &[
    ("Ring", "ring"),
    ("Signet", "ring"),
    ("Amulet", "amulet"),
    ("Charm", "charm"),
    ("Band", "band"),
    ("Brooch", "brooch"),
    ("Talisman", "talisman"),
    ("Circlet", "circlet"),
    ("Pendant", "pendant"),
    ("Bracelet", "bracelet"),
    ("Anklet", "anklet"),
    ("Sash", "sash"),
    ("Torc", "torc"),
];

const CONSUMABLE_ADJECTIVES: &[&str] = &[
    "Minor",
    "Lesser",
    "Greater",
    "Superior",
    "Grand",
    "Bubbling",
    "Fizzing",
    "Murky",
    "Radiant",
    "Concentrated",
    "Distilled",
    "Potent",
    "Sparkling",
    "Chilled",
];

const CONSUMABLE_NOUNS: &[(&str, &str)] = &[
    ("Potion", "potion"),
    ("Elixir", "elixir"),
    ("Draught", "draught"),
    ("Tonic", "tonic"),
    ("Philter", "philter"),
    ("Brew", "brew"),
];

const CONSUMABLE_EFFECTS: &[(&str, ConsumableEffectKind, Option<Ability>)] = &[
    ("Health", ConsumableEffectKind::Heal, None),
    ("Vitality", ConsumableEffectKind::Heal, None),
    ("Mana", ConsumableEffectKind::ManaRestore, None),
    ("Focus", ConsumableEffectKind::ManaRestore, None),
    ("Strength", ConsumableEffectKind::StatBoost, Some(Ability::Strength)),
    ("Dexterity", ConsumableEffectKind::StatBoost, Some(Ability::Dexterity)),
    ("Constitution", ConsumableEffectKind::StatBoost, Some(Ability::Constitution)),
    ("Intelligence", ConsumableEffectKind::StatBoost, Some(Ability::Intelligence)),
    ("Wisdom", ConsumableEffectKind::StatBoost, Some(Ability::Wisdom)),
    ("Charisma", ConsumableEffectKind::StatBoost, Some(Ability::Charisma)),
    ("Swiftness", ConsumableEffectKind::SpeedBoost, None),
    ("Haste", ConsumableEffectKind::SpeedBoost, None),
];

const MATERIAL_ADJECTIVES: &[&str] = &[
    "Iron", "Steel", "Shadow", "Storm", "Ember", "Frost", "Moon", "Sun", "Dragon", "Raven",
    "Phoenix", "Crystal", "Obsidian", "Silver", "Golden", "Void", "Arcane", "Whisper", "Glacier",
    "Oak", "Sunsteel", "Mithril", "Copper", "Wyrm",
];

const MATERIAL_NOUNS: &[(&str, &str)] = &[
    ("Ingot", "metal"),
    ("Bar", "metal"),
    ("Ore", "metal"),
    ("Nugget", "metal"),
    ("Shard", "gem"),
    ("Gem", "gem"),
    ("Geode", "stone"),
    ("Slab", "stone"),
    ("Thread", "cloth"),
    ("Fiber", "cloth"),
    ("Silk", "cloth"),
    ("Heartwood", "wood"),
    ("Timber", "wood"),
    ("Plank", "wood"),
    ("Resin", "wood"),
    ("Pelt", "leather"),
    ("Hide", "leather"),
    ("Bone", "bone"),
    ("Fang", "bone"),
    ("Feather", "bone"),
    ("Herb", "herb"),
    ("Blossom", "herb"),
    ("Root", "herb"),
    ("Seed", "herb"),
    ("Essence", "essence"),
    ("Core", "essence"),
    ("Powder", "essence"),
];

const CRAFTING_MATERIALS: &[&str] = &[
    "iron_ingot",
    "steel_ingot",
    "leather_strip",
    "oak_wood",
    "obsidian_shard",
    "ember_crystal",
    "arcane_thread",
    "moonshade_fabric",
    "vitality_herb",
    "frost_core",
    "storm_essence",
    "sunsteel_ingot",
    "drakescale",
    "pure_water",
    "healing_herb",
    "luminescent_moss",
    "crystal_shard",
    "runed_stone",
    "ghost_essence",
    "phoenix_feather",
];

const TERRITORY_SOURCES: &[&str] = &[
    "verdant_lands_mines",
    "forest_logging_camps",
    "tannery",
    "crystal_cavern",
    "ashmire_deep",
    "ember_hollows",
];

const DUNGEON_SOURCES: &[&str] = &["ember_hollows", "ashmire_deep", "moonlit_keep", "glacier_pass"];

const MATERIAL_DESCRIPTIONS: &[&str] = &[
    "A bar of smelted stock, sturdy and ubiquitous.",
    "Highly sought for advanced recipes.",
    "Flickers with latent energy.",
    "Seasoned resource prized by artisans.",
    "Conductive material suited for runework.",
];

fn words(pool: &[&str]) -> Vec<String> {
    pool.iter().map(|word| word.to_string()).collect()
}

fn nouns(pool: &[(&str, &str)]) -> Vec<NounEntry> {
    pool.iter()
        .map(|(word, kind)| NounEntry::new(*word, *kind))
        .collect()
}

fn equipment(extra: &[&str], pool: &[(&str, &str)]) -> CategoryLexicon {
    let mut adjectives = words(EQUIPMENT_ADJECTIVES);
    adjectives.extend(words(extra));
    CategoryLexicon {
        nouns: nouns(pool),
        adjectives,
        exalted_adjectives: words(EXALTED_ADJECTIVES),
    }
}

fn route(standard: &[ShopKind], premium: &[ShopKind]) -> ShopRoute {
    ShopRoute {
        standard: standard.to_vec(),
        premium: premium.to_vec(),
    }
}

impl Lexicon {
    /// The lexicon shipped with the crate.
    ///
    /// # Examples
    ///
    /// ```
    /// use itemforge::{Category, Lexicon};
    ///
    /// let lexicon = Lexicon::standard();
    /// assert!(lexicon.validate().is_ok());
    /// assert!(lexicon.capacity(Category::Weapon) >= 200);
    /// ```
    pub fn standard() -> Self {
        use ShopKind::*;

        Self {
            weapons: equipment(WEAPON_ADJECTIVES, WEAPON_NOUNS),
            armor: equipment(ARMOR_ADJECTIVES, ARMOR_NOUNS),
            accessories: equipment(ACCESSORY_ADJECTIVES, ACCESSORY_NOUNS),
            consumables: CategoryLexicon {
                nouns: nouns(CONSUMABLE_NOUNS),
                adjectives: words(CONSUMABLE_ADJECTIVES),
                exalted_adjectives: Vec::new(),
            },
            materials: CategoryLexicon {
                nouns: nouns(MATERIAL_NOUNS),
                adjectives: words(MATERIAL_ADJECTIVES),
                exalted_adjectives: Vec::new(),
            },
            consumable_effects: CONSUMABLE_EFFECTS
                .iter()
                .map(|(word, kind, ability)| EffectWord {
                    word: word.to_string(),
                    kind: *kind,
                    ability: *ability,
                })
                .collect(),
            special_effects: SpecialEffectKind::ALL.to_vec(),
            crafting_materials: words(CRAFTING_MATERIALS),
            shop_routes: ShopRoutes {
                weapons: route(&[Blacksmith, GeneralStore], &[Blacksmith, RareGoods]),
                armor: route(&[GeneralStore, Blacksmith], &[Blacksmith, RareGoods]),
                accessories: route(&[GeneralStore, MagicShop], &[MagicShop, RareGoods]),
                consumables: route(&[GeneralStore, Alchemist], &[Alchemist, RareGoods]),
            },
            material_shops: vec![Blacksmith, GeneralStore, Alchemist, RareGoods, HuntersGuild],
            territory_sources: words(TERRITORY_SOURCES),
            dungeon_sources: words(DUNGEON_SOURCES),
            material_descriptions: words(MATERIAL_DESCRIPTIONS),
        }
    }
}

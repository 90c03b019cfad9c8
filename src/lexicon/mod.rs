//! # Lexicon Module
//!
//! Static word pools and label tables that drive item generation.
//!
//! A [`Lexicon`] is configuration rather than code: the standard tables ship with
//! the crate, but any lexicon can be loaded from JSON. Either way it has to pass
//! [`Lexicon::validate`] before generation, which enforces the authoring rules
//! the rest of the pipeline relies on (most importantly, that noun pools of
//! different categories never share a word).

pub mod kinds;
pub mod standard;

pub use kinds::*;

use crate::{ItemForgeError, ItemForgeResult};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A category noun and the subtype it implies (`Claymore` implies `sword`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NounEntry {
    pub word: String,
    pub kind: String,
}

impl NounEntry {
    pub fn new(word: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            kind: kind.into(),
        }
    }
}

/// Word pools for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLexicon {
    pub nouns: Vec<NounEntry>,
    pub adjectives: Vec<String>,
    /// Extra adjectives only available to epic and legendary items
    #[serde(default)]
    pub exalted_adjectives: Vec<String>,
}

/// A consumable effect word (`Health`, `Strength`) and what it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectWord {
    pub word: String,
    pub kind: ConsumableEffectKind,
    /// Boosted ability, required for stat boosts
    #[serde(default)]
    pub ability: Option<Ability>,
}

/// Shops that stock a category, split by rarity band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopRoute {
    /// Common and uncommon items
    pub standard: Vec<ShopKind>,
    /// Rare and better
    pub premium: Vec<ShopKind>,
}

/// Shop routing for every category sold in shops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopRoutes {
    pub weapons: ShopRoute,
    pub armor: ShopRoute,
    pub accessories: ShopRoute,
    pub consumables: ShopRoute,
}

/// The complete set of tables consumed by the generation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    pub weapons: CategoryLexicon,
    pub armor: CategoryLexicon,
    pub accessories: CategoryLexicon,
    pub consumables: CategoryLexicon,
    pub materials: CategoryLexicon,
    pub consumable_effects: Vec<EffectWord>,
    pub special_effects: Vec<SpecialEffectKind>,
    /// Ids that crafting recipes may reference
    pub crafting_materials: Vec<String>,
    pub shop_routes: ShopRoutes,
    pub material_shops: Vec<ShopKind>,
    pub territory_sources: Vec<String>,
    pub dungeon_sources: Vec<String>,
    pub material_descriptions: Vec<String>,
}

impl Lexicon {
    /// Parses a lexicon from JSON and checks it.
    pub fn from_json_str(json: &str) -> ItemForgeResult<Self> {
        let lexicon: Lexicon = serde_json::from_str(json)?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Word pools of a category.
    pub fn category(&self, category: Category) -> &CategoryLexicon {
        match category {
            Category::Weapon => &self.weapons,
            Category::Armor => &self.armor,
            Category::Accessory => &self.accessories,
            Category::Consumable => &self.consumables,
            Category::Material => &self.materials,
        }
    }

    /// Shop routing of a category; materials are not sold through routes.
    pub fn shop_route(&self, category: Category) -> Option<&ShopRoute> {
        match category {
            Category::Weapon => Some(&self.shop_routes.weapons),
            Category::Armor => Some(&self.shop_routes.armor),
            Category::Accessory => Some(&self.shop_routes.accessories),
            Category::Consumable => Some(&self.shop_routes.consumables),
            Category::Material => None,
        }
    }

    /// Number of distinct names the synthesizer can realize for a category.
    ///
    /// # Examples
    ///
    /// ```
    /// use itemforge::{Category, Lexicon};
    ///
    /// let lexicon = Lexicon::standard();
    /// let weapons = lexicon.category(Category::Weapon);
    /// let expected = (weapons.adjectives.len() + weapons.exalted_adjectives.len())
    ///     * weapons.nouns.len();
    /// assert_eq!(lexicon.capacity(Category::Weapon), expected);
    /// ```
    pub fn capacity(&self, category: Category) -> usize {
        let pools = self.category(category);
        let adjectives = pools.adjectives.len() + pools.exalted_adjectives.len();
        let names = adjectives * pools.nouns.len();
        match category {
            Category::Consumable => names * self.consumable_effects.len(),
            _ => names,
        }
    }

    /// Finds the noun of `category` that occurs as a whole word in `name`.
    ///
    /// Longer phrases win over shorter ones, so `Iron Plate Armor` resolves to
    /// `Plate Armor` rather than `Armor`.
    pub fn find_noun(&self, category: Category, name: &str) -> Option<&NounEntry> {
        let tokens = word_tokens(name);
        self.category(category)
            .nouns
            .iter()
            .filter(|noun| contains_phrase(&tokens, &word_tokens(&noun.word)))
            .max_by_key(|noun| word_tokens(&noun.word).len())
    }

    /// All categories whose noun pool has a whole-word match in `name`.
    pub fn categories_matching(&self, name: &str) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|&category| self.find_noun(category, name).is_some())
            .collect()
    }

    /// Checks the authoring rules of the lexicon.
    ///
    /// Noun pools must be pairwise disjoint across categories, no adjective or
    /// effect word may contain a noun of any category, and every pool the
    /// builders sample from must be non-empty.
    pub fn validate(&self) -> ItemForgeResult<()> {
        let mut owners: HashMap<Vec<String>, Category> = HashMap::new();

        for category in Category::ALL {
            let pools = self.category(category);
            if pools.nouns.is_empty() {
                return Err(invalid(format!("{} has no nouns", category)));
            }
            if pools.adjectives.is_empty() {
                return Err(invalid(format!("{} has no adjectives", category)));
            }

            for noun in &pools.nouns {
                let tokens = word_tokens(&noun.word);
                if tokens.is_empty() || noun.kind.trim().is_empty() {
                    return Err(invalid(format!("{} has a blank noun entry", category)));
                }
                if let Some(owner) = owners.insert(tokens, category) {
                    let detail = if owner == category {
                        format!("noun '{}' is listed twice in {}", noun.word, category)
                    } else {
                        format!("noun '{}' appears in both {} and {}", noun.word, owner, category)
                    };
                    return Err(invalid(detail));
                }
            }

            let mut seen = HashSet::new();
            for adjective in pools.adjectives.iter().chain(&pools.exalted_adjectives) {
                if !seen.insert(word_tokens(adjective)) {
                    return Err(invalid(format!(
                        "adjective '{}' is listed twice in {}",
                        adjective, category
                    )));
                }
            }
        }

        for (phrase, category) in &owners {
            if let Some((inner, other)) = owners
                .iter()
                .find(|(inner, other)| other != &category && contains_phrase(phrase, inner))
            {
                return Err(invalid(format!(
                    "{} noun '{}' contains the {} noun '{}'",
                    category,
                    phrase.join(" "),
                    other,
                    inner.join(" ")
                )));
            }
        }

        let modifiers = Category::ALL
            .into_iter()
            .flat_map(|category| {
                let pools = self.category(category);
                pools.adjectives.iter().chain(&pools.exalted_adjectives)
            })
            .chain(self.consumable_effects.iter().map(|effect| &effect.word));
        for word in modifiers {
            let tokens = word_tokens(word);
            if tokens.is_empty() {
                return Err(invalid("blank adjective or effect word".to_string()));
            }
            if let Some(hit) = owners.keys().find(|noun| contains_phrase(&tokens, noun)) {
                return Err(invalid(format!(
                    "modifier '{}' contains the {} noun '{}'",
                    word,
                    owners[hit],
                    hit.join(" ")
                )));
            }
        }

        if self.consumable_effects.is_empty() {
            return Err(invalid("no consumable effect words".to_string()));
        }
        if let Some(effect) = self
            .consumable_effects
            .iter()
            .find(|effect| effect.kind == ConsumableEffectKind::StatBoost && effect.ability.is_none())
        {
            return Err(invalid(format!(
                "stat boost '{}' does not name an ability",
                effect.word
            )));
        }

        let routes = [
            &self.shop_routes.weapons,
            &self.shop_routes.armor,
            &self.shop_routes.accessories,
            &self.shop_routes.consumables,
        ];
        if routes
            .iter()
            .any(|route| route.standard.is_empty() || route.premium.is_empty())
        {
            return Err(invalid("every shop route needs at least one shop".to_string()));
        }

        let flat_pools = [
            ("special_effects", self.special_effects.is_empty()),
            ("crafting_materials", self.crafting_materials.is_empty()),
            ("material_shops", self.material_shops.is_empty()),
            ("territory_sources", self.territory_sources.is_empty()),
            ("dungeon_sources", self.dungeon_sources.is_empty()),
            ("material_descriptions", self.material_descriptions.is_empty()),
        ];
        if let Some((pool, _)) = flat_pools.iter().find(|(_, empty)| *empty) {
            return Err(invalid(format!("pool '{}' is empty", pool)));
        }

        Ok(())
    }
}

fn invalid(detail: String) -> ItemForgeError {
    ItemForgeError::InvalidLexicon(detail)
}

/// Splits text into lowercase alphanumeric words, dropping apostrophes first.
///
/// # Examples
///
/// ```
/// use itemforge::word_tokens;
///
/// assert_eq!(word_tokens("Dragon's Plate-Armor"), vec!["dragons", "plate", "armor"]);
/// ```
pub fn word_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace('\'', "")
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether `phrase` occurs as a contiguous run of whole words in `tokens`.
pub fn contains_phrase(tokens: &[String], phrase: &[String]) -> bool {
    !phrase.is_empty() && tokens.windows(phrase.len()).any(|window| window == phrase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lexicon_is_valid() {
        Lexicon::standard().validate().unwrap();
    }

    #[test]
    fn test_whole_word_matching() {
        let tokens = word_tokens("Crossbow of Storms");
        assert!(contains_phrase(&tokens, &word_tokens("Crossbow")));
        assert!(!contains_phrase(&tokens, &word_tokens("Bow")));
        assert!(!contains_phrase(&tokens, &[]));
    }

    #[test]
    fn test_find_noun_prefers_longest_phrase() {
        let lexicon = Lexicon::standard();
        let noun = lexicon.find_noun(Category::Armor, "Iron Plate Armor").unwrap();
        assert_eq!(noun.word, "Plate Armor");
        assert!(lexicon.find_noun(Category::Weapon, "Iron Plate Armor").is_none());
    }

    #[test]
    fn test_silk_belongs_to_materials_only() {
        let lexicon = Lexicon::standard();
        assert_eq!(lexicon.categories_matching("Silk"), vec![Category::Material]);
    }

    #[test]
    fn test_shared_noun_is_rejected() {
        let mut lexicon = Lexicon::standard();
        lexicon.weapons.nouns.push(NounEntry::new("Silk", "whip"));
        match lexicon.validate() {
            Err(ItemForgeError::InvalidLexicon(detail)) => {
                assert!(detail.contains("Silk"), "unexpected detail: {}", detail)
            }
            other => panic!("expected InvalidLexicon, got {:?}", other),
        }
    }

    #[test]
    fn test_adjective_containing_noun_is_rejected() {
        let mut lexicon = Lexicon::standard();
        lexicon.armor.adjectives.push("Bone".to_string());
        assert!(matches!(
            lexicon.validate(),
            Err(ItemForgeError::InvalidLexicon(_))
        ));
    }

    #[test]
    fn test_stat_boost_requires_ability() {
        let mut lexicon = Lexicon::standard();
        lexicon.consumable_effects.push(EffectWord {
            word: "Vigor".to_string(),
            kind: ConsumableEffectKind::StatBoost,
            ability: None,
        });
        assert!(lexicon.validate().is_err());
    }

    #[test]
    fn test_json_round_trip_keeps_lexicon() -> ItemForgeResult<()> {
        let lexicon = Lexicon::standard();
        let json = serde_json::to_string(&lexicon)?;
        assert_eq!(Lexicon::from_json_str(&json)?, lexicon);
        Ok(())
    }

    #[test]
    fn test_unknown_shop_label_fails_to_load() {
        let lexicon = Lexicon::standard();
        let json = serde_json::to_string(&lexicon)
            .unwrap()
            .replace("\"hunters_guild\"", "\"tavern\"");
        assert!(matches!(
            Lexicon::from_json_str(&json),
            Err(ItemForgeError::Serde(_))
        ));
    }

    #[test]
    fn test_consumable_capacity_counts_effect_words() {
        let lexicon = Lexicon::standard();
        let pools = lexicon.category(Category::Consumable);
        assert_eq!(
            lexicon.capacity(Category::Consumable),
            pools.adjectives.len() * pools.nouns.len() * lexicon.consumable_effects.len()
        );
    }
}

//! # Generation Module
//!
//! The item generation pipeline, leaves first:
//!
//! - [`rarity`]: tier draw and stat multipliers
//! - [`names`]: adjective + noun display names
//! - [`identifier`]: name to id derivation and the per-run id registry
//! - [`builders`]: one record builder per category
//! - [`validator`]: independent re-check of every built item
//! - [`catalog`]: the assembler that drives everything and owns run state
//!
//! All randomness comes from one seeded [`StdRng`] created from the
//! [`GenerationConfig`], so a seed fully determines the catalog.

pub mod builders;
pub mod catalog;
pub mod identifier;
pub mod names;
pub mod rarity;
pub mod validator;

pub use builders::*;
pub use catalog::*;
pub use identifier::*;
pub use names::*;
pub use rarity::*;
pub use validator::*;

use crate::{config, Category, ItemForgeError, ItemForgeResult};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of items to generate per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub weapons: usize,
    pub armor: usize,
    pub accessories: usize,
    pub consumables: usize,
    pub materials: usize,
}

impl CategoryCounts {
    /// The same count for every category.
    pub fn uniform(count: usize) -> Self {
        Self {
            weapons: count,
            armor: count,
            accessories: count,
            consumables: count,
            materials: count,
        }
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Weapon => self.weapons,
            Category::Armor => self.armor,
            Category::Accessory => self.accessories,
            Category::Consumable => self.consumables,
            Category::Material => self.materials,
        }
    }

    pub fn set(&mut self, category: Category, count: usize) {
        let slot = match category {
            Category::Weapon => &mut self.weapons,
            Category::Armor => &mut self.armor,
            Category::Accessory => &mut self.accessories,
            Category::Consumable => &mut self.consumables,
            Category::Material => &mut self.materials,
        };
        *slot = count;
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|&category| self.get(category)).sum()
    }
}

/// Configuration for catalog generation.
///
/// Controls the seed, how many items each category receives, how hard the
/// assembler tries before declaring a category exhausted, and the rarity
/// weighting per category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Items per category
    pub counts: CategoryCounts,
    /// Attempts per item slot before the category counts as exhausted
    pub max_attempts_per_item: u32,
    /// Rarity weights replacing the standard weighting for some categories
    #[serde(default)]
    pub rarity_weights: BTreeMap<Category, RarityWeights>,
}

impl GenerationConfig {
    /// Creates the default configuration for a seed: 200 items per category,
    /// materials weighted slightly further toward common.
    ///
    /// # Examples
    ///
    /// ```
    /// use itemforge::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(42);
    /// assert_eq!(config.seed, 42);
    /// assert!(config.counts.total() >= 1000);
    /// ```
    pub fn new(seed: u64) -> Self {
        let mut rarity_weights = BTreeMap::new();
        rarity_weights.insert(Category::Material, RarityWeights::materials());

        Self {
            seed,
            counts: CategoryCounts::uniform(config::DEFAULT_PER_CATEGORY),
            max_attempts_per_item: config::DEFAULT_MAX_ATTEMPTS_PER_ITEM,
            rarity_weights,
        }
    }

    /// Creates a configuration for testing with small categories.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            counts: CategoryCounts::uniform(12),
            ..Self::new(seed)
        }
    }

    /// Same configuration with a different per-category count.
    pub fn with_counts(mut self, counts: CategoryCounts) -> Self {
        self.counts = counts;
        self
    }

    /// Rarity weights in effect for a category.
    pub fn weights_for(&self, category: Category) -> RarityWeights {
        self.rarity_weights
            .get(&category)
            .cloned()
            .unwrap_or_else(RarityWeights::standard)
    }

    /// Checks that the configuration can drive a run.
    pub fn validate(&self) -> ItemForgeResult<()> {
        if self.counts.total() == 0 {
            return Err(ItemForgeError::InvalidConfig(
                "at least one item must be requested".to_string(),
            ));
        }
        if self.max_attempts_per_item == 0 {
            return Err(ItemForgeError::InvalidConfig(
                "max_attempts_per_item must be positive".to_string(),
            ));
        }
        for (category, weights) in &self.rarity_weights {
            weights.validate().map_err(|detail| {
                ItemForgeError::InvalidConfig(format!("{} rarity weights: {}", category, detail))
            })?;
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(config::DEFAULT_SEED)
    }
}

/// Trait for procedural generators.
///
/// A generator produces content from a configuration and a random stream, and
/// can re-check content it (or anyone else) produced.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> ItemForgeResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> ItemForgeResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions shared by the generation stages.
pub mod utils {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }

    /// Picks one entry of a lexicon pool.
    pub fn pick<'a, T>(pool: &'a [T], pool_name: &str, rng: &mut StdRng) -> ItemForgeResult<&'a T> {
        pool.choose(rng)
            .ok_or_else(|| ItemForgeError::InvalidLexicon(format!("pool '{}' is empty", pool_name)))
    }

    /// Rounds to two decimals, as rates are shown in the document.
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }
}

//! # Rarity Engine
//!
//! Five ordered quality tiers with fixed stat multipliers and display colours,
//! plus the weighted draw that assigns a tier to each item.

use crate::{ItemForgeError, ItemForgeResult};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Item quality tier, ordered from `Common` to `Legendary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// All tiers in ascending order.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Zero-based position in the tier order.
    pub fn tier(self) -> usize {
        self as usize
    }

    /// Stat multiplier of the tier.
    ///
    /// # Examples
    ///
    /// ```
    /// use itemforge::Rarity;
    ///
    /// assert_eq!(Rarity::Common.multiplier(), 1.0);
    /// assert_eq!(Rarity::Legendary.multiplier(), 6.5);
    /// ```
    pub fn multiplier(self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.5,
            Rarity::Rare => 2.5,
            Rarity::Epic => 4.0,
            Rarity::Legendary => 6.5,
        }
    }

    /// Display colour of the tier as `#RRGGBB`.
    pub fn color(self) -> &'static str {
        match self {
            Rarity::Common => "#FFFFFF",
            Rarity::Uncommon => "#00FF00",
            Rarity::Rare => "#0080FF",
            Rarity::Epic => "#8000FF",
            Rarity::Legendary => "#FF8000",
        }
    }

    /// Rare and better: premium shops, guaranteed special effects.
    pub fn is_premium(self) -> bool {
        self >= Rarity::Rare
    }

    /// Epic and better.
    pub fn is_exalted(self) -> bool {
        self >= Rarity::Epic
    }

    /// Tier to multiplier table, as published in the catalog.
    pub fn multiplier_table() -> BTreeMap<Rarity, f64> {
        Rarity::ALL.into_iter().map(|r| (r, r.multiplier())).collect()
    }

    /// Tier to colour table, as published in the catalog.
    pub fn color_table() -> BTreeMap<Rarity, String> {
        Rarity::ALL
            .into_iter()
            .map(|r| (r, r.color().to_string()))
            .collect()
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        };
        f.write_str(name)
    }
}

/// Relative draw weight of each tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityWeights {
    pub common: f64,
    pub uncommon: f64,
    pub rare: f64,
    pub epic: f64,
    pub legendary: f64,
}

impl RarityWeights {
    /// Default weighting: 45 / 30 / 17 / 6.5 / 1.5.
    pub fn standard() -> Self {
        Self {
            common: 45.0,
            uncommon: 30.0,
            rare: 17.0,
            epic: 6.5,
            legendary: 1.5,
        }
    }

    /// Default weighting for crafting materials: 45 / 30 / 18 / 6 / 1.
    pub fn materials() -> Self {
        Self {
            common: 45.0,
            uncommon: 30.0,
            rare: 18.0,
            epic: 6.0,
            legendary: 1.0,
        }
    }

    /// The same weight for every tier.
    pub fn uniform(weight: f64) -> Self {
        Self {
            common: weight,
            uncommon: weight,
            rare: weight,
            epic: weight,
            legendary: weight,
        }
    }

    /// Weights in tier order.
    pub fn as_array(&self) -> [f64; 5] {
        [self.common, self.uncommon, self.rare, self.epic, self.legendary]
    }

    /// Weights must be finite, non-negative and not all zero.
    pub fn validate(&self) -> Result<(), String> {
        let weights = self.as_array();
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err("weights must be finite and non-negative".to_string());
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err("at least one weight must be positive".to_string());
        }
        Ok(())
    }
}

/// Weighted tier draw for one category.
#[derive(Debug, Clone)]
pub struct RarityEngine {
    table: WeightedIndex<f64>,
}

impl RarityEngine {
    pub fn new(weights: &RarityWeights) -> ItemForgeResult<Self> {
        weights.validate().map_err(ItemForgeError::InvalidConfig)?;
        let table = WeightedIndex::new(weights.as_array())
            .map_err(|e| ItemForgeError::InvalidConfig(format!("rarity weights: {}", e)))?;
        Ok(Self { table })
    }

    /// Draws a tier.
    pub fn roll(&self, rng: &mut StdRng) -> Rarity {
        Rarity::ALL[self.table.sample(rng)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_rarity_ordering_and_multipliers() {
        for pair in Rarity::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].multiplier() < pair[1].multiplier());
        }
        assert_eq!(Rarity::Epic.tier(), 3);
        assert!(Rarity::Rare.is_premium());
        assert!(!Rarity::Uncommon.is_premium());
    }

    #[test]
    fn test_tables_serialize_in_tier_order() {
        let json = serde_json::to_string(&Rarity::color_table()).unwrap();
        assert_eq!(
            json,
            r##"{"common":"#FFFFFF","uncommon":"#00FF00","rare":"#0080FF","epic":"#8000FF","legendary":"#FF8000"}"##
        );
        let multipliers = serde_json::to_value(Rarity::multiplier_table()).unwrap();
        assert_eq!(multipliers["legendary"], 6.5);
    }

    #[test]
    fn test_roll_is_biased_toward_common() {
        let engine = RarityEngine::new(&RarityWeights::standard()).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0usize; 5];
        for _ in 0..2000 {
            counts[engine.roll(&mut rng).tier()] += 1;
        }
        assert!(counts[0] > counts[1]);
        assert!(counts[1] > counts[2]);
        assert!(counts[2] > counts[4]);
    }

    #[test]
    fn test_single_tier_weights() {
        let weights = RarityWeights {
            legendary: 1.0,
            ..RarityWeights::uniform(0.0)
        };
        let engine = RarityEngine::new(&weights).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!((0..50).all(|_| engine.roll(&mut rng) == Rarity::Legendary));
    }

    #[test]
    fn test_invalid_weights_are_rejected() {
        assert!(RarityEngine::new(&RarityWeights::uniform(0.0)).is_err());
        let negative = RarityWeights {
            rare: -1.0,
            ..RarityWeights::standard()
        };
        assert!(RarityEngine::new(&negative).is_err());
    }
}

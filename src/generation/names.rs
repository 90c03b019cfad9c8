//! # Name Synthesis
//!
//! Builds display names as `<Adjective> <Noun>` (consumables:
//! `<Adjective> <Effect> <Noun>`), with the noun drawn uniformly from the
//! category's own pool.

use super::utils::pick;
use crate::{Category, EffectWord, ItemForgeResult, Lexicon, NounEntry, Rarity};
use rand::rngs::StdRng;
use rand::Rng;

/// A display name together with the lexicon entries it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedName {
    pub name: String,
    pub noun: NounEntry,
    pub adjective: String,
    /// Effect word, for consumables only
    pub effect: Option<EffectWord>,
}

/// Composes category names from a lexicon.
#[derive(Debug, Clone, Copy)]
pub struct NameSynthesizer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> NameSynthesizer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Synthesizes a name for an item of `category` and `rarity`.
    ///
    /// Epic and legendary items may also draw from the exalted adjectives.
    /// The returned noun always appears as whole words in the name.
    pub fn synthesize(
        &self,
        category: Category,
        rarity: Rarity,
        rng: &mut StdRng,
    ) -> ItemForgeResult<SynthesizedName> {
        let pools = self.lexicon.category(category);
        let noun = pick(&pools.nouns, "nouns", rng)?.clone();

        let adjective = if rarity.is_exalted() && !pools.exalted_adjectives.is_empty() {
            let total = pools.adjectives.len() + pools.exalted_adjectives.len();
            let index = rng.gen_range(0..total);
            match pools.adjectives.get(index) {
                Some(adjective) => adjective.clone(),
                None => pools.exalted_adjectives[index - pools.adjectives.len()].clone(),
            }
        } else {
            pick(&pools.adjectives, "adjectives", rng)?.clone()
        };

        let (name, effect) = match category {
            Category::Consumable => {
                let effect = pick(&self.lexicon.consumable_effects, "consumable_effects", rng)?;
                let name = format!("{} {} {}", adjective, effect.word, noun.word);
                (name, Some(effect.clone()))
            }
            _ => (format!("{} {}", adjective, noun.word), None),
        };

        Ok(SynthesizedName {
            name,
            noun,
            adjective,
            effect,
        })
    }
}

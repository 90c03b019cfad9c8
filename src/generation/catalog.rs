//! # Catalog Assembly
//!
//! The assembler owns the state of one run: the random stream and the
//! [`IdentifierRegistry`]. It fills the categories in a fixed order and
//! retries an item slot whenever a candidate collides with an existing id or
//! fails the name check, up to the configured number of attempts.

use super::{
    builder_for, derive_identifier, utils, validate_item, BuildContext, GenerationConfig,
    GenerationIssue, Generator, IdentifierRegistry, ItemBuilder, NameSynthesizer, Rarity,
    RarityEngine,
};
use crate::{config, Category, Item, ItemForgeError, ItemForgeResult, Lexicon};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info};

/// The generated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub version: String,
    pub categories: CatalogCategories,
}

impl Catalog {
    /// All items, category by category.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.categories.items(category).iter())
    }

    pub fn len(&self) -> usize {
        self.items().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Item lists per category plus the rarity reference tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogCategories {
    pub weapons: Vec<Item>,
    pub armor: Vec<Item>,
    pub accessories: Vec<Item>,
    pub consumables: Vec<Item>,
    pub materials: Vec<Item>,
    pub rarity_multipliers: BTreeMap<Rarity, f64>,
    pub rarity_colors: BTreeMap<Rarity, String>,
}

impl CatalogCategories {
    fn empty() -> Self {
        Self {
            weapons: Vec::new(),
            armor: Vec::new(),
            accessories: Vec::new(),
            consumables: Vec::new(),
            materials: Vec::new(),
            rarity_multipliers: Rarity::multiplier_table(),
            rarity_colors: Rarity::color_table(),
        }
    }

    pub fn items(&self, category: Category) -> &[Item] {
        match category {
            Category::Weapon => &self.weapons,
            Category::Armor => &self.armor,
            Category::Accessory => &self.accessories,
            Category::Consumable => &self.consumables,
            Category::Material => &self.materials,
        }
    }

    fn items_mut(&mut self, category: Category) -> &mut Vec<Item> {
        match category {
            Category::Weapon => &mut self.weapons,
            Category::Armor => &mut self.armor,
            Category::Accessory => &mut self.accessories,
            Category::Consumable => &mut self.consumables,
            Category::Material => &mut self.materials,
        }
    }
}

/// Drives the generation pipeline for every category.
#[derive(Debug, Clone, Copy)]
pub struct CatalogAssembler<'a> {
    lexicon: &'a Lexicon,
    synthesizer: NameSynthesizer<'a>,
}

impl<'a> CatalogAssembler<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            synthesizer: NameSynthesizer::new(lexicon),
        }
    }

    /// Checks the inputs, runs a full generation from the config's seed and
    /// re-validates the result. Either the whole catalog or an error comes back.
    pub fn assemble(&self, config: &GenerationConfig) -> ItemForgeResult<Catalog> {
        config.validate()?;
        self.lexicon.validate()?;

        let mut rng = utils::create_rng(config);
        let catalog = self.generate(config, &mut rng)?;
        self.validate(&catalog, config)?;
        Ok(catalog)
    }

    fn generate_category(
        &self,
        category: Category,
        config: &GenerationConfig,
        registry: &mut IdentifierRegistry,
        rng: &mut StdRng,
    ) -> ItemForgeResult<Vec<Item>> {
        let requested = config.counts.get(category);
        if requested == 0 {
            return Ok(Vec::new());
        }

        let capacity = self.lexicon.capacity(category);
        if requested > capacity {
            return Err(ItemForgeError::LexiconExhausted {
                category,
                requested,
                produced: 0,
                resource: format!("the word pools only combine into {} distinct names", capacity),
            });
        }

        let engine = RarityEngine::new(&config.weights_for(category))?;
        let builder = builder_for(category);
        let mut items = Vec::with_capacity(requested);

        while items.len() < requested {
            let item = self
                .fill_slot(builder, &engine, config, registry, rng)?
                .ok_or_else(|| ItemForgeError::LexiconExhausted {
                    category,
                    requested,
                    produced: items.len(),
                    resource: format!(
                        "no unused name found in {} attempts",
                        config.max_attempts_per_item
                    ),
                })?;
            registry.register(item.id()).map_err(fatal)?;
            items.push(item);
        }

        info!(
            "Generated {} {} (registry holds {} ids)",
            items.len(),
            category,
            registry.len()
        );
        Ok(items)
    }

    /// Runs the attempts for one slot. `None` means every attempt was spent.
    fn fill_slot(
        &self,
        builder: &dyn ItemBuilder,
        engine: &RarityEngine,
        config: &GenerationConfig,
        registry: &IdentifierRegistry,
        rng: &mut StdRng,
    ) -> ItemForgeResult<Option<Item>> {
        let category = builder.category();

        for attempt in 1..=config.max_attempts_per_item {
            let rarity = engine.roll(rng);
            let name = self.synthesizer.synthesize(category, rarity, rng)?;
            let id = derive_identifier(&name.name);

            if let Err(issue) = registry.check(&id) {
                debug!("{} attempt {}: {}", category, attempt, issue);
                continue;
            }

            let ctx = BuildContext {
                lexicon: self.lexicon,
                name: &name,
                id: &id,
                rarity,
            };
            let item = builder.build(&ctx, rng)?;

            match validate_item(&item, self.lexicon) {
                Ok(()) => return Ok(Some(item)),
                Err(issue) if issue.is_recoverable() => {
                    debug!("{} attempt {}: {}", category, attempt, issue);
                }
                Err(issue) => return Err(fatal(issue)),
            }
        }

        Ok(None)
    }
}

/// Issues that reach this point are builder bugs.
fn fatal(issue: GenerationIssue) -> ItemForgeError {
    let message = issue.to_string();
    match issue {
        GenerationIssue::SchemaInvariant { id, detail } => {
            ItemForgeError::SchemaInvariantViolation { id, detail }
        }
        GenerationIssue::IdentifierCollision { id } => ItemForgeError::SchemaInvariantViolation {
            id,
            detail: message,
        },
        GenerationIssue::CategoryMismatch { name, .. } => ItemForgeError::SchemaInvariantViolation {
            id: derive_identifier(&name),
            detail: message,
        },
    }
}

impl Generator<Catalog> for CatalogAssembler<'_> {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> ItemForgeResult<Catalog> {
        info!(
            "Generating catalog: seed {}, {} items requested",
            config.seed,
            config.counts.total()
        );

        let mut registry = IdentifierRegistry::new();
        let mut categories = CatalogCategories::empty();
        for category in Category::ALL {
            let items = self.generate_category(category, config, &mut registry, rng)?;
            *categories.items_mut(category) = items;
        }

        let catalog = Catalog {
            version: config::CATALOG_VERSION.to_string(),
            categories,
        };
        info!("Catalog complete with {} items", catalog.len());
        Ok(catalog)
    }

    fn validate(&self, catalog: &Catalog, config: &GenerationConfig) -> ItemForgeResult<()> {
        if catalog.version != config::CATALOG_VERSION {
            return Err(ItemForgeError::SchemaInvariantViolation {
                id: "catalog".to_string(),
                detail: format!("unexpected version '{}'", catalog.version),
            });
        }

        let mut seen = HashSet::new();
        for category in Category::ALL {
            let items = catalog.categories.items(category);
            if items.len() != config.counts.get(category) {
                return Err(ItemForgeError::SchemaInvariantViolation {
                    id: "catalog".to_string(),
                    detail: format!(
                        "{} holds {} items, {} requested",
                        category,
                        items.len(),
                        config.counts.get(category)
                    ),
                });
            }

            for item in items {
                if item.category() != category {
                    return Err(ItemForgeError::SchemaInvariantViolation {
                        id: item.id().to_string(),
                        detail: format!("listed under {}", category),
                    });
                }
                if !seen.insert(item.id()) {
                    return Err(ItemForgeError::SchemaInvariantViolation {
                        id: item.id().to_string(),
                        detail: "duplicate id".to_string(),
                    });
                }
                validate_item(item, self.lexicon).map_err(fatal)?;
            }
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "CatalogAssembler"
    }
}

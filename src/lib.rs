//! # ItemForge
//!
//! Seeded procedural generation of fantasy item catalogs for game data pipelines.
//!
//! ## Architecture Overview
//!
//! ItemForge produces a single, validated catalog document per run. The pipeline
//! is built from small, pure stages that only ever feed forward:
//!
//! - **Lexicon**: static word pools, shop routing and effect kinds (configuration, not code)
//! - **Rarity Engine**: weighted tier draw with fixed stat multipliers
//! - **Name Synthesizer**: adjective + category noun composition
//! - **Identifier Deriver**: display name to snake_case id, with a per-run registry
//! - **Category Builders**: one per item category, rarity-scaled stats
//! - **Validator**: independent name/category and schema re-check of every item
//! - **Catalog Assembler**: drives the loop and assembles the final document
//!
//! Writing the document somewhere is left to a [`CatalogSink`].
//!
//! ## Example
//!
//! ```
//! use itemforge::{CatalogAssembler, GenerationConfig, Lexicon};
//!
//! let lexicon = Lexicon::standard();
//! let config = GenerationConfig::for_testing(7);
//! let catalog = CatalogAssembler::new(&lexicon).assemble(&config).unwrap();
//! assert_eq!(catalog.categories.weapons.len(), config.counts.weapons);
//! ```

pub mod generation;
pub mod items;
pub mod lexicon;
pub mod sink;

pub use generation::*;
pub use items::*;
pub use lexicon::*;
pub use sink::*;

/// Core error type for catalog generation.
#[derive(thiserror::Error, Debug)]
pub enum ItemForgeError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// No further distinct name/id could be produced for a category
    #[error(
        "Lexicon exhausted for {category}: produced {produced} of {requested} items ({resource})"
    )]
    LexiconExhausted {
        category: Category,
        requested: usize,
        produced: usize,
        resource: String,
    },

    /// A builder produced a record that breaks the catalog schema
    #[error("Schema invariant violated by '{id}': {detail}")]
    SchemaInvariantViolation { id: String, detail: String },

    /// Generation configuration is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Lexicon tables break an authoring rule
    #[error("Invalid lexicon: {0}")]
    InvalidLexicon(String),
}

/// Result type used throughout the ItemForge codebase.
pub type ItemForgeResult<T> = Result<T, ItemForgeError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generation configuration constants.
pub mod config {
    /// Version tag written at the top of every catalog document
    pub const CATALOG_VERSION: &str = "1.0";

    /// Default seed, shared with previously published catalogs
    pub const DEFAULT_SEED: u64 = 424_242;

    /// Default number of items per category (5 x 200 = 1000 items)
    pub const DEFAULT_PER_CATEGORY: usize = 200;

    /// Attempts spent on one item slot before the category is declared exhausted
    pub const DEFAULT_MAX_ATTEMPTS_PER_ITEM: u32 = 256;

    /// Engine-side root of all item textures
    pub const TEXTURE_ROOT: &str = "res://assets/textures";

    /// Default output location used by the binary
    pub const DEFAULT_OUTPUT_PATH: &str = "assets/data/items.json";

    /// Prefix of every crafting recipe id
    pub const RECIPE_PREFIX: &str = "rcp_";
}

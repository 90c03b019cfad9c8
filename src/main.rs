//! # ItemForge Main Entry Point
//!
//! Parses the command line, generates one catalog and writes it to disk. A failed
//! run writes nothing.

use clap::Parser;
use itemforge::{
    config, CatalogAssembler, CatalogSink, Category, GenerationConfig, ItemForgeError,
    ItemForgeResult, JsonFileSink, Lexicon,
};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the catalog generator.
#[derive(Parser, Debug)]
#[command(name = "itemforge")]
#[command(about = "Generates a seeded, validated fantasy item catalog")]
#[command(version)]
struct Args {
    /// Output file for the catalog document
    #[arg(short, long, default_value = config::DEFAULT_OUTPUT_PATH)]
    out: PathBuf,

    /// Items per category
    #[arg(short, long, default_value_t = config::DEFAULT_PER_CATEGORY)]
    count: usize,

    /// Random seed for generation
    #[arg(short, long, default_value_t = config::DEFAULT_SEED)]
    seed: u64,

    /// Weapon count, overriding --count
    #[arg(long)]
    weapons: Option<usize>,

    /// Armor count, overriding --count
    #[arg(long)]
    armor: Option<usize>,

    /// Accessory count, overriding --count
    #[arg(long)]
    accessories: Option<usize>,

    /// Consumable count, overriding --count
    #[arg(long)]
    consumables: Option<usize>,

    /// Material count, overriding --count
    #[arg(long)]
    materials: Option<usize>,

    /// JSON lexicon replacing the built-in word tables
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Attempts per item before a category counts as exhausted
    #[arg(long, default_value_t = config::DEFAULT_MAX_ATTEMPTS_PER_ITEM)]
    max_attempts: u32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn generation_config(&self) -> GenerationConfig {
        let mut config = GenerationConfig::new(self.seed);
        config.max_attempts_per_item = self.max_attempts;
        config.counts = itemforge::CategoryCounts::uniform(self.count);

        let overrides = [
            (Category::Weapon, self.weapons),
            (Category::Armor, self.armor),
            (Category::Accessory, self.accessories),
            (Category::Consumable, self.consumables),
            (Category::Material, self.materials),
        ];
        for (category, count) in overrides {
            if let Some(count) = count {
                config.counts.set(category, count);
            }
        }
        config
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = initialize_logging(&args.log_level) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    info!("Starting ItemForge v{}", itemforge::VERSION);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Aborted, nothing was written: {}", abort_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// Initializes the logging system. `RUST_LOG` wins over `--log-level`.
fn initialize_logging(log_level: &str) -> ItemForgeResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .map_err(|e| ItemForgeError::InvalidConfig(format!("log level '{}': {}", log_level, e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    Ok(())
}

fn run(args: &Args) -> ItemForgeResult<()> {
    let lexicon = match &args.lexicon {
        Some(path) => {
            info!("Loading lexicon from {}", path.display());
            Lexicon::from_json_str(&fs::read_to_string(path)?)?
        }
        None => Lexicon::standard(),
    };

    let config = args.generation_config();
    let catalog = CatalogAssembler::new(&lexicon).assemble(&config)?;

    JsonFileSink::new(&args.out).write(&catalog)?;
    println!(
        "Wrote {} items (seed {}) to {}",
        catalog.len(),
        config.seed,
        args.out.display()
    );
    Ok(())
}

fn abort_message(error: &ItemForgeError) -> String {
    match error {
        ItemForgeError::LexiconExhausted {
            category,
            requested,
            produced,
            resource,
        } => format!(
            "category '{}' ran out of names after {} of {} items: {}",
            category, produced, requested, resource
        ),
        other => other.to_string(),
    }
}

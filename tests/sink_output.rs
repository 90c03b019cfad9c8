//! Catalog documents written through the file sink.

use itemforge::{
    CatalogAssembler, CatalogSink, CategoryCounts, GenerationConfig, ItemForgeError,
    ItemForgeResult, JsonFileSink, Lexicon,
};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_written_document_layout() -> ItemForgeResult<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("data").join("items.json");
    let lexicon = Lexicon::standard();
    let catalog = CatalogAssembler::new(&lexicon).assemble(&GenerationConfig::for_testing(42))?;

    JsonFileSink::new(&path).write(&catalog)?;
    let document: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;

    assert_eq!(document["version"], "1.0");
    let categories = &document["categories"];
    assert_eq!(categories["rarity_multipliers"]["legendary"], 6.5);
    assert_eq!(categories["rarity_colors"]["common"], "#FFFFFF");

    let weapon = &categories["weapons"][0];
    assert_eq!(weapon["type"], "weapon");
    let id = weapon["id"].as_str().unwrap_or_default();
    assert_eq!(
        weapon["image"],
        format!("res://assets/textures/weapons/{}.png", id)
    );
    assert_eq!(weapon["crafting"]["recipe_id"], format!("rcp_{}", id));
    assert!(weapon["stats"]["strength_bonus"].is_u64());

    let material = &categories["materials"][0];
    assert_eq!(material["type"], "crafting_material");
    assert_eq!(material["stack_size"], 999);
    assert_eq!(material["sources"][0]["type"], "territory_income");
    Ok(())
}

#[test]
fn test_failed_run_writes_nothing() -> ItemForgeResult<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("items.json");
    let lexicon = Lexicon::standard();
    let config = GenerationConfig::new(1).with_counts(CategoryCounts::uniform(10_000));

    let result = CatalogAssembler::new(&lexicon)
        .assemble(&config)
        .and_then(|catalog| JsonFileSink::new(&path).write(&catalog));

    assert!(matches!(result, Err(ItemForgeError::LexiconExhausted { .. })));
    assert!(!path.exists());
    Ok(())
}

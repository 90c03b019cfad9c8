//! End-to-end checks on generated catalogs.

use itemforge::{
    derive_identifier, to_pretty_json, word_tokens, Catalog, CatalogAssembler, Category,
    CategoryCounts, GenerationConfig, Item, ItemForgeError, ItemForgeResult, Lexicon,
    StatsAffected,
};
use std::collections::{BTreeSet, HashSet};

fn generate(seed: u64, per_category: usize) -> ItemForgeResult<Catalog> {
    let lexicon = Lexicon::standard();
    let config = GenerationConfig::new(seed).with_counts(CategoryCounts::uniform(per_category));
    CatalogAssembler::new(&lexicon).assemble(&config)
}

#[test]
fn test_default_run_produces_1000_items() -> ItemForgeResult<()> {
    let lexicon = Lexicon::standard();
    let catalog = CatalogAssembler::new(&lexicon).assemble(&GenerationConfig::default())?;

    assert_eq!(catalog.len(), 1000);
    for category in Category::ALL {
        assert_eq!(catalog.categories.items(category).len(), 200);
    }
    Ok(())
}

#[test]
fn test_same_seed_gives_identical_documents() -> ItemForgeResult<()> {
    let first = to_pretty_json(&generate(77, 40)?)?;
    let second = to_pretty_json(&generate(77, 40)?)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_different_seeds_share_shape_not_content() -> ItemForgeResult<()> {
    let a = generate(1, 30)?;
    let b = generate(2, 30)?;

    let ids_a: Vec<&str> = a.items().map(Item::id).collect();
    let ids_b: Vec<&str> = b.items().map(Item::id).collect();
    assert_eq!(ids_a.len(), ids_b.len());
    assert_ne!(ids_a, ids_b);

    let value_a = serde_json::to_value(&a)?;
    let value_b = serde_json::to_value(&b)?;
    for folder in ["weapons", "armor", "accessories", "consumables", "materials"] {
        let fields = |value: &serde_json::Value| -> BTreeSet<String> {
            value["categories"][folder]
                .as_array()
                .into_iter()
                .flatten()
                .filter_map(|item| item.as_object())
                .flat_map(|object| object.keys().cloned())
                .collect()
        };
        assert_eq!(fields(&value_a), fields(&value_b), "fields differ in {}", folder);
    }
    Ok(())
}

#[test]
fn test_ids_are_derived_and_unique() -> ItemForgeResult<()> {
    let catalog = generate(9, 120)?;
    let mut seen = HashSet::new();
    for item in catalog.items() {
        assert_eq!(item.id(), derive_identifier(item.name()));
        assert!(seen.insert(item.id().to_string()), "duplicate id {}", item.id());
    }
    Ok(())
}

#[test]
fn test_names_carry_their_category_noun_only() -> ItemForgeResult<()> {
    let lexicon = Lexicon::standard();
    let catalog = generate(13, 120)?;
    for item in catalog.items() {
        let category = item.category();
        assert!(
            lexicon.find_noun(category, item.name()).is_some(),
            "'{}' lacks a {} noun",
            item.name(),
            category
        );
        assert_eq!(lexicon.categories_matching(item.name()), vec![category]);
    }
    Ok(())
}

#[test]
fn test_silk_only_names_materials() -> ItemForgeResult<()> {
    let mut silk_seen = false;
    for seed in 0..5 {
        let catalog = generate(seed, 120)?;
        for item in catalog.items() {
            if word_tokens(item.name()).iter().any(|token| token == "silk") {
                assert_eq!(item.category(), Category::Material, "'{}'", item.name());
                silk_seen = true;
            }
        }
    }
    assert!(silk_seen);
    Ok(())
}

#[test]
fn test_single_weapon_for_seed_42() -> ItemForgeResult<()> {
    let lexicon = Lexicon::standard();
    let mut counts = CategoryCounts::uniform(0);
    counts.set(Category::Weapon, 1);
    let config = GenerationConfig::new(42).with_counts(counts);
    let catalog = CatalogAssembler::new(&lexicon).assemble(&config)?;

    assert_eq!(catalog.len(), 1);
    let id = catalog.categories.weapons[0].id();

    let adjectives = lexicon
        .weapons
        .adjectives
        .iter()
        .chain(&lexicon.weapons.exalted_adjectives);
    assert!(adjectives
        .map(|adjective| derive_identifier(adjective))
        .any(|adjective| id.starts_with(&format!("{}_", adjective))));
    assert!(lexicon
        .weapons
        .nouns
        .iter()
        .map(|noun| derive_identifier(&noun.word))
        .any(|noun| id.ends_with(&format!("_{}", noun))));
    Ok(())
}

#[test]
fn test_consumables_list_all_eight_stats() -> ItemForgeResult<()> {
    let catalog = generate(21, 60)?;
    let value = serde_json::to_value(&catalog)?;
    let consumables = value["categories"]["consumables"]
        .as_array()
        .cloned()
        .unwrap_or_default();
    assert_eq!(consumables.len(), 60);

    for consumable in consumables {
        let stats = consumable["effect"]["stats_affected"]
            .as_object()
            .cloned()
            .unwrap_or_default();
        let keys: BTreeSet<&str> = stats.keys().map(String::as_str).collect();
        assert_eq!(keys, StatsAffected::KEYS.into_iter().collect::<BTreeSet<_>>());
        assert!(stats.values().all(|v| v.is_u64()));
    }
    Ok(())
}

#[test]
fn test_count_beyond_capacity_is_exhaustion() {
    let lexicon = Lexicon::standard();
    let mut counts = CategoryCounts::uniform(1);
    counts.set(Category::Accessory, lexicon.capacity(Category::Accessory) + 1);
    let config = GenerationConfig::new(4).with_counts(counts);

    match CatalogAssembler::new(&lexicon).assemble(&config) {
        Err(ItemForgeError::LexiconExhausted { category, .. }) => {
            assert_eq!(category, Category::Accessory)
        }
        other => panic!("expected LexiconExhausted, got {:?}", other.map(|c| c.len())),
    }
}

#[test]
fn test_custom_lexicon_from_json() -> ItemForgeResult<()> {
    let mut lexicon = Lexicon::standard();
    lexicon.weapons.adjectives = vec!["Bright".to_string(), "Dull".to_string()];
    lexicon.weapons.exalted_adjectives.clear();
    let json = serde_json::to_string(&lexicon)?;

    let loaded = Lexicon::from_json_str(&json)?;
    assert_eq!(loaded, lexicon);

    let mut counts = CategoryCounts::uniform(0);
    counts.set(Category::Weapon, 10);
    let catalog = CatalogAssembler::new(&loaded)
        .assemble(&GenerationConfig::new(6).with_counts(counts))?;
    assert!(catalog
        .items()
        .all(|item| item.name().starts_with("Bright ") || item.name().starts_with("Dull ")));
    Ok(())
}

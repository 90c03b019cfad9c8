//! # Item Validation
//!
//! Every built item passes through [`validate_item`] before the assembler
//! accepts it. The check works from the finished record alone: it re-tokenizes
//! the name against the lexicon and re-derives ids and paths instead of relying
//! on what the synthesizer or builders claim to have done.

use super::derive_identifier;
use crate::{image_path, recipe_id, Category, Item, Lexicon};

/// Conditions raised inside the generation loop.
///
/// `CategoryMismatch` and `IdentifierCollision` are recovered by retrying the
/// item slot; `SchemaInvariant` is a builder bug and aborts the run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationIssue {
    #[error("'{name}' does not read as a {category} item (nouns found for {found:?})")]
    CategoryMismatch {
        name: String,
        category: Category,
        found: Vec<Category>,
    },

    #[error("identifier '{id}' is already taken")]
    IdentifierCollision { id: String },

    #[error("'{id}': {detail}")]
    SchemaInvariant { id: String, detail: String },
}

impl GenerationIssue {
    /// Whether the assembler may retry the slot after this issue.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GenerationIssue::SchemaInvariant { .. })
    }
}

fn schema(item: &Item, detail: impl Into<String>) -> GenerationIssue {
    GenerationIssue::SchemaInvariant {
        id: item.id().to_string(),
        detail: detail.into(),
    }
}

/// Validates one item against the lexicon and the catalog schema.
pub fn validate_item(item: &Item, lexicon: &Lexicon) -> Result<(), GenerationIssue> {
    let category = item.category();
    let found = lexicon.categories_matching(item.name());
    if found != [category] {
        return Err(GenerationIssue::CategoryMismatch {
            name: item.name().to_string(),
            category,
            found,
        });
    }

    let base = item.base();
    if base.id.is_empty() {
        return Err(schema(item, "empty id"));
    }
    if base.id != derive_identifier(&base.name) {
        return Err(schema(item, format!("id does not match name '{}'", base.name)));
    }
    if base.image != image_path(category, &base.id) {
        return Err(schema(item, format!("unexpected image path '{}'", base.image)));
    }

    if let Some(crafting) = item.crafting() {
        if crafting.recipe_id != recipe_id(&base.id) {
            return Err(schema(item, "recipe id does not match item id"));
        }
        if crafting.materials.is_empty() {
            return Err(schema(item, "recipe without materials"));
        }
        if let Some(bad) = crafting
            .materials
            .keys()
            .find(|key| derive_identifier(key) != **key)
        {
            return Err(schema(item, format!("material reference '{}' is not an id", bad)));
        }
    }

    if let Some(shops) = item.shop_availability() {
        if shops.is_empty() {
            return Err(schema(item, "no shop stocks the item"));
        }
    }

    if let Some(effect) = item
        .special_effects()
        .iter()
        .find(|effect| !lexicon.special_effects.contains(&effect.kind()))
    {
        return Err(schema(item, format!("effect '{}' is not in the lexicon", effect)));
    }

    if item.stack_size() == Some(0) {
        return Err(schema(item, "zero stack size"));
    }

    if let Item::Material(material) = item {
        if material.sources.is_empty() {
            return Err(schema(item, "material without sources"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder_for, BuildContext, NameSynthesizer, Rarity, SpecialEffect, SpecialEffectKind,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn build(category: Category, seed: u64) -> Item {
        let lexicon = Lexicon::standard();
        let mut rng = StdRng::seed_from_u64(seed);
        let name = NameSynthesizer::new(&lexicon)
            .synthesize(category, Rarity::Rare, &mut rng)
            .unwrap();
        let id = derive_identifier(&name.name);
        let ctx = BuildContext {
            lexicon: &lexicon,
            name: &name,
            id: &id,
            rarity: Rarity::Rare,
        };
        builder_for(category).build(&ctx, &mut rng).unwrap()
    }

    #[test]
    fn test_built_items_pass() {
        let lexicon = Lexicon::standard();
        for (seed, category) in Category::ALL.into_iter().enumerate() {
            let item = build(category, seed as u64);
            assert_eq!(validate_item(&item, &lexicon), Ok(()));
        }
    }

    #[test]
    fn test_foreign_noun_is_a_category_mismatch() {
        let lexicon = Lexicon::standard();
        let mut item = build(Category::Weapon, 1);
        if let Item::Weapon(weapon) = &mut item {
            weapon.base.name = "Iron Silk".to_string();
            weapon.base.id = derive_identifier("Iron Silk");
        }
        match validate_item(&item, &lexicon) {
            Err(GenerationIssue::CategoryMismatch { category, found, .. }) => {
                assert_eq!(category, Category::Weapon);
                assert_eq!(found, vec![Category::Material]);
            }
            other => panic!("expected CategoryMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_name_mixing_categories_is_rejected() {
        let lexicon = Lexicon::standard();
        let mut item = build(Category::Weapon, 2);
        if let Item::Weapon(weapon) = &mut item {
            weapon.base.name = "Bone Sword".to_string();
            weapon.base.id = derive_identifier("Bone Sword");
        }
        assert!(matches!(
            validate_item(&item, &lexicon),
            Err(GenerationIssue::CategoryMismatch { .. })
        ));
    }

    #[test]
    fn test_partial_word_does_not_count() {
        let lexicon = Lexicon::standard();
        let mut item = build(Category::Weapon, 3);
        if let Item::Weapon(weapon) = &mut item {
            weapon.base.name = "Iron Swordsman".to_string();
            weapon.base.id = derive_identifier("Iron Swordsman");
        }
        assert!(matches!(
            validate_item(&item, &lexicon),
            Err(GenerationIssue::CategoryMismatch { .. })
        ));
    }

    #[test]
    fn test_schema_breaks_are_not_recoverable() {
        let lexicon = Lexicon::standard();
        let mut item = build(Category::Consumable, 4);
        if let Item::Consumable(consumable) = &mut item {
            consumable.crafting.recipe_id = "rcp_other".to_string();
        }
        let issue = validate_item(&item, &lexicon).unwrap_err();
        assert!(!issue.is_recoverable());
        assert!(matches!(issue, GenerationIssue::SchemaInvariant { .. }));
    }

    #[test]
    fn test_stale_id_is_a_schema_break() {
        let lexicon = Lexicon::standard();
        let mut item = build(Category::Armor, 5);
        if let Item::Armor(armor) = &mut item {
            armor.base.id.push_str("_2");
        }
        assert!(matches!(
            validate_item(&item, &lexicon),
            Err(GenerationIssue::SchemaInvariant { .. })
        ));
    }

    #[test]
    fn test_unknown_effect_kind_is_a_schema_break() {
        let mut lexicon = Lexicon::standard();
        lexicon.special_effects = vec![SpecialEffectKind::BurnOnHit];
        let mut item = build(Category::Weapon, 7);
        if let Item::Weapon(weapon) = &mut item {
            weapon.special_effects = vec![SpecialEffect::Percent {
                kind: SpecialEffectKind::SpellFocus,
                bonus_pct: 17,
            }];
        }
        match validate_item(&item, &lexicon) {
            Err(GenerationIssue::SchemaInvariant { detail, .. }) => {
                assert!(detail.contains("clarity:spell_focus:17%"));
            }
            other => panic!("expected SchemaInvariant, got {:?}", other),
        }

        lexicon.special_effects.push(SpecialEffectKind::SpellFocus);
        assert_eq!(validate_item(&item, &lexicon), Ok(()));
    }

    #[test]
    fn test_empty_shop_list_is_a_schema_break() {
        let lexicon = Lexicon::standard();
        let mut item = build(Category::Accessory, 6);
        if let Item::Accessory(accessory) = &mut item {
            accessory.shop_availability.clear();
        }
        assert!(matches!(
            validate_item(&item, &lexicon),
            Err(GenerationIssue::SchemaInvariant { .. })
        ));
    }
}

//! Crafting material records.

use super::{gold_value, BuildContext, ItemBuilder, ValueRoll};
use crate::generation::utils::{pick, round2};
use crate::{
    Category, Item, ItemBase, ItemForgeResult, Material, MaterialSource, SourceKind,
};
use rand::rngs::StdRng;
use rand::Rng;

const VALUE_RANGE: (u32, u32) = (3, 45);
const STACK_SIZE: u32 = 999;

/// Sources of a material: territory income, a shop, and sometimes a dungeon.
pub fn sample_sources(ctx: &BuildContext<'_>, rng: &mut StdRng) -> ItemForgeResult<Vec<MaterialSource>> {
    let lexicon = ctx.lexicon;

    let territory = pick(&lexicon.territory_sources, "territory_sources", rng)?.clone();
    let shop = pick(&lexicon.material_shops, "material_shops", rng)?;
    let mut sources = vec![
        MaterialSource {
            kind: SourceKind::TerritoryIncome,
            source_id: territory,
            rate_per_hour: round2(rng.gen_range(1.5..4.5)),
            drop_rate: 0.0,
        },
        MaterialSource {
            kind: SourceKind::Shop,
            source_id: shop.as_str().to_string(),
            rate_per_hour: 0.0,
            drop_rate: 0.0,
        },
    ];

    if rng.gen_bool(0.33) {
        let dungeon = pick(&lexicon.dungeon_sources, "dungeon_sources", rng)?.clone();
        sources.push(MaterialSource {
            kind: SourceKind::DungeonDrop,
            source_id: dungeon,
            rate_per_hour: 0.0,
            drop_rate: round2(rng.gen_range(5.0..18.0)),
        });
    }

    Ok(sources)
}

pub struct MaterialBuilder;

impl ItemBuilder for MaterialBuilder {
    fn category(&self) -> Category {
        Category::Material
    }

    fn build(&self, ctx: &BuildContext<'_>, rng: &mut StdRng) -> ItemForgeResult<Item> {
        let value = ValueRoll::sample(VALUE_RANGE.0, rng);
        let sources = sample_sources(ctx, rng)?;
        let description = pick(
            &ctx.lexicon.material_descriptions,
            "material_descriptions",
            rng,
        )?
        .clone();

        Ok(Item::Material(Material {
            base: ItemBase::new(
                Category::Material,
                ctx.id,
                &ctx.name.name,
                ctx.rarity,
                gold_value(ctx.rarity, VALUE_RANGE.0, VALUE_RANGE.1, value.jitter),
            ),
            material_type: ctx.name.noun.kind.clone(),
            stack_size: STACK_SIZE,
            sources,
            description,
        }))
    }
}

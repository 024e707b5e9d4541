//! Catalog seeding: runs once when the module is first published.
//!
//! Walks the static definitions in `guildhall_logic::catalog`, inserting
//! items first so recipe ingredients and shop stock can resolve names to
//! row ids. Idempotent: a populated item table short-circuits.

use crate::convert::{category_col, item_kind_col, rarity_col, skill_col, template_kind_col, tier_col};
use crate::tables::*;
use guildhall_logic::catalog;
use guildhall_logic::economy;
use spacetimedb::{ReducerContext, Table};
use std::collections::HashMap;

pub(crate) fn seed_catalog(ctx: &ReducerContext) {
    if ctx.db.item().iter().next().is_some() {
        return;
    }

    let mut item_ids: HashMap<&'static str, u64> = HashMap::new();
    for def in catalog::ITEMS {
        let row = ctx.db.item().insert(Item {
            id: 0,
            name: def.name.to_string(),
            kind: item_kind_col(def.kind),
            category: category_col(def.category),
            rarity: rarity_col(def.rarity),
            tier: tier_col(def.tier),
            damage: def.damage,
            stat_value: def.stat_value,
            base_price: def.base_price,
        });
        item_ids.insert(def.name, row.id);
    }

    for def in catalog::RECIPES {
        let Some(&output_id) = item_ids.get(def.output) else {
            log::error!("recipe output {} missing from item seed", def.output);
            continue;
        };
        let recipe = ctx.db.recipe().insert(Recipe {
            id: 0,
            item_id: output_id,
            skill: skill_col(def.skill),
            duration_secs: def.duration_secs,
            min_skill_level: def.min_skill_level,
            success_rate: def.success_rate,
            xp_reward: def.xp_reward,
        });
        for (name, quantity) in def.ingredients {
            let Some(&ingredient_id) = item_ids.get(name) else {
                log::error!("ingredient {name} missing from item seed");
                continue;
            };
            ctx.db.recipe_ingredient().insert(RecipeIngredient {
                id: 0,
                recipe_id: recipe.id,
                item_id: ingredient_id,
                quantity: *quantity,
            });
        }
    }

    for def in catalog::MONSTERS {
        ctx.db.monster().insert(Monster {
            id: 0,
            name: def.name.to_string(),
            tier: tier_col(def.tier),
        });
    }

    for def in catalog::TEMPLATES {
        ctx.db.adventure_template().insert(AdventureTemplate {
            id: 0,
            name: def.name.to_string(),
            description: def.description.to_string(),
            kind: template_kind_col(def.kind),
        });
    }

    for def in catalog::SHOPS {
        let shop = ctx.db.shop().insert(Shop {
            id: 0,
            name: def.name.to_string(),
            category: category_col(def.category),
            last_refresh: ctx.timestamp,
        });
        for item in catalog::ITEMS.iter().filter(|i| i.category == def.category) {
            let Some(&item_id) = item_ids.get(item.name) else {
                continue;
            };
            ctx.db.shop_stock().insert(ShopStock {
                id: 0,
                shop_id: shop.id,
                item_id,
                quantity: economy::INITIAL_STOCK_QUANTITY,
                price: economy::initial_stock_price(item.base_price),
            });
        }
    }

    log::info!(
        "seeded catalog: {} items, {} recipes, {} monsters, {} templates, {} shops",
        catalog::ITEMS.len(),
        catalog::RECIPES.len(),
        catalog::MONSTERS.len(),
        catalog::TEMPLATES.len(),
        catalog::SHOPS.len()
    );
}

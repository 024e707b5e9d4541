//! Static reference data: items, recipes, monsters, adventure templates,
//! and shops.
//!
//! The catalog is read-only to the engine. The server module seeds its
//! tables from these definitions at init; everything here is keyed by
//! item name, which is unique (tested below).

use crate::skills::SkillKind;
use crate::tier::Tier;
use serde::{Deserialize, Serialize};

/// Whether an item is gathered or crafted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Material,
    Product,
}

/// Item family, also used to group shop inventories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Wood,
    Mining,
    Animal,
    Plants,
    Basic,
    Ingot,
    Gear,
    Food,
    Trade,
    Medicine,
}

/// Cosmetic rarity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Narrative flavor of an adventure; does not affect rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateKind {
    Hunt,
    Resource,
    Escort,
    Dungeon,
    Exploration,
    Contract,
}

/// One catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemDef {
    pub name: &'static str,
    pub kind: ItemKind,
    pub category: ItemCategory,
    pub rarity: Rarity,
    pub tier: Tier,
    pub damage: u32,
    pub stat_value: u32,
    pub base_price: u64,
}

/// One crafting or cooking recipe. Ingredient order is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeDef {
    pub output: &'static str,
    pub skill: SkillKind,
    pub duration_secs: u32,
    pub min_skill_level: u32,
    pub success_rate: u32,
    pub xp_reward: u32,
    pub ingredients: &'static [(&'static str, u32)],
}

/// A monster that can front an adventure of its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterDef {
    pub name: &'static str,
    pub tier: Tier,
}

/// An adventure template: name, blurb, and flavor type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateDef {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: TemplateKind,
}

/// A shop and the item category it deals in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopDef {
    pub name: &'static str,
    pub category: ItemCategory,
}

#[allow(clippy::too_many_arguments)]
const fn item(
    name: &'static str,
    kind: ItemKind,
    category: ItemCategory,
    rarity: Rarity,
    tier: Tier,
    damage: u32,
    stat_value: u32,
    base_price: u64,
) -> ItemDef {
    ItemDef {
        name,
        kind,
        category,
        rarity,
        tier,
        damage,
        stat_value,
        base_price,
    }
}

const fn recipe(
    output: &'static str,
    skill: SkillKind,
    duration_secs: u32,
    min_skill_level: u32,
    success_rate: u32,
    xp_reward: u32,
    ingredients: &'static [(&'static str, u32)],
) -> RecipeDef {
    RecipeDef {
        output,
        skill,
        duration_secs,
        min_skill_level,
        success_rate,
        xp_reward,
        ingredients,
    }
}

use ItemCategory as C;
use ItemKind::{Material, Product};
use Rarity::{Common, Epic, Legendary, Rare};

/// Every item in the game.
pub const ITEMS: &[ItemDef] = &[
    // Gatherable materials: wood
    item("Common Wood", Material, C::Wood, Common, Tier::F, 0, 0, 5),
    item("Oak Wood", Material, C::Wood, Rare, Tier::D, 0, 0, 15),
    item("Rosewood", Material, C::Wood, Epic, Tier::C, 0, 0, 50),
    item("Stick", Material, C::Wood, Common, Tier::F, 0, 0, 2),
    // Gatherable materials: mining
    item("Stone", Material, C::Mining, Common, Tier::F, 0, 0, 3),
    item("Flint", Material, C::Mining, Common, Tier::F, 0, 0, 4),
    item("Coal", Material, C::Mining, Common, Tier::F, 0, 0, 8),
    item("Copper Ore", Material, C::Mining, Common, Tier::F, 0, 0, 12),
    item("Tin Ore", Material, C::Mining, Common, Tier::F, 0, 0, 12),
    item("Iron Ore", Material, C::Mining, Rare, Tier::D, 0, 0, 20),
    item("Silver Ore", Material, C::Mining, Epic, Tier::C, 0, 0, 40),
    item("Gold Ore", Material, C::Mining, Legendary, Tier::B, 0, 0, 80),
    // Gatherable materials: animal
    item("Raw Meat", Material, C::Animal, Common, Tier::F, 0, 0, 10),
    item("Raw Fish", Material, C::Animal, Common, Tier::F, 0, 0, 8),
    item("Hide", Material, C::Animal, Common, Tier::F, 0, 0, 15),
    item("Bone", Material, C::Animal, Common, Tier::F, 0, 0, 5),
    item("Feather", Material, C::Animal, Common, Tier::F, 0, 0, 4),
    item("Wool", Material, C::Animal, Common, Tier::F, 0, 0, 12),
    item("Milk", Material, C::Animal, Common, Tier::F, 0, 0, 6),
    item("Egg", Material, C::Animal, Common, Tier::F, 0, 0, 3),
    // Gatherable materials: plants
    item("Wheat", Material, C::Plants, Common, Tier::F, 0, 0, 4),
    item("Corn", Material, C::Plants, Common, Tier::F, 0, 0, 5),
    item("Carrot", Material, C::Plants, Common, Tier::F, 0, 0, 6),
    item("Potato", Material, C::Plants, Common, Tier::F, 0, 0, 6),
    item("Berry", Material, C::Plants, Common, Tier::F, 0, 0, 3),
    item("Herbs", Material, C::Plants, Common, Tier::F, 0, 0, 10),
    item("Cotton", Material, C::Plants, Common, Tier::F, 0, 0, 15),
    item("Sugarcane", Material, C::Plants, Common, Tier::F, 0, 0, 12),
    item("Plant Matter", Material, C::Plants, Common, Tier::F, 0, 0, 2),
    item("Fiber", Material, C::Plants, Common, Tier::F, 0, 0, 4),
    // Basic goods
    item("Stick Bundle", Product, C::Basic, Common, Tier::F, 0, 0, 10),
    item("Plank Board", Product, C::Basic, Common, Tier::F, 0, 0, 20),
    item("Stone Brick", Product, C::Basic, Common, Tier::F, 0, 0, 15),
    item("Glass Bottle", Product, C::Basic, Common, Tier::F, 0, 0, 25),
    item("Rope", Product, C::Basic, Common, Tier::F, 0, 0, 15),
    item("Cloth", Product, C::Basic, Common, Tier::F, 0, 0, 30),
    item("Leather", Product, C::Basic, Common, Tier::F, 0, 0, 45),
    item("Leather Strips", Product, C::Basic, Common, Tier::F, 0, 0, 15),
    item("Flour", Product, C::Basic, Common, Tier::F, 0, 0, 12),
    item("Sugar", Product, C::Basic, Common, Tier::F, 0, 0, 25),
    // Ingots
    item("Copper Ingot", Product, C::Ingot, Common, Tier::F, 0, 0, 40),
    item("Tin Ingot", Product, C::Ingot, Common, Tier::F, 0, 0, 40),
    item("Bronze Ingot", Product, C::Ingot, Rare, Tier::D, 0, 0, 100),
    item("Iron Ingot", Product, C::Ingot, Rare, Tier::D, 0, 0, 80),
    item("Steel Ingot", Product, C::Ingot, Epic, Tier::C, 0, 0, 150),
    item("Silver Ingot", Product, C::Ingot, Epic, Tier::C, 0, 0, 120),
    item("Gold Ingot", Product, C::Ingot, Legendary, Tier::B, 0, 0, 250),
    // Weapons & gear, one tier pair each
    item("Training Sword", Product, C::Gear, Common, Tier::F, 5, 0, 50),
    item("Wooden Shield", Product, C::Gear, Common, Tier::F, 2, 0, 40),
    item("Bronze Sword", Product, C::Gear, Rare, Tier::D, 15, 0, 300),
    item("Bronze Shield", Product, C::Gear, Rare, Tier::D, 8, 0, 250),
    item("Iron Sword", Product, C::Gear, Epic, Tier::C, 35, 0, 700),
    item("Iron Shield", Product, C::Gear, Epic, Tier::C, 20, 0, 600),
    item("Steel Sword", Product, C::Gear, Legendary, Tier::B, 75, 0, 1800),
    item("Steel Shield", Product, C::Gear, Legendary, Tier::B, 45, 0, 1500),
    item("Mythril Blade", Product, C::Gear, Legendary, Tier::A, 150, 0, 5000),
    item("Mythril Aegis", Product, C::Gear, Legendary, Tier::A, 100, 0, 4500),
    item("Divine Avenger", Product, C::Gear, Legendary, Tier::S, 350, 0, 25000),
    item("Aegis of the Gods", Product, C::Gear, Legendary, Tier::S, 250, 0, 20000),
    // Food
    item("Cooked Meat", Product, C::Food, Common, Tier::F, 0, 25, 25),
    item("Cooked Fish", Product, C::Food, Common, Tier::F, 0, 20, 20),
    item("Berry Jam", Product, C::Food, Common, Tier::F, 0, 30, 30),
    item("Bread", Product, C::Food, Common, Tier::F, 0, 20, 20),
    item("Vegetable Soup", Product, C::Food, Rare, Tier::D, 0, 45, 45),
    item("Meat Stew", Product, C::Food, Rare, Tier::D, 0, 60, 60),
    item("Meat Pie", Product, C::Food, Epic, Tier::C, 0, 80, 80),
    item("Milk Bottle", Product, C::Food, Common, Tier::F, 0, 40, 40),
    item("Water Bottle", Product, C::Food, Common, Tier::F, 0, 15, 15),
    item("Juice", Product, C::Food, Common, Tier::F, 0, 35, 35),
    item("Ale", Product, C::Food, Common, Tier::F, 0, 50, 50),
    item("Gourmet Steak", Product, C::Food, Rare, Tier::D, 0, 120, 150),
    item("Royal Feast", Product, C::Food, Epic, Tier::B, 0, 350, 500),
    item("Ambrosia", Product, C::Food, Legendary, Tier::S, 0, 1000, 2500),
    // Trade goods
    item("Simple Jewelry", Product, C::Trade, Rare, Tier::D, 0, 0, 500),
    item("Fine Jewelry", Product, C::Trade, Epic, Tier::C, 0, 0, 1500),
    // Medicine
    item("Simple Medicine", Product, C::Medicine, Common, Tier::F, 0, 50, 100),
    item("Strong Medicine", Product, C::Medicine, Rare, Tier::D, 0, 150, 300),
];

use SkillKind::{Cooking, Crafting};

/// Every recipe in the game.
pub const RECIPES: &[RecipeDef] = &[
    // Basic goods
    recipe("Stick Bundle", Crafting, 5, 1, 100, 5, &[("Stick", 5)]),
    recipe("Plank Board", Crafting, 10, 1, 100, 8, &[("Common Wood", 2)]),
    recipe("Stone Brick", Crafting, 8, 1, 100, 8, &[("Stone", 3)]),
    recipe("Glass Bottle", Crafting, 12, 2, 100, 12, &[("Stone", 2), ("Coal", 1)]),
    recipe("Rope", Crafting, 6, 1, 100, 5, &[("Fiber", 5)]),
    recipe("Cloth", Crafting, 10, 3, 100, 15, &[("Cotton", 3)]),
    recipe("Leather", Crafting, 15, 4, 100, 20, &[("Hide", 2)]),
    recipe("Leather Strips", Crafting, 5, 2, 100, 5, &[("Leather", 1)]),
    recipe("Flour", Crafting, 8, 1, 100, 5, &[("Wheat", 3)]),
    recipe("Sugar", Crafting, 10, 2, 100, 10, &[("Sugarcane", 2)]),
    // Ingots
    recipe("Copper Ingot", Crafting, 15, 5, 100, 20, &[("Copper Ore", 3), ("Coal", 1)]),
    recipe("Tin Ingot", Crafting, 15, 5, 100, 20, &[("Tin Ore", 3), ("Coal", 1)]),
    recipe("Bronze Ingot", Crafting, 25, 10, 95, 40, &[("Copper Ingot", 2), ("Tin Ingot", 1)]),
    recipe("Iron Ingot", Crafting, 20, 15, 90, 60, &[("Iron Ore", 3), ("Coal", 2)]),
    recipe("Steel Ingot", Crafting, 40, 30, 85, 120, &[("Iron Ingot", 1), ("Coal", 4)]),
    recipe("Silver Ingot", Crafting, 30, 25, 90, 100, &[("Silver Ore", 3), ("Coal", 2)]),
    recipe("Gold Ingot", Crafting, 60, 40, 80, 250, &[("Gold Ore", 3), ("Coal", 3)]),
    // Gear, tier by tier
    recipe("Training Sword", Crafting, 30, 1, 100, 20, &[("Stick Bundle", 2), ("Stone", 2)]),
    recipe("Wooden Shield", Crafting, 25, 1, 100, 15, &[("Plank Board", 2), ("Stick", 2)]),
    recipe("Bronze Sword", Crafting, 90, 10, 90, 80, &[("Bronze Ingot", 5), ("Leather Strips", 2)]),
    recipe("Bronze Shield", Crafting, 80, 10, 90, 70, &[("Bronze Ingot", 4), ("Plank Board", 2)]),
    recipe("Iron Sword", Crafting, 150, 25, 80, 200, &[("Iron Ingot", 6), ("Leather Strips", 3)]),
    recipe("Iron Shield", Crafting, 130, 25, 80, 180, &[("Iron Ingot", 5), ("Plank Board", 3)]),
    recipe("Steel Sword", Crafting, 300, 45, 70, 500, &[("Steel Ingot", 8), ("Leather Strips", 5)]),
    recipe("Steel Shield", Crafting, 280, 45, 70, 450, &[("Steel Ingot", 7), ("Plank Board", 5)]),
    recipe(
        "Mythril Blade",
        Crafting,
        600,
        70,
        60,
        1500,
        &[("Gold Ingot", 5), ("Silver Ingot", 10), ("Rosewood", 5)],
    ),
    recipe(
        "Mythril Aegis",
        Crafting,
        550,
        70,
        60,
        1200,
        &[("Gold Ingot", 4), ("Silver Ingot", 8), ("Rosewood", 5)],
    ),
    recipe(
        "Divine Avenger",
        Crafting,
        1200,
        95,
        50,
        5000,
        &[("Gold Ingot", 20), ("Silver Ingot", 20), ("Rosewood", 10)],
    ),
    recipe(
        "Aegis of the Gods",
        Crafting,
        1100,
        95,
        50,
        4500,
        &[("Gold Ingot", 15), ("Silver Ingot", 15), ("Rosewood", 10)],
    ),
    // Cooking
    recipe("Cooked Meat", Cooking, 10, 1, 100, 10, &[("Raw Meat", 1), ("Coal", 1)]),
    recipe("Cooked Fish", Cooking, 10, 1, 100, 10, &[("Raw Fish", 1), ("Coal", 1)]),
    recipe(
        "Berry Jam",
        Cooking,
        15,
        3,
        100,
        15,
        &[("Berry", 5), ("Sugar", 1), ("Glass Bottle", 1)],
    ),
    recipe("Bread", Cooking, 12, 5, 100, 15, &[("Flour", 2), ("Milk", 1)]),
    recipe(
        "Vegetable Soup",
        Cooking,
        20,
        10,
        95,
        25,
        &[("Potato", 2), ("Carrot", 2), ("Water Bottle", 1)],
    ),
    recipe(
        "Meat Stew",
        Cooking,
        25,
        15,
        90,
        35,
        &[("Raw Meat", 2), ("Potato", 2), ("Water Bottle", 1)],
    ),
    recipe(
        "Meat Pie",
        Cooking,
        35,
        25,
        85,
        50,
        &[("Raw Meat", 2), ("Flour", 2), ("Egg", 2)],
    ),
    recipe("Milk Bottle", Cooking, 5, 1, 100, 5, &[("Milk", 1), ("Glass Bottle", 1)]),
    recipe("Water Bottle", Cooking, 5, 1, 100, 2, &[("Glass Bottle", 1)]),
    recipe(
        "Juice",
        Cooking,
        15,
        5,
        100,
        15,
        &[("Berry", 5), ("Sugar", 1), ("Glass Bottle", 1)],
    ),
    recipe(
        "Ale",
        Cooking,
        30,
        15,
        90,
        40,
        &[("Wheat", 5), ("Sugarcane", 2), ("Glass Bottle", 1)],
    ),
    recipe(
        "Gourmet Steak",
        Cooking,
        60,
        40,
        80,
        150,
        &[("Raw Meat", 3), ("Herbs", 2), ("Coal", 2)],
    ),
    recipe(
        "Royal Feast",
        Cooking,
        180,
        70,
        65,
        600,
        &[("Raw Meat", 5), ("Raw Fish", 5), ("Vegetable Soup", 2), ("Ale", 2)],
    ),
    recipe(
        "Ambrosia",
        Cooking,
        600,
        95,
        45,
        2500,
        &[("Royal Feast", 1), ("Berry Jam", 5), ("Milk Bottle", 5), ("Gold Ore", 1)],
    ),
    // Trade goods
    recipe("Simple Jewelry", Crafting, 120, 1, 100, 10, &[("Silver Ingot", 1), ("Gold Ingot", 1)]),
    recipe("Fine Jewelry", Crafting, 300, 1, 100, 10, &[("Gold Ingot", 3), ("Silver Ingot", 2)]),
    // Medicine
    recipe("Simple Medicine", Crafting, 30, 1, 100, 10, &[("Herbs", 5), ("Glass Bottle", 1)]),
    recipe(
        "Strong Medicine",
        Crafting,
        60,
        1,
        100,
        10,
        &[("Herbs", 10), ("Berry", 5), ("Glass Bottle", 1)],
    ),
];

const fn monster(name: &'static str, tier: Tier) -> MonsterDef {
    MonsterDef { name, tier }
}

/// Every monster, five per tier.
pub const MONSTERS: &[MonsterDef] = &[
    monster("Forest Slime", Tier::F),
    monster("Wild Boar", Tier::F),
    monster("Cave Rat", Tier::F),
    monster("Stray Wolf", Tier::F),
    monster("Bandit Scout", Tier::F),
    monster("Dire Wolf", Tier::D),
    monster("Goblin Raider", Tier::D),
    monster("Skeleton Soldier", Tier::D),
    monster("Swamp Serpent", Tier::D),
    monster("Rogue Mercenary", Tier::D),
    monster("Orc Warrior", Tier::C),
    monster("Troll Brute", Tier::C),
    monster("Shadow Stalker", Tier::C),
    monster("Fire Imp", Tier::C),
    monster("Undead Knight", Tier::C),
    monster("Ogre Warlord", Tier::B),
    monster("Dark Mage", Tier::B),
    monster("Frost Giant", Tier::B),
    monster("Stone Golem", Tier::B),
    monster("Assassin Captain", Tier::B),
    monster("Ancient Wyvern", Tier::A),
    monster("Arch Lich", Tier::A),
    monster("Demon General", Tier::A),
    monster("Titan Guardian", Tier::A),
    monster("Void Reaper", Tier::A),
    monster("Dragon Sovereign", Tier::S),
    monster("Abyssal Leviathan", Tier::S),
    monster("Fallen Seraph", Tier::S),
    monster("World Devourer", Tier::S),
    monster("Chaos Overlord", Tier::S),
];

/// The six adventure templates.
pub const TEMPLATES: &[TemplateDef] = &[
    TemplateDef {
        name: "Monster Hunt",
        description: "Defeat a specific monster threatening the region.",
        kind: TemplateKind::Hunt,
    },
    TemplateDef {
        name: "Resource Expedition",
        description: "Gather rare materials from dangerous territories.",
        kind: TemplateKind::Resource,
    },
    TemplateDef {
        name: "Escort Mission",
        description: "Protect a merchant caravan through hostile lands.",
        kind: TemplateKind::Escort,
    },
    TemplateDef {
        name: "Dungeon Raid",
        description: "A multi-phase encounter deep within ancient ruins.",
        kind: TemplateKind::Dungeon,
    },
    TemplateDef {
        name: "Exploration",
        description: "Venture into the unknown for rare discoveries.",
        kind: TemplateKind::Exploration,
    },
    TemplateDef {
        name: "Guild Contract",
        description: "High-prestige competitive contract for guild promotion.",
        kind: TemplateKind::Contract,
    },
];

/// The six town shops.
pub const SHOPS: &[ShopDef] = &[
    ShopDef {
        name: "The Woodcutter",
        category: C::Wood,
    },
    ShopDef {
        name: "Blacksmith",
        category: C::Mining,
    },
    ShopDef {
        name: "Bakery",
        category: C::Plants,
    },
    ShopDef {
        name: "Trapper's Lodge",
        category: C::Animal,
    },
    ShopDef {
        name: "General Store",
        category: C::Basic,
    },
    ShopDef {
        name: "Apothecary",
        category: C::Medicine,
    },
];

/// Look up an item definition by its unique name.
pub fn find_item(name: &str) -> Option<&'static ItemDef> {
    ITEMS.iter().find(|item| item.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventure::WATER_ITEM;
    use crate::gathering::{unlock_table, GatherCategory};
    use std::collections::HashSet;

    #[test]
    fn item_names_are_unique() {
        let mut seen = HashSet::new();
        for item in ITEMS {
            assert!(seen.insert(item.name), "duplicate item {}", item.name);
        }
    }

    #[test]
    fn prices_are_positive() {
        for item in ITEMS {
            assert!(item.base_price > 0, "{} has no price", item.name);
        }
    }

    #[test]
    fn recipes_reference_real_items() {
        for r in RECIPES {
            let output = find_item(r.output).unwrap_or_else(|| panic!("missing {}", r.output));
            assert_eq!(output.kind, ItemKind::Product, "{} is not craftable", r.output);
            assert!(r.duration_secs > 0 && r.min_skill_level >= 1);
            assert!(r.success_rate <= 100);
            assert!(!r.ingredients.is_empty());
            for (name, qty) in r.ingredients {
                assert!(find_item(name).is_some(), "{} needs unknown {name}", r.output);
                assert!(*qty > 0);
            }
        }
    }

    #[test]
    fn recipes_use_only_crafting_and_cooking() {
        for r in RECIPES {
            assert!(
                matches!(r.skill, SkillKind::Crafting | SkillKind::Cooking),
                "{} uses a gathering skill",
                r.output
            );
        }
    }

    #[test]
    fn unlock_tables_name_real_materials() {
        for category in GatherCategory::ALL {
            for (name, level) in unlock_table(category) {
                let item = find_item(name).unwrap_or_else(|| panic!("unknown {name}"));
                assert_eq!(item.kind, ItemKind::Material);
                assert_eq!(item.category, category.item_category());
                assert!(*level >= 1);
            }
        }
    }

    #[test]
    fn adventure_supplies_exist() {
        let water = find_item(WATER_ITEM).expect("water item missing");
        assert_eq!(water.category, ItemCategory::Food);

        let medicine = ITEMS
            .iter()
            .filter(|i| i.category == ItemCategory::Medicine)
            .count();
        assert!(medicine > 0);

        // Food besides water, so tier requirements are satisfiable.
        let food = ITEMS
            .iter()
            .filter(|i| i.category == ItemCategory::Food && i.name != WATER_ITEM)
            .count();
        assert!(food > 0);
    }

    #[test]
    fn every_tier_has_monsters() {
        for tier in Tier::ALL {
            assert!(
                MONSTERS.iter().any(|m| m.tier == tier),
                "no monsters at tier {tier}"
            );
        }
    }

    #[test]
    fn every_shop_category_is_stocked() {
        for shop in SHOPS {
            assert!(
                ITEMS.iter().any(|i| i.category == shop.category),
                "{} has nothing to sell",
                shop.name
            );
        }
    }

    #[test]
    fn gear_tiers_all_have_a_downgrade_path_except_f() {
        // Every non-F gear product has at least one product one tier
        // below in the same category, so downgrades can always land.
        for item in ITEMS.iter().filter(|i| {
            i.kind == ItemKind::Product && i.category == ItemCategory::Gear && i.tier != Tier::F
        }) {
            let below = item.tier.next_down().unwrap();
            assert!(
                ITEMS.iter().any(|i| {
                    i.kind == ItemKind::Product
                        && i.category == ItemCategory::Gear
                        && i.tier == below
                }),
                "{} has no downgrade target",
                item.name
            );
        }
    }
}

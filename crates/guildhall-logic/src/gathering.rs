//! Gathering categories, durations, and skill unlock tables.
//!
//! Each of the four gathering categories has a fixed task duration and a
//! fixed unlock table mapping material names to the skill level that
//! makes them eligible. The reward is one eligible material chosen
//! uniformly, in a stack of 1–3, plus xp scaling with the track level.

use crate::catalog::ItemCategory;
use crate::skills::SkillKind;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four gatherable categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GatherCategory {
    Wood,
    Mining,
    Animal,
    Plants,
}

impl GatherCategory {
    pub const ALL: [GatherCategory; 4] = [
        GatherCategory::Wood,
        GatherCategory::Mining,
        GatherCategory::Animal,
        GatherCategory::Plants,
    ];

    /// The skill track that levels from (and gates) this category.
    pub fn skill(self) -> SkillKind {
        match self {
            GatherCategory::Wood => SkillKind::Wood,
            GatherCategory::Mining => SkillKind::Mining,
            GatherCategory::Animal => SkillKind::Animal,
            GatherCategory::Plants => SkillKind::Plants,
        }
    }

    /// The item category this gathering yields from.
    pub fn item_category(self) -> ItemCategory {
        match self {
            GatherCategory::Wood => ItemCategory::Wood,
            GatherCategory::Mining => ItemCategory::Mining,
            GatherCategory::Animal => ItemCategory::Animal,
            GatherCategory::Plants => ItemCategory::Plants,
        }
    }

    /// Fixed task duration.
    pub fn duration_secs(self) -> u32 {
        match self {
            GatherCategory::Wood => 60,
            GatherCategory::Mining => 300,
            GatherCategory::Animal => 120,
            GatherCategory::Plants => 30,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GatherCategory::Wood => "wood",
            GatherCategory::Mining => "mining",
            GatherCategory::Animal => "animal",
            GatherCategory::Plants => "plants",
        }
    }
}

impl fmt::Display for GatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const WOOD_UNLOCKS: &[(&str, u32)] = &[
    ("Common Wood", 1),
    ("Stick", 1),
    ("Oak Wood", 5),
    ("Rosewood", 15),
];

const MINING_UNLOCKS: &[(&str, u32)] = &[
    ("Stone", 1),
    ("Flint", 1),
    ("Coal", 1),
    ("Copper Ore", 1),
    ("Tin Ore", 1),
    ("Iron Ore", 5),
    ("Silver Ore", 15),
    ("Gold Ore", 30),
];

const ANIMAL_UNLOCKS: &[(&str, u32)] = &[
    ("Raw Meat", 1),
    ("Raw Fish", 1),
    ("Hide", 1),
    ("Milk", 1),
    ("Egg", 1),
    ("Bone", 5),
    ("Feather", 5),
    ("Wool", 5),
];

const PLANTS_UNLOCKS: &[(&str, u32)] = &[
    ("Wheat", 1),
    ("Corn", 1),
    ("Carrot", 1),
    ("Potato", 1),
    ("Berry", 1),
    ("Plant Matter", 1),
    ("Fiber", 1),
    ("Herbs", 5),
    ("Cotton", 15),
    ("Sugarcane", 15),
];

/// The unlock table for a category: (material name, minimum skill level).
pub fn unlock_table(category: GatherCategory) -> &'static [(&'static str, u32)] {
    match category {
        GatherCategory::Wood => WOOD_UNLOCKS,
        GatherCategory::Mining => MINING_UNLOCKS,
        GatherCategory::Animal => ANIMAL_UNLOCKS,
        GatherCategory::Plants => PLANTS_UNLOCKS,
    }
}

/// Minimum skill level for a material, or `None` if the material is not
/// gatherable in this category at any level.
pub fn unlock_level(category: GatherCategory, item_name: &str) -> Option<u32> {
    unlock_table(category)
        .iter()
        .find(|(name, _)| *name == item_name)
        .map(|(_, level)| *level)
}

/// Smallest and largest stack a single gather can yield.
pub const MIN_YIELD: u32 = 1;
pub const MAX_YIELD: u32 = 3;

/// Xp for one completed gather at the given track level.
pub fn gather_xp(skill_level: u32) -> u32 {
    10 + 2 * skill_level
}

/// Resolved gather: which eligible material was chosen (an index into the
/// caller's pool), the stack size, and the xp to award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatherResolution {
    pub pick: usize,
    pub quantity: u32,
    pub xp_gained: u32,
}

/// Resolve a gather over `eligible` candidates. Returns `None` when the
/// pool is empty, which the shipped catalog never produces.
pub fn resolve(eligible: usize, skill_level: u32, rng: &mut impl Rng) -> Option<GatherResolution> {
    if eligible == 0 {
        return None;
    }
    Some(GatherResolution {
        pick: rng.gen_range(0..eligible),
        quantity: rng.gen_range(MIN_YIELD..=MAX_YIELD),
        xp_gained: gather_xp(skill_level),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn eligible_names(category: GatherCategory, level: u32) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = catalog::ITEMS
            .iter()
            .filter(|item| {
                item.kind == catalog::ItemKind::Material
                    && item.category == category.item_category()
            })
            .filter(|item| unlock_level(category, item.name).is_some_and(|min| level >= min))
            .map(|item| item.name)
            .collect();
        names.sort_unstable();
        names
    }

    #[test]
    fn wood_unlocks_widen_with_level() {
        assert_eq!(eligible_names(GatherCategory::Wood, 1), ["Common Wood", "Stick"]);
        assert_eq!(
            eligible_names(GatherCategory::Wood, 5),
            ["Common Wood", "Oak Wood", "Stick"]
        );
        assert_eq!(
            eligible_names(GatherCategory::Wood, 15),
            ["Common Wood", "Oak Wood", "Rosewood", "Stick"]
        );
    }

    #[test]
    fn mining_gold_needs_level_thirty() {
        assert!(!eligible_names(GatherCategory::Mining, 29).contains(&"Gold Ore"));
        assert!(eligible_names(GatherCategory::Mining, 30).contains(&"Gold Ore"));
    }

    #[test]
    fn every_category_has_level_one_materials() {
        for category in GatherCategory::ALL {
            assert!(
                !eligible_names(category, 1).is_empty(),
                "{category} has nothing gatherable at level 1"
            );
        }
    }

    #[test]
    fn unknown_names_stay_locked() {
        assert_eq!(unlock_level(GatherCategory::Wood, "Gold Ore"), None);
        assert_eq!(unlock_level(GatherCategory::Plants, "Water Bottle"), None);
    }

    #[test]
    fn durations_match_category_table() {
        assert_eq!(GatherCategory::Wood.duration_secs(), 60);
        assert_eq!(GatherCategory::Mining.duration_secs(), 300);
        assert_eq!(GatherCategory::Animal.duration_secs(), 120);
        assert_eq!(GatherCategory::Plants.duration_secs(), 30);
    }

    #[test]
    fn resolution_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let r = resolve(4, 7, &mut rng).unwrap();
            assert!(r.pick < 4);
            assert!((MIN_YIELD..=MAX_YIELD).contains(&r.quantity));
            assert_eq!(r.xp_gained, 24);
        }
        assert!(resolve(0, 1, &mut rng).is_none());
    }
}

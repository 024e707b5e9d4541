//! Mapping between column enums and the logic crate's enums.
//!
//! The logic crate stays free of SpacetimeDB types, so the boundary is a
//! handful of explicit conversions: `*_of` reads a column into a rules
//! value, `*_col` writes a rules value into a column.

use crate::tables;
use guildhall_logic::catalog;
use guildhall_logic::gathering;
use guildhall_logic::skills;
use guildhall_logic::tier;

pub(crate) fn tier_of(t: tables::Tier) -> tier::Tier {
    match t {
        tables::Tier::F => tier::Tier::F,
        tables::Tier::D => tier::Tier::D,
        tables::Tier::C => tier::Tier::C,
        tables::Tier::B => tier::Tier::B,
        tables::Tier::A => tier::Tier::A,
        tables::Tier::S => tier::Tier::S,
    }
}

pub(crate) fn tier_col(t: tier::Tier) -> tables::Tier {
    match t {
        tier::Tier::F => tables::Tier::F,
        tier::Tier::D => tables::Tier::D,
        tier::Tier::C => tables::Tier::C,
        tier::Tier::B => tables::Tier::B,
        tier::Tier::A => tables::Tier::A,
        tier::Tier::S => tables::Tier::S,
    }
}

pub(crate) fn skill_of(k: tables::SkillKind) -> skills::SkillKind {
    match k {
        tables::SkillKind::Wood => skills::SkillKind::Wood,
        tables::SkillKind::Mining => skills::SkillKind::Mining,
        tables::SkillKind::Animal => skills::SkillKind::Animal,
        tables::SkillKind::Plants => skills::SkillKind::Plants,
        tables::SkillKind::Crafting => skills::SkillKind::Crafting,
        tables::SkillKind::Cooking => skills::SkillKind::Cooking,
    }
}

pub(crate) fn skill_col(k: skills::SkillKind) -> tables::SkillKind {
    match k {
        skills::SkillKind::Wood => tables::SkillKind::Wood,
        skills::SkillKind::Mining => tables::SkillKind::Mining,
        skills::SkillKind::Animal => tables::SkillKind::Animal,
        skills::SkillKind::Plants => tables::SkillKind::Plants,
        skills::SkillKind::Crafting => tables::SkillKind::Crafting,
        skills::SkillKind::Cooking => tables::SkillKind::Cooking,
    }
}

pub(crate) fn gather_of(c: tables::GatherCategory) -> gathering::GatherCategory {
    match c {
        tables::GatherCategory::Wood => gathering::GatherCategory::Wood,
        tables::GatherCategory::Mining => gathering::GatherCategory::Mining,
        tables::GatherCategory::Animal => gathering::GatherCategory::Animal,
        tables::GatherCategory::Plants => gathering::GatherCategory::Plants,
    }
}

pub(crate) fn item_kind_col(k: catalog::ItemKind) -> tables::ItemKind {
    match k {
        catalog::ItemKind::Material => tables::ItemKind::Material,
        catalog::ItemKind::Product => tables::ItemKind::Product,
    }
}

pub(crate) fn category_col(c: catalog::ItemCategory) -> tables::ItemCategory {
    match c {
        catalog::ItemCategory::Wood => tables::ItemCategory::Wood,
        catalog::ItemCategory::Mining => tables::ItemCategory::Mining,
        catalog::ItemCategory::Animal => tables::ItemCategory::Animal,
        catalog::ItemCategory::Plants => tables::ItemCategory::Plants,
        catalog::ItemCategory::Basic => tables::ItemCategory::Basic,
        catalog::ItemCategory::Ingot => tables::ItemCategory::Ingot,
        catalog::ItemCategory::Gear => tables::ItemCategory::Gear,
        catalog::ItemCategory::Food => tables::ItemCategory::Food,
        catalog::ItemCategory::Trade => tables::ItemCategory::Trade,
        catalog::ItemCategory::Medicine => tables::ItemCategory::Medicine,
    }
}

pub(crate) fn rarity_col(r: catalog::Rarity) -> tables::Rarity {
    match r {
        catalog::Rarity::Common => tables::Rarity::Common,
        catalog::Rarity::Rare => tables::Rarity::Rare,
        catalog::Rarity::Epic => tables::Rarity::Epic,
        catalog::Rarity::Legendary => tables::Rarity::Legendary,
    }
}

pub(crate) fn template_kind_col(k: catalog::TemplateKind) -> tables::TemplateKind {
    match k {
        catalog::TemplateKind::Hunt => tables::TemplateKind::Hunt,
        catalog::TemplateKind::Resource => tables::TemplateKind::Resource,
        catalog::TemplateKind::Escort => tables::TemplateKind::Escort,
        catalog::TemplateKind::Dungeon => tables::TemplateKind::Dungeon,
        catalog::TemplateKind::Exploration => tables::TemplateKind::Exploration,
        catalog::TemplateKind::Contract => tables::TemplateKind::Contract,
    }
}

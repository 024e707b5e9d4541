//! SpacetimeDB table definitions for the Guildhall backend.
//!
//! Durable state only: the rules that read and write these rows live in
//! `guildhall-logic`. Column enums mirror the logic crate's enums; the
//! `convert` module maps between the two.

use serde::{Deserialize, Serialize};
use spacetimedb::{table, Identity, SpacetimeType, Timestamp};

// ============================================================================
// COLUMN ENUMS
// ============================================================================

/// F..S ordinal grade for items, monsters, adventures, and player rank.
#[derive(SpacetimeType, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    F,
    D,
    C,
    B,
    A,
    S,
}

/// The six skill tracks.
#[derive(SpacetimeType, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillKind {
    Wood,
    Mining,
    Animal,
    Plants,
    Crafting,
    Cooking,
}

/// The four gatherable categories.
#[derive(SpacetimeType, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GatherCategory {
    Wood,
    Mining,
    Animal,
    Plants,
}

/// The three timed activity types; a player may run one of each at a time.
#[derive(SpacetimeType, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    Crafting,
    Gathering,
    Adventure,
}

/// Whether an item is gathered or crafted.
#[derive(SpacetimeType, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Material,
    Product,
}

/// Item family, also used to group shop inventories.
#[derive(SpacetimeType, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
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
#[derive(SpacetimeType, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Narrative flavor of an adventure template.
#[derive(SpacetimeType, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateKind {
    Hunt,
    Resource,
    Escort,
    Dungeon,
    Exploration,
    Contract,
}

// ============================================================================
// PLAYERS & SKILLS
// ============================================================================

/// Player profile, keyed by the client identity. Created lazily on first
/// contact and self-healed by any reducer that needs it.
#[table(name = player, public)]
#[derive(Clone)]
pub struct Player {
    #[primary_key]
    pub id: Identity,
    pub gold: u64,
    pub level: u32,
    pub xp: u32,
    pub rank: Tier,
    pub rank_level: u32,
    pub adventure_xp: u32,
    pub completed_adventures: u32,
    pub last_adventure_claim: Timestamp,
}

/// One row per (player, skill track); missing rows materialize at
/// level 1 / 0 xp.
#[table(name = skill, public)]
#[derive(Clone)]
pub struct Skill {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    #[index(btree)]
    pub player_id: Identity,
    pub kind: SkillKind,
    pub level: u32,
    pub xp: u32,
}

/// Item stacks held by players. Quantities never go negative; zero rows
/// are kept rather than pruned.
#[table(name = inventory, public)]
#[derive(Clone)]
pub struct InventoryEntry {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    #[index(btree)]
    pub player_id: Identity,
    pub item_id: u64,
    pub quantity: u32,
}

// ============================================================================
// CATALOG (immutable after seeding)
// ============================================================================

/// Reference item data.
#[table(name = item, public)]
#[derive(Clone)]
pub struct Item {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    #[unique]
    pub name: String,
    pub kind: ItemKind,
    pub category: ItemCategory,
    pub rarity: Rarity,
    pub tier: Tier,
    pub damage: u32,
    pub stat_value: u32,
    pub base_price: u64,
}

/// Crafting/cooking recipe for one output item.
#[table(name = recipe, public)]
#[derive(Clone)]
pub struct Recipe {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    pub item_id: u64,
    pub skill: SkillKind,
    pub duration_secs: u32,
    pub min_skill_level: u32,
    pub success_rate: u32,
    pub xp_reward: u32,
}

/// One ingredient line of a recipe.
#[table(name = recipe_ingredient, public)]
#[derive(Clone)]
pub struct RecipeIngredient {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    #[index(btree)]
    pub recipe_id: u64,
    pub item_id: u64,
    pub quantity: u32,
}

/// Monster flavor data, sampled at adventure start.
#[table(name = monster, public)]
#[derive(Clone)]
pub struct Monster {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    pub name: String,
    pub tier: Tier,
}

/// Adventure template flavor data.
#[table(name = adventure_template, public)]
#[derive(Clone)]
pub struct AdventureTemplate {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    pub name: String,
    pub description: String,
    pub kind: TemplateKind,
}

// ============================================================================
// TASKS
// ============================================================================

/// Narrative snapshot taken when an adventure starts; catalog edits never
/// reach an in-flight task.
#[derive(SpacetimeType, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdventureDetail {
    pub tier: Tier,
    pub template_id: u64,
    pub monster_name: String,
    pub template_name: String,
    pub template_kind: TemplateKind,
}

/// Type-specific task payload.
#[derive(SpacetimeType, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TaskTarget {
    Craft(u64),
    Gather(GatherCategory),
    Adventure(AdventureDetail),
}

impl TaskTarget {
    pub fn kind(&self) -> TaskKind {
        match self {
            TaskTarget::Craft(_) => TaskKind::Crafting,
            TaskTarget::Gather(_) => TaskKind::Gathering,
            TaskTarget::Adventure(_) => TaskKind::Adventure,
        }
    }
}

/// A timed activity in flight. At most one row per (player, kind);
/// created by a start reducer, destroyed by the matching claim, never
/// otherwise mutated. "Claimable" is `now >= ends_at`, not a stored flag.
#[table(name = active_task, public)]
#[derive(Clone)]
pub struct ActiveTask {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    #[index(btree)]
    pub player_id: Identity,
    pub kind: TaskKind,
    pub target: TaskTarget,
    pub started_at: Timestamp,
    pub ends_at: Timestamp,
}

/// Latest claim outcome per (player, kind), replaced on every claim.
/// This is the client's view of "what did my task pay out".
#[table(name = task_result, public)]
#[derive(Clone)]
pub struct TaskResult {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    #[index(btree)]
    pub player_id: Identity,
    pub kind: TaskKind,
    pub status: String,
    pub reward_item: Option<String>,
    pub quantity: u32,
    pub xp_gained: u32,
    pub new_rank: Option<Tier>,
    pub new_rank_level: Option<u32>,
    pub finished_at: Timestamp,
}

// ============================================================================
// GUILDS
// ============================================================================

/// A guild: class runs 12 (new) down to 1 (highest prestige).
#[table(name = guild, public)]
#[derive(Clone)]
pub struct Guild {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    #[unique]
    pub name: String,
    pub class: u32,
    pub leader_id: Identity,
}

/// Guild roster; the unique player column enforces "at most one guild
/// per player" in the store itself.
#[table(name = guild_member, public)]
#[derive(Clone)]
pub struct GuildMember {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    #[index(btree)]
    pub guild_id: u64,
    #[unique]
    pub player_id: Identity,
}

// ============================================================================
// SHOPS
// ============================================================================

/// A town shop dealing in one item category.
#[table(name = shop, public)]
#[derive(Clone)]
pub struct Shop {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    pub name: String,
    pub category: ItemCategory,
    pub last_refresh: Timestamp,
}

/// Current stock of one item at one shop.
#[table(name = shop_stock, public)]
#[derive(Clone)]
pub struct ShopStock {
    #[primary_key]
    #[auto_inc]
    pub id: u64,
    #[index(btree)]
    pub shop_id: u64,
    pub item_id: u64,
    pub quantity: u32,
    pub price: u64,
}

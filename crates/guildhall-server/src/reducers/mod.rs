//! Client-facing reducers and their shared plumbing.
//!
//! Each reducer is one serialized transaction: the check-then-act
//! sequences below (no duplicate task, no early claim, no negative
//! stack) need no further locking, and an `Err` return rolls everything
//! back, so the first failing precondition leaves no partial mutation.

mod adventure;
mod crafting;
mod gathering;
mod guild;
mod lifecycle;
mod shop;

pub use adventure::*;
pub use crafting::*;
pub use gathering::*;
pub use guild::*;
pub use lifecycle::*;
pub use shop::*;

use crate::tables::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spacetimedb::{Identity, ReducerContext, Table, Timestamp};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Activity label used in task error messages.
pub(crate) fn activity_name(kind: TaskKind) -> &'static str {
    match kind {
        TaskKind::Crafting => "crafting",
        TaskKind::Gathering => "gathering",
        TaskKind::Adventure => "adventure",
    }
}

/// RNG for one reducer call, seeded from the transaction timestamp and
/// the caller so outcomes stay deterministic per invocation.
pub(crate) fn engine_rng(ctx: &ReducerContext) -> StdRng {
    let mut hasher = DefaultHasher::new();
    ctx.sender.hash(&mut hasher);
    let seed = (ctx.timestamp.to_micros_since_unix_epoch() as u64) ^ hasher.finish();
    StdRng::seed_from_u64(seed)
}

/// Wall-clock end of a task starting now.
pub(crate) fn task_end(start: Timestamp, duration_secs: u32) -> Timestamp {
    let end_micros = start.to_micros_since_unix_epoch() + i64::from(duration_secs) * 1_000_000;
    Timestamp::from_micros_since_unix_epoch(end_micros)
}

/// Get-or-create the caller's player row (self-healing; same
/// transaction as the caller's request).
pub(crate) fn ensure_player(ctx: &ReducerContext) -> Player {
    if let Some(player) = ctx.db.player().id().find(ctx.sender) {
        return player;
    }
    let player = ctx.db.player().insert(Player {
        id: ctx.sender,
        gold: 100,
        level: 1,
        xp: 0,
        rank: Tier::F,
        rank_level: 1,
        adventure_xp: 0,
        completed_adventures: 0,
        last_adventure_claim: Timestamp::from_micros_since_unix_epoch(0),
    });
    log::info!("created player profile for {:?}", ctx.sender);
    player
}

/// Get-or-create one skill row (level 1, 0 xp).
pub(crate) fn skill_for(ctx: &ReducerContext, player_id: Identity, kind: SkillKind) -> Skill {
    if let Some(skill) = ctx
        .db
        .skill()
        .player_id()
        .filter(player_id)
        .find(|s| s.kind == kind)
    {
        return skill;
    }
    ctx.db.skill().insert(Skill {
        id: 0,
        player_id,
        kind,
        level: 1,
        xp: 0,
    })
}

/// The player's active task of the given kind, if any.
pub(crate) fn active_task(
    ctx: &ReducerContext,
    player_id: Identity,
    kind: TaskKind,
) -> Option<ActiveTask> {
    ctx.db
        .active_task()
        .player_id()
        .filter(player_id)
        .find(|t| t.kind == kind)
}

/// Seconds until `ends_at`, rounded up.
pub(crate) fn remaining_secs(ctx: &ReducerContext, ends_at: Timestamp) -> u64 {
    let remaining_micros = ends_at.to_micros_since_unix_epoch()
        - ctx.timestamp.to_micros_since_unix_epoch();
    ((remaining_micros.max(0) + 999_999) / 1_000_000) as u64
}

pub(crate) fn inventory_entry(
    ctx: &ReducerContext,
    player_id: Identity,
    item_id: u64,
) -> Option<InventoryEntry> {
    ctx.db
        .inventory()
        .player_id()
        .filter(player_id)
        .find(|e| e.item_id == item_id)
}

/// Quantity of one item the player holds.
pub(crate) fn quantity_of(ctx: &ReducerContext, player_id: Identity, item_id: u64) -> u32 {
    inventory_entry(ctx, player_id, item_id)
        .map(|e| e.quantity)
        .unwrap_or(0)
}

/// Add `quantity` of an item to the player's inventory.
pub(crate) fn grant_item(ctx: &ReducerContext, player_id: Identity, item_id: u64, quantity: u32) {
    match inventory_entry(ctx, player_id, item_id) {
        Some(mut entry) => {
            entry.quantity += quantity;
            ctx.db.inventory().id().update(entry);
        }
        None => {
            ctx.db.inventory().insert(InventoryEntry {
                id: 0,
                player_id,
                item_id,
                quantity,
            });
        }
    }
}

/// Remove `quantity` of an item. Callers validate availability first;
/// the same transaction makes that check-then-take atomic.
pub(crate) fn take_item(ctx: &ReducerContext, player_id: Identity, item_id: u64, quantity: u32) {
    if let Some(mut entry) = inventory_entry(ctx, player_id, item_id) {
        entry.quantity = entry.quantity.saturating_sub(quantity);
        ctx.db.inventory().id().update(entry);
    }
}

/// The player's non-empty stacks of one item category, ascending item id,
/// optionally excluding one item name.
pub(crate) fn category_stacks(
    ctx: &ReducerContext,
    player_id: Identity,
    category: ItemCategory,
    exclude_name: Option<&str>,
) -> Vec<(u64, u32)> {
    let mut stacks: Vec<(u64, u32)> = ctx
        .db
        .inventory()
        .player_id()
        .filter(player_id)
        .filter(|entry| entry.quantity > 0)
        .filter(|entry| {
            ctx.db.item().id().find(entry.item_id).is_some_and(|item| {
                item.category == category && exclude_name.map_or(true, |name| item.name != name)
            })
        })
        .map(|entry| (entry.item_id, entry.quantity))
        .collect();
    stacks.sort_unstable_by_key(|(item_id, _)| *item_id);
    stacks
}

/// Drain `needed` units across stacks in the order given, partially
/// draining the last stack as required.
pub(crate) fn drain_stacks(
    ctx: &ReducerContext,
    player_id: Identity,
    stacks: &[(u64, u32)],
    mut needed: u32,
) {
    for (item_id, held) in stacks {
        if needed == 0 {
            break;
        }
        let take = (*held).min(needed);
        take_item(ctx, player_id, *item_id, take);
        needed -= take;
    }
}

/// Replace the player's latest outcome row for this activity kind.
#[allow(clippy::too_many_arguments)]
pub(crate) fn record_result(
    ctx: &ReducerContext,
    player_id: Identity,
    kind: TaskKind,
    status: &str,
    reward_item: Option<String>,
    quantity: u32,
    xp_gained: u32,
    new_rank: Option<Tier>,
    new_rank_level: Option<u32>,
) {
    let stale: Vec<u64> = ctx
        .db
        .task_result()
        .player_id()
        .filter(player_id)
        .filter(|r| r.kind == kind)
        .map(|r| r.id)
        .collect();
    for id in stale {
        ctx.db.task_result().id().delete(id);
    }
    ctx.db.task_result().insert(TaskResult {
        id: 0,
        player_id,
        kind,
        status: status.to_string(),
        reward_item,
        quantity,
        xp_gained,
        new_rank,
        new_rank_level,
        finished_at: ctx.timestamp,
    });
}

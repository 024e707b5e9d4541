//! Adventures: rank-gated, supply-funded expeditions that always pay out
//! once claimable.

use crate::convert::{tier_col, tier_of};
use crate::reducers::{
    activity_name, active_task, category_stacks, drain_stacks, engine_rng, ensure_player,
    quantity_of, record_result, remaining_secs, take_item, task_end,
};
use crate::tables::*;
use guildhall_logic::adventure::{
    cooldown_remaining_secs, tier_requirements, FALLBACK_MONSTER, WATER_ITEM,
};
use guildhall_logic::errors::GameError;
use guildhall_logic::rank;
use rand::Rng;
use spacetimedb::{reducer, ReducerContext, Table};

/// Validate eligibility and supplies, reserve the supplies, pick the
/// monster, and start the expedition timer.
#[reducer]
pub fn start_adventure(ctx: &ReducerContext, tier: Tier, template_id: u64) -> Result<(), String> {
    let player = ensure_player(ctx);

    if active_task(ctx, player.id, TaskKind::Adventure).is_some() {
        return Err(GameError::TaskAlreadyActive {
            activity: activity_name(TaskKind::Adventure),
        }
        .into());
    }

    let template = ctx
        .db
        .adventure_template()
        .id()
        .find(template_id)
        .ok_or(GameError::TemplateNotFound { id: template_id })?;

    let rules_tier = tier_of(tier);
    if !rank::meets_tier(tier_of(player.rank), rules_tier) {
        return Err(GameError::RankTooLow {
            required: rules_tier,
        }
        .into());
    }

    let elapsed_ms = (ctx.timestamp.to_micros_since_unix_epoch()
        - player.last_adventure_claim.to_micros_since_unix_epoch())
        / 1000;
    if let Some(remaining_secs) = cooldown_remaining_secs(elapsed_ms) {
        return Err(GameError::AdventureCooldown { remaining_secs }.into());
    }

    let requirements = tier_requirements(rules_tier);

    // Validate every supply total before deducting anything.
    let food_stacks = category_stacks(ctx, player.id, ItemCategory::Food, Some(WATER_ITEM));
    let food_held: u32 = food_stacks.iter().map(|(_, qty)| qty).sum();
    if food_held < requirements.food {
        return Err(GameError::InsufficientSupplies {
            resource: "food",
            required: requirements.food,
            held: food_held,
        }
        .into());
    }

    let water = ctx
        .db
        .item()
        .iter()
        .find(|i| i.name == WATER_ITEM)
        .ok_or_else(|| format!("{WATER_ITEM} missing from catalog"))?;
    let water_held = quantity_of(ctx, player.id, water.id);
    if water_held < requirements.water {
        return Err(GameError::InsufficientSupplies {
            resource: "water",
            required: requirements.water,
            held: water_held,
        }
        .into());
    }

    let medicine_stacks = category_stacks(ctx, player.id, ItemCategory::Medicine, None);
    if requirements.medicine > 0 {
        let medicine_held: u32 = medicine_stacks.iter().map(|(_, qty)| qty).sum();
        if medicine_held < requirements.medicine {
            return Err(GameError::InsufficientSupplies {
                resource: "medicine",
                required: requirements.medicine,
                held: medicine_held,
            }
            .into());
        }
    }

    // Deduct: food and medicine drain stacks in ascending item id; water
    // is the one exact item.
    drain_stacks(ctx, player.id, &food_stacks, requirements.food);
    take_item(ctx, player.id, water.id, requirements.water);
    if requirements.medicine > 0 {
        drain_stacks(ctx, player.id, &medicine_stacks, requirements.medicine);
    }

    // The monster is narrative flavor, frozen into the task by name.
    let candidates: Vec<Monster> = ctx
        .db
        .monster()
        .iter()
        .filter(|m| m.tier == tier)
        .collect();
    let mut rng = engine_rng(ctx);
    let monster_name = if candidates.is_empty() {
        FALLBACK_MONSTER.to_string()
    } else {
        candidates[rng.gen_range(0..candidates.len())].name.clone()
    };

    let task = ctx.db.active_task().insert(ActiveTask {
        id: 0,
        player_id: player.id,
        kind: TaskKind::Adventure,
        target: TaskTarget::Adventure(AdventureDetail {
            tier,
            template_id,
            monster_name,
            template_name: template.name,
            template_kind: template.kind,
        }),
        started_at: ctx.timestamp,
        ends_at: task_end(ctx.timestamp, requirements.duration_secs),
    });
    log::info!(
        "{:?} departed on a tier {:?} adventure (task {})",
        player.id,
        tier,
        task.id
    );
    Ok(())
}

/// Claim a finished adventure: pay the tier's xp through the cascading
/// rank loop, bump the completion counter, and start the cooldown.
#[reducer]
pub fn claim_adventure(ctx: &ReducerContext) -> Result<(), String> {
    let player = ensure_player(ctx);
    let task = active_task(ctx, player.id, TaskKind::Adventure).ok_or(GameError::NoActiveTask {
        activity: activity_name(TaskKind::Adventure),
    })?;

    if ctx.timestamp.to_micros_since_unix_epoch() < task.ends_at.to_micros_since_unix_epoch() {
        return Err(GameError::TaskNotFinished {
            remaining_secs: remaining_secs(ctx, task.ends_at),
        }
        .into());
    }

    let TaskTarget::Adventure(detail) = &task.target else {
        return Err("adventure task carries a non-adventure payload".to_string());
    };
    let requirements = tier_requirements(tier_of(detail.tier));

    let player_id = player.id;
    let progress = rank::apply_adventure_xp(
        tier_of(player.rank),
        player.rank_level,
        player.adventure_xp,
        requirements.xp,
    );
    ctx.db.player().id().update(Player {
        rank: tier_col(progress.rank),
        rank_level: progress.level,
        adventure_xp: progress.xp,
        completed_adventures: player.completed_adventures + 1,
        last_adventure_claim: ctx.timestamp,
        ..player
    });

    ctx.db.active_task().id().delete(task.id);
    record_result(
        ctx,
        player_id,
        TaskKind::Adventure,
        "success",
        Some(detail.monster_name.clone()),
        0,
        requirements.xp,
        Some(tier_col(progress.rank)),
        Some(progress.level),
    );
    log::info!(
        "{:?} returned from {} ({} xp, now rank {:?} lv {})",
        player_id,
        detail.template_name,
        requirements.xp,
        progress.rank,
        progress.level
    );
    Ok(())
}

//! Gathering: start a timed gather in one of the four categories, claim
//! the material it yields.

use crate::convert::{category_col, gather_of, skill_col};
use crate::reducers::{
    activity_name, active_task, engine_rng, ensure_player, grant_item, record_result,
    remaining_secs, skill_for, task_end,
};
use crate::tables::*;
use guildhall_logic::errors::GameError;
use guildhall_logic::gathering;
use guildhall_logic::skills;
use spacetimedb::{reducer, ReducerContext, Table};

/// Start gathering. No resource cost; duration is fixed per category.
#[reducer]
pub fn start_gather(ctx: &ReducerContext, category: GatherCategory) -> Result<(), String> {
    let player = ensure_player(ctx);

    if active_task(ctx, player.id, TaskKind::Gathering).is_some() {
        return Err(GameError::TaskAlreadyActive {
            activity: activity_name(TaskKind::Gathering),
        }
        .into());
    }

    let duration = gather_of(category).duration_secs();
    let task = ctx.db.active_task().insert(ActiveTask {
        id: 0,
        player_id: player.id,
        kind: TaskKind::Gathering,
        target: TaskTarget::Gather(category),
        started_at: ctx.timestamp,
        ends_at: task_end(ctx.timestamp, duration),
    });
    log::info!(
        "{:?} started gathering {:?} (task {})",
        player.id,
        category,
        task.id
    );
    Ok(())
}

/// Claim a finished gather: pick one unlocked material from the
/// category, grant a small stack, and pay skill xp.
#[reducer]
pub fn claim_gather(ctx: &ReducerContext) -> Result<(), String> {
    let player = ensure_player(ctx);
    let task = active_task(ctx, player.id, TaskKind::Gathering).ok_or(GameError::NoActiveTask {
        activity: activity_name(TaskKind::Gathering),
    })?;

    if ctx.timestamp.to_micros_since_unix_epoch() < task.ends_at.to_micros_since_unix_epoch() {
        return Err(GameError::TaskNotFinished {
            remaining_secs: remaining_secs(ctx, task.ends_at),
        }
        .into());
    }

    let TaskTarget::Gather(category) = task.target else {
        return Err("gathering task carries a non-gather payload".to_string());
    };
    let rules_category = gather_of(category);
    let skill = skill_for(ctx, player.id, skill_col(rules_category.skill()));

    let eligible: Vec<Item> = ctx
        .db
        .item()
        .iter()
        .filter(|i| {
            i.kind == ItemKind::Material
                && i.category == category_col(rules_category.item_category())
        })
        .filter(|i| {
            gathering::unlock_level(rules_category, &i.name)
                .is_some_and(|min| skill.level >= min)
        })
        .collect();

    let mut rng = engine_rng(ctx);
    let Some(resolution) = gathering::resolve(eligible.len(), skill.level, &mut rng) else {
        // Cannot happen with the shipped catalog; consume the task and
        // surface an empty outcome instead of erroring (an Err here
        // would roll the deletion back and strand the task).
        log::warn!(
            "{:?} finished a {} gather with nothing unlocked",
            player.id,
            rules_category
        );
        ctx.db.active_task().id().delete(task.id);
        record_result(
            ctx,
            player.id,
            TaskKind::Gathering,
            "empty",
            None,
            0,
            0,
            None,
            None,
        );
        return Ok(());
    };

    let reward = &eligible[resolution.pick];
    grant_item(ctx, player.id, reward.id, resolution.quantity);

    let progress = skills::apply_skill_xp(skill.level, skill.xp, resolution.xp_gained);
    ctx.db.skill().id().update(Skill {
        level: progress.level,
        xp: progress.xp,
        ..skill
    });

    ctx.db.active_task().id().delete(task.id);
    record_result(
        ctx,
        player.id,
        TaskKind::Gathering,
        "success",
        Some(reward.name.clone()),
        resolution.quantity,
        resolution.xp_gained,
        None,
        None,
    );
    log::info!(
        "{:?} gathered {} x{} ({} xp)",
        player.id,
        reward.name,
        resolution.quantity,
        resolution.xp_gained
    );
    Ok(())
}

//! Crafting: start a timed craft, claim its outcome.

use crate::convert::{skill_of, tier_of};
use crate::reducers::{
    activity_name, active_task, engine_rng, ensure_player, grant_item, quantity_of, record_result,
    remaining_secs, skill_for, take_item, task_end,
};
use crate::tables::*;
use guildhall_logic::crafting::{self, CraftAttempt, CraftOutcome};
use guildhall_logic::errors::GameError;
use guildhall_logic::skills;
use spacetimedb::{reducer, ReducerContext, Table};

/// Validate a craft, reserve its ingredients, and start the timer.
#[reducer]
pub fn start_craft(ctx: &ReducerContext, recipe_id: u64) -> Result<(), String> {
    let player = ensure_player(ctx);

    if active_task(ctx, player.id, TaskKind::Crafting).is_some() {
        return Err(GameError::TaskAlreadyActive {
            activity: activity_name(TaskKind::Crafting),
        }
        .into());
    }

    let recipe = ctx
        .db
        .recipe()
        .id()
        .find(recipe_id)
        .ok_or(GameError::RecipeNotFound { id: recipe_id })?;

    let skill = skill_for(ctx, player.id, recipe.skill);
    if skill.level < recipe.min_skill_level {
        return Err(GameError::SkillTooLow {
            skill: skill_of(recipe.skill),
            required: recipe.min_skill_level,
        }
        .into());
    }

    let ingredients: Vec<RecipeIngredient> = ctx
        .db
        .recipe_ingredient()
        .recipe_id()
        .filter(recipe_id)
        .collect();
    for ingredient in &ingredients {
        let held = quantity_of(ctx, player.id, ingredient.item_id);
        if held < ingredient.quantity {
            let name = ctx
                .db
                .item()
                .id()
                .find(ingredient.item_id)
                .map(|i| i.name)
                .unwrap_or_else(|| "materials".to_string());
            return Err(GameError::InsufficientMaterials {
                item: name,
                required: ingredient.quantity,
                held,
            }
            .into());
        }
    }
    for ingredient in &ingredients {
        take_item(ctx, player.id, ingredient.item_id, ingredient.quantity);
    }

    let task = ctx.db.active_task().insert(ActiveTask {
        id: 0,
        player_id: player.id,
        kind: TaskKind::Crafting,
        target: TaskTarget::Craft(recipe_id),
        started_at: ctx.timestamp,
        ends_at: task_end(ctx.timestamp, recipe.duration_secs),
    });
    log::info!(
        "{:?} started craft of recipe {recipe_id} (task {})",
        player.id,
        task.id
    );
    Ok(())
}

/// Claim a finished craft: roll the outcome, grant the reward, pay skill
/// xp, and retire the task.
#[reducer]
pub fn claim_craft(ctx: &ReducerContext) -> Result<(), String> {
    let player = ensure_player(ctx);
    let task = active_task(ctx, player.id, TaskKind::Crafting).ok_or(GameError::NoActiveTask {
        activity: activity_name(TaskKind::Crafting),
    })?;

    if ctx.timestamp.to_micros_since_unix_epoch() < task.ends_at.to_micros_since_unix_epoch() {
        return Err(GameError::TaskNotFinished {
            remaining_secs: remaining_secs(ctx, task.ends_at),
        }
        .into());
    }

    let TaskTarget::Craft(recipe_id) = task.target else {
        return Err("crafting task carries a non-craft payload".to_string());
    };
    let recipe = ctx
        .db
        .recipe()
        .id()
        .find(recipe_id)
        .ok_or(GameError::RecipeNotFound { id: recipe_id })?;
    let output = ctx
        .db
        .item()
        .id()
        .find(recipe.item_id)
        .ok_or(GameError::ItemNotFound { id: recipe.item_id })?;

    let skill = skill_for(ctx, player.id, recipe.skill);

    // Downgrade candidates: same-category products one tier below.
    let pool: Vec<Item> = match tier_of(output.tier).next_down() {
        Some(below) => ctx
            .db
            .item()
            .iter()
            .filter(|i| {
                i.kind == ItemKind::Product
                    && i.category == output.category
                    && tier_of(i.tier) == below
            })
            .collect(),
        None => Vec::new(),
    };

    let attempt = CraftAttempt {
        base_success_rate: recipe.success_rate,
        min_skill_level: recipe.min_skill_level,
        skill_level: skill.level,
        xp_reward: recipe.xp_reward,
    };
    let mut rng = engine_rng(ctx);
    let resolution = crafting::resolve(&attempt, pool.len(), &mut rng);

    let reward = match resolution.outcome {
        CraftOutcome::Success => Some(output),
        CraftOutcome::Downgrade => resolution.downgrade_pick.and_then(|i| pool.get(i).cloned()),
        CraftOutcome::Fail => None,
    };
    if let Some(item) = &reward {
        grant_item(ctx, player.id, item.id, 1);
    }

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
        TaskKind::Crafting,
        resolution.outcome.as_str(),
        reward.as_ref().map(|i| i.name.clone()),
        reward.as_ref().map(|_| 1).unwrap_or(0),
        resolution.xp_gained,
        None,
        None,
    );
    log::info!(
        "{:?} claimed craft: {} ({} xp)",
        player.id,
        resolution.outcome.as_str(),
        resolution.xp_gained
    );
    Ok(())
}

//! Guilds: founding and the leader-driven class promotion.

use crate::convert::tier_of;
use crate::reducers::ensure_player;
use crate::tables::*;
use guildhall_logic::errors::GameError;
use guildhall_logic::guild::{check_promotion, MemberStanding, LOWEST_CLASS, TOP_CLASS};
use spacetimedb::{reducer, ReducerContext, Table};

/// Found a new class-12 guild with the caller as leader and sole member.
#[reducer]
pub fn create_guild(ctx: &ReducerContext, name: String) -> Result<(), String> {
    let player = ensure_player(ctx);

    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(GameError::EmptyGuildName.into());
    }
    if ctx
        .db
        .guild_member()
        .player_id()
        .find(player.id)
        .is_some()
    {
        return Err(GameError::AlreadyInGuild.into());
    }
    if ctx.db.guild().iter().any(|g| g.name == name) {
        return Err(GameError::GuildNameTaken { name }.into());
    }

    let guild = ctx.db.guild().insert(Guild {
        id: 0,
        name,
        class: LOWEST_CLASS,
        leader_id: player.id,
    });
    ctx.db.guild_member().insert(GuildMember {
        id: 0,
        guild_id: guild.id,
        player_id: player.id,
    });
    log::info!("{:?} founded guild \"{}\" ({})", player.id, guild.name, guild.id);
    Ok(())
}

/// Promote the guild one class (12 toward 1). Leader-only and
/// all-or-nothing: every member must meet the target class's rank floor
/// and the roster needs enough combined completed adventures.
#[reducer]
pub fn promote_guild(ctx: &ReducerContext, guild_id: u64) -> Result<(), String> {
    let player = ensure_player(ctx);

    let membership = ctx
        .db
        .guild_member()
        .player_id()
        .find(player.id)
        .ok_or(GameError::NotInGuild)?;
    if membership.guild_id != guild_id {
        return Err(GameError::WrongGuild { id: guild_id }.into());
    }
    let guild = ctx
        .db
        .guild()
        .id()
        .find(guild_id)
        .ok_or(GameError::GuildNotFound { id: guild_id })?;
    if guild.leader_id != player.id {
        return Err(GameError::NotGuildLeader.into());
    }
    if guild.class <= TOP_CLASS {
        return Err(GameError::GuildAtTopClass.into());
    }

    let next_class = guild.class - 1;
    let roster: Vec<MemberStanding> = ctx
        .db
        .guild_member()
        .guild_id()
        .filter(guild_id)
        .filter_map(|m| ctx.db.player().id().find(m.player_id))
        .map(|p| MemberStanding {
            rank: tier_of(p.rank),
            completed_adventures: p.completed_adventures,
        })
        .collect();
    check_promotion(next_class, &roster)?;

    ctx.db.guild().id().update(Guild {
        class: next_class,
        ..guild
    });
    log::info!("guild {guild_id} promoted to class {next_class}");
    Ok(())
}

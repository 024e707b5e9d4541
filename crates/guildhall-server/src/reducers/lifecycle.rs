//! Module lifecycle: catalog seeding and player bootstrap.

use crate::convert::skill_col;
use crate::reducers::{ensure_player, skill_for};
use crate::seed::seed_catalog;
use guildhall_logic::skills::SkillKind;
use spacetimedb::{reducer, ReducerContext};

/// Called once when the module is first published.
#[reducer(init)]
pub fn init(ctx: &ReducerContext) {
    log::info!("guildhall module initialized");
    seed_catalog(ctx);
}

/// Self-healing bootstrap: make sure the connecting client has a player
/// row and all six skill tracks. Safe to race: the row checks run
/// inside this transaction.
#[reducer(client_connected)]
pub fn client_connected(ctx: &ReducerContext) {
    let player = ensure_player(ctx);
    for kind in SkillKind::ALL {
        skill_for(ctx, player.id, skill_col(kind));
    }
    log::info!("client connected: {:?}", ctx.sender);
}

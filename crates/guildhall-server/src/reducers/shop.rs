//! Shops: lazy time-windowed restock, buying, and selling.

use crate::reducers::{engine_rng, ensure_player, grant_item, quantity_of, take_item};
use crate::tables::*;
use guildhall_logic::economy;
use guildhall_logic::errors::GameError;
use spacetimedb::{reducer, ReducerContext, Table};

/// Regenerate a shop's stock if its last refresh is more than an hour
/// old. Clients call this before rendering stock; a fresh shop is a
/// no-op, so racing calls are harmless.
#[reducer]
pub fn refresh_shop(ctx: &ReducerContext, shop_id: u64) -> Result<(), String> {
    let shop = ctx
        .db
        .shop()
        .id()
        .find(shop_id)
        .ok_or(GameError::ShopNotFound { id: shop_id })?;

    let elapsed_ms = (ctx.timestamp.to_micros_since_unix_epoch()
        - shop.last_refresh.to_micros_since_unix_epoch())
        / 1000;
    if !economy::needs_restock(elapsed_ms) {
        return Ok(());
    }

    let stale: Vec<u64> = ctx
        .db
        .shop_stock()
        .shop_id()
        .filter(shop_id)
        .map(|s| s.id)
        .collect();
    for id in stale {
        ctx.db.shop_stock().id().delete(id);
    }

    let mut rng = engine_rng(ctx);
    for item in ctx.db.item().iter().filter(|i| i.category == shop.category) {
        ctx.db.shop_stock().insert(ShopStock {
            id: 0,
            shop_id,
            item_id: item.id,
            quantity: economy::restock_quantity(&mut rng),
            price: economy::restock_price(item.base_price, &mut rng),
        });
    }
    ctx.db.shop().id().update(Shop {
        last_refresh: ctx.timestamp,
        ..shop
    });
    log::info!("restocked shop {shop_id}");
    Ok(())
}

/// Buy from a shop at the stored stock price.
#[reducer]
pub fn buy_item(ctx: &ReducerContext, shop_id: u64, item_id: u64, quantity: u32) -> Result<(), String> {
    if quantity == 0 {
        return Err(GameError::ZeroQuantity.into());
    }
    let player = ensure_player(ctx);

    let stock = ctx
        .db
        .shop_stock()
        .shop_id()
        .filter(shop_id)
        .find(|s| s.item_id == item_id)
        .ok_or(GameError::InsufficientStock {
            requested: quantity,
            available: 0,
        })?;
    if stock.quantity < quantity {
        return Err(GameError::InsufficientStock {
            requested: quantity,
            available: stock.quantity,
        }
        .into());
    }

    let cost = stock.price * u64::from(quantity);
    if player.gold < cost {
        return Err(GameError::NotEnoughGold {
            required: cost,
            held: player.gold,
        }
        .into());
    }

    let player_id = player.id;
    ctx.db.player().id().update(Player {
        gold: player.gold - cost,
        ..player
    });
    ctx.db.shop_stock().id().update(ShopStock {
        quantity: stock.quantity - quantity,
        ..stock
    });
    grant_item(ctx, player_id, item_id, quantity);
    log::info!("{player_id:?} bought {quantity} of item {item_id} for {cost} gold");
    Ok(())
}

/// Sell anything to any shop at 80% of base price, independent of stock.
#[reducer]
pub fn sell_item(ctx: &ReducerContext, item_id: u64, quantity: u32) -> Result<(), String> {
    if quantity == 0 {
        return Err(GameError::ZeroQuantity.into());
    }
    let player = ensure_player(ctx);

    let item = ctx
        .db
        .item()
        .id()
        .find(item_id)
        .ok_or(GameError::ItemNotFound { id: item_id })?;
    let held = quantity_of(ctx, player.id, item_id);
    if held < quantity {
        return Err(GameError::NotEnoughItems {
            item: item.name,
            requested: quantity,
            held,
        }
        .into());
    }

    let player_id = player.id;
    let earnings = economy::sell_price(item.base_price) * u64::from(quantity);
    ctx.db.player().id().update(Player {
        gold: player.gold + earnings,
        ..player
    });
    take_item(ctx, player_id, item_id, quantity);
    log::info!(
        "{player_id:?} sold {quantity} of {} for {earnings} gold",
        item.name
    );
    Ok(())
}

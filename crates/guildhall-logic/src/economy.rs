//! Shop pricing and time-windowed restock rules.
//!
//! Stock regenerates wholesale when a shop has gone more than an hour
//! without a refresh: every item in the shop's category gets a fresh
//! random quantity and a price within ±20% of base. Selling always pays
//! 80% of base price, independent of stock state.

use rand::Rng;

/// A shop restocks after this long without a refresh.
pub const RESTOCK_INTERVAL_MS: i64 = 3_600_000;

/// Quantity every item carries in the initial seeded stock.
pub const INITIAL_STOCK_QUANTITY: u32 = 50;

/// Whether a shop last refreshed `elapsed_ms` ago is due.
pub fn needs_restock(elapsed_ms: i64) -> bool {
    elapsed_ms > RESTOCK_INTERVAL_MS
}

/// What any shop pays per unit when buying from a player.
pub fn sell_price(base_price: u64) -> u64 {
    base_price * 8 / 10
}

/// Price applied to the initial seeded stock.
pub fn initial_stock_price(base_price: u64) -> u64 {
    base_price * 12 / 10
}

/// Restocked quantity: uniform in `[10, 60)`.
pub fn restock_quantity(rng: &mut impl Rng) -> u32 {
    rng.gen_range(10..60)
}

/// Restocked price: base scaled by a uniform factor in `[0.8, 1.2)`,
/// floored.
pub fn restock_price(base_price: u64, rng: &mut impl Rng) -> u64 {
    let factor: f64 = rng.gen_range(0.8..1.2);
    (base_price as f64 * factor).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sell_price_floors_at_80_percent() {
        assert_eq!(sell_price(25), 20);
        assert_eq!(sell_price(3), 2);
        assert_eq!(sell_price(25000), 20000);
    }

    #[test]
    fn initial_price_floors_at_120_percent() {
        assert_eq!(initial_stock_price(50), 60);
        assert_eq!(initial_stock_price(3), 3);
    }

    #[test]
    fn restock_window_is_one_hour() {
        assert!(!needs_restock(0));
        assert!(!needs_restock(RESTOCK_INTERVAL_MS));
        assert!(needs_restock(RESTOCK_INTERVAL_MS + 1));
    }

    #[test]
    fn restock_rolls_stay_bounded() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..500 {
            let qty = restock_quantity(&mut rng);
            assert!((10..60).contains(&qty));
            let price = restock_price(100, &mut rng);
            assert!((80..120).contains(&price), "price {price} out of range");
        }
    }
}

//! Adventurer rank progression and tier gating.
//!
//! Ranks run F through S with 100 levels inside each letter. Unlike skill
//! tracks, rank xp *cascades*: one claim can climb several levels and even
//! cross rank letters. The threshold is a flat 100 xp per level regardless
//! of the current level. At S the level is clamped to 100 and any excess
//! xp is discarded.

use crate::tier::Tier;
use serde::{Deserialize, Serialize};

/// Flat xp cost per rank level.
pub const XP_PER_RANK_LEVEL: u32 = 100;

/// Levels within one rank letter.
pub const MAX_RANK_LEVEL: u32 = 100;

/// Resulting rank state after an adventure claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankProgress {
    pub rank: Tier,
    pub level: u32,
    pub xp: u32,
}

/// A player may attempt an adventure tier when their rank is at least
/// the tier, in F..S order.
pub fn meets_tier(rank: Tier, tier: Tier) -> bool {
    rank >= tier
}

/// Apply adventure xp to (`rank`, `level`, `xp`), cascading through as
/// many levels and rank letters as the gain covers.
pub fn apply_adventure_xp(rank: Tier, level: u32, xp: u32, gained: u32) -> RankProgress {
    let mut rank = rank;
    let mut level = level;
    let mut xp = xp + gained;

    while xp >= XP_PER_RANK_LEVEL {
        xp -= XP_PER_RANK_LEVEL;
        level += 1;
        if level > MAX_RANK_LEVEL {
            match rank.next_up() {
                Some(next) => {
                    rank = next;
                    level = 1;
                }
                None => {
                    // Max rank reached; cap and discard the excess.
                    level = MAX_RANK_LEVEL;
                    xp = 0;
                    break;
                }
            }
        }
    }

    RankProgress { rank, level, xp }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_compares_rank_to_tier() {
        assert!(meets_tier(Tier::S, Tier::S));
        assert!(meets_tier(Tier::B, Tier::D));
        assert!(!meets_tier(Tier::D, Tier::S));
        assert!(!meets_tier(Tier::F, Tier::D));
    }

    #[test]
    fn single_level_gain() {
        let p = apply_adventure_xp(Tier::F, 1, 60, 50);
        assert_eq!(
            p,
            RankProgress {
                rank: Tier::F,
                level: 2,
                xp: 10
            }
        );
    }

    #[test]
    fn cascades_through_many_levels() {
        // A tier-S adventure pays 6000 xp: sixty levels in one claim.
        let p = apply_adventure_xp(Tier::C, 10, 0, 6000);
        assert_eq!(
            p,
            RankProgress {
                rank: Tier::C,
                level: 70,
                xp: 0
            }
        );
    }

    #[test]
    fn promotion_resets_level_to_one() {
        let p = apply_adventure_xp(Tier::F, 100, 90, 20);
        assert_eq!(
            p,
            RankProgress {
                rank: Tier::D,
                level: 1,
                xp: 10
            }
        );
    }

    #[test]
    fn cascade_crosses_rank_letters() {
        // 101 levels * 100 xp carries F straight through into D territory.
        let p = apply_adventure_xp(Tier::F, 99, 0, 10_150);
        assert_eq!(p.rank, Tier::D);
        assert_eq!(p.level, 100);
        assert_eq!(p.xp, 50);
    }

    #[test]
    fn s_rank_clamps_and_discards() {
        let p = apply_adventure_xp(Tier::S, 100, 50, 6000);
        assert_eq!(
            p,
            RankProgress {
                rank: Tier::S,
                level: MAX_RANK_LEVEL,
                xp: 0
            }
        );
    }
}

//! Guild class ladder and promotion eligibility.
//!
//! Guild classes run 12 (newly founded) down to 1 (highest prestige);
//! promotion decreases the number by one. Promotion is leader-initiated
//! and all-or-nothing: every member must meet the target class's rank
//! floor, and the roster's combined completed adventures must reach the
//! class's threshold.

use crate::errors::GameError;
use crate::tier::Tier;
use serde::{Deserialize, Serialize};

/// Class assigned to a newly created guild.
pub const LOWEST_CLASS: u32 = 12;

/// Best class a guild can reach.
pub const TOP_CLASS: u32 = 1;

/// Minimum rank every member must hold for a guild of `class`.
/// Classes pair up: {12,11}→F, {10,9}→D, {8,7}→C, {6,5}→B, {4,3}→A,
/// {2,1}→S.
pub fn required_rank(class: u32) -> Tier {
    match class {
        11..=12 => Tier::F,
        9..=10 => Tier::D,
        7..=8 => Tier::C,
        5..=6 => Tier::B,
        3..=4 => Tier::A,
        _ => Tier::S,
    }
}

/// Combined completed adventures the roster needs before the guild can
/// be promoted *into* `next_class`: 5 for the first step, +5 per step.
pub fn required_adventures(next_class: u32) -> u32 {
    (12 - next_class) * 5
}

/// A member's standing, as promotion sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStanding {
    pub rank: Tier,
    pub completed_adventures: u32,
}

/// Check whether a roster qualifies for promotion into `next_class`.
/// Denied in full if either condition fails.
pub fn check_promotion(next_class: u32, members: &[MemberStanding]) -> Result<(), GameError> {
    let floor = required_rank(next_class);
    if !members.iter().all(|m| m.rank >= floor) {
        return Err(GameError::MemberRanksTooLow {
            required: floor,
            class: next_class,
        });
    }

    let required = required_adventures(next_class);
    let total: u32 = members.iter().map(|m| m.completed_adventures).sum();
    if total < required {
        return Err(GameError::GuildAdventuresShort { required, total });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(rank: Tier, completed_adventures: u32) -> MemberStanding {
        MemberStanding {
            rank,
            completed_adventures,
        }
    }

    #[test]
    fn rank_floors_pair_up() {
        assert_eq!(required_rank(12), Tier::F);
        assert_eq!(required_rank(11), Tier::F);
        assert_eq!(required_rank(10), Tier::D);
        assert_eq!(required_rank(7), Tier::C);
        assert_eq!(required_rank(5), Tier::B);
        assert_eq!(required_rank(4), Tier::A);
        assert_eq!(required_rank(2), Tier::S);
        assert_eq!(required_rank(1), Tier::S);
    }

    #[test]
    fn first_promotion_needs_five_adventures() {
        // Class 12 → 11: rank F is always met, five adventures suffice.
        assert!(check_promotion(11, &[member(Tier::F, 5)]).is_ok());
        assert_eq!(
            check_promotion(11, &[member(Tier::F, 4)]),
            Err(GameError::GuildAdventuresShort {
                required: 5,
                total: 4
            })
        );
    }

    #[test]
    fn final_promotion_needs_all_s_and_fifty_five() {
        // Class 2 → 1.
        let roster = [member(Tier::S, 30), member(Tier::S, 25)];
        assert!(check_promotion(1, &roster).is_ok());

        let short = [member(Tier::S, 30), member(Tier::S, 24)];
        assert_eq!(
            check_promotion(1, &short),
            Err(GameError::GuildAdventuresShort {
                required: 55,
                total: 54
            })
        );

        let weak = [member(Tier::S, 50), member(Tier::A, 50)];
        assert_eq!(
            check_promotion(1, &weak),
            Err(GameError::MemberRanksTooLow {
                required: Tier::S,
                class: 1
            })
        );
    }

    #[test]
    fn rank_check_runs_before_adventure_check() {
        // Both conditions fail; the rank floor is reported first.
        let roster = [member(Tier::F, 0)];
        assert_eq!(
            check_promotion(9, &roster),
            Err(GameError::MemberRanksTooLow {
                required: Tier::D,
                class: 9
            })
        );
    }
}

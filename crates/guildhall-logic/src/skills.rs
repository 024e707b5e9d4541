//! Skill tracks and experience progression.
//!
//! Six independently leveled tracks: four gathering skills plus crafting
//! and cooking. The level threshold is `level * 100` xp and resets on
//! level-up (it is not a running total). A single claim grants at most
//! one level: any remainder above the threshold is carried as-is and is
//! *not* re-checked against the next threshold. Adventurer rank leveling
//! (see [`crate::rank`]) deliberately does not share this cap.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six skill tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillKind {
    Wood,
    Mining,
    Animal,
    Plants,
    Crafting,
    Cooking,
}

impl SkillKind {
    /// All tracks, gathering first.
    pub const ALL: [SkillKind; 6] = [
        SkillKind::Wood,
        SkillKind::Mining,
        SkillKind::Animal,
        SkillKind::Plants,
        SkillKind::Crafting,
        SkillKind::Cooking,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillKind::Wood => "Woodcutting",
            SkillKind::Mining => "Mining",
            SkillKind::Animal => "Animal Handling",
            SkillKind::Plants => "Herbalism",
            SkillKind::Crafting => "Crafting",
            SkillKind::Cooking => "Cooking",
        }
    }
}

impl fmt::Display for SkillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Xp needed to advance out of `level`.
pub fn xp_to_next(level: u32) -> u32 {
    level * 100
}

/// Result of applying xp to a skill track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProgress {
    pub level: u32,
    pub xp: u32,
    pub leveled_up: bool,
}

/// Apply gained xp to a skill at (`level`, `xp`).
///
/// At most one level is gained per call; a remainder above the old
/// threshold is carried into the new level without another check.
pub fn apply_skill_xp(level: u32, xp: u32, gained: u32) -> SkillProgress {
    let mut new_xp = xp + gained;
    let mut new_level = level;
    let threshold = xp_to_next(level);
    let leveled_up = new_xp >= threshold;
    if leveled_up {
        new_xp -= threshold;
        new_level += 1;
    }
    SkillProgress {
        level: new_level,
        xp: new_xp,
        leveled_up,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold_accumulates() {
        let p = apply_skill_xp(1, 40, 30);
        assert_eq!(
            p,
            SkillProgress {
                level: 1,
                xp: 70,
                leveled_up: false
            }
        );
    }

    #[test]
    fn exact_threshold_levels_to_zero() {
        let p = apply_skill_xp(3, 250, 50);
        assert_eq!(
            p,
            SkillProgress {
                level: 4,
                xp: 0,
                leveled_up: true
            }
        );
    }

    #[test]
    fn overflow_gains_at_most_one_level() {
        // Level 1 threshold is 100; a 450 xp windfall carries 350 into
        // level 2 without triggering the level-2 threshold (200).
        let p = apply_skill_xp(1, 0, 450);
        assert_eq!(
            p,
            SkillProgress {
                level: 2,
                xp: 350,
                leveled_up: true
            }
        );
    }

    #[test]
    fn threshold_scales_with_level() {
        assert_eq!(xp_to_next(1), 100);
        assert_eq!(xp_to_next(15), 1500);
    }
}

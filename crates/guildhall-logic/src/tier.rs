//! The F..S ordinal grade.
//!
//! One ordering serves three roles: item/monster quality ("tier"), the
//! difficulty grade of an adventure, and a player's or guild member's
//! prestige ("rank"). The declaration order gives `F < D < C < B < A < S`
//! through the derived `Ord`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal grade, lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Tier {
    F,
    D,
    C,
    B,
    A,
    S,
}

impl Tier {
    /// All tiers in ascending order.
    pub const ALL: [Tier; 6] = [Tier::F, Tier::D, Tier::C, Tier::B, Tier::A, Tier::S];

    /// The tier immediately above, or `None` at `S`.
    pub fn next_up(self) -> Option<Tier> {
        match self {
            Tier::F => Some(Tier::D),
            Tier::D => Some(Tier::C),
            Tier::C => Some(Tier::B),
            Tier::B => Some(Tier::A),
            Tier::A => Some(Tier::S),
            Tier::S => None,
        }
    }

    /// The tier immediately below, or `None` at `F`.
    pub fn next_down(self) -> Option<Tier> {
        match self {
            Tier::F => None,
            Tier::D => Some(Tier::F),
            Tier::C => Some(Tier::D),
            Tier::B => Some(Tier::C),
            Tier::A => Some(Tier::B),
            Tier::S => Some(Tier::A),
        }
    }

    /// Single-letter label.
    pub fn letter(self) -> &'static str {
        match self {
            Tier::F => "F",
            Tier::D => "D",
            Tier::C => "C",
            Tier::B => "B",
            Tier::A => "A",
            Tier::S => "S",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_f_to_s() {
        assert!(Tier::F < Tier::D);
        assert!(Tier::D < Tier::C);
        assert!(Tier::C < Tier::B);
        assert!(Tier::B < Tier::A);
        assert!(Tier::A < Tier::S);
    }

    #[test]
    fn neighbors_round_trip() {
        for pair in Tier::ALL.windows(2) {
            assert_eq!(pair[0].next_up(), Some(pair[1]));
            assert_eq!(pair[1].next_down(), Some(pair[0]));
        }
        assert_eq!(Tier::F.next_down(), None);
        assert_eq!(Tier::S.next_up(), None);
    }
}

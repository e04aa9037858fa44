//! Treasures hidden in towns.

use serde::{Deserialize, Serialize};

/// What a town's treasure search turns up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Treasure {
    /// Part of the winning set.
    Crown,
    /// Part of the winning set.
    Gem,
    /// Part of the winning set.
    Trophy,
    /// Worthless; never recorded.
    Dust,
}

/// The distinct treasures a hunter must collect to win.
pub const TREASURE_SET: [Treasure; 3] = [Treasure::Crown, Treasure::Gem, Treasure::Trophy];

impl Treasure {
    /// Map a roll of `1..=4` onto a treasure with equal odds.
    ///
    /// Any roll outside 1-3 yields dust.
    pub fn from_roll(roll: u32) -> Self {
        match roll {
            1 => Self::Crown,
            2 => Self::Gem,
            3 => Self::Trophy,
            _ => Self::Dust,
        }
    }

    /// Whether this treasure counts toward the winning set.
    pub fn is_valuable(self) -> bool {
        self != Self::Dust
    }

    /// The lowercase name of the treasure.
    pub fn name(self) -> &'static str {
        match self {
            Self::Crown => "crown",
            Self::Gem => "gem",
            Self::Trophy => "trophy",
            Self::Dust => "dust",
        }
    }
}

impl std::fmt::Display for Treasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolls_map_to_treasures() {
        assert_eq!(Treasure::from_roll(1), Treasure::Crown);
        assert_eq!(Treasure::from_roll(2), Treasure::Gem);
        assert_eq!(Treasure::from_roll(3), Treasure::Trophy);
        assert_eq!(Treasure::from_roll(4), Treasure::Dust);
    }

    #[test]
    fn dust_is_worthless() {
        assert!(!Treasure::Dust.is_valuable());
        assert!(TREASURE_SET.iter().all(|t| t.is_valuable()));
    }
}

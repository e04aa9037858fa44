//! Outcomes of the randomized events a town resolves.
//!
//! Each outcome renders its own narrative through `Display`, so callers get
//! both the typed result and the text to show the player.

use serde::{Deserialize, Serialize};
use th_core::{Item, Terrain};

/// No-trouble chance in a tough town, before the test check runs.
pub const TOUGH_NO_TROUBLE_CHANCE: f64 = 0.66;

/// No-trouble chance in a test town.
pub const TEST_NO_TROUBLE_CHANCE: f64 = 1.0;

/// No-trouble chance in every other town.
pub const DEFAULT_NO_TROUBLE_CHANCE: f64 = 0.33;

/// Toughness parameter that marks an easy town.
pub const EASY_TOUGHNESS: f64 = 0.3;

/// Toughness parameter that marks a test town.
pub const TEST_TOUGHNESS: f64 = 1.0;

/// Chance that a crossing item breaks outside easy towns.
pub const ITEM_BREAK_CHANCE: f64 = 0.5;

/// Most gold that changes hands in one brawl.
pub const MAX_BRAWL_GOLD: u32 = 10;

/// Most gold one dig can turn up.
pub const MAX_DIG_GOLD: u32 = 20;

/// A town's fixed toughness flags.
///
/// The flags are independent: a town can be both tough and a test town.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toughness {
    /// Rolled from the toughness parameter.
    pub tough: bool,
    /// Set when the parameter is exactly [`EASY_TOUGHNESS`].
    pub easy: bool,
    /// Set when the parameter is exactly [`TEST_TOUGHNESS`].
    pub test: bool,
}

impl Toughness {
    /// Whether no flag is set.
    pub fn is_normal(self) -> bool {
        !self.tough && !self.easy && !self.test
    }
}

/// The "no-trouble chance" for a town.
///
/// The tough check runs first and the test check runs second. The second
/// check has an `else` branch, so it always overwrites the tough value:
/// test towns get 1.0 and every other town, tough or not, gets 0.33.
pub fn no_trouble_chance(toughness: Toughness) -> f64 {
    match (toughness.tough, toughness.test) {
        (_, true) => TEST_NO_TROUBLE_CHANCE,
        // TOUGH_NO_TROUBLE_CHANCE is assigned here and immediately replaced.
        (true, false) => DEFAULT_NO_TROUBLE_CHANCE,
        (false, false) => DEFAULT_NO_TROUBLE_CHANCE,
    }
}

/// Result of trying to leave town.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crossing {
    /// The hunter crossed the terrain.
    Crossed {
        /// The item used to cross.
        item: Item,
        /// The terrain crossed.
        terrain: Terrain,
        /// Whether the item broke on the way.
        item_lost: bool,
    },
    /// The hunter lacks the needed item.
    Blocked {
        /// The hunter's name.
        hunter: String,
        /// The missing item.
        item: Item,
    },
}

impl Crossing {
    /// Whether the hunter made it out.
    pub fn crossed(&self) -> bool {
        matches!(self, Self::Crossed { .. })
    }
}

impl std::fmt::Display for Crossing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Crossed {
                item,
                terrain,
                item_lost,
            } => {
                write!(f, "You used your {item} to cross the {terrain}.")?;
                if *item_lost {
                    write!(f, "\nUnfortunately, you lost your {item}")?;
                }
                Ok(())
            }
            Self::Blocked { hunter, item } => write!(
                f,
                "You can't leave town, {hunter}. You don't have {}.",
                item.with_article()
            ),
        }
    }
}

/// Result of looking for trouble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Brawl {
    /// Nobody wanted a fight.
    NoTrouble,
    /// The brawler saw the sword and paid up without a fight.
    Intimidated {
        /// Gold received.
        gold: u32,
    },
    /// The hunter won the brawl.
    Won {
        /// Gold received.
        gold: u32,
    },
    /// The hunter lost the brawl.
    Lost {
        /// Gold paid.
        gold: u32,
    },
}

impl Brawl {
    /// Whether punches were thrown.
    pub fn was_fight(self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost { .. })
    }

    /// Signed gold change for the hunter.
    pub fn gold_delta(self) -> i32 {
        match self {
            Self::NoTrouble => 0,
            Self::Intimidated { gold } | Self::Won { gold } => signed(gold),
            Self::Lost { gold } => -signed(gold),
        }
    }
}

fn signed(gold: u32) -> i32 {
    i32::try_from(gold).unwrap_or(i32::MAX)
}

const BRAWL_OPENING: &str = "You want trouble, stranger!  You got it!\nOof! Umph! Ow!";

impl std::fmt::Display for Brawl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoTrouble => write!(f, "You couldn't find any trouble"),
            Self::Intimidated { gold } => write!(
                f,
                "The brawler, seeing your sword, realizes he picked a losing fight and gives you his gold\nYou won the brawl and receive {gold} gold."
            ),
            Self::Won { gold } => write!(
                f,
                "{BRAWL_OPENING}\nOkay, stranger! You proved yer mettle. Here, take my gold.\nYou won the brawl and receive {gold} gold."
            ),
            Self::Lost { gold } => write!(
                f,
                "{BRAWL_OPENING}\nThat'll teach you to go lookin' fer trouble in MY town! Now pay up!\nYou lost the brawl and pay {gold} gold."
            ),
        }
    }
}

/// Result of digging for gold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dig {
    /// The kit has no shovel.
    NoShovel,
    /// The hunter already dug during this visit.
    AlreadyDug,
    /// The dig turned up gold.
    Gold {
        /// Gold found.
        gold: u32,
    },
    /// The dig turned up nothing.
    Dirt,
}

impl std::fmt::Display for Dig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoShovel => write!(f, "You can't dig for gold without a shovel"),
            Self::AlreadyDug => write!(f, "You already dug for gold in this town."),
            Self::Gold { gold } => write!(f, "You dug up {gold} gold."),
            Self::Dirt => write!(f, "You dug but only found dirt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_tough() {
        let t = Toughness {
            tough: true,
            easy: false,
            test: true,
        };
        assert_eq!(no_trouble_chance(t), 1.0);
    }

    #[test]
    fn tough_alone_is_overwritten() {
        let t = Toughness {
            tough: true,
            ..Toughness::default()
        };
        assert_eq!(no_trouble_chance(t), 0.33);
        assert_eq!(no_trouble_chance(Toughness::default()), 0.33);
    }

    #[test]
    fn easy_flag_does_not_change_trouble() {
        let t = Toughness {
            easy: true,
            ..Toughness::default()
        };
        assert_eq!(no_trouble_chance(t), 0.33);
        assert!(!t.is_normal());
        assert!(Toughness::default().is_normal());
    }

    #[test]
    fn crossing_messages() {
        let crossed = Crossing::Crossed {
            item: Item::Rope,
            terrain: Terrain::Mountains,
            item_lost: true,
        };
        assert_eq!(
            crossed.to_string(),
            "You used your rope to cross the Mountains.\nUnfortunately, you lost your rope"
        );
        let blocked = Crossing::Blocked {
            hunter: "ada".to_string(),
            item: Item::Boat,
        };
        assert_eq!(
            blocked.to_string(),
            "You can't leave town, ada. You don't have a boat."
        );
        assert!(crossed.crossed());
        assert!(!blocked.crossed());
    }

    #[test]
    fn brawl_deltas() {
        assert_eq!(Brawl::NoTrouble.gold_delta(), 0);
        assert_eq!(Brawl::Won { gold: 4 }.gold_delta(), 4);
        assert_eq!(Brawl::Lost { gold: 4 }.gold_delta(), -4);
        assert!(!Brawl::Intimidated { gold: 4 }.was_fight());
        assert!(Brawl::Lost { gold: 1 }.was_fight());
    }

    #[test]
    fn brawl_messages() {
        assert!(Brawl::Lost { gold: 7 }
            .to_string()
            .ends_with("You lost the brawl and pay 7 gold."));
        assert!(Brawl::Won { gold: 3 }
            .to_string()
            .starts_with("You want trouble, stranger!"));
    }
}

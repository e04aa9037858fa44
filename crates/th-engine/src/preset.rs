//! Difficulty presets.
//!
//! Every preset reads its numbers from one table, looked up once when a
//! session starts.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use th_core::Item;

use crate::error::ConfigError;

/// A difficulty mode chosen at session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    /// The standard game.
    Normal,
    /// Tougher towns and a stingier shop.
    Hard,
    /// More gold, full buyback, and items that never break.
    Easy,
    /// Every town brawls; the hunter starts rich and fully equipped.
    Test,
    /// Every town brawls and the hunter starts poor.
    ForcedLose,
    /// Peaceful towns and a shop that sells swords.
    Samurai,
}

/// The numbers a preset fixes for a whole session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresetRules {
    /// Gold the hunter starts with.
    pub starting_gold: u32,
    /// Fraction of the price the shop pays when buying back.
    pub markdown: f64,
    /// Probability parameter for tough towns.
    pub toughness: f64,
    /// Items the hunter starts with.
    pub starting_kit: &'static [Item],
    /// Whether shops stock swords.
    pub sells_swords: bool,
}

/// Items a test-mode hunter carries from the start.
const TEST_KIT: &[Item] = &[
    Item::Water,
    Item::Rope,
    Item::Machete,
    Item::Shovel,
    Item::Boots,
    Item::Horse,
    Item::Boat,
];

const PRESET_TABLE: [(Preset, PresetRules); 6] = [
    (
        Preset::Normal,
        PresetRules {
            starting_gold: 20,
            markdown: 0.5,
            toughness: 0.4,
            starting_kit: &[],
            sells_swords: false,
        },
    ),
    (
        Preset::Hard,
        PresetRules {
            starting_gold: 20,
            markdown: 0.25,
            toughness: 0.75,
            starting_kit: &[],
            sells_swords: false,
        },
    ),
    (
        Preset::Easy,
        PresetRules {
            starting_gold: 40,
            markdown: 1.0,
            toughness: 0.3,
            starting_kit: &[],
            sells_swords: false,
        },
    ),
    (
        Preset::Test,
        PresetRules {
            starting_gold: 100,
            markdown: 0.5,
            toughness: 1.0,
            starting_kit: TEST_KIT,
            sells_swords: false,
        },
    ),
    (
        Preset::ForcedLose,
        PresetRules {
            starting_gold: 10,
            markdown: 0.5,
            toughness: 1.0,
            starting_kit: &[],
            sells_swords: false,
        },
    ),
    (
        Preset::Samurai,
        PresetRules {
            starting_gold: 20,
            markdown: 0.5,
            toughness: 0.0,
            starting_kit: &[],
            sells_swords: true,
        },
    ),
];

impl Preset {
    /// All presets in table order.
    pub fn all() -> [Self; 6] {
        PRESET_TABLE.map(|(preset, _)| preset)
    }

    /// Look up this preset's rules.
    pub fn rules(self) -> PresetRules {
        PRESET_TABLE
            .iter()
            .find(|(preset, _)| *preset == self)
            .map_or(PRESET_TABLE[0].1, |(_, rules)| *rules)
    }

    /// The token a player types to pick this preset.
    pub fn token(self) -> &'static str {
        match self {
            Self::Normal => "n",
            Self::Hard => "h",
            Self::Easy => "e",
            Self::Test => "test",
            Self::ForcedLose => "lose",
            Self::Samurai => "s",
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "normal" => Ok(Self::Normal),
            "h" | "hard" => Ok(Self::Hard),
            "e" | "easy" => Ok(Self::Easy),
            "test" => Ok(Self::Test),
            "lose" | "forced-lose" => Ok(Self::ForcedLose),
            "s" | "samurai" => Ok(Self::Samurai),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Hard => write!(f, "hard"),
            Self::Easy => write!(f, "easy"),
            Self::Test => write!(f, "test"),
            Self::ForcedLose => write!(f, "forced-lose"),
            Self::Samurai => write!(f, "samurai"),
        }
    }
}

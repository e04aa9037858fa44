//! Goods a hunter can carry in their kit.

use serde::{Deserialize, Serialize};

/// An item sold at the shop and carried in the hunter's kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Item {
    /// Needed to cross the Desert.
    Water,
    /// Needed to cross the Mountains.
    Rope,
    /// Needed to cross the Jungle.
    Machete,
    /// Lets the hunter dig for gold.
    Shovel,
    /// Needed to cross the Marsh.
    Boots,
    /// Needed to cross the Plains.
    Horse,
    /// Needed to cross the Ocean.
    Boat,
    /// Wins every brawl without a fight.
    Sword,
}

impl Item {
    /// Parse an item from a user-supplied string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "water" => Some(Self::Water),
            "rope" => Some(Self::Rope),
            "machete" => Some(Self::Machete),
            "shovel" => Some(Self::Shovel),
            "boots" => Some(Self::Boots),
            "horse" => Some(Self::Horse),
            "boat" => Some(Self::Boat),
            "sword" => Some(Self::Sword),
            _ => None,
        }
    }

    /// All items in shop display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Water,
            Self::Rope,
            Self::Machete,
            Self::Shovel,
            Self::Boots,
            Self::Horse,
            Self::Boat,
            Self::Sword,
        ]
    }

    /// The lowercase name of the item.
    pub fn name(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Rope => "rope",
            Self::Machete => "machete",
            Self::Shovel => "shovel",
            Self::Boots => "boots",
            Self::Horse => "horse",
            Self::Boat => "boat",
            Self::Sword => "sword",
        }
    }

    /// The item's name with an indefinite article where English wants one.
    pub fn with_article(self) -> String {
        match self {
            Self::Water | Self::Boots => self.name().to_string(),
            _ => format!("a {}", self.name()),
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Item::parse("Rope"), Some(Item::Rope));
        assert_eq!(Item::parse("  BOAT "), Some(Item::Boat));
        assert_eq!(Item::parse("sword"), Some(Item::Sword));
        assert_eq!(Item::parse("lantern"), None);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for item in Item::all() {
            assert_eq!(Item::parse(&item.to_string()), Some(*item));
        }
    }

    #[test]
    fn articles() {
        assert_eq!(Item::Rope.with_article(), "a rope");
        assert_eq!(Item::Water.with_article(), "water");
        assert_eq!(Item::Boots.with_article(), "boots");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Item::Machete).unwrap();
        assert_eq!(json, "\"machete\"");
    }
}

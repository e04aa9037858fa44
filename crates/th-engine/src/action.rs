//! Player action tokens.

use th_core::{ShopMode, ShopRequest};

/// One player action, parsed from a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Visit the shop (`b` to buy, `s` to sell, optionally naming an item).
    Shop(ShopRequest),
    /// Describe the surrounding terrain (`e`).
    Explore,
    /// Try to move on to a new town (`m`).
    Move,
    /// Look for a brawl (`l`).
    LookForTrouble,
    /// Search the town for its treasure (`h`).
    Hunt,
    /// Dig for gold (`d`).
    Dig,
    /// Give up the hunt (`x`).
    Quit,
}

impl Action {
    /// Parse a line of input into an action.
    ///
    /// Tokens are case-insensitive. Only the shop tokens take an argument.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let parts: Vec<&str> = trimmed.splitn(2, char::is_whitespace).collect();
        let token = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        let shop = |mode| {
            if rest.is_empty() {
                ShopRequest::browse(mode)
            } else {
                ShopRequest::trade(mode, rest)
            }
        };

        match (token.as_str(), rest.is_empty()) {
            ("b", _) => Some(Self::Shop(shop(ShopMode::Buy))),
            ("s", _) => Some(Self::Shop(shop(ShopMode::Sell))),
            ("e", true) => Some(Self::Explore),
            ("m", true) => Some(Self::Move),
            ("l", true) => Some(Self::LookForTrouble),
            ("h", true) => Some(Self::Hunt),
            ("d", true) => Some(Self::Dig),
            ("x", true) => Some(Self::Quit),
            _ => None,
        }
    }
}

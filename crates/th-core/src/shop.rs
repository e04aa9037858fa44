//! The town shop.
//!
//! Prices are fixed. Selling pays the price scaled by the shop's markdown
//! rate, rounded down.

use serde::{Deserialize, Serialize};

use crate::hunter::Hunter;
use crate::item::Item;

/// Whether the hunter is buying or selling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShopMode {
    /// Buy from the shop.
    Buy,
    /// Sell to the shop.
    Sell,
}

/// A single visit to the shop counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopRequest {
    /// Buying or selling.
    pub mode: ShopMode,
    /// The item named by the player, if any.
    pub item: Option<String>,
}

impl ShopRequest {
    /// Browse without naming an item.
    pub fn browse(mode: ShopMode) -> Self {
        Self { mode, item: None }
    }

    /// Trade a named item.
    pub fn trade(mode: ShopMode, item: impl Into<String>) -> Self {
        Self {
            mode,
            item: Some(item.into()),
        }
    }
}

/// A shop with a fixed price list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    markdown: f64,
    sells_swords: bool,
}

impl Shop {
    /// Create a shop that pays `markdown` of the price when buying back items.
    pub fn new(markdown: f64) -> Self {
        Self {
            markdown,
            sells_swords: false,
        }
    }

    /// Stock swords.
    pub fn with_swords(mut self, sells_swords: bool) -> Self {
        self.sells_swords = sells_swords;
        self
    }

    /// The markdown rate applied when buying back items.
    pub fn markdown(&self) -> f64 {
        self.markdown
    }

    /// Whether an item is on the shelves.
    pub fn stocks(&self, item: Item) -> bool {
        item != Item::Sword || self.sells_swords
    }

    /// The asking price of an item.
    pub fn price(item: Item) -> u32 {
        match item {
            Item::Water => 2,
            Item::Rope => 4,
            Item::Machete => 6,
            Item::Shovel => 8,
            Item::Boots => 10,
            Item::Horse => 12,
            Item::Boat => 20,
            Item::Sword => 15,
        }
    }

    /// What the shop pays for an item.
    pub fn buyback_price(&self, item: Item) -> u32 {
        (f64::from(Self::price(item)) * self.markdown).floor() as u32
    }

    /// Serve one request and describe what happened.
    pub fn enter(&self, hunter: &mut Hunter, request: &ShopRequest) -> String {
        match (request.mode, request.item.as_deref()) {
            (ShopMode::Buy, None) => self.wares(),
            (ShopMode::Sell, None) => self.offers(hunter),
            (mode, Some(name)) => match Item::parse(name) {
                Some(item) if mode == ShopMode::Buy => self.buy(hunter, item),
                Some(item) => self.sell(hunter, item),
                None => format!("We ain't never heard of a {}.", name.trim()),
            },
        }
    }

    fn wares(&self) -> String {
        let mut out = "Welcome to the shop! We have the finest wares in town.\nCurrently we have the following items:".to_string();
        for item in Item::all().iter().filter(|i| self.stocks(**i)) {
            out.push_str(&format!("\n  {item}: {} gold", Self::price(*item)));
        }
        out.push_str("\nBuy one with: b <item>");
        out
    }

    fn offers(&self, hunter: &Hunter) -> String {
        if hunter.kit().is_empty() {
            return "You've got nothing to sell, stranger.".to_string();
        }
        let mut out = "Here's what I'd pay for your goods:".to_string();
        for item in hunter.kit() {
            out.push_str(&format!("\n  {item}: {} gold", self.buyback_price(*item)));
        }
        out.push_str("\nSell one with: s <item>");
        out
    }

    fn buy(&self, hunter: &mut Hunter, item: Item) -> String {
        if !self.stocks(item) {
            return format!("Sorry, we're fresh out of {item}.");
        }
        if hunter.has_item(item) {
            return format!("You already have {}.", item.with_article());
        }
        let price = Self::price(item);
        if !hunter.spend_gold(price) {
            return format!("Hmm, you don't have enough gold for {}.", item.with_article());
        }
        hunter.add_item(item);
        format!("Ye' got yerself {}. Come again soon.", item.with_article())
    }

    fn sell(&self, hunter: &mut Hunter, item: Item) -> String {
        if !hunter.remove_item(item) {
            return format!("You don't have {} to sell.", item.with_article());
        }
        let payout = self.buyback_price(item);
        hunter.earn_gold(payout);
        format!("Pleasure doin' business with you. Here's {payout} gold for your {item}.")
    }
}

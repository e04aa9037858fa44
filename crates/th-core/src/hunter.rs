//! The hunter's gold, kit, and treasure bookkeeping.

use serde::{Deserialize, Serialize};

use crate::item::Item;
use crate::treasure::{TREASURE_SET, Treasure};

/// The traveling character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hunter {
    name: String,
    gold: u32,
    kit: Vec<Item>,
    treasures: Vec<Treasure>,
}

impl Hunter {
    /// Create a hunter with a name and starting gold and an empty kit.
    pub fn new(name: impl Into<String>, gold: u32) -> Self {
        Self {
            name: name.into(),
            gold,
            kit: Vec::new(),
            treasures: Vec::new(),
        }
    }

    /// Add starting items to the kit.
    pub fn with_kit(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        for item in items {
            self.add_item(item);
        }
        self
    }

    /// The hunter's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current gold balance.
    pub fn gold(&self) -> u32 {
        self.gold
    }

    /// Items in the kit, in the order they were acquired.
    pub fn kit(&self) -> &[Item] {
        &self.kit
    }

    /// Treasures collected so far.
    pub fn treasures(&self) -> &[Treasure] {
        &self.treasures
    }

    /// Check if the kit holds an item.
    pub fn has_item(&self, item: Item) -> bool {
        self.kit.contains(&item)
    }

    /// Add an item to the kit. Returns false if it was already there.
    pub fn add_item(&mut self, item: Item) -> bool {
        if self.has_item(item) {
            return false;
        }
        self.kit.push(item);
        true
    }

    /// Remove an item from the kit. Returns false if it was not there.
    pub fn remove_item(&mut self, item: Item) -> bool {
        if let Some(pos) = self.kit.iter().position(|&i| i == item) {
            self.kit.remove(pos);
            true
        } else {
            false
        }
    }

    /// Adjust gold by a signed amount. Losses stop at zero.
    pub fn change_gold(&mut self, delta: i32) {
        let magnitude = delta.unsigned_abs();
        self.gold = if delta >= 0 {
            self.gold.saturating_add(magnitude)
        } else {
            self.gold.saturating_sub(magnitude)
        };
    }

    /// Pay gold if the balance covers it. Returns false and pays nothing otherwise.
    pub fn spend_gold(&mut self, amount: u32) -> bool {
        match self.gold.checked_sub(amount) {
            Some(rest) => {
                self.gold = rest;
                true
            }
            None => false,
        }
    }

    /// Receive gold.
    pub fn earn_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Whether the hunter has nothing left to lose.
    pub fn is_ruined(&self) -> bool {
        self.gold == 0
    }

    /// Record a treasure. Dust and duplicates are not recorded.
    pub fn add_treasure(&mut self, treasure: Treasure) -> bool {
        if !treasure.is_valuable() || self.treasures.contains(&treasure) {
            return false;
        }
        self.treasures.push(treasure);
        true
    }

    /// Whether every treasure of the winning set has been collected.
    pub fn has_full_set(&self) -> bool {
        TREASURE_SET.iter().all(|t| self.treasures.contains(t))
    }

    /// One-line summary of gold and kit.
    pub fn info(&self) -> String {
        let mut out = format!("{} has {} gold", self.name, self.gold);
        if !self.kit.is_empty() {
            let items: Vec<&str> = self.kit.iter().map(|i| i.name()).collect();
            out.push_str(&format!(" and {}", items.join(", ")));
        }
        out
    }

    /// One-line summary of collected treasures.
    pub fn treasure_info(&self) -> String {
        if self.treasures.is_empty() {
            return "Treasures found: none".to_string();
        }
        let names: Vec<&str> = self.treasures.iter().map(|t| t.name()).collect();
        format!("Treasures found: a {}", names.join(", a "))
    }
}

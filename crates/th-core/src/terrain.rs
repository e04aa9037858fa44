//! Terrain surrounding a town.
//!
//! Each town is ringed by one terrain, and leaving the town means crossing
//! it with the single item that terrain calls for.

use serde::{Deserialize, Serialize};

use crate::item::Item;

/// The obstacle a hunter must cross to leave a town.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    /// Crossed with a rope.
    Mountains,
    /// Crossed with a boat.
    Ocean,
    /// Crossed with a horse.
    Plains,
    /// Crossed with water.
    Desert,
    /// Crossed with a machete.
    Jungle,
    /// Crossed with boots.
    Marsh,
}

/// Upper bounds of the cumulative terrain buckets, paired with their terrain.
///
/// A draw `u` in `[0, 1)` selects the first entry whose bound is above it.
const TERRAIN_BUCKETS: [(f64, Terrain); 6] = [
    (0.16, Terrain::Mountains),
    (0.33, Terrain::Ocean),
    (0.50, Terrain::Plains),
    (0.66, Terrain::Desert),
    (0.83, Terrain::Jungle),
    (1.0, Terrain::Marsh),
];

impl Terrain {
    /// Map a uniform draw in `[0, 1)` onto a terrain using the fixed buckets.
    ///
    /// Draws at or above 1.0 land in the last bucket.
    pub fn from_draw(u: f64) -> Self {
        TERRAIN_BUCKETS
            .iter()
            .find(|(bound, _)| u < *bound)
            .map_or(Terrain::Marsh, |(_, terrain)| *terrain)
    }

    /// All terrains in bucket order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Mountains,
            Self::Ocean,
            Self::Plains,
            Self::Desert,
            Self::Jungle,
            Self::Marsh,
        ]
    }

    /// The terrain's display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mountains => "Mountains",
            Self::Ocean => "Ocean",
            Self::Plains => "Plains",
            Self::Desert => "Desert",
            Self::Jungle => "Jungle",
            Self::Marsh => "Marsh",
        }
    }

    /// The item required to cross this terrain.
    pub fn needed_item(self) -> Item {
        match self {
            Self::Mountains => Item::Rope,
            Self::Ocean => Item::Boat,
            Self::Plains => Item::Horse,
            Self::Desert => Item::Water,
            Self::Jungle => Item::Machete,
            Self::Marsh => Item::Boots,
        }
    }

    /// Description shown when the hunter explores the surroundings.
    pub fn info(self) -> String {
        format!(
            "You'll need {} to cross the {}.",
            self.needed_item().with_article(),
            self.name()
        )
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

//! Core types for Treasure Hunter.
//!
//! Provides the goods a hunter can carry, the terrain that surrounds each
//! town, the treasures hidden in towns, the hunter's own bookkeeping, the
//! shop, and the [`Roller`] seam through which every random draw flows.

pub mod dice;
pub mod hunter;
pub mod item;
pub mod shop;
pub mod terrain;
pub mod treasure;

pub use dice::{Roller, ScriptedRoller};
pub use hunter::Hunter;
pub use item::Item;
pub use shop::{Shop, ShopMode, ShopRequest};
pub use terrain::Terrain;
pub use treasure::Treasure;

//! Town encounter engine and session controller for Treasure Hunter.
//!
//! A [`Town`] resolves terrain crossings, brawls, and digging with draws
//! from an injected [`th_core::Roller`]. A [`Session`] sequences the towns a
//! hunter visits, hides and searches for treasure, and stops for good on a
//! win, a loss, or a quit.

pub mod action;
pub mod config;
pub mod encounter;
pub mod error;
pub mod preset;
pub mod session;
pub mod town;

pub use action::Action;
pub use config::GameConfig;
pub use encounter::{Brawl, Crossing, Dig, Toughness};
pub use error::{ConfigError, SessionError, SessionResult, TownError, TownResult};
pub use preset::{Preset, PresetRules};
pub use session::{Session, SessionState};
pub use town::{Occupancy, Town};

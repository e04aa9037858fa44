//! Configuration for a game session.

use crate::error::ConfigError;
use crate::preset::Preset;

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// The hunter's name, lowercased.
    pub hunter_name: String,
    /// Difficulty preset.
    pub preset: Preset,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hunter_name: "hunter".to_string(),
            preset: Preset::Normal,
        }
    }
}

impl GameConfig {
    /// Set the hunter's name. Names are trimmed and lowercased.
    pub fn with_name(mut self, name: &str) -> Result<Self, ConfigError> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        self.hunter_name = name;
        Ok(self)
    }

    /// Set the difficulty preset.
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self
    }
}

//! Last-used configuration, persisted across sessions.
//!
//! Persistence is best-effort only: a failed save must never block
//! gameplay, and a missing or unparsable blob simply means no restore.

use serde::{Deserialize, Serialize};

use crate::config::{GameConfig, GameMode};

/// The configuration blob written on every config-field change and
/// read once when the config screen is entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GameSettings {
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub selected_category: String,
    #[serde(default = "default_impostor_count")]
    pub impostor_count: usize,
    #[serde(default = "default_debate_minutes")]
    pub debate_minutes: u32,
    #[serde(default)]
    pub game_mode: GameMode,
}

const fn default_impostor_count() -> usize {
    1
}

const fn default_debate_minutes() -> u32 {
    2
}

impl GameSettings {
    /// Capture the fields worth restoring from a submitted config.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            players: config.player_names.clone(),
            selected_category: config.category_id.clone(),
            impostor_count: config.impostor_count,
            debate_minutes: config.debate_minutes,
            game_mode: config.mode,
        }
    }

    /// Rebuild a config pre-filled from the saved blob.
    #[must_use]
    pub fn into_config(self) -> GameConfig {
        GameConfig {
            mode: self.game_mode,
            category_id: self.selected_category,
            impostor_count: self.impostor_count,
            debate_minutes: self.debate_minutes,
            player_names: self.players,
        }
    }
}

/// Trait for abstracting settings persistence.
/// Platform-specific implementations should provide this.
pub trait SettingsStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist the last-used configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written. Callers
    /// treat this as best-effort and only log the failure.
    fn save(&self, settings: &GameSettings) -> Result<(), Self::Error>;

    /// Retrieve the last-used configuration, `None` if nothing was
    /// persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn load(&self) -> Result<Option<GameSettings>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_json() {
        let settings = GameSettings {
            players: vec![String::from("Ana"), String::from("Beto")],
            selected_category: String::from("animals"),
            impostor_count: 1,
            debate_minutes: 3,
            game_mode: GameMode::Mystery,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: GameSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn partial_blob_fills_defaults() {
        let settings: GameSettings = serde_json::from_str("{}").unwrap();
        assert!(settings.players.is_empty());
        assert_eq!(settings.impostor_count, 1);
        assert_eq!(settings.debate_minutes, 2);
        assert_eq!(settings.game_mode, GameMode::Classic);
    }

    #[test]
    fn config_conversion_is_lossless_for_shared_fields() {
        let settings = GameSettings {
            players: vec![String::from("Ana")],
            selected_category: String::from("foods"),
            impostor_count: 2,
            debate_minutes: 5,
            game_mode: GameMode::Classic,
        };
        let config = settings.clone().into_config();
        assert_eq!(GameSettings::from_config(&config), settings);
    }
}

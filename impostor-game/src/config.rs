//! Pre-game configuration and its validation rules.

use serde::{Deserialize, Serialize};

/// Selectable play style; does not alter the transition rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Classic,
    Mystery,
}

/// Everything the config screen collects before a game can start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: GameMode,
    pub category_id: String,
    pub impostor_count: usize,
    pub debate_minutes: u32,
    pub player_names: Vec<String>,
}

/// Rejections surfaced to the config screen; the session stays in the
/// config phase and no game state is created.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("se necesitan al menos {required} jugadores, hay {actual}")]
    NotEnoughPlayers { required: usize, actual: usize },
    #[error("debe haber al menos un impostor")]
    NoImpostors,
    #[error("falta seleccionar una categoría")]
    NoCategory,
    #[error("hay un nombre de jugador vacío")]
    EmptyName,
    #[error("nombre de jugador repetido: {0}")]
    DuplicateName(String),
    #[error("el tiempo de debate debe ser de al menos un minuto")]
    NoDebateTime,
}

impl GameConfig {
    /// Minimum player count for a given impostor count: at least two
    /// non-impostors must remain possible.
    #[must_use]
    pub const fn min_players(impostor_count: usize) -> usize {
        impostor_count + 2
    }

    /// Player names with surrounding whitespace removed.
    #[must_use]
    pub fn trimmed_names(&self) -> Vec<String> {
        self.player_names
            .iter()
            .map(|name| name.trim().to_string())
            .collect()
    }

    /// Check every submit-time precondition.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule: impostor count, category
    /// selection, debate duration, name shape, or player/impostor ratio.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.impostor_count < 1 {
            return Err(ConfigError::NoImpostors);
        }
        if self.category_id.is_empty() {
            return Err(ConfigError::NoCategory);
        }
        if self.debate_minutes < 1 {
            return Err(ConfigError::NoDebateTime);
        }
        let names = self.trimmed_names();
        let mut seen: Vec<&str> = Vec::with_capacity(names.len());
        for name in &names {
            if name.is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if seen.contains(&name.as_str()) {
                return Err(ConfigError::DuplicateName(name.clone()));
            }
            seen.push(name);
        }
        let required = Self::min_players(self.impostor_count);
        if names.len() < required {
            return Err(ConfigError::NotEnoughPlayers {
                required,
                actual: names.len(),
            });
        }
        Ok(())
    }
}

//! Web-specific implementations of the impostor-game seams.
//!
//! This module provides the localStorage-backed settings store, the
//! embedded word data, and re-exports the core game logic types.

use serde::de::DeserializeOwned;

// Re-export all types from impostor-game
pub use impostor_game::*;

const SETTINGS_KEY: &str = "impostor.settings";

fn local_storage() -> Option<web_sys::Storage> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|win| win.local_storage().ok().flatten())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Word data embedded at build time, same asset mechanism as any other
/// static configuration.
#[must_use]
pub fn load_word_book() -> WordBook {
    match WordBook::from_json(include_str!("../static/assets/data/words.json")) {
        Ok(book) => book,
        Err(err) => {
            log::error!("embedded word data is invalid: {err}");
            WordBook::empty()
        }
    }
}

/// Web-specific settings store over localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct WebSettingsStore;

#[derive(Debug, thiserror::Error)]
pub enum WebStorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    Write(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SettingsStore for WebSettingsStore {
    type Error = WebStorageError;

    fn save(&self, settings: &GameSettings) -> Result<(), Self::Error> {
        let storage = local_storage().ok_or(WebStorageError::Unavailable)?;
        let json = serde_json::to_string(settings)?;
        storage
            .set_item(SETTINGS_KEY, &json)
            .map_err(|e| WebStorageError::Write(format!("{e:?}")))
    }

    fn load(&self) -> Result<Option<GameSettings>, Self::Error> {
        let Some(storage) = local_storage() else {
            return Ok(None);
        };
        let Some(json) = storage.get_item(SETTINGS_KEY).ok().flatten() else {
            return Ok(None);
        };
        // A corrupt blob means no restore, never an error to the caller.
        Ok(parse_settings(&json))
    }
}

fn parse_settings<T: DeserializeOwned>(json: &str) -> Option<T> {
    match serde_json::from_str(json) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("ignoring unparsable settings blob: {err}");
            None
        }
    }
}

/// Best-effort save: failures are logged and swallowed, never surfaced.
pub fn persist_settings(settings: &GameSettings) {
    if let Err(err) = WebSettingsStore.save(settings) {
        log::warn!("could not persist game settings: {err}");
    }
}

/// Last-used configuration, if one survives in localStorage.
#[must_use]
pub fn restore_settings() -> Option<GameSettings> {
    match WebSettingsStore.load() {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("could not read game settings: {err}");
            None
        }
    }
}

/// The freshest restorable configuration: the storage blob if one
/// parses, otherwise the given fallback. The blob is rewritten on
/// every config-field edit, so it is never staler than a snapshot
/// captured earlier in the session.
#[must_use]
pub fn freshest_settings(fallback: Option<GameSettings>) -> Option<GameSettings> {
    restore_settings().or(fallback)
}

/// Create a web-compatible game engine over the embedded word book and
/// localStorage settings.
#[must_use]
pub fn create_web_game_engine() -> GameEngine<WebSettingsStore> {
    GameEngine::new(load_word_book(), WebSettingsStore)
}

//! Impostor Word Game Engine
//!
//! Platform-agnostic core logic for the pass-the-device impostor word
//! game. This crate provides the full session state machine without UI
//! or platform-specific dependencies.

pub mod clock;
pub mod config;
pub mod roles;
pub mod session;
pub mod settings;
pub mod words;

// Re-export commonly used types
pub use clock::{ClockState, DebateClock};
pub use config::{ConfigError, GameConfig, GameMode};
pub use roles::{Player, PlayerId, assign_roles};
pub use session::{GameSession, Phase, SetupError, Verdict};
pub use settings::{GameSettings, SettingsStore};
pub use words::{Category, WordBook, WordError};

/// Main engine binding the static word data to a settings store.
pub struct GameEngine<S>
where
    S: SettingsStore,
{
    words: WordBook,
    settings: S,
}

impl<S> GameEngine<S>
where
    S: SettingsStore,
{
    /// Create a new engine with the provided word book and settings store
    pub const fn new(words: WordBook, settings: S) -> Self {
        Self { words, settings }
    }

    /// The fixed category/word data this engine serves.
    #[must_use]
    pub const fn words(&self) -> &WordBook {
        &self.words
    }

    /// A fresh session on the welcome screen.
    #[must_use]
    pub fn new_session(&self) -> GameSession {
        GameSession::new()
    }

    /// Persist the last-used configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written; callers may
    /// treat this as best-effort.
    pub fn save_settings(&self, settings: &GameSettings) -> Result<(), S::Error> {
        self.settings.save(settings)
    }

    /// Load the last-used configuration, if any was persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    pub fn load_settings(&self) -> Result<Option<GameSettings>, anyhow::Error>
    where
        S::Error: Into<anyhow::Error>,
    {
        self.settings.load().map_err(Into::into)
    }
}

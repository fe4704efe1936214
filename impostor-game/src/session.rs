//! The game session state machine.
//!
//! `GameSession` is the single source of truth and the single writer of
//! all round state. The presentation layer only emits discrete actions;
//! the 1 Hz timer signal arrives through [`GameSession::tick`], which
//! self-guards so a stale callback landing after a phase change is a
//! no-op rather than a second mutator.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::clock::DebateClock;
use crate::config::{ConfigError, GameConfig, GameMode};
use crate::roles::{Player, PlayerId, assign_roles};
use crate::words::{WordBook, WordError};

/// Screen-level phase of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Welcome,
    Config,
    Reveal,
    Debate,
    Voting,
    Results,
}

/// Round outcome, computed at the results phase and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No side has won; another round is offered.
    Continue,
    /// Every impostor has been eliminated.
    CiviliansWin,
    /// Active impostors reached parity with the rest of the table.
    ImpostorsWin,
}

/// Why a config submission was rejected. The session stays in the
/// config phase; nothing else changes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Word(#[from] WordError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    phase: Phase,
    players: Vec<Player>,
    current_player_index: usize,
    word: String,
    round: u32,
    mode: GameMode,
    debate_minutes: u32,
    clock: DebateClock,
    last_eliminated: Option<PlayerId>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// A fresh session on the welcome screen with no game state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Welcome,
            players: Vec::new(),
            current_player_index: 0,
            word: String::new(),
            round: 1,
            mode: GameMode::Classic,
            debate_minutes: 2,
            clock: DebateClock::new(),
            last_eliminated: None,
        }
    }

    // --- read-only view ---------------------------------------------------

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Players still in the game, in seating order. A derived view;
    /// the underlying list is never filtered in place.
    #[must_use]
    pub fn active_players(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| !p.is_eliminated).collect()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// The player whose role is on screen during the reveal phase.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        match self.phase {
            Phase::Reveal => self.players.get(self.current_player_index),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_last_reveal(&self) -> bool {
        self.phase == Phase::Reveal
            && self.current_player_index + 1 == self.players.len()
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub const fn debate_minutes(&self) -> u32 {
        self.debate_minutes
    }

    #[must_use]
    pub const fn debate_seconds_left(&self) -> u32 {
        self.clock.remaining()
    }

    #[must_use]
    pub const fn debate_running(&self) -> bool {
        self.clock.is_running()
    }

    /// The player eliminated by the most recent vote, recorded at the
    /// moment of elimination.
    #[must_use]
    pub fn last_eliminated(&self) -> Option<&Player> {
        self.last_eliminated.and_then(|id| self.player(id))
    }

    /// Evaluate the win condition over the current elimination state.
    ///
    /// Civilians win once no active impostor remains; impostors win
    /// once they are numerous enough to be un-outvotable
    /// (`active <= impostors + 1`). Computed, never stored.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        let active = self.players.iter().filter(|p| !p.is_eliminated);
        let (mut total, mut impostors) = (0usize, 0usize);
        for player in active {
            total += 1;
            if player.is_impostor {
                impostors += 1;
            }
        }
        if impostors == 0 {
            Verdict::CiviliansWin
        } else if total <= impostors + 1 {
            Verdict::ImpostorsWin
        } else {
            Verdict::Continue
        }
    }

    // --- actions ----------------------------------------------------------

    /// welcome → config.
    pub fn start(&mut self) {
        if self.phase == Phase::Welcome {
            self.phase = Phase::Config;
        }
    }

    /// config → welcome.
    pub fn back_to_welcome(&mut self) {
        if self.phase == Phase::Config {
            self.phase = Phase::Welcome;
        }
    }

    /// config → reveal: validate, draw the secret word, assign roles.
    ///
    /// On rejection the session is left untouched in the config phase.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::Config` for an invalid configuration and
    /// `SetupError::Word` when the category id is not in the word book.
    pub fn submit_config(
        &mut self,
        config: &GameConfig,
        words: &WordBook,
    ) -> Result<(), SetupError> {
        if self.phase != Phase::Config {
            return Ok(()); // stale event from a previous screen
        }
        config.validate()?;
        let mut rng = SmallRng::from_entropy();
        let word = words.random_word(&config.category_id, &mut rng)?.to_string();
        let names = config.trimmed_names();
        let players = assign_roles(&names, config.impostor_count, &word, &mut rng)?;

        self.players = players;
        self.word = word;
        self.mode = config.mode;
        self.debate_minutes = config.debate_minutes;
        self.round = 1;
        self.current_player_index = 0;
        self.last_eliminated = None;
        self.phase = Phase::Reveal;
        log::info!(
            "game configured: {} players, {} impostor(s), {} min debate",
            self.players.len(),
            config.impostor_count,
            self.debate_minutes
        );
        Ok(())
    }

    /// Advance the reveal; entering the debate after the last player.
    pub fn next_player(&mut self) {
        if self.phase != Phase::Reveal {
            return;
        }
        if self.current_player_index + 1 < self.players.len() {
            self.current_player_index += 1;
        } else {
            self.enter_debate();
        }
    }

    /// One second of debate time. No-op outside a running debate, so a
    /// pending interval callback that fires after the phase changed
    /// cannot touch any state field.
    pub fn tick(&mut self) {
        if self.phase != Phase::Debate {
            return;
        }
        if self.clock.tick() {
            self.phase = Phase::Voting;
        }
    }

    /// Toggle the debate countdown between running and paused.
    pub fn toggle_pause(&mut self) {
        if self.phase != Phase::Debate {
            return;
        }
        if self.clock.is_running() {
            self.clock.pause();
        } else {
            self.clock.resume();
        }
    }

    /// Manual reset control: full duration, running.
    pub fn reset_timer(&mut self) {
        if self.phase == Phase::Debate {
            self.clock.reset(self.debate_seconds());
        }
    }

    /// Skip the rest of the debate and move to voting.
    pub fn go_to_voting(&mut self) {
        if self.phase == Phase::Debate {
            self.clock.pause();
            self.phase = Phase::Voting;
        }
    }

    /// Eliminate the voted player and show the round results.
    ///
    /// Voting for an unknown or already-eliminated id is a no-op; such
    /// calls only arise from stale or duplicate UI events.
    pub fn vote(&mut self, id: PlayerId) {
        if self.phase != Phase::Voting {
            return;
        }
        let Some(player) = self
            .players
            .iter_mut()
            .find(|p| p.id == id && !p.is_eliminated)
        else {
            return;
        };
        player.is_eliminated = true;
        self.last_eliminated = Some(id);
        self.phase = Phase::Results;
    }

    /// voting → debate, only while time remains. The countdown resumes
    /// from where it stood; it is not reset.
    pub fn back_to_debate(&mut self) {
        if self.phase == Phase::Voting && self.clock.remaining() > 0 {
            self.phase = Phase::Debate;
            self.clock.resume();
        }
    }

    /// Start the next round's debate with a freshly armed timer.
    /// Refused once either side has won.
    pub fn next_round(&mut self) {
        if self.phase != Phase::Results || self.verdict() != Verdict::Continue {
            return;
        }
        self.round += 1;
        self.enter_debate();
    }

    /// Tear the whole session down to the welcome screen. The configured
    /// debate duration is kept and the clock re-armed to it, paused;
    /// everything else resets.
    pub fn restart(&mut self) {
        let minutes = self.debate_minutes;
        *self = Self::new();
        self.debate_minutes = minutes;
        self.clock.reset(self.debate_seconds());
        self.clock.pause();
    }

    // --- internals --------------------------------------------------------

    const fn debate_seconds(&self) -> u32 {
        self.debate_minutes * 60
    }

    fn enter_debate(&mut self) {
        self.clock.reset(self.debate_seconds());
        self.phase = Phase::Debate;
    }
}

//! Application state: one reducer owns the game session.
//!
//! Every user action and the 1 Hz timer signal funnel through
//! [`SessionStore::reduce`], so mutations are totally ordered and a
//! tick that was already queued when the phase changed lands on the
//! latest state, where `GameSession::tick` ignores it.

use std::rc::Rc;

use yew::prelude::*;

use crate::game::{GameConfig, GameSession, GameSettings, PlayerId, WordBook};

/// Discrete events emitted by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Start,
    SubmitConfig(GameConfig),
    BackToWelcome,
    NextPlayer,
    TimerTick,
    PauseResume,
    ResetTimer,
    GoToVoting,
    Vote(PlayerId),
    BackToDebate,
    NextRound,
    Restart,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore {
    pub session: GameSession,
    pub words: Rc<WordBook>,
    /// Validation message for the config screen; cleared by any action.
    pub config_error: Option<String>,
}

impl SessionStore {
    #[must_use]
    pub fn bootstrap() -> Self {
        Self::with_words(Rc::new(crate::game::load_word_book()))
    }

    #[must_use]
    pub fn with_words(words: Rc<WordBook>) -> Self {
        Self {
            session: GameSession::new(),
            words,
            config_error: None,
        }
    }
}

impl Reducible for SessionStore {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.config_error = None;
        match action {
            Action::Start => next.session.start(),
            Action::SubmitConfig(config) => {
                match next.session.submit_config(&config, &next.words) {
                    Ok(()) => {
                        crate::game::persist_settings(&GameSettings::from_config(&config));
                        crate::a11y::set_status("Revelación de roles");
                    }
                    Err(err) => next.config_error = Some(err.to_string()),
                }
            }
            Action::BackToWelcome => next.session.back_to_welcome(),
            Action::NextPlayer => next.session.next_player(),
            Action::TimerTick => next.session.tick(),
            Action::PauseResume => next.session.toggle_pause(),
            Action::ResetTimer => next.session.reset_timer(),
            Action::GoToVoting => next.session.go_to_voting(),
            Action::Vote(id) => next.session.vote(id),
            Action::BackToDebate => next.session.back_to_debate(),
            Action::NextRound => next.session.next_round(),
            Action::Restart => next.session.restart(),
        }
        Rc::new(next)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: UseReducerHandle<SessionStore>,
    pub saved_settings: UseStateHandle<Option<GameSettings>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        store: use_reducer(SessionStore::bootstrap),
        saved_settings: use_state(crate::game::restore_settings),
    }
}

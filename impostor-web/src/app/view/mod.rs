//! Phase-driven rendering: one screen component per [`Phase`].

pub mod handlers;

use yew::prelude::*;

use crate::a11y;
use crate::app::state::AppState;
use crate::game::Phase;
use crate::pages::config::ConfigPage;
use crate::pages::debate::DebatePage;
use crate::pages::results::ResultsPage;
use crate::pages::reveal::RevealPage;
use crate::pages::voting::VotingPage;
use crate::pages::welcome::WelcomePage;
use handlers::AppHandlers;

fn render_phase(state: &AppState, handlers: &AppHandlers) -> Html {
    let session = &state.store.session;
    match session.phase() {
        Phase::Welcome => html! {
            <WelcomePage on_start={handlers.start.clone()} />
        },
        Phase::Config => html! {
            <ConfigPage
                words={state.store.words.clone()}
                saved={(*state.saved_settings).clone()}
                error={state.store.config_error.clone().map(AttrValue::from)}
                on_back={handlers.back_to_welcome.clone()}
                on_submit={handlers.submit_config.clone()}
            />
        },
        Phase::Reveal => match session.current_player() {
            Some(player) => {
                let position = session
                    .players()
                    .iter()
                    .position(|p| p.id == player.id)
                    .unwrap_or_default()
                    + 1;
                html! {
                    <RevealPage
                        player={player.clone()}
                        position={position}
                        total={session.players().len()}
                        is_last={session.is_last_reveal()}
                        on_next={handlers.next_player.clone()}
                    />
                }
            }
            None => Html::default(),
        },
        Phase::Debate => html! {
            <DebatePage
                round={session.round()}
                seconds_left={session.debate_seconds_left()}
                total_seconds={session.debate_minutes() * 60}
                running={session.debate_running()}
                on_pause_resume={handlers.pause_resume.clone()}
                on_reset={handlers.reset_timer.clone()}
                on_go_to_voting={handlers.go_to_voting.clone()}
                on_restart={handlers.restart.clone()}
            />
        },
        Phase::Voting => html! {
            <VotingPage
                players={session.active_players().into_iter().cloned().collect::<Vec<_>>()}
                can_go_back={session.debate_seconds_left() > 0}
                on_vote={handlers.vote.clone()}
                on_back={handlers.back_to_debate.clone()}
                on_restart={handlers.restart.clone()}
            />
        },
        Phase::Results => html! {
            <ResultsPage
                round={session.round()}
                eliminated={session.last_eliminated().cloned()}
                verdict={session.verdict()}
                active_count={session.active_players().len()}
                on_next_round={handlers.next_round.clone()}
                on_restart={handlers.restart.clone()}
            />
        },
    }
}

#[must_use]
pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    html! {
        <>
            <style>{ a11y::visible_focus_css() }</style>
            <div id="game-status" class="sr-only" role="status" aria-live="polite"></div>
            { render_phase(state, &handlers) }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::SessionStore;
    use crate::game::{Category, WordBook};
    use futures::executor::block_on;
    use std::rc::Rc;
    use yew::LocalServerRenderer;

    #[function_component(ViewHarness)]
    fn view_harness() -> Html {
        let words = Rc::new(WordBook::from_categories(vec![Category {
            id: String::from("animals"),
            name: String::from("Animales"),
            words: vec![String::from("León")],
        }]));
        let state = AppState {
            store: use_reducer(move || SessionStore::with_words(words)),
            saved_settings: use_state(|| None),
        };
        render_app(&state)
    }

    #[test]
    fn fresh_app_renders_the_welcome_screen_and_live_region() {
        let html = block_on(LocalServerRenderer::<ViewHarness>::new().render());
        assert!(html.contains("welcome-screen"));
        assert!(html.contains("game-status"));
        assert!(html.contains("aria-live"));
    }
}

use yew::prelude::*;

use crate::game::{Player, PlayerId};

#[derive(Properties, Clone, PartialEq)]
pub struct VotingPageProps {
    /// Active players only, in seating order.
    pub players: Vec<Player>,
    /// Whether returning to the debate is still possible (time left).
    pub can_go_back: bool,
    pub on_vote: Callback<PlayerId>,
    pub on_back: Callback<()>,
    pub on_restart: Callback<()>,
}

#[function_component(VotingPage)]
pub fn voting_page(props: &VotingPageProps) -> Html {
    // One confirmation step so a stray tap cannot eliminate anyone.
    let selected = use_state(|| None::<PlayerId>);

    let select = |id: PlayerId| {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(Some(id)))
    };
    let on_confirm = {
        let cb = props.on_vote.clone();
        let selected = selected.clone();
        Callback::from(move |_| {
            if let Some(id) = *selected {
                selected.set(None);
                cb.emit(id);
            }
        })
    };
    let on_back = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_restart = {
        let cb = props.on_restart.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="screen voting-screen" data-testid="voting-screen">
            <div class="card">
                <h1 class="title">{ "Votación" }</h1>
                <p class="subtitle">{ "¿Quién es el impostor?" }</p>
                <ul class="vote-list">
                    { for props.players.iter().map(|player| {
                        let is_selected = *selected == Some(player.id);
                        html! {
                            <li key={player.id.to_string()}>
                                <button
                                    class={classes!("vote-option", is_selected.then_some("selected"))}
                                    onclick={select(player.id)}
                                >
                                    { player.name.clone() }
                                </button>
                            </li>
                        }
                    }) }
                </ul>
                <button
                    class="btn btn-primary"
                    disabled={selected.is_none()}
                    onclick={on_confirm}
                >
                    { "Eliminar Jugador" }
                </button>
                <div class="voting-footer">
                    if props.can_go_back {
                        <button class="btn btn-ghost" onclick={on_back}>
                            { "Volver al Debate" }
                        </button>
                    }
                    <button class="btn btn-ghost" onclick={on_restart}>
                        { "Nuevo juego" }
                    </button>
                </div>
            </div>
        </div>
    }
}

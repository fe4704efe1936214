use yew::prelude::*;

use crate::game::Player;

#[derive(Properties, Clone, PartialEq)]
pub struct RevealPageProps {
    pub player: Player,
    /// Position in the reveal order, 1-based, for the "3 de 5" header.
    pub position: usize,
    pub total: usize,
    pub is_last: bool,
    pub on_next: Callback<()>,
}

#[function_component(RevealPage)]
pub fn reveal_page(props: &RevealPageProps) -> Html {
    // The card starts face down so the device can be handed over
    // without exposing the previous player's role.
    let revealed = use_state(|| false);

    let on_flip = {
        let revealed = revealed.clone();
        Callback::from(move |_| revealed.set(true))
    };
    let on_next = {
        let cb = props.on_next.clone();
        let revealed = revealed.clone();
        Callback::from(move |_| {
            revealed.set(false);
            cb.emit(());
        })
    };

    let next_label = if props.is_last {
        "Comenzar Debate"
    } else {
        "Siguiente Jugador"
    };

    html! {
        <div class="screen reveal-screen" data-testid="reveal-screen">
            <div class="card">
                <p class="reveal-progress">
                    { format!("Jugador {} de {}", props.position, props.total) }
                </p>
                <h1 class="title">{ props.player.name.clone() }</h1>
                if *revealed {
                    <div class="reveal-role">
                        if props.player.is_impostor {
                            <p class="role-impostor">{ "Eres el IMPOSTOR" }</p>
                            <p class="role-hint">
                                { "No conoces la palabra. Disimula y sobrevive al debate." }
                            </p>
                        } else {
                            <p class="role-word-label">{ "La palabra secreta es" }</p>
                            <p class="role-word">
                                { props.player.word.clone().unwrap_or_default() }
                            </p>
                        }
                    </div>
                    <button class="btn btn-primary" onclick={on_next}>
                        { next_label }
                    </button>
                } else {
                    <p class="reveal-hint">
                        { format!("Pásale el dispositivo a {} antes de revelar.", props.player.name) }
                    </p>
                    <button class="btn btn-primary" onclick={on_flip}>
                        { "Ver mi rol" }
                    </button>
                }
            </div>
        </div>
    }
}

use yew::prelude::*;

use crate::game::{Player, Verdict};

#[derive(Properties, Clone, PartialEq)]
pub struct ResultsPageProps {
    pub round: u32,
    /// The player the table just voted out.
    pub eliminated: Option<Player>,
    pub verdict: Verdict,
    pub active_count: usize,
    pub on_next_round: Callback<()>,
    pub on_restart: Callback<()>,
}

const fn verdict_headline(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Continue => "El juego continúa",
        Verdict::CiviliansWin => "¡Ganaron los civiles!",
        Verdict::ImpostorsWin => "¡Ganó el impostor!",
    }
}

#[function_component(ResultsPage)]
pub fn results_page(props: &ResultsPageProps) -> Html {
    let on_next_round = {
        let cb = props.on_next_round.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_restart = {
        let cb = props.on_restart.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="screen results-screen" data-testid="results-screen">
            <div class="card">
                <h1 class="title">{ format!("Resultado Ronda {}", props.round) }</h1>
                if let Some(eliminated) = &props.eliminated {
                    <div class="eliminated-box">
                        <p class="eliminated-label">{ "Jugador Eliminado" }</p>
                        <p class="eliminated-name">{ eliminated.name.clone() }</p>
                        <p class="eliminated-role">
                            if eliminated.is_impostor {
                                { "Era el impostor" }
                            } else {
                                { "Era un civil" }
                            }
                        </p>
                    </div>
                }
                <p class="verdict-headline">{ verdict_headline(props.verdict) }</p>
                if props.verdict == Verdict::Continue {
                    <p class="subtitle">
                        { format!("Quedan {} jugadores en la mesa.", props.active_count) }
                    </p>
                    <button class="btn btn-primary" onclick={on_next_round}>
                        { "Siguiente Ronda" }
                    </button>
                }
                <button class="btn btn-ghost" onclick={on_restart}>
                    { "Nuevo juego" }
                </button>
            </div>
        </div>
    }
}

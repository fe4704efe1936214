use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::game::{GameConfig, GameMode, GameSettings, WordBook};

#[derive(Properties, Clone, PartialEq)]
pub struct ConfigPageProps {
    pub words: Rc<WordBook>,
    /// Last-used configuration restored from storage, if any.
    #[prop_or_default]
    pub saved: Option<GameSettings>,
    /// Validation message from a rejected submit.
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_back: Callback<()>,
    pub on_submit: Callback<GameConfig>,
}

/// Everything the form edits before a submit.
#[derive(Clone, PartialEq)]
struct FormState {
    mode: GameMode,
    category_id: String,
    impostor_count: usize,
    debate_minutes: u32,
    players: Vec<String>,
    name_input: String,
}

impl FormState {
    fn from_saved(saved: Option<&GameSettings>) -> Self {
        let settings = saved.cloned().unwrap_or_default();
        Self {
            mode: settings.game_mode,
            category_id: settings.selected_category,
            impostor_count: settings.impostor_count.max(1),
            debate_minutes: settings.debate_minutes.clamp(1, 10),
            players: settings.players,
            name_input: String::new(),
        }
    }

    fn to_config(&self) -> GameConfig {
        GameConfig {
            mode: self.mode,
            category_id: self.category_id.clone(),
            impostor_count: self.impostor_count,
            debate_minutes: self.debate_minutes,
            player_names: self.players.clone(),
        }
    }

    fn to_settings(&self) -> GameSettings {
        GameSettings {
            players: self.players.clone(),
            selected_category: self.category_id.clone(),
            impostor_count: self.impostor_count,
            debate_minutes: self.debate_minutes,
            game_mode: self.mode,
        }
    }

    fn max_impostors(&self) -> usize {
        self.players.len().saturating_sub(2).max(1)
    }

    fn ready(&self) -> bool {
        !self.category_id.is_empty()
            && self.players.len() >= GameConfig::min_players(self.impostor_count)
    }
}

/// Apply one edit, persist the blob, update the handle. Settings are
/// written on every field change, last write wins.
fn edit(form: &UseStateHandle<FormState>, mutate: impl FnOnce(&mut FormState)) {
    let mut next = (**form).clone();
    mutate(&mut next);
    crate::game::persist_settings(&next.to_settings());
    form.set(next);
}

#[function_component(ConfigPage)]
pub fn config_page(props: &ConfigPageProps) -> Html {
    // Re-read storage on every mount: each field edit persisted a newer
    // blob than the snapshot the app captured at launch.
    let form = {
        let saved = props.saved.clone();
        use_state(move || {
            let restored = crate::game::freshest_settings(saved);
            FormState::from_saved(restored.as_ref())
        })
    };

    let on_back = {
        let cb = props.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_submit = {
        let cb = props.on_submit.clone();
        let form = form.clone();
        Callback::from(move |_| cb.emit(form.to_config()))
    };

    let set_mode = |mode: GameMode| {
        let form = form.clone();
        Callback::from(move |_| edit(&form, |f| f.mode = mode))
    };
    let on_category_change = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let value = event.target_unchecked_into::<HtmlSelectElement>().value();
            edit(&form, |f| f.category_id = value);
        })
    };
    let on_name_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = event.target_unchecked_into::<HtmlInputElement>().value();
            // the buffer is not part of the persisted settings
            let mut next = (*form).clone();
            next.name_input = value;
            form.set(next);
        })
    };
    let on_add_player = {
        let form = form.clone();
        Callback::from(move |_| {
            let name = form.name_input.trim().to_string();
            if name.is_empty() || form.players.iter().any(|p| p.trim() == name) {
                return;
            }
            edit(&form, |f| {
                f.players.push(name);
                f.name_input.clear();
            });
        })
    };
    let remove_player = |index: usize| {
        let form = form.clone();
        Callback::from(move |_| {
            edit(&form, |f| {
                f.players.remove(index);
                f.impostor_count = f.impostor_count.min(f.max_impostors());
            });
        })
    };
    let step_impostors = |delta: i64| {
        let form = form.clone();
        Callback::from(move |_| {
            edit(&form, |f| {
                let next = f.impostor_count.saturating_add_signed(delta as isize);
                f.impostor_count = next.clamp(1, f.max_impostors());
            });
        })
    };
    let step_minutes = |delta: i64| {
        let form = form.clone();
        Callback::from(move |_| {
            edit(&form, |f| {
                let next = i64::from(f.debate_minutes) + delta;
                f.debate_minutes = u32::try_from(next.clamp(1, 10)).unwrap_or(1);
            });
        })
    };

    let mode_button = |mode: GameMode, label: &str, desc: &str| {
        let selected = form.mode == mode;
        html! {
            <button
                class={classes!("mode-btn", selected.then_some("selected"))}
                onclick={set_mode(mode)}
            >
                <span class="mode-label">{ label }</span>
                <span class="mode-desc">{ desc }</span>
            </button>
        }
    };

    html! {
        <div class="screen config-screen" data-testid="config-screen">
            <button class="btn btn-ghost" onclick={on_back}>{ "Volver" }</button>
            <div class="card">
                <section class="config-section">
                    <h2>{ "Modo de Juego" }</h2>
                    <div class="mode-row">
                        { mode_button(GameMode::Classic, "Clásico", "Tradicional") }
                        { mode_button(GameMode::Mystery, "Misterio", "Más desafiante") }
                    </div>
                </section>

                <section class="config-section">
                    <h2>{ "Jugadores" }</h2>
                    <div class="player-add-row">
                        <input
                            type="text"
                            placeholder="Nombre del jugador"
                            value={form.name_input.clone()}
                            oninput={on_name_input}
                        />
                        <button class="btn" onclick={on_add_player}>{ "Agregar" }</button>
                    </div>
                    <ul class="player-list">
                        { for form.players.iter().enumerate().map(|(index, name)| html! {
                            <li key={name.clone()}>
                                <span>{ name }</span>
                                <button class="btn btn-ghost" onclick={remove_player(index)}>
                                    { "Quitar" }
                                </button>
                            </li>
                        }) }
                    </ul>
                </section>

                <section class="config-section">
                    <h2>{ "Categoría" }</h2>
                    <select onchange={on_category_change}>
                        <option value="" selected={form.category_id.is_empty()}>
                            { "Seleccionar Categoría" }
                        </option>
                        { for props.words.categories.iter().map(|category| html! {
                            <option
                                value={category.id.clone()}
                                selected={form.category_id == category.id}
                            >
                                { category.name.clone() }
                            </option>
                        }) }
                    </select>
                </section>

                <section class="config-section stepper">
                    <h2>{ "Cantidad de Impostores" }</h2>
                    <div class="stepper-row">
                        <button
                            class="btn"
                            disabled={form.impostor_count <= 1}
                            onclick={step_impostors(-1)}
                        >{ "-" }</button>
                        <span class="stepper-value">{ form.impostor_count }</span>
                        <button
                            class="btn"
                            disabled={form.impostor_count >= form.max_impostors()}
                            onclick={step_impostors(1)}
                        >{ "+" }</button>
                    </div>
                </section>

                <section class="config-section stepper">
                    <h2>{ "Tiempo de Debate" }</h2>
                    <div class="stepper-row">
                        <button
                            class="btn"
                            disabled={form.debate_minutes <= 1}
                            onclick={step_minutes(-1)}
                        >{ "-" }</button>
                        <span class="stepper-value">{ form.debate_minutes }{ " min" }</span>
                        <button
                            class="btn"
                            disabled={form.debate_minutes >= 10}
                            onclick={step_minutes(1)}
                        >{ "+" }</button>
                    </div>
                </section>

                if let Some(error) = &props.error {
                    <p class="config-error" role="alert">{ error }</p>
                }

                <button
                    class="btn btn-primary"
                    disabled={!form.ready()}
                    onclick={on_submit}
                >
                    { "Iniciar Juego" }
                </button>
            </div>
        </div>
    }
}

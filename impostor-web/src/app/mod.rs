pub mod state;
pub mod timer;
pub mod view;

use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let state = state::use_app_state();
    timer::use_debate_interval(&state.store);
    view::render_app(&state)
}

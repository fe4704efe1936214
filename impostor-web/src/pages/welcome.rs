use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct WelcomePageProps {
    pub on_start: Callback<()>,
}

#[function_component(WelcomePage)]
pub fn welcome_page(props: &WelcomePageProps) -> Html {
    let on_start = {
        let cb = props.on_start.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="screen welcome-screen" data-testid="welcome-screen">
            <div class="card">
                <h1 class="title">{ "Impostor" }</h1>
                <p class="subtitle">
                    { "Una palabra secreta, un impostor. Pasen el teléfono y descúbranlo." }
                </p>
                <button class="btn btn-primary" onclick={on_start}>
                    { "Jugar" }
                </button>
            </div>
        </div>
    }
}

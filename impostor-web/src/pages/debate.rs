use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct DebatePageProps {
    pub round: u32,
    pub seconds_left: u32,
    pub total_seconds: u32,
    pub running: bool,
    pub on_pause_resume: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_go_to_voting: Callback<()>,
    pub on_restart: Callback<()>,
}

/// mm:ss, seconds zero-padded.
#[must_use]
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Fraction of the debate remaining, for the progress bar width.
#[must_use]
pub fn progress_pct(seconds_left: u32, total_seconds: u32) -> u32 {
    if total_seconds == 0 {
        return 0;
    }
    seconds_left * 100 / total_seconds
}

/// The bar shifts color as the clock runs down.
#[must_use]
pub const fn urgency_class(seconds_left: u32) -> &'static str {
    if seconds_left <= 30 {
        "timer-critical"
    } else if seconds_left <= 60 {
        "timer-warning"
    } else {
        "timer-calm"
    }
}

#[function_component(DebatePage)]
pub fn debate_page(props: &DebatePageProps) -> Html {
    let unit = |cb: &Callback<()>| {
        let cb = cb.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let pause_label = if props.running { "Pausar" } else { "Reanudar" };

    html! {
        <div class="screen debate-screen" data-testid="debate-screen">
            <button class="btn btn-ghost" onclick={unit(&props.on_restart)}>
                { "Nuevo juego" }
            </button>
            <div class="card">
                <h1 class="title">{ format!("Ronda {}", props.round) }</h1>
                <p class="subtitle">{ "Debatan: ¿quién no conoce la palabra?" }</p>
                <p class={classes!("timer-display", urgency_class(props.seconds_left))}>
                    { format_time(props.seconds_left) }
                </p>
                <div class="timer-bar">
                    <div
                        class="timer-bar-fill"
                        style={format!("width:{}%", progress_pct(props.seconds_left, props.total_seconds))}
                    />
                </div>
                <div class="debate-controls">
                    <button class="btn" onclick={unit(&props.on_pause_resume)}>
                        { pause_label }
                    </button>
                    <button class="btn" onclick={unit(&props.on_reset)}>
                        { "Reiniciar" }
                    </button>
                    <button class="btn btn-primary" onclick={unit(&props.on_go_to_voting)}>
                        { "Ir a Votación" }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn time_formats_as_minutes_and_padded_seconds() {
        assert_eq!(format_time(120), "2:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(9), "0:09");
        assert_eq!(format_time(0), "0:00");
    }

    #[test]
    fn progress_tracks_the_remaining_fraction() {
        assert_eq!(progress_pct(120, 120), 100);
        assert_eq!(progress_pct(60, 120), 50);
        assert_eq!(progress_pct(0, 120), 0);
        assert_eq!(progress_pct(10, 0), 0);
    }

    #[test]
    fn urgency_class_shifts_at_the_thresholds() {
        assert_eq!(urgency_class(120), "timer-calm");
        assert_eq!(urgency_class(61), "timer-calm");
        assert_eq!(urgency_class(60), "timer-warning");
        assert_eq!(urgency_class(31), "timer-warning");
        assert_eq!(urgency_class(30), "timer-critical");
        assert_eq!(urgency_class(0), "timer-critical");
    }

    #[derive(Properties, Clone, PartialEq)]
    struct HostProps {
        seconds_left: u32,
        running: bool,
    }

    #[function_component(Host)]
    fn host(props: &HostProps) -> Html {
        html! {
            <DebatePage
                round={2}
                seconds_left={props.seconds_left}
                total_seconds={120}
                running={props.running}
                on_pause_resume={Callback::noop()}
                on_reset={Callback::noop()}
                on_go_to_voting={Callback::noop()}
                on_restart={Callback::noop()}
            />
        }
    }

    #[test]
    fn debate_screen_shows_round_clock_and_controls() {
        let html = block_on(
            LocalServerRenderer::<Host>::with_props(HostProps {
                seconds_left: 95,
                running: true,
            })
            .render(),
        );
        assert!(html.contains("Ronda 2"));
        assert!(html.contains("1:35"));
        assert!(html.contains("Pausar"));
        assert!(html.contains("Ir a Votación"));
    }

    #[test]
    fn paused_clock_offers_resume() {
        let html = block_on(
            LocalServerRenderer::<Host>::with_props(HostProps {
                seconds_left: 20,
                running: false,
            })
            .render(),
        );
        assert!(html.contains("Reanudar"));
        assert!(html.contains("timer-critical"));
    }
}

//! 1 Hz debate countdown scheduling.
//!
//! The core clock only consumes `tick` signals; the interval that
//! produces them lives here and is registered/unregistered in lockstep
//! with the debate phase. Leaving the debate (voting early, restart)
//! drops the registration in the effect cleanup, and the session's own
//! tick guard swallows any callback that was already queued.

use yew::prelude::*;

use crate::app::state::{Action, SessionStore};
use crate::game::Phase;

const TICK_MS: i32 = 1_000;

#[cfg(target_arch = "wasm32")]
struct TickInterval {
    id: i32,
    _closure: wasm_bindgen::prelude::Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for TickInterval {
    fn drop(&mut self) {
        if let Some(win) = web_sys::window() {
            win.clear_interval_with_handle(self.id);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn register_tick_interval(store: UseReducerHandle<SessionStore>) -> Option<TickInterval> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;

    let window = web_sys::window()?;
    let closure = Closure::wrap(Box::new(move || {
        store.dispatch(Action::TimerTick);
    }) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TICK_MS,
        )
        .ok()?;
    Some(TickInterval {
        id,
        _closure: closure,
    })
}

#[cfg(not(target_arch = "wasm32"))]
struct TickInterval;

#[cfg(not(target_arch = "wasm32"))]
fn register_tick_interval(_store: UseReducerHandle<SessionStore>) -> Option<TickInterval> {
    let _ = TICK_MS;
    None
}

/// Keep a browser interval alive exactly while the debate clock should
/// advance.
#[hook]
pub fn use_debate_interval(store: &UseReducerHandle<SessionStore>) {
    let session = &store.session;
    let active = session.phase() == Phase::Debate && session.debate_running();
    let store = store.clone();
    use_effect_with(active, move |active| {
        let registration = if *active {
            register_tick_interval(store)
        } else {
            None
        };
        move || drop(registration)
    });
}

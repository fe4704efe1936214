//! Browser tests for the localStorage-backed settings store.

use impostor_web::game::{
    GameMode, GameSettings, SettingsStore, WebSettingsStore, freshest_settings, persist_settings,
    restore_settings,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear_storage() {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        storage.clear().unwrap();
    }
}

fn sample_settings() -> GameSettings {
    GameSettings {
        players: vec![
            String::from("Ana"),
            String::from("Beto"),
            String::from("Cat"),
        ],
        selected_category: String::from("animals"),
        impostor_count: 1,
        debate_minutes: 3,
        game_mode: GameMode::Mystery,
    }
}

#[wasm_bindgen_test]
fn settings_survive_a_save_and_load() {
    clear_storage();
    let store = WebSettingsStore;
    store.save(&sample_settings()).unwrap();
    let restored = store.load().unwrap().expect("settings were just saved");
    assert_eq!(restored, sample_settings());
}

#[wasm_bindgen_test]
fn loading_without_a_saved_blob_restores_nothing() {
    clear_storage();
    assert!(WebSettingsStore.load().unwrap().is_none());
}

#[wasm_bindgen_test]
fn corrupt_blob_is_ignored_instead_of_failing() {
    clear_storage();
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .expect("browser localStorage");
    storage.set_item("impostor.settings", "{not json").unwrap();
    assert!(WebSettingsStore.load().unwrap().is_none());
}

#[wasm_bindgen_test]
fn best_effort_helpers_round_trip() {
    clear_storage();
    persist_settings(&sample_settings());
    assert_eq!(restore_settings(), Some(sample_settings()));
}

#[wasm_bindgen_test]
fn config_reentry_sees_the_latest_blob_not_a_launch_snapshot() {
    clear_storage();
    // snapshot taken when the app mounted, before the last game's edits
    let launch_snapshot = GameSettings::default();
    persist_settings(&sample_settings());
    assert_eq!(
        freshest_settings(Some(launch_snapshot)),
        Some(sample_settings())
    );
}

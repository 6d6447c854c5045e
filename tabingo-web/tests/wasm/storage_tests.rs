use tabingo_game::{BingoAction, BingoEngine, StateStore};
use tabingo_web::storage::{LocalStateStore, state_key};
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn clear(city_id: &str) {
    let storage = tabingo_web::dom::local_storage().expect("localStorage");
    let _ = storage.remove_item(&state_key(city_id));
}

#[wasm_bindgen_test]
fn engine_round_trips_through_local_storage() {
    clear("osaka");
    {
        let mut engine = BingoEngine::new(LocalStateStore, "osaka");
        engine.dispatch(&BingoAction::AddPhotoMain {
            id: "wild".into(),
            photo: "data:wild".into(),
        });
    }
    let reloaded = BingoEngine::new(LocalStateStore, "osaka");
    assert!(reloaded.state().main["wild"].done);
    clear("osaka");
}

#[wasm_bindgen_test]
fn corrupt_save_hydrates_to_the_default_snapshot() {
    let storage = tabingo_web::dom::local_storage().expect("localStorage");
    storage
        .set_item(&state_key("kyoto"), "{broken json")
        .expect("seed");
    assert!(LocalStateStore.load_state("kyoto").is_err());

    let engine = BingoEngine::new(LocalStateStore, "kyoto");
    assert_eq!(engine.state().main.len(), 9);
    clear("kyoto");
}

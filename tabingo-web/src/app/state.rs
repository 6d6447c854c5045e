use tabingo_game::{BingoAction, BingoEngine, DEFAULT_CITY_ID};
use yew::prelude::*;

use crate::api::{AllCellImages, CellImages, FoodPlace, MainPlace, RemoteBingoReport, VideoStatus};
use crate::storage::LocalStateStore;

/// All hook state owned by the app shell. The engine handle is the single
/// owner of grid state; everything else is remote enrichment.
#[derive(Clone)]
pub struct AppState {
    pub engine: UseStateHandle<BingoEngine<LocalStateStore>>,
    pub user_id: UseStateHandle<Option<AttrValue>>,
    pub session_id: UseStateHandle<Option<AttrValue>>,
    pub cell_images: UseStateHandle<AllCellImages>,
    pub main_places: UseStateHandle<Vec<MainPlace>>,
    pub food_places: UseStateHandle<Vec<FoodPlace>>,
    pub video: UseStateHandle<Option<VideoStatus>>,
    pub report: UseStateHandle<Option<RemoteBingoReport>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        engine: use_state(initial_engine),
        user_id: use_state(|| None),
        session_id: use_state(|| None),
        cell_images: use_state(AllCellImages::default),
        main_places: use_state(Vec::new),
        food_places: use_state(Vec::new),
        video: use_state(|| None),
        report: use_state(|| None),
    }
}

fn initial_engine() -> BingoEngine<LocalStateStore> {
    let city_id = initial_city_id();
    BingoEngine::new(LocalStateStore, &city_id)
}

/// A `?city=` parameter picks the deployment's grid; everything else runs
/// on the default city.
fn initial_city_id() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::query_param("city").unwrap_or_else(|| DEFAULT_CITY_ID.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_CITY_ID.to_string()
    }
}

impl AppState {
    /// Apply one grid action through the engine handle.
    pub fn dispatch(&self, action: &BingoAction) {
        let mut engine = (*self.engine).clone();
        engine.dispatch(action);
        self.engine.set(engine);
    }

    pub fn set_city(&self, city_id: &str) {
        let mut engine = (*self.engine).clone();
        engine.set_city(city_id);
        self.engine.set(engine);
    }

    pub fn add_free_photo(&self, photo: String) {
        let mut engine = (*self.engine).clone();
        engine.add_free_photo(photo);
        self.engine.set(engine);
    }

    pub fn remove_free_photo(&self, index: usize) {
        let mut engine = (*self.engine).clone();
        engine.remove_free_photo(index);
        self.engine.set(engine);
    }

    /// Imagery for the current city, empty until the fetch lands.
    #[must_use]
    pub fn city_images(&self) -> CellImages {
        self.cell_images
            .get(self.engine.city().id)
            .cloned()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn user_id_str(&self) -> Option<String> {
        self.user_id.as_ref().map(ToString::to_string)
    }

    #[must_use]
    pub fn session_id_str(&self) -> Option<String> {
        self.session_id.as_ref().map(ToString::to_string)
    }
}

//! localStorage-backed persistence for the bingo engine.
//!
//! Keys are per city so saves from different trips never collide, and the
//! stored JSON stays readable by older builds that only knew the single
//! `photo` field.

use tabingo_game::{BingoState, FreePhotoAlbum, StateStore};

#[cfg(target_arch = "wasm32")]
use crate::dom;

/// Storage key for a city's grid snapshot.
#[must_use]
pub fn state_key(city_id: &str) -> String {
    format!("travel-bingo-{city_id}")
}

/// Storage key for a city's free-photo album.
#[must_use]
pub fn album_key(city_id: &str) -> String {
    format!("travel-bingo-free-photos-{city_id}")
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Browser localStorage adapter for [`StateStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStateStore;

impl LocalStateStore {
    #[cfg(target_arch = "wasm32")]
    fn read(key: &str) -> Result<Option<String>, StorageError> {
        let storage = dom::local_storage()
            .map_err(|e| StorageError::Storage(dom::js_error_message(&e)))?;
        storage
            .get_item(key)
            .map_err(|e| StorageError::Storage(dom::js_error_message(&e)))
    }

    #[cfg(target_arch = "wasm32")]
    fn write(key: &str, json: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage()
            .map_err(|e| StorageError::Storage(dom::js_error_message(&e)))?;
        storage
            .set_item(key, json)
            .map_err(|e| StorageError::Storage(dom::js_error_message(&e)))
    }

    // Server rendering has no localStorage: loads see an empty store and
    // saves are dropped. The browser build replaces both paths above.
    #[cfg(not(target_arch = "wasm32"))]
    fn read(_key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write(_key: &str, _json: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

impl StateStore for LocalStateStore {
    type Error = StorageError;

    fn load_state(&self, city_id: &str) -> Result<Option<BingoState>, Self::Error> {
        Self::read(&state_key(city_id))?
            .map(|json| BingoState::from_json(&json))
            .transpose()
            .map_err(StorageError::from)
    }

    fn save_state(&self, city_id: &str, state: &BingoState) -> Result<(), Self::Error> {
        let json = state.to_json()?;
        Self::write(&state_key(city_id), &json)
    }

    fn load_album(&self, city_id: &str) -> Result<Option<FreePhotoAlbum>, Self::Error> {
        Self::read(&album_key(city_id))?
            .map(|json| FreePhotoAlbum::from_json(&json))
            .transpose()
            .map_err(StorageError::from)
    }

    fn save_album(&self, city_id: &str, album: &FreePhotoAlbum) -> Result<(), Self::Error> {
        let json = album.to_json()?;
        Self::write(&album_key(city_id), &json)
    }
}

#[cfg(test)]
mod tests {
    use super::{LocalStateStore, album_key, state_key};
    use tabingo_game::{BingoAction, BingoEngine, main_progress};

    #[test]
    fn keys_are_scoped_per_city() {
        assert_eq!(state_key("osaka"), "travel-bingo-osaka");
        assert_eq!(album_key("osaka"), "travel-bingo-free-photos-osaka");
        assert_ne!(state_key("kyoto"), state_key("osaka"));
    }

    #[test]
    fn engine_runs_on_the_local_store_without_a_browser() {
        // Server-side hydration starts from the empty snapshot and
        // dispatching must not reach for localStorage.
        let mut engine = BingoEngine::new(LocalStateStore, "osaka");
        assert_eq!(main_progress(engine.state(), engine.city()).done, 0);

        engine.dispatch(&BingoAction::AddPhotoMain {
            id: "wild".into(),
            photo: "data:a".into(),
        });
        assert!(engine.state().main_cell("wild").unwrap().done);
    }
}

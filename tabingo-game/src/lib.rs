//! Tabingo Game Engine
//!
//! Platform-agnostic core logic for the Tabingo travel bingo game.
//! This crate provides the grid state machine, progress evaluation and
//! persistence seams without UI or platform-specific dependencies.

pub mod album;
pub mod cells;
pub mod progress;
pub mod reducer;
pub mod report;
pub mod state;

// Re-export commonly used types
pub use album::FreePhotoAlbum;
pub use cells::{
    CITIES, CellConfig, CityConfig, DEFAULT_CITY_ID, FOOD_ENTRANCE_IDS, FOOD_LINES, Line, city,
    default_city,
};
pub use progress::{
    Progress, completed_food_lines, completed_main_line_count, completed_main_lines,
    food_progress, is_all_main_complete, is_food_bingo_complete, line_cells, main_progress,
};
pub use reducer::{BingoAction, reduce};
pub use report::{BingoReport, report_from_boxes, video_file_name, video_public_url};
pub use state::{BingoState, CellState, MAX_PHOTOS, PhotoList, normalize};

/// Trait for abstracting per-city persistence of the grid snapshot and
/// the free photo album. Platform-specific implementations provide this.
pub trait StateStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the persisted grid snapshot for a city, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read or the
    /// persisted value cannot be parsed.
    fn load_state(&self, city_id: &str) -> Result<Option<BingoState>, Self::Error>;

    /// Persist the grid snapshot for a city.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save_state(&self, city_id: &str, state: &BingoState) -> Result<(), Self::Error>;

    /// Load the persisted free photo album for a city, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read or the
    /// persisted value cannot be parsed.
    fn load_album(&self, city_id: &str) -> Result<Option<FreePhotoAlbum>, Self::Error>;

    /// Persist the free photo album for a city.
    ///
    /// # Errors
    ///
    /// Returns an error if the album cannot be written.
    fn save_album(&self, city_id: &str, album: &FreePhotoAlbum) -> Result<(), Self::Error>;
}

/// The single state owner for one browser session.
///
/// Constructed once at application start, then passed by handle to
/// whatever needs to dispatch actions or read state. Hydration happens in
/// the constructor and on city switches; every dispatch persists
/// best-effort afterwards. Store failures are logged and swallowed - the
/// local snapshot remains the source of truth, and a freshly hydrated
/// value is never immediately written back.
#[derive(Debug, Clone)]
pub struct BingoEngine<S: StateStore> {
    store: S,
    city: &'static CityConfig,
    state: BingoState,
    album: FreePhotoAlbum,
}

impl<S: StateStore> BingoEngine<S> {
    /// Create the engine and hydrate state for `city_id` (unknown ids fall
    /// back to the default city).
    pub fn new(store: S, city_id: &str) -> Self {
        let city = cells::city(city_id).unwrap_or_else(cells::default_city);
        let mut engine = Self {
            store,
            city,
            state: BingoState::default(),
            album: FreePhotoAlbum::default(),
        };
        engine.hydrate();
        engine
    }

    #[must_use]
    pub fn city(&self) -> &'static CityConfig {
        self.city
    }

    #[must_use]
    pub fn state(&self) -> &BingoState {
        &self.state
    }

    #[must_use]
    pub fn album(&self) -> &FreePhotoAlbum {
        &self.album
    }

    /// Apply one reducer action and persist the result best-effort.
    pub fn dispatch(&mut self, action: &BingoAction) {
        self.state = reducer::reduce(&self.state, action);
        self.persist_state();
    }

    /// Switch cities and re-hydrate. A no-op for unknown ids, and the
    /// hydrated snapshot is not written back.
    pub fn set_city(&mut self, city_id: &str) {
        let Some(city) = cells::city(city_id) else {
            log::warn!("ignoring switch to unknown city {city_id}");
            return;
        };
        if city.id != self.city.id {
            self.city = city;
            self.hydrate();
        }
    }

    /// Clear the current city back to its default empty snapshot.
    pub fn reset(&mut self) {
        self.dispatch(&BingoAction::Reset {
            city_id: self.city.id.to_string(),
        });
    }

    /// Append a photo to the free album and persist.
    pub fn add_free_photo(&mut self, photo: impl Into<String>) {
        self.album.add(photo);
        self.persist_album();
    }

    /// Append several photos to the free album (overflow dropped) and
    /// persist.
    pub fn add_free_photos<I>(&mut self, photos: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.album.add_many(photos);
        self.persist_album();
    }

    /// Remove a free album photo by index and persist.
    pub fn remove_free_photo(&mut self, index: usize) {
        self.album.remove(index);
        self.persist_album();
    }

    fn hydrate(&mut self) {
        let raw = match self.store.load_state(self.city.id) {
            Ok(Some(raw)) => raw,
            Ok(None) => BingoState::empty_for(self.city),
            Err(err) => {
                log::warn!("failed to load state for {}: {err}", self.city.id);
                BingoState::empty_for(self.city)
            }
        };
        self.state = state::normalize(raw, self.city);

        self.album = match self.store.load_album(self.city.id) {
            Ok(Some(album)) => album,
            Ok(None) => FreePhotoAlbum::default(),
            Err(err) => {
                log::warn!("failed to load album for {}: {err}", self.city.id);
                FreePhotoAlbum::default()
            }
        };
    }

    fn persist_state(&self) {
        if let Err(err) = self.store.save_state(self.city.id, &self.state) {
            log::warn!("failed to save state for {}: {err}", self.city.id);
        }
    }

    fn persist_album(&self) {
        if let Err(err) = self.store.save_album(self.city.id, &self.album) {
            log::warn!("failed to save album for {}: {err}", self.city.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStore {
        states: Rc<RefCell<HashMap<String, BingoState>>>,
        albums: Rc<RefCell<HashMap<String, FreePhotoAlbum>>>,
    }

    impl StateStore for MemoryStore {
        type Error = Infallible;

        fn load_state(&self, city_id: &str) -> Result<Option<BingoState>, Self::Error> {
            Ok(self.states.borrow().get(city_id).cloned())
        }

        fn save_state(&self, city_id: &str, state: &BingoState) -> Result<(), Self::Error> {
            self.states
                .borrow_mut()
                .insert(city_id.to_string(), state.clone());
            Ok(())
        }

        fn load_album(&self, city_id: &str) -> Result<Option<FreePhotoAlbum>, Self::Error> {
            Ok(self.albums.borrow().get(city_id).cloned())
        }

        fn save_album(&self, city_id: &str, album: &FreePhotoAlbum) -> Result<(), Self::Error> {
            self.albums
                .borrow_mut()
                .insert(city_id.to_string(), album.clone());
            Ok(())
        }
    }

    #[test]
    fn engine_hydrates_defaults_and_persists_dispatches() {
        let store = MemoryStore::default();
        let mut engine = BingoEngine::new(store.clone(), "osaka");
        assert_eq!(engine.state().main.len(), 9);
        // Hydration must not write anything back.
        assert!(store.states.borrow().is_empty());

        engine.dispatch(&BingoAction::AddPhotoMain {
            id: "wild".into(),
            photo: "data:a".into(),
        });
        let saved = store.states.borrow().get("osaka").cloned().unwrap();
        assert!(saved.main["wild"].done);
    }

    #[test]
    fn engine_reloads_saved_state_across_sessions() {
        let store = MemoryStore::default();
        {
            let mut engine = BingoEngine::new(store.clone(), "kyoto");
            engine.dispatch(&BingoAction::AddPhotoMain {
                id: "nara".into(),
                photo: "data:deer".into(),
            });
        }
        let engine = BingoEngine::new(store, "kyoto");
        assert!(engine.state().main["nara"].done);
    }

    #[test]
    fn city_switch_rehydrates_without_bleeding_state() {
        let store = MemoryStore::default();
        let mut engine = BingoEngine::new(store.clone(), "osaka");
        engine.dispatch(&BingoAction::AddPhotoMain {
            id: "glico".into(),
            photo: "data:sign".into(),
        });

        engine.set_city("kyoto");
        assert_eq!(engine.city().id, "kyoto");
        assert!(!engine.state().main["wild"].done);
        // The switch alone must not create a kyoto save.
        assert!(!store.states.borrow().contains_key("kyoto"));

        engine.set_city("osaka");
        assert!(engine.state().main["glico"].done);
    }

    #[test]
    fn unknown_city_switch_is_ignored() {
        let store = MemoryStore::default();
        let mut engine = BingoEngine::new(store, "osaka");
        engine.set_city("atlantis");
        assert_eq!(engine.city().id, "osaka");
    }

    #[test]
    fn reset_persists_the_empty_snapshot() {
        let store = MemoryStore::default();
        let mut engine = BingoEngine::new(store.clone(), "osaka");
        engine.dispatch(&BingoAction::AddPhotoMain {
            id: "wild".into(),
            photo: "data:a".into(),
        });
        engine.reset();
        let saved = store.states.borrow().get("osaka").cloned().unwrap();
        assert_eq!(saved, BingoState::empty_for(engine.city()));
    }

    #[test]
    fn album_operations_persist_independently() {
        let store = MemoryStore::default();
        let mut engine = BingoEngine::new(store.clone(), "osaka");
        engine.add_free_photo("free:1");
        engine.add_free_photos(["free:2", "free:3", "free:4"]);
        assert_eq!(engine.album().photos().len(), 3);

        engine.remove_free_photo(0);
        let saved = store.albums.borrow().get("osaka").cloned().unwrap();
        assert_eq!(saved.photos(), ["free:2", "free:3"]);
        // Album writes never touch the grid snapshot.
        assert!(store.states.borrow().is_empty());
    }

    #[test]
    fn engine_falls_back_to_default_city_for_unknown_id() {
        let engine = BingoEngine::new(MemoryStore::default(), "nowhere");
        assert_eq!(engine.city().id, DEFAULT_CITY_ID);
    }
}

//! Runtime bingo state: per-cell records and the per-city snapshot.
//!
//! Snapshots are plain serde data with no version field. Older saves only
//! carried the single `photo` field; [`normalize`] lifts those into the
//! multi-photo shape on read instead of versioning the schema.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

use crate::cells::CityConfig;

/// Upper bound on photos attached to one cell (and to the free album).
pub const MAX_PHOTOS: usize = 3;

/// Photo URLs or data URIs in upload order.
pub type PhotoList = SmallVec<[String; MAX_PHOTOS]>;

/// Per-cell runtime record.
///
/// `photo` is the legacy single-photo field older saves wrote; it mirrors
/// the first entry of `photos` whenever `photos` is authoritative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellState {
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub photos: PhotoList,
}

impl CellState {
    /// Recompute `done` and the legacy `photo` mirror from `photos`.
    pub fn sync_from_photos(&mut self) {
        self.done = !self.photos.is_empty();
        self.photo = self.photos.first().cloned();
    }

    /// Derive `photos` from the legacy `photo` field when a save predates
    /// multi-photo support. Already-migrated cells are left untouched.
    pub fn migrate_legacy_photo(&mut self) {
        if self.photos.is_empty()
            && let Some(photo) = self.photo.clone()
        {
            self.photos.push(photo);
        }
    }

    #[must_use]
    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn at_capacity(&self) -> bool {
        self.photos.len() >= MAX_PHOTOS
    }
}

/// Aggregate snapshot for one city: keyed main-grid cells plus the
/// index-addressed food sub-grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BingoState {
    #[serde(default)]
    pub main: BTreeMap<String, CellState>,
    #[serde(default)]
    pub food: Vec<CellState>,
}

impl BingoState {
    /// Default empty snapshot for a city: one untouched record per tracked
    /// main-grid id and per food cell.
    #[must_use]
    pub fn empty_for(city: &CityConfig) -> Self {
        let main = city
            .tracked_ids()
            .map(|id| (id.to_string(), CellState::default()))
            .collect();
        let food = vec![CellState::default(); city.food_cells.len()];
        Self { main, food }
    }

    #[must_use]
    pub fn main_cell(&self, id: &str) -> Option<&CellState> {
        self.main.get(id)
    }

    #[must_use]
    pub fn food_cell(&self, index: usize) -> Option<&CellState> {
        self.food.get(index)
    }

    /// Parse a persisted snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a snapshot; the
    /// caller is expected to fall back to [`BingoState::empty_for`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize for persistence.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (not expected for this
    /// shape; persistence treats it as a swallowed best-effort failure).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Normalize-on-read: reconcile a raw loaded snapshot with the city's
/// current configuration.
///
/// Back-fills main-grid keys the save is missing, sizes the food array to
/// the configured cell count, and migrates legacy single-photo cells into
/// the `photos` array. Applying it twice yields the same snapshot.
#[must_use]
pub fn normalize(mut raw: BingoState, city: &CityConfig) -> BingoState {
    for id in city.tracked_ids() {
        raw.main.entry(id.to_string()).or_default();
    }
    raw.food.resize_with(city.food_cells.len(), CellState::default);
    for cell in raw.main.values_mut().chain(raw.food.iter_mut()) {
        cell.migrate_legacy_photo();
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells;

    #[test]
    fn empty_snapshot_tracks_every_configured_cell() {
        let city = cells::city("osaka").unwrap();
        let state = BingoState::empty_for(city);
        assert_eq!(state.main.len(), 9);
        assert_eq!(state.food.len(), 9);
        assert!(state.main.values().all(|c| !c.done && c.photos.is_empty()));
    }

    #[test]
    fn legacy_photo_migrates_once() {
        let mut cell = CellState {
            done: true,
            photo: Some("data:one".into()),
            photos: PhotoList::new(),
        };
        cell.migrate_legacy_photo();
        assert_eq!(cell.photos.as_slice(), ["data:one"]);

        // Re-migrating an already migrated cell is a no-op.
        cell.migrate_legacy_photo();
        assert_eq!(cell.photos.len(), 1);
    }

    #[test]
    fn normalize_backfills_missing_cells_and_food_slots() {
        let city = cells::city("kyoto").unwrap();
        let mut raw = BingoState::default();
        raw.main.insert(
            "nara".into(),
            CellState {
                done: true,
                photo: Some("url".into()),
                photos: PhotoList::new(),
            },
        );

        let state = normalize(raw, city);
        assert_eq!(state.main.len(), 9);
        assert_eq!(state.food.len(), 9);
        assert_eq!(
            state.main["nara"].photos.as_slice(),
            ["url"],
            "legacy photo should seed the photos array"
        );
        assert!(!state.main["wild"].done);
    }

    #[test]
    fn normalize_is_idempotent() {
        let city = cells::city("osaka").unwrap();
        let mut raw = BingoState::empty_for(city);
        raw.main.get_mut("glico").unwrap().photo = Some("p".into());

        let once = normalize(raw, city);
        let twice = normalize(once.clone(), city);
        assert_eq!(once, twice);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let city = cells::city("osaka").unwrap();
        let mut state = BingoState::empty_for(city);
        let cell = state.main.get_mut("wild").unwrap();
        cell.photos.push("data:a".into());
        cell.photos.push("data:b".into());
        cell.sync_from_photos();

        let json = state.to_json().unwrap();
        let restored = BingoState::from_json(&json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn unversioned_legacy_json_still_parses() {
        // Shape written before multi-photo support.
        let json = r#"{"main":{"wild":{"done":true,"photo":"data:x"}},"food":[{"done":false,"photo":null}]}"#;
        let raw = BingoState::from_json(json).unwrap();
        assert!(raw.main["wild"].photos.is_empty());

        let state = normalize(raw, cells::city("osaka").unwrap());
        assert_eq!(state.main["wild"].photos.as_slice(), ["data:x"]);
        assert_eq!(state.food.len(), 9);
    }
}

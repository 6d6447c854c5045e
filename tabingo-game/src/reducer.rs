//! Pure state transitions for the bingo grids.
//!
//! Every action produces a fresh snapshot; nothing here performs I/O.
//! Out-of-range indices, unknown cell ids and full cells are silent
//! no-ops, so the reducer is total and never signals errors.

use crate::cells::{self, FOOD_ENTRANCE_IDS};
use crate::progress::is_food_bingo_complete;
use crate::state::{BingoState, CellState};

/// Actions dispatched by photo upload and delete flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BingoAction {
    /// Append a photo to a main-grid cell, capped at
    /// [`crate::state::MAX_PHOTOS`].
    AddPhotoMain { id: String, photo: String },
    /// Remove the photo at `index` from a main-grid cell.
    RemovePhotoMain { id: String, index: usize },
    /// Legacy single-photo upload: marks the cell done and seeds `photos`
    /// only when the cell has none yet.
    UploadMain { id: String, photo: String },
    /// Append a photo to a food sub-grid cell.
    AddPhotoFood { index: usize, photo: String },
    /// Remove a photo from a food sub-grid cell.
    RemovePhotoFood { cell: usize, index: usize },
    /// Legacy single-photo upload into the food sub-grid.
    UploadFood { index: usize, photo: String },
    /// Replace the state with the empty snapshot for a city.
    Reset { city_id: String },
    /// Replace the state wholesale (hydration from persistence).
    Load { state: BingoState },
}

/// Apply one action and return the next snapshot.
#[must_use]
pub fn reduce(state: &BingoState, action: &BingoAction) -> BingoState {
    match action {
        BingoAction::AddPhotoMain { id, photo } => {
            let mut next = state.clone();
            add_photo(next.main.entry(id.clone()).or_default(), photo);
            next
        }
        BingoAction::RemovePhotoMain { id, index } => {
            let mut next = state.clone();
            if let Some(cell) = next.main.get_mut(id) {
                remove_photo(cell, *index);
            }
            next
        }
        BingoAction::UploadMain { id, photo } => {
            let mut next = state.clone();
            upload_single(next.main.entry(id.clone()).or_default(), photo);
            next
        }
        BingoAction::AddPhotoFood { index, photo } => {
            let mut next = state.clone();
            if let Some(cell) = next.food.get_mut(*index) {
                add_photo(cell, photo);
            }
            cascade_food_bingo(next)
        }
        BingoAction::RemovePhotoFood { cell, index } => {
            let mut next = state.clone();
            if let Some(cell) = next.food.get_mut(*cell) {
                remove_photo(cell, *index);
            }
            cascade_food_bingo(next)
        }
        BingoAction::UploadFood { index, photo } => {
            let mut next = state.clone();
            if let Some(cell) = next.food.get_mut(*index) {
                upload_single(cell, photo);
            }
            cascade_food_bingo(next)
        }
        BingoAction::Reset { city_id } => cells::city(city_id)
            .map(BingoState::empty_for)
            .unwrap_or_default(),
        BingoAction::Load { state } => state.clone(),
    }
}

fn add_photo(cell: &mut CellState, photo: &str) {
    if cell.at_capacity() {
        return;
    }
    cell.photos.push(photo.to_string());
    cell.sync_from_photos();
}

fn remove_photo(cell: &mut CellState, index: usize) {
    if index >= cell.photos.len() {
        return;
    }
    cell.photos.remove(index);
    cell.sync_from_photos();
}

fn upload_single(cell: &mut CellState, photo: &str) {
    cell.done = true;
    cell.photo = Some(photo.to_string());
    // Do not clobber an existing multi-photo array.
    if cell.photos.is_empty() {
        cell.photos.push(photo.to_string());
    }
}

/// Once two food-grid lines are complete, every food-entrance cell on the
/// main grid is forced done. No photos are synthesized for them, and the
/// cascade never reverses: re-running it on a cascaded state is a no-op.
fn cascade_food_bingo(mut state: BingoState) -> BingoState {
    if is_food_bingo_complete(&state) {
        for id in FOOD_ENTRANCE_IDS {
            state.main.entry(id.to_string()).or_default().done = true;
        }
    }
    state
}

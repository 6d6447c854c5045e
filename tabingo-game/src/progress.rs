//! Read-only progress and line views derived from a snapshot.
//!
//! All functions are pure; the UI calls them on every render.

use std::collections::BTreeSet;

use crate::cells::{CityConfig, FOOD_LINES, Line};
use crate::state::BingoState;

/// Completion counter for a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

impl Progress {
    /// Rounded completion percentage. Zero-total grids report 0, not NaN.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn pct(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let scaled = self.done as f64 / self.total as f64 * 100.0;
        scaled.round() as u32
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.done >= self.total
    }
}

fn main_cell_done(state: &BingoState, id: &str) -> bool {
    state.main.get(id).is_some_and(|cell| cell.done)
}

/// Every winning line of the city whose three cells are all done, in
/// line-definition order.
#[must_use]
pub fn completed_main_lines<'a>(state: &BingoState, city: &'a CityConfig) -> Vec<&'a Line> {
    city.lines
        .iter()
        .filter(|line| line.iter().all(|id| main_cell_done(state, id)))
        .collect()
}

#[must_use]
pub fn completed_main_line_count(state: &BingoState, city: &CityConfig) -> usize {
    completed_main_lines(state, city).len()
}

/// Union of cell ids across completed lines, for highlighting.
#[must_use]
pub fn line_cells(state: &BingoState, city: &CityConfig) -> BTreeSet<&'static str> {
    completed_main_lines(state, city)
        .into_iter()
        .flatten()
        .copied()
        .collect()
}

/// Main-grid progress over the city's tracked ids (places plus food
/// entrances).
#[must_use]
pub fn main_progress(state: &BingoState, city: &CityConfig) -> Progress {
    let mut progress = Progress::default();
    for id in city.tracked_ids() {
        progress.total += 1;
        if main_cell_done(state, id) {
            progress.done += 1;
        }
    }
    progress
}

/// Food sub-grid progress over the snapshot's food array.
#[must_use]
pub fn food_progress(state: &BingoState) -> Progress {
    Progress {
        done: state.food.iter().filter(|cell| cell.done).count(),
        total: state.food.len(),
    }
}

/// Number of complete food-grid lines. The food line set is fixed and
/// city-independent, unlike the main grid's.
#[must_use]
pub fn completed_food_lines(state: &BingoState) -> usize {
    FOOD_LINES
        .iter()
        .filter(|line| {
            line.iter()
                .all(|&index| state.food.get(index).is_some_and(|cell| cell.done))
        })
        .count()
}

/// Food bingo is reached at two completed lines; this is what triggers the
/// cascade into the main grid's food-entrance cells.
#[must_use]
pub fn is_food_bingo_complete(state: &BingoState) -> bool {
    completed_food_lines(state) >= 2
}

#[must_use]
pub fn is_all_main_complete(state: &BingoState, city: &CityConfig) -> bool {
    main_progress(state, city).is_complete()
}

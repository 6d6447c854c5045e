//! Completion reports derived from remote upload logs.
//!
//! The deployed backend records a numbered "box" per successful photo
//! upload. These helpers map box numbers back onto a city's grid and
//! count satisfied lines, and name the celebration video object that a
//! worker renders once two lines are in.

use std::collections::BTreeSet;

use crate::cells::{CityConfig, Line};

/// Lines needed before the celebration video is produced.
pub const VIDEO_LINE_THRESHOLD: usize = 2;

/// Outcome of checking a visitor's upload log against a city grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BingoReport {
    /// Cell ids resolved from the logged box numbers, grid order ids only.
    pub completed_cells: BTreeSet<&'static str>,
    pub completed_lines: Vec<&'static Line>,
}

impl BingoReport {
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.completed_lines.len()
    }

    #[must_use]
    pub fn has_two_lines(&self) -> bool {
        self.line_count() >= VIDEO_LINE_THRESHOLD
    }
}

/// Build a report from 1-based box numbers found in upload logs.
///
/// Box numbers outside the grid are dropped silently; duplicates collapse.
#[must_use]
pub fn report_from_boxes<I>(city: &'static CityConfig, boxes: I) -> BingoReport
where
    I: IntoIterator<Item = u32>,
{
    let completed_cells: BTreeSet<&'static str> = boxes
        .into_iter()
        .filter_map(|box_number| city.cell_id_for_box(box_number))
        .collect();
    let completed_lines = city
        .lines
        .iter()
        .filter(|line| line.iter().all(|id| completed_cells.contains(id)))
        .collect();
    BingoReport {
        completed_cells,
        completed_lines,
    }
}

/// Deterministic object name for a visitor's celebration video.
#[must_use]
pub fn video_file_name(user_id: &str, city_id: &str) -> String {
    format!("{user_id}_bingo_{city_id}.mp4")
}

/// Public URL of the video object under a storage base URL.
#[must_use]
pub fn video_public_url(storage_base: &str, user_id: &str, city_id: &str) -> String {
    let base = storage_base.trim_end_matches('/');
    let file = video_file_name(user_id, city_id);
    format!("{base}/{file}")
}

//! Typed clients for the deployed backend endpoints.
//!
//! All payloads are camelCase JSON. Every fetcher degrades to an empty
//! value when the backend is down: the grid plays fine offline, remote
//! data only enriches it.

use std::collections::HashMap;

use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::dom;

/// Imagery and display names for one cell, managed by the trip organizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CellData {
    pub image_url: String,
    pub name: String,
    pub name_kr: String,
}

/// Per-city imagery: cell art plus the hidden picture and its tiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CellImages {
    pub main: HashMap<String, CellData>,
    pub hidden: HashMap<String, String>,
    pub hidden_full: String,
    pub food: HashMap<String, CellData>,
}

/// City id to its imagery set.
pub type AllCellImages = HashMap<String, CellImages>;

/// A curated sight-seeing place record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MainPlace {
    pub id: String,
    pub area: String,
    pub r#box: String,
    pub name: String,
    pub name_kr: String,
    pub place: String,
    pub image1: String,
    pub image2: String,
    pub image3: String,
    pub klook_link1: String,
    pub klook_link2: String,
}

/// A curated food recommendation record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FoodPlace {
    pub area: String,
    pub r#box: String,
    pub menu: String,
    pub menu_kr: String,
    pub name_en: String,
    pub name_kr: String,
    pub priority: i64,
    pub image_url: String,
    pub url: String,
}

/// Whether the celebration video has been rendered yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoStatus {
    pub ready: bool,
    pub video_url: Option<String>,
    pub file_name: Option<String>,
}

/// The backend's view of a visitor's bingo progress, reconstructed from
/// upload logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteBingoReport {
    pub user_id: String,
    pub city_id: String,
    pub completed_boxes: Vec<u32>,
    pub completed_cell_ids: Vec<String>,
    pub line_count: u32,
    pub has_two_lines: bool,
    pub completed_lines: Vec<Vec<String>>,
    pub message: String,
}

fn encode(value: &str) -> String {
    js_sys::encode_uri_component(value).into()
}

fn warn_and_default<T: Default>(endpoint: &str, err: &JsValue) -> T {
    log::warn!("{endpoint} fetch failed: {}", dom::js_error_message(err));
    T::default()
}

/// Fetch the organizer-managed cell imagery for all cities.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_cell_images() -> AllCellImages {
    dom::fetch_json("/api/cells")
        .await
        .unwrap_or_else(|err| warn_and_default("/api/cells", &err))
}

/// Fetch all curated places; callers filter by `area`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_main_places() -> Vec<MainPlace> {
    dom::fetch_json("/api/main-places")
        .await
        .unwrap_or_else(|err| warn_and_default("/api/main-places", &err))
}

/// Fetch all curated food recommendations; callers filter by `area`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_food_places() -> Vec<FoodPlace> {
    dom::fetch_json("/api/food-places")
        .await
        .unwrap_or_else(|err| warn_and_default("/api/food-places", &err))
}

/// Poll whether the visitor's celebration video is ready.
///
/// # Errors
/// Returns an error on network failure so callers can keep polling.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_video_status(user_id: &str, city_id: &str) -> Result<VideoStatus, JsValue> {
    let url = format!(
        "/api/video?userId={}&cityId={}",
        encode(user_id),
        encode(city_id)
    );
    dom::fetch_json(&url).await
}

/// Ask the backend how many lines its upload log credits the visitor with.
///
/// # Errors
/// Returns an error on network failure or an unexpected body.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_bingo_report(
    user_id: &str,
    city_id: &str,
) -> Result<RemoteBingoReport, JsValue> {
    let url = format!(
        "/api/check-bingo?userId={}&cityId={}",
        encode(user_id),
        encode(city_id)
    );
    dom::fetch_json(&url).await
}

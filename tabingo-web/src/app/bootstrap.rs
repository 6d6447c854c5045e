//! Startup effects: identity, backend session, remote data.
//!
//! Everything here is fire-and-forget; the grid is fully playable before
//! (or without) any of these effects finishing.

#[cfg(target_arch = "wasm32")]
use tabingo_game::completed_main_line_count;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(target_arch = "wasm32")]
use crate::{api, identity, logger};

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    use_identity(app_state);
    use_remote_data(app_state);
    use_visitor_report(app_state);
    use_two_lines_event(app_state);
}

/// Resolve the visitor id once and open the logging session.
#[cfg(target_arch = "wasm32")]
#[hook]
fn use_identity(app_state: &AppState) {
    let user_id = app_state.user_id.clone();
    let session_id = app_state.session_id.clone();
    use_effect_with((), move |()| {
        user_id.set(identity::resolve_current().map(AttrValue::from));
        wasm_bindgen_futures::spawn_local(async move {
            session_id.set(identity::ensure_session().await.map(AttrValue::from));
        });
        || {}
    });
}

/// Fetch organizer-managed imagery and place data.
#[cfg(target_arch = "wasm32")]
#[hook]
fn use_remote_data(app_state: &AppState) {
    let cell_images = app_state.cell_images.clone();
    let main_places = app_state.main_places.clone();
    let food_places = app_state.food_places.clone();
    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            cell_images.set(api::fetch_cell_images().await);
            main_places.set(api::fetch_main_places().await);
            food_places.set(api::fetch_food_places().await);
        });
        || {}
    });
}

/// Once the visitor is known, ask the backend for its view of their
/// progress and whether the celebration video is already rendered.
#[cfg(target_arch = "wasm32")]
#[hook]
fn use_visitor_report(app_state: &AppState) {
    let report = app_state.report.clone();
    let video = app_state.video.clone();
    let city_id = app_state.engine.city().id;
    use_effect_with(app_state.user_id.clone(), move |user_id| {
        if let Some(user_id) = user_id.as_ref().map(ToString::to_string) {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_bingo_report(&user_id, city_id).await {
                    Ok(remote) => report.set(Some(remote)),
                    Err(err) => log::warn!(
                        "bingo report unavailable: {}",
                        crate::dom::js_error_message(&err)
                    ),
                }
                match api::fetch_video_status(&user_id, city_id).await {
                    Ok(status) => video.set(Some(status)),
                    Err(err) => log::warn!(
                        "video status unavailable: {}",
                        crate::dom::js_error_message(&err)
                    ),
                }
            });
        }
        || {}
    });
}

/// Log the moment the visitor crosses two completed lines this session.
#[cfg(target_arch = "wasm32")]
#[hook]
fn use_two_lines_event(app_state: &AppState) {
    let engine = &app_state.engine;
    let two_lines = completed_main_line_count(engine.state(), engine.city())
        >= tabingo_game::report::VIDEO_LINE_THRESHOLD;
    let already_logged = use_mut_ref(|| two_lines);
    let user_id = app_state.user_id_str();
    let session_id = app_state.session_id.as_ref().map(ToString::to_string);
    let city_id = engine.city().id;
    use_effect_with(two_lines, move |&two_lines| {
        let mut logged = already_logged.borrow_mut();
        if two_lines && !*logged {
            *logged = true;
            logger::log_event(
                user_id.as_deref(),
                session_id.as_deref(),
                logger::EVENT_TWO_LINES,
                serde_json::json!({ "city": city_id }),
            );
        }
        || {}
    });
}

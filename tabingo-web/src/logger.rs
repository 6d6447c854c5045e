//! Fire-and-forget gameplay event logging.
//!
//! Events are posted to the backend so the trip organizer can see how far
//! each visitor got. Logging must never get in the way of play: failures
//! are warned about once and dropped, nothing is retried.

use chrono::{FixedOffset, Utc};
use once_cell::sync::Lazy;
use wasm_bindgen_futures::spawn_local;

use crate::dom;

/// A visitor finished uploading a photo into a cell.
pub const EVENT_PHOTO_UPLOAD: &str = "photo_upload_success";
/// A visitor reached two completed lines.
pub const EVENT_TWO_LINES: &str = "bingo_2_lines_complete";
/// A visitor agreed to the celebration video being generated.
pub const EVENT_VIDEO_CONSENT: &str = "video_consent_agreed";

/// Event timestamps are logged on the trip's local clock (UTC+9).
static TOKYO: Lazy<FixedOffset> = Lazy::new(|| {
    FixedOffset::east_opt(9 * 3600).expect("UTC+9 is a valid offset")
});

fn tokyo_timestamp() -> String {
    Utc::now()
        .with_timezone(&*TOKYO)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Post one gameplay event in the background.
pub fn log_event(
    user_id: Option<&str>,
    session_id: Option<&str>,
    action: &str,
    metadata: serde_json::Value,
) {
    let payload = serde_json::json!({
        "userId": user_id,
        "sessionId": session_id,
        "action": action,
        "metadata": metadata,
        "timestamp": tokyo_timestamp(),
    });
    let action = action.to_string();
    spawn_local(async move {
        if let Err(err) = dom::post_json("/api/log", &payload).await {
            log::warn!(
                "event log for {action} failed: {}",
                dom::js_error_message(&err)
            );
        }
    });
}

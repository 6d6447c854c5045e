//! Visitor identity resolution.
//!
//! A visitor is identified by a `?id=` query parameter handed out with the
//! invite link. The id is mirrored into localStorage so a later visit
//! without the parameter still finds the same save, and the URL is patched
//! back so a re-shared link keeps working.

use serde::Deserialize;

use crate::dom;

/// localStorage key holding the adopted visitor id.
pub const USER_ID_KEY: &str = "customUserId";

/// Outcome of resolving the visitor id from URL and storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The id the app should run under, if any.
    pub user_id: Option<String>,
    /// The id must be written back to localStorage.
    pub persist: bool,
    /// The URL must be rewritten to carry `?id=`.
    pub rewrite_url: bool,
}

/// Decide which visitor id wins and which side effects are due.
///
/// The URL parameter always wins and is persisted when it differs from the
/// stored value. Without a parameter the stored id is adopted and reflected
/// back into the URL. With neither, the visitor stays anonymous.
#[must_use]
pub fn resolve(url_id: Option<&str>, stored_id: Option<&str>) -> Resolution {
    match (url_id.filter(|id| !id.is_empty()), stored_id) {
        (Some(url_id), stored) => Resolution {
            user_id: Some(url_id.to_string()),
            persist: stored != Some(url_id),
            rewrite_url: false,
        },
        (None, Some(stored)) if !stored.is_empty() => Resolution {
            user_id: Some(stored.to_string()),
            persist: false,
            rewrite_url: true,
        },
        (None, _) => Resolution {
            user_id: None,
            persist: false,
            rewrite_url: false,
        },
    }
}

/// Resolve the current visitor id and apply the required side effects.
///
/// Storage or history failures are logged and skipped; the resolved id is
/// still returned so the app can run on it for the session.
#[must_use]
pub fn resolve_current() -> Option<String> {
    let url_id = dom::query_param("id");
    let stored_id = dom::local_storage()
        .ok()
        .and_then(|storage| storage.get_item(USER_ID_KEY).ok().flatten());
    let resolution = resolve(url_id.as_deref(), stored_id.as_deref());

    if let Some(id) = &resolution.user_id {
        if resolution.persist
            && let Err(err) = dom::local_storage().and_then(|s| s.set_item(USER_ID_KEY, id))
        {
            log::warn!("could not persist visitor id: {}", dom::js_error_message(&err));
        }
        if resolution.rewrite_url
            && let Err(err) = dom::replace_query_param("id", Some(id))
        {
            log::warn!("could not rewrite ?id=: {}", dom::js_error_message(&err));
        }
    }
    resolution.user_id
}

/// Adopt a new visitor id: persist it and rewrite the URL.
pub fn update(id: &str) {
    if let Err(err) = dom::local_storage().and_then(|s| s.set_item(USER_ID_KEY, id)) {
        log::warn!("could not persist visitor id: {}", dom::js_error_message(&err));
    }
    if let Err(err) = dom::replace_query_param("id", Some(id)) {
        log::warn!("could not rewrite ?id=: {}", dom::js_error_message(&err));
    }
}

/// Forget the visitor id in both storage and the URL.
pub fn clear() {
    if let Err(err) = dom::local_storage().and_then(|s| s.remove_item(USER_ID_KEY)) {
        log::warn!("could not clear visitor id: {}", dom::js_error_message(&err));
    }
    if let Err(err) = dom::replace_query_param("id", None) {
        log::warn!("could not drop ?id=: {}", dom::js_error_message(&err));
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    session_id: String,
}

/// Open an anonymous backend session for log correlation.
///
/// Returns `None` when the backend is unreachable; gameplay does not
/// depend on the session.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn ensure_session() -> Option<String> {
    match dom::post_json_response::<SessionResponse>("/api/session", &serde_json::json!({})).await {
        Ok(session) => Some(session.session_id),
        Err(err) => {
            log::warn!("session bootstrap failed: {}", dom::js_error_message(&err));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;

    #[test]
    fn url_id_wins_and_is_persisted_when_new() {
        let r = resolve(Some("mina"), None);
        assert_eq!(r.user_id.as_deref(), Some("mina"));
        assert!(r.persist);
        assert!(!r.rewrite_url);
    }

    #[test]
    fn matching_stored_id_skips_the_write() {
        let r = resolve(Some("mina"), Some("mina"));
        assert!(!r.persist);
    }

    #[test]
    fn stored_id_is_adopted_and_reflected_into_the_url() {
        let r = resolve(None, Some("mina"));
        assert_eq!(r.user_id.as_deref(), Some("mina"));
        assert!(!r.persist);
        assert!(r.rewrite_url);
    }

    #[test]
    fn no_id_anywhere_means_anonymous() {
        let r = resolve(None, None);
        assert_eq!(r.user_id, None);
        assert!(!r.persist && !r.rewrite_url);
    }

    #[test]
    fn empty_strings_are_treated_as_absent() {
        assert_eq!(resolve(Some(""), None).user_id, None);
        assert_eq!(resolve(None, Some("")).user_id, None);
    }
}

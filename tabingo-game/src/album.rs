//! Free photo album: up to three photos per city uploaded outside the
//! grid flow. Persisted under its own key, independent of the bingo
//! snapshot's lifecycle.

use serde::{Deserialize, Serialize};

use crate::state::MAX_PHOTOS;

/// Ordered photo URLs, capped at [`MAX_PHOTOS`].
///
/// Serializes as a bare JSON array so saves written by the original
/// album code load unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FreePhotoAlbum {
    photos: Vec<String>,
}

impl FreePhotoAlbum {
    #[must_use]
    pub fn photos(&self) -> &[String] {
        &self.photos
    }

    #[must_use]
    pub fn can_upload(&self) -> bool {
        self.photos.len() < MAX_PHOTOS
    }

    #[must_use]
    pub fn remaining_slots(&self) -> usize {
        MAX_PHOTOS.saturating_sub(self.photos.len())
    }

    /// Append one photo; a full album ignores the request.
    pub fn add(&mut self, photo: impl Into<String>) {
        if self.can_upload() {
            self.photos.push(photo.into());
        }
    }

    /// Append photos until the album is full; the rest are dropped.
    pub fn add_many<I>(&mut self, photos: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let remaining = self.remaining_slots();
        self.photos
            .extend(photos.into_iter().take(remaining).map(Into::into));
    }

    /// Remove the photo at `index`; out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) {
        if index < self.photos.len() {
            self.photos.remove(index);
        }
    }

    /// Parse a persisted album.
    ///
    /// # Errors
    ///
    /// Returns an error when the JSON is not an array of strings; callers
    /// fall back to an empty album.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize for persistence.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn album_caps_at_three_photos() {
        let mut album = FreePhotoAlbum::default();
        for i in 0..5 {
            album.add(format!("photo:{i}"));
        }
        assert_eq!(album.photos(), ["photo:0", "photo:1", "photo:2"]);
        assert!(!album.can_upload());
        assert_eq!(album.remaining_slots(), 0);
    }

    #[test]
    fn add_many_fills_only_remaining_slots() {
        let mut album = FreePhotoAlbum::default();
        album.add("first");
        album.add_many(["a", "b", "c", "d"]);
        assert_eq!(album.photos(), ["first", "a", "b"]);
    }

    #[test]
    fn remove_ignores_out_of_range() {
        let mut album = FreePhotoAlbum::default();
        album.add("keep");
        album.remove(3);
        assert_eq!(album.photos(), ["keep"]);
        album.remove(0);
        assert!(album.photos().is_empty());
    }

    #[test]
    fn serializes_as_a_bare_array() {
        let mut album = FreePhotoAlbum::default();
        album.add("one");
        assert_eq!(album.to_json().unwrap(), r#"["one"]"#);

        let parsed = FreePhotoAlbum::from_json(r#"["x","y"]"#).unwrap();
        assert_eq!(parsed.photos(), ["x", "y"]);
    }
}

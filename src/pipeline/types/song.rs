use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Song {
    pub title: &'static str,
    pub artist: &'static str,
    /// Why this song fits the photo.
    pub reason: &'static str,
}

impl Song {
    pub const fn new(title: &'static str, artist: &'static str, reason: &'static str) -> Self {
        Self {
            title,
            artist,
            reason,
        }
    }
}

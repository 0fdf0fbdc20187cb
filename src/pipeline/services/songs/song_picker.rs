use rand::Rng;

use super::song_catalog::{default_songs, songs_for};
use crate::pipeline::types::{MoodTag, Song};

/// Source of uniformly distributed indices.
pub trait RandomSource: Send {
    /// Returns an index in `[0, len)`. `len` is never zero.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Backed by the thread-local generator; unseeded and not reproducible.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "cannot pick from an empty list");
        rand::rng().random_range(0..len)
    }
}

pub struct SongPicker {
    random: Box<dyn RandomSource>,
}

impl SongPicker {
    pub fn new(random: Box<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Picks a song for `mood`, falling back to the balanced list for
    /// unknown moods.
    pub fn pick(&mut self, mood: &str) -> Song {
        match mood.parse::<MoodTag>() {
            Ok(tag) => self.pick_for(tag),
            Err(e) => {
                tracing::debug!("{}, using default list", e);
                self.pick_from(default_songs())
            }
        }
    }

    pub fn pick_for(&mut self, mood: MoodTag) -> Song {
        let songs = songs_for(mood)
            .filter(|songs| !songs.is_empty())
            .unwrap_or_else(default_songs);
        self.pick_from(songs)
    }

    fn pick_from(&mut self, songs: &'static [Song]) -> Song {
        let index = self.random.next_index(songs.len());
        songs[index % songs.len()]
    }
}

impl Default for SongPicker {
    fn default() -> Self {
        Self::new(Box::new(ThreadRandom))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::pipeline::services::songs::song_catalog::SONG_CATALOG;

    /// Always returns the same index.
    pub(crate) struct FixedIndex(pub usize);

    impl RandomSource for FixedIndex {
        fn next_index(&mut self, _len: usize) -> usize {
            self.0
        }
    }

    fn list(mood: MoodTag) -> &'static [Song] {
        SONG_CATALOG
            .iter()
            .find(|(tag, _)| *tag == mood)
            .map(|(_, songs)| songs.as_slice())
            .unwrap()
    }

    #[test]
    fn upbeat_pick_is_an_upbeat_song() {
        let mut picker = SongPicker::default();
        for _ in 0..50 {
            let song = picker.pick("upbeat");
            assert!(list(MoodTag::Upbeat).contains(&song));
        }
    }

    #[test]
    fn unknown_mood_falls_back_to_balanced() {
        let mut picker = SongPicker::default();
        for _ in 0..50 {
            let song = picker.pick("unknown-mood");
            assert!(list(MoodTag::Balanced).contains(&song));
        }
    }

    #[test]
    fn injected_source_selects_the_index() {
        let mut picker = SongPicker::new(Box::new(FixedIndex(2)));
        assert_eq!(picker.pick_for(MoodTag::Relaxed).title, "Lost in the Light");
        assert_eq!(picker.pick_for(MoodTag::Chill).title, "Black");
    }

    #[test]
    fn out_of_range_index_wraps() {
        let mut picker = SongPicker::new(Box::new(FixedIndex(4)));
        assert_eq!(picker.pick_for(MoodTag::Romantic).title, "Adorn");
    }

    #[test]
    fn known_mood_string_uses_its_own_list() {
        let mut picker = SongPicker::new(Box::new(FixedIndex(1)));
        assert_eq!(picker.pick("romantic").title, "Adorn");
        assert_eq!(picker.pick("Romantic").title, "Sunflower");
    }

    #[test]
    #[should_panic(expected = "cannot pick from an empty list")]
    #[cfg(debug_assertions)]
    fn thread_random_rejects_empty_range() {
        ThreadRandom.next_index(0);
    }

    #[test]
    fn thread_random_stays_in_range() {
        let mut random = ThreadRandom;
        for _ in 0..100 {
            assert!(random.next_index(3) < 3);
        }
    }
}

use crate::pipeline::types::{MoodTag, Song};

/// Mood used when a lookup misses.
pub const DEFAULT_MOOD: MoodTag = MoodTag::Balanced;

pub static SONG_CATALOG: [(MoodTag, [Song; 3]); 5] = [
    (
        MoodTag::Upbeat,
        [
            Song::new("Good 4 U", "Olivia Rodrigo", "High energy matches your vibrant image!"),
            Song::new("Levitating", "Dua Lipa", "Bright and energetic like your photo!"),
            Song::new("Blinding Lights", "The Weeknd", "Electric energy for your bright vibe!"),
        ],
    ),
    (
        MoodTag::Chill,
        [
            Song::new("Skinny Love", "Bon Iver", "Moody and introspective like your image"),
            Song::new("Mad World", "Gary Jules", "Dark atmosphere matches your photo"),
            Song::new("Black", "Pearl Jam", "Deep and contemplative vibes"),
        ],
    ),
    (
        MoodTag::Romantic,
        [
            Song::new("Golden", "Harry Styles", "Warm tones deserve a warm song"),
            Song::new("Adorn", "Miguel", "Passionate vibes for passionate colors"),
            Song::new("Best Part", "Daniel Caesar ft. H.E.R.", "Smooth warmth for your image"),
        ],
    ),
    (
        MoodTag::Relaxed,
        [
            Song::new("Ocean Eyes", "Billie Eilish", "Cool and calming like your blue tones"),
            Song::new("Holocene", "Bon Iver", "Peaceful energy for peaceful colors"),
            Song::new("Lost in the Light", "Bahamas", "Serene vibes for your calm image"),
        ],
    ),
    (
        MoodTag::Balanced,
        [
            Song::new("Circles", "Post Malone", "Well-balanced song for balanced colors"),
            Song::new("Sunflower", "Post Malone & Swae Lee", "Harmonious vibes"),
            Song::new("Watermelon Sugar", "Harry Styles", "Perfect balance of energy and chill"),
        ],
    ),
];

pub fn songs_for(mood: MoodTag) -> Option<&'static [Song]> {
    SONG_CATALOG
        .iter()
        .find(|(tag, _)| *tag == mood)
        .map(|(_, songs)| songs.as_slice())
}

pub fn default_songs() -> &'static [Song] {
    songs_for(DEFAULT_MOOD).unwrap_or(SONG_CATALOG[SONG_CATALOG.len() - 1].1.as_slice())
}

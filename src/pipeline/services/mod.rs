pub mod image;
pub mod songs;
pub mod vibe_classifier;

pub use self::image::sample_colors;
pub use songs::SongPicker;
pub use vibe_classifier::classify_vibe;

pub mod song_catalog;
pub mod song_picker;

pub use song_picker::{RandomSource, SongPicker, ThreadRandom};

pub mod pipeline;
pub mod services;
pub mod types;

pub use pipeline::{PipelineConfig, VibePipeline};
pub use services::{SongPicker, classify_vibe, sample_colors};
pub use types::{AnalysisResult, ColorStats, MoodTag, Song, VibeCategory};

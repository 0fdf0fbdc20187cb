mod analysis_result;
mod color_stats;
mod song;
mod vibe_category;

pub use analysis_result::AnalysisResult;
pub use color_stats::ColorStats;
pub use song::Song;
pub use vibe_category::{MoodTag, VibeCategory};

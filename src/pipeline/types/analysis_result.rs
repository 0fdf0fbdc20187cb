use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::pipeline::types::{ColorStats, Song, VibeCategory};

/// The outcome of one analysis: the vibe, the song picked for it, and the
/// statistics the vibe was derived from.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub id: Uuid,
    pub category: VibeCategory,
    pub song: Song,
    pub stats: ColorStats,
}

impl AnalysisResult {
    pub fn new(category: VibeCategory, song: Song, stats: ColorStats) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            song,
            stats,
        }
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.category.emoji())?;
        writeln!(f, "Vibe Detected: {}", self.category.display_name())?;
        writeln!(f, "{}", self.category.description())?;
        writeln!(f)?;
        writeln!(f, "🎵 {}", self.song.title)?;
        writeln!(f, "by {}", self.song.artist)?;
        write!(f, "{}", self.song.reason)
    }
}

pub mod common;
pub mod config;
pub mod error;
pub mod pipeline;

pub use error::{DecodeError, UnknownMoodError, VibeError};

pub use common::Photo;
pub use pipeline::{AnalysisResult, VibeCategory, VibePipeline};

pub mod color_sampler;
pub mod decode_service;

pub use color_sampler::{ColorSample, sample_colors, sample_pixels};
pub use decode_service::{DecodeService, timed_decoder};

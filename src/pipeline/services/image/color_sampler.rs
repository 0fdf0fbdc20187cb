use crate::error::VibeError;
use crate::pipeline::types::ColorStats;

const BYTES_PER_PIXEL: usize = 4;
/// Only every 10th pixel is visited.
const PIXEL_STRIDE: usize = 10;

/// Color statistics together with the number of pixels they were averaged over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample {
    pub stats: ColorStats,
    pub sample_count: usize,
}

fn brightness(r: u8, g: u8, b: u8) -> f64 {
    (r as f64 + g as f64 + b as f64) / 3.0
}

fn saturation(r: u8, g: u8, b: u8) -> f64 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    (max - min) as f64
}

/// Averages red, green, blue, brightness and saturation over every 10th
/// pixel of an RGBA buffer.
///
/// The averages are taken over the pixels actually visited, so a buffer
/// whose length is not a multiple of the 40 byte stride still yields values
/// in [0, 255].
pub fn sample_colors(buffer: &[u8]) -> Result<ColorStats, VibeError> {
    sample_pixels(buffer).map(|sample| sample.stats)
}

/// `sample_colors`, also reporting how many pixels the loop visited.
pub fn sample_pixels(buffer: &[u8]) -> Result<ColorSample, VibeError> {
    if buffer.is_empty() {
        return Err(VibeError::InvalidInput(
            "pixel buffer is empty".to_string(),
        ));
    }
    if buffer.len() % BYTES_PER_PIXEL != 0 {
        return Err(VibeError::InvalidInput(format!(
            "pixel buffer length {} is not a multiple of {}",
            buffer.len(),
            BYTES_PER_PIXEL
        )));
    }

    let mut total = ColorStats::default();
    let mut sample_count = 0usize;

    for px in buffer.chunks_exact(BYTES_PER_PIXEL).step_by(PIXEL_STRIDE) {
        let (r, g, b) = (px[0], px[1], px[2]);
        total.avg_red += r as f64;
        total.avg_green += g as f64;
        total.avg_blue += b as f64;
        total.avg_brightness += brightness(r, g, b);
        total.avg_saturation += saturation(r, g, b);
        sample_count += 1;
    }

    tracing::trace!(
        "Sampled {} of {} pixels",
        sample_count,
        buffer.len() / BYTES_PER_PIXEL
    );

    let n = sample_count as f64;
    Ok(ColorSample {
        stats: ColorStats {
            avg_red: total.avg_red / n,
            avg_green: total.avg_green / n,
            avg_blue: total.avg_blue / n,
            avg_brightness: total.avg_brightness / n,
            avg_saturation: total.avg_saturation / n,
        },
        sample_count,
    })
}

use serde::Serialize;

/// Average channel values over the sampled pixels, each in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ColorStats {
    pub avg_red: f64,
    pub avg_green: f64,
    pub avg_blue: f64,
    pub avg_brightness: f64,
    pub avg_saturation: f64,
}

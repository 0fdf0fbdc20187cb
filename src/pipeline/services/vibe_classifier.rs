use crate::pipeline::types::{ColorStats, VibeCategory};

const BRIGHT_THRESHOLD: f64 = 180.0;
const SATURATED_THRESHOLD: f64 = 100.0;
const DARK_THRESHOLD: f64 = 100.0;

/// A single classification rule: if `matches` holds, the photo is `category`.
pub struct VibeRule {
    pub name: &'static str,
    pub matches: fn(&ColorStats) -> bool,
    pub category: VibeCategory,
}

/// Evaluated top to bottom, first match wins.
pub static VIBE_RULES: [VibeRule; 4] = [
    VibeRule {
        name: "bright and saturated",
        matches: |s| s.avg_brightness > BRIGHT_THRESHOLD && s.avg_saturation > SATURATED_THRESHOLD,
        category: VibeCategory::EnergeticBright,
    },
    VibeRule {
        name: "dark",
        matches: |s| s.avg_brightness < DARK_THRESHOLD,
        category: VibeCategory::MoodyDark,
    },
    VibeRule {
        name: "red dominant",
        matches: |s| s.avg_red > s.avg_green && s.avg_red > s.avg_blue,
        category: VibeCategory::WarmPassionate,
    },
    VibeRule {
        name: "blue dominant",
        matches: |s| s.avg_blue > s.avg_red && s.avg_blue > s.avg_green,
        category: VibeCategory::CoolCalm,
    },
];

pub const FALLBACK_VIBE: VibeCategory = VibeCategory::BalancedHarmonious;

pub fn classify_vibe(stats: &ColorStats) -> VibeCategory {
    match VIBE_RULES.iter().find(|rule| (rule.matches)(stats)) {
        Some(rule) => {
            tracing::trace!("Vibe rule matched: {}", rule.name);
            rule.category
        }
        None => FALLBACK_VIBE,
    }
}

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::UnknownMoodError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodTag {
    Upbeat,
    Chill,
    Romantic,
    Relaxed,
    Balanced,
}

impl MoodTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodTag::Upbeat => "upbeat",
            MoodTag::Chill => "chill",
            MoodTag::Romantic => "romantic",
            MoodTag::Relaxed => "relaxed",
            MoodTag::Balanced => "balanced",
        }
    }
}

impl fmt::Display for MoodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodTag {
    type Err = UnknownMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upbeat" => Ok(MoodTag::Upbeat),
            "chill" => Ok(MoodTag::Chill),
            "romantic" => Ok(MoodTag::Romantic),
            "relaxed" => Ok(MoodTag::Relaxed),
            "balanced" => Ok(MoodTag::Balanced),
            other => Err(UnknownMoodError(other.to_string())),
        }
    }
}

/// The fixed set of vibes a photo can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VibeCategory {
    EnergeticBright,
    MoodyDark,
    WarmPassionate,
    CoolCalm,
    BalancedHarmonious,
}

impl VibeCategory {
    pub const ALL: [VibeCategory; 5] = [
        VibeCategory::EnergeticBright,
        VibeCategory::MoodyDark,
        VibeCategory::WarmPassionate,
        VibeCategory::CoolCalm,
        VibeCategory::BalancedHarmonious,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            VibeCategory::EnergeticBright => "Energetic & Bright",
            VibeCategory::MoodyDark => "Moody & Dark",
            VibeCategory::WarmPassionate => "Warm & Passionate",
            VibeCategory::CoolCalm => "Cool & Calm",
            VibeCategory::BalancedHarmonious => "Balanced & Harmonious",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VibeCategory::EnergeticBright => "High energy, vibrant colors detected",
            VibeCategory::MoodyDark => "Dark, contemplative atmosphere",
            VibeCategory::WarmPassionate => "Warm tones, passionate vibes",
            VibeCategory::CoolCalm => "Cool blue tones, peaceful energy",
            VibeCategory::BalancedHarmonious => "Well-balanced colors and tones",
        }
    }

    pub fn mood(&self) -> MoodTag {
        match self {
            VibeCategory::EnergeticBright => MoodTag::Upbeat,
            VibeCategory::MoodyDark => MoodTag::Chill,
            VibeCategory::WarmPassionate => MoodTag::Romantic,
            VibeCategory::CoolCalm => MoodTag::Relaxed,
            VibeCategory::BalancedHarmonious => MoodTag::Balanced,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            VibeCategory::EnergeticBright => "⚡",
            VibeCategory::MoodyDark => "🌙",
            VibeCategory::WarmPassionate => "🔥",
            VibeCategory::CoolCalm => "🌊",
            VibeCategory::BalancedHarmonious => "⚖️",
        }
    }
}

// Serialized as the card fields rather than the variant name.
impl Serialize for VibeCategory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("VibeCategory", 4)?;
        state.serialize_field("name", self.display_name())?;
        state.serialize_field("description", self.description())?;
        state.serialize_field("mood", &self.mood())?;
        state.serialize_field("emoji", self.emoji())?;
        state.end()
    }
}

//! Colour themes and animation speed settings.

use serde::{Deserialize, Serialize};

use crate::Rgb;

/// Accent colour used for headings, pills and key hints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Blue,
    Purple,
    Green,
    Cyan,
    Amber,
}

impl ColorTheme {
    /// All themes, in cycling order.
    pub const ALL: [ColorTheme; 5] = [
        ColorTheme::Blue,
        ColorTheme::Purple,
        ColorTheme::Green,
        ColorTheme::Cyan,
        ColorTheme::Amber,
    ];

    /// The accent colour of this theme.
    pub fn color(self) -> Rgb {
        match self {
            ColorTheme::Blue => Rgb(59, 130, 246),
            ColorTheme::Purple => Rgb(168, 85, 247),
            ColorTheme::Green => Rgb(34, 197, 94),
            ColorTheme::Cyan => Rgb(34, 211, 238),
            ColorTheme::Amber => Rgb(245, 158, 11),
        }
    }

    /// Cycle to the next theme.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Human-readable name for the status line.
    pub fn display_name(self) -> &'static str {
        match self {
            ColorTheme::Blue => "Blue",
            ColorTheme::Purple => "Purple",
            ColorTheme::Green => "Green",
            ColorTheme::Cyan => "Cyan",
            ColorTheme::Amber => "Amber",
        }
    }
}

/// Overall animation speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Cycle to the next speed.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Multiplier applied to particle velocities.
    pub fn velocity_scale(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "Slow",
            AnimationSpeed::Medium => "Medium",
            AnimationSpeed::Fast => "Fast",
        }
    }
}

// src/generators/strength.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::CharacterClasses;

/// Score a password on a 0-100 scale.
///
/// Total over all inputs, including the all-false selection. The score is
/// `min(length, 50)` points for length plus 15 points per requested class,
/// minus 20 (floored at 0) when the password contains fewer classes than
/// were requested, clamped to 100. An empty password always scores 0.
///
/// `requested` is the selection the password was generated (or intended)
/// with, not what it happens to contain; the penalty catches passwords that
/// claim more variety than they deliver.
pub fn calculate_strength(password: &str, requested: &CharacterClasses) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let length = password.chars().count();
    let mut score = length.min(50) as i32;

    let requested_types = requested.count();
    score += requested_types as i32 * 15;

    let actual_types = CharacterClasses::present_in(password).count();
    if actual_types < requested_types {
        score = (score - 20).max(0);
    }

    score.clamp(0, 100) as u8
}

/// Presentation band for a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthBand {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthBand {
    /// Band thresholds: [0,30) weak, [30,60) moderate, [60,80) strong,
    /// [80,100] very strong.
    pub fn from_score(score: u8) -> StrengthBand {
        match score {
            0..=29 => StrengthBand::Weak,
            30..=59 => StrengthBand::Moderate,
            60..=79 => StrengthBand::Strong,
            _ => StrengthBand::VeryStrong,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StrengthBand::Weak => "Weak",
            StrengthBand::Moderate => "Moderate",
            StrengthBand::Strong => "Strong",
            StrengthBand::VeryStrong => "Very Strong",
        }
    }

    /// Indicator color shown by the UI.
    pub fn color(&self) -> &'static str {
        match self {
            StrengthBand::Weak => "#f44336",
            StrengthBand::Moderate => "#ff9800",
            StrengthBand::Strong => "#2196F3",
            StrengthBand::VeryStrong => "#4CAF50",
        }
    }
}

pub fn strength_description(score: u8) -> &'static str {
    StrengthBand::from_score(score).description()
}

pub fn strength_color(score: u8) -> &'static str {
    StrengthBand::from_score(score).color()
}

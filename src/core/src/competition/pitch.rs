use crate::competition::MatchFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PitchType {
    #[default]
    Flat,
    Green,
    Dusty,
    Bouncy,
    Slow,
}

/// Scoring and wicket multipliers for one pitch in one format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchModifiers {
    pub run_rate: f64,
    pub wicket_chance: f64,
    /// Applied to the expected scoring rate of the side batting with a target.
    pub chase_penalty: f64,
    pub pace_bonus: f64,
    pub spin_bonus: f64,
    /// Added to the wicket probability once per completed innings (first-class only).
    pub deterioration: f64,
    /// Chance that a ball takes a wicket regardless of the match-up.
    pub unpredictability: f64,
}

impl PitchModifiers {
    pub const NEUTRAL: PitchModifiers = PitchModifiers {
        run_rate: 1.0,
        wicket_chance: 1.0,
        chase_penalty: 1.0,
        pace_bonus: 0.0,
        spin_bonus: 0.0,
        deterioration: 0.0,
        unpredictability: 0.0,
    };

    pub fn for_pitch(pitch: PitchType, format: MatchFormat) -> Self {
        let surface = match pitch {
            PitchType::Flat => PitchModifiers {
                run_rate: 1.10,
                wicket_chance: 0.85,
                chase_penalty: 0.98,
                pace_bonus: 0.0,
                spin_bonus: 0.0,
                deterioration: 0.001,
                unpredictability: 0.0,
            },
            PitchType::Green => PitchModifiers {
                run_rate: 0.92,
                wicket_chance: 1.15,
                chase_penalty: 0.97,
                pace_bonus: 0.008,
                spin_bonus: 0.0,
                deterioration: 0.001,
                unpredictability: 0.0005,
            },
            PitchType::Dusty => PitchModifiers {
                run_rate: 0.95,
                wicket_chance: 1.10,
                chase_penalty: 0.93,
                pace_bonus: 0.0,
                spin_bonus: 0.010,
                deterioration: 0.004,
                unpredictability: 0.0008,
            },
            PitchType::Bouncy => PitchModifiers {
                run_rate: 1.02,
                wicket_chance: 1.08,
                chase_penalty: 0.96,
                pace_bonus: 0.006,
                spin_bonus: 0.0,
                deterioration: 0.002,
                unpredictability: 0.0006,
            },
            PitchType::Slow => PitchModifiers {
                run_rate: 0.88,
                wicket_chance: 0.95,
                chase_penalty: 0.95,
                pace_bonus: 0.0,
                spin_bonus: 0.004,
                deterioration: 0.003,
                unpredictability: 0.0003,
            },
        };

        surface.with_influence(format.pitch_influence())
    }

    fn with_influence(self, influence: f64) -> Self {
        PitchModifiers {
            run_rate: 1.0 + (self.run_rate - 1.0) * influence,
            wicket_chance: 1.0 + (self.wicket_chance - 1.0) * influence,
            chase_penalty: 1.0 + (self.chase_penalty - 1.0) * influence,
            pace_bonus: self.pace_bonus * influence,
            spin_bonus: self.spin_bonus * influence,
            deterioration: self.deterioration,
            unpredictability: self.unpredictability * influence,
        }
    }
}

impl Default for PitchModifiers {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

pub const BALLS_PER_OVER: u32 = 6;
pub const DRAW_POINTS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MatchFormat {
    T20,
    OneDay,
    FirstClass,
}

impl MatchFormat {
    pub const ALL: [MatchFormat; 3] = [MatchFormat::T20, MatchFormat::OneDay, MatchFormat::FirstClass];

    /// Overs available to one innings. First-class innings are capped so a
    /// four-innings match fits its allotted days.
    pub fn max_overs(&self) -> u32 {
        match self {
            MatchFormat::T20 => 20,
            MatchFormat::OneDay => 50,
            MatchFormat::FirstClass => 100,
        }
    }

    pub fn max_balls(&self) -> u32 {
        self.max_overs() * BALLS_PER_OVER
    }

    pub fn bowler_over_cap(&self) -> Option<u32> {
        match self {
            MatchFormat::T20 => Some(4),
            MatchFormat::OneDay => Some(10),
            MatchFormat::FirstClass => None,
        }
    }

    pub fn win_points(&self) -> u32 {
        match self {
            MatchFormat::T20 | MatchFormat::OneDay => 2,
            MatchFormat::FirstClass => 4,
        }
    }

    pub fn innings_per_match(&self) -> usize {
        match self {
            MatchFormat::T20 | MatchFormat::OneDay => 2,
            MatchFormat::FirstClass => 4,
        }
    }

    pub fn is_limited_overs(&self) -> bool {
        !matches!(self, MatchFormat::FirstClass)
    }

    /// Days between two league rounds.
    pub fn match_day_interval(&self) -> i64 {
        match self {
            MatchFormat::T20 => 3,
            MatchFormat::OneDay => 4,
            MatchFormat::FirstClass => 7,
        }
    }

    /// How strongly the surface pulls scoring and wickets away from neutral.
    pub fn pitch_influence(&self) -> f64 {
        match self {
            MatchFormat::T20 => 0.5,
            MatchFormat::OneDay => 0.75,
            MatchFormat::FirstClass => 1.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MatchFormat::T20 => "T20",
            MatchFormat::OneDay => "One-Day",
            MatchFormat::FirstClass => "First-Class",
        }
    }
}

impl Display for MatchFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.name())
    }
}

/// One of the nine parallel competitions: a format played in one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Competition {
    pub format: MatchFormat,
    pub tier: u8,
}

impl Competition {
    pub const TIERS: u8 = 3;

    pub fn new(format: MatchFormat, tier: u8) -> Self {
        Competition { format, tier }
    }

    pub fn all() -> Vec<Competition> {
        MatchFormat::ALL
            .iter()
            .flat_map(|&format| (1..=Self::TIERS).map(move |tier| Competition::new(format, tier)))
            .collect()
    }

    pub fn lower(&self) -> Option<Competition> {
        (self.tier < Self::TIERS).then(|| Competition::new(self.format, self.tier + 1))
    }
}

impl Display for Competition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} Division {}", self.format.name(), self.tier)
    }
}

use crate::competition::{MatchFormat, PitchType};
use serde::{Deserialize, Serialize};

pub const MAX_WICKETS: u32 = 10;

/// Optional caps that end an innings early. Absent fields mean "no cap".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreLimits {
    pub max_runs: Option<u32>,
    pub max_wickets: Option<u32>,
}

impl ScoreLimits {
    pub fn wicket_cap(&self) -> u32 {
        self.max_wickets
            .map(|wickets| wickets.clamp(1, MAX_WICKETS))
            .unwrap_or(MAX_WICKETS)
    }

    pub fn has_wicket_override(&self) -> bool {
        self.max_wickets.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InningsLimit {
    pub format: MatchFormat,
    /// 1-based innings number within the match.
    pub innings: usize,
    pub limits: ScoreLimits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub code: String,
    pub name: String,
    pub pitch: PitchType,
    #[serde(default)]
    pub limits: Vec<InningsLimit>,
}

impl Venue {
    pub fn new(code: &str, name: &str, pitch: PitchType) -> Self {
        Venue {
            code: code.to_string(),
            name: name.to_string(),
            pitch,
            limits: Vec::new(),
        }
    }
}

pub trait VenueProvider {
    fn pitch(&self, venue_code: &str) -> PitchType;

    fn score_limits(&self, venue_code: &str, format: MatchFormat, innings: usize) -> ScoreLimits;
}

impl VenueProvider for [Venue] {
    fn pitch(&self, venue_code: &str) -> PitchType {
        self.iter()
            .find(|venue| venue.code == venue_code)
            .map(|venue| venue.pitch)
            .unwrap_or_default()
    }

    fn score_limits(&self, venue_code: &str, format: MatchFormat, innings: usize) -> ScoreLimits {
        self.iter()
            .find(|venue| venue.code == venue_code)
            .and_then(|venue| {
                venue
                    .limits
                    .iter()
                    .find(|limit| limit.format == format && limit.innings == innings)
            })
            .map(|limit| limit.limits)
            .unwrap_or_default()
    }
}

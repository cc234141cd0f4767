use cricket_core::{MatchFormat, PitchType};
use serde::Deserialize;

const STATIC_VENUES_JSON: &str = include_str!("../data/venues.json");

#[derive(Debug, Deserialize)]
pub struct VenueEntity {
    pub code: String,
    pub name: String,
    pub pitch: PitchType,
    #[serde(default)]
    pub limits: Vec<VenueLimitEntity>,
}

#[derive(Debug, Deserialize)]
pub struct VenueLimitEntity {
    pub format: MatchFormat,
    pub innings: usize,
    #[serde(default)]
    pub max_runs: Option<u32>,
    #[serde(default)]
    pub max_wickets: Option<u32>,
}

pub struct VenueLoader;

impl VenueLoader {
    pub fn load() -> Result<Vec<VenueEntity>, serde_json::Error> {
        serde_json::from_str(STATIC_VENUES_JSON)
    }
}

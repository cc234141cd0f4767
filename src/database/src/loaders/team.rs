use serde::Deserialize;

const STATIC_TEAMS_JSON: &str = include_str!("../data/teams.json");

#[derive(Debug, Deserialize)]
pub struct TeamEntity {
    pub id: u32,
    pub name: String,
    pub venue: String,
    /// Rough squad quality, 0-100.
    pub strength: u8,
    pub tiers: TeamTiersEntity,
}

#[derive(Debug, Deserialize)]
pub struct TeamTiersEntity {
    pub t20: u8,
    pub one_day: u8,
    pub first_class: u8,
}

pub struct TeamLoader;

impl TeamLoader {
    pub fn load() -> Result<Vec<TeamEntity>, serde_json::Error> {
        serde_json::from_str(STATIC_TEAMS_JSON)
    }
}

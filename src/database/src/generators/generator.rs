use crate::generators::PlayerGenerator;
use crate::DatabaseEntity;
use chrono::NaiveDate;
use cricket_core::{
    Competition, InningsLimit, MatchFormat, ScoreLimits, SeasonSnapshot, Team, Venue,
};
use log::info;

pub const FIRST_SEASON: u16 = 1;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn season_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap_or_default()
    }

    /// Builds the opening snapshot: generated squads for every team, the
    /// venue list, and all nine competitions seeded from the static tiers.
    pub fn generate(data: &DatabaseEntity, seed: u64) -> Result<SeasonSnapshot, String> {
        let mut player_generator = PlayerGenerator::new(&data.names, seed);

        let teams = data
            .teams
            .iter()
            .map(|team| {
                let players = player_generator.generate_squad(team.strength)?;
                Ok(Team::new(team.id, team.name.clone(), team.venue.clone(), players))
            })
            .collect::<Result<Vec<Team>, String>>()?;

        let venues = data
            .venues
            .iter()
            .map(|venue| Venue {
                code: venue.code.clone(),
                name: venue.name.clone(),
                pitch: venue.pitch,
                limits: venue
                    .limits
                    .iter()
                    .map(|limit| InningsLimit {
                        format: limit.format,
                        innings: limit.innings,
                        limits: ScoreLimits {
                            max_runs: limit.max_runs,
                            max_wickets: limit.max_wickets,
                        },
                    })
                    .collect(),
            })
            .collect();

        let mut snapshot = SeasonSnapshot::new(FIRST_SEASON, Self::season_start(), teams, venues);

        for competition in Competition::all() {
            let team_ids: Vec<u32> = data
                .teams
                .iter()
                .filter(|team| {
                    let tier = match competition.format {
                        MatchFormat::T20 => team.tiers.t20,
                        MatchFormat::OneDay => team.tiers.one_day,
                        MatchFormat::FirstClass => team.tiers.first_class,
                    };
                    tier == competition.tier
                })
                .map(|team| team.id)
                .collect();

            info!("📋 {}: {} teams", competition, team_ids.len());

            snapshot.add_competition(competition, team_ids);
        }

        Ok(snapshot)
    }
}

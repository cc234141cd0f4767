use crate::club::{Player, Team};
use crate::competition::{Competition, Venue};
use crate::error::Result;
use crate::league::{Fixture, FixtureId, HistoricalRecords, LeagueTable, SlotResolver, TeamSlot};
use crate::r#match::MatchResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything one competition accumulates over a season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionState {
    pub competition: Competition,
    pub team_ids: Vec<u32>,
    pub schedule: Vec<Fixture>,
    pub table: LeagueTable,
    pub results: Vec<MatchResult>,
}

impl CompetitionState {
    pub fn new(competition: Competition, team_ids: Vec<u32>) -> Self {
        CompetitionState {
            competition,
            table: LeagueTable::new(&team_ids),
            team_ids,
            schedule: Vec::new(),
            results: Vec::new(),
        }
    }

    pub fn resolve_slot(&self, slot: &TeamSlot, fixture: FixtureId) -> Result<u32> {
        SlotResolver::resolve(slot, fixture, &self.table, &self.results)
    }

    pub fn result(&self, fixture: FixtureId) -> Option<&MatchResult> {
        self.results.iter().find(|r| r.fixture_id == fixture)
    }

    pub fn champion(&self) -> Option<u32> {
        self.result(FixtureId::Final).and_then(|r| r.winner())
    }

    /// Clears the season's fixtures, table and results, keeping the membership.
    pub fn reset(&mut self) {
        self.schedule.clear();
        self.results.clear();
        self.table = LeagueTable::new(&self.team_ids);
    }
}

/// The whole game state between two matches. The simulation core only
/// reads it; results are merged into a fresh copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonSnapshot {
    pub season: u16,
    pub start_date: NaiveDate,
    pub teams: Vec<Team>,
    pub venues: Vec<Venue>,
    pub competitions: Vec<CompetitionState>,
    pub records: HistoricalRecords,
}

impl SeasonSnapshot {
    pub fn new(season: u16, start_date: NaiveDate, teams: Vec<Team>, venues: Vec<Venue>) -> Self {
        SeasonSnapshot {
            season,
            start_date,
            teams,
            venues,
            competitions: Vec::new(),
            records: HistoricalRecords::default(),
        }
    }

    pub fn add_competition(&mut self, competition: Competition, team_ids: Vec<u32>) {
        self.competitions.retain(|c| c.competition != competition);
        self.competitions.push(CompetitionState::new(competition, team_ids));
    }

    pub fn team(&self, team_id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn team_mut(&mut self, team_id: u32) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == team_id)
    }

    pub fn player_mut(&mut self, team_id: u32, player_id: u32) -> Option<&mut Player> {
        self.team_mut(team_id).and_then(|t| t.player_mut(player_id))
    }

    pub fn competition(&self, competition: Competition) -> Option<&CompetitionState> {
        self.competitions.iter().find(|c| c.competition == competition)
    }

    pub fn competition_mut(&mut self, competition: Competition) -> Option<&mut CompetitionState> {
        self.competitions.iter_mut().find(|c| c.competition == competition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::competition::MatchFormat;
    use crate::league::Stage;
    use crate::r#match::{Margin, MatchOutcome};

    fn snapshot() -> SeasonSnapshot {
        let start = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let teams = (1..=3)
            .map(|id| Team::new(id, format!("Team {}", id), "HAR", Vec::new()))
            .collect();

        SeasonSnapshot::new(1, start, teams, Vec::new())
    }

    #[test]
    fn competitions_are_replaced_not_duplicated() {
        let mut snapshot = snapshot();
        let competition = Competition::new(MatchFormat::T20, 1);

        snapshot.add_competition(competition, vec![1, 2]);
        snapshot.add_competition(competition, vec![1, 2, 3]);

        assert_eq!(snapshot.competitions.len(), 1);
        assert_eq!(snapshot.competition(competition).unwrap().table.rows.len(), 3);
    }

    #[test]
    fn champion_is_the_final_winner() {
        let competition = Competition::new(MatchFormat::OneDay, 2);
        let mut state = CompetitionState::new(competition, vec![1, 2]);
        assert_eq!(state.champion(), None);

        state.results.push(MatchResult {
            fixture_id: FixtureId::Final,
            competition,
            stage: Stage::Final,
            home_team_id: 1,
            away_team_id: 2,
            venue: String::new(),
            outcome: MatchOutcome::Win { winner: 2, loser: 1, margin: Margin::Standing },
            summary: String::new(),
            innings: Vec::new(),
            best_performance: None,
            home_lineup: Vec::new(),
            away_lineup: Vec::new(),
        });
        assert_eq!(state.champion(), Some(2));

        state.reset();
        assert!(state.results.is_empty());
        assert_eq!(state.table.rows.len(), 2);
    }

    #[test]
    fn unknown_team_lookups_are_none() {
        let mut snapshot = snapshot();

        assert!(snapshot.team(9).is_none());
        assert!(snapshot.player_mut(1, 5).is_none());
    }
}

use crate::competition::DRAW_POINTS;
use crate::r#match::{MatchOutcome, MatchResult};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTableRow {
    pub team_id: u32,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub drawn: u32,
    pub points: u32,
    pub runs_for: u32,
    pub runs_against: u32,
    /// `runs_for - runs_against`, recomputed on every update.
    pub net_runs: i64,
}

impl LeagueTableRow {
    pub fn new(team_id: u32) -> Self {
        LeagueTableRow {
            team_id,
            ..Default::default()
        }
    }

    fn add_runs(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.runs_for += scored;
        self.runs_against += conceded;
        self.net_runs = self.runs_for as i64 - self.runs_against as i64;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueTable {
    pub rows: Vec<LeagueTableRow>,
}

impl LeagueTable {
    pub fn new(team_ids: &[u32]) -> Self {
        LeagueTable {
            rows: team_ids.iter().map(|&id| LeagueTableRow::new(id)).collect(),
        }
    }

    pub fn update_from_result(&mut self, result: &MatchResult) {
        let win_points = result.competition.format.win_points();

        for team_id in [result.home_team_id, result.away_team_id] {
            let scored = result.runs_scored_by(team_id);
            let conceded = result.runs_conceded_by(team_id);

            let Some(row) = self.row_mut(team_id) else {
                continue;
            };

            row.add_runs(scored, conceded);

            match result.outcome {
                MatchOutcome::Win { winner, .. } if winner == team_id => {
                    row.won += 1;
                    row.points += win_points;
                }
                MatchOutcome::Win { .. } => row.lost += 1,
                MatchOutcome::Tie | MatchOutcome::Draw => {
                    row.drawn += 1;
                    row.points += DRAW_POINTS;
                }
            }
        }

        self.sort();
    }

    /// 0-based position of a team.
    pub fn position(&self, team_id: u32) -> Option<usize> {
        self.rows.iter().position(|r| r.team_id == team_id)
    }

    /// Team holding a 1-based position.
    pub fn team_at(&self, position: usize) -> Option<u32> {
        position
            .checked_sub(1)
            .and_then(|index| self.rows.get(index))
            .map(|row| row.team_id)
    }

    pub fn row(&self, team_id: u32) -> Option<&LeagueTableRow> {
        self.rows.iter().find(|r| r.team_id == team_id)
    }

    fn row_mut(&mut self, team_id: u32) -> Option<&mut LeagueTableRow> {
        self.rows.iter_mut().find(|r| r.team_id == team_id)
    }

    pub fn top(&self) -> Option<u32> {
        self.rows.first().map(|r| r.team_id)
    }

    pub fn bottom(&self) -> Option<u32> {
        self.rows.last().map(|r| r.team_id)
    }

    fn sort(&mut self) {
        self.rows
            .sort_by_key(|row| (Reverse(row.points), Reverse(row.net_runs)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::competition::{Competition, MatchFormat};
    use crate::league::{FixtureId, Stage};
    use crate::r#match::{Inning, Margin};

    fn result(format: MatchFormat, home_score: u32, away_score: u32, outcome: MatchOutcome) -> MatchResult {
        let mut first = Inning::new(1, 1, 2, 10);
        first.score = home_score;
        let mut second = Inning::new(2, 2, 1, 10);
        second.score = away_score;

        MatchResult {
            fixture_id: FixtureId::Round(1),
            competition: Competition::new(format, 1),
            stage: Stage::RoundRobin,
            home_team_id: 1,
            away_team_id: 2,
            venue: String::from("HAR"),
            outcome,
            summary: String::new(),
            innings: vec![first, second],
            best_performance: None,
            home_lineup: Vec::new(),
            away_lineup: Vec::new(),
        }
    }

    #[test]
    fn win_awards_points_and_resorts() {
        let mut table = LeagueTable::new(&[1, 2, 3]);

        table.update_from_result(&result(
            MatchFormat::T20,
            140,
            141,
            MatchOutcome::Win { winner: 2, loser: 1, margin: Margin::Wickets(4) },
        ));

        assert_eq!(table.team_at(1), Some(2));
        assert_eq!(table.position(1), Some(2));

        let winner = table.row(2).unwrap();
        assert_eq!((winner.played, winner.won, winner.points), (1, 1, 2));
        assert_eq!(winner.net_runs, 1);

        let loser = table.row(1).unwrap();
        assert_eq!((loser.played, loser.lost, loser.points), (1, 1, 0));
        assert_eq!(loser.net_runs, -1);
    }

    #[test]
    fn first_class_win_is_worth_four() {
        let mut table = LeagueTable::new(&[1, 2]);

        table.update_from_result(&result(
            MatchFormat::FirstClass,
            400,
            250,
            MatchOutcome::Win { winner: 1, loser: 2, margin: Margin::Runs(150) },
        ));

        assert_eq!(table.row(1).unwrap().points, 4);
    }

    #[test]
    fn draw_gives_each_side_a_point() {
        let mut table = LeagueTable::new(&[1, 2]);

        table.update_from_result(&result(MatchFormat::FirstClass, 300, 280, MatchOutcome::Draw));

        for team in [1, 2] {
            let row = table.row(team).unwrap();
            assert_eq!(row.drawn, 1);
            assert_eq!(row.points, 1);
            assert_eq!(row.played, row.won + row.lost + row.drawn);
        }

        // equal points, net runs decides
        assert_eq!(table.team_at(1), Some(1));
    }

    #[test]
    fn positions_outside_the_table_are_none() {
        let table = LeagueTable::new(&[5, 6]);

        assert_eq!(table.team_at(0), None);
        assert_eq!(table.team_at(3), None);
        assert_eq!(table.team_at(2), Some(6));
        assert_eq!(table.bottom(), Some(6));
    }
}

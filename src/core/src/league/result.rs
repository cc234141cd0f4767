use crate::error::{Result, SimulationError};
use crate::competition::MatchFormat;
use crate::league::{PopularityCalculator, Stage};
use crate::r#match::MatchResult;
use crate::season::SeasonSnapshot;
use itertools::Itertools;
use log::debug;

/// Folds a finished match into the season: player statistics, standings,
/// historical records, popularity and the competition's result list.
pub struct LeagueResult {
    pub result: MatchResult,
}

impl LeagueResult {
    pub fn new(result: MatchResult) -> Self {
        LeagueResult { result }
    }

    pub fn process(self, snapshot: &mut SeasonSnapshot) -> Result<()> {
        let result = self.result;

        if snapshot.competition(result.competition).is_none() {
            return Err(SimulationError::UnknownCompetition(result.competition));
        }

        Self::process_player_statistics(&result, snapshot);

        for team_id in [result.home_team_id, result.away_team_id] {
            let points = PopularityCalculator::points_for_team(&result, team_id);
            if points > 0 {
                if let Some(team) = snapshot.team_mut(team_id) {
                    team.add_popularity(points);
                    debug!("{} gains {} popularity", team.name, points);
                }
            }
        }

        snapshot.records.record_match(&result);

        if let Some(state) = snapshot.competition_mut(result.competition) {
            if result.stage == Stage::RoundRobin {
                state.table.update_from_result(&result);
            }

            state.results.push(result);
        }

        Ok(())
    }

    fn process_player_statistics(result: &MatchResult, snapshot: &mut SeasonSnapshot) {
        let format = result.competition.format;

        for (team_id, lineup) in [
            (result.home_team_id, &result.home_lineup),
            (result.away_team_id, &result.away_lineup),
        ] {
            for &player_id in lineup {
                if let Some(player) = snapshot.player_mut(team_id, player_id) {
                    player.statistics.get_mut(format).matches += 1;
                }
            }
        }

        for inning in &result.innings {
            for batting in &inning.batting {
                if let Some(player) = snapshot.player_mut(inning.batting_team_id, batting.player_id) {
                    player.statistics.get_mut(format).record_batting(batting);
                }
            }

            for bowling in &inning.bowling {
                if let Some(player) = snapshot.player_mut(inning.bowling_team_id, bowling.player_id) {
                    player.statistics.get_mut(format).record_bowling(bowling);
                }
            }
        }

        if format == MatchFormat::FirstClass {
            let match_wickets = result
                .innings
                .iter()
                .flat_map(|inning| {
                    inning
                        .bowling
                        .iter()
                        .map(move |b| ((inning.bowling_team_id, b.player_id), b.wickets))
                })
                .into_group_map();

            for ((team_id, player_id), wickets) in match_wickets {
                if let Some(player) = snapshot.player_mut(team_id, player_id) {
                    player
                        .statistics
                        .get_mut(format)
                        .record_match_wickets(wickets.iter().sum());
                }
            }
        }

        if let Some(best) = &result.best_performance {
            if let Some(player) = snapshot.player_mut(best.team_id, best.player_id) {
                player.statistics.get_mut(format).man_of_the_match += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Player, PlayerRole, Team};
    use crate::competition::Competition;
    use crate::league::FixtureId;
    use crate::r#match::{
        BattingPerformance, BestPerformance, BowlingPerformance, Inning, Margin, MatchOutcome,
    };
    use chrono::NaiveDate;

    fn team(id: u32) -> Team {
        let players = (1..=2)
            .map(|n| {
                Player::builder()
                    .id(id * 10 + n)
                    .full_name(format!("Player {}", id * 10 + n))
                    .role(PlayerRole::AllRounder)
                    .batting_skill(50)
                    .bowling_skill(50)
                    .build()
                    .unwrap()
            })
            .collect();

        Team::new(id, format!("Team {}", id), format!("V{}", id), players)
    }

    fn snapshot(competition: Competition) -> SeasonSnapshot {
        let start = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let mut snapshot = SeasonSnapshot::new(1, start, vec![team(1), team(2), team(3)], Vec::new());
        snapshot.add_competition(competition, vec![1, 2, 3]);
        snapshot
    }

    fn result(competition: Competition, stage: Stage) -> MatchResult {
        let mut first = Inning::new(1, 1, 2, 10);
        first.score = 120;
        first.batting = vec![BattingPerformance {
            runs: 120,
            balls: 90,
            did_bat: true,
            ..BattingPerformance::new(11)
        }];
        first.bowling = vec![BowlingPerformance {
            balls: 60,
            runs: 120,
            wickets: 2,
            ..BowlingPerformance::new(21)
        }];

        let mut second = Inning::new(2, 2, 1, 10);
        second.score = 100;
        second.wickets = 10;
        second.batting = vec![BattingPerformance {
            runs: 100,
            balls: 80,
            did_bat: true,
            ..BattingPerformance::new(21)
        }];
        second.bowling = vec![BowlingPerformance {
            balls: 48,
            runs: 100,
            wickets: 10,
            ..BowlingPerformance::new(12)
        }];

        MatchResult {
            fixture_id: FixtureId::Round(1),
            competition,
            stage,
            home_team_id: 1,
            away_team_id: 2,
            venue: String::from("V1"),
            outcome: MatchOutcome::Win { winner: 1, loser: 2, margin: Margin::Runs(20) },
            summary: String::new(),
            innings: vec![first, second],
            best_performance: Some(BestPerformance {
                player_id: 12,
                team_id: 1,
                points: 300.0,
                justification: String::new(),
            }),
            home_lineup: vec![11, 12],
            away_lineup: vec![21, 22],
        }
    }

    #[test]
    fn round_robin_result_updates_everything() {
        let competition = Competition::new(MatchFormat::OneDay, 1);
        let mut snapshot = snapshot(competition);

        LeagueResult::new(result(competition, Stage::RoundRobin))
            .process(&mut snapshot)
            .unwrap();

        let state = snapshot.competition(competition).unwrap();
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.table.team_at(1), Some(1));
        for row in &state.table.rows {
            assert_eq!(row.played, row.won + row.lost + row.drawn);
        }

        let centurion = snapshot.team(1).unwrap().player(11).unwrap();
        let stats = centurion.statistics.get(MatchFormat::OneDay);
        assert_eq!((stats.matches, stats.runs, stats.hundreds), (1, 120, 1));

        let bowler = snapshot.team(1).unwrap().player(12).unwrap();
        let stats = bowler.statistics.get(MatchFormat::OneDay);
        assert_eq!((stats.wickets, stats.five_wicket_hauls, stats.man_of_the_match), (10, 1, 1));
        assert_eq!(stats.ten_wicket_matches, 0);

        let unused = snapshot.team(2).unwrap().player(22).unwrap();
        assert_eq!(unused.statistics.get(MatchFormat::OneDay).matches, 1);
        assert_eq!(unused.statistics.get(MatchFormat::OneDay).innings, 0);

        assert!(snapshot.records.head_to_head(MatchFormat::OneDay, 1, 2).is_some());
        // hundred (+3) and a five-wicket haul (+3)
        assert_eq!(snapshot.team(1).unwrap().popularity, 6);
        assert_eq!(snapshot.team(2).unwrap().popularity, 3);
    }

    #[test]
    fn knockout_result_leaves_table_alone() {
        let competition = Competition::new(MatchFormat::T20, 2);
        let mut snapshot = snapshot(competition);

        LeagueResult::new(result(competition, Stage::SemiFinal))
            .process(&mut snapshot)
            .unwrap();

        let state = snapshot.competition(competition).unwrap();
        assert_eq!(state.results.len(), 1);
        assert!(state.table.rows.iter().all(|row| row.played == 0));
    }

    #[test]
    fn unknown_competition_is_an_error() {
        let mut snapshot = snapshot(Competition::new(MatchFormat::T20, 1));
        let stray = Competition::new(MatchFormat::FirstClass, 3);

        let error = LeagueResult::new(result(stray, Stage::RoundRobin))
            .process(&mut snapshot)
            .unwrap_err();

        assert_eq!(error, SimulationError::UnknownCompetition(stray));
    }
}

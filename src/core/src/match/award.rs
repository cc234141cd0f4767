use crate::club::{PlayerRole, Team};
use crate::r#match::{BattingPerformance, BestPerformance, BowlingPerformance, Inning};

const BATTING_MILESTONES: [(u32, f64); 3] = [(200, 50.0), (100, 25.0), (50, 10.0)];
const BOWLING_MILESTONES: [(u32, f64); 3] = [(8, 50.0), (5, 25.0), (3, 10.0)];
const RUNS_CONCEDED_PENALTY: f64 = 0.1;

/// Picks the player of the match from every batting and bowling card.
pub struct BestPerformanceAward;

impl BestPerformanceAward {
    /// Cards are scored innings by innings, batting before bowling. Only a
    /// strictly higher score replaces the current leader, so ties go to
    /// whichever card came first.
    pub fn select(innings: &[Inning], teams: &[&Team]) -> Option<BestPerformance> {
        let mut best: Option<BestPerformance> = None;

        for inning in innings {
            let batting = inning.batting.iter().filter(|b| b.did_bat).map(|b| {
                let role = Self::role_of(teams, b.player_id);
                BestPerformance {
                    player_id: b.player_id,
                    team_id: inning.batting_team_id,
                    points: Self::batting_points(b, role),
                    justification: format!("{} runs off {} balls", b.runs, b.balls),
                }
            });

            let bowling = inning.bowling.iter().map(|b| {
                let role = Self::role_of(teams, b.player_id);
                BestPerformance {
                    player_id: b.player_id,
                    team_id: inning.bowling_team_id,
                    points: Self::bowling_points(b, role),
                    justification: format!("{} wickets for {} runs in {} overs", b.wickets, b.runs, b.overs()),
                }
            });

            for candidate in batting.chain(bowling) {
                let leads = best
                    .as_ref()
                    .map(|current| candidate.points > current.points)
                    .unwrap_or(true);

                if leads {
                    best = Some(candidate);
                }
            }
        }

        best
    }

    pub fn batting_points(performance: &BattingPerformance, role: PlayerRole) -> f64 {
        let weight = match role {
            PlayerRole::Batter => 1.0,
            PlayerRole::WicketKeeper => 1.1,
            PlayerRole::AllRounder => 1.25,
            PlayerRole::SpinBowler | PlayerRole::PaceBowler => 1.5,
        };

        performance.runs as f64 * weight + Self::milestone_bonus(performance.runs, &BATTING_MILESTONES)
    }

    pub fn bowling_points(performance: &BowlingPerformance, role: PlayerRole) -> f64 {
        let per_wicket = match role {
            PlayerRole::SpinBowler | PlayerRole::PaceBowler => 25.0,
            PlayerRole::AllRounder => 30.0,
            PlayerRole::Batter | PlayerRole::WicketKeeper => 20.0,
        };

        performance.wickets as f64 * per_wicket
            + Self::milestone_bonus(performance.wickets, &BOWLING_MILESTONES)
            - performance.runs as f64 * RUNS_CONCEDED_PENALTY
    }

    fn milestone_bonus(value: u32, milestones: &[(u32, f64)]) -> f64 {
        milestones
            .iter()
            .find(|(threshold, _)| value >= *threshold)
            .map(|(_, bonus)| *bonus)
            .unwrap_or(0.0)
    }

    fn role_of(teams: &[&Team], player_id: u32) -> PlayerRole {
        teams
            .iter()
            .find_map(|team| team.player(player_id))
            .map(|player| player.role)
            .unwrap_or(PlayerRole::Batter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::Player;

    fn player(id: u32, role: PlayerRole) -> Player {
        Player::builder()
            .id(id)
            .full_name(format!("Player {}", id))
            .role(role)
            .batting_skill(50)
            .bowling_skill(50)
            .build()
            .unwrap()
    }

    fn batting(player_id: u32, runs: u32, balls: u32) -> BattingPerformance {
        BattingPerformance {
            runs,
            balls,
            did_bat: true,
            ..BattingPerformance::new(player_id)
        }
    }

    fn bowling(player_id: u32, wickets: u32, runs: u32) -> BowlingPerformance {
        BowlingPerformance {
            wickets,
            runs,
            balls: 24,
            ..BowlingPerformance::new(player_id)
        }
    }

    #[test]
    fn batting_points_use_role_weight_and_milestones() {
        assert_eq!(BestPerformanceAward::batting_points(&batting(1, 49, 40), PlayerRole::Batter), 49.0);
        assert_eq!(BestPerformanceAward::batting_points(&batting(1, 50, 40), PlayerRole::Batter), 60.0);
        assert_eq!(BestPerformanceAward::batting_points(&batting(1, 100, 80), PlayerRole::AllRounder), 150.0);
        assert_eq!(BestPerformanceAward::batting_points(&batting(1, 200, 300), PlayerRole::PaceBowler), 350.0);
    }

    #[test]
    fn bowling_points_penalise_runs_conceded() {
        let points = BestPerformanceAward::bowling_points(&bowling(1, 5, 30), PlayerRole::SpinBowler);
        assert!((points - 147.0).abs() < 1e-9);

        let points = BestPerformanceAward::bowling_points(&bowling(1, 3, 20), PlayerRole::AllRounder);
        assert!((points - 98.0).abs() < 1e-9);

        let points = BestPerformanceAward::bowling_points(&bowling(1, 0, 40), PlayerRole::Batter);
        assert!(points < 0.0);
    }

    #[test]
    fn highest_card_wins_and_ties_go_to_the_earlier_card() {
        let home = Team::new(1, "Home", "HOM", vec![player(10, PlayerRole::Batter), player(11, PlayerRole::PaceBowler)]);
        let away = Team::new(2, "Away", "AWY", vec![player(20, PlayerRole::Batter), player(21, PlayerRole::PaceBowler)]);

        let mut first = Inning::new(1, 1, 2, 10);
        first.batting = vec![batting(10, 60, 40)];
        first.bowling = vec![bowling(21, 2, 0)];

        let mut second = Inning::new(2, 2, 1, 10);
        second.batting = vec![batting(20, 60, 35)];
        second.bowling = vec![bowling(11, 1, 10)];

        let award = BestPerformanceAward::select(&[first.clone(), second], &[&home, &away]).unwrap();
        assert_eq!(award.player_id, 10);
        assert_eq!(award.team_id, 1);
        assert_eq!(award.points, 70.0);

        first.bowling = vec![bowling(21, 3, 0)];
        let award = BestPerformanceAward::select(&[first], &[&home, &away]).unwrap();
        assert_eq!(award.player_id, 21);
        assert_eq!(award.team_id, 2);
    }

    #[test]
    fn players_who_did_not_bat_are_skipped() {
        let mut inning = Inning::new(1, 1, 2, 10);
        inning.batting = vec![BattingPerformance::new(10)];

        assert!(BestPerformanceAward::select(&[inning], &[]).is_none());
    }
}

use crate::competition::MatchFormat;
use crate::r#match::{MatchOutcome, MatchResult};
use serde::{Deserialize, Serialize};

/// Results of one team against one opponent. Each pairing is kept from both
/// sides, so a match updates two rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamHeadToHead {
    pub format: MatchFormat,
    pub team_id: u32,
    pub opponent_id: u32,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub drawn: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerVsTeam {
    pub format: MatchFormat,
    pub player_id: u32,
    pub opponent_id: u32,
    pub matches: u32,
    pub runs: u32,
    pub balls_faced: u32,
    pub dismissals: u32,
    pub balls_bowled: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatterVsBowler {
    pub format: MatchFormat,
    pub batter_id: u32,
    pub bowler_id: u32,
    pub balls: u32,
    pub runs: u32,
    pub dismissals: u32,
}

/// Career-long records. Rows are only ever created or added to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecords {
    pub head_to_head: Vec<TeamHeadToHead>,
    pub player_vs_team: Vec<PlayerVsTeam>,
    pub batter_vs_bowler: Vec<BatterVsBowler>,
}

impl HistoricalRecords {
    pub fn record_match(&mut self, result: &MatchResult) {
        let format = result.competition.format;

        for (team_id, opponent_id) in [
            (result.home_team_id, result.away_team_id),
            (result.away_team_id, result.home_team_id),
        ] {
            let row = self.head_to_head_mut(format, team_id, opponent_id);
            row.played += 1;

            match result.outcome {
                MatchOutcome::Win { winner, .. } if winner == team_id => row.won += 1,
                MatchOutcome::Win { .. } => row.lost += 1,
                MatchOutcome::Tie | MatchOutcome::Draw => row.drawn += 1,
            }
        }

        for (lineup, opponent_id) in [
            (&result.home_lineup, result.away_team_id),
            (&result.away_lineup, result.home_team_id),
        ] {
            for &player_id in lineup {
                self.player_vs_team_mut(format, player_id, opponent_id).matches += 1;
            }
        }

        for inning in &result.innings {
            for batting in inning.batting.iter().filter(|b| b.did_bat) {
                let row = self.player_vs_team_mut(format, batting.player_id, inning.bowling_team_id);
                row.runs += batting.runs;
                row.balls_faced += batting.balls;
                if batting.dismissal.is_out() {
                    row.dismissals += 1;
                }
            }

            for bowling in &inning.bowling {
                let row = self.player_vs_team_mut(format, bowling.player_id, inning.batting_team_id);
                row.balls_bowled += bowling.balls;
                row.runs_conceded += bowling.runs;
                row.wickets += bowling.wickets;
            }

            for matchup in &inning.matchups {
                let row = self.batter_vs_bowler_mut(format, matchup.batter_id, matchup.bowler_id);
                row.balls += matchup.balls;
                row.runs += matchup.runs;
                if matchup.dismissed {
                    row.dismissals += 1;
                }
            }
        }
    }

    pub fn head_to_head(&self, format: MatchFormat, team_id: u32, opponent_id: u32) -> Option<&TeamHeadToHead> {
        self.head_to_head
            .iter()
            .find(|r| r.format == format && r.team_id == team_id && r.opponent_id == opponent_id)
    }

    pub fn player_vs_team(&self, format: MatchFormat, player_id: u32, opponent_id: u32) -> Option<&PlayerVsTeam> {
        self.player_vs_team
            .iter()
            .find(|r| r.format == format && r.player_id == player_id && r.opponent_id == opponent_id)
    }

    pub fn batter_vs_bowler(&self, format: MatchFormat, batter_id: u32, bowler_id: u32) -> Option<&BatterVsBowler> {
        self.batter_vs_bowler
            .iter()
            .find(|r| r.format == format && r.batter_id == batter_id && r.bowler_id == bowler_id)
    }

    fn head_to_head_mut(&mut self, format: MatchFormat, team_id: u32, opponent_id: u32) -> &mut TeamHeadToHead {
        let index = match self
            .head_to_head
            .iter()
            .position(|r| r.format == format && r.team_id == team_id && r.opponent_id == opponent_id)
        {
            Some(index) => index,
            None => {
                self.head_to_head.push(TeamHeadToHead {
                    format,
                    team_id,
                    opponent_id,
                    played: 0,
                    won: 0,
                    lost: 0,
                    drawn: 0,
                });
                self.head_to_head.len() - 1
            }
        };

        &mut self.head_to_head[index]
    }

    fn player_vs_team_mut(&mut self, format: MatchFormat, player_id: u32, opponent_id: u32) -> &mut PlayerVsTeam {
        let index = match self
            .player_vs_team
            .iter()
            .position(|r| r.format == format && r.player_id == player_id && r.opponent_id == opponent_id)
        {
            Some(index) => index,
            None => {
                self.player_vs_team.push(PlayerVsTeam {
                    format,
                    player_id,
                    opponent_id,
                    matches: 0,
                    runs: 0,
                    balls_faced: 0,
                    dismissals: 0,
                    balls_bowled: 0,
                    runs_conceded: 0,
                    wickets: 0,
                });
                self.player_vs_team.len() - 1
            }
        };

        &mut self.player_vs_team[index]
    }

    fn batter_vs_bowler_mut(&mut self, format: MatchFormat, batter_id: u32, bowler_id: u32) -> &mut BatterVsBowler {
        let index = match self
            .batter_vs_bowler
            .iter()
            .position(|r| r.format == format && r.batter_id == batter_id && r.bowler_id == bowler_id)
        {
            Some(index) => index,
            None => {
                self.batter_vs_bowler.push(BatterVsBowler {
                    format,
                    batter_id,
                    bowler_id,
                    balls: 0,
                    runs: 0,
                    dismissals: 0,
                });
                self.batter_vs_bowler.len() - 1
            }
        };

        &mut self.batter_vs_bowler[index]
    }
}

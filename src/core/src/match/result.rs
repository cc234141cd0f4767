use crate::club::BowlingFigures;
use crate::competition::{Competition, BALLS_PER_OVER};
use crate::league::{FixtureId, Stage};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DismissalKind {
    Bowled,
    Caught,
    Lbw,
}

impl DismissalKind {
    pub fn label(&self) -> &'static str {
        match self {
            DismissalKind::Bowled => "b",
            DismissalKind::Caught => "c",
            DismissalKind::Lbw => "lbw",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Dismissal {
    #[default]
    NotOut,
    Out { kind: DismissalKind, bowler_id: u32 },
}

impl Dismissal {
    pub fn is_out(&self) -> bool {
        matches!(self, Dismissal::Out { .. })
    }

    pub fn bowler_id(&self) -> Option<u32> {
        match self {
            Dismissal::Out { bowler_id, .. } => Some(*bowler_id),
            Dismissal::NotOut => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattingPerformance {
    pub player_id: u32,
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
    /// False for a lineup slot that never reached the crease.
    pub did_bat: bool,
    pub dismissal: Dismissal,
    pub fifty_balls: Option<u32>,
    pub hundred_balls: Option<u32>,
}

impl BattingPerformance {
    pub fn new(player_id: u32) -> Self {
        BattingPerformance {
            player_id,
            ..Default::default()
        }
    }

    pub fn strike_rate(&self) -> f64 {
        if self.balls == 0 {
            return 0.0;
        }

        self.runs as f64 * 100.0 / self.balls as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BowlingPerformance {
    pub player_id: u32,
    /// Legal deliveries.
    pub balls: u32,
    pub runs: u32,
    pub wickets: u32,
    pub maidens: u32,
}

impl BowlingPerformance {
    pub fn new(player_id: u32) -> Self {
        BowlingPerformance {
            player_id,
            ..Default::default()
        }
    }

    pub fn completed_overs(&self) -> u32 {
        self.balls / BALLS_PER_OVER
    }

    pub fn overs(&self) -> String {
        format!("{}.{}", self.balls / BALLS_PER_OVER, self.balls % BALLS_PER_OVER)
    }

    pub fn figures(&self) -> BowlingFigures {
        BowlingFigures {
            wickets: self.wickets,
            runs: self.runs,
            balls: self.balls,
        }
    }
}

/// Balls a batter faced from one bowler within an innings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub batter_id: u32,
    pub bowler_id: u32,
    pub balls: u32,
    pub runs: u32,
    pub dismissed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InningsEnd {
    AllOut,
    OversCompleted,
    TargetReached,
    /// A venue score or wicket override ended the innings.
    LimitReached,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inning {
    /// 1-based position within the match.
    pub number: usize,
    pub batting_team_id: u32,
    pub bowling_team_id: u32,

    pub score: u32,
    pub wickets: u32,
    pub legal_balls: u32,
    pub extras: u32,
    pub wicket_cap: u32,
    pub end: InningsEnd,

    pub batting: Vec<BattingPerformance>,
    pub bowling: Vec<BowlingPerformance>,
    pub matchups: Vec<Matchup>,
}

impl Inning {
    pub fn new(number: usize, batting_team_id: u32, bowling_team_id: u32, wicket_cap: u32) -> Self {
        Inning {
            number,
            batting_team_id,
            bowling_team_id,
            score: 0,
            wickets: 0,
            legal_balls: 0,
            extras: 0,
            wicket_cap,
            end: InningsEnd::OversCompleted,
            batting: Vec::new(),
            bowling: Vec::new(),
            matchups: Vec::new(),
        }
    }

    pub fn overs(&self) -> String {
        format!("{}.{}", self.legal_balls / BALLS_PER_OVER, self.legal_balls % BALLS_PER_OVER)
    }

    /// Every available wicket has fallen, whether the cap is the usual ten or a venue override.
    pub fn is_bowled_out(&self) -> bool {
        self.wickets >= self.wicket_cap
    }

    pub fn wickets_in_hand(&self) -> u32 {
        self.wicket_cap.saturating_sub(self.wickets)
    }

    pub fn batting_runs(&self) -> u32 {
        self.batting.iter().map(|b| b.runs).sum()
    }

    pub fn scoreline(&self) -> String {
        if self.is_bowled_out() {
            format!("{} all out ({} ov)", self.score, self.overs())
        } else {
            format!("{}/{} ({} ov)", self.score, self.wickets, self.overs())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Margin {
    Runs(u32),
    Wickets(u32),
    InningsAndRuns(u32),
    /// A tie or draw in a knockout settled by league position.
    Standing,
}

impl Display for Margin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Margin::Runs(1) => write!(f, "1 run"),
            Margin::Runs(runs) => write!(f, "{} runs", runs),
            Margin::Wickets(1) => write!(f, "1 wicket"),
            Margin::Wickets(wickets) => write!(f, "{} wickets", wickets),
            Margin::InningsAndRuns(runs) => write!(f, "an innings and {} runs", runs),
            Margin::Standing => write!(f, "standing"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win { winner: u32, loser: u32, margin: Margin },
    Tie,
    Draw,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestPerformance {
    pub player_id: u32,
    pub team_id: u32,
    pub points: f64,
    pub justification: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub fixture_id: FixtureId,
    pub competition: Competition,
    pub stage: Stage,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub venue: String,

    pub outcome: MatchOutcome,
    pub summary: String,
    pub innings: Vec<Inning>,
    pub best_performance: Option<BestPerformance>,

    /// Player ids of each playing XI, home first.
    pub home_lineup: Vec<u32>,
    pub away_lineup: Vec<u32>,
}

impl MatchResult {
    pub fn winner(&self) -> Option<u32> {
        match self.outcome {
            MatchOutcome::Win { winner, .. } => Some(winner),
            _ => None,
        }
    }

    pub fn loser(&self) -> Option<u32> {
        match self.outcome {
            MatchOutcome::Win { loser, .. } => Some(loser),
            _ => None,
        }
    }

    /// True for a drawn match and for a tie nobody was awarded.
    pub fn is_draw(&self) -> bool {
        matches!(self.outcome, MatchOutcome::Tie | MatchOutcome::Draw)
    }

    pub fn runs_scored_by(&self, team_id: u32) -> u32 {
        self.innings
            .iter()
            .filter(|i| i.batting_team_id == team_id)
            .map(|i| i.score)
            .sum()
    }

    pub fn runs_conceded_by(&self, team_id: u32) -> u32 {
        self.innings
            .iter()
            .filter(|i| i.bowling_team_id == team_id)
            .map(|i| i.score)
            .sum()
    }

    pub fn opponent_of(&self, team_id: u32) -> u32 {
        if team_id == self.home_team_id {
            self.away_team_id
        } else {
            self.home_team_id
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overs_render_as_overs_dot_balls() {
        let mut inning = Inning::new(1, 1, 2, 10);
        inning.legal_balls = 110;

        assert_eq!(inning.overs(), "18.2");
    }

    #[test]
    fn scoreline_marks_all_out() {
        let mut inning = Inning::new(1, 1, 2, 10);
        inning.score = 150;
        inning.wickets = 10;
        inning.legal_balls = 117;

        assert_eq!(inning.scoreline(), "150 all out (19.3 ov)");
        assert_eq!(inning.wickets_in_hand(), 0);
    }

    #[test]
    fn margin_wording() {
        assert_eq!(Margin::Wickets(7).to_string(), "7 wickets");
        assert_eq!(Margin::Runs(1).to_string(), "1 run");
        assert_eq!(Margin::InningsAndRuns(80).to_string(), "an innings and 80 runs");
    }

    #[test]
    fn dismissal_reports_bowler() {
        let dismissal = Dismissal::Out { kind: DismissalKind::Lbw, bowler_id: 4 };

        assert!(dismissal.is_out());
        assert_eq!(dismissal.bowler_id(), Some(4));
        assert_eq!(Dismissal::NotOut.bowler_id(), None);
    }
}

use crate::competition::{MatchFormat, BALLS_PER_OVER};
use crate::r#match::{BattingPerformance, BowlingPerformance};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Career statistics, one record per format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerStatistics {
    t20: FormatStatistics,
    one_day: FormatStatistics,
    first_class: FormatStatistics,
}

impl PlayerStatistics {
    pub fn get(&self, format: MatchFormat) -> &FormatStatistics {
        match format {
            MatchFormat::T20 => &self.t20,
            MatchFormat::OneDay => &self.one_day,
            MatchFormat::FirstClass => &self.first_class,
        }
    }

    pub fn get_mut(&mut self, format: MatchFormat) -> &mut FormatStatistics {
        match format {
            MatchFormat::T20 => &mut self.t20,
            MatchFormat::OneDay => &mut self.one_day,
            MatchFormat::FirstClass => &mut self.first_class,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BowlingFigures {
    pub wickets: u32,
    pub runs: u32,
    pub balls: u32,
}

impl BowlingFigures {
    pub fn economy(&self) -> f64 {
        if self.balls == 0 {
            return 0.0;
        }

        self.runs as f64 * BALLS_PER_OVER as f64 / self.balls as f64
    }

    /// More wickets wins; equal wickets fall back to the cheaper economy.
    pub fn is_better_than(&self, other: &BowlingFigures) -> bool {
        self.wickets > other.wickets
            || (self.wickets == other.wickets && self.economy() < other.economy())
    }
}

impl Display for BowlingFigures {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}/{}", self.wickets, self.runs)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatStatistics {
    pub matches: u32,
    pub man_of_the_match: u32,

    // batting
    pub innings: u32,
    pub not_outs: u32,
    pub runs: u32,
    pub balls_faced: u32,
    pub fours: u32,
    pub sixes: u32,
    pub fifties: u32,
    pub hundreds: u32,
    pub double_hundreds: u32,
    pub highest_score: u32,
    pub fastest_fifty: Option<u32>,
    pub fastest_hundred: Option<u32>,
    pub batting_average: f64,
    pub strike_rate: f64,

    // bowling
    pub balls_bowled: u32,
    pub runs_conceded: u32,
    pub wickets: u32,
    pub maidens: u32,
    pub three_wicket_hauls: u32,
    pub five_wicket_hauls: u32,
    pub ten_wicket_matches: u32,
    pub best_bowling: Option<BowlingFigures>,
    pub bowling_average: f64,
    pub economy: f64,
}

impl FormatStatistics {
    pub fn dismissals(&self) -> u32 {
        self.innings - self.not_outs
    }

    pub fn record_batting(&mut self, performance: &BattingPerformance) {
        if !performance.did_bat {
            return;
        }

        self.innings += 1;
        if !performance.dismissal.is_out() {
            self.not_outs += 1;
        }

        self.runs += performance.runs;
        self.balls_faced += performance.balls;
        self.fours += performance.fours;
        self.sixes += performance.sixes;
        self.highest_score = self.highest_score.max(performance.runs);

        match performance.runs {
            50..=99 => self.fifties += 1,
            100..=199 => self.hundreds += 1,
            r if r >= 200 => {
                self.hundreds += 1;
                self.double_hundreds += 1;
            }
            _ => {}
        }

        if let Some(balls) = performance.fifty_balls {
            self.fastest_fifty = Some(self.fastest_fifty.map_or(balls, |current| current.min(balls)));
        }
        if let Some(balls) = performance.hundred_balls {
            self.fastest_hundred =
                Some(self.fastest_hundred.map_or(balls, |current| current.min(balls)));
        }

        self.recompute_rates();
    }

    pub fn record_bowling(&mut self, performance: &BowlingPerformance) {
        if performance.balls == 0 {
            return;
        }

        self.balls_bowled += performance.balls;
        self.runs_conceded += performance.runs;
        self.wickets += performance.wickets;
        self.maidens += performance.maidens;

        match performance.wickets {
            3..=4 => self.three_wicket_hauls += 1,
            w if w >= 5 => self.five_wicket_hauls += 1,
            _ => {}
        }

        let figures = performance.figures();
        let improved = self
            .best_bowling
            .map_or(true, |best| figures.is_better_than(&best));
        if improved {
            self.best_bowling = Some(figures);
        }

        self.recompute_rates();
    }

    /// Wickets taken across every innings of one first-class match.
    pub fn record_match_wickets(&mut self, wickets: u32) {
        if wickets >= 10 {
            self.ten_wicket_matches += 1;
        }
    }

    fn recompute_rates(&mut self) {
        let dismissals = self.dismissals();

        self.batting_average = if dismissals > 0 {
            self.runs as f64 / dismissals as f64
        } else {
            self.runs as f64
        };

        self.strike_rate = if self.balls_faced > 0 {
            self.runs as f64 * 100.0 / self.balls_faced as f64
        } else {
            0.0
        };

        self.bowling_average = if self.wickets > 0 {
            self.runs_conceded as f64 / self.wickets as f64
        } else {
            0.0
        };

        self.economy = if self.balls_bowled > 0 {
            self.runs_conceded as f64 * BALLS_PER_OVER as f64 / self.balls_bowled as f64
        } else {
            0.0
        };
    }
}

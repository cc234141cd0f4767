use crate::club::{BatterProfile, Player};
use crate::competition::{MatchFormat, PitchModifiers, ScoreLimits, BALLS_PER_OVER};
use crate::r#match::engine::ball::{BallContext, BallOutcome, BallOutcomeModel};
use crate::r#match::{
    BattingPerformance, BowlingPerformance, Dismissal, Inning, InningsEnd, Matchup,
};
use crate::utils::RandomSource;
use log::{debug, warn};

/// Inputs for one innings. `target` is the number of runs the batting side
/// needs, so a limited-overs chase of 150 carries `Some(151)`.
#[derive(Debug, Clone)]
pub struct InningsSetup<'a> {
    /// 1-based position within the match.
    pub number: usize,
    pub format: MatchFormat,
    pub batting_team_id: u32,
    pub bowling_team_id: u32,
    pub batters: &'a [&'a Player],
    pub bowlers: &'a [&'a Player],
    pub pitch: PitchModifiers,
    pub limits: ScoreLimits,
    pub target: Option<u32>,
}

/// Anything that can turn a setup into a finished innings.
pub trait InningsPlayer {
    fn play(&mut self, setup: &InningsSetup) -> Inning;
}

/// Plays innings ball by ball with the wrapped random source.
pub struct SimulatedInnings<'r, R: RandomSource + ?Sized> {
    rng: &'r mut R,
}

impl<'r, R: RandomSource + ?Sized> SimulatedInnings<'r, R> {
    pub fn new(rng: &'r mut R) -> Self {
        SimulatedInnings { rng }
    }
}

impl<R: RandomSource + ?Sized> InningsPlayer for SimulatedInnings<'_, R> {
    fn play(&mut self, setup: &InningsSetup) -> Inning {
        InningsSimulator::simulate(setup, &mut *self.rng)
    }
}

struct OverState {
    balls: u32,
    runs: u32,
}

pub struct InningsSimulator;

impl InningsSimulator {
    pub fn simulate<R: RandomSource + ?Sized>(setup: &InningsSetup, rng: &mut R) -> Inning {
        let substitute = Player::synthetic_default();

        let wicket_cap = setup.limits.wicket_cap();
        let mut inning = Inning::new(
            setup.number,
            setup.batting_team_id,
            setup.bowling_team_id,
            wicket_cap,
        );

        let mut batters: Vec<&Player> = setup.batters.to_vec();
        let required = wicket_cap as usize + 1;
        if batters.len() < required {
            warn!(
                "team {} fielded {} batters, filling with substitutes",
                setup.batting_team_id,
                batters.len()
            );
            batters.resize(required, &substitute);
        }

        let bowlers: Vec<&Player> = if setup.bowlers.is_empty() {
            warn!("team {} has no bowlers, using a substitute", setup.bowling_team_id);
            vec![&substitute]
        } else {
            setup.bowlers.to_vec()
        };

        inning.batting = batters
            .iter()
            .map(|p| BattingPerformance::new(p.id))
            .collect();
        let mut bowling: Vec<BowlingPerformance> = bowlers
            .iter()
            .map(|p| BowlingPerformance::new(p.id))
            .collect();

        inning.batting[0].did_bat = true;
        inning.batting[1].did_bat = true;

        let mut striker = 0;
        let mut non_striker = 1;
        let mut next_in = 2;
        let mut bowler = 0;
        let mut over = OverState { balls: 0, runs: 0 };

        let max_balls = setup.format.max_balls();
        let over_cap = setup.format.bowler_over_cap();

        loop {
            if let Some(end) = Self::end_reached(&inning, setup, max_balls) {
                inning.end = end;
                break;
            }

            let batter = batters[striker];
            let current = bowlers[bowler];

            let ctx = BallContext {
                profile: BatterProfile::resolve(batter, setup.format),
                batting_style: batter.batting_style,
                batting_skill: batter.batting_skill,
                bowler_role: current.role,
                bowling_skill: current.bowling_skill,
                pitch: &setup.pitch,
                format: setup.format,
                chasing: setup.target.is_some(),
                innings_index: setup.number.saturating_sub(1),
            };

            let outcome = BallOutcomeModel::bowl(&ctx, rng);

            inning.legal_balls += 1;
            over.balls += 1;
            bowling[bowler].balls += 1;

            let performance = &mut inning.batting[striker];
            performance.balls += 1;

            let matchup = Self::matchup(&mut inning.matchups, batter.id, current.id);
            matchup.balls += 1;

            match outcome {
                BallOutcome::Runs(runs) => {
                    matchup.runs += runs;

                    performance.runs += runs;
                    match runs {
                        4 => performance.fours += 1,
                        6 => performance.sixes += 1,
                        _ => {}
                    }
                    if performance.fifty_balls.is_none() && performance.runs >= 50 {
                        performance.fifty_balls = Some(performance.balls);
                    }
                    if performance.hundred_balls.is_none() && performance.runs >= 100 {
                        performance.hundred_balls = Some(performance.balls);
                    }

                    inning.score += runs;
                    bowling[bowler].runs += runs;
                    over.runs += runs;

                    if runs % 2 == 1 {
                        std::mem::swap(&mut striker, &mut non_striker);
                    }
                }
                BallOutcome::Wicket(kind) => {
                    matchup.dismissed = true;

                    performance.dismissal = Dismissal::Out {
                        kind,
                        bowler_id: current.id,
                    };

                    inning.wickets += 1;
                    bowling[bowler].wickets += 1;

                    if inning.wickets < wicket_cap && next_in < inning.batting.len() {
                        inning.batting[next_in].did_bat = true;
                        striker = next_in;
                        next_in += 1;
                    }
                }
            }

            if over.balls == BALLS_PER_OVER {
                if over.runs == 0 {
                    bowling[bowler].maidens += 1;
                }

                std::mem::swap(&mut striker, &mut non_striker);
                over = OverState { balls: 0, runs: 0 };
                bowler = Self::next_bowler(&bowling, bowler, over_cap);
            }
        }

        if setup.format.is_limited_overs() {
            inning.batting.truncate(inning.wickets as usize + 2);
        }

        inning.bowling = bowling.into_iter().filter(|b| b.balls > 0).collect();

        debug!(
            "innings {}: team {} {} ({:?})",
            inning.number,
            inning.batting_team_id,
            inning.scoreline(),
            inning.end
        );

        inning
    }

    fn end_reached(inning: &Inning, setup: &InningsSetup, max_balls: u32) -> Option<InningsEnd> {
        if inning.is_bowled_out() {
            return Some(if setup.limits.has_wicket_override() {
                InningsEnd::LimitReached
            } else {
                InningsEnd::AllOut
            });
        }

        if let Some(target) = setup.target {
            if inning.score >= target {
                return Some(InningsEnd::TargetReached);
            }
        }

        if let Some(max_runs) = setup.limits.max_runs {
            if inning.score >= max_runs {
                return Some(InningsEnd::LimitReached);
            }
        }

        if inning.legal_balls >= max_balls {
            return Some(InningsEnd::OversCompleted);
        }

        None
    }

    /// Round-robin from the bowler after `current`, skipping anyone who has
    /// used up the over cap. When every other bowler is capped the one who
    /// was due keeps the ball.
    pub fn next_bowler(bowling: &[BowlingPerformance], current: usize, over_cap: Option<u32>) -> usize {
        let count = bowling.len();
        if count <= 1 {
            return 0;
        }

        let due = (current + 1) % count;

        (0..count - 1)
            .map(|offset| (due + offset) % count)
            .find(|&index| match over_cap {
                Some(cap) => bowling[index].completed_overs() < cap,
                None => true,
            })
            .unwrap_or(due)
    }

    fn matchup(matchups: &mut Vec<Matchup>, batter_id: u32, bowler_id: u32) -> &mut Matchup {
        let position = matchups
            .iter()
            .position(|m| m.batter_id == batter_id && m.bowler_id == bowler_id);

        match position {
            Some(index) => &mut matchups[index],
            None => {
                matchups.push(Matchup {
                    batter_id,
                    bowler_id,
                    ..Default::default()
                });
                let last = matchups.len() - 1;
                &mut matchups[last]
            }
        }
    }
}

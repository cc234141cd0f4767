use crate::club::{BatterProfile, BattingStyle, PlayerRole};
use crate::competition::{MatchFormat, PitchModifiers};
use crate::r#match::engine::ball::RunDistribution;
use crate::r#match::DismissalKind;
use crate::utils::RandomSource;

const MIN_WICKET_PROBABILITY: f64 = 0.005;
const MAX_WICKET_PROBABILITY: f64 = 0.5;
const SKILL_GAP_DIVISOR: f64 = 500.0;

const BOWLED_SHARE: f64 = 0.35;
const LBW_SHARE: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallOutcome {
    Wicket(DismissalKind),
    Runs(u32),
}

impl BallOutcome {
    pub fn runs(&self) -> u32 {
        match self {
            BallOutcome::Runs(runs) => *runs,
            BallOutcome::Wicket(_) => 0,
        }
    }

    pub fn is_wicket(&self) -> bool {
        matches!(self, BallOutcome::Wicket(_))
    }
}

/// Everything the model needs to know about one delivery.
#[derive(Debug, Clone, Copy)]
pub struct BallContext<'p> {
    pub profile: BatterProfile,
    pub batting_style: BattingStyle,
    pub batting_skill: u8,
    pub bowler_role: PlayerRole,
    pub bowling_skill: u8,
    pub pitch: &'p PitchModifiers,
    pub format: MatchFormat,
    pub chasing: bool,
    /// Zero-based position of the innings in the match.
    pub innings_index: usize,
}

pub struct BallOutcomeModel;

impl BallOutcomeModel {
    pub fn expected_runs_per_ball(ctx: &BallContext) -> f64 {
        let chase = if ctx.chasing {
            ctx.pitch.chase_penalty
        } else {
            1.0
        };

        ctx.profile.strike_rate / 100.0 * ctx.pitch.run_rate * chase
    }

    /// Wicket probability before the unpredictability roll.
    pub fn wicket_probability(ctx: &BallContext) -> f64 {
        let erpb = Self::expected_runs_per_ball(ctx);

        let mut probability = if ctx.profile.average > 0.0 {
            erpb / ctx.profile.average
        } else {
            0.0
        };

        probability +=
            (ctx.bowling_skill as f64 - ctx.batting_skill as f64) / SKILL_GAP_DIVISOR;

        probability += match ctx.bowler_role {
            PlayerRole::PaceBowler => ctx.pitch.pace_bonus / 2.0,
            PlayerRole::SpinBowler => ctx.pitch.spin_bonus / 2.0,
            _ => 0.0,
        };

        if ctx.format == MatchFormat::FirstClass {
            probability += ctx.pitch.deterioration * ctx.innings_index as f64;
        }

        (probability * ctx.pitch.wicket_chance)
            .clamp(MIN_WICKET_PROBABILITY, MAX_WICKET_PROBABILITY)
    }

    pub fn bowl<R: RandomSource + ?Sized>(ctx: &BallContext, rng: &mut R) -> BallOutcome {
        let erpb = Self::expected_runs_per_ball(ctx);
        let mut probability = Self::wicket_probability(ctx);

        if ctx.pitch.unpredictability > 0.0 && rng.next_f64() < ctx.pitch.unpredictability {
            probability = 1.0;
        }

        if rng.next_f64() < probability {
            return BallOutcome::Wicket(Self::dismissal(rng.next_f64()));
        }

        // p < 1 here: a forced wicket always lands in the branch above
        let target = erpb / (1.0 - probability);
        let distribution = RunDistribution::with_expectation(ctx.batting_style, target);

        BallOutcome::Runs(distribution.draw(rng.next_f64()))
    }

    fn dismissal(random: f64) -> DismissalKind {
        if random < BOWLED_SHARE {
            DismissalKind::Bowled
        } else if random < BOWLED_SHARE + LBW_SHARE {
            DismissalKind::Lbw
        } else {
            DismissalKind::Caught
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::SequenceRandom;

    fn context(pitch: &PitchModifiers) -> BallContext<'_> {
        BallContext {
            profile: BatterProfile {
                average: 30.0,
                strike_rate: 120.0,
            },
            batting_style: BattingStyle::Neutral,
            batting_skill: 60,
            bowler_role: PlayerRole::PaceBowler,
            bowling_skill: 60,
            pitch,
            format: MatchFormat::T20,
            chasing: false,
            innings_index: 0,
        }
    }

    #[test]
    fn expected_runs_follow_strike_rate_and_pitch() {
        let pitch = PitchModifiers::NEUTRAL;
        let ctx = context(&pitch);

        assert!((BallOutcomeModel::expected_runs_per_ball(&ctx) - 1.2).abs() < 1e-9);
    }

    #[test]
    fn chase_penalty_applies_only_when_chasing() {
        let pitch = PitchModifiers {
            chase_penalty: 0.5,
            ..PitchModifiers::NEUTRAL
        };
        let mut ctx = context(&pitch);
        let setting = BallOutcomeModel::expected_runs_per_ball(&ctx);

        ctx.chasing = true;
        let chasing = BallOutcomeModel::expected_runs_per_ball(&ctx);

        assert!((chasing - setting * 0.5).abs() < 1e-9);
    }

    #[test]
    fn wicket_probability_is_erpb_over_average_for_even_contest() {
        let pitch = PitchModifiers::NEUTRAL;
        let ctx = context(&pitch);

        assert!((BallOutcomeModel::wicket_probability(&ctx) - 0.04).abs() < 1e-9);
    }

    #[test]
    fn wicket_probability_is_clamped() {
        let pitch = PitchModifiers::NEUTRAL;
        let mut ctx = context(&pitch);

        ctx.profile.average = 0.0;
        ctx.batting_skill = 100;
        ctx.bowling_skill = 0;
        assert_eq!(BallOutcomeModel::wicket_probability(&ctx), MIN_WICKET_PROBABILITY);

        ctx.profile.average = 1.0;
        ctx.batting_skill = 0;
        ctx.bowling_skill = 100;
        assert_eq!(BallOutcomeModel::wicket_probability(&ctx), MAX_WICKET_PROBABILITY);
    }

    #[test]
    fn deterioration_only_counts_in_first_class() {
        let pitch = PitchModifiers {
            deterioration: 0.01,
            ..PitchModifiers::NEUTRAL
        };
        let mut ctx = context(&pitch);
        ctx.innings_index = 3;
        let limited = BallOutcomeModel::wicket_probability(&ctx);

        ctx.format = MatchFormat::FirstClass;
        let first_class = BallOutcomeModel::wicket_probability(&ctx);

        assert!((first_class - limited - 0.03).abs() < 1e-9);
    }

    #[test]
    fn bonus_depends_on_bowler_role() {
        let pitch = PitchModifiers {
            spin_bonus: 0.02,
            ..PitchModifiers::NEUTRAL
        };
        let mut ctx = context(&pitch);
        let pace = BallOutcomeModel::wicket_probability(&ctx);

        ctx.bowler_role = PlayerRole::SpinBowler;
        let spin = BallOutcomeModel::wicket_probability(&ctx);

        assert!((spin - pace - 0.01).abs() < 1e-9);
    }

    #[test]
    fn low_draw_takes_wicket_with_scripted_dismissal() {
        let pitch = PitchModifiers::NEUTRAL;
        let ctx = context(&pitch);

        let mut rng = SequenceRandom::new(vec![0.01, 0.10]);
        assert_eq!(
            BallOutcomeModel::bowl(&ctx, &mut rng),
            BallOutcome::Wicket(DismissalKind::Bowled)
        );

        let mut rng = SequenceRandom::new(vec![0.01, 0.40]);
        assert_eq!(
            BallOutcomeModel::bowl(&ctx, &mut rng),
            BallOutcome::Wicket(DismissalKind::Lbw)
        );

        let mut rng = SequenceRandom::new(vec![0.01, 0.90]);
        assert_eq!(
            BallOutcomeModel::bowl(&ctx, &mut rng),
            BallOutcome::Wicket(DismissalKind::Caught)
        );
    }

    #[test]
    fn high_draws_score_runs() {
        let pitch = PitchModifiers::NEUTRAL;
        let ctx = context(&pitch);

        let mut rng = SequenceRandom::new(vec![0.99, 0.0]);
        assert_eq!(BallOutcomeModel::bowl(&ctx, &mut rng), BallOutcome::Runs(0));
        assert_eq!(rng.consumed(), 2);

        let mut rng = SequenceRandom::new(vec![0.99, 0.999]);
        assert_eq!(BallOutcomeModel::bowl(&ctx, &mut rng), BallOutcome::Runs(6));
    }

    #[test]
    fn unpredictable_pitch_forces_wicket() {
        let pitch = PitchModifiers {
            unpredictability: 0.5,
            ..PitchModifiers::NEUTRAL
        };
        let ctx = context(&pitch);

        // unpredictability roll hits, then even a 0.99 wicket draw takes the wicket
        let mut rng = SequenceRandom::new(vec![0.1, 0.99, 0.9]);
        assert_eq!(
            BallOutcomeModel::bowl(&ctx, &mut rng),
            BallOutcome::Wicket(DismissalKind::Caught)
        );
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn neutral_pitch_skips_unpredictability_roll() {
        let pitch = PitchModifiers::NEUTRAL;
        let ctx = context(&pitch);

        let mut rng = SequenceRandom::new(vec![0.99, 0.5]);
        BallOutcomeModel::bowl(&ctx, &mut rng);

        assert_eq!(rng.consumed(), 2);
    }
}

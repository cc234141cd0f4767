use crate::club::BattingStyle;

/// Scoring values a legal delivery can produce off the bat.
pub const RUN_VALUES: [u32; 6] = [0, 1, 2, 3, 4, 6];

const DOT: usize = 0;
const SINGLE: usize = 1;

/// Probability weights over [`RUN_VALUES`] for a delivery that did not take a wicket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunDistribution {
    weights: [f64; 6],
}

impl RunDistribution {
    pub fn base(style: BattingStyle) -> Self {
        let weights = match style {
            BattingStyle::Aggressive => [0.30, 0.30, 0.10, 0.02, 0.18, 0.10],
            BattingStyle::Defensive => [0.50, 0.35, 0.08, 0.02, 0.04, 0.01],
            BattingStyle::Neutral => [0.40, 0.35, 0.10, 0.02, 0.10, 0.03],
        };

        RunDistribution { weights }
    }

    /// Scales the 2/3/4/6 weights together so the mean lands on `expected`,
    /// then gives the dot ball whatever probability is left over. When the
    /// scaled weights already exceed one the singles weight gives up the
    /// difference instead.
    pub fn with_expectation(style: BattingStyle, expected: f64) -> Self {
        let base = Self::base(style).weights;

        let scalable: f64 = (2..RUN_VALUES.len())
            .map(|i| base[i] * RUN_VALUES[i] as f64)
            .sum();

        let scale = if scalable > 0.0 {
            ((expected - base[SINGLE]) / scalable).max(0.0)
        } else {
            0.0
        };

        let mut weights = base;
        for weight in weights.iter_mut().skip(2) {
            *weight *= scale;
        }

        let scored: f64 = weights.iter().skip(2).sum();
        let dot = 1.0 - weights[SINGLE] - scored;

        if dot < 0.0 {
            weights[DOT] = 0.0;
            weights[SINGLE] = (weights[SINGLE] + dot).max(0.0);
        } else {
            weights[DOT] = dot;
        }

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Self::base(style);
        }

        weights.iter_mut().for_each(|w| *w /= total);

        RunDistribution { weights }
    }

    pub fn weights(&self) -> &[f64; 6] {
        &self.weights
    }

    pub fn expectation(&self) -> f64 {
        self.weights
            .iter()
            .zip(RUN_VALUES.iter())
            .map(|(w, &v)| w * v as f64)
            .sum()
    }

    /// Picks the value whose cumulative band contains `random` (`0 <= random < 1`).
    pub fn draw(&self, random: f64) -> u32 {
        let mut cumulative = 0.0;

        for (index, weight) in self.weights.iter().enumerate() {
            cumulative += weight;
            if random < cumulative {
                return RUN_VALUES[index];
            }
        }

        // rounding left a sliver above the last band
        self.weights
            .iter()
            .rposition(|&w| w > 0.0)
            .map(|index| RUN_VALUES[index])
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLES: [BattingStyle; 3] = [
        BattingStyle::Aggressive,
        BattingStyle::Defensive,
        BattingStyle::Neutral,
    ];

    #[test]
    fn weights_always_sum_to_one() {
        for style in STYLES {
            for step in 0..=60 {
                let expected = step as f64 * 0.05;
                let distribution = RunDistribution::with_expectation(style, expected);
                let total: f64 = distribution.weights().iter().sum();

                assert!((total - 1.0).abs() < 1e-9, "{:?} at {} sums to {}", style, expected, total);
                assert!(distribution.weights().iter().all(|&w| w >= 0.0));
            }
        }
    }

    #[test]
    fn expectation_matches_target_when_reachable() {
        for style in STYLES {
            let distribution = RunDistribution::with_expectation(style, 0.9);
            assert!((distribution.expectation() - 0.9).abs() < 1e-9);
        }
    }

    #[test]
    fn dot_weight_clamps_at_zero_for_extreme_targets() {
        let distribution = RunDistribution::with_expectation(BattingStyle::Aggressive, 5.0);

        assert_eq!(distribution.weights()[0], 0.0);
    }

    #[test]
    fn aggressive_hits_more_boundaries_than_defensive() {
        let aggressive = RunDistribution::base(BattingStyle::Aggressive);
        let defensive = RunDistribution::base(BattingStyle::Defensive);

        assert!(aggressive.weights()[4] + aggressive.weights()[5] > defensive.weights()[4] + defensive.weights()[5]);
        assert!(defensive.weights()[0] > aggressive.weights()[0]);
    }

    #[test]
    fn draw_walks_cumulative_bands() {
        let distribution = RunDistribution::base(BattingStyle::Neutral);

        assert_eq!(distribution.draw(0.0), 0);
        assert_eq!(distribution.draw(0.39), 0);
        assert_eq!(distribution.draw(0.41), 1);
        assert_eq!(distribution.draw(0.80), 2);
        assert_eq!(distribution.draw(0.86), 3);
        assert_eq!(distribution.draw(0.90), 4);
        assert_eq!(distribution.draw(0.99), 6);
    }
}

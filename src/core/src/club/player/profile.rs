use crate::club::{BattingStyle, Player};
use crate::competition::MatchFormat;

/// Expected batting output of a player in a format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatterProfile {
    pub average: f64,
    pub strike_rate: f64,
}

impl BatterProfile {
    pub fn resolve(player: &Player, format: MatchFormat) -> Self {
        match player.custom_profile(format) {
            Some(custom) => BatterProfile {
                average: custom.average.max(0.0),
                strike_rate: custom.strike_rate.max(0.0),
            },
            None => Self::from_skill(player.batting_skill, player.batting_style, format),
        }
    }

    pub fn from_skill(skill: u8, style: BattingStyle, format: MatchFormat) -> Self {
        let skill = skill.min(100) as f64;

        let (average, strike_rate) = match format {
            MatchFormat::T20 => (8.0 + skill * 0.30, 95.0 + skill * 0.55),
            MatchFormat::OneDay => (8.0 + skill * 0.40, 60.0 + skill * 0.40),
            MatchFormat::FirstClass => (8.0 + skill * 0.45, 35.0 + skill * 0.25),
        };

        let (average_factor, strike_rate_factor) = match style {
            BattingStyle::Aggressive => (0.9, 1.15),
            BattingStyle::Defensive => (1.1, 0.85),
            BattingStyle::Neutral => (1.0, 1.0),
        };

        BatterProfile {
            average: average * average_factor,
            strike_rate: strike_rate * strike_rate_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::CustomProfile;

    #[test]
    fn skill_maps_linearly_per_format() {
        let profile = BatterProfile::from_skill(50, BattingStyle::Neutral, MatchFormat::OneDay);

        assert!((profile.average - 28.0).abs() < 1e-9);
        assert!((profile.strike_rate - 80.0).abs() < 1e-9);
    }

    #[test]
    fn aggressive_trades_average_for_strike_rate() {
        let neutral = BatterProfile::from_skill(70, BattingStyle::Neutral, MatchFormat::T20);
        let aggressive = BatterProfile::from_skill(70, BattingStyle::Aggressive, MatchFormat::T20);
        let defensive = BatterProfile::from_skill(70, BattingStyle::Defensive, MatchFormat::T20);

        assert!(aggressive.strike_rate > neutral.strike_rate);
        assert!(aggressive.average < neutral.average);
        assert!(defensive.strike_rate < neutral.strike_rate);
        assert!(defensive.average > neutral.average);
    }

    #[test]
    fn custom_profile_overrides_skill() {
        let mut player = Player::synthetic_default();
        player.custom_profiles.push(CustomProfile {
            format: MatchFormat::FirstClass,
            average: 55.5,
            strike_rate: 48.0,
        });

        let profile = BatterProfile::resolve(&player, MatchFormat::FirstClass);
        assert_eq!(profile, BatterProfile { average: 55.5, strike_rate: 48.0 });

        let fallback = BatterProfile::resolve(&player, MatchFormat::T20);
        assert_eq!(fallback, BatterProfile::from_skill(40, BattingStyle::Neutral, MatchFormat::T20));
    }
}

use crate::club::player::builder::PlayerBuilder;
use crate::competition::MatchFormat;
use crate::PlayerStatistics;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

pub const SYNTHETIC_PLAYER_ID: u32 = 0;

const SYNTHETIC_SKILL: u8 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerRole {
    Batter,
    WicketKeeper,
    AllRounder,
    SpinBowler,
    PaceBowler,
}

impl PlayerRole {
    pub fn is_specialist_bowler(&self) -> bool {
        matches!(self, PlayerRole::SpinBowler | PlayerRole::PaceBowler)
    }

    pub fn can_bowl(&self) -> bool {
        matches!(
            self,
            PlayerRole::AllRounder | PlayerRole::SpinBowler | PlayerRole::PaceBowler
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BattingStyle {
    Aggressive,
    Defensive,
    #[default]
    Neutral,
}

/// Hand-tuned batting expectation that replaces the skill-derived profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CustomProfile {
    pub format: MatchFormat,
    pub average: f64,
    pub strike_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub full_name: String,
    pub role: PlayerRole,

    /// 0..=100
    pub batting_skill: u8,
    /// 0..=100
    pub bowling_skill: u8,
    pub batting_style: BattingStyle,

    #[serde(default)]
    pub custom_profiles: Vec<CustomProfile>,

    #[serde(default)]
    pub statistics: PlayerStatistics,
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    /// Stand-in used when a lineup slot has no real player behind it.
    pub fn synthetic_default() -> Player {
        Player {
            id: SYNTHETIC_PLAYER_ID,
            full_name: String::from("Substitute"),
            role: PlayerRole::AllRounder,
            batting_skill: SYNTHETIC_SKILL,
            bowling_skill: SYNTHETIC_SKILL,
            batting_style: BattingStyle::Neutral,
            custom_profiles: Vec::new(),
            statistics: PlayerStatistics::default(),
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.id == SYNTHETIC_PLAYER_ID
    }

    pub fn custom_profile(&self, format: MatchFormat) -> Option<&CustomProfile> {
        self.custom_profiles.iter().find(|p| p.format == format)
    }

    pub fn combined_skill(&self) -> u16 {
        self.batting_skill as u16 + self.bowling_skill as u16
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthetic_default_is_flagged() {
        let player = Player::synthetic_default();

        assert!(player.is_synthetic());
        assert_eq!(player.batting_skill, 40);
        assert!(player.role.can_bowl());
    }

    #[test]
    fn custom_profile_lookup_is_per_format() {
        let mut player = Player::synthetic_default();
        player.custom_profiles.push(CustomProfile {
            format: MatchFormat::T20,
            average: 31.0,
            strike_rate: 142.0,
        });

        assert!(player.custom_profile(MatchFormat::T20).is_some());
        assert!(player.custom_profile(MatchFormat::FirstClass).is_none());
    }

    #[test]
    fn roles_that_bowl() {
        assert!(!PlayerRole::Batter.can_bowl());
        assert!(!PlayerRole::WicketKeeper.can_bowl());
        assert!(PlayerRole::AllRounder.can_bowl());
        assert!(!PlayerRole::AllRounder.is_specialist_bowler());
        assert!(PlayerRole::PaceBowler.is_specialist_bowler());
    }
}

use crate::club::{BattingStyle, CustomProfile, PlayerRole};
use crate::{Player, PlayerStatistics};

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<u32>,
    full_name: Option<String>,
    role: Option<PlayerRole>,
    batting_skill: Option<u8>,
    bowling_skill: Option<u8>,
    batting_style: Option<BattingStyle>,
    custom_profiles: Vec<CustomProfile>,
    statistics: Option<PlayerStatistics>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn role(mut self, role: PlayerRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn batting_skill(mut self, batting_skill: u8) -> Self {
        self.batting_skill = Some(batting_skill);
        self
    }

    pub fn bowling_skill(mut self, bowling_skill: u8) -> Self {
        self.bowling_skill = Some(bowling_skill);
        self
    }

    pub fn batting_style(mut self, batting_style: BattingStyle) -> Self {
        self.batting_style = Some(batting_style);
        self
    }

    pub fn custom_profile(mut self, profile: CustomProfile) -> Self {
        self.custom_profiles.retain(|p| p.format != profile.format);
        self.custom_profiles.push(profile);
        self
    }

    pub fn statistics(mut self, statistics: PlayerStatistics) -> Self {
        self.statistics = Some(statistics);
        self
    }

    pub fn build(self) -> Result<Player, String> {
        let id = self.id.ok_or("id is required")?;
        if id == crate::SYNTHETIC_PLAYER_ID {
            return Err(format!("id {} is reserved", id));
        }

        Ok(Player {
            id,
            full_name: self.full_name.ok_or("full_name is required")?,
            role: self.role.ok_or("role is required")?,
            batting_skill: self.batting_skill.ok_or("batting_skill is required")?.min(100),
            bowling_skill: self.bowling_skill.ok_or("bowling_skill is required")?.min(100),
            batting_style: self.batting_style.unwrap_or_default(),
            custom_profiles: self.custom_profiles,
            statistics: self.statistics.unwrap_or_default(),
        })
    }
}

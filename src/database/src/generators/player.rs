use crate::NamesEntity;
use cricket_core::{BatterProfile, BattingStyle, CustomProfile, MatchFormat, Player, PlayerRole};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

/// Squad make-up for a generated team, in roster order.
pub const SQUAD_ROLES: [PlayerRole; 15] = [
    PlayerRole::Batter,
    PlayerRole::Batter,
    PlayerRole::Batter,
    PlayerRole::Batter,
    PlayerRole::Batter,
    PlayerRole::Batter,
    PlayerRole::WicketKeeper,
    PlayerRole::WicketKeeper,
    PlayerRole::AllRounder,
    PlayerRole::AllRounder,
    PlayerRole::AllRounder,
    PlayerRole::PaceBowler,
    PlayerRole::PaceBowler,
    PlayerRole::SpinBowler,
    PlayerRole::SpinBowler,
];

const SKILL_SPREAD: i32 = 12;
const STAR_BATTER_SKILL: u8 = 78;

pub struct PlayerGenerator<'n> {
    names: &'n NamesEntity,
    rng: StdRng,
    next_id: u32,
}

impl<'n> PlayerGenerator<'n> {
    pub fn new(names: &'n NamesEntity, seed: u64) -> Self {
        PlayerGenerator {
            names,
            rng: StdRng::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn generate_squad(&mut self, strength: u8) -> Result<Vec<Player>, String> {
        SQUAD_ROLES
            .iter()
            .map(|&role| self.generate(role, strength))
            .collect()
    }

    pub fn generate(&mut self, role: PlayerRole, strength: u8) -> Result<Player, String> {
        let strength = strength.min(100) as i32;

        let (batting, bowling) = match role {
            PlayerRole::Batter => (self.around(strength), self.between(5, 25)),
            PlayerRole::WicketKeeper => (self.around(strength - 5), self.between(1, 10)),
            PlayerRole::AllRounder => (self.around(strength - 10), self.around(strength - 5)),
            PlayerRole::SpinBowler | PlayerRole::PaceBowler => (self.between(10, 35), self.around(strength)),
        };

        let style = match self.rng.random::<f64>() {
            roll if roll < 0.30 => BattingStyle::Aggressive,
            roll if roll < 0.55 => BattingStyle::Defensive,
            _ => BattingStyle::Neutral,
        };

        let id = self.next_id;
        self.next_id += 1;

        let mut builder = Player::builder()
            .id(id)
            .full_name(self.full_name(id))
            .role(role)
            .batting_skill(batting)
            .bowling_skill(bowling)
            .batting_style(style);

        // standout white-ball hitters get a hand-tuned T20 profile
        if role == PlayerRole::Batter && batting >= STAR_BATTER_SKILL {
            let profile = BatterProfile::from_skill(batting, style, MatchFormat::T20);
            builder = builder.custom_profile(CustomProfile {
                format: MatchFormat::T20,
                average: profile.average * 1.1,
                strike_rate: profile.strike_rate * 1.1,
            });
        }

        builder.build()
    }

    fn around(&mut self, centre: i32) -> u8 {
        let skill = centre + self.rng.random_range(-SKILL_SPREAD..=SKILL_SPREAD);
        skill.clamp(1, 100) as u8
    }

    fn between(&mut self, low: u8, high: u8) -> u8 {
        self.rng.random_range(low..=high)
    }

    fn full_name(&mut self, id: u32) -> String {
        let first = &self.names.first_names;
        let last = &self.names.last_names;

        if first.is_empty() || last.is_empty() {
            return format!("Player {}", id);
        }

        let first_index = self.rng.random_range(0..first.len());
        let last_index = self.rng.random_range(0..last.len());

        format!("{} {}", first[first_index], last[last_index])
    }
}

use crate::Player;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    /// Code of the home ground; matches are played at the home side's venue.
    pub venue: String,
    pub players: Vec<Player>,

    /// Running total fed to the sponsorship system.
    #[serde(default)]
    pub popularity: u32,
}

impl Team {
    pub fn new(id: u32, name: impl Into<String>, venue: impl Into<String>, players: Vec<Player>) -> Self {
        Team {
            id,
            name: name.into(),
            venue: venue.into(),
            players,
            popularity: 0,
        }
    }

    pub fn player(&self, player_id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn player_mut(&mut self, player_id: u32) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub fn add_popularity(&mut self, points: u32) {
        self.popularity = self.popularity.saturating_add(points);
    }
}

use crate::competition::Competition;
use crate::league::FixtureId;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A fixture slot (league position or knockout winner) has no team behind it yet.
    UnresolvedTeam { fixture: FixtureId, slot: String },
    /// The slot resolved to a team id that is not part of the season roster.
    MissingTeam { fixture: FixtureId, team_id: u32 },
    UnknownCompetition(Competition),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimulationError::UnresolvedTeam { fixture, slot } => {
                write!(f, "Fixture {}: team slot '{}' cannot be resolved", fixture, slot)
            }
            SimulationError::MissingTeam { fixture, team_id } => {
                write!(f, "Fixture {}: team {} has no roster data", fixture, team_id)
            }
            SimulationError::UnknownCompetition(competition) => {
                write!(f, "Competition '{}' is not part of the season", competition)
            }
        }
    }
}

impl std::error::Error for SimulationError {}

pub type Result<T> = std::result::Result<T, SimulationError>;

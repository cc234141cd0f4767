use crate::error::{Result, SimulationError};
use crate::league::{FixtureId, LeagueTable, TeamSlot};
use crate::r#match::MatchResult;

/// Turns a fixture slot into a concrete team id using the current table and
/// the results played so far.
pub struct SlotResolver;

impl SlotResolver {
    pub fn resolve(
        slot: &TeamSlot,
        fixture: FixtureId,
        table: &LeagueTable,
        results: &[MatchResult],
    ) -> Result<u32> {
        let resolved = match slot {
            TeamSlot::Team(team_id) => Some(*team_id),
            TeamSlot::LeaguePosition(position) => table.team_at(*position as usize),
            TeamSlot::WinnerOf(source) => results
                .iter()
                .find(|result| result.fixture_id == *source)
                .and_then(|result| result.winner()),
        };

        resolved.ok_or_else(|| SimulationError::UnresolvedTeam {
            fixture,
            slot: slot.to_string(),
        })
    }
}

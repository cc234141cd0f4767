//! Match simulation and season management core of the cricket career game.
//!
//! The crate is organised the way a season flows: [`league::ScheduleGenerator`]
//! builds fixtures, [`season::simulate_fixture_for_format`] resolves and plays
//! one of them through [`r#match::MatchEngine`], and [`season::apply_result`]
//! folds the outcome back into a new [`season::SeasonSnapshot`].

pub mod club;
pub mod competition;
pub mod error;
pub mod league;
pub mod r#match;
pub mod season;
pub mod utils;

pub use club::{
    BattingStyle, BatterProfile, BowlingFigures, CustomProfile, FormatStatistics, Player,
    PlayerBuilder, PlayerRole, PlayerStatistics, Team, SYNTHETIC_PLAYER_ID,
};

pub use competition::{
    Competition, InningsLimit, MatchFormat, PitchModifiers, PitchType, ScoreLimits, Venue,
    VenueProvider, BALLS_PER_OVER, MAX_WICKETS,
};

pub use error::{Result, SimulationError};

pub use league::{
    Fixture, FixtureId, HistoricalRecords, LeagueResult, LeagueTable, LeagueTableRow,
    PopularityCalculator, ScheduleGenerator, SlotResolver, Stage, TeamSlot,
};

pub use r#match::{
    BallOutcome, BallOutcomeModel, BattingPerformance, BestPerformance, BowlingPerformance,
    Dismissal, DismissalKind, Inning, InningsEnd, InningsSimulator, Margin, MatchEngine,
    MatchOutcome, MatchResult, RunDistribution, SquadSelector,
};

pub use season::{
    apply_result, build_season_schedule, simulate_fixture_for_format, CompetitionState,
    SeasonSimulator, SeasonSnapshot,
};

pub use utils::{Logging, RandomSource, SeededRandom, SequenceRandom, TimeEstimation};

use crate::competition::{Competition, PitchModifiers, VenueProvider};
use crate::error::{Result, SimulationError};
use crate::league::{Fixture, LeagueResult, LeagueTable, ScheduleGenerator};
use crate::r#match::{MatchEngine, MatchResult, MatchSetup, MatchSide, SquadSelector};
use crate::season::SeasonSnapshot;
use crate::utils::RandomSource;
use chrono::{Datelike, Months};
use itertools::Itertools;
use log::{debug, info, warn};

pub fn build_season_schedule(team_ids: &[u32], competition: Competition, start: chrono::NaiveDate) -> Vec<Fixture> {
    ScheduleGenerator::generate(team_ids, competition.format, start)
}

/// Resolves both slots of a fixture against the snapshot, picks the XIs and
/// plays the match. Fails when a slot has no team or the team has no roster.
pub fn simulate_fixture_for_format<R: RandomSource + ?Sized>(
    fixture: &Fixture,
    competition: Competition,
    snapshot: &SeasonSnapshot,
    rng: &mut R,
) -> Result<MatchResult> {
    let state = snapshot
        .competition(competition)
        .ok_or(SimulationError::UnknownCompetition(competition))?;

    let home_id = state.resolve_slot(&fixture.home, fixture.id)?;
    let away_id = state.resolve_slot(&fixture.away, fixture.id)?;

    let team = |team_id: u32| {
        snapshot.team(team_id).ok_or(SimulationError::MissingTeam {
            fixture: fixture.id,
            team_id,
        })
    };
    let (home, away) = (team(home_id)?, team(away_id)?);

    let format = competition.format;
    let home_lineup = SquadSelector::select(home, format);
    let away_lineup = SquadSelector::select(away, format);

    let venues = snapshot.venues.as_slice();
    let pitch = venues.pitch(&home.venue);
    let limits = (1..=format.innings_per_match())
        .map(|innings| venues.score_limits(&home.venue, format, innings))
        .collect();

    let setup = MatchSetup {
        fixture_id: fixture.id,
        competition,
        stage: fixture.stage,
        home: MatchSide {
            team: home,
            batting_order: home_lineup.batting_order,
            bowlers: home_lineup.bowlers,
            standing: state.table.position(home_id),
        },
        away: MatchSide {
            team: away,
            batting_order: away_lineup.batting_order,
            bowlers: away_lineup.bowlers,
            standing: state.table.position(away_id),
        },
        venue: home.venue.clone(),
        pitch: PitchModifiers::for_pitch(pitch, format),
        limits,
    };

    Ok(MatchEngine::play(&setup, rng))
}

/// Returns a new snapshot with the result merged in; the input is untouched.
pub fn apply_result(result: MatchResult, snapshot: &SeasonSnapshot) -> Result<SeasonSnapshot> {
    let mut next = snapshot.clone();
    LeagueResult::new(result).process(&mut next)?;
    Ok(next)
}

pub struct SeasonSimulator;

impl SeasonSimulator {
    pub fn schedule_season(snapshot: &mut SeasonSnapshot) {
        let start = snapshot.start_date;

        for state in snapshot.competitions.iter_mut() {
            state.schedule = build_season_schedule(&state.team_ids, state.competition, start);
        }
    }

    /// Plays every fixture of every competition in date order. Fixtures on
    /// the same day keep competition order. The first error ends the season.
    pub fn play_season<R: RandomSource + ?Sized>(mut snapshot: SeasonSnapshot, rng: &mut R) -> Result<SeasonSnapshot> {
        if snapshot.competitions.iter().any(|c| c.schedule.is_empty()) {
            Self::schedule_season(&mut snapshot);
        }

        info!("🏏 Season {} starts on {}", snapshot.season, snapshot.start_date);

        let fixtures: Vec<(Competition, Fixture)> = snapshot
            .competitions
            .iter()
            .flat_map(|state| state.schedule.iter().map(move |f| (state.competition, f.clone())))
            .sorted_by_key(|(_, fixture)| fixture.date)
            .collect();

        for (competition, fixture) in &fixtures {
            let result = simulate_fixture_for_format(fixture, *competition, &snapshot, rng)?;
            debug!("{} {} on {}: {}", competition, fixture.id, fixture.date, result.summary);

            LeagueResult::new(result).process(&mut snapshot)?;
        }

        for state in &snapshot.competitions {
            let champion = state
                .champion()
                .and_then(|id| snapshot.team(id))
                .map(|team| team.name.as_str())
                .unwrap_or("nobody");

            info!("🏆 {} won by {}", state.competition, champion);
        }

        Ok(snapshot)
    }

    /// Promotion and relegation, then a clean slate for the next season.
    /// Between each pair of adjacent tiers the bottom side of the upper tier
    /// swaps places with the top side of the lower one.
    pub fn rollover(mut snapshot: SeasonSnapshot) -> SeasonSnapshot {
        let tables: Vec<(Competition, LeagueTable)> = snapshot
            .competitions
            .iter()
            .map(|state| (state.competition, state.table.clone()))
            .collect();

        let table_of = |competition: Competition| {
            tables
                .iter()
                .find(|(c, _)| *c == competition)
                .map(|(_, table)| table)
        };

        for (upper, upper_table) in &tables {
            let Some(lower) = upper.lower() else {
                continue;
            };

            let relegated = upper_table.bottom();
            let promoted = table_of(lower).and_then(|table| table.top());

            let (Some(relegated), Some(promoted)) = (relegated, promoted) else {
                warn!("{}: no promotion or relegation possible", upper);
                continue;
            };

            if relegated == promoted {
                continue;
            }

            Self::replace_member(&mut snapshot, *upper, relegated, promoted);
            Self::replace_member(&mut snapshot, lower, promoted, relegated);

            info!(
                "⬆️ {} up to {}, ⬇️ {} down to {}",
                Self::team_name(&snapshot, promoted),
                upper,
                Self::team_name(&snapshot, relegated),
                lower
            );
        }

        for state in snapshot.competitions.iter_mut() {
            state.reset();
        }

        snapshot.season += 1;
        snapshot.start_date = snapshot
            .start_date
            .checked_add_months(Months::new(12))
            .unwrap_or(snapshot.start_date);

        info!(
            "📅 Season {} begins {}",
            snapshot.season,
            snapshot.start_date.year()
        );

        snapshot
    }

    fn replace_member(snapshot: &mut SeasonSnapshot, competition: Competition, from: u32, to: u32) {
        if let Some(state) = snapshot.competition_mut(competition) {
            for team_id in state.team_ids.iter_mut().filter(|id| **id == from) {
                *team_id = to;
            }
        }
    }

    fn team_name(snapshot: &SeasonSnapshot, team_id: u32) -> String {
        snapshot
            .team(team_id)
            .map(|team| team.name.clone())
            .unwrap_or_else(|| format!("team {}", team_id))
    }
}

use crate::competition::MatchFormat;
use chrono::{Duration, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const KNOCKOUT_GAP_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FixtureId {
    Round(u32),
    SemiFinal(u8),
    Final,
}

impl Display for FixtureId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FixtureId::Round(number) => write!(f, "{}", number),
            FixtureId::SemiFinal(number) => write!(f, "SF{}", number),
            FixtureId::Final => write!(f, "Final"),
        }
    }
}

/// Who plays in a fixture. Knockout slots stay symbolic until the fixture
/// is about to be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamSlot {
    Team(u32),
    /// 1-based league position.
    LeaguePosition(u8),
    WinnerOf(FixtureId),
}

impl Display for TeamSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamSlot::Team(team_id) => write!(f, "team {}", team_id),
            TeamSlot::LeaguePosition(position) => {
                let suffix = match (position % 10, position % 100) {
                    (_, 11..=13) => "th",
                    (1, _) => "st",
                    (2, _) => "nd",
                    (3, _) => "rd",
                    _ => "th",
                };
                write!(f, "{}{}", position, suffix)
            }
            TeamSlot::WinnerOf(fixture) => write!(f, "{} W", fixture),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    RoundRobin,
    SemiFinal,
    Final,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub home: TeamSlot,
    pub away: TeamSlot,
    pub date: NaiveDate,
    pub stage: Stage,
}

pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Double round-robin followed by two semi-finals and a final.
    pub fn generate(team_ids: &[u32], format: MatchFormat, start: NaiveDate) -> Vec<Fixture> {
        let interval = Duration::days(format.match_day_interval());

        let first_leg = Self::round_robin_pairings(team_ids);
        let rounds = first_leg.len();

        let second_leg = first_leg
            .iter()
            .map(|round| round.iter().map(|&(home, away)| (away, home)).collect::<Vec<_>>());

        let mut fixtures: Vec<Fixture> = first_leg
            .iter()
            .cloned()
            .chain(second_leg)
            .enumerate()
            .flat_map(|(round, pairings)| {
                let date = start + interval * round as i32;
                pairings.into_iter().map(move |(home, away)| (date, home, away))
            })
            .enumerate()
            .map(|(index, (date, home, away))| Fixture {
                id: FixtureId::Round(index as u32 + 1),
                home: TeamSlot::Team(home),
                away: TeamSlot::Team(away),
                date,
                stage: Stage::RoundRobin,
            })
            .collect();

        let gap = Duration::days(KNOCKOUT_GAP_DAYS);
        let semi_final_date = fixtures.last().map(|f| f.date).unwrap_or(start) + gap;
        let final_date = semi_final_date + gap;

        fixtures.push(Fixture {
            id: FixtureId::SemiFinal(1),
            home: TeamSlot::LeaguePosition(1),
            away: TeamSlot::LeaguePosition(4),
            date: semi_final_date,
            stage: Stage::SemiFinal,
        });
        fixtures.push(Fixture {
            id: FixtureId::SemiFinal(2),
            home: TeamSlot::LeaguePosition(2),
            away: TeamSlot::LeaguePosition(3),
            date: semi_final_date,
            stage: Stage::SemiFinal,
        });
        fixtures.push(Fixture {
            id: FixtureId::Final,
            home: TeamSlot::WinnerOf(FixtureId::SemiFinal(1)),
            away: TeamSlot::WinnerOf(FixtureId::SemiFinal(2)),
            date: final_date,
            stage: Stage::Final,
        });

        debug!(
            "scheduled {} fixtures over {} rounds for {} teams",
            fixtures.len(),
            rounds * 2,
            team_ids.len()
        );

        fixtures
    }

    /// Single leg of the circle method. The first seat stays put while the
    /// others rotate one place per round; an odd field gets an empty seat
    /// and whoever faces it sits the round out.
    pub fn round_robin_pairings(team_ids: &[u32]) -> Vec<Vec<(u32, u32)>> {
        if team_ids.len() < 2 {
            return Vec::new();
        }

        let mut seats: Vec<Option<u32>> = team_ids.iter().copied().map(Some).collect();
        if seats.len() % 2 == 1 {
            seats.push(None);
        }

        let seat_count = seats.len();
        let mut rounds = Vec::with_capacity(seat_count - 1);

        for round in 0..seat_count - 1 {
            let mut pairings = Vec::with_capacity(seat_count / 2);

            for index in 0..seat_count / 2 {
                let (mut home, mut away) = (seats[index], seats[seat_count - 1 - index]);

                // keeps the fixed seat from hosting every first-leg match
                if index == 0 && round % 2 == 1 {
                    std::mem::swap(&mut home, &mut away);
                }

                if let (Some(home), Some(away)) = (home, away) {
                    pairings.push((home, away));
                }
            }

            rounds.push(pairings);
            seats[1..].rotate_right(1);
        }

        rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    fn league_fixtures(fixtures: &[Fixture]) -> Vec<&Fixture> {
        fixtures.iter().filter(|f| f.stage == Stage::RoundRobin).collect()
    }

    fn team_of(slot: TeamSlot) -> u32 {
        match slot {
            TeamSlot::Team(id) => id,
            other => panic!("unexpected placeholder {}", other),
        }
    }

    #[test]
    fn four_teams_play_twelve_league_games_and_three_knockouts() {
        let fixtures = ScheduleGenerator::generate(&[1, 2, 3, 4], MatchFormat::T20, start());

        assert_eq!(fixtures.len(), 15);
        assert_eq!(league_fixtures(&fixtures).len(), 12);

        for team in 1..=4 {
            let home = league_fixtures(&fixtures).iter().filter(|f| team_of(f.home) == team).count();
            let away = league_fixtures(&fixtures).iter().filter(|f| team_of(f.away) == team).count();

            assert_eq!(home, 3, "team {} home games", team);
            assert_eq!(away, 3, "team {} away games", team);
        }
    }

    #[test]
    fn every_pair_meets_once_each_way() {
        let fixtures = ScheduleGenerator::generate(&[1, 2, 3, 4, 5, 6], MatchFormat::OneDay, start());

        let pairs: HashSet<(u32, u32)> = league_fixtures(&fixtures)
            .iter()
            .map(|f| (team_of(f.home), team_of(f.away)))
            .collect();

        assert_eq!(pairs.len(), 30);
        assert!(pairs.iter().all(|(home, away)| home != away));
    }

    #[test]
    fn odd_field_uses_a_bye() {
        let rounds = ScheduleGenerator::round_robin_pairings(&[1, 2, 3, 4, 5]);

        assert_eq!(rounds.len(), 5);
        assert!(rounds.iter().all(|round| round.len() == 2));

        let fixtures = ScheduleGenerator::generate(&[1, 2, 3, 4, 5], MatchFormat::T20, start());
        assert_eq!(fixtures.len(), 2 * 2 * 5 + 3);
    }

    #[test]
    fn round_numbers_are_sequential() {
        let fixtures = ScheduleGenerator::generate(&[1, 2, 3, 4, 5, 6], MatchFormat::FirstClass, start());

        let numbers: Vec<u32> = fixtures
            .iter()
            .filter_map(|f| match f.id {
                FixtureId::Round(number) => Some(number),
                _ => None,
            })
            .collect();

        assert_eq!(numbers, (1..=30).collect::<Vec<u32>>());
    }

    #[test]
    fn dates_follow_format_interval_and_knockout_gap() {
        let fixtures = ScheduleGenerator::generate(&[1, 2, 3, 4], MatchFormat::FirstClass, start());

        assert_eq!(fixtures[0].date, start());
        // six rounds, a week apart
        let last_league = league_fixtures(&fixtures).last().unwrap().date;
        assert_eq!(last_league, start() + Duration::days(35));

        let semi = &fixtures[12];
        assert_eq!(semi.id, FixtureId::SemiFinal(1));
        assert_eq!(semi.date, last_league + Duration::days(7));
        assert_eq!(fixtures[14].id, FixtureId::Final);
        assert_eq!(fixtures[14].date, semi.date + Duration::days(7));
    }

    #[test]
    fn second_leg_mirrors_first_leg() {
        let fixtures = ScheduleGenerator::generate(&[1, 2, 3, 4], MatchFormat::T20, start());
        let league = league_fixtures(&fixtures);

        for (first, second) in league[..6].iter().zip(league[6..].iter()) {
            assert_eq!(first.home, second.away);
            assert_eq!(first.away, second.home);
            assert_eq!(second.date - first.date, Duration::days(9));
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let teams = [7, 3, 9, 1, 12];

        assert_eq!(
            ScheduleGenerator::generate(&teams, MatchFormat::OneDay, start()),
            ScheduleGenerator::generate(&teams, MatchFormat::OneDay, start())
        );
    }

    #[test]
    fn placeholders_render_as_tokens() {
        let fixtures = ScheduleGenerator::generate(&[1, 2, 3, 4], MatchFormat::T20, start());

        assert_eq!(fixtures[12].home.to_string(), "1st");
        assert_eq!(fixtures[12].away.to_string(), "4th");
        assert_eq!(fixtures[13].home.to_string(), "2nd");
        assert_eq!(fixtures[13].away.to_string(), "3rd");
        assert_eq!(fixtures[14].home.to_string(), "SF1 W");
        assert_eq!(FixtureId::Round(12).to_string(), "12");
    }
}

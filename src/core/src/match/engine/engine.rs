use crate::club::{Player, Team};
use crate::competition::{Competition, PitchModifiers, ScoreLimits};
use crate::league::{FixtureId, Stage};
use crate::r#match::engine::innings::{InningsPlayer, InningsSetup, SimulatedInnings};
use crate::r#match::{BestPerformanceAward, Inning, Margin, MatchOutcome, MatchResult};
use crate::utils::RandomSource;
use log::debug;

/// One side of a fixture: the team plus the XI chosen for it.
#[derive(Debug, Clone)]
pub struct MatchSide<'a> {
    pub team: &'a Team,
    pub batting_order: Vec<&'a Player>,
    pub bowlers: Vec<&'a Player>,
    /// 0-based league position; `None` ranks below every placed team.
    pub standing: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct MatchSetup<'a> {
    pub fixture_id: FixtureId,
    pub competition: Competition,
    pub stage: Stage,
    /// Bats first.
    pub home: MatchSide<'a>,
    pub away: MatchSide<'a>,
    pub venue: String,
    pub pitch: PitchModifiers,
    /// Indexed by innings position; missing entries mean no limits.
    pub limits: Vec<ScoreLimits>,
}

impl MatchSetup<'_> {
    fn limits_for(&self, number: usize) -> ScoreLimits {
        self.limits.get(number - 1).copied().unwrap_or_default()
    }
}

pub struct MatchEngine;

impl MatchEngine {
    pub fn play<R: RandomSource + ?Sized>(setup: &MatchSetup, rng: &mut R) -> MatchResult {
        let mut innings_player = SimulatedInnings::new(rng);
        Self::play_with(setup, &mut innings_player)
    }

    pub fn play_with<P: InningsPlayer + ?Sized>(setup: &MatchSetup, innings_player: &mut P) -> MatchResult {
        let format = setup.competition.format;

        let (innings, outcome) = if format.is_limited_overs() {
            Self::play_limited_overs(setup, innings_player)
        } else {
            Self::play_first_class(setup, innings_player)
        };

        let outcome = match outcome {
            MatchOutcome::Tie | MatchOutcome::Draw if setup.stage != Stage::RoundRobin => {
                Self::decide_on_standing(&setup.home, &setup.away)
            }
            outcome => outcome,
        };

        let best_performance = BestPerformanceAward::select(&innings, &[setup.home.team, setup.away.team]);
        let summary = Self::summary(setup, &innings, &outcome);

        debug!("{} {}: {}", setup.competition, setup.fixture_id, summary);

        MatchResult {
            fixture_id: setup.fixture_id,
            competition: setup.competition,
            stage: setup.stage,
            home_team_id: setup.home.team.id,
            away_team_id: setup.away.team.id,
            venue: setup.venue.clone(),
            outcome,
            summary,
            innings,
            best_performance,
            home_lineup: setup.home.batting_order.iter().map(|p| p.id).collect(),
            away_lineup: setup.away.batting_order.iter().map(|p| p.id).collect(),
        }
    }

    fn play_limited_overs<P: InningsPlayer + ?Sized>(
        setup: &MatchSetup,
        innings_player: &mut P,
    ) -> (Vec<Inning>, MatchOutcome) {
        let first = innings_player.play(&Self::innings(setup, 1, &setup.home, &setup.away, None));

        let target = first.score + 1;
        let second = innings_player.play(&Self::innings(setup, 2, &setup.away, &setup.home, Some(target)));

        let outcome = Self::decide_limited_overs(&first, &second);

        (vec![first, second], outcome)
    }

    pub fn decide_limited_overs(first: &Inning, second: &Inning) -> MatchOutcome {
        if second.score > first.score {
            MatchOutcome::Win {
                winner: second.batting_team_id,
                loser: first.batting_team_id,
                margin: Margin::Wickets(second.wickets_in_hand()),
            }
        } else if first.score > second.score {
            MatchOutcome::Win {
                winner: first.batting_team_id,
                loser: second.batting_team_id,
                margin: Margin::Runs(first.score - second.score),
            }
        } else {
            MatchOutcome::Tie
        }
    }

    fn play_first_class<P: InningsPlayer + ?Sized>(
        setup: &MatchSetup,
        innings_player: &mut P,
    ) -> (Vec<Inning>, MatchOutcome) {
        let (home, away) = (&setup.home, &setup.away);

        let first = innings_player.play(&Self::innings(setup, 1, home, away, None));
        let second = innings_player.play(&Self::innings(setup, 2, away, home, None));

        let lead = second.score as i64 - first.score as i64;

        let third = innings_player.play(&Self::innings(setup, 3, home, away, None));

        if lead > 0 && third.is_bowled_out() && (third.score as i64) < lead {
            let outcome = MatchOutcome::Win {
                winner: away.team.id,
                loser: home.team.id,
                margin: Margin::InningsAndRuns((lead - third.score as i64) as u32),
            };

            return (vec![first, second, third], outcome);
        }

        let required = (third.score as i64 - lead + 1).max(0) as u32;
        let fourth = innings_player.play(&Self::innings(setup, 4, away, home, Some(required)));

        let outcome = if fourth.score >= required {
            MatchOutcome::Win {
                winner: away.team.id,
                loser: home.team.id,
                margin: Margin::Wickets(fourth.wickets_in_hand()),
            }
        } else if fourth.is_bowled_out() {
            if fourth.score + 1 == required {
                MatchOutcome::Tie
            } else {
                MatchOutcome::Win {
                    winner: home.team.id,
                    loser: away.team.id,
                    margin: Margin::Runs(required - 1 - fourth.score),
                }
            }
        } else {
            MatchOutcome::Draw
        };

        (vec![first, second, third, fourth], outcome)
    }

    /// Knockout ties and draws go to the better league position. Equal or
    /// unknown positions favour the home side.
    pub fn decide_on_standing(home: &MatchSide, away: &MatchSide) -> MatchOutcome {
        let home_ahead = match (home.standing, away.standing) {
            (Some(h), Some(a)) => h <= a,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => true,
        };

        let (winner, loser) = if home_ahead {
            (home.team.id, away.team.id)
        } else {
            (away.team.id, home.team.id)
        };

        MatchOutcome::Win {
            winner,
            loser,
            margin: Margin::Standing,
        }
    }

    fn innings<'s>(
        setup: &'s MatchSetup,
        number: usize,
        batting: &'s MatchSide,
        bowling: &'s MatchSide,
        target: Option<u32>,
    ) -> InningsSetup<'s> {
        InningsSetup {
            number,
            format: setup.competition.format,
            batting_team_id: batting.team.id,
            bowling_team_id: bowling.team.id,
            batters: &batting.batting_order,
            bowlers: &bowling.bowlers,
            pitch: setup.pitch,
            limits: setup.limits_for(number),
            target,
        }
    }

    fn summary(setup: &MatchSetup, innings: &[Inning], outcome: &MatchOutcome) -> String {
        let name_of = |team_id: u32| {
            if team_id == setup.home.team.id {
                setup.home.team.name.as_str()
            } else {
                setup.away.team.name.as_str()
            }
        };

        let cards = innings
            .iter()
            .map(|inning| format!("{} {}", name_of(inning.batting_team_id), inning.scoreline()))
            .collect::<Vec<String>>()
            .join(", ");

        let verdict = match outcome {
            MatchOutcome::Win {
                winner,
                margin: Margin::Standing,
                ..
            } => format!("{} won on standing", name_of(*winner)),
            MatchOutcome::Win { winner, margin, .. } => format!("{} won by {}", name_of(*winner), margin),
            MatchOutcome::Tie => String::from("Match tied"),
            MatchOutcome::Draw => String::from("Match drawn"),
        };

        format!("{}. {}", cards, verdict)
    }
}

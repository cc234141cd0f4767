use crate::club::{Player, PlayerRole, Team};
use crate::competition::MatchFormat;
use log::{debug, warn};
use std::cmp::Reverse;

pub const XI_SIZE: usize = 11;
const MAX_BOWLERS: usize = 6;
const MIN_BOWLERS: usize = 5;

/// How many of each role a format wants in the XI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineupTargets {
    pub openers: usize,
    pub keepers: usize,
    pub batters: usize,
    pub all_rounders: usize,
    pub bowlers: usize,
}

impl LineupTargets {
    pub fn for_format(format: MatchFormat) -> Self {
        let (openers, keepers, batters, all_rounders, bowlers) = match format {
            MatchFormat::T20 => (2, 1, 3, 2, 3),
            MatchFormat::OneDay => (2, 1, 3, 1, 4),
            MatchFormat::FirstClass => (2, 1, 4, 1, 3),
        };

        LineupTargets {
            openers,
            keepers,
            batters,
            all_rounders,
            bowlers,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Lineup<'t> {
    pub batting_order: Vec<&'t Player>,
    /// Bowling rotation, strongest first.
    pub bowlers: Vec<&'t Player>,
}

impl Lineup<'_> {
    pub fn player_ids(&self) -> Vec<u32> {
        self.batting_order.iter().map(|p| p.id).collect()
    }
}

pub struct SquadSelector;

impl SquadSelector {
    pub fn select(team: &Team, format: MatchFormat) -> Lineup<'_> {
        let targets = LineupTargets::for_format(format);

        let batting_order = match Self::select_by_composition(&team.players, targets) {
            Some(order) => order,
            None => {
                debug!(
                    "team {} cannot field a {} XI by role, picking best by skill",
                    team.name, format
                );
                Self::select_best(&team.players)
            }
        };

        if batting_order.len() < XI_SIZE {
            warn!("team {} has only {} players available", team.name, batting_order.len());
        }

        let bowlers = Self::select_bowlers(&batting_order);

        Lineup {
            batting_order,
            bowlers,
        }
    }

    fn select_by_composition(players: &[Player], targets: LineupTargets) -> Option<Vec<&Player>> {
        let mut batters = Self::by_role(players, PlayerRole::Batter, |p| p.batting_skill as u16);
        let keepers = Self::by_role(players, PlayerRole::WicketKeeper, |p| p.batting_skill as u16);
        let all_rounders = Self::by_role(players, PlayerRole::AllRounder, Player::combined_skill);

        let mut bowlers: Vec<&Player> = players
            .iter()
            .filter(|p| p.role.is_specialist_bowler())
            .collect();
        bowlers.sort_by_key(|p| Reverse(p.bowling_skill));

        if batters.len() < targets.openers + targets.batters
            || keepers.len() < targets.keepers
            || all_rounders.len() < targets.all_rounders
            || bowlers.len() < targets.bowlers
        {
            return None;
        }

        batters.truncate(targets.openers + targets.batters);
        bowlers.truncate(targets.bowlers);
        // tail-enders go in batting order among themselves
        bowlers.sort_by_key(|p| Reverse(p.batting_skill));

        let order: Vec<&Player> = batters
            .into_iter()
            .chain(keepers.into_iter().take(targets.keepers))
            .chain(all_rounders.into_iter().take(targets.all_rounders))
            .chain(bowlers)
            .collect();

        Some(order)
    }

    fn select_best(players: &[Player]) -> Vec<&Player> {
        let mut best: Vec<&Player> = players.iter().collect();
        best.sort_by_key(|p| Reverse(p.combined_skill()));
        best.truncate(XI_SIZE);

        best.sort_by_key(|p| Reverse(p.batting_skill));
        best
    }

    /// Everyone who bowls by trade, strongest first, topped up with
    /// part-timers when the XI is short of bowlers.
    fn select_bowlers<'t>(lineup: &[&'t Player]) -> Vec<&'t Player> {
        let mut bowlers: Vec<&Player> = lineup.iter().copied().filter(|p| p.role.can_bowl()).collect();
        bowlers.sort_by_key(|p| Reverse(p.bowling_skill));
        bowlers.truncate(MAX_BOWLERS);

        if bowlers.len() < MIN_BOWLERS {
            let mut part_timers: Vec<&Player> = lineup.iter().copied().filter(|p| !p.role.can_bowl()).collect();
            part_timers.sort_by_key(|p| Reverse(p.bowling_skill));

            let needed = MIN_BOWLERS - bowlers.len();
            bowlers.extend(part_timers.into_iter().take(needed));
        }

        bowlers
    }

    fn by_role<F>(players: &[Player], role: PlayerRole, key: F) -> Vec<&Player>
    where
        F: Fn(&Player) -> u16,
    {
        let mut selected: Vec<&Player> = players.iter().filter(|p| p.role == role).collect();
        selected.sort_by_key(|p| Reverse(key(*p)));
        selected
    }
}

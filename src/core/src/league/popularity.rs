use crate::competition::MatchFormat;
use crate::r#match::MatchResult;
use itertools::Itertools;

const BIG_TOTAL_POINTS: u32 = 2;
const HUNDRED_POINTS: u32 = 3;
const T20_HUNDRED_POINTS: u32 = 5;
const DOUBLE_HUNDRED_POINTS: u32 = 5;
const FIVE_WICKET_POINTS: u32 = 3;
const TEN_WICKET_MATCH_POINTS: u32 = 5;

/// Sponsorship popularity earned by a team from the milestones of one match.
pub struct PopularityCalculator;

impl PopularityCalculator {
    pub fn big_total(format: MatchFormat) -> u32 {
        match format {
            MatchFormat::T20 => 200,
            MatchFormat::OneDay => 350,
            MatchFormat::FirstClass => 500,
        }
    }

    pub fn points_for_team(result: &MatchResult, team_id: u32) -> u32 {
        let format = result.competition.format;
        let mut points = 0;

        for inning in result.innings.iter().filter(|i| i.batting_team_id == team_id) {
            if inning.score >= Self::big_total(format) {
                points += BIG_TOTAL_POINTS;
            }

            for batting in &inning.batting {
                if batting.runs >= 100 {
                    points += match format {
                        MatchFormat::T20 => T20_HUNDRED_POINTS,
                        _ => HUNDRED_POINTS,
                    };
                }
                if batting.runs >= 200 {
                    points += DOUBLE_HUNDRED_POINTS;
                }
            }
        }

        let bowling_cards = result
            .innings
            .iter()
            .filter(|i| i.bowling_team_id == team_id)
            .flat_map(|i| i.bowling.iter());

        let mut match_wickets: Vec<(u32, u32)> = Vec::new();
        for bowling in bowling_cards {
            if bowling.wickets >= 5 {
                points += FIVE_WICKET_POINTS;
            }
            match_wickets.push((bowling.player_id, bowling.wickets));
        }

        if format == MatchFormat::FirstClass {
            let ten_wicket_bowlers = match_wickets
                .into_iter()
                .into_group_map()
                .into_values()
                .filter(|wickets| wickets.iter().sum::<u32>() >= 10)
                .count() as u32;

            points += ten_wicket_bowlers * TEN_WICKET_MATCH_POINTS;
        }

        points
    }
}

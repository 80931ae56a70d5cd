use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Neg, Sub};

use crate::models::match_player::{MatchPlayer, ScoredParticipation, Team};
use crate::models::player::Player;

/// The seven player counters, used both as an increment and as a snapshot.
///
/// `StatDelta::contribution` is the single definition of what one
/// participation adds to a player; applying a match adds it, reversing a
/// match adds its negation, and reconciliation sums it over stored rows.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StatDelta {
    pub goals_scored_white: i32,
    pub goals_conceded_white: i32,
    pub goals_scored_black: i32,
    pub goals_conceded_black: i32,
    pub gamelles_scored: i32,
    pub own_goals_scored: i32,
    pub player_of_the_match: i32,
}

impl StatDelta {
    pub fn contribution(
        white_team_score: i32,
        black_team_score: i32,
        team: Team,
        gamelles_scored: i32,
        own_goals_scored: i32,
        is_player_of_the_match: bool,
    ) -> Self {
        let mut delta = StatDelta {
            gamelles_scored,
            own_goals_scored,
            player_of_the_match: i32::from(is_player_of_the_match),
            ..Default::default()
        };

        match team {
            Team::White => {
                delta.goals_scored_white = white_team_score;
                delta.goals_conceded_white = black_team_score;
            }
            Team::Black => {
                delta.goals_scored_black = black_team_score;
                delta.goals_conceded_black = white_team_score;
            }
        }

        delta
    }

    /// Contribution of a stored row under the given match scores
    pub fn for_row(row: &MatchPlayer, white_team_score: i32, black_team_score: i32) -> Self {
        Self::contribution(
            white_team_score,
            black_team_score,
            row.team,
            row.gamelles_scored,
            row.own_goals_scored,
            row.is_player_of_the_match,
        )
    }

    pub fn for_scored(row: &ScoredParticipation) -> Self {
        Self::contribution(
            row.white_team_score,
            row.black_team_score,
            row.team,
            row.gamelles_scored,
            row.own_goals_scored,
            row.is_player_of_the_match,
        )
    }

    /// Current counters of a player
    pub fn of_player(player: &Player) -> Self {
        StatDelta {
            goals_scored_white: player.goals_scored_white,
            goals_conceded_white: player.goals_conceded_white,
            goals_scored_black: player.goals_scored_black,
            goals_conceded_black: player.goals_conceded_black,
            gamelles_scored: player.gamelles_scored,
            own_goals_scored: player.own_goals_scored,
            player_of_the_match: player.player_of_the_match,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == StatDelta::default()
    }
}

impl Add for StatDelta {
    type Output = StatDelta;

    fn add(self, rhs: StatDelta) -> StatDelta {
        StatDelta {
            goals_scored_white: self.goals_scored_white + rhs.goals_scored_white,
            goals_conceded_white: self.goals_conceded_white + rhs.goals_conceded_white,
            goals_scored_black: self.goals_scored_black + rhs.goals_scored_black,
            goals_conceded_black: self.goals_conceded_black + rhs.goals_conceded_black,
            gamelles_scored: self.gamelles_scored + rhs.gamelles_scored,
            own_goals_scored: self.own_goals_scored + rhs.own_goals_scored,
            player_of_the_match: self.player_of_the_match + rhs.player_of_the_match,
        }
    }
}

impl AddAssign for StatDelta {
    fn add_assign(&mut self, rhs: StatDelta) {
        *self = *self + rhs;
    }
}

impl Neg for StatDelta {
    type Output = StatDelta;

    fn neg(self) -> StatDelta {
        StatDelta::default() - self
    }
}

impl Sub for StatDelta {
    type Output = StatDelta;

    fn sub(self, rhs: StatDelta) -> StatDelta {
        StatDelta {
            goals_scored_white: self.goals_scored_white - rhs.goals_scored_white,
            goals_conceded_white: self.goals_conceded_white - rhs.goals_conceded_white,
            goals_scored_black: self.goals_scored_black - rhs.goals_scored_black,
            goals_conceded_black: self.goals_conceded_black - rhs.goals_conceded_black,
            gamelles_scored: self.gamelles_scored - rhs.gamelles_scored,
            own_goals_scored: self.own_goals_scored - rhs.own_goals_scored,
            player_of_the_match: self.player_of_the_match - rhs.player_of_the_match,
        }
    }
}

// src/models/match_player.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::matches::{Match, MatchId};
use crate::models::player::{Player, PlayerId};

/// Side of the table. Stored and serialized as a boolean, `true` being white.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(from = "bool", into = "bool")]
pub enum Team {
    White,
    Black,
}

impl Team {
    pub fn is_white(self) -> bool {
        matches!(self, Team::White)
    }
}

impl From<bool> for Team {
    fn from(flag: bool) -> Self {
        if flag { Team::White } else { Team::Black }
    }
}

impl From<Team> for bool {
    fn from(team: Team) -> Self {
        team.is_white()
    }
}

/// One player's participation in one match, keyed by (match_id, player_id)
#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlayer {
    pub match_id: MatchId,
    pub player_id: PlayerId,
    #[sqlx(try_from = "bool")]
    pub team: Team,
    pub gamelles_scored: i32,
    pub own_goals_scored: i32,
    pub is_player_of_the_match: bool,
}

/// Participation row joined with the scores of its match.
/// Used wherever a contribution has to be recomputed from stored values.
#[derive(Debug, FromRow, Clone)]
pub struct ScoredParticipation {
    pub match_id: MatchId,
    pub player_id: PlayerId,
    #[sqlx(try_from = "bool")]
    pub team: Team,
    pub gamelles_scored: i32,
    pub own_goals_scored: i32,
    pub is_player_of_the_match: bool,
    pub white_team_score: i32,
    pub black_team_score: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlayerWithPlayer {
    #[serde(flatten)]
    pub participation: MatchPlayer,
    pub player: Player,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlayerWithMatch {
    #[serde(flatten)]
    pub participation: MatchPlayer,
    #[serde(rename = "match")]
    pub game: Match,
}

/// Response of `PUT /api/match-players/{matchId}/{playerId}`
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlayerDetails {
    #[serde(flatten)]
    pub participation: MatchPlayer,
    pub player: Player,
    #[serde(rename = "match")]
    pub game: Match,
}

/// Body of `PUT /api/match-players/{matchId}/{playerId}`.
/// Keys are limited to per-match values; ids cannot be moved.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateMatchPlayerRequest {
    #[serde(default)]
    pub team: Option<Team>,
    #[serde(default)]
    pub gamelles_scored: Option<i32>,
    #[serde(default)]
    pub own_goals_scored: Option<i32>,
    #[serde(default)]
    pub is_player_of_the_match: Option<bool>,
}

impl UpdateMatchPlayerRequest {
    /// Row with the requested changes laid over the current values
    pub fn apply_to(&self, current: &MatchPlayer) -> MatchPlayer {
        MatchPlayer {
            match_id: current.match_id,
            player_id: current.player_id,
            team: self.team.unwrap_or(current.team),
            gamelles_scored: self.gamelles_scored.unwrap_or(current.gamelles_scored),
            own_goals_scored: self.own_goals_scored.unwrap_or(current.own_goals_scored),
            is_player_of_the_match: self
                .is_player_of_the_match
                .unwrap_or(current.is_player_of_the_match),
        }
    }
}

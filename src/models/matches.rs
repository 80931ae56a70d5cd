// src/models/matches.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::match_player::{MatchPlayerWithPlayer, Team};
use crate::models::player::PlayerId;
use crate::utils::date_parse;

pub type MatchId = i32;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub white_team_score: i32,
    pub black_team_score: i32,
    pub date: DateTime<Utc>,
}

/// Match as returned by the match endpoints, with its participants
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchWithPlayers {
    #[serde(flatten)]
    pub record: Match,
    pub players: Vec<MatchPlayerWithPlayer>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatsResponse {
    pub total_matches: i64,
    pub recent_matches: Vec<MatchWithPlayers>,
}

// Request DTOs

/// One participant of a match being recorded
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantInput {
    pub player_id: PlayerId,
    pub team: Team,
    #[serde(default)]
    pub gamelles_scored: i32,
    #[serde(default)]
    pub own_goals_scored: i32,
    #[serde(default)]
    pub is_player_of_the_match: bool,
}

/// Body of `POST /api/matches`. Scores and players are required; a string
/// score such as `"3"` is rejected at deserialization.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchRequest {
    pub white_team_score: i32,
    pub black_team_score: i32,
    #[serde(default, deserialize_with = "date_parse::deserialize_optional")]
    pub date: Option<DateTime<Utc>>,
    pub players: Vec<ParticipantInput>,
}

/// Body of `PUT /api/matches/{id}`
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateMatchRequest {
    #[serde(default)]
    pub white_team_score: Option<i32>,
    #[serde(default)]
    pub black_team_score: Option<i32>,
    #[serde(default, deserialize_with = "date_parse::deserialize_optional")]
    pub date: Option<DateTime<Utc>>,
}

impl UpdateMatchRequest {
    pub fn changes_scores(&self) -> bool {
        self.white_team_score.is_some() || self.black_team_score.is_some()
    }
}

// src/models/player.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::match_player::MatchPlayerWithMatch;

pub type PlayerId = i32;

/// A player and the running totals the ledger keeps for them.
/// Counters are never written outside of `crate::ledger`.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub goals_scored_white: i32,
    pub goals_conceded_white: i32,
    pub goals_scored_black: i32,
    pub goals_conceded_black: i32,
    pub gamelles_scored: i32,
    pub own_goals_scored: i32,
    pub player_of_the_match: i32,
    pub created_at: DateTime<Utc>,
}

/// Player as returned by the player endpoints, with its participations
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerWithMatches {
    #[serde(flatten)]
    pub player: Player,
    pub matches: Vec<MatchPlayerWithMatch>,
}

// Request DTOs
#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: Option<String>,
}

/// Only the name is editable; counters belong to the ledger.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdatePlayerRequest {
    pub name: String,
}

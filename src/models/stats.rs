// src/models/stats.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ledger::StatDelta;
use crate::models::player::{Player, PlayerId};

/// Win/draw/loss record and goal ratios derived from a player's matches
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub matches_played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub win_percentage: f64,
    pub win_loss_ratio: f64,
    /// Summed across both sides, so wider than the per-side counters
    pub goals_scored: i64,
    pub goals_conceded: i64,
    pub goal_ratio: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    #[serde(flatten)]
    pub player: Player,
    pub record: PlayerRecord,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum RankingSort {
    #[default]
    WinRate,
    GoalRatio,
    PlayerOfTheMatch,
    Gamelles,
    OwnGoals,
}

impl FromStr for RankingSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "winRate" | "winrate" => Ok(Self::WinRate),
            "goalRatio" => Ok(Self::GoalRatio),
            "playerOfTheMatch" | "manOfTheMatch" | "potm" => Ok(Self::PlayerOfTheMatch),
            "gamelles" => Ok(Self::Gamelles),
            "ownGoals" => Ok(Self::OwnGoals),
            other => Err(format!(
                "{} is not a supported ranking. \
                Use one of `winRate`, `goalRatio`, `playerOfTheMatch`, `gamelles`, `ownGoals`.",
                other
            )),
        }
    }
}

impl fmt::Display for RankingSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::WinRate => "winRate",
            Self::GoalRatio => "goalRatio",
            Self::PlayerOfTheMatch => "playerOfTheMatch",
            Self::Gamelles => "gamelles",
            Self::OwnGoals => "ownGoals",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RankingDirection {
    #[default]
    Desc,
    Asc,
}

impl FromStr for RankingDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "desc" => Ok(Self::Desc),
            "asc" => Ok(Self::Asc),
            _ => Err(format!("{} is not a supported direction. Use `asc` or `desc`.", s)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RankingQuery {
    pub sort: Option<String>,
    pub direction: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub summary: PlayerSummary,
}

/// A player whose stored counters differ from what their match rows imply
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CounterDrift {
    pub player_id: PlayerId,
    pub name: String,
    pub stored: StatDelta,
    pub expected: StatDelta,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileReport {
    pub players_checked: usize,
    pub repaired: bool,
    pub drifted: Vec<CounterDrift>,
}

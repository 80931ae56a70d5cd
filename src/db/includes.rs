//! Builds the nested shapes the API returns: matches with their players,
//! players with their matches. Two flat queries, joined in memory.

use std::collections::HashMap;
use sqlx::PgPool;

use crate::db::{match_queries, player_queries};
use crate::models::match_player::{MatchPlayer, MatchPlayerWithMatch, MatchPlayerWithPlayer};
use crate::models::matches::{Match, MatchId, MatchWithPlayers};
use crate::models::player::{Player, PlayerId, PlayerWithMatches};

pub async fn matches_with_players(pool: &PgPool, matches: Vec<Match>) -> Result<Vec<MatchWithPlayers>, sqlx::Error> {
    if matches.is_empty() {
        return Ok(Vec::new());
    }

    let match_ids: Vec<MatchId> = matches.iter().map(|m| m.id).collect();
    let rows = match_queries::fetch_rows_for_matches(pool, &match_ids).await?;

    let mut player_ids: Vec<PlayerId> = rows.iter().map(|row| row.player_id).collect();
    player_ids.sort_unstable();
    player_ids.dedup();
    let players: HashMap<PlayerId, Player> = player_queries::fetch_players_by_ids(pool, &player_ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

    Ok(attach_players(matches, rows, &players))
}

pub async fn match_with_players(pool: &PgPool, game: Match) -> Result<MatchWithPlayers, sqlx::Error> {
    let mut assembled = matches_with_players(pool, vec![game.clone()]).await?;
    Ok(assembled.pop().unwrap_or(MatchWithPlayers { record: game, players: Vec::new() }))
}

pub async fn players_with_matches(pool: &PgPool, players: Vec<Player>) -> Result<Vec<PlayerWithMatches>, sqlx::Error> {
    if players.is_empty() {
        return Ok(Vec::new());
    }

    let player_ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
    let rows = match_queries::fetch_rows_for_players(pool, &player_ids).await?;

    let mut match_ids: Vec<MatchId> = rows.iter().map(|row| row.match_id).collect();
    match_ids.sort_unstable();
    match_ids.dedup();
    let matches: HashMap<MatchId, Match> = match_queries::fetch_matches_by_ids(pool, &match_ids)
        .await?
        .into_iter()
        .map(|m| (m.id, m))
        .collect();

    Ok(attach_matches(players, rows, &matches))
}

pub async fn player_with_matches(pool: &PgPool, player: Player) -> Result<PlayerWithMatches, sqlx::Error> {
    let mut assembled = players_with_matches(pool, vec![player.clone()]).await?;
    Ok(assembled.pop().unwrap_or(PlayerWithMatches { player, matches: Vec::new() }))
}

fn attach_players(
    matches: Vec<Match>,
    rows: Vec<MatchPlayer>,
    players: &HashMap<PlayerId, Player>,
) -> Vec<MatchWithPlayers> {
    let mut by_match: HashMap<MatchId, Vec<MatchPlayerWithPlayer>> = HashMap::new();
    for row in rows {
        // Rows whose player vanished between the two queries are skipped
        if let Some(player) = players.get(&row.player_id) {
            by_match.entry(row.match_id).or_default().push(MatchPlayerWithPlayer {
                participation: row,
                player: player.clone(),
            });
        }
    }

    matches
        .into_iter()
        .map(|game| {
            let players = by_match.remove(&game.id).unwrap_or_default();
            MatchWithPlayers { record: game, players }
        })
        .collect()
}

fn attach_matches(
    players: Vec<Player>,
    rows: Vec<MatchPlayer>,
    matches: &HashMap<MatchId, Match>,
) -> Vec<PlayerWithMatches> {
    let mut by_player: HashMap<PlayerId, Vec<MatchPlayerWithMatch>> = HashMap::new();
    for row in rows {
        if let Some(game) = matches.get(&row.match_id) {
            by_player.entry(row.player_id).or_default().push(MatchPlayerWithMatch {
                participation: row,
                game: game.clone(),
            });
        }
    }

    players
        .into_iter()
        .map(|player| {
            let mut matches = by_player.remove(&player.id).unwrap_or_default();
            matches.sort_by_key(|entry| (entry.game.date, entry.game.id));
            PlayerWithMatches { player, matches }
        })
        .collect()
}

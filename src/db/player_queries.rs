use sqlx::{PgConnection, PgExecutor, PgPool};

use crate::ledger::StatDelta;
use crate::models::player::{Player, PlayerId};

pub async fn insert_player(pool: &PgPool, name: &str) -> Result<Player, sqlx::Error> {
    sqlx::query_as::<_, Player>("INSERT INTO players (name) VALUES ($1) RETURNING *")
        .bind(name)
        .fetch_one(pool)
        .await
}

pub async fn fetch_player<'e, E>(executor: E, player_id: PlayerId) -> Result<Option<Player>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Player>("SELECT * FROM players WHERE id = $1")
        .bind(player_id)
        .fetch_optional(executor)
        .await
}

/// All players, alphabetically
pub async fn fetch_players(pool: &PgPool) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>("SELECT * FROM players ORDER BY name ASC, id ASC")
        .fetch_all(pool)
        .await
}

/// All players in id order
pub async fn fetch_all_players<'e, E>(executor: E) -> Result<Vec<Player>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Player>("SELECT * FROM players ORDER BY id ASC")
        .fetch_all(executor)
        .await
}

pub async fn fetch_players_by_ids<'e, E>(executor: E, player_ids: &[PlayerId]) -> Result<Vec<Player>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Player>("SELECT * FROM players WHERE id = ANY($1)")
        .bind(player_ids)
        .fetch_all(executor)
        .await
}

/// Most player-of-the-match awards first, then most gamelles
pub async fn fetch_leaderboard(pool: &PgPool) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"
        SELECT * FROM players
        ORDER BY player_of_the_match DESC, gamelles_scored DESC, name ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn rename_player(pool: &PgPool, player_id: PlayerId, name: &str) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>("UPDATE players SET name = $2 WHERE id = $1 RETURNING *")
        .bind(player_id)
        .bind(name)
        .fetch_optional(pool)
        .await
}

/// Deletes the player; its match_players rows go with it via ON DELETE CASCADE.
pub async fn delete_player(pool: &PgPool, player_id: PlayerId) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM players WHERE id = $1")
        .bind(player_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Locks the given players for the rest of the transaction and returns the ids that exist
pub async fn lock_existing_ids(conn: &mut PgConnection, player_ids: &[PlayerId]) -> Result<Vec<PlayerId>, sqlx::Error> {
    sqlx::query_scalar::<_, PlayerId>(
        "SELECT id FROM players WHERE id = ANY($1) ORDER BY id FOR UPDATE",
    )
    .bind(player_ids)
    .fetch_all(conn)
    .await
}

/// Adds `delta` to the player's counters. Returns the number of rows touched.
pub async fn adjust_counters(conn: &mut PgConnection, player_id: PlayerId, delta: &StatDelta) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE players
        SET
            goals_scored_white = goals_scored_white + $2,
            goals_conceded_white = goals_conceded_white + $3,
            goals_scored_black = goals_scored_black + $4,
            goals_conceded_black = goals_conceded_black + $5,
            gamelles_scored = gamelles_scored + $6,
            own_goals_scored = own_goals_scored + $7,
            player_of_the_match = player_of_the_match + $8
        WHERE id = $1
        "#,
    )
    .bind(player_id)
    .bind(delta.goals_scored_white)
    .bind(delta.goals_conceded_white)
    .bind(delta.goals_scored_black)
    .bind(delta.goals_conceded_black)
    .bind(delta.gamelles_scored)
    .bind(delta.own_goals_scored)
    .bind(delta.player_of_the_match)
    .execute(conn)
    .await?;

    Ok(result.rows_affected())
}

/// Replaces the player's counters outright. Only reconciliation uses this.
pub async fn overwrite_counters(conn: &mut PgConnection, player_id: PlayerId, counters: &StatDelta) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE players
        SET
            goals_scored_white = $2,
            goals_conceded_white = $3,
            goals_scored_black = $4,
            goals_conceded_black = $5,
            gamelles_scored = $6,
            own_goals_scored = $7,
            player_of_the_match = $8
        WHERE id = $1
        "#,
    )
    .bind(player_id)
    .bind(counters.goals_scored_white)
    .bind(counters.goals_conceded_white)
    .bind(counters.goals_scored_black)
    .bind(counters.goals_conceded_black)
    .bind(counters.gamelles_scored)
    .bind(counters.own_goals_scored)
    .bind(counters.player_of_the_match)
    .execute(conn)
    .await?;

    Ok(result.rows_affected())
}

/// Every player, locked, for a reconciliation pass
pub async fn lock_all_players(conn: &mut PgConnection) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>("SELECT * FROM players ORDER BY id FOR UPDATE")
        .fetch_all(conn)
        .await
}

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgExecutor, PgPool};

use crate::models::match_player::{MatchPlayer, ScoredParticipation};
use crate::models::matches::{Match, MatchId, ParticipantInput};
use crate::models::player::PlayerId;

/// Insert a match; a missing date falls back to the database clock.
pub async fn insert_match(
    conn: &mut PgConnection,
    white_team_score: i32,
    black_team_score: i32,
    date: Option<DateTime<Utc>>,
) -> Result<Match, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"
        INSERT INTO matches (white_team_score, black_team_score, date)
        VALUES ($1, $2, COALESCE($3, NOW()))
        RETURNING *
        "#,
    )
    .bind(white_team_score)
    .bind(black_team_score)
    .bind(date)
    .fetch_one(conn)
    .await
}

pub async fn insert_match_player(
    conn: &mut PgConnection,
    match_id: MatchId,
    participant: &ParticipantInput,
) -> Result<MatchPlayer, sqlx::Error> {
    sqlx::query_as::<_, MatchPlayer>(
        r#"
        INSERT INTO match_players (
            match_id, player_id, team, gamelles_scored, own_goals_scored, is_player_of_the_match
        ) VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(match_id)
    .bind(participant.player_id)
    .bind(participant.team.is_white())
    .bind(participant.gamelles_scored)
    .bind(participant.own_goals_scored)
    .bind(participant.is_player_of_the_match)
    .fetch_one(conn)
    .await
}

pub async fn fetch_match<'e, E>(executor: E, match_id: MatchId) -> Result<Option<Match>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE id = $1")
        .bind(match_id)
        .fetch_optional(executor)
        .await
}

/// Fetch and row-lock a match until the surrounding transaction ends
pub async fn lock_match(conn: &mut PgConnection, match_id: MatchId) -> Result<Option<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE id = $1 FOR UPDATE")
        .bind(match_id)
        .fetch_optional(conn)
        .await
}

pub async fn fetch_match_players<'e, E>(executor: E, match_id: MatchId) -> Result<Vec<MatchPlayer>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, MatchPlayer>(
        "SELECT * FROM match_players WHERE match_id = $1 ORDER BY team DESC, player_id ASC",
    )
    .bind(match_id)
    .fetch_all(executor)
    .await
}

pub async fn lock_match_player(
    conn: &mut PgConnection,
    match_id: MatchId,
    player_id: PlayerId,
) -> Result<Option<MatchPlayer>, sqlx::Error> {
    sqlx::query_as::<_, MatchPlayer>(
        "SELECT * FROM match_players WHERE match_id = $1 AND player_id = $2 FOR UPDATE",
    )
    .bind(match_id)
    .bind(player_id)
    .fetch_optional(conn)
    .await
}

pub async fn update_match(
    conn: &mut PgConnection,
    match_id: MatchId,
    white_team_score: i32,
    black_team_score: i32,
    date: DateTime<Utc>,
) -> Result<Match, sqlx::Error> {
    sqlx::query_as::<_, Match>(
        r#"
        UPDATE matches
        SET white_team_score = $2, black_team_score = $3, date = $4
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(match_id)
    .bind(white_team_score)
    .bind(black_team_score)
    .bind(date)
    .fetch_one(conn)
    .await
}

pub async fn update_match_player(conn: &mut PgConnection, row: &MatchPlayer) -> Result<MatchPlayer, sqlx::Error> {
    sqlx::query_as::<_, MatchPlayer>(
        r#"
        UPDATE match_players
        SET team = $3, gamelles_scored = $4, own_goals_scored = $5, is_player_of_the_match = $6
        WHERE match_id = $1 AND player_id = $2
        RETURNING *
        "#,
    )
    .bind(row.match_id)
    .bind(row.player_id)
    .bind(row.team.is_white())
    .bind(row.gamelles_scored)
    .bind(row.own_goals_scored)
    .bind(row.is_player_of_the_match)
    .fetch_one(conn)
    .await
}

/// Deletes the match; its match_players rows go with it via ON DELETE CASCADE.
pub async fn delete_match(conn: &mut PgConnection, match_id: MatchId) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM matches WHERE id = $1")
        .bind(match_id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected())
}

pub async fn delete_match_player(conn: &mut PgConnection, match_id: MatchId, player_id: PlayerId) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM match_players WHERE match_id = $1 AND player_id = $2")
        .bind(match_id)
        .bind(player_id)
        .execute(conn)
        .await?;

    Ok(result.rows_affected())
}

/// All matches, oldest first
pub async fn fetch_matches(pool: &PgPool) -> Result<Vec<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>("SELECT * FROM matches ORDER BY date ASC, id ASC")
        .fetch_all(pool)
        .await
}

/// The `limit` most recent matches, newest first
pub async fn fetch_recent_matches(pool: &PgPool, limit: i64) -> Result<Vec<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>("SELECT * FROM matches ORDER BY date DESC, id DESC LIMIT $1")
        .bind(limit)
        .fetch_all(pool)
        .await
}

pub async fn fetch_matches_by_ids(pool: &PgPool, match_ids: &[MatchId]) -> Result<Vec<Match>, sqlx::Error> {
    sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE id = ANY($1) ORDER BY date ASC, id ASC")
        .bind(match_ids)
        .fetch_all(pool)
        .await
}

pub async fn count_matches(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM matches")
        .fetch_one(pool)
        .await
}

pub async fn fetch_rows_for_matches(pool: &PgPool, match_ids: &[MatchId]) -> Result<Vec<MatchPlayer>, sqlx::Error> {
    sqlx::query_as::<_, MatchPlayer>(
        r#"
        SELECT * FROM match_players
        WHERE match_id = ANY($1)
        ORDER BY match_id ASC, team DESC, player_id ASC
        "#,
    )
    .bind(match_ids)
    .fetch_all(pool)
    .await
}

pub async fn fetch_rows_for_players(pool: &PgPool, player_ids: &[PlayerId]) -> Result<Vec<MatchPlayer>, sqlx::Error> {
    sqlx::query_as::<_, MatchPlayer>(
        r#"
        SELECT * FROM match_players
        WHERE player_id = ANY($1)
        ORDER BY player_id ASC, match_id ASC
        "#,
    )
    .bind(player_ids)
    .fetch_all(pool)
    .await
}

/// Every participation joined with its match scores.
/// Reconciliation and derived records both fold over these rows.
pub async fn fetch_scored_participations<'e, E>(
    executor: E,
    player_id: Option<PlayerId>,
) -> Result<Vec<ScoredParticipation>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, ScoredParticipation>(
        r#"
        SELECT
            mp.match_id, mp.player_id, mp.team, mp.gamelles_scored,
            mp.own_goals_scored, mp.is_player_of_the_match,
            m.white_team_score, m.black_team_score
        FROM match_players mp
        JOIN matches m ON m.id = mp.match_id
        WHERE $1::INTEGER IS NULL OR mp.player_id = $1
        ORDER BY mp.player_id ASC, m.date ASC
        "#,
    )
    .bind(player_id)
    .fetch_all(executor)
    .await
}

use sqlx::{PgConnection, PgPool};
use tracing::{debug, info};

use crate::db::helpers::{first_missing, require_affected, require_record};
use crate::db::{match_queries, player_queries};
use crate::error::AppError;
use crate::ledger::reconcile::compute_drift;
use crate::ledger::validation::MatchValidator;
use crate::ledger::StatDelta;
use crate::models::match_player::{MatchPlayer, UpdateMatchPlayerRequest};
use crate::models::matches::{CreateMatchRequest, Match, MatchId, UpdateMatchRequest};
use crate::models::player::PlayerId;
use crate::models::stats::ReconcileReport;

const MATCH_NOT_FOUND: &str = "Match not found";
const MATCH_PLAYER_NOT_FOUND: &str = "Match player relationship not found";

/// Row-locks the players behind `rows` in ascending id order, the same order
/// `apply` takes its locks in. Returns the rows sorted by player id.
async fn lock_participants(conn: &mut PgConnection, mut rows: Vec<MatchPlayer>) -> Result<Vec<MatchPlayer>, AppError> {
    rows.sort_by_key(|row| row.player_id);
    let player_ids: Vec<PlayerId> = rows.iter().map(|row| row.player_id).collect();
    player_queries::lock_existing_ids(conn, &player_ids).await?;
    Ok(rows)
}

/// Sole writer of the player counters.
///
/// Every operation runs in one transaction: the first failing statement
/// returns early, the transaction is dropped and Postgres rolls it back, so
/// no partial counter update is ever visible.
#[derive(Debug, Clone)]
pub struct StatsLedger {
    pool: PgPool,
}

impl StatsLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a match and add each participant's contribution to their counters
    #[tracing::instrument(
        name = "Apply match to ledger",
        skip(self, request),
        fields(
            white_team_score = request.white_team_score,
            black_team_score = request.black_team_score,
            participants = request.players.len()
        )
    )]
    pub async fn apply(&self, request: &CreateMatchRequest) -> Result<Match, AppError> {
        MatchValidator::new().validate_create_match_request(request)?;

        let mut tx = self.pool.begin().await?;

        let mut player_ids: Vec<PlayerId> = request.players.iter().map(|p| p.player_id).collect();
        player_ids.sort_unstable();
        let existing = player_queries::lock_existing_ids(&mut *tx, &player_ids).await?;
        if let Some(missing) = first_missing(&player_ids, &existing) {
            return Err(AppError::not_found(format!("Player {} not found", missing)));
        }

        let game = match_queries::insert_match(
            &mut *tx,
            request.white_team_score,
            request.black_team_score,
            request.date,
        )
        .await?;

        for participant in &request.players {
            match_queries::insert_match_player(&mut *tx, game.id, participant).await?;

            let delta = StatDelta::contribution(
                game.white_team_score,
                game.black_team_score,
                participant.team,
                participant.gamelles_scored,
                participant.own_goals_scored,
                participant.is_player_of_the_match,
            );
            debug!("Adding {:?} to player {}", delta, participant.player_id);
            let touched = player_queries::adjust_counters(&mut *tx, participant.player_id, &delta).await?;
            require_affected(touched, "Player not found")?;
        }

        tx.commit().await?;

        info!(
            "Recorded match {}: {} - {} with {} players",
            game.id, game.white_team_score, game.black_team_score, request.players.len()
        );
        Ok(game)
    }

    /// Remove a match and subtract exactly what it contributed.
    /// Uses the per-match values stored on each row, never the request.
    #[tracing::instrument(name = "Reverse match in ledger", skip(self))]
    pub async fn reverse(&self, match_id: MatchId) -> Result<Vec<MatchPlayer>, AppError> {
        let mut tx = self.pool.begin().await?;

        let game = require_record(match_queries::lock_match(&mut *tx, match_id).await, MATCH_NOT_FOUND)?;
        let rows = match_queries::fetch_match_players(&mut *tx, match_id).await?;
        let rows = lock_participants(&mut *tx, rows).await?;

        for row in &rows {
            let delta = -StatDelta::for_row(row, game.white_team_score, game.black_team_score);
            debug!("Adding {:?} to player {}", delta, row.player_id);
            player_queries::adjust_counters(&mut *tx, row.player_id, &delta).await?;
        }

        let deleted = match_queries::delete_match(&mut *tx, match_id).await?;
        require_affected(deleted, MATCH_NOT_FOUND)?;

        tx.commit().await?;

        info!("Match {} and {} related records deleted", match_id, rows.len());
        Ok(rows)
    }

    /// Change a match's scores or date. Counters move by the difference
    /// between each participant's new and old contribution.
    #[tracing::instrument(name = "Revise match in ledger", skip(self, request))]
    pub async fn revise_match(&self, match_id: MatchId, request: &UpdateMatchRequest) -> Result<Match, AppError> {
        MatchValidator::new().validate_update_match_request(request)?;

        let mut tx = self.pool.begin().await?;

        let current = require_record(match_queries::lock_match(&mut *tx, match_id).await, MATCH_NOT_FOUND)?;
        let white_team_score = request.white_team_score.unwrap_or(current.white_team_score);
        let black_team_score = request.black_team_score.unwrap_or(current.black_team_score);
        let date = request.date.unwrap_or(current.date);

        if request.changes_scores() {
            let rows = match_queries::fetch_match_players(&mut *tx, match_id).await?;
            let rows = lock_participants(&mut *tx, rows).await?;
            for row in &rows {
                let delta = StatDelta::for_row(row, white_team_score, black_team_score)
                    - StatDelta::for_row(row, current.white_team_score, current.black_team_score);
                if !delta.is_zero() {
                    player_queries::adjust_counters(&mut *tx, row.player_id, &delta).await?;
                }
            }
        }

        let updated = match_queries::update_match(&mut *tx, match_id, white_team_score, black_team_score, date).await?;
        tx.commit().await?;

        info!(
            "Revised match {}: {} - {} (was {} - {})",
            match_id, updated.white_team_score, updated.black_team_score,
            current.white_team_score, current.black_team_score
        );
        Ok(updated)
    }

    /// Change one participant's per-match values
    #[tracing::instrument(name = "Revise participation in ledger", skip(self, request))]
    pub async fn revise_participation(
        &self,
        match_id: MatchId,
        player_id: PlayerId,
        request: &UpdateMatchPlayerRequest,
    ) -> Result<MatchPlayer, AppError> {
        MatchValidator::new().validate_update_match_player_request(request)?;

        let mut tx = self.pool.begin().await?;

        let game = require_record(match_queries::lock_match(&mut *tx, match_id).await, MATCH_PLAYER_NOT_FOUND)?;
        let current = require_record(
            match_queries::lock_match_player(&mut *tx, match_id, player_id).await,
            MATCH_PLAYER_NOT_FOUND,
        )?;
        player_queries::lock_existing_ids(&mut *tx, &[player_id]).await?;
        let revised = request.apply_to(&current);

        let delta = StatDelta::for_row(&revised, game.white_team_score, game.black_team_score)
            - StatDelta::for_row(&current, game.white_team_score, game.black_team_score);
        if !delta.is_zero() {
            player_queries::adjust_counters(&mut *tx, player_id, &delta).await?;
        }

        let updated = match_queries::update_match_player(&mut *tx, &revised).await?;
        tx.commit().await?;

        info!("Revised player {} in match {}", player_id, match_id);
        Ok(updated)
    }

    /// Take one player out of a match, subtracting their contribution
    #[tracing::instrument(name = "Withdraw participation from ledger", skip(self))]
    pub async fn withdraw(&self, match_id: MatchId, player_id: PlayerId) -> Result<MatchPlayer, AppError> {
        let mut tx = self.pool.begin().await?;

        let game = require_record(match_queries::lock_match(&mut *tx, match_id).await, MATCH_PLAYER_NOT_FOUND)?;
        let row = require_record(
            match_queries::lock_match_player(&mut *tx, match_id, player_id).await,
            MATCH_PLAYER_NOT_FOUND,
        )?;
        player_queries::lock_existing_ids(&mut *tx, &[player_id]).await?;

        let delta = -StatDelta::for_row(&row, game.white_team_score, game.black_team_score);
        player_queries::adjust_counters(&mut *tx, player_id, &delta).await?;
        let deleted = match_queries::delete_match_player(&mut *tx, match_id, player_id).await?;
        require_affected(deleted, MATCH_PLAYER_NOT_FOUND)?;

        tx.commit().await?;

        info!("Removed player {} from match {}", player_id, match_id);
        Ok(row)
    }

    /// Compare stored counters with the sum of stored participations
    #[tracing::instrument(name = "Audit ledger", skip(self))]
    pub async fn audit(&self) -> Result<ReconcileReport, AppError> {
        let mut tx = self.pool.begin().await?;
        // One snapshot for both reads
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let players = player_queries::fetch_all_players(&mut *tx).await?;
        let participations = match_queries::fetch_scored_participations(&mut *tx, None).await?;
        tx.commit().await?;

        let drifted = compute_drift(&players, &participations);
        if !drifted.is_empty() {
            tracing::warn!("{} players have counters out of line with their matches", drifted.len());
        }

        Ok(ReconcileReport {
            players_checked: players.len(),
            repaired: false,
            drifted,
        })
    }

    /// Overwrite drifted counters with the values their participations imply
    #[tracing::instrument(name = "Reconcile ledger", skip(self))]
    pub async fn reconcile(&self) -> Result<ReconcileReport, AppError> {
        let mut tx = self.pool.begin().await?;

        let players = player_queries::lock_all_players(&mut *tx).await?;
        let participations = match_queries::fetch_scored_participations(&mut *tx, None).await?;
        let drifted = compute_drift(&players, &participations);

        for drift in &drifted {
            info!(
                "Repairing counters of player {} ({}): {:?} -> {:?}",
                drift.player_id, drift.name, drift.stored, drift.expected
            );
            player_queries::overwrite_counters(&mut *tx, drift.player_id, &drift.expected).await?;
        }

        tx.commit().await?;

        Ok(ReconcileReport {
            players_checked: players.len(),
            repaired: !drifted.is_empty(),
            drifted,
        })
    }
}

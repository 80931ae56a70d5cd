use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::helpers::require_record;
use crate::db::{match_queries, player_queries};
use crate::error::AppError;
use crate::ledger::StatsLedger;
use crate::models::match_player::{MatchPlayerDetails, UpdateMatchPlayerRequest};
use crate::models::matches::MatchId;
use crate::models::player::PlayerId;

#[tracing::instrument(name = "Update match player", skip(request, pool))]
pub async fn update_match_player(
    match_id: MatchId,
    player_id: PlayerId,
    request: web::Json<UpdateMatchPlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let ledger = StatsLedger::new(pool.get_ref().clone());
    let participation = ledger.revise_participation(match_id, player_id, &request).await?;

    let player = require_record(
        player_queries::fetch_player(pool.get_ref(), player_id).await,
        "Player not found",
    )?;
    let game = require_record(
        match_queries::fetch_match(pool.get_ref(), match_id).await,
        "Match not found",
    )?;

    Ok(HttpResponse::Ok().json(MatchPlayerDetails {
        participation,
        player,
        game,
    }))
}

#[tracing::instrument(name = "Remove player from match", skip(pool))]
pub async fn delete_match_player(
    match_id: MatchId,
    player_id: PlayerId,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let ledger = StatsLedger::new(pool.get_ref().clone());
    ledger.withdraw(match_id, player_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::helpers::require_record;
use crate::db::{includes, match_queries};
use crate::error::AppError;
use crate::ledger::StatsLedger;
use crate::models::matches::{CreateMatchRequest, MatchId, MatchStatsResponse, UpdateMatchRequest};

const MATCH_NOT_FOUND: &str = "Match not found";
const RECENT_MATCHES: i64 = 10;

/// All matches, oldest first, each with its players
pub async fn list_matches(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let matches = match_queries::fetch_matches(pool.get_ref()).await?;
    let matches = includes::matches_with_players(pool.get_ref(), matches).await?;
    Ok(HttpResponse::Ok().json(matches))
}

pub async fn get_match(match_id: MatchId, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let game = require_record(
        match_queries::fetch_match(pool.get_ref(), match_id).await,
        MATCH_NOT_FOUND,
    )?;
    let game = includes::match_with_players(pool.get_ref(), game).await?;
    Ok(HttpResponse::Ok().json(game))
}

/// Record a match through the ledger and answer with the complete match
#[tracing::instrument(
    name = "Create match",
    skip(request, pool),
    fields(players = request.players.len())
)]
pub async fn create_match(
    request: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let ledger = StatsLedger::new(pool.get_ref().clone());
    let game = ledger.apply(&request).await?;

    let complete = includes::match_with_players(pool.get_ref(), game).await?;
    Ok(HttpResponse::Created().json(complete))
}

#[tracing::instrument(name = "Update match", skip(request, pool))]
pub async fn update_match(
    match_id: MatchId,
    request: web::Json<UpdateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let ledger = StatsLedger::new(pool.get_ref().clone());
    let game = ledger.revise_match(match_id, &request).await?;

    let complete = includes::match_with_players(pool.get_ref(), game).await?;
    Ok(HttpResponse::Ok().json(complete))
}

/// Delete a match through the ledger, reversing its effect on counters
#[tracing::instrument(name = "Delete match", skip(pool))]
pub async fn delete_match(match_id: MatchId, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let ledger = StatsLedger::new(pool.get_ref().clone());
    ledger.reverse(match_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn get_match_stats(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let total_matches = match_queries::count_matches(pool.get_ref()).await?;
    let recent = match_queries::fetch_recent_matches(pool.get_ref(), RECENT_MATCHES).await?;
    let recent_matches = includes::matches_with_players(pool.get_ref(), recent).await?;

    Ok(HttpResponse::Ok().json(MatchStatsResponse {
        total_matches,
        recent_matches,
    }))
}

use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::{match_queries, player_queries};
use crate::error::AppError;
use crate::ledger::StatsLedger;
use crate::models::stats::{RankingDirection, RankingQuery, RankingSort};
use crate::stats::rankings;

pub async fn get_leaderboard(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let players = player_queries::fetch_leaderboard(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(players))
}

pub async fn get_rankings(
    query: web::Query<RankingQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let sort = match query.sort.as_deref() {
        Some(raw) => raw.parse::<RankingSort>().map_err(AppError::Validation)?,
        None => RankingSort::default(),
    };
    let direction = match query.direction.as_deref() {
        Some(raw) => raw.parse::<RankingDirection>().map_err(AppError::Validation)?,
        None => RankingDirection::default(),
    };

    let players = player_queries::fetch_players(pool.get_ref()).await?;
    let participations = match_queries::fetch_scored_participations(pool.get_ref(), None).await?;
    let summaries = rankings::summarize(players, &participations);

    Ok(HttpResponse::Ok().json(rankings::rank(summaries, sort, direction)))
}

pub async fn get_audit(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let ledger = StatsLedger::new(pool.get_ref().clone());
    let report = ledger.audit().await?;
    Ok(HttpResponse::Ok().json(report))
}

#[tracing::instrument(name = "Reconcile player counters", skip(pool))]
pub async fn reconcile(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let ledger = StatsLedger::new(pool.get_ref().clone());
    let report = ledger.reconcile().await?;
    tracing::info!(
        "Reconciled {} players, {} repaired",
        report.players_checked,
        report.drifted.len()
    );
    Ok(HttpResponse::Ok().json(report))
}

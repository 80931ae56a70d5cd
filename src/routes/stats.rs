// src/routes/stats.rs
use actix_web::{get, post, web, HttpResponse};
use sqlx::PgPool;

use crate::error::AppError;
use crate::handlers::{match_handler, stats_handler};
use crate::models::stats::RankingQuery;

/// Players by player-of-the-match awards, then gamelles
#[get("/stats/leaderboard")]
pub async fn get_leaderboard(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    stats_handler::get_leaderboard(pool).await
}

/// Total match count and the latest matches
#[get("/stats/matches")]
pub async fn get_match_stats(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    match_handler::get_match_stats(pool).await
}

/// Players ranked by a derived statistic
#[get("/stats/rankings")]
pub async fn get_rankings(
    query: web::Query<RankingQuery>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    stats_handler::get_rankings(query, pool).await
}

/// Report counters that disagree with stored matches
#[get("/stats/audit")]
pub async fn get_audit(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    stats_handler::get_audit(pool).await
}

/// Recompute counters from stored matches
#[post("/stats/reconcile")]
pub async fn reconcile(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    stats_handler::reconcile(pool).await
}

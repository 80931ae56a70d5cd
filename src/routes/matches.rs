// src/routes/matches.rs
use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;

use crate::error::AppError;
use crate::handlers::match_handler;
use crate::models::matches::{CreateMatchRequest, MatchId, UpdateMatchRequest};

/// Get all matches
#[get("/matches")]
pub async fn get_matches(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    match_handler::list_matches(pool).await
}

/// Get a match by id
#[get("/matches/{match_id}")]
pub async fn get_match(
    path: web::Path<MatchId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let match_id = path.into_inner();
    match_handler::get_match(match_id, pool).await
}

/// Record a match and update player stats
#[post("/matches")]
pub async fn create_match(
    request: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    match_handler::create_match(request, pool).await
}

/// Correct a match's scores or date
#[put("/matches/{match_id}")]
pub async fn update_match(
    path: web::Path<MatchId>,
    request: web::Json<UpdateMatchRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let match_id = path.into_inner();
    match_handler::update_match(match_id, request, pool).await
}

/// Delete a match and reverse player stats
#[delete("/matches/{match_id}")]
pub async fn delete_match(
    path: web::Path<MatchId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let match_id = path.into_inner();
    match_handler::delete_match(match_id, pool).await
}

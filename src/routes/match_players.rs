// src/routes/match_players.rs
use actix_web::{delete, put, web, HttpResponse};
use sqlx::PgPool;

use crate::error::AppError;
use crate::handlers::match_player_handler;
use crate::models::match_player::UpdateMatchPlayerRequest;
use crate::models::matches::MatchId;
use crate::models::player::PlayerId;

/// Update one player's stats within a match
#[put("/match-players/{match_id}/{player_id}")]
pub async fn update_match_player(
    path: web::Path<(MatchId, PlayerId)>,
    request: web::Json<UpdateMatchPlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let (match_id, player_id) = path.into_inner();
    match_player_handler::update_match_player(match_id, player_id, request, pool).await
}

/// Remove a player from a match
#[delete("/match-players/{match_id}/{player_id}")]
pub async fn delete_match_player(
    path: web::Path<(MatchId, PlayerId)>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let (match_id, player_id) = path.into_inner();
    match_player_handler::delete_match_player(match_id, player_id, pool).await
}

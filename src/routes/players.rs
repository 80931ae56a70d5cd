// src/routes/players.rs
use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;

use crate::error::AppError;
use crate::handlers::player_handler;
use crate::models::player::{CreatePlayerRequest, PlayerId, UpdatePlayerRequest};

/// Get all players
#[get("/players")]
pub async fn get_players(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    player_handler::list_players(pool).await
}

/// Get a player by id
#[get("/players/{player_id}")]
pub async fn get_player(
    path: web::Path<PlayerId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    player_handler::get_player(player_id, pool).await
}

/// Get a player's win/loss record
#[get("/players/{player_id}/summary")]
pub async fn get_player_summary(
    path: web::Path<PlayerId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    player_handler::get_player_summary(player_id, pool).await
}

/// Create a new player
#[post("/players")]
pub async fn create_player(
    request: web::Json<CreatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    player_handler::create_player(request, pool).await
}

/// Rename a player
#[put("/players/{player_id}")]
pub async fn update_player(
    path: web::Path<PlayerId>,
    request: web::Json<UpdatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    player_handler::update_player(player_id, request, pool).await
}

/// Delete a player
#[delete("/players/{player_id}")]
pub async fn delete_player(
    path: web::Path<PlayerId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    player_handler::delete_player(player_id, pool).await
}

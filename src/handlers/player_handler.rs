use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::helpers::{require_affected, require_record};
use crate::db::{includes, match_queries, player_queries};
use crate::error::AppError;
use crate::ledger::validation::validate_player_name;
use crate::models::player::{CreatePlayerRequest, PlayerId, UpdatePlayerRequest};
use crate::models::stats::{PlayerRecord, PlayerSummary};

const PLAYER_NOT_FOUND: &str = "Player not found";

/// All players by name, each with their matches
pub async fn list_players(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let players = player_queries::fetch_players(pool.get_ref()).await?;
    let players = includes::players_with_matches(pool.get_ref(), players).await?;
    Ok(HttpResponse::Ok().json(players))
}

pub async fn get_player(player_id: PlayerId, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let player = require_record(
        player_queries::fetch_player(pool.get_ref(), player_id).await,
        PLAYER_NOT_FOUND,
    )?;
    let player = includes::player_with_matches(pool.get_ref(), player).await?;
    Ok(HttpResponse::Ok().json(player))
}

/// Player with win/draw/loss record and ratios
pub async fn get_player_summary(player_id: PlayerId, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let player = require_record(
        player_queries::fetch_player(pool.get_ref(), player_id).await,
        PLAYER_NOT_FOUND,
    )?;
    let participations = match_queries::fetch_scored_participations(pool.get_ref(), Some(player_id)).await?;
    let record = PlayerRecord::from_participations(&participations);

    Ok(HttpResponse::Ok().json(PlayerSummary { player, record }))
}

#[tracing::instrument(
    name = "Create player",
    skip(request, pool),
    fields(name = ?request.name)
)]
pub async fn create_player(
    request: web::Json<CreatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let name = validate_player_name(request.name.as_deref())?;
    let player = player_queries::insert_player(pool.get_ref(), &name).await?;
    tracing::info!("Created player {} ({})", player.id, player.name);
    Ok(HttpResponse::Created().json(player))
}

/// Rename only; counters are owned by the ledger
#[tracing::instrument(name = "Rename player", skip(request, pool))]
pub async fn update_player(
    player_id: PlayerId,
    request: web::Json<UpdatePlayerRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let name = validate_player_name(Some(request.name.as_str()))?;
    let player = require_record(
        player_queries::rename_player(pool.get_ref(), player_id, &name).await,
        PLAYER_NOT_FOUND,
    )?;
    Ok(HttpResponse::Ok().json(player))
}

/// Deleting a player cascades to their match rows only. The other players
/// keep both their rows and their counters from those matches.
#[tracing::instrument(name = "Delete player", skip(pool))]
pub async fn delete_player(player_id: PlayerId, pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let deleted = player_queries::delete_player(pool.get_ref(), player_id).await?;
    require_affected(deleted, PLAYER_NOT_FOUND)?;
    tracing::info!("Deleted player {}", player_id);
    Ok(HttpResponse::NoContent().finish())
}

use actix_web::{web, HttpResponse};

pub mod backend_health;
pub mod match_players;
pub mod matches;
pub mod players;
pub mod stats;

use crate::error::AppError;
use crate::models::common::ErrorBody;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(backend_health::backend_health)
            // Player routes
            .service(players::get_players)
            .service(players::get_player_summary)
            .service(players::get_player)
            .service(players::create_player)
            .service(players::update_player)
            .service(players::delete_player)
            // Match routes (all writes go through the stats ledger)
            .service(matches::get_matches)
            .service(matches::get_match)
            .service(matches::create_match)
            .service(matches::update_match)
            .service(matches::delete_match)
            .service(match_players::update_match_player)
            .service(match_players::delete_match_player)
            // Statistics routes
            .service(stats::get_leaderboard)
            .service(stats::get_match_stats)
            .service(stats::get_rankings)
            .service(stats::get_audit)
            .service(stats::reconcile)
    );
}

/// Extractor settings turning malformed input into validation errors
pub fn init_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!("Rejected request body: {}", err);
        AppError::validation(format!("Invalid request body: {}", err)).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::validation(format!("Invalid id: {}", err)).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::validation(format!("Invalid query: {}", err)).into()
    }));
}

pub async fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorBody::new("route not found"))
}

use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::config::settings::ApplicationSettings;
use crate::models::common::HealthStatus;

pub async fn backend_health_check(settings: web::Data<ApplicationSettings>) -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus {
        status: "OK".to_string(),
        timestamp: Utc::now(),
        environment: settings.environment.clone(),
    })
}

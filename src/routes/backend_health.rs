use actix_web::{get, web, Responder};

use crate::config::settings::ApplicationSettings;
use crate::handlers::backend_health_handler::backend_health_check;

#[get("/health")]
pub async fn backend_health(settings: web::Data<ApplicationSettings>) -> impl Responder {
    backend_health_check(settings).await
}

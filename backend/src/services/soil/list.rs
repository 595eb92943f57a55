use actix_web::{web, HttpResponse, Responder};

use crate::services::DEFAULT_USER_ID;
use crate::storage::MemStorage;

/// Actix web handler for `GET /api/soil`.
pub async fn process(store: web::Data<MemStorage>) -> impl Responder {
    let measurements = store.soil_measurements_by_user(DEFAULT_USER_ID).await;
    HttpResponse::Ok().json(measurements)
}

use actix_web::{web, HttpResponse, Responder};
use common::requests::NewSoilMeasurement;
use serde_json::json;

use crate::services::DEFAULT_USER_ID;
use crate::storage::MemStorage;

/// Actix web handler for `POST /api/soil`.
///
/// Returns the created record (with generated `id`, `userId`, `createdAt`) or
/// `400` with field-level details when a value is out of range.
pub async fn process(
    body: web::Json<NewSoilMeasurement>,
    store: web::Data<MemStorage>,
) -> impl Responder {
    let new = body.into_inner();

    if let Err(details) = new.validate() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Invalid soil data format",
            "details": details,
        }));
    }

    let created = store.create_soil_measurement(new, DEFAULT_USER_ID).await;
    HttpResponse::Ok().json(created)
}

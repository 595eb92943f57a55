use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde::Deserialize;
use serde_json::json;

use crate::providers::weather::WeatherService;

/// Coordinates arrive as optional fields so a missing parameter yields the
/// endpoint's own 400 body rather than a query-string parse failure.
#[derive(Deserialize)]
pub struct ForecastQuery {
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Actix web handler for `GET /api/weather`.
pub async fn process(
    query: web::Query<ForecastQuery>,
    service: web::Data<WeatherService>,
) -> impl Responder {
    let (Some(lat), Some(lon)) = (query.lat, query.lon) else {
        return HttpResponse::BadRequest()
            .json(json!({ "error": "Latitude and longitude required" }));
    };

    match service.forecast(lat, lon).await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => {
            error!("weather provider call failed: {e}");
            HttpResponse::InternalServerError()
                .json(json!({ "error": "Failed to fetch weather data" }))
        }
    }
}

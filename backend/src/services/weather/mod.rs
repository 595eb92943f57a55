//! Weather forecast endpoint.
//!
//! The provided route is:
//! - `GET /api/weather?lat=<f64>&lon=<f64>`: Returns the 7-slot forecast with
//!   heavy-rain alerts. Missing coordinates are a `400`; provider failures
//!   are a `500` — weather has no canned fallback.

use actix_web::web::{get, scope};
use actix_web::Scope;

mod forecast;

const API_PATH: &str = "/api/weather";

/// Configures and returns the Actix scope for the weather route.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(forecast::process))
}

//! Soil measurement endpoints.
//!
//! The provided routes are:
//! - `POST /api/soil`: Validates a measurement against the documented field
//!   ranges and appends it to the store for the placeholder user. Range
//!   violations come back as `400` with per-field details.
//! - `GET /api/soil`: Lists the placeholder user's measurements in insertion
//!   order, which the dashboard charts depend on.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod create;
mod list;

const API_PATH: &str = "/api/soil";

/// Configures and returns the Actix scope for the soil data routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("", get().to(list::process))
}

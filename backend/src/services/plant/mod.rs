//! Plant doctor endpoint.
//!
//! The provided route is:
//! - `POST /api/plant`: Handles multipart/form-data. An `image` field is
//!   diagnosed via the vision provider and answered with a structured
//!   diagnosis object; a `query` field without an image gets text advice as
//!   `{response}`. Uploaded images are staged in a temp file that is removed
//!   on every exit path.

use actix_web::web::{post, scope};
use actix_web::Scope;

mod analyze;

const API_PATH: &str = "/api/plant";

/// Configures and returns the Actix scope for the plant route.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(analyze::process))
}

//! AI chat endpoint.
//!
//! The provided route is:
//! - `POST /api/chat`: Accepts `{query, language?}` and returns `{response}`.
//!   The reply is the live completion when the provider answers, or a canned
//!   keyword-matched tip when it does not; the farmer-facing UI never sees a
//!   raw provider error.

use actix_web::web::{post, scope};
use actix_web::Scope;

mod ask;

const API_PATH: &str = "/api/chat";

/// Configures and returns the Actix scope for the chat route.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(ask::process))
}

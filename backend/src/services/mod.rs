//! HTTP route services. Each sub-module owns one endpoint group and exposes a
//! `configure_routes()` returning the Actix `Scope` registered in `main.rs`.
//!
//! Every route acts on the fixed placeholder user below; the deployment has
//! no authentication or session concept.

pub mod chat;
pub mod plant;
pub mod soil;
pub mod weather;

/// The single identity all records are filed under.
pub const DEFAULT_USER_ID: &str = "default-user";

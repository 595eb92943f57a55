//! Farmer advisory backend: a thin REST layer over an OpenRouter-compatible
//! chat/vision provider, the OpenWeather forecast API, and a volatile
//! in-memory record store.
//!
//! The binary in `main.rs` wires these modules into an Actix server; they are
//! exposed as a library so the integration tests can assemble the same app.

pub mod config;
pub mod providers;
pub mod services;
pub mod storage;

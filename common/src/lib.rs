//! Shared data contract between the advisory backend and its clients.
//!
//! `model` holds the stored entities and the provider-facing response shapes;
//! `requests` holds the inbound payloads together with their validation rules.

pub mod model;
pub mod requests;

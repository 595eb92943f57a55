use actix_web::{web, HttpResponse, Responder};
use common::requests::ChatRequest;
use log::info;
use serde_json::json;

use crate::providers::chat::ChatAdvisor;
use crate::providers::Outcome;

/// Actix web handler for `POST /api/chat`.
///
/// Returns `400` when `query` is missing or empty, otherwise `200` with
/// `{response}` — live or degraded text, never an error body.
pub async fn process(
    body: web::Json<ChatRequest>,
    advisor: web::Data<ChatAdvisor>,
) -> impl Responder {
    let request = body.into_inner();
    let query = match request.query.as_deref().map(str::trim) {
        Some(query) if !query.is_empty() => query.to_string(),
        _ => {
            return HttpResponse::BadRequest().json(json!({ "error": "Message is required" }));
        }
    };

    let outcome = advisor.advise(&query, request.language).await;
    if let Outcome::Degraded { reason, .. } = &outcome {
        info!("answering chat query with degraded tip ({reason})");
    }

    HttpResponse::Ok().json(json!({ "response": outcome.into_text() }))
}

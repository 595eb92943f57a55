use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::StreamExt;
use log::warn;
use serde_json::json;
use uuid::Uuid;

use crate::providers::plant::PlantDoctor;

/// Staging directory for uploaded images. Files live here only for the
/// duration of one request; leaving them behind would grow the disk without
/// bound, so removal happens on every exit path.
const UPLOAD_DIR: &str = "uploads";

/// Actix web handler for `POST /api/plant`.
///
/// - `200` with a diagnosis object for an `image` field.
/// - `200` with `{response}` for a text-only `query` field.
/// - `400` when neither is present.
/// - `500` on unexpected internal failure (multipart or file I/O).
pub async fn process(payload: Multipart, doctor: web::Data<PlantDoctor>) -> impl Responder {
    match analyze_input(payload, &doctor).await {
        Ok(response) => response,
        Err(e) => {
            warn!("plant analysis failed: {e}");
            HttpResponse::InternalServerError()
                .json(json!({ "error": "Failed to analyze plant input" }))
        }
    }
}

async fn analyze_input(
    payload: Multipart,
    doctor: &PlantDoctor,
) -> Result<HttpResponse, Box<dyn std::error::Error>> {
    let (image_path, query) = read_form(payload).await?;

    if let Some(path) = image_path {
        // Read once, then unlink before talking to the provider so the file
        // is gone no matter how the analysis goes.
        let bytes = fs::read(&path);
        remove_upload(&path);
        let bytes = bytes?;

        let diagnosis = doctor.diagnose_image(&bytes).await;
        return Ok(HttpResponse::Ok().json(diagnosis));
    }

    match query.as_deref().map(str::trim) {
        Some(query) if !query.is_empty() => {
            let outcome = doctor.advise_text(query).await;
            Ok(HttpResponse::Ok().json(json!({ "response": outcome.into_text() })))
        }
        _ => Ok(HttpResponse::BadRequest().json(json!({ "error": "Query or image is required" }))),
    }
}

/// Drains the multipart form, staging an `image` field to disk and collecting
/// a `query` field into memory. If the stream fails after the image file was
/// created, the file is removed before the error propagates.
async fn read_form(
    mut payload: Multipart,
) -> Result<(Option<PathBuf>, Option<String>), Box<dyn std::error::Error>> {
    let mut image_path: Option<PathBuf> = None;
    let mut query: Option<String> = None;

    let result: Result<(), Box<dyn std::error::Error>> = async {
        while let Some(item) = payload.next().await {
            let mut field = item?;
            let name = field
                .content_disposition()
                .and_then(|cd| cd.get_name().map(|n| n.to_string()));

            match name.as_deref() {
                // Only the first image field is staged; extras are discarded
                // so they cannot leak files past the cleanup below.
                Some("image") if image_path.is_none() => {
                    let path = stage_upload(&mut field).await?;
                    image_path = Some(path);
                }
                Some("query") => {
                    let mut bytes = Vec::new();
                    while let Some(chunk) = field.next().await {
                        bytes.extend_from_slice(&chunk?);
                    }
                    query = Some(String::from_utf8(bytes)?);
                }
                _ => {}
            }
        }
        Ok(())
    }
    .await;

    if let Err(e) = result {
        if let Some(path) = image_path {
            remove_upload(&path);
        }
        return Err(e);
    }

    Ok((image_path, query))
}

/// Streams one multipart field into a fresh file under [`UPLOAD_DIR`]. On a
/// mid-stream failure the partial file is removed before the error returns.
async fn stage_upload(
    field: &mut actix_multipart::Field,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    fs::create_dir_all(UPLOAD_DIR)?;
    let path = Path::new(UPLOAD_DIR).join(Uuid::new_v4().to_string());

    let result: Result<(), Box<dyn std::error::Error>> = async {
        let mut file = File::create(&path)?;
        while let Some(chunk) = field.next().await {
            file.write_all(&chunk?)?;
        }
        Ok(())
    }
    .await;

    match result {
        Ok(()) => Ok(path),
        Err(e) => {
            remove_upload(&path);
            Err(e)
        }
    }
}

fn remove_upload(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        warn!("could not remove staged upload {}: {e}", path.display());
    }
}

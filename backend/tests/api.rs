//! End-to-end tests over the assembled routing table.
//!
//! Degraded provider behaviour is exercised by pointing the adapters at an
//! unreachable loopback port, so everything here runs offline.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{test, web, App, Error};
use backend::providers::chat::ChatAdvisor;
use backend::providers::openrouter::OpenRouter;
use backend::providers::plant::PlantDoctor;
use backend::providers::weather::WeatherService;
use backend::services;
use backend::storage::MemStorage;
use serde_json::{json, Value};

/// Nothing listens on this port; connections are refused immediately.
const UNREACHABLE: &str = "http://127.0.0.1:9";

fn unreachable_openrouter(with_key: bool) -> OpenRouter {
    let key = with_key.then(|| "test-key".to_string());
    OpenRouter::new(key, UNREACHABLE.to_string())
}

fn unreachable_weather() -> WeatherService {
    WeatherService::with_endpoint("test-key".to_string(), UNREACHABLE.to_string())
}

fn build_app(
    store: MemStorage,
    openrouter: OpenRouter,
    weather: WeatherService,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024))
        .app_data(web::Data::new(store))
        .app_data(web::Data::new(ChatAdvisor::new(openrouter.clone())))
        .app_data(web::Data::new(PlantDoctor::new(openrouter)))
        .app_data(web::Data::new(weather))
        .service(services::chat::configure_routes())
        .service(services::plant::configure_routes())
        .service(services::weather::configure_routes())
        .service(services::soil::configure_routes())
}

fn default_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    build_app(
        MemStorage::new(),
        unreachable_openrouter(true),
        unreachable_weather(),
    )
}

/// Builds a multipart/form-data body from `(field name, bytes, filename)`
/// triples, returning the body and the content-type header value.
fn multipart_body(fields: &[(&str, &[u8], Option<&str>)]) -> (Vec<u8>, String) {
    const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";
    let mut body = Vec::new();
    for (name, bytes, filename) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match filename {
            Some(filename) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                     Content-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
            ),
        }
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    (
        body,
        format!("multipart/form-data; boundary={BOUNDARY}"),
    )
}

fn staged_upload_names() -> Vec<String> {
    let mut names: Vec<String> = match std::fs::read_dir("uploads") {
        Ok(entries) => entries
            .filter_map(|e| e.ok().map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect(),
        Err(_) => Vec::new(),
    };
    names.sort();
    names
}

#[actix_web::test]
async fn chat_without_query_is_rejected() {
    let app = test::init_service(default_app()).await;

    for body in [json!({}), json!({ "query": "" }), json!({ "query": "   " })] {
        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Message is required");
    }
}

#[actix_web::test]
async fn chat_provider_failure_serves_keyword_tip_with_busy_prefix() {
    let app = test::init_service(default_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "query": "How do I fix my soil and the pests in it?" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let response = body["response"].as_str().unwrap();
    // "soil" outranks "pest" when both keywords appear.
    assert!(response.starts_with("Apologies, our AI systems are busy."));
    assert!(response.contains("soil fertility"));
}

#[actix_web::test]
async fn chat_without_credential_asks_for_an_api_key() {
    let app = test::init_service(build_app(
        MemStorage::new(),
        unreachable_openrouter(false),
        unreachable_weather(),
    ))
    .await;

    let req = test::TestRequest::post()
        .uri("/api/chat")
        .set_json(json!({ "query": "pest control", "language": "hi" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let response = body["response"].as_str().unwrap();
    assert!(response.starts_with("Please add your OpenRouter API key"));
    assert!(response.contains("neem oil"));
}

#[actix_web::test]
async fn soil_create_then_list_round_trips() {
    let app = test::init_service(default_app()).await;

    let input = json!({
        "ph": 6.4,
        "temperature": 23.5,
        "nitrogen": 45.0,
        "phosphorus": 30.0,
        "potassium": 75.0,
        "humidity": 52.0,
        "location": "east paddock"
    });
    let req = test::TestRequest::post()
        .uri("/api/soil")
        .set_json(&input)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let created: Value = test::read_body_json(resp).await;
    assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(created["userId"], "default-user");
    assert!(created["createdAt"].is_string());
    assert_eq!(created["ph"], 6.4);
    assert_eq!(created["location"], "east paddock");

    let req = test::TestRequest::get().uri("/api/soil").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let listed: Value = test::read_body_json(resp).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], created["id"]);
    assert_eq!(listed[0]["humidity"], 52.0);
}

#[actix_web::test]
async fn soil_out_of_range_ph_is_rejected_with_field_detail() {
    let app = test::init_service(default_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/soil")
        .set_json(json!({
            "ph": 15.0,
            "temperature": 23.5,
            "nitrogen": 45.0,
            "phosphorus": 30.0,
            "potassium": 75.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid soil data format");
    assert_eq!(body["details"][0]["field"], "ph");
}

#[actix_web::test]
async fn concurrent_soil_creates_are_both_recorded() {
    let app = test::init_service(default_app()).await;

    let reading = |ph: f64| {
        test::TestRequest::post()
            .uri("/api/soil")
            .set_json(json!({
                "ph": ph,
                "temperature": 20.0,
                "nitrogen": 40.0,
                "phosphorus": 25.0,
                "potassium": 60.0
            }))
            .to_request()
    };

    let (first, second) = futures_util::future::join(
        test::call_service(&app, reading(6.0)),
        test::call_service(&app, reading(7.0)),
    )
    .await;
    assert_eq!(first.status(), 200);
    assert_eq!(second.status(), 200);

    let req = test::TestRequest::get().uri("/api/soil").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn weather_requires_both_coordinates() {
    let app = test::init_service(default_app()).await;

    for uri in ["/api/weather", "/api/weather?lat=11.0", "/api/weather?lon=76.9"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Latitude and longitude required");
    }
}

#[actix_web::test]
async fn weather_provider_failure_is_a_server_error() {
    let app = test::init_service(default_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/weather?lat=11.0&lon=76.9")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Failed to fetch weather data");
}

#[actix_web::test]
async fn plant_without_image_or_query_is_rejected() {
    let app = test::init_service(default_app()).await;

    let (body, content_type) = multipart_body(&[("note", b"irrelevant", None)]);
    let req = test::TestRequest::post()
        .uri("/api/plant")
        .insert_header(("content-type", content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Query or image is required");
}

#[actix_web::test]
async fn plant_text_query_degrades_to_canned_tip() {
    let app = test::init_service(default_app()).await;

    let (body, content_type) = multipart_body(&[("query", b"my tomato leaves have spots", None)]);
    let req = test::TestRequest::post()
        .uri("/api/plant")
        .insert_header(("content-type", content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    let response = body["response"].as_str().unwrap();
    assert!(response.contains("Plant Doctor Tip"));
}

#[actix_web::test]
async fn plant_image_failure_degrades_and_removes_staged_upload() {
    let app = test::init_service(default_app()).await;
    let staged_before = staged_upload_names();

    let (body, content_type) =
        multipart_body(&[("image", b"not really a jpeg", Some("leaf.jpg"))]);
    let req = test::TestRequest::post()
        .uri("/api/plant")
        .insert_header(("content-type", content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let diagnosis: Value = test::read_body_json(resp).await;
    assert_eq!(diagnosis["plantName"], "Plant (Analysis Limited)");
    assert_eq!(diagnosis["isHealthy"], false);
    assert_eq!(diagnosis["diseases"][0], "Unable to perform detailed analysis");

    // Cleanup invariant: no new file remains in the staging directory.
    assert_eq!(staged_upload_names(), staged_before);
}

use actix_web::{middleware, web, App, HttpServer};
use backend::config::Config;
use backend::providers::chat::ChatAdvisor;
use backend::providers::openrouter::OpenRouter;
use backend::providers::plant::PlantDoctor;
use backend::providers::weather::WeatherService;
use backend::services;
use backend::storage::MemStorage;
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let (host, port) = (config.host.clone(), config.port);

    let store = MemStorage::new();
    let openrouter = OpenRouter::new(
        config.openrouter_api_key.clone(),
        config.openrouter_api_base.clone(),
    );
    let advisor = ChatAdvisor::new(openrouter.clone());
    let doctor = PlantDoctor::new(openrouter);
    let weather = WeatherService::new(config.openweather_api_key.clone());

    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(advisor.clone()))
            .app_data(web::Data::new(doctor.clone()))
            .app_data(web::Data::new(weather.clone()))
            .service(services::chat::configure_routes())
            .service(services::plant::configure_routes())
            .service(services::weather::configure_routes())
            .service(services::soil::configure_routes())
    })
    .bind((host, port))?
    .run()
    .await
}

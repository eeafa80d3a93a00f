mod config;
mod error;
mod gemini;
mod services;

use crate::config::AppConfig;
use crate::gemini::GeminiClient;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let client = GeminiClient::new(&config).map_err(std::io::Error::other)?;
    let client = web::Data::new(client);
    let allowed_origin = config.allowed_origin.clone();

    info!(
        "Server running at http://{}:{} (model {}, CORS origin {})",
        config.host,
        config.port,
        config.model,
        config.allowed_origin.as_deref().unwrap_or("*")
    );

    HttpServer::new(move || {
        App::new()
            .wrap(services::cors(allowed_origin.as_deref()))
            .wrap(Logger::default())
            .app_data(services::json_config())
            .app_data(client.clone())
            .service(services::festivals::configure_routes())
            .default_service(web::route().to(services::embedded::process))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

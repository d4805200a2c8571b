use actix_web::{middleware::Logger, web, HttpServer};
use cyber_kittens::config::EnvConfig;
use cyber_kittens::create_app;
use cyber_kittens::db::database_service::DatabaseService;
use cyber_kittens::state::AppState;
use std::io;
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EnvConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let addr = format!("0.0.0.0:{}", config.port);

    let database_service = DatabaseService::new(&config.db_url)
        .await
        .map_err(io::Error::other)?;

    let state = web::Data::new(AppState::new(Arc::new(database_service), &config));

    info!("Starting server on {}", addr);

    HttpServer::new(move || {
        create_app(state.clone()).wrap(Logger::default())
    })
    .bind(addr)?
    .run()
    .await
}

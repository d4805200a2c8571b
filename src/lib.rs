use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App,
};

use crate::routes::configure_routes;
use crate::state::AppState;
use crate::utils::webutils::{json_error, path_error};

pub mod config;
pub mod db;
pub mod routes;
pub mod state;
pub mod types;
pub mod utils;

/// Builds the application with every route, extractor config and the 404
/// fallback. Shared by the server binary and the integration tests.
pub fn create_app(state: web::Data<AppState>) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .configure(configure_routes)
        .default_service(web::to(routes::fallback::not_found))
}

use crate::utils::webutils::validate_token;
use actix_web::web;

pub mod auth;
pub mod fallback;
pub mod kittens;
pub mod root;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let user_auth = actix_web_httpauth::middleware::HttpAuthentication::with_fn(validate_token);

    cfg.service(root::index);
    cfg.service(
        web::scope("/register").service(auth::register::register)
    );
    cfg.service(
        web::scope("/login").service(auth::login::login)
    );
    cfg.service(
        web::scope("/kittens")
            .service(kittens::create::create_kitten)
            .service(kittens::get::get_kitten)
            .service(kittens::delete::delete_kitten)
            .wrap(user_auth)
    );
}

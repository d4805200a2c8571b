use serde::Serialize;
use crate::types::error::AppError;
use actix_web::{http::header::ContentType, HttpResponse, Responder};

/// Successful outcomes a handler can produce. Failures go through [`AppError`].
pub enum ApiResponse<T> {
    Ok(T),
    Created(T),
    /// 204 with an empty body.
    NoContent,
    Html(&'static str),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::Created(v) => HttpResponse::Created().json(v),
            ApiResponse::NoContent => HttpResponse::NoContent().finish(),
            ApiResponse::Html(page) => HttpResponse::Ok()
                .content_type(ContentType::html())
                .body(page),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

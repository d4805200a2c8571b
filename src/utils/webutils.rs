use std::future::{ready, Ready};

use actix_web::{
    dev::{Payload, ServiceRequest},
    error::{JsonPayloadError, PathError},
    http::header::AUTHORIZATION,
    web, Either, FromRequest, HttpMessage, HttpRequest,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::db::repository::UserRepository;
use crate::state::AppState;
use crate::types::error::AppError;

/// The user resolved by [`authenticate`] for the current request.
///
/// `None` when the token was valid but its user no longer exists.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub Option<entity::user::Model>);

impl CurrentUser {
    pub fn id(&self) -> Option<i32> {
        self.0.as_ref().map(|u| u.id)
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let user = req
            .extensions()
            .get::<CurrentUser>()
            .cloned()
            .unwrap_or(CurrentUser(None));
        ready(Ok(user))
    }
}

/// Token from an `Authorization: <scheme> <token>` header. The scheme word
/// is not checked.
#[derive(Clone, Debug)]
pub struct Credential(String);

impl Credential {
    pub fn parse(header: &str) -> Option<Self> {
        let mut parts = header.split_whitespace();
        let _scheme = parts.next()?;
        let token = parts.next()?;
        Some(Credential(token.to_string()))
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

impl FromRequest for Credential {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let credential = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(Credential::parse)
            .ok_or(AppError::Unauthorized);
        ready(credential)
    }
}

/// Verifies the credential and resolves its user. Shared by the middleware
/// and the guarded fallback.
pub async fn authenticate(state: &AppState, credential: Option<Credential>) -> Result<CurrentUser, AppError> {
    let credential = credential.ok_or(AppError::Unauthorized)?;

    let claims = state.tokens.verify(credential.token()).map_err(|e| {
        debug!("rejected bearer token: {e}");
        e
    })?;

    Ok(CurrentUser(state.store.find_user_by_id(claims.id).await?))
}

/// Guard for protected scopes.
pub async fn validate_token(req: ServiceRequest, credential: Option<Credential>) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let state = match req.app_data::<web::Data<AppState>>() {
        Some(state) => state.clone(),
        None => return Err((AppError::Internal("application state not configured".to_string()).into(), req)),
    };

    match authenticate(&state, credential).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            Ok(req)
        }
        Err(e) => Err((e.into(), req)),
    }
}

/// Request body accepted either as JSON or as a urlencoded form.
pub type JsonOrForm<T> = Either<web::Json<T>, web::Form<T>>;

pub fn payload<T: DeserializeOwned + 'static>(body: JsonOrForm<T>) -> T {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

pub fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

pub fn path_error(_err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::NotFound.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_ignores_scheme_word() {
        assert_eq!(Credential::parse("Bearer abc").unwrap().token(), "abc");
        assert_eq!(Credential::parse("bearer abc").unwrap().token(), "abc");
        assert_eq!(Credential::parse("Token   abc").unwrap().token(), "abc");
    }

    #[test]
    fn credential_needs_a_token_part() {
        assert!(Credential::parse("").is_none());
        assert!(Credential::parse("Bearer").is_none());
        assert!(Credential::parse("Bearer   ").is_none());
    }
}

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse, error, web};
use futures_util::future::{Ready, ready};
use serde_json::json;

use nofilter::services::Claims;

use crate::web::helpers::bearer_token;
use crate::web::state::AppState;

/// Verified bearer identity. Using this as a handler argument is what
/// makes an endpoint require authentication: extraction fails with 401
/// when the Authorization header is missing, malformed, expired, or
/// signed with the wrong secret.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

fn unauthorized(message: &str) -> actix_web::Error {
    error::InternalError::from_response(
        message.to_string(),
        HttpResponse::Unauthorized().json(json!({ "error": message })),
    )
    .into()
}

fn authenticate(req: &HttpRequest) -> Result<AuthUser, actix_web::Error> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| error::ErrorInternalServerError("App state missing"))?;

    let token = bearer_token(req).ok_or_else(|| unauthorized("No token provided"))?;

    match state.tokens.verify(token) {
        Ok(claims) => Ok(AuthUser(claims)),
        Err(_) => Err(unauthorized("Invalid token")),
    }
}

impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

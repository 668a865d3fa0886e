use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use nofilter::common::AuthError;
use nofilter::db;
use nofilter::models::{PublicUser, UserCreate};
use nofilter::services::PasswordManager;

use crate::web::auth::AuthUser;
use crate::web::helpers::{client_ip, error_json};
use crate::web::security::validate_username;
use crate::web::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}

#[post("/api/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<CredentialsForm>,
) -> impl Responder {
    if !state.rate_limiter.check_rate_limit(
        &format!("signup:{}", client_ip(&req)),
        10,                        // 10 accounts
        Duration::from_secs(3600), // per hour
    ) {
        return error_json(
            StatusCode::TOO_MANY_REQUESTS,
            "Too many signup attempts. Please try again later.",
        );
    }

    let username = body.username.trim().to_string();
    let password = body.password.as_str();

    if username.is_empty() || password.is_empty() {
        return error_json(
            StatusCode::BAD_REQUEST,
            "Username and password are required",
        );
    }

    if let Err(message) = validate_username(&username) {
        return error_json(StatusCode::BAD_REQUEST, &message);
    }

    let password_hash = match PasswordManager::hash_password(password) {
        Ok(h) => h,
        Err(e) => {
            log::error!("Password hashing error: {}", e);
            return error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error");
        }
    };

    let user = match db::create_user(
        &state.pool,
        &UserCreate {
            username,
            password_hash,
        },
    )
    .await
    {
        Ok(u) => u,
        Err(AuthError::AlreadyExists(_)) => {
            return error_json(StatusCode::CONFLICT, "Username already exists");
        }
        Err(e) => {
            log::error!("Signup failed: {}", e);
            return error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error");
        }
    };

    match state.tokens.issue(&user) {
        Ok(token) => HttpResponse::Created().json(json!({ "token": token })),
        Err(e) => {
            log::error!("Token issuance failed: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

#[post("/api/signin")]
pub async fn signin(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<CredentialsForm>,
) -> impl Responder {
    if !state.rate_limiter.check_rate_limit(
        &format!("signin:{}", client_ip(&req)),
        5,                        // 5 attempts
        Duration::from_secs(300), // per 5 minutes
    ) {
        return error_json(
            StatusCode::TOO_MANY_REQUESTS,
            "Too many signin attempts. Please try again later.",
        );
    }

    let username = body.username.trim();
    let password = body.password.as_str();

    if username.is_empty() || password.is_empty() {
        return error_json(
            StatusCode::BAD_REQUEST,
            "Username and password are required",
        );
    }

    let user = match db::get_user_by_username(&state.pool, username).await {
        Ok(u) => u,
        Err(e) => {
            log::error!("Database error during signin: {}", e);
            return error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error");
        }
    };

    // Verify against a dummy hash when the user is unknown so response
    // timing does not reveal which usernames exist.
    let stored_hash = user
        .as_ref()
        .map(|u| u.password_hash.as_str())
        .unwrap_or_else(|| PasswordManager::dummy_hash());

    let password_valid =
        PasswordManager::verify_password(password, stored_hash).unwrap_or(false);

    let user = match user {
        Some(u) if password_valid => u,
        _ => return error_json(StatusCode::UNAUTHORIZED, "Invalid credentials"),
    };

    match state.tokens.issue(&user) {
        Ok(token) => HttpResponse::Ok().json(json!({ "token": token })),
        Err(e) => {
            log::error!("Token issuance failed: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

#[get("/api/me")]
pub async fn me(state: web::Data<AppState>, auth: AuthUser) -> impl Responder {
    match db::get_user_by_id(&state.pool, auth.0.sub).await {
        Ok(Some(user)) => HttpResponse::Ok().json(PublicUser::from(user)),
        Ok(None) => error_json(StatusCode::NOT_FOUND, "User not found"),
        Err(e) => {
            log::error!("Database error fetching current user: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, post, web};

use nofilter::common::TaxonomyError;
use nofilter::db;
use nofilter::models::{CategoryCreate, TagCreate};

use crate::web::auth::AuthUser;
use crate::web::helpers::error_json;
use crate::web::state::AppState;

#[get("/api/categories")]
pub async fn list_categories(state: web::Data<AppState>) -> impl Responder {
    match db::list_categories(&state.pool).await {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(e) => {
            log::error!("Category listing failed: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

#[post("/api/categories")]
pub async fn create_category(
    state: web::Data<AppState>,
    _auth: AuthUser,
    body: web::Json<CategoryCreate>,
) -> impl Responder {
    let name = body.name.trim().to_string();

    if name.is_empty() {
        return error_json(StatusCode::BAD_REQUEST, "Name is required");
    }

    match db::create_category(&state.pool, &CategoryCreate { name }).await {
        Ok(category) => HttpResponse::Created().json(category),
        Err(TaxonomyError::AlreadyExists(_)) => {
            error_json(StatusCode::CONFLICT, "Category already exists")
        }
        Err(e) => {
            log::error!("Category creation failed: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

#[get("/api/tags")]
pub async fn list_tags(state: web::Data<AppState>) -> impl Responder {
    match db::list_tags(&state.pool).await {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(e) => {
            log::error!("Tag listing failed: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

#[post("/api/tags")]
pub async fn create_tag(
    state: web::Data<AppState>,
    _auth: AuthUser,
    body: web::Json<TagCreate>,
) -> impl Responder {
    let name = body.name.trim().to_string();

    if name.is_empty() {
        return error_json(StatusCode::BAD_REQUEST, "Name is required");
    }

    match db::create_tag(&state.pool, &TagCreate { name }).await {
        Ok(tag) => HttpResponse::Created().json(tag),
        Err(TaxonomyError::AlreadyExists(_)) => {
            error_json(StatusCode::CONFLICT, "Tag already exists")
        }
        Err(e) => {
            log::error!("Tag creation failed: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use uuid::Uuid;

use nofilter::common::PostError;
use nofilter::db;
use nofilter::models::{PostCreate, PostQuery, PostUpdate};

use crate::web::auth::AuthUser;
use crate::web::helpers::error_json;
use crate::web::state::AppState;

#[get("/api/posts")]
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PostQuery>,
) -> impl Responder {
    match db::list_posts(&state.pool, &query).await {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(PostError::InvalidRequest(message)) => {
            error_json(StatusCode::BAD_REQUEST, &message)
        }
        Err(e) => {
            log::error!("Post listing failed: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

#[get("/api/posts/{slug}")]
pub async fn get_post(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let slug = path.into_inner();

    match db::get_post_by_slug(&state.pool, &slug).await {
        Ok(Some(post)) => HttpResponse::Ok().json(post),
        Ok(None) => error_json(StatusCode::NOT_FOUND, "Post not found"),
        Err(e) => {
            log::error!("Post lookup failed: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

#[post("/api/posts")]
pub async fn create_post(
    state: web::Data<AppState>,
    auth: AuthUser,
    body: web::Json<PostCreate>,
) -> impl Responder {
    let data = body.into_inner();

    if data.title.trim().is_empty() || data.content.trim().is_empty() {
        return error_json(StatusCode::BAD_REQUEST, "Title and content are required");
    }

    match db::create_post(&state.pool, auth.0.sub, &data).await {
        Ok(post) => HttpResponse::Created().json(post),
        Err(e) => {
            log::error!("Post creation failed: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

#[put("/api/posts/{id}")]
pub async fn update_post(
    state: web::Data<AppState>,
    auth: AuthUser,
    path: web::Path<Uuid>,
    body: web::Json<PostUpdate>,
) -> impl Responder {
    let id = path.into_inner();
    let data = body.into_inner();

    if data.is_empty() {
        return error_json(StatusCode::BAD_REQUEST, "No fields provided");
    }

    // Ownership is checked before any mutation.
    let existing = match db::get_post_by_id(&state.pool, id).await {
        Ok(Some(post)) => post,
        Ok(None) => return error_json(StatusCode::NOT_FOUND, "Post not found"),
        Err(e) => {
            log::error!("Post lookup failed: {}", e);
            return error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error");
        }
    };

    if existing.author_id != auth.0.sub {
        return error_json(StatusCode::FORBIDDEN, "Forbidden");
    }

    match db::update_post(&state.pool, id, &data).await {
        Ok(Some(post)) => HttpResponse::Ok().json(post),
        Ok(None) => error_json(StatusCode::NOT_FOUND, "Post not found"),
        Err(e) => {
            log::error!("Post update failed: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

#[delete("/api/posts/{id}")]
pub async fn delete_post(
    state: web::Data<AppState>,
    auth: AuthUser,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    let existing = match db::get_post_by_id(&state.pool, id).await {
        Ok(Some(post)) => post,
        Ok(None) => return error_json(StatusCode::NOT_FOUND, "Post not found"),
        Err(e) => {
            log::error!("Post lookup failed: {}", e);
            return error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error");
        }
    };

    if existing.author_id != auth.0.sub {
        return error_json(StatusCode::FORBIDDEN, "Forbidden");
    }

    match db::delete_post(&state.pool, id).await {
        Ok(Some(_)) => HttpResponse::NoContent().finish(),
        Ok(None) => error_json(StatusCode::NOT_FOUND, "Post not found"),
        Err(e) => {
            log::error!("Post deletion failed: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

#[get("/api/posts/{id}/tags")]
pub async fn list_post_tags(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    let exists = match db::get_post_by_id(&state.pool, id).await {
        Ok(found) => found.is_some(),
        Err(e) => {
            log::error!("Post lookup failed: {}", e);
            return error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error");
        }
    };

    if !exists {
        return error_json(StatusCode::NOT_FOUND, "Post not found");
    }

    match db::tags_for_post(&state.pool, id).await {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(e) => {
            log::error!("Tag listing failed: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

#[post("/api/posts/{id}/tags/{tag_id}")]
pub async fn attach_tag(
    state: web::Data<AppState>,
    auth: AuthUser,
    path: web::Path<(Uuid, Uuid)>,
) -> impl Responder {
    let (post_id, tag_id) = path.into_inner();

    let post = match db::get_post_by_id(&state.pool, post_id).await {
        Ok(Some(post)) => post,
        Ok(None) => return error_json(StatusCode::NOT_FOUND, "Post not found"),
        Err(e) => {
            log::error!("Post lookup failed: {}", e);
            return error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error");
        }
    };

    if post.author_id != auth.0.sub {
        return error_json(StatusCode::FORBIDDEN, "Forbidden");
    }

    match db::get_tag_by_id(&state.pool, tag_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return error_json(StatusCode::NOT_FOUND, "Tag not found"),
        Err(e) => {
            log::error!("Tag lookup failed: {}", e);
            return error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error");
        }
    }

    match db::attach_tag(&state.pool, post_id, tag_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => {
            log::error!("Tag attach failed: {}", e);
            error_json(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
        }
    }
}

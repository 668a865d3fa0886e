use actix_web::web;

use crate::web::handlers::{auth, posts, taxonomy};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(auth::signup)
        .service(auth::signin)
        .service(auth::me)
        .service(posts::list_posts)
        .service(posts::create_post)
        .service(posts::list_post_tags)
        .service(posts::attach_tag)
        .service(posts::get_post)
        .service(posts::update_post)
        .service(posts::delete_post)
        .service(taxonomy::list_categories)
        .service(taxonomy::create_category)
        .service(taxonomy::list_tags)
        .service(taxonomy::create_tag);
}

use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::common::PostError;
use crate::log_err;
use crate::models::{Post, PostCreate, PostQuery, PostUpdate};
use crate::services::slug::post_slug;

/// Escape LIKE metacharacters so a search string is matched as a
/// literal substring.
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

pub async fn create_post(
    pool: &PgPool,
    author_id: Uuid,
    data: &PostCreate,
) -> Result<Post, sqlx::Error> {
    let slug = post_slug(&data.title, Utc::now());

    let result = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts
            (title, slug, content, excerpt, image_url, category_id,
             author_id, published, featured, read_time)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING *
        "#,
    )
    .bind(&data.title)
    .bind(&slug)
    .bind(&data.content)
    .bind(data.excerpt.as_deref())
    .bind(data.image_url.as_deref())
    .bind(data.category_id)
    .bind(author_id)
    .bind(data.published)
    .bind(data.featured)
    .bind(data.read_time)
    .fetch_one(pool)
    .await;

    match result {
        // Slug collision: same title twice within one millisecond.
        Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some("23505") => {
            log_err!(pool, data.clone());
            Err(sqlx::Error::Database(e))
        }

        other => other,
    }
}

pub async fn list_posts(pool: &PgPool, query: &PostQuery) -> Result<Vec<Post>, PostError> {
    if query.limit.is_some_and(|limit| limit < 0) {
        return Err(PostError::InvalidRequest(
            "Pagination 'limit' is negative integer".into(),
        ));
    }

    if query.offset.is_some_and(|offset| offset < 0) {
        return Err(PostError::InvalidRequest(
            "Pagination 'offset' is negative integer".into(),
        ));
    }

    let mut query_builder: QueryBuilder<Postgres> =
        QueryBuilder::new("SELECT * FROM posts WHERE ");
    let mut separated = query_builder.separated(" AND ");

    // The public listing defaults to published posts only.
    separated
        .push("published = ")
        .push_bind_unseparated(query.published.unwrap_or(true));

    if let Some(category_id) = query.category_id {
        separated
            .push("category_id = ")
            .push_bind_unseparated(category_id);
    }

    if let Some(author_id) = query.author_id {
        separated
            .push("author_id = ")
            .push_bind_unseparated(author_id);
    }

    if let Some(featured) = query.featured {
        separated
            .push("featured = ")
            .push_bind_unseparated(featured);
    }

    if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
        let pattern = format!("%{}%", escape_like(search));
        separated
            .push("(title ILIKE ")
            .push_bind_unseparated(pattern.clone())
            .push_unseparated(" OR content ILIKE ")
            .push_bind_unseparated(pattern.clone())
            .push_unseparated(" OR excerpt ILIKE ")
            .push_bind_unseparated(pattern)
            .push_unseparated(")");
    }

    query_builder.push(" ORDER BY created_at DESC ");

    query_builder
        .push(" LIMIT ")
        .push_bind(query.effective_limit());
    query_builder
        .push(" OFFSET ")
        .push_bind(query.effective_offset());

    let posts = query_builder
        .build_query_as::<Post>()
        .fetch_all(pool)
        .await?;

    Ok(posts)
}

pub async fn get_post_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(r#"SELECT * FROM posts WHERE slug = $1"#)
        .bind(slug)
        .fetch_optional(pool)
        .await
}

pub async fn get_post_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(r#"SELECT * FROM posts WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Partial update; the slug is kept stable across edits.
pub async fn update_post(
    pool: &PgPool,
    id: Uuid,
    data: &PostUpdate,
) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET
            title = COALESCE($1, title),
            content = COALESCE($2, content),
            excerpt = COALESCE($3, excerpt),
            image_url = COALESCE($4, image_url),
            category_id = COALESCE($5, category_id),
            published = COALESCE($6, published),
            featured = COALESCE($7, featured),
            read_time = COALESCE($8, read_time),
            updated_at = now()
        WHERE id = $9
        RETURNING *
        "#,
    )
    .bind(data.title.as_deref())
    .bind(data.content.as_deref())
    .bind(data.excerpt.as_deref())
    .bind(data.image_url.as_deref())
    .bind(data.category_id)
    .bind(data.published)
    .bind(data.featured)
    .bind(data.read_time)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_post(pool: &PgPool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        DELETE FROM posts
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

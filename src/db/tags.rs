use sqlx::PgPool;
use uuid::Uuid;

use crate::common::TaxonomyError;
use crate::models::{Tag, TagCreate};
use crate::services::slug::slugify;

pub async fn list_tags(pool: &PgPool) -> Result<Vec<Tag>, sqlx::Error> {
    sqlx::query_as::<_, Tag>(r#"SELECT * FROM tags ORDER BY name"#)
        .fetch_all(pool)
        .await
}

pub async fn create_tag(pool: &PgPool, data: &TagCreate) -> Result<Tag, TaxonomyError> {
    let slug = slugify(&data.name);

    let result = sqlx::query_as::<_, Tag>(
        r#"
        INSERT INTO tags (name, slug) VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(&data.name)
    .bind(&slug)
    .fetch_one(pool)
    .await;

    match result {
        Ok(tag) => Ok(tag),

        Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some("23505") => {
            Err(TaxonomyError::AlreadyExists(data.name.clone()))
        }

        Err(e) => Err(TaxonomyError::Database(e)),
    }
}

pub async fn get_tag_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Tag>, sqlx::Error> {
    sqlx::query_as::<_, Tag>(r#"SELECT * FROM tags WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Idempotent: attaching a tag twice is not an error.
pub async fn attach_tag(pool: &PgPool, post_id: Uuid, tag_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO post_tags (post_id, tag_id) VALUES ($1, $2)
        ON CONFLICT (post_id, tag_id) DO NOTHING
        "#,
    )
    .bind(post_id)
    .bind(tag_id)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn tags_for_post(pool: &PgPool, post_id: Uuid) -> Result<Vec<Tag>, sqlx::Error> {
    sqlx::query_as::<_, Tag>(
        r#"
        SELECT t.*
        FROM tags t
        JOIN post_tags pt ON pt.tag_id = t.id
        WHERE pt.post_id = $1
        ORDER BY t.name
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}

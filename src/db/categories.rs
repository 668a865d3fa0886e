use sqlx::PgPool;

use crate::common::TaxonomyError;
use crate::models::{Category, CategoryCreate};
use crate::services::slug::slugify;

pub async fn list_categories(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
    sqlx::query_as::<_, Category>(r#"SELECT * FROM categories ORDER BY name"#)
        .fetch_all(pool)
        .await
}

pub async fn create_category(
    pool: &PgPool,
    data: &CategoryCreate,
) -> Result<Category, TaxonomyError> {
    let slug = slugify(&data.name);

    let result = sqlx::query_as::<_, Category>(
        r#"
        INSERT INTO categories (name, slug) VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(&data.name)
    .bind(&slug)
    .fetch_one(pool)
    .await;

    match result {
        Ok(category) => Ok(category),

        Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some("23505") => {
            Err(TaxonomyError::AlreadyExists(data.name.clone()))
        }

        Err(e) => Err(TaxonomyError::Database(e)),
    }
}

use sqlx::PgPool;
use uuid::Uuid;

use crate::common::AuthError;
use crate::models::{User, UserCreate};

pub async fn create_user(pool: &PgPool, data: &UserCreate) -> Result<User, AuthError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, password_hash) VALUES ($1, $2)
        ON CONFLICT (username) DO NOTHING
        RETURNING *
        "#,
    )
    .bind(&data.username)
    .bind(&data.password_hash)
    .fetch_optional(pool)
    .await?;

    match user {
        Some(u) => Ok(u),
        None => Err(AuthError::AlreadyExists(data.username.as_str().into())),
    }
}

pub async fn get_user_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE username = $1"#)
        .bind(username)
        .fetch_optional(pool)
        .await
}

pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE id = $1"#)
        .bind(id)
        .fetch_optional(pool)
        .await
}

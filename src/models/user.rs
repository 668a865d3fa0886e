use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Shape returned by the API. Never exposes the password hash.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct UserCreate {
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum UserIden {
    Id(Uuid),
    Username(String),
}

impl From<User> for PublicUser {
    fn from(
        User {
            id,
            username,
            created_at,
            ..
        }: User,
    ) -> Self {
        PublicUser {
            id,
            username,
            created_at,
        }
    }
}

impl fmt::Display for UserIden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserIden::Id(id) => write!(f, "ID {}", id),
            UserIden::Username(name) => write!(f, "username '{}'", name),
        }
    }
}

impl From<Uuid> for UserIden {
    fn from(id: Uuid) -> Self {
        UserIden::Id(id)
    }
}

impl From<&str> for UserIden {
    fn from(username: &str) -> Self {
        UserIden::Username(username.to_string())
    }
}

impl From<String> for UserIden {
    fn from(username: String) -> Self {
        UserIden::Username(username)
    }
}

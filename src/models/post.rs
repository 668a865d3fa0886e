use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<Uuid>,
    pub author_id: Uuid,
    pub published: bool,
    pub featured: bool,
    pub read_time: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCreate {
    pub title: String,
    pub content: String,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
    pub read_time: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<Uuid>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub read_time: Option<i32>,
}

/// Filters for the public post listing. Every field is optional; the
/// listing itself is always ordered by creation date descending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostQuery {
    pub published: Option<bool>,
    pub category_id: Option<Uuid>,
    pub author_id: Option<Uuid>,
    pub featured: Option<bool>,
    pub search: Option<String>,
    //------------------------------------
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl PostQuery {
    pub const DEFAULT_LIMIT: i64 = 50;
    pub const MAX_LIMIT: i64 = 100;

    /// Limit actually applied to the query: default when absent,
    /// clamped to the maximum page size.
    pub fn effective_limit(&self) -> i64 {
        self.limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .min(Self::MAX_LIMIT)
    }

    pub fn effective_offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }
}

impl PostUpdate {
    pub fn is_empty(&self) -> bool {
        matches!(
            self,
            Self {
                title: None,
                content: None,
                excerpt: None,
                image_url: None,
                category_id: None,
                published: None,
                featured: None,
                read_time: None,
            }
        )
    }
}

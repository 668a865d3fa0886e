use chrono::{DateTime, Utc};
use uuid::Uuid;

use nofilter::models::*;

const SQL_TIME_FMT: &str = "%Y-%m-%d %H:%M:%S%#z";

pub fn parse_time(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_str(s, SQL_TIME_FMT)
        .expect("Invalid time format in test helper")
        .with_timezone(&Utc)
}

pub fn get_seed_user_0() -> User {
    User {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000000").unwrap(),
        username: "user0".to_string(),
        password_hash: "password0".to_string(),
        created_at: parse_time("2026-01-04 22:15:06+00"),
        updated_at: parse_time("2026-01-04 22:15:06+00"),
    }
}

pub fn get_seed_user_1() -> User {
    User {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap(),
        username: "user1".to_string(),
        password_hash: "password1".to_string(),
        created_at: parse_time("2026-01-05 13:22:56+00"),
        updated_at: parse_time("2026-01-05 13:22:56+00"),
    }
}

pub fn get_seed_post_0() -> Post {
    Post {
        id: Uuid::parse_str("00000000-0000-0000-0000-000000000100").unwrap(),
        title: "First Post".to_string(),
        slug: "first-post-1767564906000".to_string(),
        content: "Hello from the seed data.".to_string(),
        excerpt: Some("Hello".to_string()),
        image_url: None,
        category_id: None,
        author_id: get_seed_user_0().id,
        published: true,
        featured: false,
        read_time: Some(3),
        created_at: parse_time("2026-01-04 22:15:06+00"),
        updated_at: parse_time("2026-01-04 22:15:06+00"),
    }
}

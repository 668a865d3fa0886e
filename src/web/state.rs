use sqlx::PgPool;
use std::sync::Arc;

use nofilter::services::TokenSigner;

use crate::web::security::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub tokens: TokenSigner,
    pub rate_limiter: Arc<RateLimiter>,
}

pub use auth::PasswordManager;
pub use tokens::{Claims, TokenSigner, DEFAULT_TTL_SECS};

pub mod slug;

mod auth;
mod tokens;

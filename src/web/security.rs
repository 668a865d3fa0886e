use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

/// Simple in-memory rate limiter
pub struct RateLimiter {
    requests: Mutex<HashMap<String, Vec<SystemTime>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self {
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Check if request should be allowed
    /// Returns true if allowed, false if rate limit exceeded
    pub fn check_rate_limit(&self, key: &str, max_requests: usize, window: Duration) -> bool {
        let now = SystemTime::now();
        let mut requests = self
            .requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let entry = requests.entry(key.to_string()).or_default();

        // Remove old requests outside the window
        entry.retain(|&time| {
            now.duration_since(time).unwrap_or(Duration::from_secs(0)) < window
        });

        if entry.len() >= max_requests {
            return false;
        }

        entry.push(now);

        // Cleanup: remove empty entries to prevent unbounded memory growth
        requests.retain(|_, times| !times.is_empty());

        true
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// Username validation: what the signup endpoint accepts as an account
/// handle. Length bounds plus a conservative charset.
pub fn validate_username(username: &str) -> Result<(), String> {
    const MAX_LENGTH: usize = 32;

    if username.is_empty() {
        return Err("Username and password are required".to_string());
    }

    if username.len() > MAX_LENGTH {
        return Err(format!("Username must be at most {} characters", MAX_LENGTH));
    }

    let valid = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.');

    if !valid {
        return Err(
            "Username may only contain letters, digits, '_', '-' and '.'".to_string(),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_rate_limiter_allows_within_budget() {
        let limiter = RateLimiter::new();

        for _ in 0..5 {
            assert!(limiter.check_rate_limit("signin:1.2.3.4", 5, Duration::from_secs(60)));
        }
    }

    #[test]
    fn test_rate_limiter_blocks_over_budget() {
        let limiter = RateLimiter::new();

        for _ in 0..5 {
            limiter.check_rate_limit("signin:1.2.3.4", 5, Duration::from_secs(60));
        }

        assert!(!limiter.check_rate_limit("signin:1.2.3.4", 5, Duration::from_secs(60)));
    }

    #[test]
    fn test_rate_limiter_keys_are_independent() {
        let limiter = RateLimiter::new();

        for _ in 0..5 {
            limiter.check_rate_limit("signin:1.2.3.4", 5, Duration::from_secs(60));
        }

        assert!(limiter.check_rate_limit("signin:5.6.7.8", 5, Duration::from_secs(60)));
    }

    #[test]
    fn test_validate_username_accepts_handles() {
        assert!(validate_username("user0").is_ok());
        assert!(validate_username("a.b_c-d").is_ok());
    }

    #[test]
    fn test_validate_username_rejects_empty() {
        assert!(validate_username("").is_err());
    }

    #[test]
    fn test_validate_username_rejects_bad_charset() {
        assert!(validate_username("user name").is_err());
        assert!(validate_username("user@example.com").is_err());
    }

    #[test]
    fn test_validate_username_rejects_overlong() {
        assert!(validate_username(&"a".repeat(33)).is_err());
    }
}

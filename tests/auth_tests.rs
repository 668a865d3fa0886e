#[cfg(test)]
pub mod auth_tests {
    use nofilter::services::PasswordManager;

    #[test]
    fn test_hash_password_produces_argon2id_phc() {
        let hash = PasswordManager::hash_password("correct horse battery staple")
            .expect("hashing failed");

        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = PasswordManager::hash_password("password").expect("hashing failed");
        let second = PasswordManager::hash_password("password").expect("hashing failed");

        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_password_roundtrip() {
        let hash = PasswordManager::hash_password("hunter2").expect("hashing failed");

        assert!(PasswordManager::verify_password("hunter2", &hash).expect("verify failed"));
        assert!(!PasswordManager::verify_password("hunter3", &hash).expect("verify failed"));
    }

    #[test]
    fn test_verify_password_rejects_garbage_hash() {
        assert!(PasswordManager::verify_password("password", "not-a-phc-string").is_err());
    }

    #[test]
    fn test_dummy_hash_is_valid_and_matches_nothing() {
        let dummy = PasswordManager::dummy_hash();

        assert!(dummy.starts_with("$argon2id$"));
        assert!(!PasswordManager::verify_password("password", dummy).expect("verify failed"));
    }
}

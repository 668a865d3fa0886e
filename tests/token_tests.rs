mod common;

#[cfg(test)]
pub mod token_tests {
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

    use super::common::*;

    use nofilter::services::{Claims, TokenSigner};

    const SECRET: &str = "test-secret";

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let signer = TokenSigner::new(SECRET, 3600);
        let user = get_seed_user_0();

        let token = signer.issue(&user).expect("issuance failed");
        let claims = signer.verify(&token).expect("verification failed");

        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.username, user.username);
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let signer = TokenSigner::new(SECRET, 3600);
        let other = TokenSigner::new("another-secret", 3600);

        let token = signer.issue(&get_seed_user_0()).expect("issuance failed");

        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_tampered_token() {
        let signer = TokenSigner::new(SECRET, 3600);
        let token = signer.issue(&get_seed_user_0()).expect("issuance failed");

        let mut tampered = token.clone();
        tampered.pop();

        assert!(signer.verify(&tampered).is_err());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let signer = TokenSigner::new(SECRET, 3600);

        assert!(signer.verify("").is_err());
        assert!(signer.verify("not.a.token").is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let signer = TokenSigner::new(SECRET, 3600);
        let user = get_seed_user_0();

        // Expired well past the default validation leeway.
        let issued_at = parse_time("2020-01-01 00:00:00+00").timestamp() as usize;
        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            iat: issued_at,
            exp: issued_at + 3600,
        };

        let stale = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .expect("encoding failed");

        assert!(signer.verify(&stale).is_err());
    }
}

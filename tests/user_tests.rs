mod common;

#[cfg(test)]
pub mod user_tests {
    use uuid::Uuid;

    use super::common::*;

    use nofilter::models::*;

    #[test]
    fn test_public_user_drops_password_hash() {
        let user = get_seed_user_0();
        let public = PublicUser::from(user.clone());

        assert_eq!(public.id, user.id);
        assert_eq!(public.username, user.username);
        assert_eq!(public.created_at, user.created_at);

        let json = serde_json::to_value(&public).expect("serialization failed");
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_public_user_serializes_camel_case() {
        let public = PublicUser::from(get_seed_user_1());
        let json = serde_json::to_value(&public).expect("serialization failed");

        assert!(json.get("createdAt").is_some());
        assert_eq!(json["username"], "user1");
    }

    #[test]
    fn test_user_iden_display_id() {
        let id = Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap();
        let iden = UserIden::from(id);

        assert_eq!(iden.to_string(), "ID 00000000-0000-0000-0000-000000000001");
    }

    #[test]
    fn test_user_iden_display_username() {
        let iden = UserIden::from("user0");
        assert_eq!(iden.to_string(), "username 'user0'");
    }
}

//! Tests for users module

#[cfg(test)]
mod tests {
    use super::super::*;

    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    use crate::auth::oauth::OAuthProfile;
    use crate::common::ApiError;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        crate::common::migrations::run_migrations(&pool)
            .await
            .expect("migrations");
        pool
    }

    #[tokio::test]
    async fn test_create_and_find_user() {
        let service = UsersService::new(test_pool().await);

        let created = service
            .create("a@x.com", Some("Alice"), None, Some("$argon2$fake"))
            .await
            .unwrap();

        assert!(created.id.starts_with("U_"));
        assert_eq!(created.email, "a@x.com");
        assert_eq!(created.name.as_deref(), Some("Alice"));
        assert!(!created.is_oauth_only());

        let by_email = service.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, created.id);

        let by_id = service.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "a@x.com");

        assert!(service.find_by_email("nobody@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_maps_to_bad_request() {
        let service = UsersService::new(test_pool().await);

        service
            .create("a@x.com", None, None, Some("$argon2$fake"))
            .await
            .unwrap();

        let second = service.create("a@x.com", None, None, None).await;

        match second {
            Err(ApiError::BadRequest(msg)) => assert_eq!(msg, "User already exists"),
            other => panic!("expected BadRequest, got {:?}", other.map(|u| u.id)),
        }
    }

    #[tokio::test]
    async fn test_password_hash_never_serialized() {
        let service = UsersService::new(test_pool().await);

        let user = service
            .create("a@x.com", Some("Alice"), None, Some("$argon2$secret"))
            .await
            .unwrap();

        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "a@x.com");
    }

    #[tokio::test]
    async fn test_oauth_find_or_create_is_idempotent() {
        let pool = test_pool().await;
        let service = UsersService::new(pool.clone());

        let profile = OAuthProfile {
            email: "oauth@x.com".to_string(),
            name: Some("OAuth User".to_string()),
            picture: Some("https://example.com/p.png".to_string()),
        };

        let first = service.find_or_create_oauth(&profile).await.unwrap();
        assert!(first.is_oauth_only());
        assert_eq!(first.picture.as_deref(), Some("https://example.com/p.png"));

        let second = service.find_or_create_oauth(&profile).await.unwrap();
        assert_eq!(second.id, first.id);

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind("oauth@x.com")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_oauth_login_links_existing_password_account() {
        let service = UsersService::new(test_pool().await);

        let existing = service
            .create("a@x.com", Some("Alice"), None, Some("$argon2$fake"))
            .await
            .unwrap();

        let profile = OAuthProfile {
            email: "a@x.com".to_string(),
            name: Some("Alice From Google".to_string()),
            picture: None,
        };

        let linked = service.find_or_create_oauth(&profile).await.unwrap();

        // the password account wins; the OAuth profile does not overwrite it
        assert_eq!(linked.id, existing.id);
        assert_eq!(linked.name.as_deref(), Some("Alice"));
        assert!(!linked.is_oauth_only());
    }

    #[tokio::test]
    async fn test_concurrent_oauth_callbacks_converge_on_one_row() {
        let pool = test_pool().await;
        let first = UsersService::new(pool.clone());
        let second = UsersService::new(pool.clone());

        let profile = OAuthProfile {
            email: "race@x.com".to_string(),
            name: None,
            picture: None,
        };

        let (a, b) = tokio::join!(
            first.find_or_create_oauth(&profile),
            second.find_or_create_oauth(&profile),
        );

        let a = a.unwrap();
        let b = b.unwrap();
        assert_eq!(a.id, b.id);

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind("race@x.com")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}

//! Tests for stores module

#[cfg(test)]
mod tests {
    use super::super::*;

    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    use super::super::models::{CreateStoreRequest, UpdateStoreRequest};
    use crate::common::ApiError;
    use crate::users::UsersService;

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

    async fn seed_user(pool: &SqlitePool, email: &str) -> String {
        UsersService::new(pool.clone())
            .create(email, None, None, None)
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_create_and_get_store() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@x.com").await;
        let service = StoresService::new(pool);

        let created = service
            .create(
                &owner,
                CreateStoreRequest {
                    title: "My Shop".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(created.id.starts_with("S_"));
        assert_eq!(created.title, "My Shop");
        assert_eq!(created.user_id, owner);
        assert!(created.description.is_none());

        let fetched = service.get_by_id(&created.id, &owner).await.unwrap();
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn test_store_invisible_to_other_users() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@x.com").await;
        let stranger = seed_user(&pool, "stranger@x.com").await;
        let service = StoresService::new(pool);

        let store = service
            .create(
                &owner,
                CreateStoreRequest {
                    title: "My Shop".to_string(),
                },
            )
            .await
            .unwrap();

        let result = service.get_by_id(&store.id, &stranger).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));

        let result = service.delete(&store.id, &stranger).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));

        // still there for the owner
        assert!(service.get_by_id(&store.id, &owner).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_store() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@x.com").await;
        let service = StoresService::new(pool);

        let store = service
            .create(
                &owner,
                CreateStoreRequest {
                    title: "My Shop".to_string(),
                },
            )
            .await
            .unwrap();

        let updated = service
            .update(
                &store.id,
                &owner,
                UpdateStoreRequest {
                    title: "Renamed Shop".to_string(),
                    description: Some("Now with a description".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Renamed Shop");
        assert_eq!(
            updated.description.as_deref(),
            Some("Now with a description")
        );
    }

    #[tokio::test]
    async fn test_delete_store() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@x.com").await;
        let service = StoresService::new(pool);

        let store = service
            .create(
                &owner,
                CreateStoreRequest {
                    title: "My Shop".to_string(),
                },
            )
            .await
            .unwrap();

        service.delete(&store.id, &owner).await.unwrap();

        let result = service.get_by_id(&store.id, &owner).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_blank_title_is_rejected() {
        let pool = test_pool().await;
        let owner = seed_user(&pool, "owner@x.com").await;
        let service = StoresService::new(pool);

        let result = service
            .create(
                &owner,
                CreateStoreRequest {
                    title: "   ".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }
}

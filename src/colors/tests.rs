//! Tests for colors module

#[cfg(test)]
mod tests {
    use super::super::*;

    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    use super::super::models::ColorRequest;
    use crate::common::ApiError;
    use crate::stores::StoresService;
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

    async fn seed_store(pool: &SqlitePool, email: &str) -> (String, String) {
        let user = UsersService::new(pool.clone())
            .create(email, None, None, None)
            .await
            .unwrap()
            .id;
        let store = StoresService::new(pool.clone())
            .create(
                &user,
                crate::stores::models::CreateStoreRequest {
                    title: "Test Shop".to_string(),
                },
            )
            .await
            .unwrap()
            .id;
        (user, store)
    }

    #[tokio::test]
    async fn test_color_lifecycle() {
        let pool = test_pool().await;
        let (user, store) = seed_store(&pool, "owner@x.com").await;
        let service = ColorsService::new(pool);

        let created = service
            .create(
                &store,
                &user,
                ColorRequest {
                    name: "Forest".to_string(),
                    value: "#228B22".to_string(),
                },
            )
            .await
            .unwrap();
        assert!(created.id.starts_with("K_"));
        assert_eq!(created.value, "#228B22");

        let listed = service.get_by_store(&store).await.unwrap();
        assert_eq!(listed.len(), 1);

        let updated = service
            .update(
                &created.id,
                &user,
                ColorRequest {
                    name: "Forest Green".to_string(),
                    value: "#228B23".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Forest Green");

        service.delete(&created.id, &user).await.unwrap();
        assert!(matches!(
            service.get_by_id(&created.id).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_mutation_requires_store_ownership() {
        let pool = test_pool().await;
        let (owner, store) = seed_store(&pool, "owner@x.com").await;
        let (stranger, _) = seed_store(&pool, "stranger@x.com").await;
        let service = ColorsService::new(pool);

        let color = service
            .create(
                &store,
                &owner,
                ColorRequest {
                    name: "Forest".to_string(),
                    value: "#228B22".to_string(),
                },
            )
            .await
            .unwrap();

        let result = service.delete(&color.id, &stranger).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
        assert!(service.get_by_id(&color.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_blank_fields_are_rejected() {
        let pool = test_pool().await;
        let (user, store) = seed_store(&pool, "owner@x.com").await;
        let service = ColorsService::new(pool);

        let result = service
            .create(
                &store,
                &user,
                ColorRequest {
                    name: "".to_string(),
                    value: "".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }
}

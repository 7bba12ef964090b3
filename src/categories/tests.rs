//! Tests for categories module

#[cfg(test)]
mod tests {
    use super::super::*;

    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    use super::super::models::CategoryRequest;
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

    fn category_request(title: &str) -> CategoryRequest {
        CategoryRequest {
            title: title.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_create_fetch_update_delete() {
        let pool = test_pool().await;
        let (user, store) = seed_store(&pool, "owner@x.com").await;
        let service = CategoriesService::new(pool);

        let created = service
            .create(&store, &user, category_request("Mugs"))
            .await
            .unwrap();
        assert!(created.id.starts_with("C_"));
        assert_eq!(created.title, "Mugs");
        assert_eq!(created.store_id, store);

        let listed = service.get_by_store(&store).await.unwrap();
        assert_eq!(listed.len(), 1);

        let updated = service
            .update(
                &created.id,
                &user,
                CategoryRequest {
                    title: "Drinkware".to_string(),
                    description: Some("Mugs and cups".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Drinkware");
        assert_eq!(updated.description.as_deref(), Some("Mugs and cups"));

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
        let service = CategoriesService::new(pool);

        let category = service
            .create(&store, &owner, category_request("Mugs"))
            .await
            .unwrap();

        let create = service
            .create(&store, &stranger, category_request("Plates"))
            .await;
        assert!(matches!(create, Err(ApiError::NotFound(_))));

        let update = service
            .update(&category.id, &stranger, category_request("Hijacked"))
            .await;
        assert!(matches!(update, Err(ApiError::NotFound(_))));

        let delete = service.delete(&category.id, &stranger).await;
        assert!(matches!(delete, Err(ApiError::NotFound(_))));

        // reads stay public
        assert!(service.get_by_id(&category.id).await.is_ok());
    }

    #[tokio::test]
    async fn test_blank_title_is_rejected() {
        let pool = test_pool().await;
        let (user, store) = seed_store(&pool, "owner@x.com").await;
        let service = CategoriesService::new(pool);

        let result = service.create(&store, &user, category_request("")).await;

        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }
}

//! Tests for reviews module

#[cfg(test)]
mod tests {
    use super::super::*;

    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    use super::super::models::ReviewRequest;
    use crate::common::ApiError;
    use crate::products::ProductsService;
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

    struct Fixture {
        owner: String,
        customer: String,
        store: String,
        product: String,
    }

    async fn seed(pool: &SqlitePool) -> Fixture {
        let users = UsersService::new(pool.clone());
        let owner = users
            .create("owner@x.com", None, None, None)
            .await
            .unwrap()
            .id;
        let customer = users
            .create("customer@x.com", None, None, None)
            .await
            .unwrap()
            .id;

        let store = StoresService::new(pool.clone())
            .create(
                &owner,
                crate::stores::models::CreateStoreRequest {
                    title: "Test Shop".to_string(),
                },
            )
            .await
            .unwrap()
            .id;

        let product = ProductsService::new(pool.clone())
            .create(
                &store,
                &owner,
                crate::products::models::ProductRequest {
                    title: "Mug".to_string(),
                    description: "A mug".to_string(),
                    price: 1999,
                    images: Vec::new(),
                    category_id: None,
                    color_id: None,
                },
            )
            .await
            .unwrap()
            .id;

        Fixture {
            owner,
            customer,
            store,
            product,
        }
    }

    fn review_request(rating: i64) -> ReviewRequest {
        ReviewRequest {
            text: "Great mug".to_string(),
            rating,
        }
    }

    #[tokio::test]
    async fn test_create_and_list_reviews() {
        let pool = test_pool().await;
        let fx = seed(&pool).await;
        let service = ReviewsService::new(pool);

        let review = service
            .create(&fx.customer, &fx.product, &fx.store, review_request(5))
            .await
            .unwrap();

        assert!(review.id.starts_with("R_"));
        assert_eq!(review.rating, 5);
        assert_eq!(review.user_id, fx.customer);

        let listed = service.get_by_store(&fx.store).await.unwrap();
        assert_eq!(listed.len(), 1);

        let fetched = service.get_by_id(&review.id).await.unwrap();
        assert_eq!(fetched.text, "Great mug");
    }

    #[tokio::test]
    async fn test_rating_out_of_range_is_rejected() {
        let pool = test_pool().await;
        let fx = seed(&pool).await;
        let service = ReviewsService::new(pool);

        for rating in [0, 6, -1] {
            let result = service
                .create(&fx.customer, &fx.product, &fx.store, review_request(rating))
                .await;
            assert!(matches!(result, Err(ApiError::ValidationError(_))));
        }
    }

    #[tokio::test]
    async fn test_review_requires_existing_product_in_store() {
        let pool = test_pool().await;
        let fx = seed(&pool).await;
        let service = ReviewsService::new(pool);

        let missing_product = service
            .create(&fx.customer, "P_MISSING", &fx.store, review_request(4))
            .await;
        assert!(matches!(missing_product, Err(ApiError::NotFound(_))));

        let wrong_store = service
            .create(&fx.customer, &fx.product, "S_MISSING", review_request(4))
            .await;
        assert!(matches!(wrong_store, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_only_author_can_delete() {
        let pool = test_pool().await;
        let fx = seed(&pool).await;
        let service = ReviewsService::new(pool);

        let review = service
            .create(&fx.customer, &fx.product, &fx.store, review_request(3))
            .await
            .unwrap();

        // even the store owner cannot delete someone else's review here
        let result = service.delete(&review.id, &fx.owner).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));

        service.delete(&review.id, &fx.customer).await.unwrap();
        assert!(matches!(
            service.get_by_id(&review.id).await,
            Err(ApiError::NotFound(_))
        ));
    }
}

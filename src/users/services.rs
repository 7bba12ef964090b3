use sqlx::SqlitePool;
use tracing::{debug, info};

use super::models::User;
use crate::auth::oauth::OAuthProfile;
use crate::common::{generate_user_id, safe_email_log, ApiError};

pub struct UsersService {
    db: SqlitePool,
}

impl UsersService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        Ok(user)
    }

    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.db)
            .await
            .map_err(ApiError::DatabaseError)?;

        Ok(user)
    }

    /// Create a user row. The UNIQUE constraint on email is the arbiter for
    /// concurrent registrations: a constraint violation surfaces as
    /// "already exists" instead of a 500.
    pub async fn create(
        &self,
        email: &str,
        name: Option<&str>,
        picture: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<User, ApiError> {
        let id = generate_user_id();

        sqlx::query(
            "INSERT INTO users (id, email, password_hash, name, picture) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(email)
        .bind(password_hash)
        .bind(name)
        .bind(picture)
        .execute(&self.db)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                ApiError::BadRequest("User already exists".to_string())
            } else {
                ApiError::DatabaseError(e)
            }
        })?;

        info!(
            user_id = %id,
            email = %safe_email_log(email),
            "Created user account"
        );

        self.find_by_id(&id)
            .await?
            .ok_or_else(|| ApiError::InternalServer("failed to fetch created user".to_string()))
    }

    /// Find the user for an OAuth profile, creating it on first login.
    ///
    /// INSERT OR IGNORE + re-select keeps concurrent duplicate callbacks for
    /// the same email idempotent: whichever insert loses the race silently
    /// converges on the surviving row.
    pub async fn find_or_create_oauth(&self, profile: &OAuthProfile) -> Result<User, ApiError> {
        if let Some(user) = self.find_by_email(&profile.email).await? {
            debug!(
                user_id = %user.id,
                email = %safe_email_log(&user.email),
                "Found existing user for OAuth login"
            );
            return Ok(user);
        }

        let id = generate_user_id();

        sqlx::query(
            "INSERT OR IGNORE INTO users (id, email, password_hash, name, picture) VALUES (?, ?, NULL, ?, ?)",
        )
        .bind(&id)
        .bind(&profile.email)
        .bind(profile.name.as_deref())
        .bind(profile.picture.as_deref())
        .execute(&self.db)
        .await
        .map_err(ApiError::DatabaseError)?;

        let user = self.find_by_email(&profile.email).await?.ok_or_else(|| {
            ApiError::InternalServer("failed to fetch user after OAuth creation".to_string())
        })?;

        if user.id == id {
            info!(
                user_id = %user.id,
                email = %safe_email_log(&user.email),
                "Created user account via OAuth just-in-time"
            );
        }

        Ok(user)
    }
}

//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName, user_password::UserPassword, user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                username,
                password_hash,
                role,
                created_at
            ) VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.username.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.role.code())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            // Only reachable when an operator has added a unique index
            Some(db) if db.is_unique_violation() => AuthError::DuplicateUsername,
            _ => AuthError::Database(e),
        })?;

        Ok(())
    }

    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                username,
                password_hash,
                role,
                created_at
            FROM users
            WHERE username = $1
            ORDER BY seq
            LIMIT 1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_username(&self, username: &UserName) -> AuthResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(username.as_str())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    username: String,
    password_hash: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        let username = UserName::new(&self.username)
            .map_err(|e| AuthError::Internal(format!("Invalid username: {}", e)))?;

        let role = self
            .role
            .parse::<UserRole>()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(User {
            username,
            password_hash: UserPassword::from_stored(self.password_hash),
            role,
            created_at: self.created_at,
        })
    }
}

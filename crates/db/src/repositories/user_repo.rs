//! Queries against `users`.

use bakehouse_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

const COLUMNS: &str = "id, name, email, password_hash, role, created_at, updated_at";

pub struct UserRepo;

impl UserRepo {
    /// Insert a user. A taken email fails with the `uq_users_email`
    /// unique violation.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        Self::insert(pool, input, "").await
    }

    /// Insert a user, or return the existing one if the email is taken.
    ///
    /// An existing row keeps its name, password hash and role. The
    /// self-assignment in `DO UPDATE` exists only so `RETURNING` yields
    /// the row; it does bump `updated_at`.
    pub async fn upsert_by_email(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        Self::insert(pool, input, "ON CONFLICT (email) DO UPDATE SET email = EXCLUDED.email").await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Exact, case-sensitive match.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM users WHERE email = $1"))
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    async fn insert(
        pool: &PgPool,
        input: &CreateUser,
        on_conflict: &str,
    ) -> Result<User, sqlx::Error> {
        let sql = format!(
            "INSERT INTO users (name, email, password_hash, role) \
             VALUES ($1, $2, $3, $4) {on_conflict} \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }
}

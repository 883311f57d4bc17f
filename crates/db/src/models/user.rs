//! Users: the database row and what clients are allowed to see of it.

use bakehouse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A `users` row. Holds the password hash, so it deliberately has no
/// `Serialize` impl; respond with [`UserResponse`] instead.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    /// `ADMIN` or `USER`, enforced by a CHECK constraint.
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public view of a user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(User { id, name, email, role, created_at, .. }: User) -> Self {
        Self {
            id,
            name,
            email,
            role,
            created_at,
        }
    }
}

/// Insert payload. The caller hashes the password first.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

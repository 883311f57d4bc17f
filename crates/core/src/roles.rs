//! Well-known role name constants.
//!
//! These must match the `CHECK` constraint in `20261001000002_create_users.sql`.

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_USER: &str = "USER";

/// All roles a user row may carry.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_USER];

/// Whether `role` is one of [`VALID_ROLES`].
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

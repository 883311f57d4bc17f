//! Domain types, errors, and rules shared by the Bakehouse backend crates.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates build on it.

pub mod error;
pub mod faq;
pub mod roles;
pub mod types;
pub mod validation;

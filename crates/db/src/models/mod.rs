//! Row types and request DTOs.
//!
//! Row structs derive `FromRow`; create/update DTOs derive `Deserialize`
//! and, where clients send them directly, `validator::Validate`.

pub mod faq;
pub mod user;

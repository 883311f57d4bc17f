pub mod auth;
pub mod faq;
pub mod user;

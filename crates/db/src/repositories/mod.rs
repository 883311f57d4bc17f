//! Query layer. Repositories are unit structs whose associated functions
//! take the pool (or a transaction) as their first argument.

pub mod faq_repo;
pub mod user_repo;

pub use faq_repo::FaqRepo;
pub use user_repo::UserRepo;

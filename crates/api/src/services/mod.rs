//! Domain services shared by HTTP handlers and the seeder.

pub mod faq;

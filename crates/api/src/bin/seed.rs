//! Seed the database with an admin account and a starter set of FAQs.
//!
//! Safe to re-run: the admin is upserted by email and FAQs are only
//! inserted into an empty table.

use bakehouse_api::auth::password::hash_password;
use bakehouse_api::services::faq::FaqService;
use bakehouse_core::faq::dense_positions;
use bakehouse_core::roles::ROLE_ADMIN;
use bakehouse_db::models::faq::CreateFaq;
use bakehouse_db::models::user::CreateUser;
use bakehouse_db::repositories::UserRepo;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_ADMIN_EMAIL: &str = "admin@bakery.ru";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Starter FAQs in display order.
const DEFAULT_FAQS: &[(&str, &str)] = &[
    (
        "What allergens do you use?",
        "We work with common allergens including gluten, dairy, eggs, and nuts. \
         Please inform us of any allergies when placing an order.",
    ),
    (
        "Do you offer delivery?",
        "Yes, we offer delivery for orders within the local area. \
         Delivery fees and availability depend on your location.",
    ),
    (
        "How far in advance should I order?",
        "We recommend ordering at least 3-5 days in advance for custom cakes. \
         Simple items may be available sooner.",
    ),
    (
        "Can you accommodate dietary restrictions?",
        "We offer vegan and gluten-free options for many of our products. \
         Please contact us to discuss your specific needs.",
    ),
    (
        "What payment methods do you accept?",
        "We accept cash, card, and online transfers. \
         Payment details will be confirmed when you place your order.",
    ),
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bakehouse_seed=info,bakehouse_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = bakehouse_db::create_pool(&database_url, 2)
        .await
        .expect("Failed to connect to database");

    bakehouse_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // --- Admin user ---
    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.into());
    let password =
        std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.into());
    let password_hash = hash_password(&password).expect("Failed to hash admin password");

    let admin = UserRepo::upsert_by_email(
        &pool,
        &CreateUser {
            name: "Admin".to_string(),
            email,
            password_hash,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await
    .expect("Failed to upsert admin user");
    tracing::info!(email = %admin.email, role = %admin.role, "Admin user ready");

    // --- FAQs ---
    let existing = FaqService::count(&pool)
        .await
        .expect("Failed to count FAQs");
    if existing > 0 {
        tracing::info!(existing, "FAQs already present, skipping FAQ seed");
        return;
    }

    let mut ids = Vec::with_capacity(DEFAULT_FAQS.len());
    for (question, answer) in DEFAULT_FAQS {
        let input = CreateFaq {
            question: (*question).to_string(),
            answer: (*answer).to_string(),
            is_published: Some(true),
        };
        let faq = FaqService::create(&pool, &input)
            .await
            .expect("Failed to create seed FAQ");
        ids.push(faq.id);
    }

    // Seeded entries start at position 0, matching what the dashboard emits.
    FaqService::reorder(&pool, &dense_positions(&ids))
        .await
        .expect("Failed to order seed FAQs");

    tracing::info!(count = ids.len(), "Seeded FAQ data");
}

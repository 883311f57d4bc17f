use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    bakehouse_db::health_check(&pool).await.unwrap();

    for table in ["users", "faqs"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// The `updated_at` trigger bumps the timestamp on every UPDATE.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_updated_at_trigger(pool: PgPool) {
    let (id, created): (uuid::Uuid, chrono::DateTime<chrono::Utc>) = sqlx::query_as(
        "INSERT INTO faqs (question, answer) VALUES ('Trigger?', 'Trigger answer') \
         RETURNING id, updated_at",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let (updated,): (chrono::DateTime<chrono::Utc>,) =
        sqlx::query_as("UPDATE faqs SET is_published = true WHERE id = $1 RETURNING updated_at")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();

    assert!(updated > created);
}

/// Negative positions are rejected by the schema as well as by validation.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sort_order_check_constraint(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO faqs (question, answer, sort_order) VALUES ('Negative?', 'Negative answer', -1)",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err());
}

use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify seed data.
#[sqlx::test(migrations = "./migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    palco_db::health_check(&pool).await.unwrap();

    // The three platform roles must be seeded.
    let names: Vec<(String,)> = sqlx::query_as("SELECT name FROM roles ORDER BY name")
        .fetch_all(&pool)
        .await
        .unwrap();
    let names: Vec<&str> = names.iter().map(|(n,)| n.as_str()).collect();
    assert_eq!(names, vec!["actor", "admin", "tutor"]);
}

/// Every entity table uses bigint primary keys.
#[sqlx::test(migrations = "./migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, data_type) in &rows {
        assert_eq!(
            data_type, "bigint",
            "Table {table}.id should be bigint, got {data_type}"
        );
    }
}

/// Unique constraints follow the `uq_` naming convention the API error
/// classifier relies on to map violations to 409.
#[sqlx::test(migrations = "./migrations")]
async fn test_unique_constraints_use_uq_prefix(pool: PgPool) {
    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT conname FROM pg_constraint
         WHERE contype = 'u' AND connamespace = 'public'::regnamespace",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (name,) in &rows {
        assert!(
            name.starts_with("uq_"),
            "Unique constraint {name} should start with uq_"
        );
    }
}

//! Live integration tests for spotdash-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. The `migrations` path is relative to the crate root
//! (`crates/spotdash-db/`), so `"../../migrations"` resolves to the
//! workspace migration directory.

use spotdash_core::SpotRecord;
use spotdash_db::{
    fetch_all, fetch_by_brand_substring, fetch_by_date_range, fetch_distinct_dates, insert_spot,
    suggest_brands,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn seed_record(brand: &str, date: &str, value: &str) -> SpotRecord {
    SpotRecord {
        brand: Some(brand.to_string()),
        date: Some(date.to_string()),
        value: Some(value.to_string()),
        support: Some("Canal Test".to_string()),
        ..SpotRecord::default()
    }
}

async fn seed(pool: &sqlx::PgPool, records: &[SpotRecord]) {
    for record in records {
        insert_spot(pool, record)
            .await
            .expect("seed insert should succeed");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn fetch_by_brand_substring_is_case_insensitive(pool: sqlx::PgPool) {
    seed(
        &pool,
        &[
            seed_record("Coca Cola", "2025-01-01", "100"),
            seed_record("Pepsi", "2025-01-01", "50"),
        ],
    )
    .await;

    let rows = fetch_by_brand_substring(&pool, "coca")
        .await
        .expect("query should succeed");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].brand.as_deref(), Some("Coca Cola"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn fetch_by_date_range_bounds_are_inclusive(pool: sqlx::PgPool) {
    seed(
        &pool,
        &[
            seed_record("A", "2025-01-01", "1"),
            seed_record("B", "2025-01-05", "1"),
            seed_record("C", "2025-01-10", "1"),
            seed_record("D", "2025-02-01", "1"),
        ],
    )
    .await;

    let rows = fetch_by_date_range(&pool, "2025-01-01", "2025-01-10")
        .await
        .expect("query should succeed");
    assert_eq!(rows.len(), 3);
}

#[sqlx::test(migrations = "../../migrations")]
async fn fetch_all_returns_every_row(pool: sqlx::PgPool) {
    seed(
        &pool,
        &[
            seed_record("A", "2025-01-01", "1"),
            seed_record("B", "2025-01-02", "2"),
        ],
    )
    .await;

    let rows = fetch_all(&pool).await.expect("query should succeed");
    assert_eq!(rows.len(), 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn fetch_distinct_dates_filters_by_year_prefix(pool: sqlx::PgPool) {
    seed(
        &pool,
        &[
            seed_record("A", "2025-01-02", "1"),
            seed_record("B", "2025-01-02", "1"),
            seed_record("C", "2025-01-01", "1"),
            seed_record("D", "2024-12-31", "1"),
        ],
    )
    .await;

    let dates = fetch_distinct_dates(&pool, "2025-")
        .await
        .expect("query should succeed");
    assert_eq!(dates, vec!["2025-01-01", "2025-01-02"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn suggest_brands_dedupes_and_caps(pool: sqlx::PgPool) {
    let mut records = Vec::new();
    for i in 0..12 {
        records.push(seed_record(&format!("Marca {i:02}"), "2025-01-01", "1"));
    }
    // Duplicate rows for the same brand must not produce duplicate suggestions.
    records.push(seed_record("Marca 00", "2025-01-02", "2"));
    seed(&pool, &records).await;

    let brands = suggest_brands(&pool, "marca", 8)
        .await
        .expect("query should succeed");
    assert_eq!(brands.len(), 8);
    assert_eq!(brands[0], "Marca 00");
    let mut deduped = brands.clone();
    deduped.dedup();
    assert_eq!(deduped, brands, "suggestions must be distinct");
}

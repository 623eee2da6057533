//! Database operations for the `spots` table.
//!
//! These are deliberately table-scan-shaped: the aggregation engine wants
//! the full (or date-filtered) row set in memory, and data volume is
//! bounded by one month of spots. No pagination at this layer.

use sqlx::PgPool;
use spotdash_core::SpotRecord;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `spots` table.
///
/// Every descriptive column is nullable text; coercion to numbers and
/// sentinel labels happens in the engine, not here.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SpotRow {
    pub product: Option<String>,
    pub brand: Option<String>,
    pub media: Option<String>,
    pub support: Option<String>,
    pub media_agency: Option<String>,
    pub creative_agency: Option<String>,
    pub uuid: Option<String>,
    pub date: Option<String>,
    pub ad_first_appearance: Option<String>,
    pub hour: Option<String>,
    pub minute: Option<String>,
    pub second: Option<String>,
    pub duration: Option<String>,
    pub value: Option<String>,
    pub public_value: Option<String>,
    pub quality: Option<String>,
    pub category: Option<String>,
    pub industry: Option<String>,
}

impl From<SpotRow> for SpotRecord {
    fn from(row: SpotRow) -> Self {
        SpotRecord {
            product: row.product,
            brand: row.brand,
            media: row.media,
            support: row.support,
            media_agency: row.media_agency,
            creative_agency: row.creative_agency,
            uuid: row.uuid,
            date: row.date,
            ad_first_appearance: row.ad_first_appearance,
            hour: row.hour,
            minute: row.minute,
            second: row.second,
            duration: row.duration,
            value: row.value,
            public_value: row.public_value,
            quality: row.quality,
            category: row.category,
            industry: row.industry,
        }
    }
}

const SPOT_COLUMNS: &str = "product, brand, media, support, media_agency, creative_agency, \
     uuid, date, ad_first_appearance, hour, minute, second, duration, \
     value, public_value, quality, category, industry";

fn into_records(rows: Vec<SpotRow>) -> Vec<SpotRecord> {
    rows.into_iter().map(SpotRecord::from).collect()
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Returns all spots whose brand contains `name`, case-insensitively.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn fetch_by_brand_substring(
    pool: &PgPool,
    name: &str,
) -> Result<Vec<SpotRecord>, DbError> {
    let rows = sqlx::query_as::<_, SpotRow>(&format!(
        "SELECT {SPOT_COLUMNS} FROM spots WHERE brand ILIKE $1 ORDER BY id"
    ))
    .bind(format!("%{name}%"))
    .fetch_all(pool)
    .await?;

    Ok(into_records(rows))
}

/// Returns all spots with `date` inside the inclusive ISO range.
///
/// Dates are stored as `YYYY-MM-DD` strings, so the text comparison is
/// chronological.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn fetch_by_date_range(
    pool: &PgPool,
    start_date: &str,
    end_date: &str,
) -> Result<Vec<SpotRecord>, DbError> {
    let rows = sqlx::query_as::<_, SpotRow>(&format!(
        "SELECT {SPOT_COLUMNS} FROM spots WHERE date >= $1 AND date <= $2 ORDER BY id"
    ))
    .bind(start_date)
    .bind(end_date)
    .fetch_all(pool)
    .await?;

    Ok(into_records(rows))
}

/// Returns the entire spots table.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn fetch_all(pool: &PgPool) -> Result<Vec<SpotRecord>, DbError> {
    let rows =
        sqlx::query_as::<_, SpotRow>(&format!("SELECT {SPOT_COLUMNS} FROM spots ORDER BY id"))
            .fetch_all(pool)
            .await?;

    Ok(into_records(rows))
}

/// Returns the distinct non-null dates carrying the given year prefix,
/// ascending.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn fetch_distinct_dates(
    pool: &PgPool,
    year_prefix: &str,
) -> Result<Vec<String>, DbError> {
    let dates = sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT date FROM spots \
         WHERE date IS NOT NULL AND date LIKE $1 \
         ORDER BY date ASC",
    )
    .bind(format!("{year_prefix}%"))
    .fetch_all(pool)
    .await?;

    Ok(dates)
}

/// Returns up to `limit` distinct brand names containing `partial`,
/// case-insensitively, ordered by name.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn suggest_brands(
    pool: &PgPool,
    partial: &str,
    limit: i64,
) -> Result<Vec<String>, DbError> {
    let brands = sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT brand FROM spots \
         WHERE brand IS NOT NULL AND brand ILIKE $1 \
         ORDER BY brand \
         LIMIT $2",
    )
    .bind(format!("%{partial}%"))
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(brands)
}

/// Inserts one spot row; used by the importer and by test seeds.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_spot(pool: &PgPool, record: &SpotRecord) -> Result<(), DbError> {
    sqlx::query(&format!(
        "INSERT INTO spots ({SPOT_COLUMNS}) VALUES \
         ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)"
    ))
    .bind(&record.product)
    .bind(&record.brand)
    .bind(&record.media)
    .bind(&record.support)
    .bind(&record.media_agency)
    .bind(&record.creative_agency)
    .bind(&record.uuid)
    .bind(&record.date)
    .bind(&record.ad_first_appearance)
    .bind(&record.hour)
    .bind(&record.minute)
    .bind(&record.second)
    .bind(&record.duration)
    .bind(&record.value)
    .bind(&record.public_value)
    .bind(&record.quality)
    .bind(&record.category)
    .bind(&record.industry)
    .execute(pool)
    .await?;
    Ok(())
}

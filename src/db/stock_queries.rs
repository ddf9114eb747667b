use bigdecimal::BigDecimal;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::{Stock, StockChanges};

pub const DEFAULT_LIMIT: i64 = 100;
pub const MAX_LIMIT: i64 = 500;

const UPSERT_BY_SYMBOL_SQL: &str = r#"
INSERT INTO stocks (symbol, name, price, updated_at)
VALUES ($1, $2, $3, NOW())
ON CONFLICT (symbol)
DO UPDATE SET name = $2, price = $3, updated_at = NOW()
RETURNING *
"#;

const UPSERT_BY_CIK_SQL: &str = r#"
INSERT INTO stocks (cik, name, price, updated_at)
VALUES ($1, $2, $3, NOW())
ON CONFLICT (cik)
DO UPDATE SET name = $2, price = $3, updated_at = NOW()
RETURNING *
"#;

pub async fn fetch_by_id(pool: &PgPool, id: i32) -> Result<Option<Stock>, sqlx::Error> {
    sqlx::query_as::<_, Stock>("SELECT * FROM stocks WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn fetch_by_symbol(pool: &PgPool, symbol: &str) -> Result<Option<Stock>, sqlx::Error> {
    sqlx::query_as::<_, Stock>("SELECT * FROM stocks WHERE symbol = $1")
        .bind(symbol)
        .fetch_optional(pool)
        .await
}

pub async fn fetch_by_cik(pool: &PgPool, cik: i32) -> Result<Option<Stock>, sqlx::Error> {
    sqlx::query_as::<_, Stock>("SELECT * FROM stocks WHERE cik = $1")
        .bind(cik)
        .fetch_optional(pool)
        .await
}

/// Storage-defined order; limit and offset are clamped to non-negative
/// values before binding.
pub async fn fetch_all(
    pool: &PgPool,
    limit: Option<i64>,
    offset: Option<i64>,
) -> Result<Vec<Stock>, sqlx::Error> {
    let (limit, offset) = clamp_page(limit, offset);
    sqlx::query_as::<_, Stock>("SELECT * FROM stocks LIMIT $1 OFFSET $2")
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

pub fn clamp_page(limit: Option<i64>, offset: Option<i64>) -> (i64, i64) {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(0, MAX_LIMIT);
    let offset = offset.unwrap_or(0).max(0);
    (limit, offset)
}

/// Single-statement insert. A uniqueness violation on symbol or cik comes
/// back as a plain database error; nothing here interprets it.
#[allow(dead_code)]
pub async fn insert(
    pool: &PgPool,
    symbol: Option<&str>,
    cik: Option<i32>,
    name: &str,
    price: Option<BigDecimal>,
) -> Result<Stock, sqlx::Error> {
    sqlx::query_as::<_, Stock>(
        r#"
        INSERT INTO stocks (symbol, name, price, cik, updated_at)
        VALUES ($1, $2, $3, $4, NOW())
        RETURNING *
        "#,
    )
    .bind(symbol)
    .bind(name)
    .bind(price)
    .bind(cik)
    .fetch_one(pool)
    .await
}

/// Dynamic UPDATE over the populated fields of `changes`; `updated_at` is
/// always refreshed. An empty change set falls back to a plain read.
#[allow(dead_code)]
pub async fn update(
    pool: &PgPool,
    id: i32,
    changes: &StockChanges,
) -> Result<Option<Stock>, sqlx::Error> {
    if changes.is_empty() {
        return fetch_by_id(pool, id).await;
    }

    update_builder(id, changes)
        .build_query_as::<Stock>()
        .fetch_optional(pool)
        .await
}

fn update_builder<'a>(id: i32, changes: &'a StockChanges) -> QueryBuilder<'a, Postgres> {
    let mut query_builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE stocks SET ");

    let mut separated = query_builder.separated(", ");

    if let Some(name) = &changes.name {
        separated.push("name = ");
        separated.push_bind_unseparated(name.as_str());
    }

    if let Some(price) = &changes.price {
        separated.push("price = ");
        separated.push_bind_unseparated(price);
    }

    query_builder.push(", updated_at = NOW() WHERE id = ");
    query_builder.push_bind(id);
    query_builder.push(" RETURNING *");

    query_builder
}

/// Constraint-driven upsert keyed on the unique symbol column: first call
/// with an unseen symbol inserts, later calls update name/price in place,
/// preserving id and symbol. Atomic, so concurrent upserts on the same key
/// cannot race each other into a duplicate insert.
pub async fn upsert_by_symbol(
    pool: &PgPool,
    symbol: &str,
    name: &str,
    price: Option<BigDecimal>,
) -> Result<Stock, sqlx::Error> {
    sqlx::query_as::<_, Stock>(UPSERT_BY_SYMBOL_SQL)
        .bind(symbol)
        .bind(name)
        .bind(price)
        .fetch_one(pool)
        .await
}

/// Same contract as `upsert_by_symbol`, keyed on the cik column.
pub async fn upsert_by_cik(
    pool: &PgPool,
    cik: i32,
    name: &str,
    price: Option<BigDecimal>,
) -> Result<Stock, sqlx::Error> {
    sqlx::query_as::<_, Stock>(UPSERT_BY_CIK_SQL)
        .bind(cik)
        .bind(name)
        .bind(price)
        .fetch_one(pool)
        .await
}

// No route exposes deletion; kept for completeness of the access layer.
#[allow(dead_code)]
pub async fn delete(pool: &PgPool, id: i32) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM stocks WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

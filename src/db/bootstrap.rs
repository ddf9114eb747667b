use sqlx::{Connection, PgPool};
use tracing::info;

use crate::errors::AppError;

const CREATE_STOCKS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS stocks (
    id SERIAL PRIMARY KEY,
    symbol VARCHAR(10) UNIQUE,
    name VARCHAR(255) NOT NULL,
    price NUMERIC(10,2),
    cik INTEGER UNIQUE,
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

/// Sample rows inserted when the table is empty at startup, for parity with
/// existing deployments: (symbol, name, price, cik).
pub const SEED_STOCKS: [(&str, &str, &str, i32); 3] = [
    ("AAPL", "Apple Inc.", "150.00", 320193),
    ("GOOGL", "Alphabet Inc.", "2800.00", 1652044),
    ("MSFT", "Microsoft Corporation", "300.00", 789019),
];

/// Liveness check plus idempotent schema bootstrap. Any failure here is
/// fatal to startup; the caller halts the process.
pub async fn run(pool: &PgPool) -> Result<(), AppError> {
    ping(pool).await?;

    sqlx::query(CREATE_STOCKS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| AppError::StorageUnavailable(format!("failed to create stocks table: {e}")))?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM stocks")
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::StorageUnavailable(format!("failed to inspect stocks table: {e}")))?;

    if count == 0 {
        seed(pool).await?;
        info!("Seeded stocks table with {} sample rows", SEED_STOCKS.len());
    }

    info!("Database schema initialized");
    Ok(())
}

async fn ping(pool: &PgPool) -> Result<(), AppError> {
    let mut conn = pool
        .acquire()
        .await
        .map_err(|e| AppError::StorageUnavailable(format!("failed to acquire a connection: {e}")))?;
    conn.ping()
        .await
        .map_err(|e| AppError::StorageUnavailable(format!("liveness check failed: {e}")))
}

async fn seed(pool: &PgPool) -> Result<(), AppError> {
    for (symbol, name, price, cik) in SEED_STOCKS {
        sqlx::query("INSERT INTO stocks (symbol, name, price, cik) VALUES ($1, $2, $3::NUMERIC, $4)")
            .bind(symbol)
            .bind(name)
            .bind(price)
            .bind(cik)
            .execute(pool)
            .await
            .map_err(|e| {
                AppError::StorageUnavailable(format!("failed to seed stocks table: {e}"))
            })?;
    }
    Ok(())
}

use sqlx::PgPool;
use tracing::error;

use crate::db;
use crate::errors::AppError;
use crate::models::{price_to_decimal, Stock, UpsertStockByCikRequest, UpsertStockRequest};

pub async fn list(
    pool: &PgPool,
    limit: Option<i64>,
    offset: Option<i64>,
) -> Result<Vec<Stock>, AppError> {
    db::stock_queries::fetch_all(pool, limit, offset)
        .await
        .map_err(|e| {
            error!("Failed to fetch stocks: {}", e);
            AppError::query("fetch stocks", e)
        })
}

pub async fn get(pool: &PgPool, id: i32) -> Result<Option<Stock>, AppError> {
    db::stock_queries::fetch_by_id(pool, id).await.map_err(|e| {
        error!("Failed to fetch stock {}: {}", id, e);
        AppError::query("fetch stock", e)
    })
}

pub async fn get_by_symbol(pool: &PgPool, symbol: &str) -> Result<Option<Stock>, AppError> {
    db::stock_queries::fetch_by_symbol(pool, symbol)
        .await
        .map_err(|e| {
            error!("Failed to fetch stock by symbol {}: {}", symbol, e);
            AppError::query("fetch stock by symbol", e)
        })
}

pub async fn get_by_cik(pool: &PgPool, cik: i32) -> Result<Option<Stock>, AppError> {
    db::stock_queries::fetch_by_cik(pool, cik)
        .await
        .map_err(|e| {
            error!("Failed to fetch stock by CIK {}: {}", cik, e);
            AppError::query("fetch stock by CIK", e)
        })
}

pub async fn upsert(pool: &PgPool, req: UpsertStockRequest) -> Result<Stock, AppError> {
    let price = price_to_decimal(req.price);
    db::stock_queries::upsert_by_symbol(pool, &req.symbol, &req.name, price)
        .await
        .map_err(|e| {
            error!("Failed to upsert stock {}: {}", req.symbol, e);
            AppError::mutation("upsert stock", e)
        })
}

pub async fn upsert_by_cik(pool: &PgPool, req: UpsertStockByCikRequest) -> Result<Stock, AppError> {
    let price = price_to_decimal(req.price);
    db::stock_queries::upsert_by_cik(pool, req.cik, &req.name, price)
        .await
        .map_err(|e| {
            error!("Failed to upsert stock by CIK {}: {}", req.cik, e);
            AppError::mutation("upsert stock by CIK", e)
        })
}

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row in the stocks table. `symbol` and `cik` are each unique when
/// present; a row created through one upsert variant may lack the other key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub id: i32,
    pub symbol: Option<String>,
    pub name: String,
    pub price: Option<BigDecimal>,
    pub cik: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpsertStockRequest {
    pub symbol: String,
    pub name: String,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpsertStockByCikRequest {
    pub cik: i32,
    pub name: String,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Column changes applied by the dynamic UPDATE builder. Only populated
/// fields are written; `updated_at` is always refreshed.
#[derive(Debug, Clone, Default)]
pub struct StockChanges {
    pub name: Option<String>,
    pub price: Option<BigDecimal>,
}

impl StockChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

pub fn price_to_decimal(price: Option<f64>) -> Option<BigDecimal> {
    price.and_then(|p| BigDecimal::from_str(&p.to_string()).ok())
}

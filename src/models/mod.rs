mod stock;

pub use stock::price_to_decimal;
pub use stock::{ListParams, Stock, StockChanges, UpsertStockByCikRequest, UpsertStockRequest};

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::info;

use crate::errors::AppError;
use crate::models::{ListParams, Stock, UpsertStockByCikRequest, UpsertStockRequest};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stocks))
        .route("/upsert", post(upsert_stock))
        .route("/upsert-by-cik", post(upsert_stock_by_cik))
        .route("/:id", get(get_stock))
        .route("/symbol/:symbol", get(get_stock_by_symbol))
        .route("/cik/:cik", get(get_stock_by_cik))
}

pub async fn list_stocks(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Stock>>, AppError> {
    info!("GET /stocks - Listing stocks");
    let stocks = services::stock_service::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(stocks))
}

pub async fn get_stock(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Option<Stock>>, AppError> {
    info!("GET /stocks/{} - Getting stock", id);
    let stock = services::stock_service::get(&state.pool, id).await?;
    Ok(Json(stock))
}

pub async fn get_stock_by_symbol(
    Path(symbol): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Option<Stock>>, AppError> {
    info!("GET /stocks/symbol/{} - Getting stock by symbol", symbol);
    let stock = services::stock_service::get_by_symbol(&state.pool, &symbol).await?;
    Ok(Json(stock))
}

pub async fn get_stock_by_cik(
    Path(cik): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<Option<Stock>>, AppError> {
    info!("GET /stocks/cik/{} - Getting stock by CIK", cik);
    let stock = services::stock_service::get_by_cik(&state.pool, cik).await?;
    Ok(Json(stock))
}

pub async fn upsert_stock(
    State(state): State<AppState>,
    Json(req): Json<UpsertStockRequest>,
) -> Result<Json<Stock>, AppError> {
    info!("POST /stocks/upsert - Upserting stock {}", req.symbol);
    let stock = services::stock_service::upsert(&state.pool, req).await?;
    Ok(Json(stock))
}

pub async fn upsert_stock_by_cik(
    State(state): State<AppState>,
    Json(req): Json<UpsertStockByCikRequest>,
) -> Result<Json<Stock>, AppError> {
    info!("POST /stocks/upsert-by-cik - Upserting stock by CIK {}", req.cik);
    let stock = services::stock_service::upsert_by_cik(&state.pool, req).await?;
    Ok(Json(stock))
}

use crate::{error::AppError, AppState};
use api_client::HealthResponse;
use axum::{extract::State, Json};
use core_types::{Etf, EtfField, Instrument, SellTrade, SortDirection, TradeResult};
use listing::SortMode;
use std::sync::Arc;

/// # GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// # GET /api/etfs
/// Every fund, in dataset order.
pub async fn get_etfs(State(state): State<Arc<AppState>>) -> Json<Vec<Etf>> {
    Json(state.etfs.clone())
}

/// # GET /api/etfs/expense-ratio
/// The dataset ordered by expense ratio, cheapest first.
pub async fn get_expense_ratio_etfs(State(state): State<Arc<AppState>>) -> Json<Vec<Etf>> {
    let mode = SortMode::ByField(EtfField::ExpenseRatio, SortDirection::Ascending);
    Json(listing::apply(&state.etfs, mode).into_iter().cloned().collect())
}

/// # GET /api/portfolio/instruments
pub async fn get_portfolio_instruments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Instrument>>, AppError> {
    Ok(Json(state.executor.instruments().await?))
}

/// # POST /api/trades
pub async fn execute_trade(
    State(state): State<Arc<AppState>>,
    Json(trade): Json<SellTrade>,
) -> Result<Json<TradeResult>, AppError> {
    tracing::info!(
        instrument_id = %trade.instrument_id,
        quantity = trade.quantity,
        target_price = %trade.target_price,
        client_id = %trade.client_id,
        "Trade received"
    );
    let result = state.executor.execute(&trade).await?;
    Ok(Json(result))
}

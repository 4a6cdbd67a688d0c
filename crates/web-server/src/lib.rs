//! # Web Server
//!
//! The mock trade desk backend: serves the ETF dataset and books sell trades against an
//! in-memory portfolio through the `SimulatedExecutor`.

use axum::{
    routing::{get, post},
    Router,
};
use configuration::Config;
use core_types::Etf;
use executor::{Executor, Portfolio, SimulatedExecutor};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

use crate::error::AppError;

/// The shared application state that all handlers can access.
pub struct AppState {
    pub etfs: Vec<Etf>,
    pub executor: Arc<dyn Executor>,
}

impl AppState {
    pub fn new(etfs: Vec<Etf>, executor: Arc<dyn Executor>) -> Self {
        Self { etfs, executor }
    }

    /// Builds the state described by `config`: the dataset file and the seeded portfolio.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let etfs = load_dataset(&config.server.dataset_path)?;
        let portfolio = Portfolio::new(config.portfolio.holdings.clone());
        Ok(Self::new(etfs, Arc::new(SimulatedExecutor::new(portfolio))))
    }
}

/// Reads the ETF dataset (a JSON array of records) from `path`.
pub fn load_dataset(path: &Path) -> Result<Vec<Etf>, AppError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| AppError::Dataset(format!("{}: {}", path.display(), e)))?;
    let etfs: Vec<Etf> =
        serde_json::from_str(&text).map_err(|e| AppError::Dataset(format!("{}: {}", path.display(), e)))?;
    tracing::info!(path = %path.display(), funds = etfs.len(), "ETF dataset loaded");
    Ok(etfs)
}

/// The application routes.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(api_client::HEALTH_PATH, get(handlers::health))
        .route(api_client::ETFS_PATH, get(handlers::get_etfs))
        .route(api_client::EXPENSE_RATIO_ETFS_PATH, get(handlers::get_expense_ratio_etfs))
        .route(api_client::PORTFOLIO_INSTRUMENTS_PATH, get(handlers::get_portfolio_instruments))
        .route(api_client::TRADES_PATH, post(handlers::execute_trade))
        .with_state(state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Serves the routes on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> anyhow::Result<()> {
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// The main function to configure and run the web server.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState::from_config(config)?);
    let listener = TcpListener::bind(config.server.addr).await?;
    serve(listener, state).await
}

use api_client::ApiClient;
use core_types::{Etf, EtfField, SortDirection};
use listing::{ListStore, SortMode};
use std::sync::Arc;

/// Heading shown above the ETF table.
pub const TITLE: &str = "ETFList";

/// Message shown in place of the table when the ETFs cannot be fetched.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load ETFs";

/// The buttons above the ETF table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortControl {
    All,
    ExpenseRatio,
    Aum,
    ThreeMonthReturn,
}

impl SortControl {
    pub fn label(&self) -> &'static str {
        match self {
            SortControl::All => "All",
            SortControl::ExpenseRatio => "ER",
            SortControl::Aum => "AUM Bill",
            SortControl::ThreeMonthReturn => "3M TR",
        }
    }

    pub fn all() -> &'static [SortControl] {
        &[
            SortControl::All,
            SortControl::ExpenseRatio,
            SortControl::Aum,
            SortControl::ThreeMonthReturn,
        ]
    }

    /// The sort mode a click on this control selects.
    ///
    /// Cheapest funds first for ER; largest funds and best performers first otherwise.
    pub fn mode(&self) -> SortMode<EtfField> {
        match self {
            SortControl::All => SortMode::Original,
            SortControl::ExpenseRatio => SortMode::ByField(EtfField::ExpenseRatio, SortDirection::Ascending),
            SortControl::Aum => SortMode::ByField(EtfField::AumBillions, SortDirection::Descending),
            SortControl::ThreeMonthReturn => {
                SortMode::ByField(EtfField::ThreeMonthReturn, SortDirection::Descending)
            }
        }
    }
}

/// Which dataset the list view loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EtfSource {
    /// Every fund, in the order the source publishes them.
    #[default]
    All,
    /// The server's expense-ratio view.
    ExpenseRatio,
}

/// The sortable ETF table: a fetch source feeding a `ListStore`.
pub struct EtfListView {
    api_client: Arc<dyn ApiClient>,
    store: ListStore<Etf>,
}

impl EtfListView {
    pub fn new(api_client: Arc<dyn ApiClient>) -> Self {
        Self {
            api_client,
            store: ListStore::new(),
        }
    }

    /// Fetches `source` and makes it the canonical order.
    ///
    /// On failure the table is emptied and `LOAD_FAILURE_MESSAGE` is shown instead.
    pub async fn load(&mut self, source: EtfSource) {
        let fetched = match source {
            EtfSource::All => self.api_client.fetch_all_etfs().await,
            EtfSource::ExpenseRatio => self.api_client.fetch_expense_ratio_etfs().await,
        };

        match fetched {
            Ok(etfs) => {
                tracing::info!(?source, rows = etfs.len(), "ETFs loaded");
                self.store.load(etfs);
            }
            Err(e) => {
                tracing::error!(?source, error = %e, "Failed to fetch ETFs");
                self.store.fail(LOAD_FAILURE_MESSAGE);
            }
        }
    }

    pub async fn load_all(&mut self) {
        self.load(EtfSource::All).await;
    }

    pub async fn load_expense_ratio_view(&mut self) {
        self.load(EtfSource::ExpenseRatio).await;
    }

    /// Handles a click on one of the sort controls.
    pub fn click(&mut self, control: SortControl) {
        tracing::debug!(control = control.label(), "Sort control clicked");
        self.store.select_sort(control.mode());
    }

    /// The rows in display order.
    pub fn rows(&self) -> Vec<&Etf> {
        self.store.current_view()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.store.error_message()
    }

    pub fn store(&self) -> &ListStore<Etf> {
        &self.store
    }
}

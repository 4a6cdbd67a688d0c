//! # Desk
//!
//! The application state objects of the trade desk: the sortable ETF list view, the
//! sell-trade form, and the terminal rendering of both.
//!
//! Each view is an explicit state object; every mutating call recomputes whatever the
//! renderer reads next.

pub mod etf_list;
pub mod sell_trade;
pub mod table;
pub mod validation;

pub use etf_list::{EtfListView, EtfSource, SortControl};
pub use sell_trade::{SellTradeForm, SellTradeInput, SubmitOutcome};

//! # Listing
//!
//! The ordering engine behind the ETF table: a pure sort engine and the list store
//! that holds a canonical sequence plus its currently displayed ordering.
//!
//! ## Architectural Principles
//!
//! - **Pure ordering:** `engine::order` and `engine::apply` never mutate their input and
//!   always start from the canonical sequence, so sorting never compounds.
//! - **Permutation invariant:** `ListStore` keeps its view as a permutation of canonical
//!   indices. Rows are never added, dropped or duplicated by a sort.
//!
//! ## Public API
//!
//! - `Sortable`: how a record exposes its sortable columns.
//! - `SortMode`: `Original` or `ByField(field, direction)`.
//! - `order` / `apply`: the sort engine.
//! - `ListStore`: the state holder consumed by views.

pub mod engine;
mod etf;
pub mod store;

pub use core_types::SortDirection;
pub use engine::{SortMode, SortValue, Sortable, apply, order};
pub use store::ListStore;

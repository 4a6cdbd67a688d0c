//! # Executor Crate
//!
//! This crate provides trade execution and portfolio state management for the sell flow.
//! It defines a generic `Executor` trait, a `SimulatedExecutor` that plays the part of the
//! trade service against an in-memory `Portfolio`, and a `LiveExecutor` that forwards
//! trades to the trade desk API.
//!
//! ## Architectural Principles
//!
//! - **State vs. Logic Decoupling:** `Portfolio` is the state machine that applies a sell
//!   to the holdings; the executors decide whether a trade is acceptable and produce the
//!   receipt.
//! - **Execution Abstraction:** Views and the mock backend are agnostic about whether
//!   they are executing against the simulation or a remote service.
//!
//! ## Public API
//!
//! - `Executor`: The core trait for all execution engines.
//! - `SimulatedExecutor`: The in-memory trade service.
//! - `LiveExecutor`: The HTTP-backed trade service.
//! - `Portfolio`: The holdings of a trading account.
//! - `ExecutorError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod exchange;
pub mod portfolio;

// Re-export the key components to provide a clean, public-facing API.
pub use error::ExecutorError;
pub use exchange::{Executor, LiveExecutor, SimulatedExecutor};
pub use portfolio::Portfolio;

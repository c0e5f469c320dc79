//! # BisectKV
//!
//! A sorted key/data table with observable binary-search lookups:
//! - Deterministic or caller-supplied population, validated once
//! - Canonical closed-interval bisection, free of I/O
//! - Per-iteration probe observer, wired to `tracing` at the table level
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌────────────────┐
//! │    Config    │ ──▶ │  SortedTable  │ ──▶ │  Search Core   │
//! │ (population) │     │  (Vec<Entry>) │     │ (bisect, pure) │
//! └──────────────┘     └───────────────┘     └───────┬────────┘
//!                                                    │
//!                                                    ▼
//!                                            ┌────────────────┐
//!                                            │ Probe Observer │
//!                                            │   (tracing)    │
//!                                            └────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod search;
pub mod table;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use error::{BisectError, Result};
pub use search::{bisect, bisect_observed, Probe};
pub use table::{Entry, SortedTable};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of BisectKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

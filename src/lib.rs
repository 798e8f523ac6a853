//! # Backoffice Query Core
//!
//! The query-state core of a live-dealer back-office dashboard: quick
//! date-range resolution, per-page filter schemas, and session-scoped
//! persistence of last-used filter parameters.
//!
//! ## Features
//!
//! - **Quick ranges**: `today`, `yesterday`, `week`, `month`, `last7`,
//!   `last30` resolved to inclusive calendar-date pairs; unrecognized
//!   keywords fall back to `today`
//! - **Schema catalog**: typed filter-field layouts for the seven report
//!   pages (transactions, bets, players, commission records, deposits,
//!   withdrawals, risk alerts), validated at registration
//! - **Query state**: save/restore/clear of submitted filters per page and
//!   session, failure-masking by contract with explicit degraded outcomes
//!
//! ## Architecture
//!
//! ```text
//! Report page → SchemaCatalog (render filters)
//!            → QuickRange::resolve (shortcut buttons)
//!            → QueryStateStore → SessionStore (SQLite)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use backoffice_query::{Config, QueryStateStore, SchemaCatalog, SqliteStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let backend = SqliteStore::new(&config.database).await?;
//!     let store = QueryStateStore::with_namespace(backend, config.query.namespace.clone());
//!     let catalog = SchemaCatalog::new();
//!
//!     let schema = catalog.get("bets").expect("builtin page");
//!     let remembered = store.restore("sess-1", "bets").await.into_params();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Field schema catalog for report-page filter forms.
pub mod catalog;
/// Configuration management.
pub mod config;
/// Error types and result aliases for the application.
pub mod error;
/// Quick date-range resolution.
pub mod range;
/// Session-scoped query-state persistence.
pub mod store;

pub use catalog::{FieldDescriptor, FieldKind, PageSchema, SchemaCatalog, SelectOption};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use range::{resolve_keyword, DateRange, QuickRange, WeekStart};
pub use store::{
    to_query_string, QueryParams, QueryStateStore, RestoreOutcome, SessionStore, SqliteStore,
    WriteOutcome,
};
